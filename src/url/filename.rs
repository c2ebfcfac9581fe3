use crate::{UrlError, UrlResult};
use url::Url;

/// Derives the local file name for a downloaded link
///
/// The last non-empty path segment is used verbatim. Query strings and
/// fragments never reach the file name, and percent-encoded separators stay
/// encoded, so the result cannot escape the output directory.
///
/// # Arguments
///
/// * `link` - An absolute link
///
/// # Returns
///
/// * `Ok(String)` - The file name
/// * `Err(UrlError)` - The link has no usable final segment
///
/// # Examples
///
/// ```
/// use link_harvester::url::local_filename;
///
/// let name = local_filename("https://example.com/data/cat_1.csv?v=2").unwrap();
/// assert_eq!(name, "cat_1.csv");
/// ```
pub fn local_filename(link: &str) -> UrlResult<String> {
    let url = Url::parse(link).map_err(|e| UrlError::Parse(format!("{}: {}", link, e)))?;

    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| UrlError::NoFilename(link.to_string()))?;

    if segment == "." || segment == ".." || segment.contains('\\') {
        return Err(UrlError::UnsafeFilename {
            url: link.to_string(),
            name: segment.to_string(),
        });
    }

    Ok(segment.to_string())
}
