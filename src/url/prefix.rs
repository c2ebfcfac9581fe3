use crate::{UrlError, UrlResult};
use url::Url;

/// Derives the scheme+host prefix used to absolutize relative hrefs
///
/// The path, query and fragment of the listing URL are discarded. Userinfo
/// and a non-default port are kept so that links resolve against the same
/// server with the same credentials.
///
/// # Arguments
///
/// * `url_str` - The listing page URL
///
/// # Returns
///
/// * `Ok(String)` - The prefix, without a trailing slash
/// * `Err(UrlError)` - The URL is malformed, not HTTP(S), or has no host
///
/// # Examples
///
/// ```
/// use link_harvester::url::derive_prefix;
///
/// let prefix = derive_prefix("https://example.com/files/index.html?page=2").unwrap();
/// assert_eq!(prefix, "https://example.com");
///
/// let prefix = derive_prefix("http://127.0.0.1:8080/listing").unwrap();
/// assert_eq!(prefix, "http://127.0.0.1:8080");
/// ```
pub fn derive_prefix(url_str: &str) -> UrlResult<String> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if !is_http(&url) {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    let host = url.host_str().ok_or(UrlError::MissingDomain)?;

    let userinfo = match (url.username(), url.password()) {
        ("", None) => String::new(),
        (user, None) => format!("{}@", user),
        (user, Some(password)) => format!("{}:{}@", user, password),
    };

    Ok(match url.port() {
        Some(port) => format!("{}://{}{}:{}", url.scheme(), userinfo, host, port),
        None => format!("{}://{}{}", url.scheme(), userinfo, host),
    })
}

/// Turns an href into an absolute link by prepending the prefix
///
/// Only hrefs that parse as HTTP(S) URLs are returned unchanged, and
/// protocol-relative hrefs (`//host/path`) borrow the prefix's scheme.
/// Everything else, including colon-bearing names such as
/// `Category:Files`, gets the prefix. A `/` is inserted when neither side
/// supplies one, so `a.csv` against `https://example.com` gives
/// `https://example.com/a.csv` rather than a mangled host.
///
/// # Examples
///
/// ```
/// use link_harvester::url::absolutize;
///
/// assert_eq!(absolutize("https://example.com", "/a/b.csv"), "https://example.com/a/b.csv");
/// assert_eq!(absolutize("https://example.com", "https://other.org/c.csv"), "https://other.org/c.csv");
/// assert_eq!(absolutize("https://example.com", "//cdn.example.com/d.csv"), "https://cdn.example.com/d.csv");
/// ```
pub fn absolutize(prefix: &str, href: &str) -> String {
    if href.starts_with("//") {
        return match prefix.split_once("://") {
            Some((scheme, _)) => format!("{}:{}", scheme, href),
            None => format!("{}{}", prefix, href),
        };
    }

    if Url::parse(href).map(|url| is_http(&url)).unwrap_or(false) {
        return href.to_string();
    }

    let needs_separator =
        !prefix.ends_with('/') && !href.starts_with(['/', '?', '#']);
    if needs_separator {
        format!("{}/{}", prefix, href)
    } else {
        format!("{}{}", prefix, href)
    }
}

fn is_http(url: &Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}
