//! Built-in listing pages
//!
//! These are plain values. Nothing here touches the network; pass a preset to
//! [`crate::Harvester`] to collect or download from it.

/// Archived copy of the NYU math student-resources wiki
pub const ARCHIVED_WIKI_PREFIX: &str =
    "https://web.archive.org/web/20171017231511/http://math.nyu.edu/student_resources/wwiki/index.php/";

/// Filter selecting problem pages on the archived wiki
pub const PROBLEM_FILTER: &str = "_Problem_";

/// A named listing page with its link filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub listing_url: String,
    pub contains: &'static str,
}

impl Preset {
    /// Geophysical fluid dynamics problem pages
    pub fn geophysical_fluid_dynamics() -> Self {
        Self {
            name: "gfd",
            listing_url: wiki_category("Geophysical_Fluid_Dynamics"),
            contains: PROBLEM_FILTER,
        }
    }

    /// Advanced calculus problem pages
    pub fn advanced_calculus() -> Self {
        Self {
            name: "advanced-calculus",
            listing_url: wiki_category("Advanced_Calculus"),
            contains: PROBLEM_FILTER,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::geophysical_fluid_dynamics(), Self::advanced_calculus()]
    }

    /// Looks up a preset by name
    pub fn find(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|preset| preset.name == name)
    }
}

fn wiki_category(category: &str) -> String {
    format!("{}Category:{}", ARCHIVED_WIKI_PREFIX, category)
}
