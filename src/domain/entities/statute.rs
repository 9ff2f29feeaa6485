use serde::{Deserialize, Serialize};

/// Legal statute in the static reference dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statute {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub external_link: String,
}

impl Statute {
    pub fn new(id: &str, name: &str, abbreviation: &str, external_link: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            external_link: external_link.to_string(),
        }
    }

    /// Case-insensitive substring match against name or abbreviation.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.abbreviation.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Deserialize)]
pub struct StatuteSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// DTO for statute list response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatuteListResponse {
    pub statutes: Vec<Statute>,
    pub count: usize,
}
