//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::SectionList;

/// Sections a wagon stops at, in platform order.
#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<String>,
}

impl SectionsResponse {
    pub fn from_sections(sections: &SectionList) -> Self {
        Self {
            sections: sections.to_vec(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
