//! Station prefix type.

use std::fmt;

/// Error returned when parsing an invalid station prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid station shortcode")]
pub struct InvalidStationPrefix;

/// A station shortcode (RIL100 code or a leading part of one).
///
/// Data files are named after the station they describe, so the prefix is
/// matched against file names case-sensitively. A prefix is between 2 and 5
/// characters long.
///
/// # Examples
///
/// ```
/// use section_server::domain::StationPrefix;
///
/// let ff = StationPrefix::parse("FF").unwrap();
/// assert_eq!(ff.as_str(), "FF");
///
/// // Wrong length is rejected
/// assert!(StationPrefix::parse("F").is_err());
/// assert!(StationPrefix::parse("FFHBF").is_ok());
/// assert!(StationPrefix::parse("FFHBFX").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationPrefix(String);

impl StationPrefix {
    /// Shortest accepted prefix, in characters.
    pub const MIN_LEN: usize = 2;

    /// Longest accepted prefix, in characters.
    pub const MAX_LEN: usize = 5;

    /// Parse a station prefix, checking its length only.
    pub fn parse(s: &str) -> Result<Self, InvalidStationPrefix> {
        let len = s.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(InvalidStationPrefix);
        }
        Ok(StationPrefix(s.to_string()))
    }

    /// Returns the prefix as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationPrefix({})", self.0)
    }
}

impl fmt::Display for StationPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
