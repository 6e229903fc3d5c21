//! Section queries and their results.

use std::sync::Arc;

use super::error::QueryError;
use super::{StationPrefix, TrainNumber, WagonNumber};

/// Ordered section identifiers for one wagon, in document order.
///
/// Shared and immutable: handing a list out of the cache never copies it and
/// callers can't change what later lookups see.
pub type SectionList = Arc<[String]>;

/// A request for the platform sections of one wagon at one station.
///
/// Queries are compared structurally, so they double as cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub station: StationPrefix,
    pub train: TrainNumber,
    pub wagon: WagonNumber,
}

impl Query {
    /// Create a query from already validated parts.
    pub fn new(station: StationPrefix, train: TrainNumber, wagon: WagonNumber) -> Self {
        Self {
            station,
            train,
            wagon,
        }
    }

    /// Validate raw parameters into a query.
    ///
    /// Parameters are checked station first, then train, then wagon; the
    /// first failure is returned.
    pub fn parse(station: &str, train: i64, wagon: i64) -> Result<Self, QueryError> {
        Ok(Self {
            station: StationPrefix::parse(station)?,
            train: TrainNumber::new(train)?,
            wagon: WagonNumber::new(wagon)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_valid() {
        let query = Query::parse("ABC", 456, 7).unwrap();
        assert_eq!(query.station.as_str(), "ABC");
        assert_eq!(query.train.get(), 456);
        assert_eq!(query.wagon.get(), 7);
    }

    #[test]
    fn first_failure_wins() {
        assert!(matches!(
            Query::parse("A", 5, 99),
            Err(QueryError::Station(_))
        ));
        assert!(matches!(
            Query::parse("AB", 5, 99),
            Err(QueryError::Train(_))
        ));
        assert!(matches!(
            Query::parse("AB", 11, 99),
            Err(QueryError::Wagon(_))
        ));
    }

    #[test]
    fn structural_equality() {
        let a = Query::parse("ABC", 456, 7).unwrap();
        let b = Query::parse("ABC", 456, 7).unwrap();
        let c = Query::parse("ABC", 456, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }
}
