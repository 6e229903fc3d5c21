//! Domain types for the section lookup service.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `Query` can trust its parameters are within the accepted
//! business ranges.

mod error;
mod query;
mod station;
mod train;

pub use error::QueryError;
pub use query::{Query, SectionList};
pub use station::{InvalidStationPrefix, StationPrefix};
pub use train::{InvalidTrainNumber, InvalidWagonNumber, TrainNumber, WagonNumber};
