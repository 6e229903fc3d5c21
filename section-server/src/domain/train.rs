//! Train and wagon number types.

use std::fmt;

/// Error returned for a train number outside the accepted range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid train Number")]
pub struct InvalidTrainNumber;

/// Error returned for a wagon number outside the accepted range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid number")]
pub struct InvalidWagonNumber;

/// A train number, strictly between 10 and 9999.
///
/// # Examples
///
/// ```
/// use section_server::domain::TrainNumber;
///
/// assert_eq!(TrainNumber::new(2310).unwrap().get(), 2310);
/// assert!(TrainNumber::new(10).is_err());
/// assert!(TrainNumber::new(9999).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainNumber(u16);

impl TrainNumber {
    pub fn new(n: i64) -> Result<Self, InvalidTrainNumber> {
        if n <= 10 || n >= 9999 {
            return Err(InvalidTrainNumber);
        }
        Ok(TrainNumber(n as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wagon (coach) position number within a train, from 0 to 98.
///
/// # Examples
///
/// ```
/// use section_server::domain::WagonNumber;
///
/// assert_eq!(WagonNumber::new(0).unwrap().get(), 0);
/// assert!(WagonNumber::new(99).is_err());
/// assert!(WagonNumber::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WagonNumber(u8);

impl WagonNumber {
    pub fn new(n: i64) -> Result<Self, InvalidWagonNumber> {
        if !(0..99).contains(&n) {
            return Err(InvalidWagonNumber);
        }
        Ok(WagonNumber(n as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for WagonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_number_boundaries() {
        assert!(TrainNumber::new(10).is_err());
        assert!(TrainNumber::new(11).is_ok());
        assert!(TrainNumber::new(9998).is_ok());
        assert!(TrainNumber::new(9999).is_err());
        assert!(TrainNumber::new(0).is_err());
        assert!(TrainNumber::new(-456).is_err());
        assert!(TrainNumber::new(i64::MAX).is_err());
    }

    #[test]
    fn wagon_number_boundaries() {
        assert!(WagonNumber::new(-1).is_err());
        assert!(WagonNumber::new(0).is_ok());
        assert!(WagonNumber::new(98).is_ok());
        assert!(WagonNumber::new(99).is_err());
        assert!(WagonNumber::new(i64::MIN).is_err());
    }

    #[test]
    fn display_is_plain_decimal() {
        assert_eq!(TrainNumber::new(456).unwrap().to_string(), "456");
        assert_eq!(WagonNumber::new(7).unwrap().to_string(), "7");
        assert_eq!(WagonNumber::new(0).unwrap().to_string(), "0");
    }

    #[test]
    fn error_messages() {
        assert_eq!(InvalidTrainNumber.to_string(), "Invalid train Number");
        assert_eq!(InvalidWagonNumber.to_string(), "Invalid number");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn train_in_range_accepted(n in 11i64..9999) {
            let train = TrainNumber::new(n).unwrap();
            prop_assert_eq!(i64::from(train.get()), n);
            prop_assert_eq!(train.to_string(), n.to_string());
        }

        #[test]
        fn train_out_of_range_rejected(n in prop_oneof![i64::MIN..=10, 9999i64..=i64::MAX]) {
            prop_assert!(TrainNumber::new(n).is_err());
        }

        #[test]
        fn wagon_in_range_accepted(n in 0i64..99) {
            let wagon = WagonNumber::new(n).unwrap();
            prop_assert_eq!(wagon.to_string(), n.to_string());
        }

        #[test]
        fn wagon_out_of_range_rejected(n in prop_oneof![i64::MIN..0, 99i64..=i64::MAX]) {
            prop_assert!(WagonNumber::new(n).is_err());
        }
    }
}
