//! Travel date value object (`DD/MM/YYYY`)

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// `chrono` format string for the user-facing date representation
pub const TRAVEL_DATE_FORMAT: &str = "%d/%m/%Y";

/// A calendar date written as `DD/MM/YYYY`
///
/// The original text is kept verbatim. The availability API echoes dates
/// back as display strings and those are compared against [`TravelDate::as_str`]
/// byte for byte, so the textual form is part of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TravelDate {
    value: String,
    date: NaiveDate,
}

impl TravelDate {
    /// Parse a `DD/MM/YYYY` date
    ///
    /// Day and month must be zero padded to two digits and the year must have
    /// four digits. Surrounding whitespace is rejected rather than trimmed.
    pub fn parse(input: impl Into<String>) -> Result<Self, DomainError> {
        let value = input.into();
        let bytes = value.as_bytes();

        let well_formed = bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

        if !well_formed {
            return Err(DomainError::InvalidTravelDate(value));
        }

        let date = NaiveDate::parse_from_str(&value, TRAVEL_DATE_FORMAT)
            .map_err(|_| DomainError::InvalidTravelDate(value.clone()))?;

        Ok(Self { value, date })
    }

    /// Build a travel date from a calendar date
    ///
    /// Fails for years that cannot be written with four digits.
    pub fn from_naive(date: NaiveDate) -> Result<Self, DomainError> {
        if !(0..=9999).contains(&date.year()) {
            return Err(DomainError::InvalidTravelDate(date.to_string()));
        }
        Ok(Self {
            value: date.format(TRAVEL_DATE_FORMAT).to_string(),
            date,
        })
    }

    /// The date exactly as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The underlying calendar date
    #[must_use]
    pub const fn naive(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for TravelDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TravelDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for TravelDate {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TravelDate> for String {
    fn from(date: TravelDate) -> Self {
        date.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date_is_accepted() {
        let date = TravelDate::parse("19/05/2024").unwrap();
        assert_eq!(date.as_str(), "19/05/2024");
        assert_eq!(date.naive(), NaiveDate::from_ymd_opt(2024, 5, 19).unwrap());
    }

    #[test]
    fn leap_day_is_accepted() {
        assert!(TravelDate::parse("29/02/2024").is_ok());
        assert!(TravelDate::parse("29/02/2023").is_err());
    }

    #[test]
    fn unpadded_date_is_rejected() {
        assert!(TravelDate::parse("1/5/2024").is_err());
        assert!(TravelDate::parse("01/5/2024").is_err());
    }

    #[test]
    fn iso_date_is_rejected() {
        assert!(TravelDate::parse("2024-05-19").is_err());
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(TravelDate::parse(" 19/05/2024").is_err());
        assert!(TravelDate::parse("19/05/2024\n").is_err());
    }

    #[test]
    fn impossible_day_is_rejected() {
        assert!(TravelDate::parse("32/01/2024").is_err());
        assert!(TravelDate::parse("10/13/2024").is_err());
        assert!(TravelDate::parse("00/01/2024").is_err());
    }

    #[test]
    fn from_naive_pads_components() {
        let date = TravelDate::from_naive(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).unwrap();
        assert_eq!(date.as_str(), "02/01/2024");
    }

    #[test]
    fn display_matches_input() {
        let date = TravelDate::parse("07/09/2025").unwrap();
        assert_eq!(date.to_string(), "07/09/2025");
    }

    #[test]
    fn serde_uses_plain_string() {
        let date = TravelDate::parse("19/05/2024").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"19/05/2024\"");

        let back: TravelDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<TravelDate>("\"2024-05-19\"").is_err());
    }
}
