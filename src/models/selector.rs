//! Search selectors
//!
//! Field-based search uses an explicit selector enum instead of dynamic field
//! lookup. A `SearchQuery` pairs the selector with a value already converted to
//! the field's type.

use std::fmt;
use std::str::FromStr;

use super::number::parse_digits;
use super::record::{Gender, Record};
use crate::error::RosterError;

/// A searchable record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelector {
    Serial,
    Name,
    Age,
    Gender,
    Occupation,
}

impl FieldSelector {
    /// Map a search sub-menu choice ("1".."5") to a selector
    pub fn from_menu_choice(choice: &str) -> Result<Self, RosterError> {
        match choice.trim() {
            "1" => Ok(Self::Serial),
            "2" => Ok(Self::Name),
            "3" => Ok(Self::Age),
            "4" => Ok(Self::Gender),
            "5" => Ok(Self::Occupation),
            other => Err(RosterError::invalid_selector(format!(
                "unknown search choice '{}'",
                other
            ))),
        }
    }

    /// Label used in the search sub-menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::Serial => "SRNO",
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Occupation => "Occupation",
        }
    }

    /// All selectors in menu order
    pub fn all() -> &'static [FieldSelector] {
        &[
            Self::Serial,
            Self::Name,
            Self::Age,
            Self::Gender,
            Self::Occupation,
        ]
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Serial => "serial",
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Occupation => "occupation",
        };
        f.write_str(name)
    }
}

impl FromStr for FieldSelector {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "serial" | "srno" => Ok(Self::Serial),
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "occupation" => Ok(Self::Occupation),
            _ => Err(RosterError::invalid_selector(format!(
                "unsupported field '{}'",
                s
            ))),
        }
    }
}

/// A typed search predicate on exactly one field
///
/// Numeric values are held wider than the record fields so that a well-formed
/// but out-of-range number simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Serial(u64),
    Name(String),
    Age(u64),
    Gender(Gender),
    Occupation(String),
}

impl SearchQuery {
    /// Convert a raw value for the given selector
    ///
    /// Numeric fields must be all digits and gender must be exactly one of
    /// `M`, `F`, `O`; anything else is rejected as an invalid selector.
    pub fn parse(selector: FieldSelector, raw: &str) -> Result<Self, RosterError> {
        match selector {
            FieldSelector::Serial => parse_digits(raw)
                .map(Self::Serial)
                .ok_or_else(|| RosterError::invalid_selector("SRNO must be a number.")),
            FieldSelector::Name => Ok(Self::Name(raw.to_string())),
            FieldSelector::Age => parse_digits(raw)
                .map(Self::Age)
                .ok_or_else(|| RosterError::invalid_selector("Age must be a number.")),
            FieldSelector::Gender => raw
                .parse::<Gender>()
                .map(Self::Gender)
                .map_err(|_| RosterError::invalid_selector("Gender must be one of M, F, O.")),
            FieldSelector::Occupation => Ok(Self::Occupation(raw.to_string())),
        }
    }

    /// The field this query inspects
    pub fn selector(&self) -> FieldSelector {
        match self {
            Self::Serial(_) => FieldSelector::Serial,
            Self::Name(_) => FieldSelector::Name,
            Self::Age(_) => FieldSelector::Age,
            Self::Gender(_) => FieldSelector::Gender,
            Self::Occupation(_) => FieldSelector::Occupation,
        }
    }

    /// Exact equality on the selected field
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Serial(serial) => u64::from(record.serial) == *serial,
            Self::Name(name) => record.name == *name,
            Self::Age(age) => u64::from(record.age) == *age,
            Self::Gender(gender) => record.gender == *gender,
            Self::Occupation(occupation) => record.occupation == *occupation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordFields;

    #[test]
    fn test_selector_from_str() {
        assert_eq!("serial".parse::<FieldSelector>().unwrap(), FieldSelector::Serial);
        assert_eq!("SRNO".parse::<FieldSelector>().unwrap(), FieldSelector::Serial);
        assert_eq!("Gender".parse::<FieldSelector>().unwrap(), FieldSelector::Gender);
        assert!(matches!(
            "salary".parse::<FieldSelector>(),
            Err(RosterError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_selector_from_menu_choice() {
        assert_eq!(FieldSelector::from_menu_choice("3").unwrap(), FieldSelector::Age);
        assert!(FieldSelector::from_menu_choice("6").is_err());
        assert!(FieldSelector::from_menu_choice("").is_err());
    }

    #[test]
    fn test_parse_numeric_fields() {
        assert_eq!(
            SearchQuery::parse(FieldSelector::Age, "25").unwrap(),
            SearchQuery::Age(25)
        );
        assert!(matches!(
            SearchQuery::parse(FieldSelector::Age, "twenty"),
            Err(RosterError::InvalidSelector(_))
        ));
        assert!(matches!(
            SearchQuery::parse(FieldSelector::Serial, "-1"),
            Err(RosterError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_parse_rejects_plus_sign() {
        assert!(matches!(
            SearchQuery::parse(FieldSelector::Serial, "+1"),
            Err(RosterError::InvalidSelector(_))
        ));
        assert!(matches!(
            SearchQuery::parse(FieldSelector::Age, "+25"),
            Err(RosterError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_out_of_range_numbers_match_nothing() {
        let record = Record::new(1, RecordFields::new("Bo", 44, Gender::Female, "Doc"));

        // 300 wrapped into a u8 would be 44
        let age = SearchQuery::parse(FieldSelector::Age, "300").unwrap();
        assert_eq!(age, SearchQuery::Age(300));
        assert!(!age.matches(&record));

        // 2^32 + 1 wrapped into a u32 would be 1
        let serial = SearchQuery::parse(FieldSelector::Serial, "4294967297").unwrap();
        assert!(!serial.matches(&record));
    }

    #[test]
    fn test_parse_gender_is_exact() {
        assert_eq!(
            SearchQuery::parse(FieldSelector::Gender, "F").unwrap(),
            SearchQuery::Gender(Gender::Female)
        );
        assert!(SearchQuery::parse(FieldSelector::Gender, "female").is_err());
    }

    #[test]
    fn test_matches() {
        let record = Record::new(2, RecordFields::new("Bo", 25, Gender::Female, "Doc"));
        assert!(SearchQuery::Serial(2).matches(&record));
        assert!(SearchQuery::Name("Bo".into()).matches(&record));
        assert!(!SearchQuery::Name("bo".into()).matches(&record));
        assert!(SearchQuery::Occupation("Doc".into()).matches(&record));
        assert!(!SearchQuery::Age(26).matches(&record));
        assert_eq!(SearchQuery::Age(26).selector(), FieldSelector::Age);
    }
}
