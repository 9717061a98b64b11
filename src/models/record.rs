//! Record model
//!
//! A single person entry in the roster, tagged with a dense 1-based serial.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Gender of a person entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// All genders in menu order
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    /// Single-letter code used for display and search
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Gender {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "O" => Ok(Self::Other),
            _ => Err(RosterError::Validation(format!(
                "gender must be one of M, F, O (got '{}')",
                s
            ))),
        }
    }
}

/// The four user-supplied fields of a record
///
/// This is the candidate passed to `Roster::add` and the replacement passed to
/// `Roster::update`. Values are expected to be validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub occupation: String,
}

impl RecordFields {
    /// Create a new field set
    pub fn new(
        name: impl Into<String>,
        age: u8,
        gender: Gender,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            occupation: occupation.into(),
        }
    }

    /// Four-way equality against an existing record (serial excluded)
    pub fn matches(&self, record: &Record) -> bool {
        record.name == self.name
            && record.age == self.age
            && record.gender == self.gender
            && record.occupation == self.occupation
    }
}

/// A person entry in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position-derived identifier, 1..=N
    pub serial: u32,

    pub name: String,

    /// Age in years, 1..=150
    pub age: u8,

    pub gender: Gender,

    pub occupation: String,
}

impl Record {
    /// Create a new record. No validation is performed here.
    pub fn new(serial: u32, fields: RecordFields) -> Self {
        Self {
            serial,
            name: fields.name,
            age: fields.age,
            gender: fields.gender,
            occupation: fields.occupation,
        }
    }

    /// The record's user-supplied fields
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender,
            occupation: self.occupation.clone(),
        }
    }

    /// Overwrite the user-supplied fields, keeping the serial
    pub(crate) fn overwrite(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.age = fields.age;
        self.gender = fields.gender;
        self.occupation = fields.occupation;
    }

    /// Key-value view of the five fields, in declaration order
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("serial".into(), Value::from(self.serial));
        map.insert("name".into(), Value::from(self.name.clone()));
        map.insert("age".into(), Value::from(self.age));
        map.insert("gender".into(), Value::from(self.gender.code()));
        map.insert("occupation".into(), Value::from(self.occupation.clone()));
        map
    }

    /// Human-readable block, one field per line
    pub fn render(&self) -> String {
        format!(
            "SRNO: {}\nName: {}\nAge: {}\nGender: {}\nOccupation: {}\n",
            self.serial, self.name, self.age, self.gender, self.occupation
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
