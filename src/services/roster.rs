//! Roster service
//!
//! Owns the ordered sequence of records and all mutation logic: serial
//! assignment, duplicate detection, field search, update and deletion.
//!
//! Serials always form the dense sequence 1..=N in storage order. Every
//! structural change and every field update is followed by a renumbering pass.

use log::{debug, info};
use serde_json::Value;

use crate::error::{RosterError, RosterResult};
use crate::models::{FieldSelector, Record, RecordFields, SearchQuery};

/// The in-memory roster of person records
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serial the next appended record will receive
    pub fn next_serial(&self) -> u32 {
        self.records.len() as u32 + 1
    }

    /// Reassign `serial = index + 1` in current order
    fn renumber(&mut self) {
        for (index, record) in self.records.iter_mut().enumerate() {
            record.serial = index as u32 + 1;
        }
        debug!("renumbered {} records", self.records.len());
    }

    /// Whether an existing record has equal name, age, gender and occupation
    pub fn is_duplicate(&self, candidate: &RecordFields) -> bool {
        self.records.iter().any(|record| candidate.matches(record))
    }

    /// Append a new record with the next serial
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` without mutating if an equal record exists.
    pub fn add(&mut self, candidate: RecordFields) -> RosterResult<&Record> {
        if self.is_duplicate(&candidate) {
            info!("rejected duplicate entry for '{}'", candidate.name);
            return Err(RosterError::DuplicateEntry);
        }

        let record = Record::new(self.next_serial(), candidate);
        info!("added record {}", Value::Object(record.to_map()));
        self.records.push(record);
        self.renumber();

        Ok(&self.records[self.records.len() - 1])
    }

    /// Look up a record by serial
    pub fn find(&self, serial: u32) -> Option<&Record> {
        self.records.iter().find(|record| record.serial == serial)
    }

    /// All records matching the query, in storage order
    pub fn search(&self, query: &SearchQuery) -> Vec<&Record> {
        debug!("search by {}: {:?}", query.selector(), query);
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }

    /// Search by field name and raw value
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` for an unsupported field name or a value that
    /// cannot be converted to the field's type.
    pub fn search_by(&self, field: &str, value: &str) -> RosterResult<Vec<&Record>> {
        let selector: FieldSelector = field.parse()?;
        let query = SearchQuery::parse(selector, value)?;
        Ok(self.search(&query))
    }

    /// Overwrite the fields of the record with the given serial
    ///
    /// Duplicate detection does not apply to updates.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` without mutating if no record has that serial.
    pub fn update(&mut self, serial: u32, fields: RecordFields) -> RosterResult<&Record> {
        let index = self
            .position(serial)
            .ok_or_else(|| RosterError::not_found(serial))?;

        let before = self.records[index].fields();
        self.records[index].overwrite(fields);
        self.renumber();
        info!(
            "updated record {}: {:?} -> {:?}",
            serial,
            before,
            self.records[index].fields()
        );

        Ok(&self.records[index])
    }

    /// Remove the record with the given serial when the removal is confirmed
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that serial, otherwise
    /// `DeletionCancelled` when `confirmed` is false. Neither mutates.
    pub fn delete_if_confirmed(&mut self, serial: u32, confirmed: bool) -> RosterResult<Record> {
        let index = self
            .position(serial)
            .ok_or_else(|| RosterError::not_found(serial))?;

        if !confirmed {
            debug!("deletion of record {} cancelled", serial);
            return Err(RosterError::DeletionCancelled { serial });
        }

        let removed = self.records.remove(index);
        self.renumber();
        info!("deleted record {} ('{}')", serial, removed.name);

        Ok(removed)
    }

    /// All records sorted by serial
    pub fn all(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.iter().collect();
        records.sort_by_key(|record| record.serial);
        records
    }

    fn position(&self, serial: u32) -> Option<usize> {
        self.records.iter().position(|record| record.serial == serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn fields(name: &str, age: u8, gender: Gender, occupation: &str) -> RecordFields {
        RecordFields::new(name, age, gender, occupation)
    }

    fn roster_of(n: usize) -> Roster {
        let mut roster = Roster::new();
        for i in 0..n {
            roster
                .add(fields(&format!("Person {}", i + 1), 20 + i as u8, Gender::Other, "Tester"))
                .unwrap();
        }
        roster
    }

    fn serials(roster: &Roster) -> Vec<u32> {
        roster.all().iter().map(|r| r.serial).collect()
    }

    fn names(roster: &Roster) -> Vec<String> {
        roster.all().iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_next_serial() {
        let mut roster = Roster::new();
        assert_eq!(roster.next_serial(), 1);
        roster.add(fields("Al", 30, Gender::Male, "Eng")).unwrap();
        assert_eq!(roster.next_serial(), 2);
    }

    #[test]
    fn test_adds_assign_dense_serials() {
        let roster = roster_of(5);
        assert_eq!(roster.len(), 5);
        assert_eq!(serials(&roster), vec![1, 2, 3, 4, 5]);
        assert_eq!(roster.all()[0].name, "Person 1");
        assert_eq!(roster.all()[4].name, "Person 5");
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut roster = Roster::new();
        roster.add(fields("Al", 30, Gender::Male, "Eng")).unwrap();

        let result = roster.add(fields("Al", 30, Gender::Male, "Eng"));
        assert!(matches!(result, Err(RosterError::DuplicateEntry)));
        assert_eq!(roster.len(), 1);

        // Any differing field makes it distinct
        roster.add(fields("Al", 30, Gender::Male, "Doc")).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_is_duplicate() {
        let mut roster = Roster::new();
        let al = fields("Al", 30, Gender::Male, "Eng");
        assert!(!roster.is_duplicate(&al));
        roster.add(al.clone()).unwrap();
        assert!(roster.is_duplicate(&al));
    }

    #[test]
    fn test_delete_renumbers() {
        let mut roster = roster_of(4);

        let removed = roster.delete_if_confirmed(2, true).unwrap();
        assert_eq!(removed.name, "Person 2");
        assert_eq!(roster.len(), 3);
        assert_eq!(serials(&roster), vec![1, 2, 3]);
        assert_eq!(names(&roster), vec!["Person 1", "Person 3", "Person 4"]);
    }

    #[test]
    fn test_delete_cancelled() {
        let mut roster = roster_of(2);

        let result = roster.delete_if_confirmed(1, false);
        assert!(matches!(result, Err(RosterError::DeletionCancelled { serial: 1 })));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_delete_not_found() {
        let mut roster = roster_of(2);

        let result = roster.delete_if_confirmed(3, true);
        assert!(result.unwrap_err().is_not_found());

        // Not found takes precedence over cancellation
        let result = roster.delete_if_confirmed(7, false);
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_update_changes_only_target() {
        let mut roster = roster_of(3);

        let updated = roster
            .update(2, fields("Cy", 41, Gender::Female, "Pilot"))
            .unwrap();
        assert_eq!(updated.serial, 2);
        assert_eq!(updated.name, "Cy");

        assert_eq!(roster.len(), 3);
        assert_eq!(serials(&roster), vec![1, 2, 3]);
        assert_eq!(names(&roster), vec!["Person 1", "Cy", "Person 3"]);
        assert_eq!(roster.find(2).unwrap().occupation, "Pilot");
        assert_eq!(roster.find(1).unwrap().age, 20);
    }

    #[test]
    fn test_update_not_found() {
        let mut roster = roster_of(1);

        let result = roster.update(5, fields("Cy", 41, Gender::Female, "Pilot"));
        assert!(matches!(result, Err(RosterError::NotFound { serial: 5 })));
        assert_eq!(roster.find(1).unwrap().name, "Person 1");
    }

    #[test]
    fn test_update_allows_duplicate_values() {
        let mut roster = Roster::new();
        roster.add(fields("Al", 30, Gender::Male, "Eng")).unwrap();
        roster.add(fields("Bo", 25, Gender::Female, "Doc")).unwrap();

        roster.update(2, fields("Al", 30, Gender::Male, "Eng")).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_search_by_gender() {
        let mut roster = Roster::new();
        roster.add(fields("Al", 30, Gender::Male, "Eng")).unwrap();
        roster.add(fields("Bo", 25, Gender::Female, "Doc")).unwrap();
        roster.add(fields("Cy", 41, Gender::Female, "Pilot")).unwrap();

        let found = roster.search_by("gender", "F").unwrap();
        let found: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(found, vec!["Bo", "Cy"]);

        roster.delete_if_confirmed(2, true).unwrap();
        roster.delete_if_confirmed(2, true).unwrap();
        assert!(roster.search_by("gender", "F").unwrap().is_empty());
    }

    #[test]
    fn test_search_by_each_field() {
        let mut roster = Roster::new();
        roster.add(fields("Al", 30, Gender::Male, "Eng")).unwrap();
        roster.add(fields("Bo", 25, Gender::Female, "Eng")).unwrap();

        assert_eq!(roster.search_by("serial", "2").unwrap()[0].name, "Bo");
        assert_eq!(roster.search_by("name", "Al").unwrap().len(), 1);
        assert_eq!(roster.search_by("age", "25").unwrap()[0].name, "Bo");
        assert_eq!(roster.search_by("occupation", "Eng").unwrap().len(), 2);
        assert!(roster.search_by("name", "Zed").unwrap().is_empty());
    }

    #[test]
    fn test_search_invalid_selector() {
        let roster = roster_of(1);

        assert!(matches!(
            roster.search_by("salary", "10"),
            Err(RosterError::InvalidSelector(_))
        ));
        assert!(matches!(
            roster.search_by("age", "old"),
            Err(RosterError::InvalidSelector(_))
        ));
        assert!(matches!(
            roster.search_by("serial", "one"),
            Err(RosterError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut roster = Roster::new();

        roster.add(fields("Al", 30, Gender::Male, "Eng")).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.all()[0].serial, 1);

        assert!(roster.add(fields("Al", 30, Gender::Male, "Eng")).is_err());
        assert_eq!(roster.len(), 1);

        roster.add(fields("Bo", 25, Gender::Female, "Doc")).unwrap();
        assert_eq!(serials(&roster), vec![1, 2]);

        roster.delete_if_confirmed(1, true).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.all()[0].serial, 1);
        assert_eq!(roster.all()[0].name, "Bo");

        let found = roster.search(&SearchQuery::Age(25));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bo");
    }
}
