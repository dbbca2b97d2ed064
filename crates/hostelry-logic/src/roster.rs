//! Student roster — insertion-ordered store of active assignments.
//!
//! Student ids are unique under case-insensitive comparison ("s101" and
//! "S101" are the same key). Searches walk the roster in insertion order
//! and the first match wins; ids are enforced unique but names are not,
//! so insertion order is the tie-break for name lookups.
//!
//! Mutating methods are crate-private: all writes go through the
//! allocation ledger, which keeps the occupancy index in step.

use serde::{Deserialize, Serialize};

/// A student record held by the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student id, compared case-insensitively.
    pub id: String,
    pub name: String,
    pub course: String,
    /// Room currently assigned to this student.
    pub room_id: u32,
}

/// A single field overwrite applied by the modify operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentUpdate {
    Name(String),
    Course(String),
    Room(u32),
}

/// Insertion-ordered collection of students with case-insensitive id keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any record matches this id (case-insensitive).
    pub fn contains_id(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    /// Look up a record by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.position_of(id).map(|index| &self.students[index])
    }

    /// Case-insensitive match on id OR name, first match in insertion order.
    pub fn find(&self, query: &str) -> Option<&Student> {
        self.students.iter().find(|student| {
            student.id.eq_ignore_ascii_case(query) || student.name.eq_ignore_ascii_case(query)
        })
    }

    /// All records in insertion order.
    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.students
            .iter()
            .position(|student| student.id.eq_ignore_ascii_case(id))
    }

    pub(crate) fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Student {
        self.students.remove(index)
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Student {
        &mut self.students[index]
    }

    pub(crate) fn at(&self, index: usize) -> &Student {
        &self.students[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str, room_id: u32) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            course: "CS".to_string(),
            room_id,
        }
    }

    #[test]
    fn id_lookup_ignores_case() {
        let mut roster = Roster::new();
        roster.push(student("S101", "Asha Rao", 101));
        assert!(roster.contains_id("s101"));
        assert!(roster.contains_id("S101"));
        assert_eq!(roster.get("s101").map(|s| s.room_id), Some(101));
        assert!(!roster.contains_id("S102"));
    }

    #[test]
    fn find_matches_id_or_name() {
        let mut roster = Roster::new();
        roster.push(student("S101", "Asha Rao", 101));
        roster.push(student("S102", "Ben Okafor", 102));
        assert_eq!(roster.find("s102").map(|s| s.name.as_str()), Some("Ben Okafor"));
        assert_eq!(roster.find("asha rao").map(|s| s.id.as_str()), Some("S101"));
        assert!(roster.find("nobody").is_none());
    }

    #[test]
    fn find_first_match_wins_on_duplicate_names() {
        let mut roster = Roster::new();
        roster.push(student("S101", "Asha Rao", 101));
        roster.push(student("S102", "Asha Rao", 102));
        // Ids are unique, names are not: insertion order breaks the tie.
        assert_eq!(roster.find("Asha Rao").map(|s| s.id.as_str()), Some("S101"));
    }

    #[test]
    fn insertion_order_preserved() {
        let mut roster = Roster::new();
        roster.push(student("S103", "C", 203));
        roster.push(student("S101", "A", 101));
        roster.push(student("S102", "B", 102));
        let ids: Vec<&str> = roster.as_slice().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S103", "S101", "S102"]);
    }

    #[test]
    fn remove_keeps_order_of_rest() {
        let mut roster = Roster::new();
        roster.push(student("S101", "A", 101));
        roster.push(student("S102", "B", 102));
        roster.push(student("S103", "C", 203));
        let removed = roster.remove_at(1);
        assert_eq!(removed.id, "S102");
        let ids: Vec<&str> = roster.as_slice().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S101", "S103"]);
    }
}
