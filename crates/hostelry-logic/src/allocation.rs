//! Allocation engine — validated mutations over the roster and occupancy index.
//!
//! [`AllocationLedger`] owns the student roster and the derived set of
//! occupied room numbers together, and is the only place either is
//! written. Every mutation applies its roster edit and its occupancy edit
//! inside the same call, so the pair is never observable out of sync:
//! a room number is in the occupancy set exactly when some student holds
//! that room. A future concurrent extension needs one lock around the
//! ledger and nothing else.
//!
//! Room validity is checked against a [`RoomCatalog`] passed per call;
//! the ledger itself holds no room data.
//!
//! ```
//! use hostelry_logic::allocation::{AllocationLedger, NewStudent};
//! use hostelry_logic::catalog::{Room, RoomCatalog};
//!
//! let catalog = RoomCatalog::new(vec![Room { id: 101, capacity: 2, floor: 1 }]).unwrap();
//! let mut ledger = AllocationLedger::new();
//! let stored = ledger
//!     .add_student(
//!         &catalog,
//!         NewStudent {
//!             id: "S101".into(),
//!             name: "Asha Rao".into(),
//!             course: "CS".into(),
//!             room_id: 101,
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(stored.room_id, 101);
//! assert!(ledger.is_occupied(101));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::RoomCatalog;
use crate::roster::{Roster, Student, StudentUpdate};

/// Input for the add operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub course: String,
    /// Requested room number; must be a free catalog room.
    pub room_id: u32,
}

/// Why an allocation mutation was rejected.
///
/// All of these are operator-recoverable: the ledger is untouched when
/// any of them is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// A student with this id already exists (ids are case-insensitive).
    DuplicateId(String),
    /// The requested room is not in the catalog.
    UnknownRoom(u32),
    /// The requested room already houses a student.
    RoomOccupied(u32),
    /// No student matches the given id.
    StudentNotFound(String),
}

/// Jointly-owned roster + occupancy pair behind a validated interface.
#[derive(Debug, Clone, Default)]
pub struct AllocationLedger {
    roster: Roster,
    occupied: HashSet<u32>,
}

impl AllocationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a room to a new student.
    ///
    /// Rejects a duplicate id, an unknown room, and an occupied room, in
    /// that order. On success the record is appended to the roster, the
    /// room is marked occupied, and a copy of the stored record is
    /// returned.
    pub fn add_student(
        &mut self,
        catalog: &RoomCatalog,
        request: NewStudent,
    ) -> Result<Student, AllocationError> {
        if self.roster.contains_id(&request.id) {
            return Err(AllocationError::DuplicateId(request.id));
        }
        if !catalog.contains(request.room_id) {
            return Err(AllocationError::UnknownRoom(request.room_id));
        }
        if self.occupied.contains(&request.room_id) {
            return Err(AllocationError::RoomOccupied(request.room_id));
        }

        let student = Student {
            id: request.id,
            name: request.name,
            course: request.course,
            room_id: request.room_id,
        };
        self.occupied.insert(student.room_id);
        self.roster.push(student.clone());
        Ok(student)
    }

    /// Remove a student's record and free their room.
    ///
    /// Returns the removed record; its `room_id` is the freed room.
    pub fn delete_student(&mut self, id: &str) -> Result<Student, AllocationError> {
        let index = match self.roster.position_of(id) {
            Some(index) => index,
            None => return Err(AllocationError::StudentNotFound(id.to_string())),
        };
        let student = self.roster.remove_at(index);
        // Guarded remove: the occupancy invariant guarantees presence.
        self.occupied.remove(&student.room_id);
        Ok(student)
    }

    /// Overwrite one field of a student's record.
    ///
    /// Name and course overwrites always succeed once the student is
    /// found. A room move is validated against the catalog and the
    /// occupancy set first; moving a student to the room they already
    /// hold is a no-op success, while a room held by anyone else is
    /// rejected. The old room is freed and the new one claimed in the
    /// same call as the field write.
    pub fn modify_student(
        &mut self,
        catalog: &RoomCatalog,
        id: &str,
        update: StudentUpdate,
    ) -> Result<Student, AllocationError> {
        let index = match self.roster.position_of(id) {
            Some(index) => index,
            None => return Err(AllocationError::StudentNotFound(id.to_string())),
        };

        match update {
            StudentUpdate::Name(name) => self.roster.at_mut(index).name = name,
            StudentUpdate::Course(course) => self.roster.at_mut(index).course = course,
            StudentUpdate::Room(new_room) => {
                let current_room = self.roster.at(index).room_id;
                if !catalog.contains(new_room) {
                    return Err(AllocationError::UnknownRoom(new_room));
                }
                if new_room != current_room && self.occupied.contains(&new_room) {
                    return Err(AllocationError::RoomOccupied(new_room));
                }
                self.roster.at_mut(index).room_id = new_room;
                self.occupied.remove(&current_room);
                self.occupied.insert(new_room);
            }
        }

        Ok(self.roster.at(index).clone())
    }

    /// Case-insensitive match on id OR name, first match in roster order.
    pub fn search(&self, query: &str) -> Option<&Student> {
        self.roster.find(query)
    }

    /// Look up a record by id only (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.roster.get(id)
    }

    /// All records in insertion order.
    pub fn students(&self) -> &[Student] {
        self.roster.as_slice()
    }

    /// Room numbers currently assigned to a student.
    pub fn occupied_rooms(&self) -> &HashSet<u32> {
        &self.occupied
    }

    pub fn is_occupied(&self, room_id: u32) -> bool {
        self.occupied.contains(&room_id)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
