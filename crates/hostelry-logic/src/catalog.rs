//! Room catalog — the fixed table of allocatable rooms.
//!
//! The catalog is built once at startup and never changes afterwards:
//! there is no runtime add or remove of rooms. Rooms keep their input
//! order so reports walk them the way the manifest lists them, while a
//! side index gives O(1) lookup by room number.
//!
//! ```
//! use hostelry_logic::catalog::{Room, RoomCatalog};
//!
//! let catalog = RoomCatalog::new(vec![
//!     Room { id: 101, capacity: 2, floor: 1 },
//!     Room { id: 102, capacity: 3, floor: 1 },
//! ])
//! .unwrap();
//! assert!(catalog.contains(101));
//! assert!(!catalog.contains(999));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single allocatable room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number (first digit doubles as the floor by convention).
    pub id: u32,
    /// Number of beds.
    pub capacity: u32,
    /// Floor the room is on.
    pub floor: u32,
}

/// Why a catalog could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// The same room number appears twice in the input.
    DuplicateRoom(u32),
}

/// Immutable room table with O(1) lookup by room number.
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    by_id: HashMap<u32, usize>,
}

impl RoomCatalog {
    /// Build a catalog from rows, rejecting duplicate room numbers.
    pub fn new(rooms: Vec<Room>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(rooms.len());
        for (index, room) in rooms.iter().enumerate() {
            if by_id.insert(room.id, index).is_some() {
                return Err(CatalogError::DuplicateRoom(room.id));
            }
        }
        Ok(Self { rooms, by_id })
    }

    /// Look up a room by number.
    pub fn get(&self, id: u32) -> Option<&Room> {
        self.by_id.get(&id).map(|&index| &self.rooms[index])
    }

    /// Whether a room number exists in the catalog.
    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Rooms in stored (manifest) order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<Room> {
        vec![
            Room { id: 101, capacity: 2, floor: 1 },
            Room { id: 102, capacity: 3, floor: 1 },
            Room { id: 201, capacity: 2, floor: 2 },
        ]
    }

    #[test]
    fn lookup_by_id() {
        let catalog = RoomCatalog::new(rooms()).unwrap();
        assert_eq!(catalog.get(102).map(|r| r.capacity), Some(3));
        assert_eq!(catalog.get(201).map(|r| r.floor), Some(2));
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut input = rooms();
        input.push(Room { id: 101, capacity: 4, floor: 1 });
        let err = RoomCatalog::new(input).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateRoom(101));
    }

    #[test]
    fn preserves_input_order() {
        let catalog = RoomCatalog::new(rooms()).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 102, 201]);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = RoomCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(!catalog.contains(101));
    }
}
