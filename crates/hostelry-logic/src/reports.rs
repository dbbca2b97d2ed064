//! Read-only reporting over the catalog and the allocation ledger.
//!
//! Every function here is a pure read: shared references in, plain data
//! out. The only guarded case is the occupancy rate on an empty catalog,
//! which reports 0% instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationLedger;
use crate::catalog::RoomCatalog;
use crate::roster::Student;

/// Aggregate occupancy numbers for the whole hostel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub total_rooms: u32,
    pub occupied_rooms: u32,
    pub available_rooms: u32,
    /// Percentage of rooms occupied; 0.0 when the catalog is empty.
    pub occupancy_rate_percent: f64,
}

/// Compute the total occupancy report.
pub fn occupancy_summary(catalog: &RoomCatalog, ledger: &AllocationLedger) -> OccupancySummary {
    let total_rooms = catalog.len() as u32;
    let occupied_rooms = ledger.occupied_rooms().len() as u32;
    let available_rooms = total_rooms - occupied_rooms;
    let occupancy_rate_percent = if total_rooms == 0 {
        0.0
    } else {
        f64::from(occupied_rooms) / f64::from(total_rooms) * 100.0
    };
    OccupancySummary {
        total_rooms,
        occupied_rooms,
        available_rooms,
        occupancy_rate_percent,
    }
}

/// The roster in insertion order; an empty slice is a valid report.
pub fn student_list(ledger: &AllocationLedger) -> &[Student] {
    ledger.students()
}

/// Whether a room currently houses a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Occupied,
    Available,
}

/// One row of the room availability report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room_id: u32,
    pub capacity: u32,
    pub floor: u32,
    pub status: RoomStatus,
}

/// One row per catalog room, in catalog order.
pub fn room_availability(catalog: &RoomCatalog, ledger: &AllocationLedger) -> Vec<RoomAvailability> {
    catalog
        .iter()
        .map(|room| RoomAvailability {
            room_id: room.id,
            capacity: room.capacity,
            floor: room.floor,
            status: if ledger.is_occupied(room.id) {
                RoomStatus::Occupied
            } else {
                RoomStatus::Available
            },
        })
        .collect()
}

/// A student record joined with the details of their assigned room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDetails {
    pub id: String,
    pub name: String,
    pub course: String,
    pub room_id: u32,
    /// Floor of the assigned room, when the room is in the catalog.
    pub floor: Option<u32>,
    /// Bed count of the assigned room, when the room is in the catalog.
    pub capacity: Option<u32>,
}

/// Join a student record with their room's floor and capacity.
pub fn student_details(catalog: &RoomCatalog, student: &Student) -> StudentDetails {
    let room = catalog.get(student.room_id);
    StudentDetails {
        id: student.id.clone(),
        name: student.name.clone(),
        course: student.course.clone(),
        room_id: student.room_id,
        floor: room.map(|r| r.floor),
        capacity: room.map(|r| r.capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::NewStudent;
    use crate::catalog::Room;

    fn catalog() -> RoomCatalog {
        RoomCatalog::new(vec![
            Room { id: 101, capacity: 2, floor: 1 },
            Room { id: 102, capacity: 3, floor: 1 },
            Room { id: 201, capacity: 2, floor: 2 },
            Room { id: 202, capacity: 3, floor: 2 },
        ])
        .unwrap()
    }

    fn populated() -> (RoomCatalog, AllocationLedger) {
        let catalog = catalog();
        let mut ledger = AllocationLedger::new();
        for (id, room) in [("S101", 101), ("S102", 201)] {
            ledger
                .add_student(
                    &catalog,
                    NewStudent {
                        id: id.to_string(),
                        name: format!("Student {id}"),
                        course: "CS".to_string(),
                        room_id: room,
                    },
                )
                .unwrap();
        }
        (catalog, ledger)
    }

    #[test]
    fn summary_counts_and_rate() {
        let (catalog, ledger) = populated();
        let summary = occupancy_summary(&catalog, &ledger);
        assert_eq!(summary.total_rooms, 4);
        assert_eq!(summary.occupied_rooms, 2);
        assert_eq!(summary.available_rooms, 2);
        assert!((summary.occupancy_rate_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_empty_catalog_rate_is_zero() {
        let catalog = RoomCatalog::new(Vec::new()).unwrap();
        let ledger = AllocationLedger::new();
        let summary = occupancy_summary(&catalog, &ledger);
        assert_eq!(summary.total_rooms, 0);
        assert_eq!(summary.occupancy_rate_percent, 0.0);
    }

    #[test]
    fn availability_rows_follow_catalog_order() {
        let (catalog, ledger) = populated();
        let rows = room_availability(&catalog, &ledger);
        let ids: Vec<u32> = rows.iter().map(|r| r.room_id).collect();
        assert_eq!(ids, vec![101, 102, 201, 202]);
        assert_eq!(rows[0].status, RoomStatus::Occupied);
        assert_eq!(rows[1].status, RoomStatus::Available);
        assert_eq!(rows[2].status, RoomStatus::Occupied);
        assert_eq!(rows[3].status, RoomStatus::Available);
    }

    #[test]
    fn student_list_is_roster_order() {
        let (_, ledger) = populated();
        let ids: Vec<&str> = student_list(&ledger).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S101", "S102"]);
    }

    #[test]
    fn details_join_room_fields() {
        let (catalog, ledger) = populated();
        let student = ledger.search("S101").unwrap();
        let details = student_details(&catalog, student);
        assert_eq!(details.floor, Some(1));
        assert_eq!(details.capacity, Some(2));
    }
}
