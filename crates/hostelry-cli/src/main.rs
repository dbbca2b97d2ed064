//! Hostelry admin terminal.
//!
//! Interactive menu front end over `hostelry-logic`: authenticates the
//! administrator, then drives add/modify/delete/search and the reports
//! submenu against an in-memory allocation ledger. All state lives for
//! the duration of one run — no files, no flags, no network.
//!
//! Usage:
//!   cargo run -p hostelry-cli

use std::io::{self, BufRead, Write};

use hostelry_logic::allocation::{AllocationError, AllocationLedger, NewStudent};
use hostelry_logic::auth::{AccessGate, AttemptOutcome};
use hostelry_logic::catalog::{Room, RoomCatalog};
use hostelry_logic::menu::{advance, MainChoice, MenuEvent, ReportChoice, SessionState};
use hostelry_logic::reports::{self, RoomStatus};
use hostelry_logic::roster::{Student, StudentUpdate};

const ADMIN_SECRET: &str = "1234";
const MAX_LOGIN_ATTEMPTS: u32 = 3;

// Room manifest baked into the binary (same JSON shape the logic crate's
// catalog tests use: an array of { id, capacity, floor } rows).
const CATALOG_JSON: &str = include_str!("../../../data/room_catalog.json");

fn main() {
    env_logger::init();

    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(message) => {
            eprintln!("Failed to load room catalog: {message}");
            std::process::exit(1);
        }
    };

    println!("Welcome to the Hostelry Room Allocation System");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut ledger = AllocationLedger::new();
    let mut state = SessionState::Locked;

    while state != SessionState::Exited {
        state = match state {
            SessionState::Locked => login(&mut input, state),
            SessionState::MainMenu => main_menu(&mut input, &catalog, &mut ledger, state),
            SessionState::ReportsMenu => reports_menu(&mut input, &catalog, &ledger, state),
            SessionState::Exited => SessionState::Exited,
        };
    }
}

fn load_catalog() -> Result<RoomCatalog, String> {
    let rooms: Vec<Room> =
        serde_json::from_str(CATALOG_JSON).map_err(|e| format!("manifest parse error: {e}"))?;
    RoomCatalog::new(rooms).map_err(|e| format!("manifest rejected: {e:?}"))
}

// ── Login ───────────────────────────────────────────────────────────────

fn login(input: &mut impl BufRead, state: SessionState) -> SessionState {
    let mut gate = AccessGate::new(ADMIN_SECRET, MAX_LOGIN_ATTEMPTS);
    loop {
        let attempt = gate.attempts_used() + 1;
        let line = match prompt(
            input,
            &format!(
                "Enter Administrator Password (Attempt {attempt}/{}): ",
                gate.max_attempts()
            ),
        ) {
            Some(line) => line,
            None => return advance(state, MenuEvent::LoginLockedOut),
        };

        match gate.submit(line.trim()) {
            AttemptOutcome::Granted => {
                println!("\nLogin Successful! Welcome, Administrator.");
                log::info!(
                    "administrator authenticated after {} failed attempts",
                    gate.attempts_used()
                );
                return advance(state, MenuEvent::LoginGranted);
            }
            AttemptOutcome::Denied { remaining } => {
                println!("Invalid Password. {remaining} attempts remaining.");
            }
            AttemptOutcome::LockedOut => {
                println!("\nAccess Denied. Too many failed attempts.");
                log::warn!("authentication locked out after {} attempts", gate.max_attempts());
                return advance(state, MenuEvent::LoginLockedOut);
            }
        }
    }
}

// ── Main menu ───────────────────────────────────────────────────────────

fn main_menu(
    input: &mut impl BufRead,
    catalog: &RoomCatalog,
    ledger: &mut AllocationLedger,
    state: SessionState,
) -> SessionState {
    println!("\n--- Main Menu ---");
    println!("1. Add a new student record");
    println!("2. Modify a student's room or details");
    println!("3. Delete a student's record");
    println!("4. Search for a student");
    println!("5. View reports");
    println!("6. Exit");

    let line = match prompt(input, "Enter your choice (1-6): ") {
        Some(line) => line,
        None => return advance(state, MenuEvent::ExitRequested),
    };

    match MainChoice::parse(&line) {
        Some(MainChoice::AddStudent) => {
            add_student(input, catalog, ledger);
            state
        }
        Some(MainChoice::ModifyStudent) => {
            modify_student(input, catalog, ledger);
            state
        }
        Some(MainChoice::DeleteStudent) => {
            delete_student(input, ledger);
            state
        }
        Some(MainChoice::SearchStudent) => {
            search_student(input, catalog, ledger);
            state
        }
        Some(MainChoice::ViewReports) => advance(state, MenuEvent::OpenReports),
        Some(MainChoice::Exit) => {
            println!("Exiting Hostelry Room Allocation System. Goodbye!");
            advance(state, MenuEvent::ExitRequested)
        }
        None => {
            println!("Invalid choice. Please enter a number between 1 and 6.");
            state
        }
    }
}

// ── CRUD operations ─────────────────────────────────────────────────────

fn add_student(input: &mut impl BufRead, catalog: &RoomCatalog, ledger: &mut AllocationLedger) {
    println!("\n--- Add New Student ---");

    let id = match prompt(input, "Enter Student ID (e.g., S101): ") {
        Some(line) => line.trim().to_uppercase(),
        None => return,
    };
    let name = match prompt(input, "Enter Student Name: ") {
        Some(line) => line.trim().to_string(),
        None => return,
    };
    let course = match prompt(input, "Enter Course: ") {
        Some(line) => line.trim().to_string(),
        None => return,
    };
    let room_id = match prompt_room_number(input, "Enter Desired Room Number: ") {
        Some(room_id) => room_id,
        None => return,
    };

    match ledger.add_student(catalog, NewStudent { id, name, course, room_id }) {
        Ok(student) => {
            println!(
                "\nSuccess: Student {} ({}) allocated to Room {}.",
                student.name, student.id, student.room_id
            );
            log::info!("added student {} to room {}", student.id, student.room_id);
        }
        Err(err) => report_rejection(&err),
    }
}

fn modify_student(input: &mut impl BufRead, catalog: &RoomCatalog, ledger: &mut AllocationLedger) {
    println!("\n--- Modify Student Record ---");

    let id = match prompt(input, "Enter the ID of the student to modify: ") {
        Some(line) => line.trim().to_uppercase(),
        None => return,
    };

    match ledger.get(&id) {
        Some(student) => print_details(catalog, student),
        None => {
            report_rejection(&AllocationError::StudentNotFound(id));
            return;
        }
    }

    println!("\nWhat detail would you like to change?");
    println!("1. Name");
    println!("2. Course");
    println!("3. Room Number");
    let choice = match prompt(input, "Enter choice (1-3) or press Enter to cancel: ") {
        Some(line) => line,
        None => return,
    };

    let update = match choice.trim() {
        "1" => match prompt(input, "Enter new Name: ") {
            Some(line) => StudentUpdate::Name(line.trim().to_string()),
            None => return,
        },
        "2" => match prompt(input, "Enter new Course: ") {
            Some(line) => StudentUpdate::Course(line.trim().to_string()),
            None => return,
        },
        "3" => match prompt_room_number(input, "Enter new Room Number: ") {
            Some(room_id) => StudentUpdate::Room(room_id),
            None => return,
        },
        _ => {
            println!("Modification cancelled.");
            return;
        }
    };

    match ledger.modify_student(catalog, &id, update) {
        Ok(student) => {
            println!("\nSuccess: Record for {} updated.", student.id);
            print_details(catalog, &student);
            log::info!("modified student {}", student.id);
        }
        Err(err) => report_rejection(&err),
    }
}

fn delete_student(input: &mut impl BufRead, ledger: &mut AllocationLedger) {
    println!("\n--- Delete Student Record ---");

    let id = match prompt(input, "Enter Student ID to delete: ") {
        Some(line) => line.trim().to_uppercase(),
        None => return,
    };

    match ledger.delete_student(&id) {
        Ok(student) => {
            println!(
                "\nSuccess: Record for {} (ID: {}) deleted.",
                student.name, student.id
            );
            println!("Room {} is now available.", student.room_id);
            log::info!("deleted student {}, freed room {}", student.id, student.room_id);
        }
        Err(err) => report_rejection(&err),
    }
}

fn search_student(input: &mut impl BufRead, catalog: &RoomCatalog, ledger: &AllocationLedger) {
    println!("\n--- Search Student Record ---");

    let query = match prompt(input, "Enter Student ID or Name to search: ") {
        Some(line) => line.trim().to_string(),
        None => return,
    };

    match ledger.search(&query) {
        Some(student) => print_details(catalog, student),
        None => println!("\nError: No student found matching '{query}'."),
    }
}

// ── Reports menu ────────────────────────────────────────────────────────

fn reports_menu(
    input: &mut impl BufRead,
    catalog: &RoomCatalog,
    ledger: &AllocationLedger,
    state: SessionState,
) -> SessionState {
    println!("\n--- Reports Menu ---");
    println!("1. Total Occupancy Report");
    println!("2. Student List Report");
    println!("3. Room Availability Report");
    println!("4. Back to Main Menu");

    let line = match prompt(input, "Enter your choice (1-4): ") {
        Some(line) => line,
        None => return advance(state, MenuEvent::CloseReports),
    };

    match ReportChoice::parse(&line) {
        Some(ReportChoice::TotalOccupancy) => {
            print_occupancy_report(catalog, ledger);
            state
        }
        Some(ReportChoice::StudentList) => {
            print_student_list(ledger);
            state
        }
        Some(ReportChoice::RoomAvailability) => {
            print_room_availability(catalog, ledger);
            state
        }
        Some(ReportChoice::Back) => advance(state, MenuEvent::CloseReports),
        None => {
            println!("Invalid choice. Please enter a number between 1 and 4.");
            state
        }
    }
}

fn print_occupancy_report(catalog: &RoomCatalog, ledger: &AllocationLedger) {
    let summary = reports::occupancy_summary(catalog, ledger);
    println!("\n--- TOTAL OCCUPANCY REPORT ---");
    println!("Total Rooms Available in Hostel: {}", summary.total_rooms);
    println!("Rooms Currently Occupied:      {}", summary.occupied_rooms);
    println!("Rooms Currently Available:     {}", summary.available_rooms);
    println!(
        "Occupancy Rate:                {:.2}%",
        summary.occupancy_rate_percent
    );
}

fn print_student_list(ledger: &AllocationLedger) {
    println!("\n--- STUDENT LIST REPORT ---");
    let students = reports::student_list(ledger);
    if students.is_empty() {
        println!("No student records found.");
        return;
    }

    println!("{:<10} {:<20} {:<10} {:<5}", "ID", "NAME", "COURSE", "ROOM");
    println!("{}", "-".repeat(45));
    for student in students {
        println!(
            "{:<10} {:<20} {:<10} {:<5}",
            student.id, student.name, student.course, student.room_id
        );
    }
}

fn print_room_availability(catalog: &RoomCatalog, ledger: &AllocationLedger) {
    println!("\n--- ROOM AVAILABILITY REPORT ---");
    println!(
        "{:<8} {:<10} {:<8} {:<15}",
        "ROOM", "CAPACITY", "FLOOR", "STATUS"
    );
    println!("{}", "-".repeat(41));
    for row in reports::room_availability(catalog, ledger) {
        let status = match row.status {
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Available => "Available",
        };
        println!(
            "{:<8} {:<10} {:<8} {:<15}",
            row.room_id, row.capacity, row.floor, status
        );
    }
}

// ── Shared helpers ──────────────────────────────────────────────────────

/// Print a label and read one line; `None` means stdin is closed.
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Prompt for a room number; a non-integer reply is reported and ends the
/// operation (`None`), it never aborts the process.
fn prompt_room_number(input: &mut impl BufRead, label: &str) -> Option<u32> {
    let line = prompt(input, label)?;
    match line.trim().parse::<u32>() {
        Ok(room_id) => Some(room_id),
        Err(_) => {
            println!("Error: Room number must be an integer.");
            None
        }
    }
}

fn print_details(catalog: &RoomCatalog, student: &Student) {
    let details = reports::student_details(catalog, student);
    println!("\n--- Student Details ---");
    println!("  ID:          {}", details.id);
    println!("  Name:        {}", details.name);
    println!("  Course:      {}", details.course);
    println!("  Room Number: {}", details.room_id);
    if let (Some(floor), Some(capacity)) = (details.floor, details.capacity) {
        println!("  Floor:       {floor}");
        println!("  Capacity:    {capacity}-bed room");
    }
    println!("-----------------------");
}

fn report_rejection(err: &AllocationError) {
    let message = match err {
        AllocationError::DuplicateId(id) => format!("Student with ID {id} already exists."),
        AllocationError::UnknownRoom(room) => format!("Room {room} does not exist."),
        AllocationError::RoomOccupied(room) => format!("Room {room} is already occupied."),
        AllocationError::StudentNotFound(id) => format!("No student found with ID '{id}'."),
    };
    println!("Error: {message}");
    log::warn!("operation rejected: {err:?}");
}
