//! Admin session state machine and menu choice parsing.
//!
//! Parsing and transitions are pure so the whole command surface can be
//! tested without a terminal. Input that parses to no choice produces no
//! event and therefore no transition; the front end simply re-prints the
//! current menu.

/// Where the admin session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Awaiting authentication; nothing else is reachable from here.
    Locked,
    MainMenu,
    ReportsMenu,
    /// Terminal state.
    Exited,
}

/// Something that moves the session between menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    LoginGranted,
    LoginLockedOut,
    OpenReports,
    CloseReports,
    ExitRequested,
}

/// Apply one event to the session state.
///
/// Events that make no sense in the current state leave it unchanged.
pub fn advance(state: SessionState, event: MenuEvent) -> SessionState {
    use MenuEvent::*;
    use SessionState::*;
    match (state, event) {
        (Locked, LoginGranted) => MainMenu,
        (Locked, LoginLockedOut) => Exited,
        (MainMenu, OpenReports) => ReportsMenu,
        (ReportsMenu, CloseReports) => MainMenu,
        (MainMenu, ExitRequested) => Exited,
        (state, _) => state,
    }
}

/// Main menu selections (numeric 1–6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    AddStudent,
    ModifyStudent,
    DeleteStudent,
    SearchStudent,
    ViewReports,
    Exit,
}

impl MainChoice {
    /// Parse a raw menu line; `None` is an unrecognized choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddStudent),
            "2" => Some(Self::ModifyStudent),
            "3" => Some(Self::DeleteStudent),
            "4" => Some(Self::SearchStudent),
            "5" => Some(Self::ViewReports),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Reports submenu selections (numeric 1–4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChoice {
    TotalOccupancy,
    StudentList,
    RoomAvailability,
    Back,
}

impl ReportChoice {
    /// Parse a raw menu line; `None` is an unrecognized choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::TotalOccupancy),
            "2" => Some(Self::StudentList),
            "3" => Some(Self::RoomAvailability),
            "4" => Some(Self::Back),
            _ => None,
        }
    }
}
