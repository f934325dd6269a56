use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub notice_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Filter bar with per-status counts (1 row)
/// - Main area: task list
/// - Bottom: transient notices (2 rows)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Task list
            Constraint::Length(2), // Notices
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        filter_area: chunks[1],
        list_area: chunks[2],
        notice_area: chunks[3],
    }
}

/// Create centered modal area (input form and delete confirmation)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
