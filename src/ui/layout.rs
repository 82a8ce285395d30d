use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub header_search: Rect,
    pub header_clock: Rect,
    pub header_user: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub hint_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(28),
            Constraint::Length(30),
        ])
        .split(vertical[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(vertical[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        header_search: header_chunks[0],
        header_clock: header_chunks[1],
        header_user: header_chunks[2],
        sidebar: main_chunks[0],
        content: main_chunks[1],
        status_line: footer_chunks[0],
        hint_line: footer_chunks[1],
    }
}
