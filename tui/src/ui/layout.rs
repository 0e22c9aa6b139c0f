use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the lab screen.
pub struct LabAreas {
    pub tabs: Rect,
    pub params: Rect,
    pub status: Rect,
    pub chart: Rect,
    pub curve: Rect,
    pub extras: Rect,
    pub detail: Rect,
    pub events: Option<Rect>,
    pub footer: Rect,
}

/// Computes the lab layout.
///
/// ```text
/// +-------------------- tabs --------------------+
/// | params        | chart                        |
/// |---------------|------------------------------|
/// | status        | curve         | extras       |
/// +------------------- detail -------------------+
/// +---------------- events (opt) ----------------+
/// footer
/// ```
pub fn lab(area: Rect, show_events: bool) -> LabAreas {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(14),
        Constraint::Length(9),
    ];
    if show_events {
        constraints.push(Constraint::Length(6));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(10)])
        .split(cols[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(cols[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[1]);

    LabAreas {
        tabs: rows[0],
        params: left[0],
        status: left[1],
        chart: right[0],
        curve: bottom[0],
        extras: bottom[1],
        detail: rows[2],
        events: show_events.then(|| rows[3]),
        footer: rows[rows.len() - 1],
    }
}

/// Splits a page into (tabs, summary, body, footer).
pub fn page(area: Rect, summary_height: u16) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(summary_height),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    (rows[0], rows[1], rows[2], rows[3])
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

/// The last line of `area`, minus a one column margin on each side.
pub fn bottom_bar(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(1),
        width: area.width.saturating_sub(2),
        height: 1,
    }
}
