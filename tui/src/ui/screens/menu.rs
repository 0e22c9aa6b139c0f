use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    state::Context,
    ui::{layout::centered_rect, theme::Theme, widgets},
};

use super::{chat::ChatView, concepts::ConceptsView, lab::LabView, Action, Screen};

const LOGO: &str = r#"
 ███╗   ███╗██╗         ███████╗██╗  ██╗ ██████╗ ██╗    ██╗
 ████╗ ████║██║         ██╔════╝██║  ██║██╔═══██╗██║    ██║
 ██╔████╔██║██║         ███████╗███████║██║   ██║██║ █╗ ██║
 ██║╚██╔╝██║██║         ╚════██║██╔══██║██║   ██║██║███╗██║
 ██║ ╚═╝ ██║███████╗    ███████║██║  ██║╚██████╔╝╚███╔███╔╝
 ╚═╝     ╚═╝╚══════╝    ╚══════╝╚═╝  ╚═╝ ╚═════╝  ╚══╝╚══╝

five algorithms, zero real training
"#;

const MENU_ITEMS: &[&str] = &["Algorithm Lab", "Concepts", "Document Chat", "Quit"];

pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode, ctx: &Context) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected < MENU_ITEMS.len() - 1 {
                state.selected += 1;
            }
            Action::None
        }
        KeyCode::Enter => match state.selected {
            0 => Action::Transition(Screen::Lab(LabView::new())),
            1 => Action::Transition(Screen::Concepts(ConceptsView::new())),
            2 => Action::Transition(Screen::Chat(ChatView::new(ctx))),
            3 => Action::Quit,
            _ => Action::None,
        },
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &MenuState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(70, 80, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(1),
            Constraint::Length(MENU_ITEMS.len() as u16 * 2 + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    draw_logo(f, chunks[0]);
    draw_menu(f, chunks[2], state);
    f.render_widget(
        widgets::hints(&[("↑↓ / j k", "navigate"), ("enter", "select"), ("q", "quit")]),
        chunks[4],
    );
}

fn draw_logo(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_menu(f: &mut Frame, area: Rect, state: &MenuState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" MENU ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let item_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            MENU_ITEMS
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, (label, item_area)) in MENU_ITEMS.iter().zip(item_areas.iter()).enumerate() {
        let (prefix, style) = if i == state.selected {
            ("▶ ", Theme::title().add_modifier(Modifier::BOLD))
        } else {
            ("  ", Theme::dim())
        };

        let line = Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(*label, style),
        ]);

        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), *item_area);
    }
}
