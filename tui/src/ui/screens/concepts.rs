use crossterm::event::KeyCode;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Wrap},
    Frame,
};
use showcase::{Concept, Disclosure, TabBar};

use crate::ui::{layout, theme::Theme, widgets};

use super::{back_to_menu, Action};

/// One page per concept, each remembering which sections are open.
pub struct ConceptsView {
    tabs: TabBar<Concept>,
    pages: Vec<Disclosure>,
}

impl ConceptsView {
    pub fn new() -> Self {
        Self {
            tabs: TabBar::new(&Concept::ALL),
            pages: Concept::ALL.iter().map(|c| c.disclosure()).collect(),
        }
    }

    fn page(&self) -> &Disclosure {
        &self.pages[self.tabs.index()]
    }

    fn page_mut(&mut self) -> &mut Disclosure {
        &mut self.pages[self.tabs.index()]
    }
}

pub fn handle_key(view: &mut ConceptsView, key: KeyCode) -> Action {
    match key {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => view.tabs.next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => view.tabs.previous(),
        KeyCode::Up | KeyCode::Char('k') => view.page_mut().select_previous(),
        KeyCode::Down | KeyCode::Char('j') => view.page_mut().select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => view.page_mut().toggle_selected(),
        KeyCode::Char('e') => view.page_mut().expand_all(),
        KeyCode::Char('c') => view.page_mut().collapse_all(),
        KeyCode::Char('q') | KeyCode::Esc => return back_to_menu(),
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, view: &ConceptsView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (tabs_area, summary_area, body_area, footer) = layout::page(area, 4);
    let concept = view.tabs.active();

    let titles: Vec<Line> = Concept::ALL.iter().map(|c| Line::from(c.title())).collect();
    f.render_widget(
        Tabs::new(titles)
            .select(view.tabs.index())
            .style(Theme::dim())
            .highlight_style(Theme::selected())
            .divider(Span::styled("│", Theme::muted()))
            .block(widgets::panel("Concepts")),
        tabs_area,
    );

    f.render_widget(
        Paragraph::new(concept.summary())
            .style(Theme::text())
            .wrap(Wrap { trim: true })
            .block(widgets::panel("In short")),
        summary_area,
    );

    let page = view.page();
    let mut lines = Vec::new();
    for (i, section) in page.sections().iter().enumerate() {
        let arrow = if section.open { "▾ " } else { "▸ " };
        let style = if i == page.cursor() {
            Theme::selected()
        } else {
            Theme::title()
        };
        lines.push(Line::from(Span::styled(format!("{arrow}{}", section.title), style)));
        if section.open {
            lines.push(Line::from(Span::styled(format!("    {}", section.body), Theme::dim())));
        }
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(widgets::panel(concept.title())),
        body_area,
    );

    f.render_widget(
        widgets::hints(&[
            ("tab/←→", "page"),
            ("↑↓", "section"),
            ("enter", "toggle"),
            ("e", "expand all"),
            ("c", "collapse all"),
            ("esc", "menu"),
        ]),
        footer,
    );
}
