pub mod chat;
pub mod concepts;
pub mod lab;
pub mod menu;

use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::state::Context;

use super::widgets;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Lab(lab::LabView),
    Concepts(concepts::ConceptsView),
    Chat(chat::ChatView),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame, ctx: &Context, now: Instant) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Lab(s) => lab::draw(f, s, ctx, now),
            Screen::Concepts(s) => concepts::draw(f, s),
            Screen::Chat(s) => chat::draw(f, s, ctx),
        }

        if let Some(alert) = &ctx.alert {
            let area = f.size();
            widgets::render_alert(f, area, alert);
        }
    }

    /// Handles a key press. Any pending alert is dismissed first.
    pub fn handle_key(&mut self, key: KeyCode, ctx: &mut Context, now: Instant) -> Action {
        ctx.alert = None;

        match self {
            Screen::Menu(s) => menu::handle_key(s, key, ctx),
            Screen::Lab(s) => lab::handle_key(s, key, ctx, now),
            Screen::Concepts(s) => concepts::handle_key(s, key),
            Screen::Chat(s) => chat::handle_key(s, key, ctx),
        }
    }
}

pub(crate) fn back_to_menu() -> Action {
    Action::Transition(Screen::Menu(menu::MenuState::new()))
}
