use std::path::Path;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use showcase::Speaker;

use crate::{
    state::Context,
    ui::{theme::Theme, widgets},
};

use super::{back_to_menu, Action};

/// What the input line is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Path,
    Question,
}

pub struct ChatView {
    pub input: Input,
    pub buffer: String,
}

impl ChatView {
    /// Starts on the path prompt until a document has been loaded.
    pub fn new(ctx: &Context) -> Self {
        let input = if ctx.chat.document().is_some() {
            Input::Question
        } else {
            Input::Path
        };

        Self {
            input,
            buffer: String::new(),
        }
    }
}

pub fn handle_key(view: &mut ChatView, key: KeyCode, ctx: &mut Context) -> Action {
    match key {
        KeyCode::Esc => return back_to_menu(),
        KeyCode::Tab => {
            view.input = match view.input {
                Input::Path => Input::Question,
                Input::Question => Input::Path,
            };
            view.buffer.clear();
        }
        KeyCode::Char(c) => view.buffer.push(c),
        KeyCode::Backspace => {
            view.buffer.pop();
        }
        KeyCode::Enter => submit(view, ctx),
        KeyCode::Delete => {
            ctx.chat.clear_history();
            ctx.info("conversation cleared");
        }
        _ => {}
    }

    Action::None
}

fn submit(view: &mut ChatView, ctx: &mut Context) {
    let text = view.buffer.trim().to_string();

    match view.input {
        Input::Path if text.is_empty() => ctx.error("type the path of a .txt or .md file"),
        Input::Path => match ctx.chat.load(Path::new(&text)) {
            Ok(doc) => {
                let message = format!("loaded {} ({} words)", doc.name(), doc.word_count());
                ctx.info(message);
                view.input = Input::Question;
                view.buffer.clear();
            }
            Err(e) => ctx.error(format!("upload rejected: {e}")),
        },
        Input::Question if text.is_empty() => {}
        Input::Question => {
            ctx.chat.ask(&text);
            view.buffer.clear();
        }
    }
}

pub fn draw(f: &mut Frame, view: &ChatView, ctx: &Context) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header = match ctx.chat.document() {
        Some(doc) => Line::from(vec![
            Span::styled(doc.name().to_string(), Theme::ok()),
            Span::styled(
                format!("  {} words · {} sentences", doc.word_count(), doc.sentences().len()),
                Theme::dim(),
            ),
        ]),
        None => Line::from(Span::styled(
            format!(
                "no document loaded, .txt or .md up to {} KiB",
                ctx.chat.max_upload_bytes() / 1024
            ),
            Theme::muted(),
        )),
    };
    f.render_widget(
        Paragraph::new(header).block(widgets::panel("Chat with your document")),
        rows[0],
    );

    let mut lines = Vec::new();
    for message in ctx.chat.history() {
        let (who, style) = match message.speaker {
            Speaker::User => ("you ", Theme::accent_cyan()),
            Speaker::Assistant => ("bot ", Theme::ok()),
        };
        lines.push(Line::from(vec![
            Span::styled(who, style),
            Span::styled(message.text.clone(), Theme::text()),
        ]));
        lines.push(Line::from(""));
    }

    // keep the newest messages on screen
    let visible = rows[1].height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    f.render_widget(
        Paragraph::new(lines.split_off(skip))
            .wrap(Wrap { trim: true })
            .block(widgets::panel("Conversation")),
        rows[1],
    );

    let prompt = match view.input {
        Input::Path => "file path",
        Input::Question => "question",
    };
    let input = Line::from(vec![
        Span::styled(view.buffer.clone(), Theme::ok()),
        Span::styled("█", Theme::accent_cyan()),
    ]);
    f.render_widget(Paragraph::new(input).block(widgets::panel(prompt)), rows[2]);

    f.render_widget(
        widgets::hints(&[
            ("enter", "submit"),
            ("tab", "switch file/question"),
            ("del", "clear"),
            ("esc", "menu"),
        ]),
        rows[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_context, AlertKind};

    fn type_text(view: &mut ChatView, ctx: &mut Context, text: &str) {
        for c in text.chars() {
            handle_key(view, KeyCode::Char(c), ctx);
        }
    }

    #[test]
    fn starts_on_the_path_prompt() {
        let ctx = test_context(true);
        assert_eq!(ChatView::new(&ctx).input, Input::Path);
    }

    #[test]
    fn rejected_upload_raises_an_error_alert() {
        let mut ctx = test_context(true);
        let mut view = ChatView::new(&ctx);

        type_text(&mut view, &mut ctx, "notes.pdf");
        handle_key(&mut view, KeyCode::Enter, &mut ctx);

        let alert = ctx.alert.clone().unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert!(alert.message.contains("pdf"));
        assert_eq!(view.input, Input::Path);
        assert_eq!(view.buffer, "notes.pdf");
    }

    #[test]
    fn questions_go_to_the_history() {
        let mut ctx = test_context(true);
        let doc = showcase::Document::from_text("notes.txt", "Quit with q. Run with r.").unwrap();
        ctx.chat.attach(doc);
        let mut view = ChatView::new(&ctx);
        assert_eq!(view.input, Input::Question);

        type_text(&mut view, &mut ctx, "how do I run?");
        handle_key(&mut view, KeyCode::Backspace, &mut ctx);
        handle_key(&mut view, KeyCode::Enter, &mut ctx);

        assert!(view.buffer.is_empty());
        let history = ctx.chat.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text, "how do I run");
        assert!(history[1].text.contains("Run with r."));
    }

    #[test]
    fn delete_clears_the_conversation_but_keeps_the_document() {
        let mut ctx = test_context(true);
        let doc = showcase::Document::from_text("notes.txt", "Run with r.").unwrap();
        ctx.chat.attach(doc);
        let mut view = ChatView::new(&ctx);

        type_text(&mut view, &mut ctx, "run");
        handle_key(&mut view, KeyCode::Enter, &mut ctx);
        assert_eq!(ctx.chat.history().len(), 2);

        handle_key(&mut view, KeyCode::Delete, &mut ctx);
        assert!(ctx.chat.history().is_empty());
        assert!(ctx.chat.document().is_some());
    }

    #[test]
    fn q_is_text_and_esc_leaves() {
        let mut ctx = test_context(true);
        let mut view = ChatView::new(&ctx);

        assert!(matches!(
            handle_key(&mut view, KeyCode::Char('q'), &mut ctx),
            Action::None
        ));
        assert_eq!(view.buffer, "q");
        assert!(matches!(
            handle_key(&mut view, KeyCode::Esc, &mut ctx),
            Action::Transition(_)
        ));
    }
}
