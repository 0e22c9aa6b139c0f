use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::{widgets::Block, Frame};
use synthetic::Algorithm;

use crate::{
    state::Context,
    ui::{layout, theme::Theme, widgets},
};

use super::{back_to_menu, Action};

/// What the bottom panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    Explanation,
    Listing,
}

/// UI-only state of the lab screen. Sessions live in the context so they
/// survive leaving the screen.
pub struct LabView {
    pub detail: Detail,
    pub show_events: bool,
}

impl LabView {
    pub fn new() -> Self {
        Self {
            detail: Detail::Explanation,
            show_events: true,
        }
    }
}

pub fn handle_key(view: &mut LabView, key: KeyCode, ctx: &mut Context, now: Instant) -> Action {
    match key {
        KeyCode::Tab => ctx.lab.next_tab(),
        KeyCode::BackTab => ctx.lab.previous_tab(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            ctx.lab.select(Algorithm::ALL[index]);
        }
        KeyCode::Up | KeyCode::Char('k') => ctx.lab.active_mut().select_previous(),
        KeyCode::Down | KeyCode::Char('j') => ctx.lab.active_mut().select_next(),
        KeyCode::Left | KeyCode::Char('h') => ctx.lab.active_mut().nudge(-1),
        KeyCode::Right | KeyCode::Char('l') => ctx.lab.active_mut().nudge(1),
        KeyCode::Char('0') => {
            ctx.lab.active_mut().reset();
            ctx.info("hyperparameters reset");
        }
        KeyCode::Enter | KeyCode::Char('r') => run(ctx, now),
        KeyCode::Char('v') => {
            ctx.level = ctx.level.cycle();
            ctx.info(format!("knowledge level: {}", ctx.level.title()));
        }
        KeyCode::Char('c') => {
            view.detail = match view.detail {
                Detail::Explanation => Detail::Listing,
                Detail::Listing => Detail::Explanation,
            };
        }
        KeyCode::Char('e') => view.show_events = !view.show_events,
        KeyCode::Char('q') | KeyCode::Esc => return back_to_menu(),
        _ => {}
    }

    Action::None
}

fn run(ctx: &mut Context, now: Instant) {
    let algorithm = ctx.lab.tabs().active();
    match ctx.lab.start(algorithm, now) {
        Ok(delay) if delay.is_zero() => ctx.info(format!("{} run complete", algorithm.title())),
        Ok(_) => {}
        Err(e) => ctx.error(e.to_string()),
    }
}

pub fn draw(f: &mut Frame, view: &LabView, ctx: &Context, now: Instant) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let areas = layout::lab(area, view.show_events);
    let session = ctx.lab.active();
    let algorithm = session.algorithm();
    let run = session.result();

    f.render_widget(widgets::algorithm_tabs(&ctx.lab), areas.tabs);
    f.render_widget(widgets::params(session), areas.params);
    widgets::render_status(f, areas.status, session, now);
    widgets::render_series(f, areas.chart, run);
    widgets::render_curve(f, areas.curve, run);
    widgets::render_extras(f, areas.extras, run);

    let detail = match view.detail {
        Detail::Explanation => widgets::explanation(algorithm, ctx.level),
        Detail::Listing => widgets::listing(&showcase::listing(algorithm)),
    };
    f.render_widget(detail, areas.detail);

    if let Some(events) = areas.events {
        f.render_widget(widgets::events(&ctx.lab), events);
    }

    let run_hint = if session.is_running() { "training..." } else { "run" };
    f.render_widget(
        widgets::hints(&[
            ("tab/1-5", "algorithm"),
            ("↑↓", "parameter"),
            ("←→", "adjust"),
            ("r", run_hint),
            ("0", "reset"),
            ("v", "level"),
            ("c", "code"),
            ("e", "events"),
            ("esc", "menu"),
        ]),
        areas.footer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_context, AlertKind};
    use synthetic::ParamValue;

    #[test]
    fn second_run_on_a_busy_tab_is_refused() {
        let mut ctx = test_context(true);
        let mut view = LabView::new();
        let now = Instant::now();

        handle_key(&mut view, KeyCode::Char('r'), &mut ctx, now);
        assert!(ctx.lab.active().is_running());
        assert!(ctx.alert.is_none());

        handle_key(&mut view, KeyCode::Enter, &mut ctx, now);
        assert_eq!(ctx.alert.as_ref().map(|a| a.kind), Some(AlertKind::Error));
    }

    #[test]
    fn other_tabs_stay_available_while_one_trains() {
        let mut ctx = test_context(true);
        let mut view = LabView::new();
        let now = Instant::now();

        handle_key(&mut view, KeyCode::Char('r'), &mut ctx, now);
        handle_key(&mut view, KeyCode::Tab, &mut ctx, now);
        handle_key(&mut view, KeyCode::Char('r'), &mut ctx, now);

        assert!(ctx.alert.is_none());
        assert_eq!(ctx.lab.running().count(), 2);
    }

    #[test]
    fn immediate_runs_report_completion() {
        let mut ctx = test_context(false);
        let mut view = LabView::new();

        handle_key(&mut view, KeyCode::Char('4'), &mut ctx, Instant::now());
        handle_key(&mut view, KeyCode::Char('r'), &mut ctx, Instant::now());

        assert_eq!(ctx.lab.tabs().active(), Algorithm::RandomForest);
        assert!(ctx.lab.active().result().is_some());
        assert_eq!(ctx.alert.as_ref().map(|a| a.kind), Some(AlertKind::Info));
    }

    #[test]
    fn arrows_move_the_selected_slider() {
        let mut ctx = test_context(true);
        let mut view = LabView::new();
        let now = Instant::now();

        handle_key(&mut view, KeyCode::Right, &mut ctx, now);
        handle_key(&mut view, KeyCode::Right, &mut ctx, now);
        assert_eq!(
            ctx.lab.active().params().get("max_depth"),
            Some(ParamValue::Number(5.0))
        );

        handle_key(&mut view, KeyCode::Char('0'), &mut ctx, now);
        assert_eq!(
            ctx.lab.active().params().get("max_depth"),
            Some(ParamValue::Number(3.0))
        );
    }

    #[test]
    fn toggles_flip_view_state() {
        let mut ctx = test_context(true);
        let mut view = LabView::new();
        let level = ctx.level;

        handle_key(&mut view, KeyCode::Char('c'), &mut ctx, Instant::now());
        handle_key(&mut view, KeyCode::Char('e'), &mut ctx, Instant::now());
        handle_key(&mut view, KeyCode::Char('v'), &mut ctx, Instant::now());

        assert_eq!(view.detail, Detail::Listing);
        assert!(!view.show_events);
        assert_eq!(ctx.level, level.cycle());
        assert!(matches!(
            handle_key(&mut view, KeyCode::Esc, &mut ctx, Instant::now()),
            Action::Transition(_)
        ));
    }
}
