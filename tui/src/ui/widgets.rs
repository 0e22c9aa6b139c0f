use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Modifier,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Dataset, Gauge, GraphType, Paragraph, Row,
        Table, Tabs, Wrap,
    },
    Frame,
};
use showcase::{KnowledgeLevel, Lab, LabSession, Listing, RunState};
use synthetic::{Algorithm, Direction, Extras, ParamKind, ParamSpec, ParamValue, Run};

use crate::state::{Alert, AlertKind};

use super::{layout, theme::Theme};

const SLIDER_WIDTH: usize = 16;
const EVENT_TAIL: usize = 4;

/// A bordered panel with the house title style.
pub fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(" {} ", title.into()))
        .title_style(Theme::title())
}

/// The algorithm tab bar. Tabs with a run in flight get a marker.
pub fn algorithm_tabs(lab: &Lab) -> Tabs<'static> {
    let titles: Vec<Line> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let marker = if lab.session(*a).is_running() { " ●" } else { "" };
            Line::from(format!("{} {}{marker}", i + 1, a.title()))
        })
        .collect();

    Tabs::new(titles)
        .select(lab.tabs().index())
        .style(Theme::dim())
        .highlight_style(Theme::selected())
        .divider(Span::styled("│", Theme::muted()))
        .block(panel("Algorithms"))
}

/// One row per hyperparameter: label, slider and value.
pub fn params(session: &LabSession) -> Paragraph<'static> {
    let lines: Vec<Line> = session
        .params()
        .values()
        .into_iter()
        .enumerate()
        .map(|(i, (spec, value))| param_line(spec, value, i == session.selected()))
        .collect();

    Paragraph::new(lines).block(panel("Hyperparameters"))
}

fn param_line(spec: &ParamSpec, value: ParamValue, selected: bool) -> Line<'static> {
    let (prefix, label_style) = if selected {
        ("▶ ", Theme::selected())
    } else {
        ("  ", Theme::dim())
    };

    let mut spans = vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("{:<18}", spec.label), label_style),
    ];

    match (spec.kind, value) {
        (ParamKind::Number { min, max, .. }, ParamValue::Number(v)) => {
            let filled = (((v - min) / (max - min)) * SLIDER_WIDTH as f64).round() as usize;
            let filled = filled.min(SLIDER_WIDTH);
            spans.push(Span::styled("━".repeat(filled), Theme::accent_cyan()));
            spans.push(Span::styled("─".repeat(SLIDER_WIDTH - filled), Theme::muted()));
            spans.push(Span::styled(format!(" {v}"), Theme::text()));
        }
        (ParamKind::Choice { options }, ParamValue::Choice(current)) => {
            for option in options {
                let style = if *option == current {
                    Theme::accent_cyan()
                } else {
                    Theme::muted()
                };
                spans.push(Span::styled(format!("{option} "), style));
            }
        }
        _ => spans.push(Span::styled("?", Theme::error())),
    }

    Line::from(spans)
}

/// Status of the selected session: a gauge while training, the metrics once
/// done.
pub fn render_status(f: &mut Frame, area: Rect, session: &LabSession, now: Instant) {
    match session.state() {
        RunState::Idle => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No results yet.", Theme::muted())),
                Line::from(Span::styled("Press r to train the model.", Theme::dim())),
            ])
            .alignment(Alignment::Center)
            .block(panel("Results"));
            f.render_widget(hint, area);
        }
        RunState::Running { .. } => {
            let ratio = session.progress(now).unwrap_or(0.0);
            let gauge = Gauge::default()
                .block(panel("Training"))
                .gauge_style(Theme::accent_cyan())
                .ratio(ratio)
                .label(format!(
                    "training {}... {:>3.0}%",
                    session.algorithm().title(),
                    ratio * 100.0
                ));
            f.render_widget(gauge, area);
        }
        RunState::Done(run) => {
            f.render_widget(metrics(run, session.runs()), area);
        }
    }
}

fn metrics(run: &Run, runs: u32) -> Paragraph<'static> {
    let m = &run.metrics;
    let hint = match m.direction {
        Direction::HigherIsBetter => "higher is better",
        Direction::LowerIsBetter => "lower is better",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<10}", m.primary.name), Theme::title()),
            Span::styled(
                format!("{:.3}", m.primary.value),
                Theme::ok().add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!("  {hint}"), Theme::muted()),
        ]),
        Line::from(""),
    ];

    lines.extend(m.secondary.iter().map(|s| {
        Line::from(vec![
            Span::styled(format!("{:<10}", s.name), Theme::dim()),
            Span::styled(format!("{:.3}", s.value), Theme::text()),
        ])
    }));

    lines.push(Line::from(Span::styled(
        format!("elapsed {:.2}s · run #{runs}", m.elapsed_secs),
        Theme::muted(),
    )));

    Paragraph::new(lines).block(panel("Results"))
}

/// Observed points against the model's prediction line. Classifiers color
/// points by class.
pub fn render_series(f: &mut Frame, area: Rect, run: Option<&Run>) {
    let Some(run) = run else {
        f.render_widget(placeholder("Predictions"), area);
        return;
    };

    let series = &run.series;
    let classes = [series.observed(0), series.observed(1)];
    let predicted = series.predicted();

    let (lo, hi) = series.y_bounds();
    let pad = ((hi - lo) * 0.1).max(0.1);
    let (lo, hi) = (lo - pad, hi + pad);

    let datasets = vec![
        Dataset::default()
            .name("class 0")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::series_primary())
            .data(&classes[0]),
        Dataset::default()
            .name("class 1")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::series_secondary())
            .data(&classes[1]),
        Dataset::default()
            .name("model")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::series_model())
            .data(&predicted),
    ];

    let chart = Chart::new(datasets)
        .block(panel("Predictions"))
        .x_axis(
            Axis::default()
                .style(Theme::muted())
                .bounds([0.0, 10.0])
                .labels(vec![Span::raw("0"), Span::raw("5"), Span::raw("10")]),
        )
        .y_axis(
            Axis::default()
                .style(Theme::muted())
                .bounds([lo, hi])
                .labels(vec![Span::raw(format!("{lo:.1}")), Span::raw(format!("{hi:.1}"))]),
        );

    f.render_widget(chart, area);
}

/// The fake training curve converging on the primary metric.
pub fn render_curve(f: &mut Frame, area: Rect, run: Option<&Run>) {
    let Some(run) = run else {
        f.render_widget(placeholder("Training curve"), area);
        return;
    };

    let points: Vec<(f64, f64)> = run
        .curve
        .points
        .iter()
        .map(|p| (p.epoch as f64, p.accuracy))
        .collect();

    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
    let pad = ((hi - lo) * 0.1).max(0.01);
    let last_epoch = points.len().max(2) as f64;

    let datasets = vec![Dataset::default()
        .name(run.metrics.primary.name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Theme::series_model())
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(panel("Training curve"))
        .x_axis(
            Axis::default()
                .style(Theme::muted())
                .bounds([1.0, last_epoch])
                .labels(vec![Span::raw("1"), Span::raw(format!("{last_epoch:.0}"))]),
        )
        .y_axis(
            Axis::default()
                .style(Theme::muted())
                .bounds([lo - pad, hi + pad])
                .labels(vec![
                    Span::raw(format!("{:.2}", lo - pad)),
                    Span::raw(format!("{:.2}", hi + pad)),
                ]),
        );

    f.render_widget(chart, area);
}

/// Algorithm specific details of a run.
pub fn render_extras(f: &mut Frame, area: Rect, run: Option<&Run>) {
    let Some(run) = run else {
        f.render_widget(placeholder("Details"), area);
        return;
    };

    match &run.metrics.extras {
        Extras::FeatureImportance { features } => {
            let data: Vec<(&str, u64)> = features
                .iter()
                .map(|w| (w.feature, (w.weight * 100.0).round() as u64))
                .collect();
            let chart = BarChart::default()
                .block(panel("Feature importance (%)"))
                .data(data.as_slice())
                .bar_width(8)
                .bar_gap(1)
                .bar_style(Theme::accent_cyan())
                .value_style(Theme::selected())
                .label_style(Theme::dim());
            f.render_widget(chart, area);
        }
        Extras::ConfusionMatrix { labels, cells } => {
            let header = Row::new(
                std::iter::once(Cell::from("actual\\pred"))
                    .chain(labels.iter().map(|l| Cell::from(*l))),
            )
            .style(Theme::title());

            let rows = labels.iter().zip(cells).enumerate().map(|(i, (label, row))| {
                let cells = row.iter().enumerate().map(|(j, n)| {
                    let style = if i == j { Theme::ok() } else { Theme::warn() };
                    Cell::from(Span::styled(n.to_string(), style))
                });
                let label = Cell::from(Span::styled(*label, Theme::dim()));
                Row::new(std::iter::once(label).chain(cells))
            });

            let table = Table::new(
                rows,
                [
                    Constraint::Length(12),
                    Constraint::Length(11),
                    Constraint::Length(11),
                    Constraint::Length(11),
                ],
            )
            .header(header)
            .block(panel("Confusion matrix"));
            f.render_widget(table, area);
        }
        Extras::Coefficients { weights, intercept } => {
            let mut lines: Vec<Line> = weights
                .iter()
                .map(|w| {
                    let bar = "█".repeat((w.weight.abs() * 20.0).round() as usize);
                    let style = if w.weight >= 0.0 {
                        Theme::series_model()
                    } else {
                        Theme::series_secondary()
                    };
                    Line::from(vec![
                        Span::styled(format!("{:<4}{:>+7.3} ", w.feature, w.weight), Theme::text()),
                        Span::styled(bar, style),
                    ])
                })
                .collect();
            lines.push(Line::from(Span::styled(
                format!("intercept {intercept:+.3}"),
                Theme::dim(),
            )));
            f.render_widget(Paragraph::new(lines).block(panel("Coefficients")), area);
        }
        Extras::SupportVectors { count, margin } => {
            let lines = vec![
                Line::from(vec![
                    Span::styled("support vectors  ", Theme::dim()),
                    Span::styled(count.to_string(), Theme::ok()),
                ]),
                Line::from(vec![
                    Span::styled("margin width     ", Theme::dim()),
                    Span::styled(format!("{margin:.3}"), Theme::ok()),
                ]),
            ];
            f.render_widget(Paragraph::new(lines).block(panel("Support vectors")), area);
        }
    }
}

fn placeholder(title: &str) -> Paragraph<'static> {
    Paragraph::new(Span::styled("waiting for a run", Theme::muted()))
        .alignment(Alignment::Center)
        .block(panel(title))
}

/// Prose about `algorithm` for the chosen knowledge level.
pub fn explanation(algorithm: Algorithm, level: KnowledgeLevel) -> Paragraph<'static> {
    Paragraph::new(showcase::explain(algorithm, level))
        .style(Theme::text())
        .wrap(Wrap { trim: true })
        .block(panel(format!("{} · {}", algorithm.title(), level.title())))
}

pub fn listing(listing: &Listing) -> Paragraph<'static> {
    let lines: Vec<Line> = listing
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::dim())))
        .collect();

    Paragraph::new(lines).block(panel(format!("{} ({})", listing.title, listing.language)))
}

/// The latest lab events, oldest first.
pub fn events(lab: &Lab) -> Paragraph<'static> {
    let events = lab.events();
    let tail = &events[events.len().saturating_sub(EVENT_TAIL)..];

    let lines: Vec<Line> = tail
        .iter()
        .map(|e| {
            Line::from(vec![
                Span::styled(format!("[{}] ", e.algorithm.id()), Theme::accent_cyan()),
                Span::styled(e.message.clone(), Theme::dim()),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("Events"))
}

/// A single line of `key  action` pairs.
pub fn hints(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Theme::dim()),
                Span::styled(format!("  {action}    "), Theme::muted()),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Draws `alert` over the last line of `area`.
pub fn render_alert(f: &mut Frame, area: Rect, alert: &Alert) {
    let (icon, style) = match alert.kind {
        AlertKind::Info => (" ✔ ", Theme::ok()),
        AlertKind::Error => (" ✖ ", Theme::error()),
    };

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(icon, style),
            Span::styled(alert.message.clone(), style),
        ]))
        .style(Theme::base()),
        layout::bottom_bar(area),
    );
}
