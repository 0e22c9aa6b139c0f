use ratatui::style::{Color, Modifier, Style};

/// Neon-green terminal theme.
///
/// Green carries regular content, cyan marks whatever the keyboard is on and
/// magenta/yellow are kept for chart series so they never read as status.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    pub const ACCENT_CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ACCENT_MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ACCENT_RED: Color = Color::Rgb(255, 70, 70);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG_NEON)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The row or tab the keyboard is on.
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .bg(Color::Rgb(0, 30, 0))
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_cyan() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    /// Observed points of class 0, and of regression series.
    pub fn series_primary() -> Style {
        Style::default().fg(Self::ACCENT_YELLOW)
    }

    /// Observed points of class 1.
    pub fn series_secondary() -> Style {
        Style::default().fg(Self::ACCENT_MAGENTA)
    }

    /// The model's clean prediction line.
    pub fn series_model() -> Style {
        Style::default().fg(Self::ACCENT_CYAN)
    }
}
