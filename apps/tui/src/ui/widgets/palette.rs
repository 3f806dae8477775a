use autodrive_core::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colours for the current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub price: Color,
    pub error: Color,
    pub success: Color,
    pub selected_bg: Color,
}

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Blue,
                text: Color::Reset,
                muted: Color::Gray,
                background: Color::Reset,
                price: Color::Green,
                error: Color::Red,
                success: Color::Green,
                selected_bg: Color::Rgb(0, 0, 238),
            },
            Theme::Dark => Self {
                accent: Color::Yellow,
                text: Color::White,
                muted: Color::DarkGray,
                background: Color::Black,
                price: Color::LightGreen,
                error: Color::LightRed,
                success: Color::LightGreen,
                selected_bg: Color::Rgb(60, 60, 90),
            },
        }
    }

    pub fn base(self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn heading(self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key(self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
