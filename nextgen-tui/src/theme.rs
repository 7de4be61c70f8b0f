//! Glass/neon theme tokens for the NEXTGEN TUI
//!
//! # Color Palette
//! - **Background**: Deep navy (base layer)
//! - **Primary**: Electric violet (titles, focus, primary action)
//! - **Success**: Neon green (CALL signals, confirmations)
//! - **Warning**: Amber (PUT signals, warnings)
//! - **Destructive**: Red (errors, rejected login)
//! - **Muted**: Slate (secondary text, hints)

use ratatui::style::{Color, Modifier, Style};

use nextgen_core::Direction;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub primary: Color,
    pub primary_glow: Color,
    pub success: Color,
    pub warning: Color,
    pub destructive: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon_glass()
    }
}

impl Theme {
    pub const fn neon_glass() -> Self {
        Self {
            background: Color::Rgb(12, 14, 28),
            primary: Color::Rgb(139, 92, 246),
            primary_glow: Color::Rgb(192, 132, 252),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(245, 158, 11),
            destructive: Color::Rgb(239, 68, 68),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::White,
        }
    }

    /// CALL uses the success colour, PUT the warning colour.
    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Call => self.success,
            Direction::Put => self.warning,
        }
    }
}

const THEME: Theme = Theme::neon_glass();

pub fn accent() -> Style {
    Style::default().fg(THEME.primary)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn glow() -> Style {
    Style::default()
        .fg(THEME.primary_glow)
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.success)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.destructive)
}

pub fn direction(direction: Direction) -> Style {
    Style::default()
        .fg(THEME.direction_color(direction))
        .add_modifier(Modifier::BOLD)
}

/// Highlight for the focused control or selected row.
pub fn focused() -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(THEME.primary)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        glow()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_colors() {
        let theme = Theme::default();
        assert_eq!(theme.direction_color(Direction::Call), theme.success);
        assert_eq!(theme.direction_color(Direction::Put), theme.warning);
    }

    #[test]
    fn focus_inverts() {
        let s = focused();
        assert_eq!(s.bg, Some(THEME.primary));
        assert_eq!(s.fg, Some(THEME.background));
    }
}
