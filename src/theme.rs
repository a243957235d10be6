use ratatui::style::{Color, Modifier, Style};

use crate::toast::ToastLevel;

// Base16 slots, Oceanic Next values.
#[derive(Clone, Debug)]
pub struct Base16Palette {
    pub base_00: Color, // Background
    pub base_01: Color, // Lighter background
    pub base_02: Color, // Selection background
    pub base_03: Color, // Comments, invisibles
    pub base_04: Color, // Dark foreground
    pub base_05: Color, // Default foreground
    pub base_06: Color, // Light foreground
    pub base_07: Color, // Light background
    pub base_08: Color, // Red
    pub base_0a: Color, // Yellow
    pub base_0b: Color, // Green
    pub base_0d: Color, // Blue
}

pub static PALETTE: Base16Palette = Base16Palette {
    base_00: Color::Rgb(0x1B, 0x2B, 0x34),
    base_01: Color::Rgb(0x34, 0x3D, 0x46),
    base_02: Color::Rgb(0x4F, 0x5B, 0x66),
    base_03: Color::Rgb(0x65, 0x73, 0x7E),
    base_04: Color::Rgb(0xA7, 0xAD, 0xBA),
    base_05: Color::Rgb(0xC0, 0xC5, 0xCE),
    base_06: Color::Rgb(0xCD, 0xD3, 0xDE),
    base_07: Color::Rgb(0xF0, 0xF4, 0xF8),
    base_08: Color::Rgb(0xEC, 0x5F, 0x67),
    base_0a: Color::Rgb(0xFA, 0xC8, 0x63),
    base_0b: Color::Rgb(0x99, 0xC7, 0x94),
    base_0d: Color::Rgb(0x66, 0x99, 0xCC),
};

impl Base16Palette {
    pub fn text(&self) -> Style {
        Style::default().fg(self.base_05)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.base_03)
    }

    pub fn border(&self, is_focused: bool) -> Style {
        if is_focused {
            Style::default().fg(self.base_04)
        } else {
            Style::default().fg(self.base_03)
        }
    }

    pub fn active_page(&self) -> Style {
        Style::default()
            .fg(self.base_00)
            .bg(self.base_0d)
            .add_modifier(Modifier::BOLD)
    }

    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.base_07)
            .bg(self.base_02)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn toast_accent(&self, level: ToastLevel) -> Color {
        match level {
            ToastLevel::Info => self.base_0d,
            ToastLevel::Success => self.base_0b,
            ToastLevel::Warning => self.base_0a,
            ToastLevel::Error => self.base_08,
        }
    }
}

pub fn palette() -> &'static Base16Palette {
    &PALETTE
}
