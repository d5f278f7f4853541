//! Theme colors for the terminal preview
//! Built-in defaults, overridable from the `[theme]` config section

use ratatui::style::Color;

use crate::config::{ConfigError, ThemeSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub link: Color,     // Items with a url
    pub text: Color,     // Plain-text items
    pub text_dim: Color, // Separators, hints
    pub accent: Color,   // Selection, icons, borders
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired
        Self {
            link: Color::Rgb(137, 180, 250),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            accent: Color::Rgb(250, 179, 135),
        }
    }
}

impl Theme {
    /// Apply config overrides on top of the defaults
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            link: Self::pick("link", settings.link.as_deref(), defaults.link)?,
            text: Self::pick("text", settings.text.as_deref(), defaults.text)?,
            text_dim: Self::pick("text_dim", settings.text_dim.as_deref(), defaults.text_dim)?,
            accent: Self::pick("accent", settings.accent.as_deref(), defaults.accent)?,
        })
    }

    /// Like `from_settings`, but logs and falls back to defaults on bad input
    pub fn load(settings: &ThemeSettings) -> Self {
        match Self::from_settings(settings) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Ignoring theme: {}", e);
                Self::default()
            }
        }
    }

    fn pick(key: &'static str, value: Option<&str>, fallback: Color) -> Result<Color, ConfigError> {
        match value {
            None => Ok(fallback),
            Some(v) => Self::parse_hex_color(v).ok_or_else(|| ConfigError::InvalidColor {
                key,
                value: v.to_string(),
            }),
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
