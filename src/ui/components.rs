//! Footer bar rendering for the terminal
//!
//! Mirrors the HTML item body: icon, a space, then the text. Linked
//! items are underlined; plain-text items are not.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::footer::{FooterLink, IconName};
use crate::theme::Theme;

/// Nerd Font glyph for an icon name, `•` when unknown
pub fn icon_glyph(icon: &IconName) -> &'static str {
    match icon.as_str() {
        "download-alt" => "󰇚",
        "external-link-alt" => "\u{f08e}",
        "envelope" => "󰇮",
        "question-circle" => "󰋖",
        "info-circle" => "󰋼",
        "github" => "\u{f09b}",
        "home" => "󰋜",
        "star" => "\u{f005}",
        _ => "•",
    }
}

pub fn footer_line<'a>(links: &'a [FooterLink], theme: &Theme, selected: Option<usize>) -> Line<'a> {
    let mut spans = Vec::with_capacity(links.len() * 4);

    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.text_dim)));
        }

        if let Some(icon) = link.icon() {
            spans.push(Span::styled(icon_glyph(icon), Style::default().fg(theme.accent)));
            spans.push(Span::raw(" "));
        }

        let mut style = if link.href().is_some() {
            Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text)
        };
        if selected == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(link.text.as_str(), style));
    }

    Line::from(spans)
}
