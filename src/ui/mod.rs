pub mod components;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, Popup};
use crate::footer::FooterLink;
use crate::theme::Theme;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let links = app.links();
    let selected = app.selected_index(&links);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Min(7),    // Preview settings
            Constraint::Length(1), // Info line
            Constraint::Length(3), // Footer bar
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    draw_settings_box(f, app, chunks[0]);
    draw_info_line(f, app, selected.and_then(|i| links.get(i)), chunks[1]);
    draw_footer_bar(f, app, &links, selected, chunks[2]);
    draw_hints(f, &app.theme, chunks[3]);

    if app.popup == Popup::Help {
        draw_help_popup(f, &app.theme);
    }
}

fn draw_settings_box(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let build = &app.config.build_info;
    let license = &app.config.license_info;

    let on_off = |flag: bool| if flag { "on" } else { "off" };
    let links_source = if app.use_custom_links {
        "custom"
    } else {
        "provider"
    };

    let rows = vec![
        ("Edition", build.edition.clone()),
        ("Version", format!("{} ({})", build.version, build.commit)),
        ("License state", license.state_info.clone().unwrap_or_else(|| "-".to_string())),
        ("(e) Hide edition", on_off(app.hide_edition).to_string()),
        ("(v) Hide version", on_off(build.hide_version).to_string()),
        ("(u) Update available", on_off(build.has_update).to_string()),
        ("(c) Links", links_source.to_string()),
    ]
    .into_iter()
    .map(|(name, value)| {
        Row::new(vec![
            Span::styled(name, Style::default().fg(theme.text_dim)),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(24), Constraint::Min(10)]).block(
        Block::default()
            .title(Span::styled(
                " Footer Preview ",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    f.render_widget(table, area);
}

fn draw_info_line(f: &mut Frame, app: &App, link: Option<&FooterLink>, area: Rect) {
    let theme = &app.theme;

    // Priority: status message > selected link > empty footer
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status.as_str(), Style::default().fg(theme.accent)))
    } else if let Some(link) = link {
        match link.href() {
            Some(url) => Line::from(vec![
                Span::styled(format!("#{} ", link.id), Style::default().fg(theme.text_dim)),
                Span::styled(url, Style::default().fg(theme.link)),
                Span::styled(format!(" ({})", link.target), Style::default().fg(theme.text_dim)),
            ]),
            None => Line::from(vec![
                Span::styled(format!("#{} ", link.id), Style::default().fg(theme.text_dim)),
                Span::styled("plain text", Style::default().fg(theme.text)),
            ]),
        }
    } else {
        Line::from(Span::styled("Footer is empty", Style::default().fg(theme.text_dim)))
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer_bar(f: &mut Frame, app: &App, links: &[FooterLink], selected: Option<usize>, area: Rect) {
    let theme = &app.theme;
    let footer = Paragraph::new(components::footer_line(links, theme, selected))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_dim)),
        );

    f.render_widget(footer, area);
}

fn draw_hints(f: &mut Frame, theme: &Theme, area: Rect) {
    let hints = [("←→", "Select"), ("e", "Edition"), ("v", "Version"), ("u", "Update"), ("?", "Help"), ("q", "Quit")];

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 { 3 } else { hints.len() };

    let spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(theme.text_dim)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_help_popup(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 60 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let key_line = |key: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::raw(what),
        ])
    };
    let heading = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        heading("═══ Preview ═══"),
        key_line("  ←/→ h/l   ", "Select footer link"),
        key_line("  e         ", "Show/hide license and version links"),
        key_line("  v         ", "Show/hide the version link"),
        key_line("  u         ", "Toggle the update notice"),
        key_line("  c         ", "Switch between custom and provider links"),
        Line::from(""),
        Line::from(Span::styled(
            "  Toggles are not written to the config file",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(""),
        heading("═══ Output ═══"),
        key_line("  dashfoot --html   ", "Print the footer as HTML"),
        key_line("  dashfoot --json   ", "Print the footer links as JSON"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.text_dim)),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled("/", Style::default().fg(theme.text_dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to close", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" dashfoot Help ", Style::default().fg(theme.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
