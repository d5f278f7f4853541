use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::footer::{Footer, FooterLink, LinkProvider};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Terminal preview state. Toggles only touch the in-memory config copy.
pub struct App {
    pub popup: Popup,
    pub config: AppConfig,
    pub theme: Theme,

    // Preview props
    pub hide_edition: bool,
    pub use_custom_links: bool,

    // Selected link, tracked by id so it survives re-renders
    pub selected: Option<String>,

    // Shown in the info line until the next key press
    pub status_message: Option<String>,

    provider: Option<Arc<dyn LinkProvider>>,
}

impl App {
    pub fn new(config: AppConfig, hide_edition: bool) -> Self {
        let theme = Theme::load(&config.theme);
        let hide_edition = hide_edition || config.footer.hide_edition;
        let use_custom_links = config.footer.custom_links.is_some();

        let mut app = Self {
            popup: Popup::None,
            config,
            theme,
            hide_edition,
            use_custom_links,
            selected: None,
            status_message: None,
            provider: None,
        };
        app.reselect(0);
        app
    }

    /// Use `provider` instead of the process-wide link provider
    #[cfg(test)]
    pub fn with_provider(mut self, provider: Arc<dyn LinkProvider>) -> Self {
        self.provider = Some(provider);
        self.reselect(0);
        self
    }

    pub fn footer(&self) -> Footer {
        let custom_links = if self.use_custom_links {
            self.config.footer.custom_links.clone()
        } else {
            None
        };

        let footer = Footer::new(custom_links, self.hide_edition);
        match &self.provider {
            Some(provider) => footer.with_provider(Arc::clone(provider)),
            None => footer,
        }
    }

    pub fn links(&self) -> Vec<FooterLink> {
        self.footer().links(&self.config)
    }

    pub fn selected_index(&self, links: &[FooterLink]) -> Option<usize> {
        let id = self.selected.as_deref()?;
        links.iter().position(|l| l.id == id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        if self.popup == Popup::Help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                self.popup = Popup::None;
            }
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Char('e') => self.toggle(|app| {
                app.hide_edition = !app.hide_edition;
                format!("Edition {}", shown(!app.hide_edition))
            }),
            KeyCode::Char('v') => self.toggle(|app| {
                let build = &mut app.config.build_info;
                build.hide_version = !build.hide_version;
                format!("Version {}", shown(!build.hide_version))
            }),
            KeyCode::Char('u') => self.toggle(|app| {
                let build = &mut app.config.build_info;
                build.has_update = !build.has_update;
                format!("Update notice {}", shown(build.has_update))
            }),
            KeyCode::Char('c') => {
                if self.config.footer.custom_links.is_none() {
                    self.status_message = Some("No custom links configured".to_string());
                    return;
                }
                self.toggle(|app| {
                    app.use_custom_links = !app.use_custom_links;
                    let source = if app.use_custom_links { "custom" } else { "default" };
                    format!("Using {} links", source)
                });
            }
            KeyCode::Char('?') => self.popup = Popup::Help,
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let links = self.links();
        if links.is_empty() {
            self.selected = None;
            return;
        }

        let current = self.selected_index(&links).unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, links.len() as isize - 1) as usize;
        self.selected = Some(links[next].id.clone());
    }

    fn toggle(&mut self, apply: impl FnOnce(&mut Self) -> String) {
        let previous = self.selected_index(&self.links()).unwrap_or(0);
        let message = apply(self);
        self.reselect(previous);
        tracing::debug!("{}", message);
        self.status_message = Some(message);
    }

    /// Keep the selected id when still present, else clamp to `fallback`
    fn reselect(&mut self, fallback: usize) {
        let links = self.links();
        if self.selected_index(&links).is_some() {
            return;
        }
        self.selected = links
            .get(fallback.min(links.len().saturating_sub(1)))
            .map(|l| l.id.clone());
    }
}

fn shown(visible: bool) -> &'static str {
    if visible { "shown" } else { "hidden" }
}
