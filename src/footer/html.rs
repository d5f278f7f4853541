//! HTML rendering of the footer
//!
//! Output shape:
//! `<footer class="footer"><div class="text-center"><ul><li>…</li></ul></div></footer>`

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::sync::Arc;

use crate::config::AppConfig;

use super::links::{self, LinkProvider};
use super::{version_links, FooterLink, IconName};

/// Footer props. Links are rebuilt on every call; nothing is cached.
#[derive(Clone, Default)]
pub struct Footer {
    /// Replaces the static links when set, even when empty
    pub custom_links: Option<Vec<FooterLink>>,
    pub hide_edition: bool,
    /// Used instead of the process-wide provider when set
    pub provider: Option<Arc<dyn LinkProvider>>,
}

impl std::fmt::Debug for Footer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Footer")
            .field("custom_links", &self.custom_links)
            .field("hide_edition", &self.hide_edition)
            .field("provider", &self.provider.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl Footer {
    pub fn new(custom_links: Option<Vec<FooterLink>>, hide_edition: bool) -> Self {
        Self {
            custom_links,
            hide_edition,
            provider: None,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn LinkProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Effective links: custom or static links, then the version links
    pub fn links(&self, config: &AppConfig) -> Vec<FooterLink> {
        let mut links = match (&self.custom_links, &self.provider) {
            (Some(custom), _) => custom.clone(),
            (None, Some(provider)) => provider.links(),
            (None, None) => links::footer_links(),
        };
        links.extend(version_links(
            &config.build_info,
            &config.license_info,
            self.hide_edition,
        ));
        links
    }

    pub fn render(&self, config: &AppConfig) -> String {
        render_links(&self.links(config))
    }
}

pub fn render_links(links: &[FooterLink]) -> String {
    let mut out = String::from(r#"<footer class="footer"><div class="text-center"><ul>"#);
    for link in links {
        out.push_str("<li>");
        render_item(&mut out, link);
        out.push_str("</li>");
    }
    out.push_str("</ul></div></footer>");
    out
}

fn render_item(out: &mut String, link: &FooterLink) {
    if let Some(icon) = link.icon() {
        out.push_str(&render_icon(icon));
    }
    out.push(' ');

    match link.href() {
        Some(url) => out.push_str(&format!(
            r#"<a href="{}" target="{}" rel="noopener noreferrer" id="{}">{}</a>"#,
            encode_double_quoted_attribute(url),
            link.target,
            encode_double_quoted_attribute(&link.id),
            encode_text(&link.text),
        )),
        None => out.push_str(&encode_text(&link.text)),
    }
}

pub fn render_icon(icon: &IconName) -> String {
    format!(
        r#"<i class="icon icon-{}" aria-hidden="true"></i>"#,
        encode_double_quoted_attribute(icon.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildInfo, LicenseInfo};
    use crate::footer::links::{set_footer_links_fn, DefaultLinks, StaticLinks, REGISTRY_LOCK};
    use crate::footer::version::CHANGELOG_URL;

    fn config() -> AppConfig {
        AppConfig {
            build_info: BuildInfo {
                edition: "OSS".to_string(),
                version: "10.0.0".to_string(),
                commit: "abc123".to_string(),
                hide_version: false,
                has_update: false,
            },
            license_info: LicenseInfo::default(),
            ..Default::default()
        }
    }

    fn ids(links: &[FooterLink]) -> Vec<&str> {
        links.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_custom_links_hide_static_links() {
        let footer = Footer::new(Some(vec![]), false)
            .with_provider(Arc::new(DefaultLinks));

        assert_eq!(ids(&footer.links(&config())), vec!["license", "version"]);
    }

    #[test]
    fn test_custom_links_come_first() {
        let footer = Footer::new(Some(vec![FooterLink::new("docs", "Docs", None)]), false);

        assert_eq!(ids(&footer.links(&config())), vec!["docs", "license", "version"]);
    }

    #[test]
    fn test_injected_provider_is_used() {
        let footer = Footer::default().with_provider(Arc::new(StaticLinks(vec![
            FooterLink::new("one", "One", None),
        ])));

        assert_eq!(ids(&footer.links(&config())), vec!["one", "license", "version"]);
    }

    #[test]
    fn test_hide_edition_keeps_only_static_links() {
        let footer = Footer::new(None, true).with_provider(Arc::new(DefaultLinks));

        assert_eq!(ids(&footer.links(&config())), vec!["adftech", "email", "whatsapp"]);
    }

    #[test]
    fn test_default_footer_follows_registry_override() {
        let _guard = REGISTRY_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        set_footer_links_fn(|| vec![FooterLink::new("only", "Only", None)]);
        let links = Footer::new(None, true).links(&config());
        set_footer_links_fn(DefaultLinks);

        assert_eq!(ids(&links), vec!["only"]);
    }

    #[test]
    fn test_render_structure() {
        let footer = Footer::new(Some(vec![]), false);
        let html = footer.render(&config());

        assert!(html.starts_with(r#"<footer class="footer"><div class="text-center"><ul><li>"#));
        assert!(html.ends_with("</li></ul></div></footer>"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains(&format!(
            r#"<li> <a href="{}" target="_blank" rel="noopener noreferrer" id="version">v10.0.0 (abc123)</a></li>"#,
            CHANGELOG_URL
        )));
    }

    #[test]
    fn test_plain_text_item_has_no_anchor() {
        // license has no url in the default config
        let html = Footer::new(Some(vec![]), false).render(&AppConfig {
            build_info: BuildInfo {
                hide_version: true,
                ..config().build_info
            },
            ..config()
        });

        assert_eq!(
            html,
            r#"<footer class="footer"><div class="text-center"><ul><li> OSS</li></ul></div></footer>"#
        );
    }

    #[test]
    fn test_icon_precedes_link() {
        let link = FooterLink::new("update", "Update", Some("https://example.com".to_string()))
            .with_icon("download-alt");
        let html = render_links(&[link]);

        assert!(html.contains(
            r#"<li><i class="icon icon-download-alt" aria-hidden="true"></i> <a href="https://example.com""#
        ));
    }

    #[test]
    fn test_every_anchor_is_safe_cross_origin() {
        let mut cfg = config();
        cfg.build_info.has_update = true;
        cfg.license_info.license_url = Some("https://example.com/license".to_string());
        let html = Footer::new(None, false).with_provider(Arc::new(DefaultLinks)).render(&cfg);

        let anchors = html.matches("<a ").count();
        assert_eq!(anchors, 6);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), anchors);
    }

    #[test]
    fn test_empty_url_renders_plain_text() {
        let mut cfg = config();
        cfg.build_info.hide_version = true;
        cfg.license_info.license_url = Some(String::new());
        let html = Footer::new(Some(vec![]), false).render(&cfg);

        assert!(html.contains("<li> OSS</li>"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_empty_icon_is_not_rendered() {
        let link = FooterLink::new("x", "X", None).with_icon("");
        let html = render_links(&[link]);

        assert!(html.contains("<li> X</li>"));
        assert!(!html.contains("<i "));
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let link = FooterLink::new(
            "x\"y",
            "<b>Tom & Jerry</b>",
            Some("https://example.com/?a=1&b=\"2\"".to_string()),
        );
        let html = render_links(&[link]);

        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(r#"id="x&quot;y""#));
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
