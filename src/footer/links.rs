//! Static footer links and the process-wide provider registry
//!
//! The registry holds a single [`LinkProvider`], initialised to
//! [`DefaultLinks`]. [`set_footer_links_fn`] replaces it for every later
//! call to [`footer_links`]; there is no way back except installing
//! another provider. Installs are expected during application setup.

use std::sync::{Arc, OnceLock, RwLock};

use super::FooterLink;

/// Produces the static part of the footer, in display order
pub trait LinkProvider: Send + Sync {
    fn links(&self) -> Vec<FooterLink>;
}

impl<F> LinkProvider for F
where
    F: Fn() -> Vec<FooterLink> + Send + Sync,
{
    fn links(&self) -> Vec<FooterLink> {
        self()
    }
}

/// Built-in company/contact links
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLinks;

impl LinkProvider for DefaultLinks {
    fn links(&self) -> Vec<FooterLink> {
        vec![
            FooterLink::new(
                "adftech",
                "ADF Technologies",
                Some("https://www.adftech.com.my/".to_string()),
            ),
            FooterLink::new(
                "email",
                "Email Us",
                Some("mailto:sales@adftech.com.my".to_string()),
            ),
            FooterLink::new(
                "whatsapp",
                "WhatsApp Us",
                Some(
                    "https://api.whatsapp.com/send/?phone=60175521163&text&type=phone_number&app_absent=0"
                        .to_string(),
                ),
            ),
        ]
    }
}

/// A fixed list, e.g. links read from the config file
#[derive(Debug, Clone, Default)]
pub struct StaticLinks(pub Vec<FooterLink>);

impl LinkProvider for StaticLinks {
    fn links(&self) -> Vec<FooterLink> {
        self.0.clone()
    }
}

static PROVIDER: OnceLock<RwLock<Arc<dyn LinkProvider>>> = OnceLock::new();

fn registry() -> &'static RwLock<Arc<dyn LinkProvider>> {
    PROVIDER.get_or_init(|| RwLock::new(Arc::new(DefaultLinks)))
}

/// Current process-wide provider
pub fn current_provider() -> Arc<dyn LinkProvider> {
    let guard = registry().read().unwrap_or_else(|e| e.into_inner());
    Arc::clone(&*guard)
}

/// Static footer links from the installed provider
pub fn footer_links() -> Vec<FooterLink> {
    current_provider().links()
}

/// Replace the process-wide provider. Last writer wins.
pub fn set_footer_links_fn<P>(provider: P)
where
    P: LinkProvider + 'static,
{
    let mut guard = registry().write().unwrap_or_else(|e| e.into_inner());
    *guard = Arc::new(provider);
    tracing::info!("Installed custom footer link provider");
}

/// Serialises tests that touch the process-wide registry
#[cfg(test)]
pub(crate) static REGISTRY_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footer::LinkTarget;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        REGISTRY_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_default_links_order() {
        let links = DefaultLinks.links();
        let ids: Vec<&str> = links.iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["adftech", "email", "whatsapp"]);
        assert!(links.iter().all(|l| l.icon.is_none()));
        assert!(links.iter().all(|l| l.target == LinkTarget::Blank));
        assert_eq!(links[1].url.as_deref(), Some("mailto:sales@adftech.com.my"));
    }

    #[test]
    fn test_override_replaces_default_until_next_override() {
        let _guard = lock();

        set_footer_links_fn(|| vec![FooterLink::new("custom", "Custom", None)]);
        let links = footer_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, "custom");

        // Repeated calls keep using the replacement
        assert_eq!(footer_links(), links);

        set_footer_links_fn(StaticLinks(vec![
            FooterLink::new("a", "A", None),
            FooterLink::new("b", "B", None),
        ]));
        assert_eq!(footer_links().len(), 2);

        set_footer_links_fn(DefaultLinks);
        assert_eq!(footer_links(), DefaultLinks.links());
    }
}
