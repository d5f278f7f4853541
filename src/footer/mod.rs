//! Footer link model and the builders that produce footer links
//!
//! Two producers feed the renderer: the static link provider (`links`)
//! and the version link builder (`version`). `html` merges them.

pub mod html;
pub mod links;
pub mod version;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use html::Footer;
pub use links::{set_footer_links_fn, LinkProvider, StaticLinks};
pub use version::version_links;

/// How a link opens when followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::SelfFrame => "_self",
            LinkTarget::Parent => "_parent",
            LinkTarget::Top => "_top",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named icon reference, e.g. `download-alt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconName(String);

impl IconName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single footer entry. Built fresh per render and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    #[serde(default)]
    pub target: LinkTarget,
    pub text: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
    /// No url means the entry renders as plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FooterLink {
    /// A `_blank` link without icon
    pub fn new(id: impl Into<String>, text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            target: LinkTarget::Blank,
            text: text.into(),
            id: id.into(),
            icon: None,
            url,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(IconName::new(icon));
        self
    }

    /// Destination, if any. An empty url renders as plain text.
    pub fn href(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Icon, if any. An empty name draws nothing.
    pub fn icon(&self) -> Option<&IconName> {
        self.icon.as_ref().filter(|i| !i.as_str().is_empty())
    }
}
