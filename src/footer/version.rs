//! License/version/update links derived from build metadata

use crate::config::{BuildInfo, LicenseInfo};

use super::FooterLink;

pub const CHANGELOG_URL: &str = "https://github.com/grafana/grafana/blob/main/CHANGELOG.md";
pub const DOWNLOAD_URL: &str = "https://grafana.com/grafana/download?utm_source=grafana_footer";
pub const UPDATE_TEXT: &str = "New version available!";
pub const UPDATE_ICON: &str = "download-alt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMeta {
    pub is_beta: bool,
    pub has_release_notes: bool,
}

/// Classify a version string. Release notes are currently linked for every
/// build, betas included.
pub fn version_meta(version: &str) -> VersionMeta {
    VersionMeta {
        is_beta: version.contains("-beta"),
        has_release_notes: true,
    }
}

/// Links appended after the static ones: license, then version, then update
pub fn version_links(build: &BuildInfo, license: &LicenseInfo, hide_edition: bool) -> Vec<FooterLink> {
    let mut links = Vec::new();

    if hide_edition {
        return links;
    }

    let state_info = match license.state_info.as_deref() {
        Some(state) if !state.is_empty() => format!(" ({})", state),
        _ => String::new(),
    };

    links.push(FooterLink::new(
        "license",
        format!("{}{}", build.edition, state_info),
        license.license_url.clone().filter(|u| !u.is_empty()),
    ));

    if build.hide_version {
        return links;
    }

    let meta = version_meta(&build.version);
    tracing::trace!(version = %build.version, is_beta = meta.is_beta, "Building version link");

    links.push(FooterLink::new(
        "version",
        format!("v{} ({})", build.version, build.commit),
        meta.has_release_notes.then(|| CHANGELOG_URL.to_string()),
    ));

    if build.has_update {
        links.push(
            FooterLink::new("updateVersion", UPDATE_TEXT, Some(DOWNLOAD_URL.to_string()))
                .with_icon(UPDATE_ICON),
        );
    }

    links
}
