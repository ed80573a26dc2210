use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::compare::compare_versions;
use crate::version::Version;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateBehavior {
    #[default]
    Notify,
    DoNotCheck,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePolicy {
    #[serde(default)]
    pub behavior: UpdateBehavior,

    /// Releases the user chose to ignore.
    #[serde(default)]
    pub skipped_versions: Vec<String>,

    /// Installed versions older than this must update.
    #[serde(default)]
    pub minimum_supported_version: Option<String>,
}

/// Which part of the version moved between the installed and latest release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Major,
    Minor,
    Patch,
    Build,
}

impl UpdateKind {
    fn from_segment(index: usize) -> Self {
        match index {
            0 => Self::Major,
            1 => Self::Minor,
            2 => Self::Patch,
            _ => Self::Build,
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::Build => write!(f, "build"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUpdate {
    pub current_version: Version,
    pub latest_version: Version,
    pub kind: UpdateKind,
    pub mandatory: bool,
}

/// `true` when `current` precedes `latest`.
#[must_use]
pub fn is_update_available(current: &str, latest: &str) -> bool {
    compare_versions(current, latest) == Ordering::Less
}

/// Decide whether an update from `current` to `latest` should be offered.
///
/// Release tags may carry a leading `v`. An update is mandatory when `current`
/// is below [`UpdatePolicy::minimum_supported_version`] and `latest` reaches
/// it; mandatory updates ignore the skip list.
#[must_use]
pub fn check_for_update(current: &str, latest: &str, policy: &UpdatePolicy) -> Option<AppUpdate> {
    if policy.behavior == UpdateBehavior::DoNotCheck {
        debug!("Update check disabled, skipping {current} -> {latest}");
        return None;
    }

    let current = strip_tag_prefix(current);
    let latest = strip_tag_prefix(latest);

    if !is_update_available(current, latest) {
        debug!("No update: installed {current}, latest {latest}");
        return None;
    }

    let mandatory = policy
        .minimum_supported_version
        .as_deref()
        .map(strip_tag_prefix)
        .is_some_and(|minimum| {
            compare_versions(current, minimum).is_lt() && compare_versions(latest, minimum).is_ge()
        });

    if !mandatory
        && policy
            .skipped_versions
            .iter()
            .any(|skipped| compare_versions(strip_tag_prefix(skipped), latest).is_eq())
    {
        debug!("Update to {latest} was skipped by the user");
        return None;
    }

    let current_version = Version::parse(current);
    let latest_version = Version::parse(latest);
    let kind = current_version
        .differing_segment(&latest_version)
        .map_or(UpdateKind::Build, UpdateKind::from_segment);

    debug!("Update available: {current} -> {latest} ({kind}, mandatory: {mandatory})");

    Some(AppUpdate {
        current_version,
        latest_version,
        kind,
        mandatory,
    })
}

/// Drop a single leading `v` or `V` from a release tag.
#[must_use]
pub fn strip_tag_prefix(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}
