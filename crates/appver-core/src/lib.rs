//! Version ordering and update decisions for appver.
//!
//! This crate is independent of the CLI and of any I/O:
//! - Lenient comparison of dotted version strings.
//! - A parsed [`Version`] type with the same ordering.
//! - Pure update-availability decisions driven by an [`UpdatePolicy`].

mod compare;
mod update;
mod version;

/// Dotted version string comparison.
pub use compare::{compare_versions, compare_versions_sign};
/// Update policy model and decision helpers.
pub use update::{
    AppUpdate, UpdateBehavior, UpdateKind, UpdatePolicy, check_for_update, is_update_available,
    strip_tag_prefix,
};
/// Parsed version value.
pub use version::{Segment, Version};
