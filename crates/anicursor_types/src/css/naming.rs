//! Identifier derivation from source URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix of every style scope id
pub const SCOPE_PREFIX: &str = "cursor-animation-";

/// Suffix appended to a scope id to name its keyframes
pub const KEYFRAMES_SUFFIX: &str = "-keyframes";

static INVALID_RUN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9-]+").expect("static pattern"));

/// Replaces every run of characters outside `[A-Za-z0-9-]` with a single `-`.
///
/// # Examples
///
/// ```
/// use anicursor_types::css::sanitize;
///
/// assert_eq!(sanitize("/cursors/busy.ani"), "-cursors-busy-ani");
/// assert_eq!(sanitize("a%%20b"), "a-20b");
/// ```
pub fn sanitize(source: &str) -> String {
	INVALID_RUN.replace_all(source, "-").into_owned()
}

/// Class name scoping the animation derived from `source`.
///
/// The mapping is deterministic, so loading the same source twice yields the
/// same id.
pub fn style_scope_id(source: &str) -> String {
	format!("{SCOPE_PREFIX}{}", sanitize(source))
}

/// Name of the `@keyframes` rule belonging to `scope_id`.
pub fn animation_name(scope_id: &str) -> String {
	format!("{scope_id}{KEYFRAMES_SUFFIX}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scope_id_from_url() {
		assert_eq!(
			style_scope_id("https://example.com/cursors/Busy_01.ani"),
			"cursor-animation-https-example-com-cursors-Busy-01-ani"
		);
	}

	#[test]
	fn test_runs_collapse() {
		assert_eq!(sanitize("a/../b"), "a-b");
		assert_eq!(sanitize("--keep--"), "--keep--");
		assert_eq!(sanitize("ünï"), "-n-");
	}

	#[test]
	fn test_distinct_skeletons_stay_distinct() {
		assert_ne!(style_scope_id("a/b.ani"), style_scope_id("ab.ani"));
		assert_ne!(style_scope_id("x.ani?v=1"), style_scope_id("x.ani?v=2"));
	}

	#[test]
	fn test_deterministic() {
		let url = "/static/cursors/link select.ani";
		assert_eq!(style_scope_id(url), style_scope_id(url));
		assert_eq!(
			animation_name(&style_scope_id(url)),
			"cursor-animation--static-cursors-link-select-ani-keyframes"
		);
	}
}
