// SPDX-License-Identifier: MIT
//! Job-type normalization.
//!
//! Job types are human-entered on both sides of the calculator lookup: in
//! job definitions and in the configured override map. Normalization makes
//! `"Some Test Job"`, `"some-test-job"` and `"SOME TEST JOB"` meet on the
//! same key regardless of formatting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of whitespace and hyphens collapse into a single separator.
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-]+").expect("regex: job type separators"));

/// Canonicalize a free-form job-type label into a lookup key.
///
/// Lowercases, rewrites separator runs to a single space, and trims. Pure
/// and total: blank input yields the empty key, which never matches a
/// registered override.
pub fn normalize_job_type(raw: &str) -> String {
    SEPARATORS
        .replace_all(&raw.to_lowercase(), " ")
        .trim()
        .to_string()
}
