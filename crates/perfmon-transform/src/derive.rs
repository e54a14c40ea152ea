//! Fields derived from the composite counter name.
//!
//! A perfmon counter path looks like
//! `\\Server\PhysicalDisk(0 C:)\Disk Reads/sec`: machine, object instance,
//! then the counter itself. Both derivations are pure functions of the name.

use std::sync::LazyLock;

use regex::Regex;

static VOLUME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]:").expect("volume pattern"));

/// Extract the drive-letter token (`C:`) from a counter name: the first
/// occurrence of one uppercase ASCII letter immediately followed by a colon.
/// Counters that do not target a specific volume (e.g. `_Total` instances)
/// yield `None`.
pub fn derive_volume(original_metric_name: &str) -> Option<String> {
    VOLUME_PATTERN
        .find(original_metric_name)
        .map(|m| m.as_str().to_string())
}

/// Strip the namespace path from a counter name: everything after the last
/// backslash, or the whole name when no backslash is present.
pub fn derive_metric(original_metric_name: &str) -> String {
    match original_metric_name.rfind('\\') {
        Some(idx) => original_metric_name[idx + 1..].to_string(),
        None => original_metric_name.to_string(),
    }
}
