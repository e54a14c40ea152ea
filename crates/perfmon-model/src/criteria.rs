//! Column selection predicates.
//!
//! Counter columns are selected by combining two pattern lists: a column is
//! kept when its name matches at least one `require_any` pattern AND every
//! `require_all` pattern. Patterns are compiled as case-insensitive regexes
//! and matched with search (substring) semantics, not full match.

use regex::{Regex, RegexBuilder};

use crate::error::{PerfmonError, Result};

/// A predicate over column names. Selection logic only sees this trait so
/// criteria sets can be swapped without touching it.
pub trait ColumnPredicate {
    fn matches(&self, name: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct SelectionCriteria {
    require_all: Vec<Regex>,
    require_any: Vec<Regex>,
}

impl SelectionCriteria {
    /// Compile pattern fragments into a criteria set.
    ///
    /// An empty `require_any` list yields an always-false predicate: no
    /// metric column can satisfy "at least one of nothing".
    pub fn new<S: AsRef<str>>(require_all: &[S], require_any: &[S]) -> Result<Self> {
        Ok(Self {
            require_all: compile_patterns(require_all)?,
            require_any: compile_patterns(require_any)?,
        })
    }
}

impl ColumnPredicate for SelectionCriteria {
    fn matches(&self, name: &str) -> bool {
        self.require_any.iter().any(|re| re.is_match(name))
            && self.require_all.iter().all(|re| re.is_match(name))
    }
}

fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern.as_ref())
                .case_insensitive(true)
                .build()
                .map_err(|source| PerfmonError::InvalidPattern {
                    pattern: pattern.as_ref().to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive_search() {
        let criteria =
            SelectionCriteria::new(&["physical"], &["Disk Reads/sec"]).expect("compile");
        assert!(criteria.matches(r"\\Srv\PhysicalDisk(0 C:)\Disk Reads/sec"));
        assert!(!criteria.matches(r"\\Srv\Memory\Pages/sec"));
    }

    #[test]
    fn empty_require_any_matches_nothing() {
        let criteria =
            SelectionCriteria::new::<&str>(&["physical"], &[]).expect("compile");
        assert!(!criteria.matches(r"\\Srv\PhysicalDisk(0 C:)\Disk Reads/sec"));
    }

    #[test]
    fn empty_require_all_is_vacuously_true() {
        let criteria =
            SelectionCriteria::new::<&str>(&[], &["Pages/sec"]).expect("compile");
        assert!(criteria.matches(r"\\Srv\Memory\Pages/sec"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let error = SelectionCriteria::new(&["("], &["x"]).unwrap_err();
        assert!(matches!(error, PerfmonError::InvalidPattern { .. }));
    }
}
