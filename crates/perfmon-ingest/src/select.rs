//! Column selection against a perfmon CSV header.

use perfmon_model::ColumnPredicate;

/// Select the columns to load from the input header.
///
/// Returns the subset of `headers` matching `predicate`, in their original
/// relative order. The first column is included unconditionally regardless of
/// the predicate: it is the timestamp axis and is required downstream. A
/// first column that also matches the predicate is not duplicated.
pub fn select_columns<P: ColumnPredicate>(headers: &[String], predicate: &P) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| *idx == 0 || predicate.matches(name))
        .map(|(_, name)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(bool);

    impl ColumnPredicate for Always {
        fn matches(&self, _name: &str) -> bool {
            self.0
        }
    }

    fn pdh_headers() -> Vec<String> {
        vec![
            "(PDH-CSV 4.0)".to_string(),
            r"\\Srv\PhysicalDisk(0 C:)\Disk Reads/sec".to_string(),
            r"\\Srv\Memory\Pages/sec".to_string(),
        ]
    }

    #[test]
    fn timestamp_column_survives_an_always_false_predicate() {
        let selected = select_columns(&pdh_headers(), &Always(false));
        assert_eq!(selected, vec!["(PDH-CSV 4.0)".to_string()]);
    }

    #[test]
    fn matching_first_column_is_not_duplicated() {
        let selected = select_columns(&pdh_headers(), &Always(true));
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0], "(PDH-CSV 4.0)");
    }

    #[test]
    fn empty_header_selects_nothing() {
        let selected = select_columns(&[], &Always(true));
        assert!(selected.is_empty());
    }
}
