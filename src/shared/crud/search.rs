//! Client-side search over the currently loaded page.
//!
//! Every predicate is a case-insensitive substring or equality test and the
//! chain is conjunctive. Blank criteria match everything.

/// A module's search form, applied to the items it lists
pub trait SearchFilter<T> {
    /// True when no criterion is set
    fn is_empty(&self) -> bool;

    /// Conjunction of all set criteria
    fn matches(&self, item: &T) -> bool;
}

/// Keep the items matching `form`, in their original order
pub fn apply_client_side_filters<T, F>(items: &[T], form: &F) -> Vec<T>
where
    T: Clone,
    F: SearchFilter<T>,
{
    if form.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| form.matches(item))
        .cloned()
        .collect()
}

/// Returns the trimmed criterion, or `None` when blank
pub fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Case-insensitive substring test; a blank criterion matches anything
pub fn contains_ci(haystack: Option<&str>, needle: &Option<String>) -> bool {
    match criterion(needle) {
        None => true,
        Some(needle) => haystack
            .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false),
    }
}

/// Case-insensitive equality test; a blank criterion matches anything
pub fn equals_ci(value: Option<&str>, expected: &Option<String>) -> bool {
    match criterion(expected) {
        None => true,
        Some(expected) => value
            .map(|v| v.trim().eq_ignore_ascii_case(expected))
            .unwrap_or(false),
    }
}

/// `"true"` / `"false"` filter on a boolean flag; any other value is "any"
pub fn flag_filter(value: &Option<String>) -> Option<bool> {
    match criterion(value).map(str::to_ascii_lowercase).as_deref() {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

pub fn flag_matches(flag: bool, filter: &Option<String>) -> bool {
    flag_filter(filter).map_or(true, |expected| expected == flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        active: bool,
    }

    #[derive(Default)]
    struct RowSearch {
        name: Option<String>,
        active: Option<String>,
    }

    impl SearchFilter<Row> for RowSearch {
        fn is_empty(&self) -> bool {
            criterion(&self.name).is_none() && flag_filter(&self.active).is_none()
        }

        fn matches(&self, item: &Row) -> bool {
            contains_ci(Some(item.name.as_str()), &self.name)
                && flag_matches(item.active, &self.active)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Alpha".to_string(),
                active: true,
            },
            Row {
                name: "beta".to_string(),
                active: false,
            },
            Row {
                name: "ALPHABET".to_string(),
                active: false,
            },
        ]
    }

    #[test]
    fn test_empty_search_is_identity() {
        let items = rows();
        assert_eq!(apply_client_side_filters(&items, &RowSearch::default()), items);

        let blank = RowSearch {
            name: Some("   ".to_string()),
            active: Some("".to_string()),
        };
        assert_eq!(apply_client_side_filters(&items, &blank), items);
    }

    #[test]
    fn test_flag_filter_matches_exactly() {
        let items = rows();
        for (raw, expected) in [("true", true), ("false", false), ("TRUE", true)] {
            let search = RowSearch {
                name: None,
                active: Some(raw.to_string()),
            };
            let result = apply_client_side_filters(&items, &search);
            assert!(!result.is_empty());
            assert!(result.iter().all(|r| r.active == expected));
        }
    }

    #[test]
    fn test_predicates_are_conjunctive_and_case_insensitive() {
        let search = RowSearch {
            name: Some("alpha".to_string()),
            active: Some("false".to_string()),
        };
        let result = apply_client_side_filters(&rows(), &search);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "ALPHABET");
    }

    #[test]
    fn test_unknown_flag_value_means_any() {
        assert_eq!(flag_filter(&Some("all".to_string())), None);
        assert!(flag_matches(false, &Some("maybe".to_string())));
    }

    #[test]
    fn test_missing_value_fails_set_criterion() {
        assert!(!contains_ci(None, &Some("x".to_string())));
        assert!(!equals_ci(None, &Some("EN".to_string())));
        assert!(equals_ci(Some(" en "), &Some("EN".to_string())));
        assert!(equals_ci(None, &None));
    }
}
