//! Helpers for string lists such as finalizers or label sets.

/// True when some element of `items` equals `value` exactly (case-sensitive).
pub fn contains_string<S: AsRef<str>>(items: &[S], value: &str) -> bool {
    items.iter().any(|item| item.as_ref() == value)
}

/// Copy of `items` without any element equal to `value`. Order of the
/// remaining elements is preserved.
pub fn remove_string<S: AsRef<str> + Clone>(items: &[S], value: &str) -> Vec<S> {
    items
        .iter()
        .filter(|item| item.as_ref() != value)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_exact() {
        let items = vec!["finalizer.a".to_string(), "Finalizer.B".to_string()];
        assert!(contains_string(&items, "finalizer.a"));
        assert!(!contains_string(&items, "finalizer.b"));
        assert!(!contains_string(&items, "finalizer"));
    }

    #[test]
    fn empty_list() {
        let items: Vec<String> = Vec::new();
        assert!(!contains_string(&items, ""));
        assert!(remove_string(&items, "x").is_empty());
    }

    #[test]
    fn removes_every_occurrence_keeping_order() {
        let items = ["a", "x", "b", "x", "c"];
        assert_eq!(remove_string(&items, "x"), vec!["a", "b", "c"]);
    }

    #[test]
    fn absent_value_leaves_list_unchanged() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(remove_string(&items, "z"), items);
    }

    #[test]
    fn remove_is_idempotent() {
        let items = ["aaaaa", "", "1234!", ""];
        let once = remove_string(&items, "");
        assert_eq!(once, vec!["aaaaa", "1234!"]);
        assert_eq!(remove_string(&once, ""), once);
    }
}
