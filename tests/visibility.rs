#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use tudu::libs::filter::{active_count, completed_count, visible};
    use tudu::libs::task::{Entry, FilterMode, Task};

    fn entry(id: i64, title: &str, completed: bool) -> Entry {
        Entry::confirmed(Task::new(id, title, completed, 3200))
    }

    fn ids(entries: &[&Entry]) -> Vec<i64> {
        entries.iter().map(|e| e.task.id).collect()
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let entries = vec![entry(3, "c", true), entry(1, "a", false), entry(2, "b", true)];
        let busy = HashMap::new();

        let shown = visible(&entries, &busy, FilterMode::All);
        assert_eq!(ids(&shown), vec![3, 1, 2]);
    }

    #[test]
    fn active_and_completed_split_on_confirmed_status() {
        let entries = vec![entry(1, "a", false), entry(2, "b", true), entry(3, "c", false)];
        let busy = HashMap::new();

        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Active)), vec![1, 3]);
        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Completed)), vec![2]);
    }

    #[test]
    fn pending_status_override_reclassifies_when_settled() {
        let mut entries = vec![entry(1, "a", false), entry(2, "b", false)];
        entries[0].set_pending_completed(true);
        let busy = HashMap::new();

        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Completed)), vec![1]);
        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Active)), vec![2]);
    }

    #[test]
    fn in_flight_entry_is_classified_by_confirmed_status() {
        let mut entries = vec![entry(1, "a", false)];
        entries[0].set_pending_completed(true);
        let mut busy = HashMap::new();
        busy.insert(1, 1u32);

        // The override is masked while the mutation is in flight, so the
        // task stays in the active bucket instead of vanishing.
        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Active)), vec![1]);
        assert!(visible(&entries, &busy, FilterMode::Completed).is_empty());
    }

    #[test]
    fn filtering_never_reorders() {
        let entries = vec![
            entry(5, "e", true),
            entry(4, "d", false),
            entry(3, "c", true),
            entry(2, "b", false),
            entry(1, "a", true),
        ];
        let busy = HashMap::new();

        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Completed)), vec![5, 3, 1]);
        assert_eq!(ids(&visible(&entries, &busy, FilterMode::Active)), vec![4, 2]);
    }

    #[test]
    fn counts_ignore_pending_overrides() {
        let mut entries = vec![entry(1, "a", false), entry(2, "b", true)];
        entries[0].set_pending_completed(true);

        assert_eq!(active_count(&entries), 1);
        assert_eq!(completed_count(&entries), 1);
    }

    #[test]
    fn effective_title_prefers_the_override() {
        let mut e = entry(1, "a", false);
        assert_eq!(e.effective_title(), "a");

        e.set_pending_title("renamed");
        assert_eq!(e.effective_title(), "renamed");

        // Last writer wins on the same field.
        e.set_pending_title("renamed again");
        assert_eq!(e.effective_title(), "renamed again");

        e.clear_pending();
        assert_eq!(e.effective_title(), "a");
    }
}
