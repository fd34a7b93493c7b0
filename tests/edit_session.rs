#[cfg(test)]
mod tests {
    use tudu::libs::edit::{decide_commit, CommitAction, EditSession};

    #[test]
    fn session_starts_idle() {
        let session = EditSession::default();
        assert_eq!(session, EditSession::Idle);
        assert!(session.as_view().is_none());
    }

    #[test]
    fn begin_seeds_draft_with_current_title() {
        let mut session = EditSession::default();
        session.begin(7, "buy milk");

        assert!(session.is_editing(7));
        assert!(!session.is_editing(8));
        assert_eq!(session.as_view(), Some((7, "buy milk")));
    }

    #[test]
    fn starting_a_new_session_replaces_the_old_one() {
        let mut session = EditSession::default();
        session.begin(1, "first");
        session.begin(2, "second");

        assert_eq!(session.as_view(), Some((2, "second")));
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut session = EditSession::default();
        session.begin(1, "first");
        session.cancel();

        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn reopen_restores_a_known_draft() {
        let mut session = EditSession::default();
        session.begin(1, "first");
        session.close();
        session.reopen(1, "first");

        assert_eq!(session.as_view(), Some((1, "first")));
    }

    #[test]
    fn unchanged_title_commits_to_cancel() {
        assert_eq!(decide_commit("  buy milk ", "buy milk"), CommitAction::Cancel);
        assert_eq!(decide_commit("buy milk", "buy milk"), CommitAction::Cancel);
    }

    #[test]
    fn changed_title_commits_to_trimmed_rename() {
        assert_eq!(
            decide_commit("  buy bread ", "buy milk"),
            CommitAction::Rename("buy bread".to_string())
        );
    }

    #[test]
    fn empty_draft_commits_to_delete() {
        assert_eq!(decide_commit("", "buy milk"), CommitAction::Delete);
        assert_eq!(decide_commit("   ", "buy milk"), CommitAction::Delete);
    }
}
