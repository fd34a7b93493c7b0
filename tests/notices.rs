#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tudu::libs::messages::Message;
    use tudu::libs::notice::{Fault, Notices, BANNER_TIMEOUT};

    // These run under a paused clock: `sleep` auto-advances virtual time,
    // so the 3-second banner window elapses instantly.

    #[tokio::test(start_paused = true)]
    async fn banner_auto_hides_but_flags_survive() {
        let notices = Notices::new();
        notices.raise(Fault::Update);

        let snapshot = notices.snapshot();
        assert!(snapshot.show);
        assert!(snapshot.update_failed);

        tokio::time::sleep(BANNER_TIMEOUT + Duration::from_millis(50)).await;

        let snapshot = notices.snapshot();
        assert!(!snapshot.show);
        assert!(snapshot.update_failed, "auto-hide must not clear the flag");
    }

    #[tokio::test(start_paused = true)]
    async fn banner_stays_visible_within_the_window() {
        let notices = Notices::new();
        notices.raise(Fault::Create);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert!(notices.snapshot().show);
    }

    #[tokio::test(start_paused = true)]
    async fn second_fault_does_not_restart_the_timer() {
        let notices = Notices::new();
        notices.raise(Fault::Update);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        notices.raise(Fault::Delete);

        // Both messages render, in the fixed order load, title, create,
        // delete, update.
        let messages = notices.snapshot().messages();
        assert_eq!(messages, vec![Message::UnableToDeleteTodo, Message::UnableToUpdateTodo]);

        // 3s after the first fault the banner hides, even though the second
        // fault arrived only 1.5s ago.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let snapshot = notices.snapshot();
        assert!(!snapshot.show);
        assert!(snapshot.update_failed);
        assert!(snapshot.delete_failed);
    }

    #[tokio::test(start_paused = true)]
    async fn fault_after_auto_hide_does_not_reshow() {
        let notices = Notices::new();
        notices.raise(Fault::Update);
        tokio::time::sleep(BANNER_TIMEOUT + Duration::from_millis(50)).await;
        assert!(!notices.snapshot().show);

        // Flags are still set, so this is not an all-clear transition.
        notices.raise(Fault::Load);
        let snapshot = notices.snapshot();
        assert!(!snapshot.show);
        assert!(snapshot.load_failed);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_all_flags_and_cancels_the_timer() {
        let notices = Notices::new();
        notices.raise(Fault::Update);
        tokio::time::sleep(Duration::from_millis(1000)).await;

        notices.dismiss();
        let snapshot = notices.snapshot();
        assert!(!snapshot.any());
        assert!(!snapshot.show);

        // A fresh fault starts a fresh 3-second window; the stale timer from
        // before the dismissal must not cut it short.
        notices.raise(Fault::Delete);
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(notices.snapshot().show);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(!notices.snapshot().show);
    }

    #[tokio::test(start_paused = true)]
    async fn all_five_messages_render_in_fixed_order() {
        let notices = Notices::new();
        notices.raise(Fault::Update);
        notices.raise(Fault::Create);
        notices.raise(Fault::Load);
        notices.raise(Fault::Delete);
        notices.raise(Fault::EmptyTitle);

        let messages = notices.snapshot().messages();
        assert_eq!(
            messages,
            vec![
                Message::UnableToLoadTodos,
                Message::TitleShouldNotBeEmpty,
                Message::UnableToAddTodo,
                Message::UnableToDeleteTodo,
                Message::UnableToUpdateTodo,
            ]
        );
    }
}
