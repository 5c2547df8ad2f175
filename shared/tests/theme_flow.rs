//! Toggle, store and page-shell interplay exercised through the public API.

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use lexblog_shared::{resolve_initial_theme, Theme, ThemeStore};

    /// Stands in for a mounted page shell: re-reads the store on every
    /// notification and records the theme color it would publish.
    struct ShellProbe {
        published: Rc<RefCell<Vec<&'static str>>>,
        _subscription: lexblog_shared::Subscription,
    }

    impl ShellProbe {
        fn mount(store: &ThemeStore) -> Self {
            let published = Rc::new(RefCell::new(Vec::new()));
            let sink = published.clone();
            let reader = store.clone();
            let subscription = store.subscribe(move || {
                let theme = reader.get().expect("store initialized by bootstrap");
                sink.borrow_mut().push(theme.meta_color());
            });
            Self {
                published,
                _subscription: subscription,
            }
        }

        fn last_color(&self) -> Option<&'static str> {
            self.published.borrow().last().copied()
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn toggle_to_dark_updates_store_and_theme_color() {
        init_tracing();
        let store = ThemeStore::new(resolve_initial_theme(None, false));
        assert_eq!(store.get(), Ok(Theme::Light));
        let shell = ShellProbe::mount(&store);

        // The toggle reports its new checked state; the shell maps it.
        let emitted_checked = !store.get().expect("initialized").is_dark();
        store.set(Theme::from_checked(emitted_checked));

        assert_eq!(store.get(), Ok(Theme::Dark));
        assert_eq!(shell.last_color(), Some("#282c35"));
    }

    #[test]
    fn every_mounted_shell_observes_changes() {
        init_tracing();
        let store = ThemeStore::new(Theme::Dark);
        let first = ShellProbe::mount(&store);
        let second = ShellProbe::mount(&store);

        store.set(Theme::Light);

        assert_eq!(first.last_color(), Some("#ffa8c5"));
        assert_eq!(second.last_color(), Some("#ffa8c5"));
    }

    #[test]
    fn unmounted_shell_stops_observing() {
        init_tracing();
        let store = ThemeStore::new(Theme::Light);
        let kept = ShellProbe::mount(&store);
        let gone = ShellProbe::mount(&store);
        let gone_log = gone.published.clone();
        drop(gone);

        store.set(Theme::Dark);

        assert_eq!(kept.last_color(), Some("#282c35"));
        assert!(gone_log.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn persistence_slot_and_shells_both_fire() {
        init_tracing();
        let store = ThemeStore::new(Theme::Light);
        let persisted = Rc::new(RefCell::new(None));
        let sink = persisted.clone();
        let reader = store.clone();
        store.on_change(move || *sink.borrow_mut() = reader.get().ok().map(Theme::as_str));
        let shell = ShellProbe::mount(&store);

        store.set(Theme::Dark);

        assert_eq!(*persisted.borrow(), Some("dark"));
        assert_eq!(shell.last_color(), Some("#282c35"));
    }
}
