use lexblog_shared::{resolve_initial_theme, Theme, ThemeStore};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MediaQueryList, MediaQueryListEvent, Storage};

use crate::config::{DARK_SCHEME_QUERY, THEME_STORAGE_KEY};

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window().and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

fn stored_preference() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn persist_preference(theme: Theme) {
    if let Some(storage) = local_storage() {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            web_sys::console::warn_1(&"Failed to persist theme preference".into());
        }
    }
}

/// Puts the theme's CSS variable set in effect: `body.light` / `body.dark`
/// plus `data-theme` on the root element.
pub fn apply_to_document(theme: Theme) {
    let Some(doc) = window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(body) = doc.body() {
        let classes = body.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Creates the app's theme store before the first render.
///
/// The stored preference (or the OS color scheme) picks the initial theme,
/// which is applied to the document immediately so the first paint is
/// already correct. The store's single change slot keeps the document and
/// `localStorage` in sync afterwards, and OS scheme changes are forwarded
/// into the store.
pub fn install() -> ThemeStore {
    let query = dark_scheme_query();
    let prefers_dark = query.as_ref().map(MediaQueryList::matches).unwrap_or(false);
    let stored = stored_preference();
    let store = ThemeStore::new(resolve_initial_theme(stored.as_deref(), prefers_dark));

    if let Ok(initial) = store.get() {
        apply_to_document(initial);
    }

    {
        let reader = store.clone();
        store.on_change(move || {
            if let Ok(theme) = reader.get() {
                apply_to_document(theme);
                persist_preference(theme);
            }
        });
    }

    if let Some(query) = query {
        let writer = store.clone();
        let on_scheme_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| {
                writer.set(Theme::from_checked(event.matches()));
            },
        );
        if query
            .add_event_listener_with_callback("change", on_scheme_change.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::warn_1(&"Failed to watch prefers-color-scheme".into());
        }
        // Lives as long as the page.
        on_scheme_change.forget();
    }

    store
}
