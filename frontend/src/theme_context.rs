use lexblog_shared::{Theme, ThemeStore};
use yew::prelude::*;

fn read_theme(store: &ThemeStore) -> Theme {
    store.get().unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("{err}; falling back to light").into());
        Theme::default()
    })
}

/// What a component needs to render and change the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    store: ThemeStore,
}

impl ThemeHandle {
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }
}

/// Current theme from the nearest [`ThemeProvider`], re-rendering on every
/// store notification while mounted.
///
/// Returns `None` when rendered outside a provider.
#[hook]
pub fn use_theme() -> Option<ThemeHandle> {
    let store = use_context::<ThemeStore>();
    let theme = use_state({
        let store = store.clone();
        move || store.as_ref().map(read_theme)
    });

    {
        let theme = theme.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = store.as_ref().map(|store| {
                // Catch anything that changed between render and mount.
                let current = read_theme(store);
                if *theme != Some(current) {
                    theme.set(Some(current));
                }
                let reader = store.clone();
                store.subscribe(move || theme.set(Some(read_theme(&reader))))
            });
            move || drop(subscription)
        });
    }

    store.map(|store| ThemeHandle {
        theme: (*theme).unwrap_or_else(|| read_theme(&store)),
        store,
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub store: ThemeStore,
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    html! {
        <ContextProvider<ThemeStore> context={props.store.clone()}>
            {props.children.clone()}
        </ContextProvider<ThemeStore>>
    }
}
