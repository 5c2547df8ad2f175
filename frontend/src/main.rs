//! Browser entry point: installs the theme store, loads the embedded content
//! and mounts the router.

mod components;
mod config;
mod i18n;
mod pages;
mod router;
mod seo;
mod site_context;
mod theme_bootstrap;
mod theme_context;

#[cfg(test)]
mod test_support;

use lexblog_shared::ThemeStore;
use yew::prelude::*;

use crate::{
    components::error_banner::ErrorBanner,
    site_context::{SiteContent, SiteContentProvider},
    theme_context::ThemeProvider,
};

#[derive(Properties, PartialEq)]
struct AppProps {
    store: ThemeStore,
    content: SiteContent,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ThemeProvider store={props.store.clone()}>
            <SiteContentProvider content={props.content.clone()}>
                <router::AppRouter />
            </SiteContentProvider>
        </ThemeProvider>
    }
}

#[derive(Properties, PartialEq)]
struct ContentErrorProps {
    message: String,
}

#[function_component(ContentError)]
fn content_error(props: &ContentErrorProps) -> Html {
    html! {
        <main class="shell">
            <ErrorBanner message={props.message.clone()} auto_dismiss={false} />
        </main>
    }
}

fn main() {
    // Before the first render so the first paint already has the right colors.
    let store = theme_bootstrap::install();

    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                store,
                content,
            })
            .render();
        },
        Err(err) => {
            let message = i18n::fill_one(i18n::current::error_banner::CONTENT_LOAD_FAILED_TEMPLATE, &err);
            web_sys::console::error_1(&message.clone().into());
            yew::Renderer::<ContentError>::with_props(ContentErrorProps {
                message,
            })
            .render();
        },
    }
}
