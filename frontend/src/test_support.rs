//! Server-side rendering harness for component tests.

use lexblog_shared::{Theme, ThemeStore};
use yew::prelude::*;
use yew_router::{
    history::{AnyHistory, MemoryHistory},
    Router,
};

use crate::{
    site_context::{SiteContent, SiteContentProvider},
    theme_context::ThemeProvider,
};

const SITE_JSON: &str = r#"{
    "title": "Fixture Blog",
    "description": "Fixture description",
    "siteUrl": "https://example.com",
    "avatar": "static/avatar.svg",
    "author": { "name": "Fixture Author", "summary": "Writes fixtures." },
    "social": { "twitter": "fixture", "github": "fixture-gh", "linkedin": "fixture-li" }
}"#;

const POSTS_JSON: &str = r#"[
    {"slug": "first", "title": "First Post", "date": "2019-01-01",
     "spoiler": "The first one.", "body": "Hello **there**."},
    {"slug": "second", "title": "Second Post", "date": "2020-02-02",
     "spoiler": "The second one.", "body": "Again."}
]"#;

pub fn fixture_content() -> SiteContent {
    SiteContent::from_json(SITE_JSON, POSTS_JSON).expect("fixture content parses")
}

#[derive(Properties, PartialEq)]
pub struct AppHarnessProps {
    pub theme: Theme,
    pub view: Callback<(), Html>,
}

#[function_component(AppHarness)]
pub fn app_harness(props: &AppHarnessProps) -> Html {
    let store = use_memo(props.theme, |theme| ThemeStore::new(*theme));
    let content = use_memo((), |_| fixture_content());
    let history = AnyHistory::from(MemoryHistory::new());

    html! {
        <Router {history}>
            <ThemeProvider store={(*store).clone()}>
                <SiteContentProvider content={(*content).clone()}>
                    { props.view.emit(()) }
                </SiteContentProvider>
            </ThemeProvider>
        </Router>
    }
}

/// Renders `view` inside the same providers the app installs.
pub async fn render_in_app(theme: Theme, view: fn() -> Html) -> String {
    yew::ServerRenderer::<AppHarness>::with_props(move || AppHarnessProps {
        theme,
        view: Callback::from(move |()| view()),
    })
    .render()
    .await
}
