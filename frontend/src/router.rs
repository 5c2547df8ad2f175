use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::layout::Layout, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "gh-pages"))]
    #[at("/")]
    Home,
    #[cfg(feature = "gh-pages")]
    #[at("/lexblog/")]
    Home,

    #[cfg(not(feature = "gh-pages"))]
    #[at("/posts/:slug")]
    Post { slug: String },
    #[cfg(feature = "gh-pages")]
    #[at("/lexblog/posts/:slug")]
    Post { slug: String },

    #[not_found]
    #[cfg(not(feature = "gh-pages"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "gh-pages")]
    #[at("/lexblog/404")]
    NotFound,
}

impl Route {
    /// Only the site root gets the large header.
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

fn switch(route: Route) -> Html {
    let is_home = route.is_home();
    let page = match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Post {
            slug,
        } => {
            html! { <pages::post::PostPage slug={slug} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    };
    html! { <Layout {is_home}>{ page }</Layout> }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
