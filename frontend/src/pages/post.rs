use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{bio::Bio, markdown::Markdown},
    i18n::current::post as t,
    pages::not_found::NotFoundPage,
    router::Route,
    seo,
    site_context::use_site_content,
};

#[derive(Properties, Clone, PartialEq)]
pub struct PostPageProps {
    pub slug: String,
}

#[function_component(PostPage)]
pub fn post_page(props: &PostPageProps) -> Html {
    let content = use_site_content();

    use_effect_with((content.clone(), props.slug.clone()), |(content, slug)| {
        if let Some(content) = content {
            if let Some(post) = content.posts.find(slug) {
                seo::set_document_title(&content.site.page_title(Some(&post.title)));
                seo::set_meta_description(&post.spoiler);
                let path = Route::Post {
                    slug: post.slug.clone(),
                }
                .to_path();
                seo::set_canonical_link(&content.site.canonical_url(&path));
            }
        }
        || ()
    });

    let Some(content) = content else {
        return Html::default();
    };
    let Some(post) = content.posts.find(&props.slug) else {
        return html! { <NotFoundPage /> };
    };
    let site = &content.site;

    html! {
        <article class="post">
            <header>
                <h1>{ post.title.clone() }</h1>
                <small>{ post.date.clone() }</small>
            </header>
            <Markdown source={post.body.clone()} />
            <hr />
            <footer>
                <Bio
                    author={site.author.clone()}
                    social={site.social.clone()}
                    avatar={site.avatar.clone()}
                />
                <Link<Route> to={Route::Home}>{ t::BACK_HOME }</Link<Route>>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use lexblog_shared::Theme;

    use super::*;
    use crate::test_support::render_in_app;

    fn known() -> Html {
        html! { <PostPage slug="first" /> }
    }

    fn unknown() -> Html {
        html! { <PostPage slug="nope" /> }
    }

    #[tokio::test]
    async fn renders_known_post() {
        let html = render_in_app(Theme::Light, known).await;
        assert!(html.contains("First Post"));
        assert!(html.contains("2019-01-01"));
        assert!(html.contains("post-body"));
    }

    #[tokio::test]
    async fn unknown_slug_falls_back_to_not_found() {
        let html = render_in_app(Theme::Light, unknown).await;
        assert!(html.contains("Not Found"));
    }
}
