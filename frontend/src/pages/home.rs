use lexblog_shared::typography::rhythm;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::bio::Bio, i18n::current::home as t, router::Route, seo,
    site_context::use_site_content,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let content = use_site_content();

    use_effect_with(content.clone(), |content| {
        if let Some(content) = content {
            seo::set_document_title(&content.site.page_title(None));
            seo::set_meta_description(&content.site.description);
            seo::set_canonical_link(&content.site.canonical_url(&Route::Home.to_path()));
        }
        || ()
    });

    // The layout already reports a missing provider.
    let Some(content) = content else {
        return Html::default();
    };
    let site = &content.site;
    let posts = content.posts.summaries();
    let title_style = format!("margin-bottom: {};", rhythm(0.25));

    html! {
        <>
            <aside>
                <Bio
                    author={site.author.clone()}
                    social={site.social.clone()}
                    avatar={site.avatar.clone()}
                />
            </aside>
            if posts.is_empty() {
                <p>{ t::NO_POSTS }</p>
            }
            { for posts.into_iter().map(|post| html! {
                <article key={post.slug.clone()} class="post-summary">
                    <header>
                        <h3 style={title_style.clone()}>
                            <Link<Route> to={Route::Post { slug: post.slug.clone() }}>
                                { post.title }
                            </Link<Route>>
                        </h3>
                        <small>{ post.date }</small>
                    </header>
                    <p>{ post.spoiler }</p>
                </article>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use lexblog_shared::Theme;

    use super::*;
    use crate::test_support::render_in_app;

    fn view() -> Html {
        html! { <HomePage /> }
    }

    #[tokio::test]
    async fn lists_posts_newest_first_with_bio() {
        let html = render_in_app(Theme::Light, view).await;
        assert!(html.contains("Personal blog by "));
        let newer = html.find("Second Post").expect("newer post listed");
        let older = html.find("First Post").expect("older post listed");
        assert!(newer < older);
        assert!(html.contains("href=\"/posts/second\""));
    }
}
