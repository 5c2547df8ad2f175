use yew::prelude::*;

use crate::{i18n::current::not_found as t, seo, site_context::use_site_content};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let content = use_site_content();

    use_effect_with(content.clone(), |content| {
        if let Some(content) = content {
            seo::set_document_title(&content.site.page_title(Some(t::TITLE)));
        }
        || ()
    });

    html! {
        <>
            <h1>{ t::TITLE }</h1>
            <p>{ t::BODY }</p>
        </>
    }
}
