use std::rc::Rc;

use lexblog_shared::{ContentError, PostIndex, SiteMetadata};
use yew::prelude::*;

use crate::config::{POSTS_JSON, SITE_METADATA_JSON};

/// Build-time content shared by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub site: Rc<SiteMetadata>,
    pub posts: Rc<PostIndex>,
}

impl SiteContent {
    pub fn from_json(site_json: &str, posts_json: &str) -> Result<Self, ContentError> {
        Ok(Self {
            site: Rc::new(SiteMetadata::from_json(site_json)?),
            posts: Rc::new(PostIndex::from_json(posts_json)?),
        })
    }

    /// Content embedded into the binary by `config`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_METADATA_JSON, POSTS_JSON)
    }
}

#[hook]
pub fn use_site_content() -> Option<SiteContent> {
    use_context::<SiteContent>()
}

#[derive(Properties, PartialEq)]
pub struct SiteContentProviderProps {
    pub content: SiteContent,
    pub children: Html,
}

#[function_component(SiteContentProvider)]
pub fn site_content_provider(props: &SiteContentProviderProps) -> Html {
    html! {
        <ContextProvider<SiteContent> context={props.content.clone()}>
            {props.children.clone()}
        </ContextProvider<SiteContent>>
    }
}
