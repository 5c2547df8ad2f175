use lexblog_shared::{typography::rhythm, Author, Social};
use yew::prelude::*;

use crate::{config::asset_path, i18n::current::bio as t};

#[derive(Properties, PartialEq)]
pub struct BioProps {
    pub author: Author,
    pub social: Social,
    /// Avatar path relative to the asset root.
    pub avatar: AttrValue,
}

/// Author card shown above posts and on the home page.
#[function_component(Bio)]
pub fn bio(props: &BioProps) -> Html {
    let BioProps {
        author,
        social,
        avatar,
    } = props;

    let wrapper_style = format!("display: flex; margin-bottom: {};", rhythm(2.5));
    let avatar_style = format!(
        "margin-right: {}; margin-bottom: 0; width: {size}; height: {size}; border-radius: 50%;",
        rhythm(0.5),
        size = rhythm(2.0)
    );

    html! {
        <div class="bio" style={wrapper_style}>
            <img src={asset_path(avatar)} alt={author.name.clone()} style={avatar_style} />
            <div style="display: flex; flex-direction: column;">
                <p style="margin-bottom: 0;">
                    { t::BYLINE_PREFIX }
                    <a href={social.twitter_url()} target="_blank" rel="noopener noreferrer">
                        { author.name.clone() }
                    </a>
                </p>
                <p style="margin: 0;">{ author.summary.clone() }</p>
            </div>
        </div>
    }
}
