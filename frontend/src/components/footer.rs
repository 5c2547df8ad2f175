use lexblog_shared::{typography::rhythm, Social};
use yew::prelude::*;

use crate::i18n::current::common;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub social: Social,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let style = format!("margin-top: {}; padding-top: {};", rhythm(2.0), rhythm(1.0));
    let links = props.social.links();
    let last = links.len().saturating_sub(1);

    html! {
        <footer class="site-footer" {style}>
            { for links.into_iter().enumerate().map(|(index, link)| html! {
                <>
                    <a href={link.href} target="_blank" rel="noopener noreferrer">
                        { link.label }
                    </a>
                    if index < last {
                        { format!(" {} ", common::BULLET) }
                    }
                </>
            }) }
        </footer>
    }
}
