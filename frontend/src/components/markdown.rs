use pulldown_cmark::{html, Options, Parser};
use web_sys::Element;
use yew::prelude::*;

/// Converts a post body to sanitized HTML.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let mut rendered = String::new();
    html::push_html(&mut rendered, Parser::new_ext(content, options));

    ammonia::clean(&rendered)
}

#[derive(Properties, Clone, PartialEq)]
pub struct MarkdownProps {
    pub source: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders a markdown post body into a host element without letting Yew
/// diff the generated children.
#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
    let host_ref = use_node_ref();
    let rendered = use_memo(props.source.clone(), |source| markdown_to_html(source));

    {
        let host_ref = host_ref.clone();
        use_effect_with(rendered, move |rendered| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(rendered.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={classes!("post-body", props.class.clone())} />
    }
}
