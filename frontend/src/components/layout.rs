use lexblog_shared::{
    typography::{rhythm, scale},
    Theme, ThemeStore,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        footer::Footer,
        toggle::{Toggle, ToggleChange, ToggleIcons},
    },
    config::asset_path,
    i18n::current::{error_banner as error_text, theme_toggle as t},
    router::Route,
    seo,
    site_context::use_site_content,
    theme_context::use_theme,
};

/// Maps a toggle interaction onto the store.
pub fn apply_toggle(store: &ThemeStore, change: ToggleChange) {
    store.set(Theme::from_checked(change.checked));
}

/// Value for `<meta name="theme-color">`, once a theme is known.
pub fn theme_color(theme: Option<Theme>) -> Option<&'static str> {
    theme.map(Theme::meta_color)
}

fn theme_icon(file: &str, alt: &'static str) -> Html {
    html! {
        <img
            src={asset_path(file)}
            width="16"
            height="16"
            role="presentation"
            style="pointer-events: none;"
            alt={alt}
        />
    }
}

fn missing_context(message: &'static str) -> Html {
    web_sys::console::error_1(&message.into());
    html! { <ErrorBanner message={message.to_string()} auto_dismiss={false} /> }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// Whether the matched route is the home page; decided by the router.
    pub is_home: bool,
    /// Header text; defaults to the site title.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Page shell: header with the theme toggle, the page body and the footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = use_theme();
    let content = use_site_content();

    {
        let current = theme.as_ref().map(|handle| handle.theme);
        use_effect_with(current, |current| {
            if let Some(color) = theme_color(*current) {
                seo::set_theme_color(color);
            }
            || ()
        });
    }

    let (theme, content) = match (theme, content) {
        (Some(theme), Some(content)) => (theme, content),
        (None, _) => return missing_context(error_text::MISSING_THEME),
        (_, None) => return missing_context(error_text::MISSING_CONTENT),
    };

    let title = props
        .title
        .as_ref()
        .map(|title| title.to_string())
        .unwrap_or_else(|| content.site.title.clone());

    let title_link = html! {
        <Link<Route> to={Route::Home} classes={classes!("shell-title-link")}>
            { title }
        </Link<Route>>
    };

    let header = if props.is_home {
        let style = format!("{} margin-bottom: 0; margin-top: 0;", scale(0.75).to_style());
        html! { <h1 class="shell-title shell-title--home" {style}>{ title_link }</h1> }
    } else {
        html! {
            <h3
                class="shell-title shell-title--page"
                style="color: var(--pink); font-family: Montserrat, sans-serif; margin-top: 0; margin-bottom: 0;"
            >
                { title_link }
            </h3>
        }
    };

    let on_change = {
        let theme = theme.clone();
        Callback::from(move |change: ToggleChange| apply_toggle(theme.store(), change))
    };

    let icons = ToggleIcons {
        checked: theme_icon("static/moon.svg", t::MOON_ALT),
        unchecked: theme_icon("static/sun.svg", t::SUN_ALT),
    };

    let shell_style = format!(
        "color: var(--textNormal); background: var(--bg); margin-left: auto; margin-right: auto; \
         max-width: {}; padding: {} {};",
        rhythm(24.0),
        rhythm(1.5),
        rhythm(0.75)
    );

    html! {
        <div class="shell" style={shell_style}>
            <header class="shell-header">
                { header }
                <Toggle
                    checked={theme.theme.is_dark()}
                    {icons}
                    {on_change}
                    aria_label={AttrValue::from(t::ARIA_LABEL)}
                />
            </header>
            <main>{ props.children.clone() }</main>
            <Footer social={content.site.social.clone()} />
        </div>
    }
}
