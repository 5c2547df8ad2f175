use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Payload of [`Toggle`]'s change event: the state the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChange {
    pub checked: bool,
}

impl ToggleChange {
    /// The request produced by interacting with a toggle currently at
    /// `checked`.
    pub fn flipped(checked: bool) -> Self {
        Self {
            checked: !checked,
        }
    }
}

/// Reports an interaction with a toggle currently at `checked`. The input's
/// own state wins when the event carried one.
pub fn emit_interaction(
    on_change: &Callback<ToggleChange>,
    checked: bool,
    input_checked: Option<bool>,
) {
    let change = input_checked
        .map(|checked| ToggleChange {
            checked,
        })
        .unwrap_or_else(|| ToggleChange::flipped(checked));
    on_change.emit(change);
}

/// Icons drawn inside the track for each state.
#[derive(Clone, PartialEq)]
pub struct ToggleIcons {
    pub checked: Html,
    pub unchecked: Html,
}

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub checked: bool,
    pub icons: ToggleIcons,
    pub on_change: Callback<ToggleChange>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Fully controlled switch: it never changes `checked` itself, it only
/// reports what the user asked for.
#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let ToggleProps {
        checked,
        icons,
        on_change,
        aria_label,
        class,
    } = props;
    let checked = *checked;

    let onchange = {
        let on_change = on_change.clone();
        Callback::from(move |event: Event| {
            let input = event.target_dyn_into::<HtmlInputElement>();
            let input_checked = input.as_ref().map(HtmlInputElement::checked);
            // Snap back; the owner re-renders with the new value if it accepts it.
            if let Some(input) = input {
                input.set_checked(checked);
            }
            emit_interaction(&on_change, checked, input_checked);
        })
    };

    let icon = if checked { icons.checked.clone() } else { icons.unchecked.clone() };

    html! {
        <label class={classes!("toggle", checked.then_some("toggle--checked"), class.clone())}>
            <span class="toggle-track">
                <span class="toggle-icon">{ icon }</span>
            </span>
            <span class="toggle-thumb" />
            <input
                type="checkbox"
                class="toggle-screenreader-only"
                checked={checked}
                aria-label={aria_label.clone()}
                {onchange}
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Properties, PartialEq)]
    struct HostProps {
        checked: bool,
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        let icons = ToggleIcons {
            checked: html! { <i class="icon-moon" /> },
            unchecked: html! { <i class="icon-sun" /> },
        };
        html! { <Toggle checked={props.checked} {icons} on_change={Callback::noop()} /> }
    }

    async fn render(checked: bool) -> String {
        yew::ServerRenderer::<Host>::with_props(move || HostProps {
            checked,
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn unchecked_shows_unchecked_icon() {
        let html = render(false).await;
        assert!(html.contains("icon-sun"));
        assert!(!html.contains("icon-moon"));
        assert!(!html.contains("toggle--checked"));
    }

    #[tokio::test]
    async fn checked_shows_checked_icon() {
        let html = render(true).await;
        assert!(html.contains("icon-moon"));
        assert!(!html.contains("icon-sun"));
        assert!(html.contains("toggle--checked"));
    }

    fn recorder() -> (std::rc::Rc<std::cell::RefCell<Vec<bool>>>, Callback<ToggleChange>) {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let on_change = Callback::from(move |change: ToggleChange| {
            sink.borrow_mut().push(change.checked);
        });
        (seen, on_change)
    }

    #[test]
    fn click_emits_opposite_state_once() {
        let (seen, on_change) = recorder();
        emit_interaction(&on_change, false, Some(true));
        emit_interaction(&on_change, true, Some(false));
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn click_without_input_state_flips_current() {
        let (seen, on_change) = recorder();
        emit_interaction(&on_change, false, None);
        emit_interaction(&on_change, true, None);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn interaction_requests_the_opposite_state() {
        assert_eq!(ToggleChange::flipped(false), ToggleChange { checked: true });
        assert_eq!(ToggleChange::flipped(true), ToggleChange { checked: false });
    }
}
