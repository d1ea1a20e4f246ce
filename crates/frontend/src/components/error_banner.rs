//! Dismissible banner for failed remote calls.

use yew::prelude::*;

/// Properties for the ErrorBanner component.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_dismiss: Callback<MouseEvent>,
}

/// Error banner surfaced by the dashboard.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error-banner" role="alert">
            <span>{ &props.message }</span>
            <button class="error-banner-dismiss" onclick={props.on_dismiss.clone()}>
                {"Dismiss"}
            </button>
        </div>
    }
}
