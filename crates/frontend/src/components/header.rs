//! Page header: title, signed-in user, add and logout actions.

use core_types::Session;
use yew::prelude::*;

/// Properties for the Header component.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub session: Session,
    pub on_add: Callback<MouseEvent>,
    pub on_logout: Callback<MouseEvent>,
}

/// Application header.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <h1 class="header-title">{"Job Application Tracker"}</h1>

            <div class="header-actions">
                <div class="header-user">
                    <span class="header-user-name">{ &props.session.name }</span>
                    <span class="header-user-email">{ &props.session.email }</span>
                </div>
                <button class="btn btn-primary" onclick={props.on_add.clone()}>
                    {"Add New"}
                </button>
                <button class="btn btn-danger" onclick={props.on_logout.clone()}>
                    {"Logout"}
                </button>
            </div>
        </header>
    }
}
