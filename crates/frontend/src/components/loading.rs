//! Loading spinner component.

use yew::prelude::*;

/// Loading spinner shown while the collection is being fetched.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
