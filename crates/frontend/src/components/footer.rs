//! Page footer.

use yew::prelude::*;

/// Application footer.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"Drag a card to move it between stages."}</p>
        </footer>
    }
}
