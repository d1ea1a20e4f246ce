//! Modal overlay shell. Clicking the backdrop closes it.

use yew::prelude::*;

/// Properties for the Modal component.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Modal dialog wrapper.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" onclick={stop}>
                { props.children.clone() }
            </div>
        </div>
    }
}
