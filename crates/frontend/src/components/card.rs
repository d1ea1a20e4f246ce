//! A single application card on the board.

use core_types::JobApplication;
use yew::prelude::*;

/// Content type under which a drag gesture carries the dragged
/// record's id. Nothing else rides on the transfer channel.
pub const DRAG_PAYLOAD_TYPE: &str = "text/x-application-id";

/// Properties for the Card component.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub application: JobApplication,
    pub on_view: Callback<JobApplication>,
}

/// One draggable application card.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let ondragstart = {
        let id = props.application.id.clone();
        Callback::from(move |e: DragEvent| {
            // Only persisted records can be dragged to a new status.
            let (Some(id), Some(transfer)) = (id.as_ref(), e.data_transfer()) else {
                return;
            };
            let _ = transfer.set_data(DRAG_PAYLOAD_TYPE, id);
        })
    };

    let onclick = {
        let on_view = props.on_view.clone();
        let application = props.application.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(application.clone()))
    };

    let applied = props
        .application
        .applied_date
        .map(|date| date.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="job-card" draggable="true" {ondragstart} {onclick}>
            <h3 class="job-card-company">{ &props.application.company }</h3>
            <p class="job-card-title">{ &props.application.title }</p>
            <p class="job-card-date">{ format!("Applied on: {applied}") }</p>
        </div>
    }
}
