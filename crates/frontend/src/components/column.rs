//! One status column: a drop zone with a count badge.

use core_types::{ApplicationStatus, DragIntent, JobApplication, StatusChange};
use yew::prelude::*;

use super::card::{Card, DRAG_PAYLOAD_TYPE};

/// Per-status accent class shared with the detail view's badge.
pub fn status_accent(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "status-applied",
        ApplicationStatus::Interview => "status-interview",
        ApplicationStatus::Offer => "status-offer",
        ApplicationStatus::Rejected => "status-rejected",
        ApplicationStatus::Hired => "status-hired",
    }
}

/// Read the drag intent back out of a drop event's transfer channel.
fn intent_from_event(event: &DragEvent) -> Option<DragIntent> {
    let payload = event.data_transfer()?.get_data(DRAG_PAYLOAD_TYPE).ok()?;
    DragIntent::from_payload(&payload)
}

/// Properties for the Column component.
#[derive(Properties, PartialEq)]
pub struct ColumnProps {
    pub status: ApplicationStatus,
    pub applications: Vec<JobApplication>,
    pub on_status_change: Callback<StatusChange>,
    pub on_view: Callback<JobApplication>,
}

/// A single board column. Highlights while a drag hovers over it and
/// raises a status-change intent when a card is dropped, including a
/// drop back onto the card's current column.
#[function_component(Column)]
pub fn column(props: &ColumnProps) -> Html {
    let drag_over = use_state(|| false);

    let ondragover = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(true);
        })
    };

    let ondragleave = {
        let drag_over = drag_over.clone();
        Callback::from(move |_: DragEvent| drag_over.set(false))
    };

    let ondrop = {
        let drag_over = drag_over.clone();
        let status = props.status;
        let on_status_change = props.on_status_change.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            // The highlight clears whether or not the payload parses.
            drag_over.set(false);
            if let Some(intent) = intent_from_event(&e) {
                on_status_change.emit(StatusChange {
                    id: intent.dragged_id,
                    status,
                });
            }
        })
    };

    let class = classes!(
        "column",
        status_accent(props.status),
        (*drag_over).then_some("column-drag-over"),
    );

    html! {
        <div {class} {ondragover} {ondragleave} {ondrop}>
            <div class="column-header">
                <h2 class="column-title">{ props.status.to_string() }</h2>
                <span class="column-count">{ props.applications.len() }</span>
            </div>

            if props.applications.is_empty() {
                <div class="column-placeholder">
                    <p>{"Drag cards here"}</p>
                </div>
            } else {
                <div class="column-cards">
                    { for props.applications.iter().map(|app| html! {
                        <Card
                            key={app.id.clone().unwrap_or_default()}
                            application={app.clone()}
                            on_view={props.on_view.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
