//! The kanban board: one column per status, in fixed order.

use core_types::{filter_by_status, ApplicationStatus, JobApplication, StatusChange};
use yew::prelude::*;

use super::column::Column;

/// Properties for the Board component.
#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub applications: Vec<JobApplication>,
    pub on_status_change: Callback<StatusChange>,
    pub on_view: Callback<JobApplication>,
}

/// Fans the application list out into status columns and forwards
/// each column's status-change intent unchanged to the dashboard.
#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    html! {
        <div class="board">
            { for ApplicationStatus::ALL.iter().map(|status| html! {
                <Column
                    key={status.as_str()}
                    status={*status}
                    applications={filter_by_status(&props.applications, *status)}
                    on_status_change={props.on_status_change.clone()}
                    on_view={props.on_view.clone()}
                />
            })}
        </div>
    }
}
