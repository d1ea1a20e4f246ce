//! Read-only detail view of one application.

use core_types::JobApplication;
use yew::prelude::*;

use super::column::status_accent;

/// Properties for the JobDetails component.
#[derive(Properties, PartialEq)]
pub struct JobDetailsProps {
    pub application: JobApplication,
    pub on_edit: Callback<JobApplication>,
    pub on_delete: Callback<String>,
    pub on_close: Callback<()>,
}

/// Detail modal content with edit, delete, and close actions.
#[function_component(JobDetails)]
pub fn job_details(props: &JobDetailsProps) -> Html {
    let app = &props.application;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let app = app.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(app.clone()))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // A record that never persisted has nothing to delete.
    let delete_button = match &app.id {
        Some(id) => {
            let on_delete = props.on_delete.clone();
            let id = id.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()));
            html! {
                <button class="btn btn-danger" {onclick}>{"Delete"}</button>
            }
        }
        None => Html::default(),
    };

    let applied = app
        .applied_date
        .map(|date| date.format("%B %e, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="job-details">
            <div class="job-details-header">
                <h2>{ &app.company }</h2>
                <span class={classes!("status-badge", status_accent(app.status))}>
                    { app.status.to_string() }
                </span>
            </div>

            <p class="job-details-title">{ &app.title }</p>

            <dl class="job-details-grid">
                <dt>{"Applied"}</dt>
                <dd>{ applied }</dd>

                if let Some(url) = &app.url {
                    <dt>{"Posting"}</dt>
                    <dd><a href={url.clone()} target="_blank">{ url }</a></dd>
                }

                if let Some(resume) = &app.resume_used {
                    <dt>{"Resume"}</dt>
                    <dd>{ resume }</dd>
                }

                if !app.tags.is_empty() {
                    <dt>{"Tags"}</dt>
                    <dd>
                        { for app.tags.iter().map(|tag| html! {
                            <span class="tag">{ tag }</span>
                        })}
                    </dd>
                }

                if let Some(notes) = &app.notes {
                    <dt>{"Notes"}</dt>
                    <dd class="job-details-notes">{ notes }</dd>
                }
            </dl>

            <div class="form-actions">
                { delete_button }
                <div class="form-actions-right">
                    <button class="btn btn-secondary" onclick={on_close}>{"Close"}</button>
                    <button class="btn btn-primary" onclick={on_edit}>{"Edit"}</button>
                </div>
            </div>
        </div>
    }
}
