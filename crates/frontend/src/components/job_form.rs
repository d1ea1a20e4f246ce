//! Create/edit form for a job application.
//!
//! Required fields are enforced twice: by `required` attributes in the
//! markup and by `JobApplication::validate` before the save callback
//! fires, so an invalid draft never reaches the network.

use chrono::NaiveDate;
use core_types::{parse_tags, ApplicationStatus, JobApplication};
use yew::prelude::*;

/// Properties for the JobForm component.
#[derive(Properties, PartialEq)]
pub struct JobFormProps {
    /// Existing record when editing, absent when creating.
    #[prop_or_default]
    pub application: Option<JobApplication>,
    /// Owner of a new draft (the signed-in user's id).
    pub user_id: String,
    pub on_save: Callback<JobApplication>,
    pub on_cancel: Callback<()>,
    /// Present only when editing a persisted record.
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
    /// True while the dashboard's save round trip is in flight.
    #[prop_or_default]
    pub saving: bool,
    /// Save failure surfaced by the dashboard; the modal stays open.
    #[prop_or_default]
    pub error: Option<String>,
}

/// Controlled create/edit form.
#[function_component(JobForm)]
pub fn job_form(props: &JobFormProps) -> Html {
    let form = {
        let application = props.application.clone();
        let user_id = props.user_id.clone();
        use_state(move || match application {
            Some(app) => app,
            None => JobApplication::draft(&user_id),
        })
    };
    let validation = use_state(|| None::<String>);

    // One text-input handler per field, all writing a fresh record.
    let edit = |apply: fn(&mut JobApplication, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let oninput_company = edit(|app, value| app.company = value);
    let oninput_title = edit(|app, value| app.title = value);
    let oninput_url = edit(|app, value| app.url = (!value.is_empty()).then_some(value));
    let oninput_resume = edit(|app, value| app.resume_used = (!value.is_empty()).then_some(value));
    let oninput_tags = edit(|app, value| app.tags = parse_tags(&value));
    let oninput_date = edit(|app, value| {
        app.applied_date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
    });

    let oninput_notes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let value = area.value();
            let mut next = (*form).clone();
            next.notes = (!value.is_empty()).then_some(value);
            form.set(next);
        })
    };

    let onchange_status = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(status) = select.value().parse::<ApplicationStatus>() {
                let mut next = (*form).clone();
                next.status = status;
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let validation = validation.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let record = (*form).clone();
            match record.validate() {
                Ok(()) => {
                    validation.set(None);
                    on_save.emit(record);
                }
                Err(err) => validation.set(Some(err.to_string())),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let delete_button = match (&props.on_delete, &form.id) {
        (Some(on_delete), Some(id)) => {
            let on_delete = on_delete.clone();
            let id = id.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()));
            html! {
                <button type="button" class="btn btn-danger" {onclick} disabled={props.saving}>
                    {"Delete"}
                </button>
            }
        }
        _ => Html::default(),
    };

    let heading = if props.application.is_some() {
        "Edit Job Application"
    } else {
        "Add New Job Application"
    };
    let error = props.error.clone().or_else(|| (*validation).clone());
    let date_value = form
        .applied_date
        .map(|date| date.to_string())
        .unwrap_or_default();

    html! {
        <form class="job-form" {onsubmit}>
            <h2>{ heading }</h2>

            if let Some(message) = error {
                <p class="form-error">{ message }</p>
            }

            <div class="form-field">
                <label for="company">{"Company"}</label>
                <input
                    type="text"
                    id="company"
                    value={form.company.clone()}
                    oninput={oninput_company}
                    required=true
                />
            </div>

            <div class="form-field">
                <label for="title">{"Job Title"}</label>
                <input
                    type="text"
                    id="title"
                    value={form.title.clone()}
                    oninput={oninput_title}
                    required=true
                />
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for="applied-date">{"Applied Date"}</label>
                    <input
                        type="date"
                        id="applied-date"
                        value={date_value}
                        oninput={oninput_date}
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for="status">{"Status"}</label>
                    <select id="status" onchange={onchange_status}>
                        { for ApplicationStatus::ALL.iter().map(|status| html! {
                            <option
                                value={status.as_str()}
                                selected={*status == form.status}
                            >
                                { status.as_str() }
                            </option>
                        })}
                    </select>
                </div>
            </div>

            <div class="form-field">
                <label for="url">{"Job Posting URL"}</label>
                <input
                    type="url"
                    id="url"
                    value={form.url.clone().unwrap_or_default()}
                    oninput={oninput_url}
                    placeholder="https://..."
                />
            </div>

            <div class="form-field">
                <label for="resume">{"Resume Used"}</label>
                <input
                    type="text"
                    id="resume"
                    value={form.resume_used.clone().unwrap_or_default()}
                    oninput={oninput_resume}
                    placeholder="e.g., Resume_V2.pdf"
                />
            </div>

            <div class="form-field">
                <label for="tags">{"Tags (comma separated)"}</label>
                <input
                    type="text"
                    id="tags"
                    value={form.tags.join(", ")}
                    oninput={oninput_tags}
                    placeholder="e.g., remote, frontend, urgent"
                />
            </div>

            <div class="form-field">
                <label for="notes">{"Notes"}</label>
                <textarea
                    id="notes"
                    rows="3"
                    value={form.notes.clone().unwrap_or_default()}
                    oninput={oninput_notes}
                />
            </div>

            <div class="form-actions">
                { delete_button }
                <div class="form-actions-right">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={props.saving}>
                        { if props.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </div>
        </form>
    }
}
