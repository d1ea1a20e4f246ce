//! Dashboard page: owns the authoritative application list and every
//! mutation against the remote collection.
//!
//! Nothing is mutated optimistically. The list only changes after the
//! server confirms an operation, and every change swaps in a fresh
//! vector, so the board always renders a consistent snapshot.

use std::rc::Rc;

use core_types::{
    append, remove_by_id, replace_by_id, JobApplication, ModalState, StatusChange,
};
use yew::prelude::*;

use crate::components::{Board, ErrorBanner, Footer, Header, JobDetails, JobForm, Loading, Modal};
use crate::context::use_auth;
use crate::services::{report_failure, ApiClient};

/// The in-memory application list.
#[derive(Default, PartialEq)]
struct Applications {
    list: Vec<JobApplication>,
}

/// Reconciliation steps applied after confirmed round trips.
enum ApplicationsAction {
    /// Wholesale replacement from a fresh list fetch.
    Load(Vec<JobApplication>),
    /// A confirmed create or update: replace by id, append when new.
    Upsert(JobApplication),
    /// A confirmed delete.
    Remove(String),
}

impl Reducible for Applications {
    type Action = ApplicationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let list = self.list.clone();
        let list = match action {
            ApplicationsAction::Load(apps) => apps,
            ApplicationsAction::Upsert(app) => {
                if list.iter().any(|existing| existing.id == app.id) {
                    replace_by_id(list, app)
                } else {
                    append(list, app)
                }
            }
            ApplicationsAction::Remove(id) => remove_by_id(list, &id),
        };
        Rc::new(Self { list })
    }
}

/// Dashboard orchestrator.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_auth();
    let applications = use_reducer(Applications::default);
    let modal = use_state(ModalState::default);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let banner = use_state(|| None::<String>);
    let form_error = use_state(|| None::<String>);

    let session = auth.session().cloned();
    let token = session.as_ref().map(|s| s.token.clone());

    // Refetch the whole collection whenever the session token changes.
    {
        let applications = applications.clone();
        let loading = loading.clone();
        let banner = banner.clone();
        let client = ApiClient::new(token.clone());
        use_effect_with(token.clone(), move |token| {
            if token.is_none() {
                return;
            }
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match client.list_jobs().await {
                    Ok(apps) => applications.dispatch(ApplicationsAction::Load(apps)),
                    Err(err) => {
                        report_failure("Failed to fetch applications", &err);
                        banner.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    // Drag-triggered status change: a drop on the card's own column
    // still round-trips as a valid, idempotent update.
    let on_status_change = {
        let applications = applications.clone();
        let banner = banner.clone();
        let client = ApiClient::new(token.clone());
        Callback::from(move |change: StatusChange| {
            let Some(record) = applications
                .list
                .iter()
                .find(|app| app.id.as_deref() == Some(change.id.as_str()))
            else {
                return;
            };

            let mut updated = record.clone();
            updated.status = change.status;

            let applications = applications.clone();
            let banner = banner.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.update_job(&change.id, &updated).await {
                    Ok(saved) => applications.dispatch(ApplicationsAction::Upsert(saved)),
                    Err(err) => {
                        report_failure("Failed to update status", &err);
                        banner.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    // Form save: create for drafts, full-record update otherwise.
    // The modal closes only after the server confirms.
    let on_save = {
        let applications = applications.clone();
        let modal = modal.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let client = ApiClient::new(token.clone());
        Callback::from(move |record: JobApplication| {
            let applications = applications.clone();
            let modal = modal.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let client = client.clone();

            saving.set(true);
            form_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match record.id.as_deref() {
                    Some(id) => client.update_job(id, &record).await,
                    None => client.create_job(&record).await,
                };
                match result {
                    Ok(saved) => {
                        applications.dispatch(ApplicationsAction::Upsert(saved));
                        modal.set(ModalState::Closed);
                    }
                    Err(err) => {
                        report_failure("Failed to save application", &err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let applications = applications.clone();
        let modal = modal.clone();
        let banner = banner.clone();
        let client = ApiClient::new(token.clone());
        Callback::from(move |id: String| {
            let applications = applications.clone();
            let modal = modal.clone();
            let banner = banner.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.delete_job(&id).await {
                    Ok(()) => {
                        applications.dispatch(ApplicationsAction::Remove(id.clone()));
                        if modal.references(&id) {
                            modal.set(ModalState::Closed);
                        }
                    }
                    Err(err) => {
                        report_failure("Failed to delete application", &err);
                        banner.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    // Modal routing: opening any modal replaces whatever was open.
    let open_add = {
        let modal = modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            form_error.set(None);
            modal.set(ModalState::AddForm);
        })
    };

    let open_edit = {
        let modal = modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |app: JobApplication| {
            form_error.set(None);
            modal.set(ModalState::EditForm(app));
        })
    };

    let open_view = {
        let modal = modal.clone();
        Callback::from(move |app: JobApplication| modal.set(ModalState::ViewDetail(app)))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| auth.logout())
    };

    let dismiss_banner = {
        let banner = banner.clone();
        Callback::from(move |_| banner.set(None))
    };

    let Some(session) = session else {
        // The route guard redirects before this can render.
        return Html::default();
    };

    let modal_view = match (*modal).clone() {
        ModalState::Closed => Html::default(),
        ModalState::AddForm => html! {
            <Modal on_close={close_modal.clone()}>
                <JobForm
                    user_id={session.id.clone()}
                    on_save={on_save.clone()}
                    on_cancel={close_modal.clone()}
                    saving={*saving}
                    error={(*form_error).clone()}
                />
            </Modal>
        },
        ModalState::EditForm(app) => html! {
            <Modal on_close={close_modal.clone()}>
                <JobForm
                    application={Some(app)}
                    user_id={session.id.clone()}
                    on_save={on_save.clone()}
                    on_cancel={close_modal.clone()}
                    on_delete={Some(on_delete.clone())}
                    saving={*saving}
                    error={(*form_error).clone()}
                />
            </Modal>
        },
        ModalState::ViewDetail(app) => html! {
            <Modal on_close={close_modal.clone()}>
                <JobDetails
                    application={app}
                    on_edit={open_edit.clone()}
                    on_delete={on_delete.clone()}
                    on_close={close_modal.clone()}
                />
            </Modal>
        },
    };

    html! {
        <div class="app-shell">
            <Header session={session} on_add={open_add} on_logout={on_logout} />

            if let Some(message) = (*banner).clone() {
                <ErrorBanner {message} on_dismiss={dismiss_banner} />
            }

            <main class="board-main">
                if *loading {
                    <Loading />
                } else {
                    <Board
                        applications={applications.list.clone()}
                        on_status_change={on_status_change}
                        on_view={open_view}
                    />
                }
            </main>

            { modal_view }
            <Footer />
        </div>
    }
}
