//! Register page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::use_auth;

/// Account creation form.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let oninput_name = text_input(&name);
    let oninput_email = text_input(&email);
    let oninput_password = text_input(&password);

    let onsubmit = {
        let auth = auth.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();

            busy.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = auth.register(&name, &email, &password).await {
                    error.set(Some(err.to_string()));
                }
                busy.set(false);
            });
        })
    };

    if auth.session().is_some() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{"Register"}</h1>

                <form {onsubmit}>
                    <div class="form-field">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            value={(*name).clone()}
                            oninput={oninput_name}
                            required=true
                        />
                    </div>

                    <div class="form-field">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            value={(*email).clone()}
                            oninput={oninput_email}
                            required=true
                        />
                    </div>

                    <div class="form-field">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            oninput={oninput_password}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={*busy}>
                        { if *busy { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                if let Some(message) = (*error).clone() {
                    <p class="form-error">{ message }</p>
                }

                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
