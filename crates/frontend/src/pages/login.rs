//! Login page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::use_auth;

/// Login form.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();

            busy.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                // On success the session context updates and the page
                // re-renders into the redirect below.
                if let Err(err) = auth.login(&email, &password).await {
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
                <h1>{"Login"}</h1>

                <form {onsubmit}>
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
                        { if *busy { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                if let Some(message) = (*error).clone() {
                    <p class="form-error">{ message }</p>
                }

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
