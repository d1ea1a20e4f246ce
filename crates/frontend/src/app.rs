//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{use_auth, AuthProvider};
use crate::pages::{DashboardPage, LoginPage, RegisterPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! {
            <Protected>
                <DashboardPage />
            </Protected>
        },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Properties for the route guard.
#[derive(Properties, PartialEq)]
struct ProtectedProps {
    #[prop_or_default]
    children: Html,
}

/// Bounces unauthenticated visitors to the login page.
#[function_component(Protected)]
fn protected(props: &ProtectedProps) -> Html {
    let auth = use_auth();

    if auth.session().is_some() {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}
