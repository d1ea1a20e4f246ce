//! Session context: an explicit handle injected through a
//! `ContextProvider`, not an ambient singleton.
//!
//! The persisted session is read from local storage exactly once when
//! the provider mounts; every successful login or register writes
//! through to storage, and logout clears both memory and storage.

use core_types::{Session, SESSION_KEY};
use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::services::{ApiClient, Result};

/// Handle to the current session and its lifecycle operations.
#[derive(Clone, PartialEq)]
pub struct Auth {
    session: UseStateHandle<Option<Session>>,
}

impl Auth {
    /// The current session, if authenticated.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Exchange credentials for a session. A failure is propagated
    /// untouched; no local state changes on the error path.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let resp = ApiClient::new(None).login(email, password).await?;
        self.start(Session::from(resp));
        Ok(())
    }

    /// Create an account and start its session.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let resp = ApiClient::new(None).register(name, email, password).await?;
        self.start(Session::from(resp));
        Ok(())
    }

    /// Clear the session from memory and storage. Idempotent.
    pub fn logout(&self) {
        LocalStorage::delete(SESSION_KEY);
        self.session.set(None);
    }

    fn start(&self, session: Session) {
        // The token is stored in clear text; known limitation.
        if let Err(err) = LocalStorage::set(SESSION_KEY, &session) {
            web_sys::console::error_1(&format!("failed to persist session: {err}").into());
        }
        self.session.set(Some(session));
    }
}

/// Properties for the session provider.
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the session state for the whole application.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore the persisted session once; absent means unauthenticated.
    let session = use_state(|| LocalStorage::get::<Session>(SESSION_KEY).ok());
    let auth = Auth { session };

    html! {
        <ContextProvider<Auth> context={auth}>
            { props.children.clone() }
        </ContextProvider<Auth>>
    }
}

/// Access the session context from any component under the provider.
#[hook]
pub fn use_auth() -> Auth {
    use_context::<Auth>().expect("use_auth called outside an AuthProvider")
}
