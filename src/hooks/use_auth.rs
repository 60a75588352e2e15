use std::rc::Rc;
use yew::prelude::*;

use crate::models::auth::{Credentials, User};
use crate::services::api;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum AuthState {
    /// Session check against the backend still in flight
    Checking,
    Anonymous,
    Authenticated(Rc<User>),
}

/// Handle returned by `use_auth` hook
#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    pub state: AuthState,
    /// Last login failure, cleared on the next successful login
    pub error: Option<String>,
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
}

/// Resolves the cookie session on mount and exposes login/logout.
///
/// Any failure of the session check (including network errors) lands on
/// `Anonymous`; the login view is the fallback, never a crash.
#[hook]
pub fn use_auth() -> AuthHandle {
    let state = use_state(|| AuthState::Checking);
    let error = use_state(|| None::<String>);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::current_user().await {
                    Ok(user) if !user.username.is_empty() => {
                        state.set(AuthState::Authenticated(Rc::new(user)));
                    }
                    Ok(_) => state.set(AuthState::Anonymous),
                    Err(e) => {
                        gloo::console::warn!(format!("Session check failed: {e}"));
                        state.set(AuthState::Anonymous);
                    }
                }
            });

            || ()
        });
    }

    let login = {
        let state = state.clone();
        let error = error.clone();

        Callback::from(move |credentials: Credentials| {
            let state = state.clone();
            let error = error.clone();

            spawn_local(async move {
                match api::login(&credentials).await {
                    Ok(()) => {
                        error.set(None);
                        state.set(AuthState::Authenticated(Rc::new(User {
                            username: credentials.username,
                        })));
                    }
                    Err(e) => {
                        gloo::console::warn!(format!("Login failed: {e}"));
                        error.set(Some(
                            "Login failed. Please check your credentials.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();

        Callback::from(move |()| {
            let state = state.clone();

            spawn_local(async move {
                match api::logout().await {
                    Ok(()) => state.set(AuthState::Anonymous),
                    Err(e) => gloo::console::warn!(format!("Logout failed: {e}")),
                }
            });
        })
    };

    AuthHandle {
        state: (*state).clone(),
        error: (*error).clone(),
        login,
        logout,
    }
}
