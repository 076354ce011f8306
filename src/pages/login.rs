//! Sign-in page.
//!
//! Once the session is authenticated, this page moves on to the `next` query
//! target (or the default landing page), replacing the login entry in history.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Credentials;
use crate::state::auth::{use_session, use_session_handle};
use crate::util::auth::post_login_destination;

const MISSING_FIELDS: &str = "Enter both username and password.";

pub(crate) fn validate_login_input(identifier: &str, secret: &str) -> Result<Credentials, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || secret.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { identifier: identifier.to_owned(), secret: secret.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let handle = use_session_handle();
    let query = use_query_map();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if session.get().is_authenticated() {
            let target = query.with(|q| post_login_destination(q.get("next").as_deref()));
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&identifier.get(), &secret.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(provider) = handle.provider() else {
                return;
            };
            match provider.login(&credentials).await {
                Ok(_) => {
                    let _ = info.try_set(String::new());
                    let _ = secret.try_set(String::new());
                }
                Err(err) => {
                    let _ = info.try_set(err.user_message().to_owned());
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (handle, credentials);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Use your CourseHub account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || secret.get()
                        on:input=move |ev| secret.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
