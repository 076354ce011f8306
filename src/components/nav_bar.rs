//! Top navigation bar.
//!
//! DESIGN
//! ======
//! Session-dependent links come from the read-only session signal. Signing
//! out goes through the provider; the route guard handles any redirect.

use leptos::prelude::*;

use crate::state::auth::{use_session, use_session_handle};
use crate::state::session::Session;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let handle = use_session_handle();

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"CourseHub"</a>
            <nav class="nav-bar__links">
                <a href="/courses">"Catalog"</a>
                {move || match session.get() {
                    Session::Loading => view! { <span class="nav-bar__pending"></span> }.into_any(),
                    Session::Unauthenticated => {
                        view! { <a class="nav-bar__login" href="/login">"Sign in"</a> }.into_any()
                    }
                    Session::Authenticated(user) => {
                        let admin_link = user.is_admin().then(|| view! { <a href="/admin/users">"Admin"</a> });
                        view! {
                            <a href="/my-courses">"My courses"</a>
                            {admin_link}
                            <span class="nav-bar__user">{user.name}</span>
                            <button class="nav-bar__logout" on:click=move |_| handle.logout()>
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>
    }
}
