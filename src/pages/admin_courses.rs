//! Admin panel: course list and shared admin chrome.
//!
//! The guard only checks that someone is signed in. Role checks belong to
//! the API; a non-admin account sees the API's refusal here.

use leptos::prelude::*;

use crate::net::api::HttpClient;
use crate::net::types::Course;
use crate::pages::catalog::course_list;
use crate::state::auth::{use_session, use_session_handle};
use crate::state::remote::Remote;

/// Tab strip shared by the admin pages.
#[component]
pub fn AdminTabs() -> impl IntoView {
    let session = use_session();
    let not_admin = move || session.get().user().is_some_and(|user| !user.is_admin());

    view! {
        <nav class="admin-tabs">
            <a href="/admin/users">"Users"</a>
            <a href="/admin/courses">"Courses"</a>
        </nav>
        <Show when=not_admin>
            <p class="admin-tabs__notice">"This account is not an administrator; some data may be unavailable."</p>
        </Show>
    }
}

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let handle = use_session_handle();
    let courses = RwSignal::new(Remote::<Vec<Course>>::Pending);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let Some(provider) = handle.provider() else {
            return;
        };
        let result = provider.authorized(|token| async move { client.fetch_admin_courses(&token).await }).await;
        let _ = courses.try_set(Remote::from_result(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (client, handle);

    view! {
        <section class="admin">
            <AdminTabs/>
            <h2>"Courses"</h2>
            {move || course_list(courses.get(), "No courses yet.")}
        </section>
    }
}
