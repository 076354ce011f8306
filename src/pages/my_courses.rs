//! Signed-in user's enrollments.

use leptos::prelude::*;

use crate::net::api::HttpClient;
use crate::net::types::Course;
use crate::pages::catalog::course_list;
use crate::state::auth::use_session_handle;
use crate::state::remote::Remote;

#[component]
pub fn MyCoursesPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let handle = use_session_handle();
    let courses = RwSignal::new(Remote::<Vec<Course>>::Pending);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let Some(provider) = handle.provider() else {
            return;
        };
        let result = provider.authorized(|token| async move { client.fetch_my_courses(&token).await }).await;
        let _ = courses.try_set(Remote::from_result(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (client, handle);

    view! {
        <section class="my-courses">
            <h2>"My courses"</h2>
            {move || course_list(courses.get(), "You are not enrolled in any courses yet.")}
        </section>
    }
}
