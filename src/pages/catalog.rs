//! Public course catalog.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::skeleton::SkeletonLoader;
use crate::net::api::HttpClient;
use crate::net::types::Course;
use crate::state::remote::Remote;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let courses = RwSignal::new(Remote::<Vec<Course>>::Pending);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = client.fetch_courses().await;
        let _ = courses.try_set(Remote::from_result(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = client;

    view! {
        <section class="catalog">
            <h2>"Course catalog"</h2>
            {move || course_list(courses.get(), "No courses published yet.")}
        </section>
    }
}

/// Render a fetched course list as a card grid.
pub(crate) fn course_list(state: Remote<Vec<Course>>, empty_message: &'static str) -> AnyView {
    match state {
        Remote::Pending => view! { <SkeletonLoader lines=4/> }.into_any(),
        Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
        Remote::Ready(list) if list.is_empty() => view! { <p class="page__empty">{empty_message}</p> }.into_any(),
        Remote::Ready(list) => view! {
            <div class="course-grid">
                {list.into_iter().map(|course| view! { <CourseCard course/> }).collect_view()}
            </div>
        }
            .into_any(),
    }
}
