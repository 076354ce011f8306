//! Public course detail with an enroll action for signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::course_card::lesson_label;
use crate::components::skeleton::SkeletonLoader;
use crate::net::api::HttpClient;
use crate::net::types::Course;
use crate::state::auth::{use_session, use_session_handle};
use crate::state::remote::Remote;
use crate::util::auth::login_redirect_path;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
enum EnrollState {
    Idle,
    Working,
    Done,
    Failed(String),
}

#[component]
pub fn CoursePage(course_id: i64) -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = use_session();
    let handle = use_session_handle();
    let pathname = use_location().pathname;
    let course = RwSignal::new(Remote::<Course>::Pending);
    let enroll = RwSignal::new(EnrollState::Idle);

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let result = client.fetch_course(course_id).await;
            let _ = course.try_set(Remote::from_result(result));
        });
    }

    let on_enroll = move |_: leptos::ev::MouseEvent| {
        if enroll.get() == EnrollState::Working {
            return;
        }
        enroll.set(EnrollState::Working);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let Some(provider) = handle.provider() else {
                    return;
                };
                let result = provider.authorized(|token| async move { client.enroll(&token, course_id).await }).await;
                let next = match result {
                    Ok(()) => EnrollState::Done,
                    Err(err) => EnrollState::Failed(crate::state::remote::failure_message(&err)),
                };
                let _ = enroll.try_set(next);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&client, handle);
    };

    let enroll_area = move || {
        if !session.get().is_authenticated() {
            let href = login_redirect_path(&pathname.get());
            return view! { <a class="course-detail__action" href=href>"Sign in to enroll"</a> }.into_any();
        }
        match enroll.get() {
            EnrollState::Done => view! {
                <p class="course-detail__enrolled">
                    "Enrolled. Find it under " <a href="/my-courses">"My courses"</a> "."
                </p>
            }
                .into_any(),
            state => {
                let working = state == EnrollState::Working;
                let error = match state {
                    EnrollState::Failed(message) => Some(message),
                    _ => None,
                };
                view! {
                    <button class="course-detail__action" disabled=working on:click=on_enroll.clone()>
                        {if working { "Enrolling..." } else { "Enroll" }}
                    </button>
                    {error.map(|message| view! { <p class="page__error">{message}</p> })}
                }
                    .into_any()
            }
        }
    };

    view! {
        <section class="course-detail">
            {move || match course.get() {
                Remote::Pending => view! { <SkeletonLoader lines=6/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(course) => view! {
                    <h1>{course.title}</h1>
                    {course.instructor.map(|name| view! { <p class="course-detail__instructor">"Taught by " {name}</p> })}
                    <p class="course-detail__lessons">{lesson_label(course.lessons)}</p>
                    <p class="course-detail__summary">{course.summary}</p>
                }
                    .into_any(),
            }}
            {enroll_area}
        </section>
    }
}
