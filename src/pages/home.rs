//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || match session.get().user() {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Learn at your own pace.".to_owned(),
    };

    view! {
        <section class="hero">
            <h1>"CourseHub"</h1>
            <p class="hero__tagline">{greeting}</p>
            <a class="hero__cta" href="/courses">"Browse courses"</a>
        </section>
        <section class="features">
            <div class="features__item">
                <h3>"Structured lessons"</h3>
                <p>"Short lessons that build on each other."</p>
            </div>
            <div class="features__item">
                <h3>"Track progress"</h3>
                <p>"Pick up where you left off from any device."</p>
            </div>
            <div class="features__item">
                <h3>"Expert instructors"</h3>
                <p>"Courses written by people who ship."</p>
            </div>
        </section>
    }
}
