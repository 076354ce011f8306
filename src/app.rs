//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::{ProtectedRoute, ViewFactory};
use crate::config::AppConfig;
use crate::net::api::HttpClient;
use crate::pages::{
    admin_courses::AdminCoursesPage, admin_users::AdminUsersPage, catalog::CatalogPage, course::CoursePage,
    home::HomePage, login::LoginPage, my_courses::MyCoursesPage, not_found::NotFoundPage,
};
use crate::routes::{Access, Params, Resolution, RouteTable};
use crate::state::auth::{SessionProvider, provide_session};
use crate::util::credential::LocalStorageCredentials;

fn home_view(_: Params) -> AnyView {
    view! { <HomePage/> }.into_any()
}

fn catalog_view(_: Params) -> AnyView {
    view! { <CatalogPage/> }.into_any()
}

fn course_view(params: Params) -> AnyView {
    match params.get("id").and_then(|id| id.parse::<i64>().ok()) {
        Some(course_id) => view! { <CoursePage course_id/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

fn login_view(_: Params) -> AnyView {
    view! { <LoginPage/> }.into_any()
}

fn my_courses_view(_: Params) -> AnyView {
    view! { <MyCoursesPage/> }.into_any()
}

fn admin_users_view(_: Params) -> AnyView {
    view! { <AdminUsersPage/> }.into_any()
}

fn admin_courses_view(_: Params) -> AnyView {
    view! { <AdminCoursesPage/> }.into_any()
}

/// Every route the site serves, in match order.
pub fn app_routes() -> RouteTable<ViewFactory> {
    RouteTable::<ViewFactory>::new()
        .public("/", home_view)
        .public("/courses", catalog_view)
        .public("/courses/:id", course_view)
        .public("/login", login_view)
        .protected("/my-courses", my_courses_view)
        .protected("/admin", admin_users_view)
        .protected("/admin/users", admin_users_view)
        .protected("/admin/courses", admin_courses_view)
}

/// Renders the entry matching the current location. Protected entries go
/// through the guard; unmatched paths get the not-found page.
#[component]
fn RouteOutlet() -> impl IntoView {
    let routes = app_routes();
    let pathname = use_location().pathname;

    move || match routes.resolve(&pathname.get()) {
        Resolution::Matched { entry, params } => match entry.access {
            Access::Public => (entry.view)(params),
            Access::Protected => view! { <ProtectedRoute params destination=entry.view/> }.into_any(),
        },
        Resolution::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Root application component.
///
/// Builds the session provider, provides it and the API client as context,
/// and starts credential verification.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    log::debug!("api base {}", config.api_base);
    let client = HttpClient::new(&config);
    let provider = SessionProvider::new(
        Rc::new(LocalStorageCredentials::new(config.token_key.clone())),
        Rc::new(client.clone()),
    );
    let handle = provide_session(provider.clone());
    provide_context(client);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        provider.initialize().await;
    });
    #[cfg(not(feature = "csr"))]
    drop(provider);

    on_cleanup(move || {
        if let Some(provider) = handle.provider() {
            provider.dispose();
        }
    });

    view! {
        <Title text="CourseHub"/>

        <Router>
            <NavBar/>
            <main class="page">
                <RouteOutlet/>
            </main>
        </Router>
    }
}
