//! Admin panel: account list.

use leptos::prelude::*;

use crate::components::skeleton::SkeletonLoader;
use crate::net::api::HttpClient;
use crate::net::types::User;
use crate::pages::admin_courses::AdminTabs;
use crate::state::auth::use_session_handle;
use crate::state::remote::Remote;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let handle = use_session_handle();
    let users = RwSignal::new(Remote::<Vec<User>>::Pending);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let Some(provider) = handle.provider() else {
            return;
        };
        let result = provider.authorized(|token| async move { client.fetch_admin_users(&token).await }).await;
        let _ = users.try_set(Remote::from_result(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (client, handle);

    view! {
        <section class="admin">
            <AdminTabs/>
            <h2>"Users"</h2>
            {move || match users.get() {
                Remote::Pending => view! { <SkeletonLoader lines=5/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) => view! {
                    <table class="admin-table">
                        <thead>
                            <tr><th>"ID"</th><th>"Name"</th><th>"Role"</th></tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|user| view! {
                                    <tr><td>{user.id}</td><td>{user.name}</td><td>{user.role}</td></tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any(),
            }}
        </section>
    }
}
