//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every `Access::Protected` route. The destination view is built only
//! while the session is `Authenticated`; a signed-out session redirects to
//! login before anything of the destination renders.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::skeleton::SkeletonLoader;
use crate::routes::Params;
use crate::state::auth::use_session;
use crate::util::auth::{GuardDecision, decide, login_redirect_path, return_target};

/// Builds a page view from matched route parameters.
pub type ViewFactory = fn(Params) -> AnyView;

#[component]
pub fn ProtectedRoute(params: Params, destination: ViewFactory) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let decision = Memo::new(move |_| decide(&session.get()));

    move || match decision.get() {
        GuardDecision::Loading => view! { <SkeletonLoader/> }.into_any(),
        GuardDecision::Denied => {
            let from = return_target(&location.pathname.get_untracked(), &location.search.get_untracked());
            let target = login_redirect_path(&from);
            view! { <Redirect path=target/> }.into_any()
        }
        GuardDecision::Granted => destination(params.clone()),
    }
}
