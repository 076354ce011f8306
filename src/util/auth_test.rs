use super::*;
use crate::net::api::{AccountApi, ApiError};
use crate::net::types::{Credentials, LoginResponse, User};
use crate::state::auth::SessionProvider;
use crate::util::credential::MemoryCredentials;
use async_trait::async_trait;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn ann() -> User {
    User { id: 1, name: "Ann".to_owned(), role: "student".to_owned() }
}

struct ScriptedApi {
    verify: Result<User, ApiError>,
}

#[async_trait(?Send)]
impl AccountApi for ScriptedApi {
    async fn account_info(&self, _credential: &str) -> Result<User, ApiError> {
        self.verify.clone()
    }

    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse { credential: "tok".to_owned(), user: ann() })
    }
}

/// Mount a guard: record its decision now and on every later transition.
fn mount_guard(provider: &SessionProvider) -> Rc<RefCell<Vec<(Session, GuardDecision)>>> {
    let rendered = Rc::new(RefCell::new(Vec::new()));
    let initial = provider.session();
    rendered.borrow_mut().push((initial.clone(), decide(&initial)));
    let sink = Rc::clone(&rendered);
    provider.subscribe(move |s| sink.borrow_mut().push((s.clone(), decide(s))));
    rendered
}

// =============================================================
// decide
// =============================================================

#[test]
fn decide_waits_while_loading() {
    assert_eq!(decide(&Session::Loading), GuardDecision::Loading);
}

#[test]
fn decide_denies_when_signed_out() {
    assert_eq!(decide(&Session::Unauthenticated), GuardDecision::Denied);
}

#[test]
fn decide_grants_when_signed_in() {
    assert_eq!(decide(&Session::Authenticated(ann())), GuardDecision::Granted);
}

// =============================================================
// guard over session transitions
// =============================================================

#[test]
fn guard_mounted_while_loading_shows_placeholder_then_destination() {
    let store = MemoryCredentials::with_credential("tok");
    let provider = SessionProvider::new(Rc::new(store), Rc::new(ScriptedApi { verify: Ok(ann()) }));
    let rendered = mount_guard(&provider);

    block_on(provider.initialize());

    let decisions: Vec<GuardDecision> = rendered.borrow().iter().map(|(_, d)| *d).collect();
    assert_eq!(decisions, vec![GuardDecision::Loading, GuardDecision::Granted]);
}

#[test]
fn guard_never_grants_outside_authenticated() {
    let store = MemoryCredentials::with_credential("tok");
    let provider = SessionProvider::new(Rc::new(store), Rc::new(ScriptedApi { verify: Ok(ann()) }));
    let rendered = mount_guard(&provider);

    block_on(provider.initialize());
    provider.logout();
    block_on(provider.login(&Credentials { identifier: "ann".to_owned(), secret: "pw".to_owned() })).unwrap();
    provider.handle_unauthorized();

    let rendered = rendered.borrow();
    assert_eq!(rendered.len(), 5);
    for (session, decision) in rendered.iter() {
        assert_eq!(*decision == GuardDecision::Granted, session.is_authenticated());
    }
}

#[test]
fn guard_redirects_after_rejected_verification() {
    let store = MemoryCredentials::with_credential("expired");
    let provider = SessionProvider::new(Rc::new(store), Rc::new(ScriptedApi { verify: Err(ApiError::Unauthorized) }));
    let rendered = mount_guard(&provider);

    block_on(provider.initialize());

    let decisions: Vec<GuardDecision> = rendered.borrow().iter().map(|(_, d)| *d).collect();
    assert_eq!(decisions, vec![GuardDecision::Loading, GuardDecision::Denied]);
}

// =============================================================
// redirect targets
// =============================================================

#[test]
fn login_redirect_path_carries_return_target() {
    assert_eq!(login_redirect_path("/my-courses"), "/login?next=%2Fmy-courses");
    assert_eq!(login_redirect_path("/admin/users"), "/login?next=%2Fadmin%2Fusers");
}

#[test]
fn login_redirect_path_encodes_query_characters() {
    assert_eq!(login_redirect_path("/a b?x=1"), "/login?next=%2Fa%20b%3Fx%3D1");
}

#[test]
fn login_redirect_path_ignores_login_and_foreign_targets() {
    assert_eq!(login_redirect_path("/login"), "/login");
    assert_eq!(login_redirect_path("//evil.test"), "/login");
    assert_eq!(login_redirect_path("https://evil.test"), "/login");
}

#[test]
fn login_redirect_path_keeps_query_of_protected_page() {
    let from = return_target("/admin/courses", "?page=2&sort=title");
    assert_eq!(from, "/admin/courses?page=2&sort=title");
    assert_eq!(login_redirect_path(&from), "/login?next=%2Fadmin%2Fcourses%3Fpage%3D2%26sort%3Dtitle");
}

#[test]
fn return_target_accepts_search_with_or_without_marker() {
    assert_eq!(return_target("/my-courses", ""), "/my-courses");
    assert_eq!(return_target("/my-courses", "?"), "/my-courses");
    assert_eq!(return_target("/my-courses", "tab=done"), "/my-courses?tab=done");
}

#[test]
fn login_redirect_path_ignores_login_with_query() {
    assert_eq!(login_redirect_path("/login?next=%2Fadmin"), "/login");
}

#[test]
fn post_login_destination_keeps_query() {
    assert_eq!(post_login_destination(Some("/admin/courses?page=2")), "/admin/courses?page=2");
    assert_eq!(post_login_destination(Some("/login?next=x")), DEFAULT_AFTER_LOGIN);
}

#[test]
fn post_login_destination_honors_local_paths() {
    assert_eq!(post_login_destination(Some("/courses/7")), "/courses/7");
}

#[test]
fn post_login_destination_falls_back_to_default() {
    assert_eq!(post_login_destination(None), DEFAULT_AFTER_LOGIN);
    assert_eq!(post_login_destination(Some("")), DEFAULT_AFTER_LOGIN);
    assert_eq!(post_login_destination(Some("//evil.test/x")), DEFAULT_AFTER_LOGIN);
    assert_eq!(post_login_destination(Some("/\\evil.test")), DEFAULT_AFTER_LOGIN);
    assert_eq!(post_login_destination(Some("/login")), DEFAULT_AFTER_LOGIN);
}
