use super::*;

fn ann() -> User {
    User { id: 1, name: "Ann".to_owned(), role: "student".to_owned() }
}

#[test]
fn session_default_is_loading() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(session.user().is_none());
}

#[test]
fn session_user_only_when_authenticated() {
    assert_eq!(Session::Authenticated(ann()).user(), Some(&ann()));
    assert!(Session::Unauthenticated.user().is_none());
    assert!(Session::Loading.user().is_none());
}

#[test]
fn session_flags_are_exclusive() {
    let authed = Session::Authenticated(ann());
    assert!(authed.is_authenticated() && !authed.is_loading());
    let out = Session::Unauthenticated;
    assert!(!out.is_authenticated() && !out.is_loading());
}

#[test]
fn session_labels() {
    assert_eq!(Session::Unauthenticated.label(), "unauthenticated");
    assert_eq!(Session::Loading.label(), "loading");
    assert_eq!(Session::Authenticated(ann()).label(), "authenticated");
}
