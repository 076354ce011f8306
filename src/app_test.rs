use super::*;

fn access_of(path: &str) -> Option<Access> {
    match app_routes().resolve(path) {
        Resolution::Matched { entry, .. } => Some(entry.access),
        Resolution::NotFound => None,
    }
}

fn pattern_of(path: &str) -> Option<String> {
    match app_routes().resolve(path) {
        Resolution::Matched { entry, .. } => Some(entry.pattern.as_str().to_owned()),
        Resolution::NotFound => None,
    }
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn catalog_pages_are_public() {
    assert_eq!(access_of("/"), Some(Access::Public));
    assert_eq!(access_of("/courses"), Some(Access::Public));
    assert_eq!(access_of("/courses/12"), Some(Access::Public));
}

#[test]
fn login_page_is_public() {
    assert_eq!(access_of("/login"), Some(Access::Public));
    assert_eq!(access_of("/login?next=%2Fadmin"), Some(Access::Public));
}

#[test]
fn course_detail_captures_id() {
    let routes = app_routes();
    let Resolution::Matched { params, .. } = routes.resolve("/courses/42") else {
        panic!("course detail should match");
    };
    assert_eq!(params.get("id"), Some("42"));
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn learner_and_admin_pages_are_protected() {
    for path in ["/my-courses", "/admin", "/admin/users", "/admin/courses"] {
        assert_eq!(access_of(path), Some(Access::Protected), "{path}");
    }
}

#[test]
fn admin_root_has_its_own_entry() {
    assert_eq!(pattern_of("/admin").as_deref(), Some("/admin"));
    assert_eq!(pattern_of("/admin/").as_deref(), Some("/admin"));
    assert_eq!(pattern_of("/admin/courses").as_deref(), Some("/admin/courses"));
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(access_of("/nowhere"), None);
    assert_eq!(access_of("/admin/users/7"), None);
    assert_eq!(access_of("/courses/1/lessons"), None);
}
