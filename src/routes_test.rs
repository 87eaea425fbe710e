use super::*;

#[test]
fn protected_route_without_token_redirects_to_login() {
    assert_eq!(decide("/interview", false), NavigationDecision::RedirectToLogin);
}

#[test]
fn protected_route_with_token_is_allowed() {
    assert_eq!(decide("/interview", true), NavigationDecision::Allow);
}

#[test]
fn public_routes_are_allowed_without_token() {
    for r in ROUTES.iter().filter(|r| !r.requires_auth) {
        assert_eq!(decide(r.path, false), NavigationDecision::Allow, "{}", r.path);
    }
}

#[test]
fn unknown_paths_fall_through_to_the_router() {
    assert_eq!(decide("/no-such-page", false), NavigationDecision::Allow);
}

#[test]
fn check_navigation_consults_the_credential_store() {
    credentials::clear_auth();
    assert_eq!(
        check_navigation("/interview"),
        NavigationDecision::RedirectToLogin
    );

    credentials::set_token("tok");
    assert_eq!(check_navigation("/interview"), NavigationDecision::Allow);
    credentials::clear_auth();
}

#[test]
fn login_path_matches_the_route_table() {
    assert!(ROUTES.iter().any(|r| r.path == LOGIN_PATH && !r.requires_auth));
}
