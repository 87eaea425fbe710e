use super::*;

fn profile() -> UserProfile {
    UserProfile {
        id: Some(11),
        name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
        role: Some("user".to_owned()),
    }
}

#[test]
fn default_state_has_no_identity() {
    let state = SessionState::default();
    assert!(state.current().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_reads_the_credential_store() {
    credentials::clear_auth();
    assert_eq!(SessionState::restore(), SessionState::default());

    credentials::store_session("tok", &profile());
    let state = SessionState::restore();
    assert_eq!(state.current(), Some(&profile()));
}

#[test]
fn set_identity_updates_memory_and_storage_together() {
    credentials::clear_auth();
    let mut state = SessionState::default();
    state.set_identity(Some(profile()));

    assert_eq!(state.current(), Some(&profile()));
    assert_eq!(credentials::get_profile(), Some(profile()));
}

#[test]
fn set_identity_none_clears_memory_and_storage_together() {
    credentials::clear_auth();
    let mut state = SessionState::default();
    state.set_identity(Some(profile()));
    state.set_identity(None);

    assert!(state.current().is_none());
    assert_eq!(credentials::get_profile(), None);
}

#[test]
fn logout_clears_memory_token_and_profile_in_one_call() {
    credentials::store_session("tok", &profile());
    let mut state = SessionState::restore();
    assert!(state.is_authenticated());

    state.logout();

    assert!(state.current().is_none());
    assert_eq!(credentials::get_token(), None);
    assert_eq!(credentials::get_profile(), None);
}

#[test]
fn logout_end_state_matches_identity_cleared_plus_token_removed() {
    credentials::store_session("tok", &profile());
    let mut via_logout = SessionState::restore();
    via_logout.logout();

    credentials::store_session("tok", &profile());
    let mut via_set = SessionState::restore();
    via_set.set_identity(None);
    credentials::clear_auth();

    assert_eq!(via_logout, via_set);
    assert_eq!(credentials::get_token(), None);
    assert_eq!(credentials::get_profile(), None);
}
