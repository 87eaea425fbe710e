use super::*;

fn profile(id: Option<i64>, email: Option<&str>) -> UserProfile {
    UserProfile {
        id,
        name: Some("Ada".to_owned()),
        email: email.map(str::to_owned),
        role: Some("user".to_owned()),
    }
}

// =============================================================
// Token
// =============================================================

#[test]
fn set_token_then_get_token_round_trips() {
    clear_auth();
    set_token("abc.def.ghi");
    assert_eq!(get_token().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn set_empty_token_is_a_noop_not_a_clear() {
    clear_auth();
    set_token("kept");
    set_token("");
    assert_eq!(get_token().as_deref(), Some("kept"));
}

#[test]
fn get_token_absent_when_nothing_stored() {
    clear_auth();
    assert_eq!(get_token(), None);
}

// =============================================================
// clear_auth
// =============================================================

#[test]
fn clear_auth_removes_token_and_profile() {
    set_token("t-1");
    set_profile(Some(&profile(Some(1), Some("ada@example.com"))));
    clear_auth();
    assert_eq!(get_token(), None);
    assert_eq!(get_profile(), None);
}

#[test]
fn clear_auth_is_idempotent() {
    clear_auth();
    clear_auth();
    assert_eq!(get_token(), None);
    assert_eq!(get_profile(), None);
}

// =============================================================
// Profile
// =============================================================

#[test]
fn set_profile_then_get_profile_round_trips() {
    clear_auth();
    let p = profile(Some(7), Some("ada@example.com"));
    set_profile(Some(&p));
    assert_eq!(get_profile(), Some(p));
}

#[test]
fn profile_without_id_or_email_reads_back_absent() {
    clear_auth();
    set_profile(Some(&profile(None, None)));
    assert_eq!(get_profile(), None);
}

#[test]
fn profile_with_only_email_is_valid() {
    clear_auth();
    set_profile(Some(&profile(None, Some("ada@example.com"))));
    assert!(get_profile().is_some());
}

#[test]
fn set_profile_none_clears_the_record() {
    clear_auth();
    set_profile(Some(&profile(Some(1), None)));
    set_profile(None);
    assert_eq!(get_profile(), None);
}

#[test]
fn malformed_stored_profile_degrades_to_absent() {
    clear_auth();
    backend::set("me", "{not json").expect("in-memory set");
    assert_eq!(get_profile(), None);
}

// =============================================================
// auth_header
// =============================================================

#[test]
fn auth_header_empty_exactly_when_no_token() {
    clear_auth();
    assert_eq!(auth_header(), None);
    set_token("tok-9");
    assert_eq!(
        auth_header(),
        Some(("Authorization", "Bearer tok-9".to_owned()))
    );
}

// =============================================================
// Session pairing
// =============================================================

#[test]
fn store_session_writes_both_records() {
    clear_auth();
    let p = profile(Some(3), Some("ada@example.com"));
    store_session("tok-3", &p);
    assert_eq!(get_token().as_deref(), Some("tok-3"));
    assert_eq!(get_profile(), Some(p));
}

#[test]
fn clear_session_empties_both_records() {
    store_session("tok-4", &profile(Some(4), None));
    clear_session();
    assert_eq!(get_token(), None);
    assert_eq!(get_profile(), None);
}
