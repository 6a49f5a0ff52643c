// src/tests/router_tests/dashboard_tests.rs
use crate::tests::utils::{body_string, get, init_test_app, location, sign_in};

#[test]
fn dashboards_require_login() {
    let app = init_test_app();

    for path in ["/searcher", "/owner", "/owner/rooms/new", "/admin"] {
        let resp = get(&app, path, None).unwrap();
        assert_eq!(resp.status(), 303, "{path}");
        assert_eq!(location(&resp), "/login", "{path}");
    }
}

#[test]
fn wrong_role_is_forbidden() {
    let app = init_test_app();
    let searcher = sign_in(&app, "searcher@example.com", "searcher123");
    let owner = sign_in(&app, "owner@example.com", "owner123");

    assert_eq!(get(&app, "/admin", Some(&searcher)).unwrap_err().status(), 403);
    assert_eq!(get(&app, "/owner", Some(&searcher)).unwrap_err().status(), 403);
    assert_eq!(get(&app, "/searcher", Some(&owner)).unwrap_err().status(), 403);
    assert_eq!(get(&app, "/admin", Some(&owner)).unwrap_err().status(), 403);
}

#[test]
fn searcher_free_text_search_finds_thamel_rooms() {
    let app = init_test_app();
    let token = sign_in(&app, "searcher@example.com", "searcher123");

    let resp = get(&app, "/searcher?q=thamel", Some(&token)).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Cozy Single Room in Thamel"));
    assert!(body.contains("Cozy Studio Apartment in Thamel"));
    assert!(!body.contains("Luxury Apartment in Boudha"));
    assert!(body.contains("Showing <strong>2</strong> of 6 rooms"));
}

#[test]
fn searcher_never_sees_unapproved_rooms() {
    let app = init_test_app();
    let token = sign_in(&app, "searcher@example.com", "searcher123");

    let body = body_string(get(&app, "/searcher", Some(&token)).unwrap());
    assert!(!body.contains("Spacious Double Room in New Baneshwor"));
    assert!(!body.contains("Shared Room in Kirtipur"));
    assert!(body.contains("Spacious Double Room in Pulchowk"));
}

#[test]
fn malformed_price_filter_is_a_bad_request() {
    let app = init_test_app();
    let token = sign_in(&app, "searcher@example.com", "searcher123");

    let err = get(&app, "/searcher?min_price=cheap", Some(&token)).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn empty_result_offers_to_clear_filters() {
    let app = init_test_app();
    let token = sign_in(&app, "searcher@example.com", "searcher123");

    let resp = get(&app, "/searcher?min_price=1000000", Some(&token)).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("No rooms found"));
    assert!(body.contains("Clear all filters"));
    assert!(body.contains("1 active"));
}
