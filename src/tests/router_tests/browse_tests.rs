// src/tests/router_tests/browse_tests.rs
use crate::tests::utils::{body_string, get, init_test_app, sign_in};

#[test]
fn home_shows_only_approved_rooms() {
    let app = init_test_app();

    let resp = get(&app, "/", None).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Find your perfect room in Nepal"));
    assert!(body.contains("Luxury Apartment in Boudha"));
    assert!(!body.contains("Spacious Double Room in New Baneshwor"));
    assert!(!body.contains("Shared Room in Kirtipur"));
}

#[test]
fn trending_tab_keeps_rooms_above_the_threshold() {
    let app = init_test_app();

    let body = body_string(get(&app, "/?tab=trending", None).unwrap());
    assert!(body.contains("Studio Apartment in Pulchowk"));
    assert!(body.contains("Luxury Apartment in Boudha"));
    assert!(body.contains("Cozy Studio Apartment in Thamel"));
    // Exactly at the threshold is not trending.
    assert!(!body.contains("Cozy Single Room in Thamel"));
    assert!(!body.contains("Modern Single Room in Baneshwor"));
}

#[test]
fn latest_tab_ignores_old_sample_rooms() {
    let app = init_test_app();
    let body = body_string(get(&app, "/?tab=latest", None).unwrap());
    assert!(body.contains("No rooms to show here yet."));
}

#[test]
fn all_rooms_sorts_by_price() {
    let app = init_test_app();

    let body = body_string(get(&app, "/rooms?sort=price-low", None).unwrap());
    let order: Vec<usize> = [
        "Modern Single Room in Baneshwor",
        "Cozy Single Room in Thamel",
        "Spacious Double Room in Pulchowk",
        "Cozy Studio Apartment in Thamel",
        "Luxury Apartment in Boudha",
        "Studio Apartment in Pulchowk",
    ]
    .iter()
    .map(|title| body.find(&format!(">{title}<")).unwrap_or_else(|| panic!("{title} missing")))
    .collect();

    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
}

#[test]
fn all_rooms_applies_filters() {
    let app = init_test_app();

    let body = body_string(
        get(&app, "/rooms?location=Pulchowk&room_type=studio", None).unwrap(),
    );
    assert!(body.contains("Showing <strong>1</strong> of 6 rooms"));
    assert!(body.contains(">Studio Apartment in Pulchowk<"));
}

#[test]
fn room_detail_respects_visibility() {
    let app = init_test_app();

    let resp = get(&app, "/rooms/1", None).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Cozy Single Room in Thamel"));

    // Pending room: hidden from the public and searchers, shown to its owner and admins.
    assert_eq!(get(&app, "/rooms/2", None).unwrap_err().status(), 404);
    let searcher = sign_in(&app, "searcher@example.com", "searcher123");
    assert_eq!(get(&app, "/rooms/2", Some(&searcher)).unwrap_err().status(), 404);

    let owner = sign_in(&app, "owner@example.com", "owner123");
    let body = body_string(get(&app, "/rooms/2", Some(&owner)).unwrap());
    assert!(body.contains("badge-pending"));

    let admin = sign_in(&app, "admin@example.com", "admin123");
    let body = body_string(get(&app, "/rooms/2", Some(&admin)).unwrap());
    assert!(body.contains("/admin/rooms/2/approve"));

    assert_eq!(get(&app, "/rooms/does-not-exist", None).unwrap_err().status(), 404);
}

#[test]
fn searchers_get_a_contact_link() {
    let app = init_test_app();
    let body = body_string(get(&app, "/rooms/1", None).unwrap());
    assert!(body.contains("tel:+977-9851234567"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = init_test_app();
    assert_eq!(get(&app, "/nowhere", None).unwrap_err().status(), 404);
}

#[test]
fn stylesheet_is_served() {
    let app = init_test_app();
    let resp = get(&app, "/static/main.css", None).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
}
