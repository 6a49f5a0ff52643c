// src/tests/router_tests/owner_tests.rs
use crate::db::listings::listings_by_owner;
use crate::domain::status::ModerationStatus;
use crate::tests::utils::{body_string, get, init_test_app, location, post_form, sign_in};
use url::form_urlencoded::Serializer;

const NEW_TITLE: &str = "Bright Room near Jhamsikhel";

fn room_form(price: &str) -> String {
    Serializer::new(String::new())
        .append_pair("title", NEW_TITLE)
        .append_pair(
            "description",
            "A bright single room with morning sun, a shared kitchen and quiet neighbours.",
        )
        .append_pair("price", price)
        .append_pair("room_type", "single")
        .append_pair("city", "Lalitpur")
        .append_pair("area", "Jhamsikhel")
        .append_pair("address", "Jhamsikhel Road, Ward 3")
        .append_pair("available_from", "2026-11-01")
        .append_pair("min_stay", "3")
        .append_pair("owner_phone", "+977-9851234567")
        .append_pair("washroom", "attached")
        .append_pair("gender", "any")
        .append_pair("wifi", "on")
        .append_pair("amenity", "WiFi")
        .append_pair("amenity", "Hot Water")
        .append_pair("profession", "Student")
        .append_pair("images", "https://example.com/a.jpg\nhttps://example.com/b.jpg")
        .finish()
}

#[test]
fn dashboard_lists_own_rooms_with_counts() {
    let app = init_test_app();
    let owner = sign_in(&app, "owner@example.com", "owner123");

    let body = body_string(get(&app, "/owner", Some(&owner)).unwrap());
    assert!(body.contains("My Properties"));
    assert!(body.contains("Cozy Single Room in Thamel"));
    assert!(body.contains("Shared Room in Kirtipur"));
    // Other owners' rooms stay out.
    assert!(!body.contains("Luxury Apartment in Boudha"));

    let body = body_string(get(&app, "/owner?tab=rejected", Some(&owner)).unwrap());
    assert!(body.contains("Shared Room in Kirtipur"));
    assert!(!body.contains(">Cozy Single Room in Thamel<"));
}

#[test]
fn new_room_form_prefills_phone() {
    let app = init_test_app();
    let owner = sign_in(&app, "owner@example.com", "owner123");

    let body = body_string(get(&app, "/owner/rooms/new", Some(&owner)).unwrap());
    assert!(body.contains("Add New Room"));
    assert!(body.contains("name=\"owner_phone\""));
}

#[test]
fn valid_submission_creates_a_pending_room() {
    let app = init_test_app();
    let owner = sign_in(&app, "owner@example.com", "owner123");

    let resp = post_form(&app, "/owner/rooms", &room_form("14000"), Some(&owner)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/owner?tab=pending&notice=submitted");

    let mine = app
        .state
        .db
        .with_conn(|conn| listings_by_owner(conn, "2"))
        .unwrap();
    let created = mine.iter().find(|l| l.title == NEW_TITLE).expect("room stored");
    assert_eq!(created.status, ModerationStatus::Pending);
    assert_eq!(created.price, 14_000);
    assert_eq!(created.location.area, "Jhamsikhel");
    assert_eq!(created.amenities, vec!["WiFi", "Hot Water"]);
    assert_eq!(created.images.len(), 2);
    assert!(created.features.wifi);
    assert!(!created.features.parking);

    let body = body_string(
        get(&app, "/owner?tab=pending&notice=submitted", Some(&owner)).unwrap(),
    );
    assert!(body.contains(NEW_TITLE));
    assert!(body.contains("Room submitted."));

    // Not public until approved.
    let body = body_string(get(&app, "/rooms?q=jhamsikhel", None).unwrap());
    assert!(body.contains("No rooms found"));
}

#[test]
fn invalid_submission_rerenders_with_messages() {
    let app = init_test_app();
    let owner = sign_in(&app, "owner@example.com", "owner123");

    let resp = post_form(&app, "/owner/rooms", &room_form("500"), Some(&owner)).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Price must be at least NPR 1,000."));
    assert!(body.contains("Please fix the highlighted fields."));
    // The rest of the input survives.
    assert!(body.contains(NEW_TITLE));

    let mine = app
        .state
        .db
        .with_conn(|conn| listings_by_owner(conn, "2"))
        .unwrap();
    assert_eq!(mine.len(), 4);
}

#[test]
fn malformed_price_is_a_bad_request() {
    let app = init_test_app();
    let owner = sign_in(&app, "owner@example.com", "owner123");

    let err = post_form(&app, "/owner/rooms", &room_form("lots"), Some(&owner)).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn only_owners_may_submit() {
    let app = init_test_app();
    let searcher = sign_in(&app, "searcher@example.com", "searcher123");

    let err = post_form(&app, "/owner/rooms", &room_form("14000"), Some(&searcher)).unwrap_err();
    assert_eq!(err.status(), 403);

    let resp = post_form(&app, "/owner/rooms", &room_form("14000"), None).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");
}
