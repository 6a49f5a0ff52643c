// src/tests/router_tests/admin_tests.rs
use crate::db::listings::find_listing;
use crate::domain::status::ModerationStatus;
use crate::tests::utils::{body_string, get, init_test_app, location, post_form, sign_in};

fn status_of(app: &crate::tests::utils::TestApp, id: &str) -> ModerationStatus {
    app.state
        .db
        .with_conn(|conn| find_listing(conn, id))
        .unwrap()
        .expect("listing exists")
        .status
}

#[test]
fn dashboard_opens_on_pending() {
    let app = init_test_app();
    let admin = sign_in(&app, "admin@example.com", "admin123");

    let body = body_string(get(&app, "/admin", Some(&admin)).unwrap());
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Spacious Double Room in New Baneshwor"));
    assert!(!body.contains("Luxury Apartment in Boudha"));
    assert!(body.contains("1 listing(s) awaiting review."));

    let body = body_string(get(&app, "/admin?tab=all", Some(&admin)).unwrap());
    assert!(body.contains("Luxury Apartment in Boudha"));
    assert!(body.contains("Shared Room in Kirtipur"));
}

#[test]
fn approving_publishes_the_room() {
    let app = init_test_app();
    let admin = sign_in(&app, "admin@example.com", "admin123");

    let resp = post_form(&app, "/admin/rooms/2/approve", "", Some(&admin)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/admin?tab=pending&notice=approved");
    assert_eq!(status_of(&app, "2"), ModerationStatus::Approved);

    let searcher = sign_in(&app, "searcher@example.com", "searcher123");
    let body = body_string(get(&app, "/searcher?q=new+baneshwor", Some(&searcher)).unwrap());
    assert!(body.contains("Spacious Double Room in New Baneshwor"));

    // Already decided.
    let err = post_form(&app, "/admin/rooms/2/approve", "", Some(&admin)).unwrap_err();
    assert_eq!(err.status(), 409);
}

#[test]
fn rejecting_hides_the_room() {
    let app = init_test_app();
    let admin = sign_in(&app, "admin@example.com", "admin123");

    let resp = post_form(&app, "/admin/rooms/2/reject", "", Some(&admin)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/admin?tab=pending&notice=rejected");
    assert_eq!(status_of(&app, "2"), ModerationStatus::Rejected);

    assert_eq!(get(&app, "/rooms/2", None).unwrap_err().status(), 404);
}

#[test]
fn approved_rooms_cannot_be_moderated_again() {
    let app = init_test_app();
    let admin = sign_in(&app, "admin@example.com", "admin123");

    let err = post_form(&app, "/admin/rooms/1/reject", "", Some(&admin)).unwrap_err();
    assert_eq!(err.status(), 409);
    assert_eq!(status_of(&app, "1"), ModerationStatus::Approved);
}

#[test]
fn unknown_rooms_and_actions_are_not_found() {
    let app = init_test_app();
    let admin = sign_in(&app, "admin@example.com", "admin123");

    let err = post_form(&app, "/admin/rooms/2/archive", "", Some(&admin)).unwrap_err();
    assert_eq!(err.status(), 404);
    let err = post_form(&app, "/admin/rooms/missing/approve", "", Some(&admin)).unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(status_of(&app, "2"), ModerationStatus::Pending);
}

#[test]
fn only_admins_moderate() {
    let app = init_test_app();
    let owner = sign_in(&app, "owner@example.com", "owner123");

    let err = post_form(&app, "/admin/rooms/2/approve", "", Some(&owner)).unwrap_err();
    assert_eq!(err.status(), 403);
    let err = get(&app, "/admin", Some(&owner)).unwrap_err();
    assert_eq!(err.status(), 403);
    assert_eq!(status_of(&app, "2"), ModerationStatus::Pending);
}
