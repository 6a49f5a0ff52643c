// src/tests/router_tests/auth_tests.rs
use crate::tests::utils::{body_string, get, init_test_app, location, post_form, sign_in};

#[test]
fn login_page_loads_successfully() {
    let app = init_test_app();

    let resp = get(&app, "/login", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome Back"));
    assert!(body.contains("<form"));
}

#[test]
fn each_account_lands_on_its_dashboard() {
    let app = init_test_app();

    for (email, password, dashboard) in [
        ("searcher@example.com", "searcher123", "/searcher"),
        ("owner@example.com", "owner123", "/owner"),
        ("admin@example.com", "admin123", "/admin"),
    ] {
        let form = format!("email={email}&password={password}");
        let resp = post_form(&app, "/login", &form, None).unwrap();

        assert_eq!(resp.status(), 303);
        assert_eq!(location(&resp), dashboard);

        let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("HttpOnly"));
    }
}

#[test]
fn email_is_matched_case_insensitively() {
    let app = init_test_app();
    let resp = post_form(&app, "/login", "email=+Owner%40Example.COM+&password=owner123", None).unwrap();
    assert_eq!(location(&resp), "/owner");
}

#[test]
fn wrong_password_rerenders_the_form_with_401() {
    let app = init_test_app();

    let resp = post_form(&app, "/login", "email=owner%40example.com&password=nope", None).unwrap();
    assert_eq!(resp.status(), 401);
    assert!(resp.headers().get("Set-Cookie").is_none());

    let body = body_string(resp);
    assert!(body.contains("Invalid email or password"));
    assert!(body.contains("value=\"owner@example.com\""));
}

#[test]
fn logout_ends_the_session() {
    let app = init_test_app();
    let token = sign_in(&app, "searcher@example.com", "searcher123");

    let resp = get(&app, "/searcher", Some(&token)).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = post_form(&app, "/logout", "", Some(&token)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/?notice=signed-out");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));

    // The old token no longer signs anyone in.
    let resp = get(&app, "/searcher", Some(&token)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn signed_in_users_skip_the_login_page() {
    let app = init_test_app();
    let token = sign_in(&app, "admin@example.com", "admin123");

    let resp = get(&app, "/login", Some(&token)).unwrap();
    assert_eq!(location(&resp), "/admin");
}

#[test]
fn unknown_cookie_is_treated_as_signed_out() {
    let app = init_test_app();
    let resp = get(&app, "/", Some("not-a-real-token")).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("href=\"/login\""));
}
