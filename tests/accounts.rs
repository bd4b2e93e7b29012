mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test::TestRequest;

use common::{PASSWORD, body_text, send, setup};

#[actix_web::test]
async fn test_login_sets_token_cookie() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::post().uri("/accounts/login/").set_form([
            ("username", "alice"),
            ("password", PASSWORD),
            ("next", "/fr/"),
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/fr/");

    let token = response
        .response()
        .cookies()
        .find(|c| c.name() == "access_token")
        .expect("token cookie");
    assert!(!token.value().is_empty());
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let storage = setup().await;

    for (username, password) in [("alice", "wrong"), ("nobody", "!"), ("ghost", PASSWORD)] {
        let response = send(
            &storage,
            TestRequest::post()
                .uri("/accounts/login/")
                .set_form([("username", username), ("password", password)]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{username}");
        let body = body_text(response).await;
        assert!(body.contains("Username or password is incorrect"));
    }
}

#[actix_web::test]
async fn test_logout_clears_cookie() {
    let storage = setup().await;

    let response = send(&storage, TestRequest::post().uri("/accounts/logout/")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = response
        .response()
        .cookies()
        .find(|c| c.name() == "access_token")
        .expect("cleared cookie");
    assert_eq!(cookie.value(), "");
}

#[actix_web::test]
async fn test_login_page_renders() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get().uri("/accounts/login/?next=//evil.example.com/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"name="next" value="/""#));
}
