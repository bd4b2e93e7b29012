mod common;

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::test::TestRequest;

use common::{
    ADMIN_ID, ALICE_ID, BOB_ID, CAROL_ID, auth_cookie, body_text, send, setup, setup_with,
};
use rust_pootle_next::models::permissions::entities::Capabilities;
use rust_pootle_next::runtime::lifetime::startup::find_reserved_languages;
use rust_pootle_next::storage::Storage;

#[actix_web::test]
async fn test_overview_lists_accessible_projects_by_fullname() {
    let storage = setup().await;

    let response = send(&storage, TestRequest::get().uri("/fr/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    let zulu = body.find(r#"data-code="zulu""#).expect("zulu listed");
    let tutorial = body.find(r#"data-code="tutorial""#).expect("tutorial listed");
    let alpha = body.find(r#"data-code="alpha""#).expect("alpha listed");
    assert!(zulu < tutorial && tutorial < alpha);

    // 停用项目只有超级用户可见
    assert!(!body.contains(r#"data-code="hidden""#));
}

#[actix_web::test]
async fn test_overview_shows_disabled_projects_to_superuser() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get().uri("/fr/").cookie(auth_cookie(ADMIN_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"data-code="hidden""#));
    assert!(body.contains("/fr/admin/permissions/"));
}

#[actix_web::test]
async fn test_overview_sets_language_cookie() {
    let storage = setup().await;

    let response = send(&storage, TestRequest::get().uri("/fr/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .response()
        .cookies()
        .find(|c| c.name() == "pootle-language")
        .expect("language cookie");
    assert_eq!(cookie.value(), "fr");
    assert_eq!(cookie.path(), Some("/"));
}

#[actix_web::test]
async fn test_overview_stats_and_top_scorers() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get().uri("/fr/").cookie(auth_cookie(ALICE_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    // 过期单元不计入：1 + 2 + 2
    assert!(body.contains(r#""total":5"#));
    assert!(body.contains(r#""translated":1"#));
    assert!(body.contains(r#""suggestions":1"#));
    assert!(body.contains("Top contributors"));
    assert!(body.contains("/fr/translate/#filter=incomplete"));
}

#[actix_web::test]
async fn test_overview_stats_json_cannot_close_script() {
    let storage = setup_with(&[
        "UPDATE accounts_user SET full_name = '</script><script>alert(1)</script>' WHERE username = 'alice'",
    ])
    .await;

    let response = send(&storage, TestRequest::get().uri("/fr/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    assert!(!body.contains("</script><script>"));
    assert!(!body.contains("<script>alert(1)"));
    assert!(body.contains(r"\u003c/script\u003e\u003cscript\u003ealert(1)"));
}

#[actix_web::test]
async fn test_language_without_trailing_slash_redirects() {
    let storage = setup().await;

    let response = send(&storage, TestRequest::get().uri("/fr")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/fr/");

    let response = send(&storage, TestRequest::get().uri("/fr?lang=1")).await;
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/fr/?lang=1");

    // 登录页不受影响
    let response = send(&storage, TestRequest::get().uri("/accounts/login/")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_reserved_language_code_is_reported() {
    let storage = setup().await;
    assert!(find_reserved_languages(&storage).await.unwrap().is_empty());

    let storage = setup_with(&[
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (8, 'accounts', '/accounts/', 1)",
        "INSERT INTO pootle_app_language (id, code, fullname, directory_id) VALUES (3, 'accounts', 'Accounts', 8)",
    ])
    .await;
    assert_eq!(
        find_reserved_languages(&storage).await.unwrap(),
        vec!["accounts".to_string()]
    );
}

#[actix_web::test]
async fn test_unknown_language_is_not_found() {
    let storage = setup().await;

    for uri in ["/xx/", "/xx/translate/", "/xx/export-view/"] {
        let response = send(&storage, TestRequest::get().uri(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_views_require_view_permission() {
    let storage = setup().await;

    // carol 在德语上只有 suggest
    for uri in ["/de/", "/de/translate/", "/de/export-view/"] {
        let response = send(
            &storage,
            TestRequest::get().uri(uri).cookie(auth_cookie(CAROL_ID)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    // 其他用户回退到 default，可以查看
    let response = send(
        &storage,
        TestRequest::get().uri("/de/").cookie(auth_cookie(BOB_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_translate_page() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get()
            .uri("/fr/translate/")
            .cookie(auth_cookie(ALICE_ID))
            .insert_header((header::REFERER, "/fr/")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"data-pootle-path="/fr/""#));
    assert!(body.contains(r#"data-can-translate="true""#));
    assert!(body.contains(r#"value="incomplete""#));
}

#[actix_web::test]
async fn test_export_view_filters_units() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get()
            .uri("/fr/export-view/?filter=incomplete")
            .cookie(auth_cookie(ALICE_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    assert!(body.contains(r#"data-source-language="en""#));
    assert!(body.contains("/fr/tutorial/tutorial.po"));
    assert!(body.contains("Good bye"));
    assert!(body.contains("Almost done"));
    assert!(!body.contains("Hello"));
    assert!(!body.contains("Gone"));
}

#[actix_web::test]
async fn test_export_view_unknown_filter_shows_all() {
    let storage = setup().await;

    let response = send(&storage, TestRequest::get().uri("/fr/export-view/?filter=bogus")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Hello"));
    assert!(body.contains("Good bye"));
}

#[actix_web::test]
async fn test_admin_requires_administrate() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get()
            .uri("/fr/admin/permissions/")
            .cookie(auth_cookie(ALICE_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&storage, TestRequest::get().uri("/fr/admin/permissions/")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(
        &storage,
        TestRequest::get()
            .uri("/fr/admin/permissions/")
            .cookie(auth_cookie(ADMIN_ID)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("alice"));
    assert!(body.contains("view, translate"));
}

#[actix_web::test]
async fn test_admin_saves_permissions() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::post()
            .uri("/fr/admin/permissions/")
            .cookie(auth_cookie(ADMIN_ID))
            .set_form([("username", "bob"), ("view", "on"), ("review", "on")]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/fr/admin/permissions/"
    );

    let sets = storage.list_permission_sets(2).await.unwrap();
    let bob = sets.iter().find(|s| s.username == "bob").expect("bob's set");
    assert_eq!(bob.capabilities, Capabilities::VIEW | Capabilities::REVIEW);

    // 全部取消即删除
    let response = send(
        &storage,
        TestRequest::post()
            .uri("/fr/admin/permissions/")
            .cookie(auth_cookie(ADMIN_ID))
            .set_form([("username", "bob")]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let sets = storage.list_permission_sets(2).await.unwrap();
    assert!(sets.iter().all(|s| s.username != "bob"));
}

#[actix_web::test]
async fn test_admin_rejects_unknown_user() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::post()
            .uri("/fr/admin/permissions/")
            .cookie(auth_cookie(ADMIN_ID))
            .set_form([("username", "mallory"), ("view", "on")]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("does not exist"));
}

#[actix_web::test]
async fn test_index_redirects_to_remembered_language() {
    let storage = setup().await;

    let response = send(
        &storage,
        TestRequest::get()
            .uri("/")
            .cookie(Cookie::new("pootle-language", "fr")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/fr/");

    let response = send(&storage, TestRequest::get().uri("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"href="/fr/""#));
    assert!(body.contains(r#"href="/de/""#));
}
