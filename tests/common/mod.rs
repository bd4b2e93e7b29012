#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::{App, test, web};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;

use rust_pootle_next::routes;
use rust_pootle_next::storage::Storage;
use rust_pootle_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_pootle_next::utils::jwt::JwtUtils;
use rust_pootle_next::utils::password::hash_password;
use rust_pootle_next::utils::time::now_timestamp;

pub const ADMIN_ID: i64 = 3;
pub const ALICE_ID: i64 = 4;
pub const BOB_ID: i64 = 5;
pub const CAROL_ID: i64 = 6;
pub const PASSWORD: &str = "correct horse";

async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt).await.expect("connect sqlite")
}

/// 两种语言，法语下有四个翻译项目（其中一个项目已停用）
async fn seed(db: &DatabaseConnection) {
    let hash = hash_password(PASSWORD).expect("hash password");
    let now = now_timestamp();

    let users = [
        (1, "nobody", "!", false),
        (2, "default", "!", false),
        (ADMIN_ID, "admin", hash.as_str(), true),
        (ALICE_ID, "alice", hash.as_str(), false),
        (BOB_ID, "bob", hash.as_str(), false),
        (CAROL_ID, "carol", hash.as_str(), false),
    ];
    for (id, username, password_hash, superuser) in users {
        db.execute_unprepared(&format!(
            "INSERT INTO accounts_user (id, username, email, password_hash, full_name, is_superuser, is_active, created_at, updated_at) \
             VALUES ({id}, '{username}', '{username}@example.com', '{password_hash}', '', {superuser}, 1, 0, 0)",
            superuser = superuser as i32,
        ))
        .await
        .expect("insert user");
    }

    let statements = [
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (1, '', '/', NULL)",
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (2, 'fr', '/fr/', 1)",
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (3, 'tutorial', '/fr/tutorial/', 2)",
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (4, 'zulu', '/fr/zulu/', 2)",
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (5, 'alpha', '/fr/alpha/', 2)",
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (6, 'hidden', '/fr/hidden/', 2)",
        "INSERT INTO pootle_app_directory (id, name, pootle_path, parent_id) VALUES (7, 'de', '/de/', 1)",
        "INSERT INTO pootle_app_language (id, code, fullname, directory_id) VALUES (1, 'fr', 'French', 2)",
        "INSERT INTO pootle_app_language (id, code, fullname, directory_id) VALUES (2, 'de', 'German', 7)",
        "INSERT INTO pootle_app_project (id, code, fullname, disabled) VALUES (1, 'tutorial', 'Tutorial', 0)",
        "INSERT INTO pootle_app_project (id, code, fullname, disabled) VALUES (2, 'zulu', 'Aardvark Docs', 0)",
        "INSERT INTO pootle_app_project (id, code, fullname, disabled) VALUES (3, 'alpha', 'Zebra UI', 0)",
        "INSERT INTO pootle_app_project (id, code, fullname, disabled) VALUES (4, 'hidden', 'Hidden', 1)",
        "INSERT INTO pootle_app_translationproject (id, language_id, project_id, directory_id, pootle_path) VALUES (1, 1, 1, 3, '/fr/tutorial/')",
        "INSERT INTO pootle_app_translationproject (id, language_id, project_id, directory_id, pootle_path) VALUES (2, 1, 2, 4, '/fr/zulu/')",
        "INSERT INTO pootle_app_translationproject (id, language_id, project_id, directory_id, pootle_path) VALUES (3, 1, 3, 5, '/fr/alpha/')",
        "INSERT INTO pootle_app_translationproject (id, language_id, project_id, directory_id, pootle_path) VALUES (4, 1, 4, 6, '/fr/hidden/')",
        // nobody: view；default: view + suggest；alice 在法语上可以翻译；carol 在德语上只能建议
        "INSERT INTO pootle_app_permissionset (user_id, directory_id, capabilities) VALUES (1, 1, 1)",
        "INSERT INTO pootle_app_permissionset (user_id, directory_id, capabilities) VALUES (2, 1, 3)",
        "INSERT INTO pootle_app_permissionset (user_id, directory_id, capabilities) VALUES (4, 2, 5)",
        "INSERT INTO pootle_app_permissionset (user_id, directory_id, capabilities) VALUES (6, 7, 2)",
        "INSERT INTO pootle_store_store (id, translation_project_id, name, pootle_path) VALUES (1, 1, 'tutorial.po', '/fr/tutorial/tutorial.po')",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (1, 1, 1, 'Hello', 'Bonjour', 200, 1, 100)",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (2, 1, 2, 'Good bye', '', 0, 2, 200)",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (3, 1, 3, 'Almost done', 'Presque', 50, 2, 300)",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (4, 1, 4, 'Gone', 'Parti', -100, 5, 400)",
        "INSERT INTO pootle_store_suggestion (unit_id, user_id, target, state, creation_time) VALUES (2, 4, 'Au revoir', 'pending', 200)",
        "INSERT INTO pootle_store_qualitycheck (unit_id, name, category, false_positive) VALUES (1, 'printf', 100, 0)",
    ];
    for sql in statements {
        db.execute_unprepared(sql).await.expect(sql);
    }

    db.execute_unprepared(&format!(
        "INSERT INTO pootle_app_submission (id, creation_time, translation_project_id, store_id, submitter_id, unit_id, field, type, old_value, new_value) \
         VALUES (1, {now}, 1, 1, {ALICE_ID}, 1, 2, 1, '', 'Bonjour')"
    ))
    .await
    .expect("insert submission");
    db.execute_unprepared(&format!(
        "INSERT INTO pootle_statistics_scorelog (creation_time, rate, review_rate, wordcount, similarity, score_delta, action_code, submission_id, user_id) \
         VALUES ({now}, 0, 0, 1, 0, 2.5, 0, 1, {ALICE_ID})"
    ))
    .await
    .expect("insert score log");
}

/// 迁移并填充测试数据
pub async fn setup() -> Arc<dyn Storage> {
    setup_with(&[]).await
}

/// 在基础数据之上再执行额外的 SQL
pub async fn setup_with(extra: &[&str]) -> Arc<dyn Storage> {
    let db = memory_db().await;
    Migrator::up(&db, None).await.expect("run migrations");
    seed(&db).await;
    for sql in extra {
        db.execute_unprepared(sql).await.expect(sql);
    }
    Arc::new(SeaOrmStorage::from_connection(db))
}

pub fn auth_cookie(user_id: i64) -> Cookie<'static> {
    let token = JwtUtils::generate_access_token(user_id).expect("generate token");
    JwtUtils::create_access_token_cookie(&token)
}

/// 对完整路由发送请求
pub async fn send(storage: &Arc<dyn Storage>, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .configure(routes::configure_account_routes)
            .configure(routes::configure_language_routes),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}

pub async fn body_text(response: ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8_lossy(&bytes).into_owned()
}
