mod common;

use common::{ADMIN_ID, ALICE_ID, BOB_ID, setup, setup_with};
use rust_pootle_next::models::permissions::entities::Capabilities;
use rust_pootle_next::models::statistics::entities::{
    SubmissionField, SubmissionType, score_action,
};
use rust_pootle_next::models::statistics::requests::{NewScoreLog, NewSubmission};
use rust_pootle_next::models::units::requests::UnitFilter;
use rust_pootle_next::models::users::entities::RequestUser;
use rust_pootle_next::services::permissions::{effective_capabilities, is_accessible_by};
use rust_pootle_next::storage::Storage;
use std::sync::Arc;

async fn request_user(storage: &Arc<dyn Storage>, id: i64) -> RequestUser {
    RequestUser::Authenticated(storage.get_user_by_id(id).await.unwrap().unwrap())
}

#[tokio::test]
async fn test_effective_capabilities_walks_ancestors() {
    let storage = setup().await;

    let alice = request_user(&storage, ALICE_ID).await;
    let caps = effective_capabilities(storage.as_ref(), &alice, "/fr/tutorial/")
        .await
        .unwrap();
    assert_eq!(caps, Capabilities::VIEW | Capabilities::TRANSLATE);

    // alice 在德语上没有权限集，回退到 default
    let caps = effective_capabilities(storage.as_ref(), &alice, "/de/")
        .await
        .unwrap();
    assert_eq!(caps, Capabilities::VIEW | Capabilities::SUGGEST);

    let caps = effective_capabilities(storage.as_ref(), &RequestUser::Anonymous, "/fr/")
        .await
        .unwrap();
    assert_eq!(caps, Capabilities::VIEW);

    let admin = request_user(&storage, ADMIN_ID).await;
    let caps = effective_capabilities(storage.as_ref(), &admin, "/de/")
        .await
        .unwrap();
    assert!(caps.has(Capabilities::ADMINISTRATE));
}

#[tokio::test]
async fn test_disabled_project_hidden() {
    let storage = setup().await;
    let tps = storage.list_translation_projects(1).await.unwrap();
    let codes: Vec<&str> = tps.iter().map(|tp| tp.code()).collect();
    assert_eq!(codes, vec!["zulu", "hidden", "tutorial", "alpha"]);

    let hidden = tps.iter().find(|tp| tp.code() == "hidden").unwrap();
    let bob = request_user(&storage, BOB_ID).await;
    assert!(!is_accessible_by(storage.as_ref(), hidden, &bob).await.unwrap());
    let admin = request_user(&storage, ADMIN_ID).await;
    assert!(is_accessible_by(storage.as_ref(), hidden, &admin).await.unwrap());
}

#[tokio::test]
async fn test_stats_for_language() {
    let storage = setup().await;

    let stats = storage.get_stats("/fr/").await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.translated, 1);
    assert_eq!(stats.fuzzy, 2);
    assert_eq!(stats.suggestions, 1);
    assert_eq!(stats.critical, 1);
    assert_eq!(stats.lastupdated, Some(300));
    let lastaction = stats.lastaction.expect("last action");
    assert_eq!(lastaction.username.as_deref(), Some("alice"));

    let empty = storage.get_stats("/de/").await.unwrap();
    assert_eq!(empty.total, 0);
    assert!(empty.lastaction.is_none());
}

#[tokio::test]
async fn test_stats_grouped_by_translation_project() {
    let storage = setup_with(&[
        "INSERT INTO pootle_store_store (id, translation_project_id, name, pootle_path) VALUES (2, 2, 'docs.po', '/fr/zulu/docs.po')",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (10, 2, 1, 'Open the file', 'Ouvrez', 200, 3, 500)",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (11, 2, 2, 'Save', '', 0, 1, 450)",
        "INSERT INTO pootle_app_submission (id, creation_time, translation_project_id, store_id, submitter_id, unit_id, field, type, old_value, new_value) \
         VALUES (2, 4102444800, 2, 2, 5, 10, 2, 1, '', 'Ouvrez')",
    ])
    .await;

    let stats = storage.get_stats("/fr/").await.unwrap();
    assert_eq!(stats.total, 9);
    assert_eq!(stats.translated, 4);
    assert_eq!(stats.fuzzy, 2);
    assert_eq!(stats.lastupdated, Some(500));
    assert_eq!(stats.children.len(), 2);

    let tutorial = &stats.children["/fr/tutorial/"];
    assert_eq!(tutorial.total, 5);
    assert_eq!(tutorial.suggestions, 1);
    assert_eq!(tutorial.critical, 1);
    assert_eq!(
        tutorial.lastaction.as_ref().and_then(|a| a.username.as_deref()),
        Some("alice")
    );

    let zulu = &stats.children["/fr/zulu/"];
    assert_eq!(zulu.total, 4);
    assert_eq!(zulu.translated, 3);
    assert_eq!(zulu.suggestions, 0);
    assert_eq!(zulu.lastupdated, Some(500));

    // 父路径取所有翻译项目中最新的一次提交
    let lastaction = stats.lastaction.expect("last action");
    assert_eq!(lastaction.id, 2);
    assert_eq!(lastaction.username.as_deref(), Some("bob"));

    // 更深的路径只统计自身
    let store = storage.get_stats("/fr/zulu/docs.po").await.unwrap();
    assert_eq!(store.total, 4);
    assert_eq!(store.suggestions, 0);
}

#[tokio::test]
async fn test_stats_prefix_is_case_sensitive() {
    let storage = setup_with(&[
        "INSERT INTO pootle_store_store (id, translation_project_id, name, pootle_path) VALUES (2, 2, 'upper.po', '/FR/zulu/upper.po')",
        "INSERT INTO pootle_store_unit (id, store_id, \"index\", source, target, state, source_wordcount, mtime) VALUES (10, 2, 1, 'Shout', 'CRIE', 200, 7, 900)",
    ])
    .await;

    let stats = storage.get_stats("/fr/").await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.lastupdated, Some(300));
    assert_eq!(storage.get_stats("/FR/").await.unwrap().total, 7);
    assert_eq!(storage.list_units("/fr/", UnitFilter::All).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_units_with_filters() {
    let storage = setup().await;

    let all = storage.list_units("/fr/", UnitFilter::All).await.unwrap();
    assert_eq!(all.len(), 1);
    let indexes: Vec<i32> = all[0].units.iter().map(|u| u.index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);

    let suggestions = storage
        .list_units("/fr/", UnitFilter::Suggestions)
        .await
        .unwrap();
    assert_eq!(suggestions[0].units[0].source, "Good bye");

    let critical = storage.list_units("/fr/", UnitFilter::Critical).await.unwrap();
    assert_eq!(critical[0].units[0].source, "Hello");

    let fuzzy = storage.list_units("/fr/", UnitFilter::Fuzzy).await.unwrap();
    assert_eq!(fuzzy[0].units.len(), 1);

    assert!(storage.list_units("/de/", UnitFilter::All).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submission_and_score_log() {
    let storage = setup().await;

    let submission = storage
        .create_submission(NewSubmission {
            translation_project_id: 1,
            submitter_id: Some(BOB_ID),
            store_id: Some(1),
            unit_id: Some(2),
            field: Some(SubmissionField::Target),
            submission_type: Some(SubmissionType::SuggAdd),
            old_value: String::new(),
            new_value: "Au revoir".into(),
            creation_time: i64::MAX / 2,
        })
        .await
        .unwrap();
    assert_eq!(submission.submission_type, Some(SubmissionType::SuggAdd));

    let score = storage
        .create_score_log(NewScoreLog {
            submission_id: submission.id,
            user_id: BOB_ID,
            creation_time: i64::MAX / 2,
            wordcount: 2,
            similarity: 0.0,
            score_delta: 4.0,
            action_code: score_action::SUGG_ADDED,
        })
        .await
        .unwrap();
    assert_eq!(score.wordcount, 2);
    assert_eq!(score.rate, 0.0);

    let latest = storage.get_latest_submission("/fr/").await.unwrap().unwrap();
    assert_eq!(latest.id, submission.id);

    let scorers = storage.get_top_scorers("/fr/", 0, 10).await.unwrap();
    let names: Vec<&str> = scorers.iter().map(|s| s.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "alice"]);

    let limited = storage.get_top_scorers("/fr/", 0, 1).await.unwrap();
    assert_eq!(limited.len(), 1);

    assert!(storage.get_top_scorers("/de/", 0, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_top_scorers_skip_system_users() {
    let storage = setup_with(&[
        "INSERT INTO pootle_statistics_scorelog (creation_time, rate, review_rate, wordcount, similarity, score_delta, action_code, submission_id, user_id) \
         VALUES (4102444800, 0, 0, 1, 0, 99.0, 0, 1, 1)",
        "INSERT INTO pootle_statistics_scorelog (creation_time, rate, review_rate, wordcount, similarity, score_delta, action_code, submission_id, user_id) \
         VALUES (4102444800, 0, 0, 1, 0, 1.5, 0, 1, 4)",
    ])
    .await;

    let scorers = storage.get_top_scorers("/fr/", 0, 1).await.unwrap();
    assert_eq!(scorers.len(), 1);
    assert_eq!(scorers[0].username, "alice");
    assert_eq!(scorers[0].total_score, 4.0);
}
