use super::entities::{SubmissionField, SubmissionType};

// 新建提交记录（存储层使用）
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub translation_project_id: i64,
    pub submitter_id: Option<i64>,
    pub store_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub field: Option<SubmissionField>,
    pub submission_type: Option<SubmissionType>,
    pub old_value: String,
    pub new_value: String,
    pub creation_time: i64,
}

// 新建记分记录
#[derive(Debug, Clone)]
pub struct NewScoreLog {
    pub submission_id: i64,
    pub user_id: i64,
    pub creation_time: i64,
    pub wordcount: u32,
    pub similarity: f64,
    pub score_delta: f64,
    pub action_code: i32,
}
