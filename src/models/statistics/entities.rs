use serde::Serialize;

/// 提交类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    Normal,
    Revert,
    SuggAccept,
    Upload,
    SuggAdd,
    SuggReject,
    MuteCheck,
    UnmuteCheck,
}

impl SubmissionType {
    pub fn from_db(value: i32) -> Option<Self> {
        Some(match value {
            1 => SubmissionType::Normal,
            2 => SubmissionType::Revert,
            3 => SubmissionType::SuggAccept,
            4 => SubmissionType::Upload,
            6 => SubmissionType::SuggAdd,
            7 => SubmissionType::SuggReject,
            8 => SubmissionType::MuteCheck,
            9 => SubmissionType::UnmuteCheck,
            _ => return None,
        })
    }

    pub fn to_db(self) -> i32 {
        match self {
            SubmissionType::Normal => 1,
            SubmissionType::Revert => 2,
            SubmissionType::SuggAccept => 3,
            SubmissionType::Upload => 4,
            SubmissionType::SuggAdd => 6,
            SubmissionType::SuggReject => 7,
            SubmissionType::MuteCheck => 8,
            SubmissionType::UnmuteCheck => 9,
        }
    }
}

/// 被修改的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionField {
    Source,
    Target,
    State,
    Comment,
}

impl SubmissionField {
    pub fn from_db(value: i32) -> Option<Self> {
        Some(match value {
            1 => SubmissionField::Source,
            2 => SubmissionField::Target,
            3 => SubmissionField::State,
            4 => SubmissionField::Comment,
            _ => return None,
        })
    }

    pub fn to_db(self) -> i32 {
        match self {
            SubmissionField::Source => 1,
            SubmissionField::Target => 2,
            SubmissionField::State => 3,
            SubmissionField::Comment => 4,
        }
    }
}

/// 记分动作
pub mod score_action {
    pub const NEW: i32 = 0;
    pub const EDITED: i32 = 1;
    pub const EDITED_OWN: i32 = 2;
    pub const DELETED: i32 = 3;
    pub const MARKED_FUZZY: i32 = 4;
    pub const UNMARKED_FUZZY: i32 = 5;
    pub const SUGG_ADDED: i32 = 6;
    pub const SUGG_ACCEPTED: i32 = 7;
    pub const SUGG_REJECTED: i32 = 8;
    pub const REVIEWED: i32 = 9;
}

#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: i64,
    pub creation_time: i64,
    pub field: Option<SubmissionField>,
    pub submission_type: Option<SubmissionType>,
    pub old_value: String,
    pub new_value: String,
    pub similarity: Option<f64>,
    pub mt_similarity: Option<f64>,
    pub quality_check_id: Option<i64>,
    pub store_id: Option<i64>,
    pub submitter_id: Option<i64>,
    pub suggestion_id: Option<i64>,
    pub translation_project_id: i64,
    pub unit_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLog {
    pub id: i64,
    pub creation_time: i64,
    pub rate: f64,
    pub review_rate: f64,
    pub wordcount: u32,
    pub similarity: f64,
    pub score_delta: f64,
    pub action_code: i32,
    pub submission_id: i64,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        assert_eq!(SubmissionType::from_db(3), Some(SubmissionType::SuggAccept));
        assert_eq!(SubmissionType::from_db(5), None);
        assert_eq!(SubmissionType::UnmuteCheck.to_db(), 9);
        assert_eq!(SubmissionField::from_db(2), Some(SubmissionField::Target));
    }
}
