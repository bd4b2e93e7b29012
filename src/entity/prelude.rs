//! 预导入模块，方便使用

pub use super::directories::{
    ActiveModel as DirectoryActiveModel, Entity as Directories, Model as DirectoryModel,
};
pub use super::languages::{
    ActiveModel as LanguageActiveModel, Entity as Languages, Model as LanguageModel,
};
pub use super::permission_sets::{
    ActiveModel as PermissionSetActiveModel, Entity as PermissionSets,
    Model as PermissionSetModel,
};
pub use super::projects::{
    ActiveModel as ProjectActiveModel, Entity as Projects, Model as ProjectModel,
};
pub use super::quality_checks::{
    ActiveModel as QualityCheckActiveModel, Entity as QualityChecks, Model as QualityCheckModel,
};
pub use super::score_logs::{
    ActiveModel as ScoreLogActiveModel, Entity as ScoreLogs, Model as ScoreLogModel,
};
pub use super::stores::{ActiveModel as StoreActiveModel, Entity as Stores, Model as StoreModel};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::suggestions::{
    ActiveModel as SuggestionActiveModel, Entity as Suggestions, Model as SuggestionModel,
};
pub use super::translation_projects::{
    ActiveModel as TranslationProjectActiveModel, Entity as TranslationProjects,
    Model as TranslationProjectModel,
};
pub use super::units::{ActiveModel as UnitActiveModel, Entity as Units, Model as UnitModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
