//! 语言与翻译项目查询

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::directories::{Column as DirectoryColumn, Entity as Directories};
use crate::entity::languages::{Column, Entity as Languages};
use crate::entity::projects::{Column as ProjectColumn, Entity as Projects};
use crate::entity::translation_projects::{
    Column as TranslationProjectColumn, Entity as TranslationProjects,
};
use crate::errors::{PootleError, Result};
use crate::models::languages::entities::{Language, TranslationProject};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过代码获取语言
    pub async fn get_language_by_code_impl(&self, code: &str) -> Result<Option<Language>> {
        let result = Languages::find()
            .filter(Column::Code.eq(code))
            .find_also_related(Directories)
            .one(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询语言失败: {e}")))?;

        match result {
            Some((language, Some(directory))) => Ok(Some(language.into_language(directory))),
            Some((language, None)) => Err(PootleError::database_operation(format!(
                "语言 {} 缺少目录 {}",
                language.code, language.directory_id
            ))),
            None => Ok(None),
        }
    }

    /// 列出所有语言
    pub async fn list_languages_impl(&self) -> Result<Vec<Language>> {
        let rows = Languages::find()
            .find_also_related(Directories)
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询语言列表失败: {e}")))?;

        // 没有目录的语言无法参与权限判断，直接跳过
        Ok(rows
            .into_iter()
            .filter_map(|(language, directory)| directory.map(|d| language.into_language(d)))
            .collect())
    }

    /// 列出语言下的翻译项目，按项目全名排序
    pub async fn list_translation_projects_impl(
        &self,
        language_id: i64,
    ) -> Result<Vec<TranslationProject>> {
        let rows = TranslationProjects::find()
            .filter(TranslationProjectColumn::LanguageId.eq(language_id))
            .find_also_related(Projects)
            .order_by_asc(ProjectColumn::Fullname)
            .order_by_asc(TranslationProjectColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询翻译项目失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(tp, project)| project.map(|p| tp.into_translation_project(p)))
            .collect())
    }

    /// 按 pootle_path 批量查询目录 ID
    pub(crate) async fn directory_ids_by_path(
        &self,
        pootle_paths: &[String],
    ) -> Result<HashMap<i64, String>> {
        if pootle_paths.is_empty() {
            return Ok(HashMap::new());
        }

        let directories = Directories::find()
            .filter(DirectoryColumn::PootlePath.is_in(pootle_paths.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询目录失败: {e}")))?;

        Ok(directories
            .into_iter()
            .map(|d| (d.id, d.pootle_path))
            .collect())
    }
}
