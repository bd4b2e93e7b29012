//! 权限集存储

use super::SeaOrmStorage;
use crate::entity::permission_sets::{ActiveModel, Column, Entity as PermissionSets};
use crate::entity::users::Entity as Users;
use crate::errors::{PootleError, Result};
use crate::models::permissions::entities::{Capabilities, PermissionSetEntry};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 用户在给定路径的目录上直接设置的权限
    pub async fn get_permissions_for_paths_impl(
        &self,
        user_id: i64,
        pootle_paths: &[String],
    ) -> Result<Vec<(String, Capabilities)>> {
        let directories = self.directory_ids_by_path(pootle_paths).await?;
        if directories.is_empty() {
            return Ok(Vec::new());
        }

        let sets = PermissionSets::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DirectoryId.is_in(directories.keys().copied()))
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询权限失败: {e}")))?;

        Ok(sets
            .into_iter()
            .filter_map(|set| {
                let set = set.into_permission_set();
                directories
                    .get(&set.directory_id)
                    .map(|path| (path.clone(), set.capabilities))
            })
            .collect())
    }

    /// 列出目录上的权限集
    pub async fn list_permission_sets_impl(
        &self,
        directory_id: i64,
    ) -> Result<Vec<PermissionSetEntry>> {
        let rows = PermissionSets::find()
            .filter(Column::DirectoryId.eq(directory_id))
            .find_also_related(Users)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询权限集失败: {e}")))?;

        let mut entries: Vec<PermissionSetEntry> = rows
            .into_iter()
            .filter_map(|(set, user)| {
                let user = user?;
                let set = set.into_permission_set();
                Some(PermissionSetEntry {
                    id: set.id,
                    user_id: set.user_id,
                    username: user.username,
                    capabilities: set.capabilities,
                })
            })
            .collect();
        entries.sort_by(|a, b| a.username.cmp(&b.username));

        Ok(entries)
    }

    /// 创建或更新权限集
    pub async fn save_permission_set_impl(
        &self,
        user_id: i64,
        directory_id: i64,
        capabilities: Capabilities,
    ) -> Result<()> {
        let existing = PermissionSets::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DirectoryId.eq(directory_id))
            .one(&self.db)
            .await
            .map_err(|e| PootleError::database_operation(format!("查询权限集失败: {e}")))?;

        match existing {
            Some(set) if capabilities.is_empty() => {
                PermissionSets::delete_by_id(set.id)
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        PootleError::database_operation(format!("删除权限集失败: {e}"))
                    })?;
            }
            Some(set) => {
                let model = ActiveModel {
                    id: Set(set.id),
                    capabilities: Set(capabilities.to_db()),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    PootleError::database_operation(format!("更新权限集失败: {e}"))
                })?;
            }
            None if capabilities.is_empty() => {}
            None => {
                let model = ActiveModel {
                    user_id: Set(user_id),
                    directory_id: Set(directory_id),
                    capabilities: Set(capabilities.to_db()),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    PootleError::database_operation(format!("创建权限集失败: {e}"))
                })?;
            }
        }

        Ok(())
    }
}
