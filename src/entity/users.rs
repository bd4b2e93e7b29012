//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::permission_sets::Entity")]
    PermissionSets,
    #[sea_orm(has_many = "super::score_logs::Entity")]
    ScoreLogs,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::permission_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PermissionSets.def()
    }
}

impl Related<super::score_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoreLogs.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::User;

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            is_superuser: self.is_superuser,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
