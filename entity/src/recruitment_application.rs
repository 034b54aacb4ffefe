use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "recruitment_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recruitment_id: i32,
    pub user_id: i32,
    /// One of `pending`, `accepted` or `rejected`.
    pub status: String,
    pub is_open: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recruitment::Entity",
        from = "Column::RecruitmentId",
        to = "super::recruitment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recruitment,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::recruitment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recruitment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
