use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_member::Entity")]
    TeamMember,
    #[sea_orm(has_many = "super::recruitment::Entity")]
    Recruitment,
    #[sea_orm(has_many = "super::competition_registration::Entity")]
    CompetitionRegistration,
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl Related<super::recruitment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recruitment.def()
    }
}

impl Related<super::competition_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetitionRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
