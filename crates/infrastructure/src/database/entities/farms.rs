use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "farms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub address: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub size_in_hectares: Option<Decimal>,
    pub telephone: String,
    pub account_number: String,
    pub email: String,
    pub sector: String,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::site_visits::Entity")]
    SiteVisits,
    #[sea_orm(has_many = "super::statements::Entity")]
    Statements,
    #[sea_orm(has_many = "super::farm_employee_stats::Entity")]
    EmployeeStats,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::site_visits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiteVisits.def()
    }
}

impl Related<super::statements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Statements.def()
    }
}

impl Related<super::farm_employee_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
