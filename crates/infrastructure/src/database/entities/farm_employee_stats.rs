use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// (farm_id, reporting_month, employment_type) carries a unique index,
/// created in the initial migration.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "farm_employee_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farm_id: i32,
    pub reporting_month: Date,
    pub employment_type: String,
    pub citizen_male: i32,
    pub citizen_female: i32,
    pub expatriate_male: i32,
    pub expatriate_female: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub basic_pay_usd: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub basic_pay_zwl: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub employees_contribution_usd: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub employees_contribution_zwl: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub employers_contribution_usd: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub employers_contribution_zwl: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub arrears_usd: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub arrears_zwl: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_contribution_usd: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_contribution_zwl: Decimal,
    pub created_by: Option<i32>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farms::Entity",
        from = "Column::FarmId",
        to = "super::farms::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Farm,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::farms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
