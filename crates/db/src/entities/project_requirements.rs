//! `SeaORM` Entity for project_requirements table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_requirements")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub project_title: String,
    pub requestor_name: String,
    pub requestor_phone: String,
    pub requestor_email: String,
    pub department: String,
    pub sponsor_name: String,
    pub sponsor_phone: String,
    pub sponsor_email: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub dependencies: String,
    pub requested_end_date: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub estimated_budget: Decimal,
    pub status: String,
    pub priority: String,
    pub project_type: String,
    #[sea_orm(column_type = "Text")]
    pub technical_requirements: String,
    #[sea_orm(column_type = "Text")]
    pub business_justification: String,
    #[sea_orm(column_type = "Text")]
    pub risk_assessment: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
