use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A test result. `lab_id` references `lab.id` loosely; nothing enforces it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lab_result")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_id: String,
    pub lab_id: i32,
    pub nif: String,
    pub patient_name: String,
    /// Epoch milliseconds supplied by the caller.
    #[sea_orm(column_name = "result_date")]
    pub date: i64,
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        crate::ulid_time::created_at(&self.external_id)
    }
}
