use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment result row
/// - one row per giver, all rows of a draw share `draw_id`
/// - `result_id` is unique and is the only key handed to participants
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub draw_id: String,
    pub draw_name: String,
    pub giver: String,
    pub receiver: String,
    #[sea_orm(unique)]
    pub result_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
