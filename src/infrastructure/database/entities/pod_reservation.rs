//! Pod reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pod_reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub pod_code: String,

    pub creation_date: DateTimeUtc,

    /// Unique: a passenger holds at most one pod
    #[sea_orm(unique)]
    pub passenger_id: String,

    /// Unique together with `pod_code`
    pub voyage_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
