use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATUS_AVAILABLE: &str = "available";

/// Suggested lifecycle values. Not enforced: any string is stored as-is.
pub const KNOWN_STATUSES: &[&str] = &[STATUS_AVAILABLE, "reserved", "occupied"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "restaurant_tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub table_number: String,
    pub capacity: i32,
    /// indoor, outdoor, vip
    pub table_type: Option<String>,
    pub status: String,
    pub location_description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
