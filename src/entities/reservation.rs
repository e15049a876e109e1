use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_HOURS: i32 = 2;
pub const DEFAULT_STATUS: &str = "confirmed";

/// Suggested lifecycle values. Not enforced: any string is stored as-is.
pub const KNOWN_STATUSES: &[&str] = &["pending", "confirmed", "cancelled", "completed"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub table_id: i32,
    pub reservation_date: Date,
    pub reservation_time: Time,
    pub duration_hours: i32,
    pub number_of_guests: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_requests: Option<String>,
    pub status: String,
    pub total_price: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::restaurant_table::Entity",
        from = "Column::TableId",
        to = "super::restaurant_table::Column::Id"
    )]
    Table,
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::restaurant_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Table.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
