use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users::User;
use super::m20250301_000002_create_restaurant_tables::RestaurantTable;
use super::m20250301_000003_create_reservations::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table_statement()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_status")
                    .table(Order::Table)
                    .col(Order::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Order::Table)
        .if_not_exists()
        .col(pk_auto(Order::Id))
        .col(integer(Order::ReservationId))
        .col(integer(Order::UserId))
        .col(integer(Order::TableId))
        .col(string_len(Order::OrderNumber, 32).unique_key())
        .col(timestamp_with_time_zone(Order::OrderDate))
        .col(double(Order::TotalAmount))
        .col(string(Order::Status).default("pending"))
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_reservation")
                .from(Order::Table, Order::ReservationId)
                .to(Reservation::Table, Reservation::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_user")
                .from(Order::Table, Order::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_table")
                .from(Order::Table, Order::TableId)
                .to(RestaurantTable::Table, RestaurantTable::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    ReservationId,
    UserId,
    TableId,
    OrderNumber,
    OrderDate,
    TotalAmount,
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_column_is_not_narrowed() {
        let sql = create_table_statement().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#""status" varchar"#), "{}", sql);
        assert!(!sql.contains("varchar(20)"), "{}", sql);
    }
}
