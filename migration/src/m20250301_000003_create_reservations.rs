use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users::User;
use super::m20250301_000002_create_restaurant_tables::RestaurantTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId).not_null())
                    .col(integer(Reservation::TableId).not_null())
                    .col(date(Reservation::ReservationDate).not_null())
                    .col(time(Reservation::ReservationTime).not_null())
                    .col(integer(Reservation::DurationHours).not_null().default(2))
                    .col(integer(Reservation::NumberOfGuests).not_null())
                    .col(text_null(Reservation::SpecialRequests))
                    .col(string(Reservation::Status).default("confirmed"))
                    .col(double_null(Reservation::TotalPrice))
                    .col(timestamp_with_time_zone(Reservation::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_table")
                            .from(Reservation::Table, Reservation::TableId)
                            .to(RestaurantTable::Table, RestaurantTable::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    Id,
    UserId,
    TableId,
    ReservationDate,
    ReservationTime,
    DurationHours,
    NumberOfGuests,
    SpecialRequests,
    Status,
    TotalPrice,
    CreatedAt,
}
