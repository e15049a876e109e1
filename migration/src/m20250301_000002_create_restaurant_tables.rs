use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table_statement()).await?;

        // Seed the dining room
        let insert = Query::insert()
            .into_table(RestaurantTable::Table)
            .columns([
                RestaurantTable::TableNumber,
                RestaurantTable::Capacity,
                RestaurantTable::TableType,
                RestaurantTable::Status,
                RestaurantTable::LocationDescription,
                RestaurantTable::PricePerHour,
            ])
            .values_panic([
                "T01".into(),
                2.into(),
                "indoor".into(),
                "available".into(),
                "Near the window".into(),
                (10.0).into(),
            ])
            .values_panic([
                "T02".into(),
                4.into(),
                "indoor".into(),
                "available".into(),
                "Main hall".into(),
                (15.0).into(),
            ])
            .values_panic([
                "T03".into(),
                6.into(),
                "outdoor".into(),
                "available".into(),
                "Terrace".into(),
                (20.0).into(),
            ])
            .values_panic([
                "V01".into(),
                8.into(),
                "vip".into(),
                "available".into(),
                "Private room".into(),
                (50.0).into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantTable::Table).to_owned())
            .await
    }
}

fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(RestaurantTable::Table)
        .if_not_exists()
        .col(pk_auto(RestaurantTable::Id))
        .col(string(RestaurantTable::TableNumber).unique_key())
        .col(integer(RestaurantTable::Capacity))
        .col(string_null(RestaurantTable::TableType))
        .col(string(RestaurantTable::Status).default("available"))
        .col(string_null(RestaurantTable::LocationDescription))
        .col(double_null(RestaurantTable::PricePerHour))
        .col(string_len_null(RestaurantTable::ImageUrl, 512))
        .to_owned()
}

#[derive(DeriveIden)]
pub enum RestaurantTable {
    #[sea_orm(iden = "restaurant_tables")]
    Table,
    Id,
    TableNumber,
    Capacity,
    TableType,
    Status,
    LocationDescription,
    PricePerHour,
    ImageUrl,
}
