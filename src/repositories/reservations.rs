use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::reservation;
use crate::error::AppResult;

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<reservation::Model>> {
    Ok(reservation::Entity::find()
        .order_by_asc(reservation::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<reservation::Model>> {
    Ok(reservation::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_user(db: &DatabaseConnection, user_id: i32) -> AppResult<Vec<reservation::Model>> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::UserId.eq(user_id))
        .order_by_asc(reservation::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_table(db: &DatabaseConnection, table_id: i32) -> AppResult<Vec<reservation::Model>> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::TableId.eq(table_id))
        .order_by_asc(reservation::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_status(db: &DatabaseConnection, status: &str) -> AppResult<Vec<reservation::Model>> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::Status.eq(status))
        .order_by_asc(reservation::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_date(db: &DatabaseConnection, date: NaiveDate) -> AppResult<Vec<reservation::Model>> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::ReservationDate.eq(date))
        .order_by_asc(reservation::Column::ReservationTime)
        .order_by_asc(reservation::Column::Id)
        .all(db)
        .await?)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let count = reservation::Entity::find()
        .filter(reservation::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn exists_by_user(db: &DatabaseConnection, user_id: i32) -> AppResult<bool> {
    let count = reservation::Entity::find()
        .filter(reservation::Column::UserId.eq(user_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn exists_by_table(db: &DatabaseConnection, table_id: i32) -> AppResult<bool> {
    let count = reservation::Entity::find()
        .filter(reservation::Column::TableId.eq(table_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn insert(
    db: &DatabaseConnection,
    model: reservation::ActiveModel,
) -> AppResult<reservation::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    model: reservation::ActiveModel,
) -> AppResult<reservation::Model> {
    Ok(model.update(db).await?)
}

/// Returns the number of deleted rows
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> AppResult<u64> {
    let result = reservation::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
