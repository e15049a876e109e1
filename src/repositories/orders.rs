use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::order;
use crate::error::AppResult;

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<order::Model>> {
    Ok(order::Entity::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<order::Model>> {
    Ok(order::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_order_number(
    db: &DatabaseConnection,
    order_number: &str,
) -> AppResult<Option<order::Model>> {
    Ok(order::Entity::find()
        .filter(order::Column::OrderNumber.eq(order_number))
        .one(db)
        .await?)
}

pub async fn find_by_user(db: &DatabaseConnection, user_id: i32) -> AppResult<Vec<order::Model>> {
    Ok(order::Entity::find()
        .filter(order::Column::UserId.eq(user_id))
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_reservation(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> AppResult<Vec<order::Model>> {
    Ok(order::Entity::find()
        .filter(order::Column::ReservationId.eq(reservation_id))
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_status(db: &DatabaseConnection, status: &str) -> AppResult<Vec<order::Model>> {
    Ok(order::Entity::find()
        .filter(order::Column::Status.eq(status))
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let count = order::Entity::find()
        .filter(order::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn exists_by_user(db: &DatabaseConnection, user_id: i32) -> AppResult<bool> {
    let count = order::Entity::find()
        .filter(order::Column::UserId.eq(user_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn exists_by_table(db: &DatabaseConnection, table_id: i32) -> AppResult<bool> {
    let count = order::Entity::find()
        .filter(order::Column::TableId.eq(table_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn exists_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> AppResult<bool> {
    let count = order::Entity::find()
        .filter(order::Column::ReservationId.eq(reservation_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn insert(db: &DatabaseConnection, model: order::ActiveModel) -> AppResult<order::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, model: order::ActiveModel) -> AppResult<order::Model> {
    Ok(model.update(db).await?)
}

/// Returns the number of deleted rows
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> AppResult<u64> {
    let result = order::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
