use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::restaurant_table;
use crate::error::AppResult;

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<restaurant_table::Model>> {
    Ok(restaurant_table::Entity::find()
        .order_by_asc(restaurant_table::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<Option<restaurant_table::Model>> {
    Ok(restaurant_table::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_table_number(
    db: &DatabaseConnection,
    table_number: &str,
) -> AppResult<Option<restaurant_table::Model>> {
    Ok(restaurant_table::Entity::find()
        .filter(restaurant_table::Column::TableNumber.eq(table_number))
        .one(db)
        .await?)
}

pub async fn find_by_status(
    db: &DatabaseConnection,
    status: &str,
) -> AppResult<Vec<restaurant_table::Model>> {
    Ok(restaurant_table::Entity::find()
        .filter(restaurant_table::Column::Status.eq(status))
        .order_by_asc(restaurant_table::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_min_capacity(
    db: &DatabaseConnection,
    min_capacity: i32,
) -> AppResult<Vec<restaurant_table::Model>> {
    Ok(restaurant_table::Entity::find()
        .filter(restaurant_table::Column::Capacity.gte(min_capacity))
        .order_by_asc(restaurant_table::Column::Capacity)
        .order_by_asc(restaurant_table::Column::Id)
        .all(db)
        .await?)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let count = restaurant_table::Entity::find()
        .filter(restaurant_table::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn insert(
    db: &DatabaseConnection,
    model: restaurant_table::ActiveModel,
) -> AppResult<restaurant_table::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    model: restaurant_table::ActiveModel,
) -> AppResult<restaurant_table::Model> {
    Ok(model.update(db).await?)
}

/// Returns the number of deleted rows
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> AppResult<u64> {
    let result = restaurant_table::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
