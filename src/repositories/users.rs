use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::user;
use crate::error::AppResult;

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<user::Model>> {
    Ok(user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<user::Model>> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> AppResult<Option<user::Model>> {
    Ok(user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let count = user::Entity::find()
        .filter(user::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn insert(db: &DatabaseConnection, model: user::ActiveModel) -> AppResult<user::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, model: user::ActiveModel) -> AppResult<user::Model> {
    Ok(model.update(db).await?)
}

/// Returns the number of deleted rows
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> AppResult<u64> {
    let result = user::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
