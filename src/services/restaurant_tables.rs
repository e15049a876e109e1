use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use crate::entities::restaurant_table;
use crate::error::{AppError, AppResult};
use crate::repositories::{orders, reservations, restaurant_tables};
use crate::services::DEPENDENTS_EXIST;
use crate::utils::status::note_unknown_status;

const TABLE_NUMBER_TAKEN: &str = "Ce numéro de table existe déjà";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTable {
    pub table_number: String,
    pub capacity: i32,
    pub table_type: Option<String>,
    pub status: Option<String>,
    pub location_description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTable {
    pub table_number: Option<String>,
    pub capacity: Option<i32>,
    pub table_type: Option<String>,
    pub status: Option<String>,
    pub location_description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub image_url: Option<String>,
}

pub async fn create_table(
    db: &DatabaseConnection,
    input: CreateTable,
) -> AppResult<restaurant_table::Model> {
    if restaurant_tables::find_by_table_number(db, &input.table_number)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(TABLE_NUMBER_TAKEN.to_string()));
    }

    let status = input
        .status
        .unwrap_or_else(|| restaurant_table::STATUS_AVAILABLE.to_string());
    note_unknown_status("table", &status, restaurant_table::KNOWN_STATUSES);

    let new_table = restaurant_table::ActiveModel {
        table_number: Set(input.table_number),
        capacity: Set(input.capacity),
        table_type: Set(input.table_type),
        status: Set(status),
        location_description: Set(input.location_description),
        price_per_hour: Set(input.price_per_hour),
        image_url: Set(input.image_url),
        ..Default::default()
    };

    let created = restaurant_tables::insert(db, new_table).await?;
    tracing::info!(table_id = created.id, table_number = %created.table_number, "Table created");
    Ok(created)
}

pub async fn get_all_tables(db: &DatabaseConnection) -> AppResult<Vec<restaurant_table::Model>> {
    restaurant_tables::find_all(db).await
}

pub async fn get_table_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<Option<restaurant_table::Model>> {
    restaurant_tables::find_by_id(db, id).await
}

pub async fn get_table_by_number(
    db: &DatabaseConnection,
    table_number: &str,
) -> AppResult<Option<restaurant_table::Model>> {
    restaurant_tables::find_by_table_number(db, table_number).await
}

pub async fn get_tables_by_status(
    db: &DatabaseConnection,
    status: &str,
) -> AppResult<Vec<restaurant_table::Model>> {
    restaurant_tables::find_by_status(db, status).await
}

pub async fn get_available_tables(db: &DatabaseConnection) -> AppResult<Vec<restaurant_table::Model>> {
    restaurant_tables::find_by_status(db, restaurant_table::STATUS_AVAILABLE).await
}

/// Tables seating at least `min_capacity` guests, smallest first
pub async fn get_tables_by_min_capacity(
    db: &DatabaseConnection,
    min_capacity: i32,
) -> AppResult<Vec<restaurant_table::Model>> {
    restaurant_tables::find_by_min_capacity(db, min_capacity).await
}

pub async fn update_table(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateTable,
) -> AppResult<Option<restaurant_table::Model>> {
    let Some(existing) = restaurant_tables::find_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: restaurant_table::ActiveModel = existing.clone().into();

    if let Some(table_number) = input.table_number {
        if table_number != existing.table_number {
            if restaurant_tables::find_by_table_number(db, &table_number)
                .await?
                .is_some()
            {
                return Err(AppError::Conflict(TABLE_NUMBER_TAKEN.to_string()));
            }
            active.table_number = Set(table_number);
        }
    }

    if let Some(capacity) = input.capacity {
        active.capacity = Set(capacity);
    }

    if let Some(table_type) = input.table_type {
        active.table_type = Set(Some(table_type));
    }

    if let Some(status) = input.status {
        note_unknown_status("table", &status, restaurant_table::KNOWN_STATUSES);
        active.status = Set(status);
    }

    if let Some(location_description) = input.location_description {
        active.location_description = Set(Some(location_description));
    }

    if let Some(price_per_hour) = input.price_per_hour {
        active.price_per_hour = Set(Some(price_per_hour));
    }

    if let Some(image_url) = input.image_url {
        active.image_url = Set(Some(image_url));
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    restaurant_tables::update(db, active).await.map(Some)
}

pub async fn update_table_status(
    db: &DatabaseConnection,
    id: i32,
    status: &str,
) -> AppResult<Option<restaurant_table::Model>> {
    update_table(
        db,
        id,
        UpdateTable {
            status: Some(status.to_string()),
            ..Default::default()
        },
    )
    .await
}

/// Returns whether a table was deleted. Tables still referenced are kept.
pub async fn delete_table(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    if !restaurant_tables::exists_by_id(db, id).await? {
        return Ok(false);
    }

    if reservations::exists_by_table(db, id).await? || orders::exists_by_table(db, id).await? {
        return Err(AppError::Conflict(DEPENDENTS_EXIST.to_string()));
    }

    let deleted = restaurant_tables::delete_by_id(db, id).await?;
    tracing::info!(table_id = id, "Table deleted");
    Ok(deleted > 0)
}
