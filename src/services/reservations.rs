use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use crate::entities::reservation;
use crate::error::{AppError, AppResult};
use crate::repositories::{orders, reservations, restaurant_tables, users};
use crate::services::DEPENDENTS_EXIST;
use crate::utils::status::note_unknown_status;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    pub user_id: i32,
    pub table_id: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub duration_hours: Option<i32>,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    pub status: Option<String>,
    pub total_price: Option<f64>,
}

/// Fields a reservation update may change. Owner and table stay fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservation {
    pub reservation_date: Option<NaiveDate>,
    pub reservation_time: Option<NaiveTime>,
    pub duration_hours: Option<i32>,
    pub number_of_guests: Option<i32>,
    pub special_requests: Option<String>,
    pub status: Option<String>,
    pub total_price: Option<f64>,
}

/// Persist a new reservation. User and table ids are left to the store's
/// foreign keys.
pub async fn create_reservation(
    db: &DatabaseConnection,
    input: CreateReservation,
) -> AppResult<reservation::Model> {
    let status = input
        .status
        .unwrap_or_else(|| reservation::DEFAULT_STATUS.to_string());
    note_unknown_status("reservation", &status, reservation::KNOWN_STATUSES);

    let new_reservation = reservation::ActiveModel {
        user_id: Set(input.user_id),
        table_id: Set(input.table_id),
        reservation_date: Set(input.reservation_date),
        reservation_time: Set(input.reservation_time),
        duration_hours: Set(input
            .duration_hours
            .unwrap_or(reservation::DEFAULT_DURATION_HOURS)),
        number_of_guests: Set(input.number_of_guests),
        special_requests: Set(input.special_requests),
        status: Set(status),
        total_price: Set(input.total_price),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let created = reservations::insert(db, new_reservation).await?;
    tracing::info!(
        reservation_id = created.id,
        table_id = created.table_id,
        date = %created.reservation_date,
        "Reservation created"
    );
    Ok(created)
}

pub async fn get_all_reservations(db: &DatabaseConnection) -> AppResult<Vec<reservation::Model>> {
    reservations::find_all(db).await
}

pub async fn get_reservation_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<Option<reservation::Model>> {
    reservations::find_by_id(db, id).await
}

/// Reservations of a user; empty when the user does not exist
pub async fn get_reservations_by_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> AppResult<Vec<reservation::Model>> {
    if !users::exists_by_id(db, user_id).await? {
        return Ok(Vec::new());
    }
    reservations::find_by_user(db, user_id).await
}

/// Reservations of a table; empty when the table does not exist
pub async fn get_reservations_by_table(
    db: &DatabaseConnection,
    table_id: i32,
) -> AppResult<Vec<reservation::Model>> {
    if !restaurant_tables::exists_by_id(db, table_id).await? {
        return Ok(Vec::new());
    }
    reservations::find_by_table(db, table_id).await
}

pub async fn get_reservations_by_status(
    db: &DatabaseConnection,
    status: &str,
) -> AppResult<Vec<reservation::Model>> {
    reservations::find_by_status(db, status).await
}

pub async fn get_reservations_by_date(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> AppResult<Vec<reservation::Model>> {
    reservations::find_by_date(db, date).await
}

pub async fn update_reservation(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateReservation,
) -> AppResult<Option<reservation::Model>> {
    let Some(existing) = reservations::find_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: reservation::ActiveModel = existing.clone().into();

    if let Some(date) = input.reservation_date {
        active.reservation_date = Set(date);
    }

    if let Some(time) = input.reservation_time {
        active.reservation_time = Set(time);
    }

    if let Some(duration_hours) = input.duration_hours {
        active.duration_hours = Set(duration_hours);
    }

    if let Some(guests) = input.number_of_guests {
        active.number_of_guests = Set(guests);
    }

    if let Some(special_requests) = input.special_requests {
        active.special_requests = Set(Some(special_requests));
    }

    if let Some(status) = input.status {
        note_unknown_status("reservation", &status, reservation::KNOWN_STATUSES);
        active.status = Set(status);
    }

    if let Some(total_price) = input.total_price {
        active.total_price = Set(Some(total_price));
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    reservations::update(db, active).await.map(Some)
}

pub async fn update_reservation_status(
    db: &DatabaseConnection,
    id: i32,
    status: &str,
) -> AppResult<Option<reservation::Model>> {
    update_reservation(
        db,
        id,
        UpdateReservation {
            status: Some(status.to_string()),
            ..Default::default()
        },
    )
    .await
}

/// Returns whether a reservation was deleted. Reservations with orders are kept.
pub async fn delete_reservation(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    if !reservations::exists_by_id(db, id).await? {
        return Ok(false);
    }

    if orders::exists_by_reservation(db, id).await? {
        return Err(AppError::Conflict(DEPENDENTS_EXIST.to_string()));
    }

    let deleted = reservations::delete_by_id(db, id).await?;
    tracing::info!(reservation_id = id, "Reservation deleted");
    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        create_test_order, create_test_user, setup_test_db, setup_with_reservation,
    };

    #[tokio::test]
    async fn test_create_reservation_defaults() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "gina@example.com").await;

        let reservation = create_reservation(
            &db,
            CreateReservation {
                user_id: user.id,
                table_id: 2,
                reservation_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
                reservation_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
                duration_hours: None,
                number_of_guests: 4,
                special_requests: Some("Birthday cake".to_string()),
                status: None,
                total_price: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(reservation.duration_hours, 2);
        assert_eq!(reservation.status, "confirmed");
        assert_eq!(reservation.special_requests.as_deref(), Some("Birthday cake"));
    }

    #[tokio::test]
    async fn test_create_reservation_for_unknown_table_fails() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "hank@example.com").await;

        let result = create_reservation(
            &db,
            CreateReservation {
                user_id: user.id,
                table_id: 9999,
                reservation_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
                reservation_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                duration_hours: Some(1),
                number_of_guests: 2,
                special_requests: None,
                status: None,
                total_price: None,
            },
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookups_by_parent_and_date() {
        let (db, user, reservation) = setup_with_reservation().await;

        assert_eq!(get_reservations_by_user(&db, user.id).await.unwrap().len(), 1);
        assert!(get_reservations_by_user(&db, 999).await.unwrap().is_empty());
        assert_eq!(
            get_reservations_by_table(&db, reservation.table_id).await.unwrap().len(),
            1
        );
        assert!(get_reservations_by_table(&db, 999).await.unwrap().is_empty());

        let same_day = get_reservations_by_date(&db, reservation.reservation_date)
            .await
            .unwrap();
        assert_eq!(same_day.len(), 1);

        let other_day = reservation.reservation_date.succ_opt().unwrap();
        assert!(get_reservations_by_date(&db, other_day).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_reservation_partial() {
        let (db, _, reservation) = setup_with_reservation().await;

        let updated = update_reservation(
            &db,
            reservation.id,
            UpdateReservation {
                number_of_guests: Some(6),
                total_price: Some(60.0),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.number_of_guests, 6);
        assert_eq!(updated.total_price, Some(60.0));
        assert_eq!(updated.reservation_date, reservation.reservation_date);
        assert_eq!(updated.status, reservation.status);
        assert_eq!(updated.created_at, reservation.created_at);
    }

    #[tokio::test]
    async fn test_update_reservation_status() {
        let (db, _, reservation) = setup_with_reservation().await;

        let updated = update_reservation_status(&db, reservation.id, "cancelled")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, "cancelled");
        assert_eq!(
            get_reservations_by_status(&db, "cancelled").await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_reservation_with_orders_is_refused() {
        let (db, user, reservation) = setup_with_reservation().await;
        create_test_order(&db, &user, &reservation, 30.0).await;

        let result = delete_reservation(&db, reservation.id).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_reservation() {
        let (db, _, reservation) = setup_with_reservation().await;

        assert!(delete_reservation(&db, reservation.id).await.unwrap());
        assert!(!delete_reservation(&db, reservation.id).await.unwrap());
    }
}
