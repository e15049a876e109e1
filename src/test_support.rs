//! Fixtures for service tests.
//!
//! Every test gets its own in-memory SQLite database with the real migrations
//! applied, so the seeded tables (T01, T02, T03, V01) are always present.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::entities::{order, reservation, user};
use crate::services::orders::{self, CreateOrder};
use crate::services::reservations::{self, CreateReservation};
use crate::services::users::{self, CreateUser};

/// Id of the seeded table `T02` (4 seats)
pub const SEEDED_TABLE_ID: i32 = 2;

pub async fn setup_test_db() -> DatabaseConnection {
    // One connection: every new in-memory SQLite connection is a fresh database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Creates a user with password `password123`
pub async fn create_test_user(db: &DatabaseConnection, email: &str) -> user::Model {
    users::create_user(
        db,
        CreateUser {
            email: email.to_string(),
            password: "password123".to_string(),
            full_name: "Test User".to_string(),
            phone_number: None,
        },
    )
    .await
    .expect("Failed to create test user")
}

pub async fn create_test_reservation(
    db: &DatabaseConnection,
    user: &user::Model,
    table_id: i32,
) -> reservation::Model {
    reservations::create_reservation(
        db,
        CreateReservation {
            user_id: user.id,
            table_id,
            reservation_date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
            reservation_time: NaiveTime::from_hms_opt(20, 0, 0).expect("valid time"),
            duration_hours: None,
            number_of_guests: 2,
            special_requests: None,
            status: None,
            total_price: Some(30.0),
        },
    )
    .await
    .expect("Failed to create test reservation")
}

pub async fn create_test_order(
    db: &DatabaseConnection,
    user: &user::Model,
    reservation: &reservation::Model,
    total_amount: f64,
) -> order::Model {
    orders::create_order(
        db,
        CreateOrder {
            reservation_id: reservation.id,
            user_id: user.id,
            table_id: reservation.table_id,
            total_amount,
            status: None,
        },
    )
    .await
    .expect("Failed to create test order")
}

/// Database with one user holding one reservation on the seeded table
pub async fn setup_with_reservation() -> (DatabaseConnection, user::Model, reservation::Model) {
    let db = setup_test_db().await;
    let user = create_test_user(&db, "guest@example.com").await;
    let reservation = create_test_reservation(&db, &user, SEEDED_TABLE_ID).await;
    (db, user, reservation)
}
