use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use crate::entities::order;
use crate::error::AppResult;
use crate::repositories::{orders, reservations, users};
use crate::utils::order_number::next_order_number;
use crate::utils::status::note_unknown_status;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub reservation_id: i32,
    pub user_id: i32,
    pub table_id: i32,
    pub total_amount: f64,
    pub status: Option<String>,
}

/// Fields an order update may change. Anything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

/// Persist a new order with a generated order number and the current time.
///
/// Referenced ids are not checked here; the store's foreign keys reject
/// dangling references.
pub async fn create_order(db: &DatabaseConnection, input: CreateOrder) -> AppResult<order::Model> {
    let status = input
        .status
        .unwrap_or_else(|| order::DEFAULT_STATUS.to_string());
    note_unknown_status("order", &status, order::KNOWN_STATUSES);

    let new_order = order::ActiveModel {
        reservation_id: Set(input.reservation_id),
        user_id: Set(input.user_id),
        table_id: Set(input.table_id),
        order_number: Set(next_order_number()),
        order_date: Set(Utc::now().into()),
        total_amount: Set(input.total_amount),
        status: Set(status),
        ..Default::default()
    };

    let created = orders::insert(db, new_order).await?;
    tracing::info!(order_id = created.id, order_number = %created.order_number, "Order created");
    Ok(created)
}

pub async fn get_all_orders(db: &DatabaseConnection) -> AppResult<Vec<order::Model>> {
    orders::find_all(db).await
}

pub async fn get_order_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<order::Model>> {
    orders::find_by_id(db, id).await
}

pub async fn get_order_by_order_number(
    db: &DatabaseConnection,
    order_number: &str,
) -> AppResult<Option<order::Model>> {
    orders::find_by_order_number(db, order_number).await
}

/// Orders placed by a user; empty when the user does not exist
pub async fn get_orders_by_user(db: &DatabaseConnection, user_id: i32) -> AppResult<Vec<order::Model>> {
    if !users::exists_by_id(db, user_id).await? {
        return Ok(Vec::new());
    }
    orders::find_by_user(db, user_id).await
}

/// Orders attached to a reservation; empty when the reservation does not exist
pub async fn get_orders_by_reservation(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> AppResult<Vec<order::Model>> {
    if !reservations::exists_by_id(db, reservation_id).await? {
        return Ok(Vec::new());
    }
    orders::find_by_reservation(db, reservation_id).await
}

pub async fn get_orders_by_status(db: &DatabaseConnection, status: &str) -> AppResult<Vec<order::Model>> {
    orders::find_by_status(db, status).await
}

/// Merge `total_amount` and `status` into an existing order.
///
/// Returns `None` when no order has this id.
pub async fn update_order(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateOrder,
) -> AppResult<Option<order::Model>> {
    let Some(existing) = orders::find_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: order::ActiveModel = existing.clone().into();

    if let Some(total_amount) = input.total_amount {
        active.total_amount = Set(total_amount);
    }

    if let Some(status) = input.status {
        note_unknown_status("order", &status, order::KNOWN_STATUSES);
        active.status = Set(status);
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    orders::update(db, active).await.map(Some)
}

/// Overwrite the status, whatever its value. `None` when the order is absent.
pub async fn update_order_status(
    db: &DatabaseConnection,
    id: i32,
    status: &str,
) -> AppResult<Option<order::Model>> {
    update_order(
        db,
        id,
        UpdateOrder {
            status: Some(status.to_string()),
            ..Default::default()
        },
    )
    .await
}

/// Returns whether an order was deleted
pub async fn delete_order(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    if !orders::exists_by_id(db, id).await? {
        return Ok(false);
    }

    let deleted = orders::delete_by_id(db, id).await?;
    tracing::info!(order_id = id, "Order deleted");
    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_order, setup_with_reservation};
    use crate::utils::order_number::is_order_number;

    #[tokio::test]
    async fn test_create_order_assigns_id_number_and_default_status() {
        let (db, user, reservation) = setup_with_reservation().await;

        let order = create_order(
            &db,
            CreateOrder {
                reservation_id: reservation.id,
                user_id: user.id,
                table_id: reservation.table_id,
                total_amount: 45.0,
                status: None,
            },
        )
        .await
        .unwrap();

        assert!(order.id > 0);
        assert!(is_order_number(&order.order_number));
        assert_eq!(order.status, "pending");
        assert_eq!(order.total_amount, 45.0);
    }

    #[tokio::test]
    async fn test_create_order_with_dangling_reservation_fails() {
        let (db, user, reservation) = setup_with_reservation().await;

        let result = create_order(
            &db,
            CreateOrder {
                reservation_id: 9999,
                user_id: user.id,
                table_id: reservation.table_id,
                total_amount: 10.0,
                status: None,
            },
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_order_by_missing_id_is_none() {
        let (db, _, _) = setup_with_reservation().await;
        assert!(get_order_by_id(&db, 4242).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_order_by_order_number_is_stable() {
        let (db, user, reservation) = setup_with_reservation().await;
        let order = create_test_order(&db, &user, &reservation, 20.0).await;

        let first = get_order_by_order_number(&db, &order.order_number).await.unwrap();
        let second = get_order_by_order_number(&db, &order.order_number).await.unwrap();

        assert_eq!(first.as_ref().map(|o| o.id), Some(order.id));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_orders_by_missing_parent_is_empty() {
        let (db, user, reservation) = setup_with_reservation().await;
        create_test_order(&db, &user, &reservation, 20.0).await;

        assert!(get_orders_by_user(&db, 777).await.unwrap().is_empty());
        assert!(get_orders_by_reservation(&db, 777).await.unwrap().is_empty());

        assert_eq!(get_orders_by_user(&db, user.id).await.unwrap().len(), 1);
        assert_eq!(
            get_orders_by_reservation(&db, reservation.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_update_order_only_touches_amount_and_status() {
        let (db, user, reservation) = setup_with_reservation().await;
        let order = create_test_order(&db, &user, &reservation, 45.0).await;

        let updated = update_order(
            &db,
            order.id,
            UpdateOrder {
                status: Some("served".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.status, "served");
        assert_eq!(updated.total_amount, order.total_amount);
        assert_eq!(updated.order_number, order.order_number);
        assert_eq!(updated.reservation_id, order.reservation_id);
        assert_eq!(updated.user_id, order.user_id);
        assert_eq!(updated.table_id, order.table_id);
    }

    #[tokio::test]
    async fn test_update_missing_order_is_none() {
        let (db, _, _) = setup_with_reservation().await;
        let result = update_order(&db, 31337, UpdateOrder::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_order_status_accepts_any_value() {
        let (db, user, reservation) = setup_with_reservation().await;
        let order = create_test_order(&db, &user, &reservation, 45.0).await;

        let updated = update_order_status(&db, order.id, "anything")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, "anything");

        let by_status = get_orders_by_status(&db, "anything").await.unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, order.id);
    }

    #[tokio::test]
    async fn test_delete_order_twice() {
        let (db, user, reservation) = setup_with_reservation().await;
        let order = create_test_order(&db, &user, &reservation, 45.0).await;

        assert!(delete_order(&db, order.id).await.unwrap());
        assert!(get_order_by_id(&db, order.id).await.unwrap().is_none());
        assert!(!delete_order(&db, order.id).await.unwrap());
    }
}
