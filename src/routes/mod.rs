use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{orders, reservations, tables, users};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/login", post(users::login))
        .route("/email/{email}", get(users::get_user_by_email))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    let table_routes = Router::new()
        .route("/", get(tables::list_tables).post(tables::create_table))
        .route("/available", get(tables::available_tables))
        .route("/number/{table_number}", get(tables::get_table_by_number))
        .route("/status/{status}", get(tables::tables_by_status))
        .route("/capacity/{min_capacity}", get(tables::tables_by_capacity))
        .route(
            "/{id}",
            get(tables::get_table)
                .put(tables::update_table)
                .delete(tables::delete_table),
        )
        .route("/{id}/status/{status}", put(tables::update_table_status));

    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/user/{user_id}", get(reservations::reservations_by_user))
        .route("/table/{table_id}", get(reservations::reservations_by_table))
        .route("/status/{status}", get(reservations::reservations_by_status))
        .route("/date/{date}", get(reservations::reservations_by_date))
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
        .route(
            "/{id}/status/{status}",
            put(reservations::update_reservation_status),
        );

    let order_routes = Router::new()
        .route("/", get(orders::list_orders).post(orders::create_order))
        .route("/number/{order_number}", get(orders::get_order_by_number))
        .route("/user/{user_id}", get(orders::orders_by_user))
        .route("/reservation/{reservation_id}", get(orders::orders_by_reservation))
        .route("/status/{status}", get(orders::orders_by_status))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route("/{id}/status/{status}", put(orders::update_order_status));

    Router::new()
        .nest("/api/users", user_routes)
        .nest("/api/tables", table_routes)
        .nest("/api/reservations", reservation_routes)
        .nest("/api/orders", order_routes)
        .with_state(state)
}
