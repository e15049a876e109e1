use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use crate::entities::user;
use crate::error::{AppError, AppResult};
use crate::repositories::{orders, reservations, users};
use crate::services::DEPENDENTS_EXIST;
use crate::utils::password::{hash_password, verify_password};

const EMAIL_TAKEN: &str = "Cet email est déjà utilisé";
const BAD_CREDENTIALS: &str = "Email ou mot de passe incorrect";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub async fn create_user(db: &DatabaseConnection, input: CreateUser) -> AppResult<user::Model> {
    if users::find_by_email(db, &input.email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let new_user = user::ActiveModel {
        email: Set(input.email),
        password: Set(hash_password(&input.password)?),
        full_name: Set(input.full_name),
        phone_number: Set(input.phone_number),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let created = users::insert(db, new_user).await?;
    tracing::info!(user_id = created.id, email = %created.email, "User created");
    Ok(created)
}

pub async fn get_all_users(db: &DatabaseConnection) -> AppResult<Vec<user::Model>> {
    users::find_all(db).await
}

pub async fn get_user_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<user::Model>> {
    users::find_by_id(db, id).await
}

pub async fn get_user_by_email(db: &DatabaseConnection, email: &str) -> AppResult<Option<user::Model>> {
    users::find_by_email(db, email).await
}

/// Check an email/password pair against the stored hash
pub async fn authenticate(db: &DatabaseConnection, credentials: Credentials) -> AppResult<user::Model> {
    let user = users::find_by_email(db, &credentials.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

    if !verify_password(&credentials.password, &user.password)? {
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }

    Ok(user)
}

/// Merge the supplied fields into an existing user. `created_at` never changes.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateUser,
) -> AppResult<Option<user::Model>> {
    let Some(existing) = users::find_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: user::ActiveModel = existing.clone().into();

    if let Some(email) = input.email {
        if email != existing.email {
            if users::find_by_email(db, &email).await?.is_some() {
                return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
            }
            active.email = Set(email);
        }
    }

    if let Some(password) = input.password {
        active.password = Set(hash_password(&password)?);
    }

    if let Some(full_name) = input.full_name {
        active.full_name = Set(full_name);
    }

    if let Some(phone_number) = input.phone_number {
        active.phone_number = Set(Some(phone_number));
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    users::update(db, active).await.map(Some)
}

/// Returns whether a user was deleted.
///
/// Users with reservations or orders are kept and a conflict is reported.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    if !users::exists_by_id(db, id).await? {
        return Ok(false);
    }

    if reservations::exists_by_user(db, id).await? || orders::exists_by_user(db, id).await? {
        return Err(AppError::Conflict(DEPENDENTS_EXIST.to_string()));
    }

    let deleted = users::delete_by_id(db, id).await?;
    tracing::info!(user_id = id, "User deleted");
    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_user, setup_test_db, setup_with_reservation};

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "alice@example.com").await;

        assert!(user.id > 0);
        assert_ne!(user.password, "password123");
        assert!(user.password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let db = setup_test_db().await;
        create_test_user(&db, "alice@example.com").await;

        let result = create_user(
            &db,
            CreateUser {
                email: "alice@example.com".to_string(),
                password: "other".to_string(),
                full_name: "Alice Again".to_string(),
                phone_number: None,
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "bob@example.com").await;

        let ok = authenticate(
            &db,
            Credentials {
                email: "bob@example.com".to_string(),
                password: "password123".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(ok.id, user.id);

        let wrong_password = authenticate(
            &db,
            Credentials {
                email: "bob@example.com".to_string(),
                password: "nope".to_string(),
            },
        )
        .await;
        assert!(matches!(wrong_password, Err(AppError::Unauthorized(_))));

        let unknown = authenticate(
            &db,
            Credentials {
                email: "nobody@example.com".to_string(),
                password: "password123".to_string(),
            },
        )
        .await;
        assert!(matches!(unknown, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_update_user_keeps_created_at() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "carol@example.com").await;

        let updated = update_user(
            &db,
            user.id,
            UpdateUser {
                full_name: Some("Carol Updated".to_string()),
                phone_number: Some("+33 6 00 00 00 00".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.full_name, "Carol Updated");
        assert_eq!(updated.phone_number.as_deref(), Some("+33 6 00 00 00 00"));
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.created_at, user.created_at);
    }

    #[tokio::test]
    async fn test_update_user_email_conflict() {
        let db = setup_test_db().await;
        create_test_user(&db, "dave@example.com").await;
        let erin = create_test_user(&db, "erin@example.com").await;

        let result = update_user(
            &db,
            erin.id,
            UpdateUser {
                email: Some("dave@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let db = setup_test_db().await;

        let result = update_user(
            &db,
            9999,
            UpdateUser {
                full_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_user_with_reservation_is_refused() {
        let (db, user, _) = setup_with_reservation().await;

        let result = delete_user(&db, user.id).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(get_user_by_id(&db, user.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "frank@example.com").await;

        assert!(delete_user(&db, user.id).await.unwrap());
        assert!(!delete_user(&db, user.id).await.unwrap());
    }
}
