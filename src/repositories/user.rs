use chrono::Utc;

use crate::{
    db::Db,
    error::{AppError, Result},
    models::user::UserRecord,
};

/// Finds a user by email.
pub async fn find_by_email(db: &Db, email: &str) -> Option<UserRecord> {
    let tables = db.read().await;
    tables.users.values().find(|u| u.email == email).cloned()
}

/// Finds a user by id.
pub async fn find_by_id(db: &Db, id: u64) -> Option<UserRecord> {
    db.read().await.users.get(&id).cloned()
}

/// Creates a new user.
///
/// # Arguments
///
/// * `db` - The store.
/// * `email` - The user's email, unique across users.
/// * `first_name` - The user's first name.
/// * `last_name` - The user's last name.
/// * `password_hash` - The user's Argon2id password hash.
/// * `admin` - Whether the user is an administrator.
///
/// # Returns
///
/// A `Result` containing the created `UserRecord`.
pub async fn create_user(
    db: &Db,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    admin: bool,
) -> Result<UserRecord> {
    let mut tables = db.write().await;

    if tables.users.values().any(|u| u.email == email) {
        return Err(AppError::Conflict("Error: Email is already taken!".to_string()));
    }

    let now = Utc::now();
    let user = UserRecord {
        id: tables.next_user_id(),
        email,
        first_name,
        last_name,
        password_hash,
        admin,
        created_at: now,
        updated_at: now,
    };
    tables.users.insert(user.id, user.clone());

    Ok(user)
}

/// Deletes a user together with their tokens and participations.
///
/// # Returns
///
/// `AppError::NotFound` when no user has this id.
pub async fn delete_user(db: &Db, id: u64) -> Result<()> {
    let mut tables = db.write().await;

    tables.users.remove(&id).ok_or(AppError::NotFound)?;
    tables.tokens.retain(|_, token| token.user_id != id);
    for session in tables.sessions.values_mut() {
        session.users.retain(|user_id| *user_id != id);
    }

    Ok(())
}
