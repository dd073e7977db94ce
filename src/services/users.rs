use crate::{
    db::Db,
    error::{AppError, Result},
    models::user::User,
    repositories::user as user_repo,
};

pub async fn get_user(db: &Db, id: u64) -> Result<User> {
    user_repo::find_by_id(db, id)
        .await
        .map(|record| User::from(&record))
        .ok_or(AppError::NotFound)
}

/// Deletes account `id` on behalf of `caller_id`.
///
/// # Returns
///
/// `NotFound` for an unknown account, `Unauthorized` when the caller tries
/// to delete somebody else's account.
pub async fn delete_user(db: &Db, caller_id: u64, id: u64) -> Result<()> {
    user_repo::find_by_id(db, id)
        .await
        .ok_or(AppError::NotFound)?;

    if caller_id != id {
        tracing::warn!("❌ User {} tried to delete account {}", caller_id, id);
        return Err(AppError::Unauthorized);
    }

    user_repo::delete_user(db, id).await?;
    tracing::info!("🗑️ Account deleted: {}", id);
    Ok(())
}
