use crate::{
    db::Db,
    error::{AppError, Result},
    models::session::Session,
    repositories::session as session_repo,
    validation::auth::validate_payload,
};

pub async fn list_sessions(db: &Db) -> Vec<Session> {
    session_repo::list_sessions(db).await
}

pub async fn get_session(db: &Db, id: u64) -> Result<Session> {
    session_repo::find_session(db, id)
        .await
        .ok_or(AppError::NotFound)
}

/// Creates a session after validating its fields.
///
/// Any `id` or timestamps in the body are ignored.
pub async fn create_session(db: &Db, session: Session) -> Result<Session> {
    validate_payload(&session)?;
    let created = session_repo::create_session(db, session).await?;
    tracing::info!("✅ Session created: {:?}", created.id);
    Ok(created)
}

pub async fn update_session(db: &Db, id: u64, session: Session) -> Result<Session> {
    validate_payload(&session)?;
    let updated = session_repo::update_session(db, id, session).await?;
    tracing::info!("✅ Session updated: {}", id);
    Ok(updated)
}

pub async fn delete_session(db: &Db, id: u64) -> Result<()> {
    session_repo::delete_session(db, id).await?;
    tracing::info!("🗑️ Session deleted: {}", id);
    Ok(())
}

pub async fn participate(db: &Db, id: u64, user_id: u64) -> Result<()> {
    session_repo::add_participant(db, id, user_id).await?;
    tracing::info!("✅ User {} joined session {}", user_id, id);
    Ok(())
}

pub async fn no_longer_participate(db: &Db, id: u64, user_id: u64) -> Result<()> {
    session_repo::remove_participant(db, id, user_id).await?;
    tracing::info!("✅ User {} left session {}", user_id, id);
    Ok(())
}
