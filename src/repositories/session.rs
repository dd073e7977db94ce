use std::collections::HashSet;

use chrono::Utc;

use crate::{
    db::Db,
    error::{AppError, Result},
    models::session::Session,
};

/// Lists every session, ordered by id.
pub async fn list_sessions(db: &Db) -> Vec<Session> {
    db.read().await.sessions.values().cloned().collect()
}

pub async fn find_session(db: &Db, id: u64) -> Option<Session> {
    db.read().await.sessions.get(&id).cloned()
}

/// Inserts a new session, assigning its id and timestamps.
pub async fn create_session(db: &Db, mut session: Session) -> Result<Session> {
    let mut tables = db.write().await;

    if !tables.teachers.contains_key(&session.teacher_id) {
        return Err(AppError::BadRequest(format!(
            "Unknown teacher: {}",
            session.teacher_id
        )));
    }

    let id = tables.next_session_id();
    let now = Utc::now();
    let mut seen = HashSet::new();
    session.users.retain(|user_id| seen.insert(*user_id));
    session.id = Some(id);
    session.created_at = Some(now);
    session.updated_at = Some(now);

    tables.sessions.insert(id, session.clone());
    Ok(session)
}

/// Replaces the editable fields of session `id`.
///
/// The participant list and creation time are kept from the stored row.
pub async fn update_session(db: &Db, id: u64, session: Session) -> Result<Session> {
    let mut tables = db.write().await;

    if !tables.teachers.contains_key(&session.teacher_id) {
        return Err(AppError::BadRequest(format!(
            "Unknown teacher: {}",
            session.teacher_id
        )));
    }

    let stored = tables.sessions.get_mut(&id).ok_or(AppError::NotFound)?;
    stored.name = session.name;
    stored.date = session.date;
    stored.teacher_id = session.teacher_id;
    stored.description = session.description;
    stored.updated_at = Some(Utc::now());

    Ok(stored.clone())
}

pub async fn delete_session(db: &Db, id: u64) -> Result<()> {
    db.write()
        .await
        .sessions
        .remove(&id)
        .map(|_| ())
        .ok_or(AppError::NotFound)
}

/// Adds `user_id` to the participants of session `id`.
///
/// # Returns
///
/// `NotFound` for an unknown session or user, `BadRequest` when the user
/// already participates.
pub async fn add_participant(db: &Db, id: u64, user_id: u64) -> Result<()> {
    let mut tables = db.write().await;

    if !tables.users.contains_key(&user_id) {
        return Err(AppError::NotFound);
    }
    let session = tables.sessions.get_mut(&id).ok_or(AppError::NotFound)?;

    if session.has_participant(user_id) {
        return Err(AppError::BadRequest(format!(
            "User {} already participates in session {}",
            user_id, id
        )));
    }

    session.users.push(user_id);
    session.updated_at = Some(Utc::now());
    Ok(())
}

/// Removes `user_id` from the participants of session `id`.
///
/// # Returns
///
/// `NotFound` for an unknown session, `BadRequest` when the user does not
/// participate.
pub async fn remove_participant(db: &Db, id: u64, user_id: u64) -> Result<()> {
    let mut tables = db.write().await;
    let session = tables.sessions.get_mut(&id).ok_or(AppError::NotFound)?;

    if !session.has_participant(user_id) {
        return Err(AppError::BadRequest(format!(
            "User {} does not participate in session {}",
            user_id, id
        )));
    }

    session.users.retain(|participant| *participant != user_id);
    session.updated_at = Some(Utc::now());
    Ok(())
}
