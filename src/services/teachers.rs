use crate::{
    db::Db,
    error::{AppError, Result},
    models::teacher::Teacher,
    repositories::teacher as teacher_repo,
};

pub async fn list_teachers(db: &Db) -> Vec<Teacher> {
    teacher_repo::list_teachers(db).await
}

pub async fn get_teacher(db: &Db, id: u64) -> Result<Teacher> {
    teacher_repo::find_teacher(db, id)
        .await
        .ok_or(AppError::NotFound)
}
