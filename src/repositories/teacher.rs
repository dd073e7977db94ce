use chrono::Utc;

use crate::{db::Db, models::teacher::Teacher};

pub async fn list_teachers(db: &Db) -> Vec<Teacher> {
    db.read().await.teachers.values().cloned().collect()
}

pub async fn find_teacher(db: &Db, id: u64) -> Option<Teacher> {
    db.read().await.teachers.get(&id).cloned()
}

/// Inserts a teacher; teachers are only created when seeding.
pub async fn create_teacher(db: &Db, first_name: &str, last_name: &str) -> Teacher {
    let mut tables = db.write().await;
    let now = Utc::now();
    let teacher = Teacher {
        id: tables.next_teacher_id(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        created_at: Some(now),
        updated_at: Some(now),
    };
    tables.teachers.insert(teacher.id, teacher.clone());
    teacher
}
