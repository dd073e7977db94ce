use crate::config::Config;
use crate::db::{create_db, Db};
use crate::error::Result;
use crate::repositories::{teacher as teacher_repo, user as user_repo};
use crate::services::auth::hash_password;

/// The teachers every fresh backend starts with.
const SEED_TEACHERS: [(&str, &str); 2] = [("Margot", "DELAHAYE"), ("Hélène", "THIERCELIN")];

/// The reference backend's state.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory store.
    pub db: Db,
    /// The application's configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState` with a seeded store.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = create_db();
        tracing::info!("✅ In-memory store initialized");

        for (first_name, last_name) in SEED_TEACHERS {
            teacher_repo::create_teacher(&db, first_name, last_name).await;
        }
        tracing::info!("✅ {} teachers seeded", SEED_TEACHERS.len());

        let admin = user_repo::create_user(
            &db,
            config.seed_admin_email.clone(),
            "Admin".to_string(),
            "Admin".to_string(),
            hash_password(&config.seed_admin_password)?,
            true,
        )
        .await?;
        tracing::info!("✅ Admin account seeded: {} (id {})", admin.email, admin.id);

        Ok(AppState {
            db,
            config: config.clone(),
        })
    }
}
