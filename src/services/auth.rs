use crate::crypto::token::{generate_token, token_digest};
use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::models::identity::Identity;
use crate::models::token::AuthToken;
use crate::models::user::UserRecord;
use crate::repositories::{token as token_repo, user as user_repo};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder,
};
use chrono::{TimeDelta, Utc};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 6;

/// The scheme of issued tokens, echoed in the identity's `type`.
pub const TOKEN_TYPE: &str = "Bearer";

/// Hashes a password using Argon2id.
///
/// # Arguments
///
/// * `password` - The password to hash.
///
/// # Returns
///
/// A `Result` containing the hashed password.
pub fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut salt_bytes)
        .map_err(|e| AppError::Internal(format!("Failed to generate salt: {}", e)))?;

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Encryption(format!("Salt encoding error: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Encryption(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Encryption(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    tracing::debug!("Password hashed successfully with Argon2");
    Ok(password_hash)
}

/// Verifies a password against a hash.
///
/// # Returns
///
/// A `Result` containing `true` if the password is valid, `false` otherwise.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Encryption(format!("Hash parse error: {}", e)))?;
    let result = Argon2::default()
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok();

    password_bytes.zeroize();
    tracing::debug!("Password verification completed");
    Ok(result)
}

/// Creates a regular (non-admin) account.
///
/// # Returns
///
/// A `Result` containing the created `UserRecord`; `Conflict` when the email
/// is already registered.
pub async fn register_user(db: &Db, request: &RegisterRequest) -> Result<UserRecord> {
    tracing::debug!("🔐 Creating user: {}", request.email);

    if user_repo::find_by_email(db, &request.email).await.is_some() {
        return Err(AppError::Conflict("Error: Email is already taken!".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user = user_repo::create_user(
        db,
        request.email.clone(),
        request.first_name.clone(),
        request.last_name.clone(),
        password_hash,
        false,
    )
    .await?;

    tracing::info!("✅ User created with ID: {}", user.id);
    Ok(user)
}

/// Checks credentials and issues a bearer token.
///
/// # Arguments
///
/// * `db` - The store.
/// * `request` - The submitted credentials.
/// * `token_ttl_hours` - The lifetime of the issued token.
///
/// # Returns
///
/// A `Result` containing the caller's `Identity`.
pub async fn authenticate_user(
    db: &Db,
    request: &LoginRequest,
    token_ttl_hours: i64,
) -> Result<Identity> {
    tracing::debug!("🔐 Authenticating user: {}", request.email);

    let user = user_repo::find_by_email(db, &request.email)
        .await
        .ok_or_else(|| AppError::Authentication("Bad credentials".to_string()))?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::Authentication("Bad credentials".to_string()));
    }

    let now = Utc::now();
    let expires_at = TimeDelta::try_hours(token_ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::Internal(format!("Token lifetime out of range: {}h", token_ttl_hours))
        })?;

    let token = generate_token();
    token_repo::store_token(
        db,
        token_digest(&token),
        AuthToken {
            user_id: user.id,
            created_at: now,
            expires_at,
        },
    )
    .await;

    tracing::info!("✅ User authenticated: {}", user.id);

    Ok(Identity {
        id: user.id,
        username: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        admin: user.admin,
        token,
        token_type: TOKEN_TYPE.to_string(),
    })
}
