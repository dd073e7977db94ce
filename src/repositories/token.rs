use chrono::Utc;

use crate::{db::Db, models::token::AuthToken};

/// Stores an issued token under its digest.
pub async fn store_token(db: &Db, digest: String, token: AuthToken) {
    db.write().await.tokens.insert(digest, token);
}

/// Resolves a token digest, evicting it if it has expired.
pub async fn find_valid_token(db: &Db, digest: &str) -> Option<AuthToken> {
    let now = Utc::now();
    {
        let tables = db.read().await;
        match tables.tokens.get(digest) {
            None => return None,
            Some(token) if !token.is_expired(now) => return Some(token.clone()),
            Some(_) => {}
        }
    }

    tracing::warn!("❌ Expired token presented, evicting");
    db.write().await.tokens.remove(digest);
    None
}
