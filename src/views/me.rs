use std::sync::Arc;

use crate::api::UserApi;
use crate::error::ClientResult;
use crate::models::user::User;
use crate::session_state::SessionState;

use super::{require_identity, Navigator, Notifier, Route, NOTICE_ACTION, NOTICE_DURATION};

/// The account page.
pub struct MeView<U, N, M> {
    users_api: U,
    state: Arc<SessionState>,
    navigator: N,
    notifier: M,
    pub user: Option<User>,
}

impl<U, N, M> MeView<U, N, M>
where
    U: UserApi,
    N: Navigator,
    M: Notifier,
{
    pub fn new(users_api: U, state: Arc<SessionState>, navigator: N, notifier: M) -> Self {
        Self {
            users_api,
            state,
            navigator,
            notifier,
            user: None,
        }
    }

    /// Fetches the profile of the logged-in user.
    pub async fn load(&mut self) -> ClientResult<&User> {
        let identity = require_identity(&self.state, &self.navigator)?;
        let user = self.users_api.get_by_id(identity.id).await?;
        let user = self.user.insert(user);
        Ok(&*user)
    }

    /// Deletes the logged-in account, logs out and goes home.
    pub async fn delete(&mut self) -> ClientResult<()> {
        let identity = require_identity(&self.state, &self.navigator)?;
        self.users_api.delete(identity.id).await?;

        self.notifier.open(
            "Your account has been deleted !",
            NOTICE_ACTION,
            NOTICE_DURATION,
        );
        self.user = None;
        self.state.log_out();
        self.navigator.navigate(Route::Root);
        Ok(())
    }

    pub fn back(&self) {
        self.navigator.back();
    }
}
