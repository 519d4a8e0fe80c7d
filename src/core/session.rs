use crate::context::AppContext;
use crate::db::{DeviceStorage, keys};
use crate::errors::{AppError, AppResult};
use crate::services::SessionService;
use crate::services::session::extract_token;
use crate::ui::messages::{info, success, warning};

pub struct SessionLogic;

impl SessionLogic {
    /// Store a token obtained elsewhere.
    pub fn store_token(ctx: &AppContext, token: &str) -> AppResult<()> {
        if token.trim().is_empty() {
            return Err(AppError::MissingToken);
        }
        ctx.storage.set_item(keys::ACCESS_TOKEN, token.trim())?;
        ctx.auth.login();
        ctx.storage
            .log_event("login", "token", "Access token stored from command line");
        success("Access token stored.");
        Ok(())
    }

    pub async fn login(ctx: &AppContext, email: &str, password: &str) -> AppResult<()> {
        let body = SessionService::new(&ctx.pipeline)
            .login(email, password)
            .await?;
        let token = extract_token(&body).ok_or(AppError::MissingToken)?;

        ctx.storage.set_item(keys::ACCESS_TOKEN, &token)?;
        ctx.auth.login();
        ctx.storage.log_event("login", email, "Logged in");
        success(format!("Logged in as {}", email));
        Ok(())
    }

    /// Tell the backend (best effort), then wipe local state.
    /// Returns whether a session was active when the command started.
    pub async fn logout(ctx: &AppContext) -> AppResult<bool> {
        // the backend call may force a logout itself (401 invalid token)
        let was_logged_in = ctx.auth.is_logged_in();
        if was_logged_in
            && let Err(e) = SessionService::new(&ctx.pipeline).logout().await
        {
            warning(format!("Backend logout failed: {}", e.user_message()));
        }

        ctx.auth.logout();
        ctx.storage.clear()?;
        ctx.store.clear();
        ctx.storage
            .log_event("logout", "user", "Device storage cleared");

        if was_logged_in {
            success("Logged out.");
        } else {
            info("No active session; device storage cleared.");
        }
        Ok(was_logged_in)
    }
}
