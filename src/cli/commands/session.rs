use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};

/// Handle `login` and `logout`.
pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::Login {
            email,
            password,
            token,
        } => {
            if let Some(t) = token {
                return SessionLogic::store_token(ctx, t);
            }
            let email = email
                .as_deref()
                .ok_or_else(|| AppError::Config("--email is required (or pass --token)".into()))?;
            let password = password.as_deref().ok_or_else(|| {
                AppError::Config("--password or RHRMS_PASSWORD is required".into())
            })?;
            SessionLogic::login(ctx, email, password).await
        }
        Commands::Logout => SessionLogic::logout(ctx).await.map(|_| ()),
        _ => Ok(()),
    }
}
