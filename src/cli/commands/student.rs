use crate::cli::parser::{Commands, StudentAction};
use crate::context::AppContext;
use crate::core::listing::ListingLogic;
use crate::errors::AppResult;
use crate::services::StudentService;
use crate::utils::table::Column;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Student { action } = cmd else {
        return Ok(());
    };
    ctx.require_login()?;
    let service = StudentService::new(&ctx.pipeline);

    match action {
        StudentAction::List => {
            let body = service.list().await?;
            ListingLogic::print_rows(
                "Students",
                &body,
                vec![
                    Column::new("ID", "id", 6),
                    Column::new("Name", "name", 28),
                    Column::new("Grade", "grade", 8),
                    Column::new("Phone", "phone", 14),
                ],
            );
        }
        StudentAction::Sessions { id } => {
            let body = service.sessions(*id).await?;
            ListingLogic::print_rows(
                &format!("Sessions of student #{}", id),
                &body,
                vec![
                    Column::new("Date", "date", 12),
                    Column::new("Start", "start_time", 8),
                    Column::new("End", "end_time", 8),
                    Column::new("Subject", "subject", 20),
                    Column::new("Status", "status", 10),
                ],
            );
        }
    }
    Ok(())
}
