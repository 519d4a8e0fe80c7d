use crate::cli::parser::{Commands, TaskAction};
use crate::context::AppContext;
use crate::core::listing::ListingLogic;
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskStatus;
use crate::services::TaskService;
use crate::ui::messages::success;
use crate::utils::table::Column;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };
    ctx.require_login()?;
    let service = TaskService::new(&ctx.pipeline);

    match action {
        TaskAction::List { project } => {
            let body = service.list(*project).await?;
            ListingLogic::print_rows(
                "Tasks",
                &body,
                vec![
                    Column::new("ID", "id", 6),
                    Column::new("Title", "title", 32),
                    Column::new("Status", "status", 12),
                    Column::new("Due", "due_date", 12),
                ],
            );
        }
        TaskAction::Status { id, status } => {
            let status = TaskStatus::from_code(status)
                .ok_or_else(|| AppError::Other(format!("Invalid task status '{}'", status)))?;
            service.set_status(*id, status).await?;
            success(format!("Task #{} set to {}", id, status.as_str()));
        }
    }
    Ok(())
}
