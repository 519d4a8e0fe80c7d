use crate::cli::parser::{Commands, ProjectAction};
use crate::context::AppContext;
use crate::core::listing::ListingLogic;
use crate::errors::AppResult;
use crate::services::ProjectService;
use crate::utils::table::Column;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };
    ctx.require_login()?;
    let service = ProjectService::new(&ctx.pipeline);

    match action {
        ProjectAction::List => {
            let body = service.list().await?;
            ListingLogic::print_rows(
                "Projects",
                &body,
                vec![
                    Column::new("ID", "id", 6),
                    Column::new("Name", "name", 30),
                    Column::new("Status", "status", 12),
                    Column::new("Deadline", "deadline", 12),
                ],
            );
        }
        ProjectAction::Show { id } => {
            let body = service.get(*id).await?;
            ListingLogic::print_record(&format!("Project #{}", id), &body);
        }
    }
    Ok(())
}
