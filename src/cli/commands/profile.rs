use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::listing::ListingLogic;
use crate::errors::AppResult;
use crate::services::ProfileService;
use crate::utils::table::Column;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Profile { salary } = cmd {
        ctx.require_login()?;
        let service = ProfileService::new(&ctx.pipeline);

        if *salary {
            let body = service.salary_slips().await?;
            ListingLogic::print_rows(
                "Salary slips",
                &body,
                vec![
                    Column::new("Month", "month", 10),
                    Column::new("Gross", "gross", 12),
                    Column::new("Net", "net", 12),
                    Column::new("File", "file_url", 40),
                ],
            );
        } else {
            let body = service.me().await?;
            ListingLogic::print_record("Profile", &body);
        }
    }
    Ok(())
}
