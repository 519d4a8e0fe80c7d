use crate::cli::parser::{Commands, LeaveAction};
use crate::context::AppContext;
use crate::core::listing::ListingLogic;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveApplication;
use crate::services::LeaveService;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::Column;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Leave { action } = cmd else {
        return Ok(());
    };
    ctx.require_login()?;
    let service = LeaveService::new(&ctx.pipeline);

    match action {
        LeaveAction::List => {
            let body = service.list().await?;
            ListingLogic::print_rows(
                "Leave requests",
                &body,
                vec![
                    Column::new("ID", "id", 6),
                    Column::new("Type", "leave_type", 14),
                    Column::new("From", "from_date", 12),
                    Column::new("To", "to_date", 12),
                    Column::new("Status", "status", 10),
                ],
            );
        }
        LeaveAction::Apply {
            leave_type,
            from,
            to,
            reason,
            half_day,
        } => {
            let from_date =
                date::parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
            let to_date = date::parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;
            if to_date < from_date {
                return Err(AppError::InvalidDate(format!(
                    "{} is before {}",
                    to, from
                )));
            }

            let application = LeaveApplication {
                leave_type: leave_type.clone(),
                from_date,
                to_date,
                reason: reason.clone(),
                half_day: *half_day,
            };
            let body = service.apply(&application).await?;
            success(format!(
                "Leave requested: {} day(s) from {}",
                application.days(),
                date::display_date(&from_date)
            ));
            ListingLogic::print_record("Leave", &body);
        }
    }
    Ok(())
}
