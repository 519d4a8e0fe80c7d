use crate::cli::parser::{Commands, ExpenseAction};
use crate::context::AppContext;
use crate::core::listing::ListingLogic;
use crate::errors::{AppError, AppResult};
use crate::models::expense::{NewExpense, Receipt};
use crate::services::ExpenseService;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::path::read_attachment;
use crate::utils::table::Column;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Expense { action } = cmd else {
        return Ok(());
    };
    ctx.require_login()?;
    let service = ExpenseService::new(&ctx.pipeline);

    match action {
        ExpenseAction::List => {
            let body = service.list().await?;
            ListingLogic::print_rows(
                "Expenses",
                &body,
                vec![
                    Column::new("ID", "id", 6),
                    Column::new("Date", "date", 12),
                    Column::new("Title", "title", 28),
                    Column::new("Amount", "amount", 10),
                    Column::new("Status", "status", 10),
                ],
            );
        }
        ExpenseAction::Submit {
            title,
            amount,
            date: day,
            category,
            description,
            receipt,
        } => {
            if !amount.is_finite() || *amount <= 0.0 {
                return Err(AppError::Other(format!("Invalid amount: {}", amount)));
            }
            let day = match day {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };
            let receipt = match receipt {
                Some(path) => {
                    let (file_name, bytes) = read_attachment(path)?;
                    Some(Receipt { file_name, bytes })
                }
                None => None,
            };

            let body = service
                .submit(NewExpense {
                    title: title.clone(),
                    amount: *amount,
                    date: day,
                    category: category.clone(),
                    description: description.clone(),
                    receipt,
                })
                .await?;
            success("Expense submitted.");
            ListingLogic::print_record("Expense", &body);
        }
    }
    Ok(())
}
