use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::attendance::AttendanceLogic;
use crate::core::listing::ListingLogic;
use crate::errors::{AppError, AppResult};
use crate::location::Coordinates;
use crate::models::attendance::PunchKind;
use crate::services::AttendanceService;
use crate::utils::date::{self, display_date};
use crate::utils::table::Column;

/// Handle `checkin`, `checkout`, `locate` and `attendance`.
pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::Checkin { lat, lon, note } => {
            AttendanceLogic::punch(ctx, PunchKind::CheckIn, coordinates(*lat, *lon)?, note.clone())
                .await?;
        }
        Commands::Checkout { lat, lon, note } => {
            AttendanceLogic::punch(ctx, PunchKind::CheckOut, coordinates(*lat, *lon)?, note.clone())
                .await?;
        }
        Commands::Locate { lat, lon } => {
            let coords = coordinates(Some(*lat), Some(*lon))?
                .ok_or_else(|| AppError::InvalidCoordinates("missing".into()))?;
            let address = AttendanceLogic::locate(ctx, coords).await?;
            println!("{}", address);
        }
        Commands::Attendance { from, to } => {
            ctx.require_login()?;
            let (month_start, month_end) = date::month_bounds(&date::today());
            let from = parse_or(from, month_start)?;
            let to = parse_or(to, month_end)?;

            let body = AttendanceService::new(&ctx.pipeline)
                .history(from, to)
                .await?;
            ListingLogic::print_rows(
                &format!("Attendance {} → {}", display_date(&from), display_date(&to)),
                &body,
                vec![
                    Column::new("Date", "date", 12),
                    Column::new("In", "check_in", 8),
                    Column::new("Out", "check_out", 8),
                    Column::new("Hours", "hours", 6),
                    Column::new("Address", "address", 40),
                ],
            );
        }
        _ => {}
    }
    Ok(())
}

/// Both or neither: a lone latitude or longitude is a usage error.
fn coordinates(lat: Option<f64>, lon: Option<f64>) -> AppResult<Option<Coordinates>> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let c = Coordinates::new(lat, lon);
            if c.is_valid() {
                Ok(Some(c))
            } else {
                Err(AppError::InvalidCoordinates(format!("{}, {}", lat, lon)))
            }
        }
        (None, None) => Ok(None),
        _ => Err(AppError::InvalidCoordinates(
            "both --lat and --lon are required".into(),
        )),
    }
}

fn parse_or(input: &Option<String>, fallback: chrono::NaiveDate) -> AppResult<chrono::NaiveDate> {
    match input {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(fallback),
    }
}
