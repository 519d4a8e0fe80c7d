use crate::context::AppContext;
use crate::db::DeviceStorage;
use crate::errors::AppResult;
use crate::location::{Coordinates, LocationResult};
use crate::models::attendance::{PunchKind, PunchRequest};
use crate::services::AttendanceService;
use crate::ui::messages::{info, success};
use chrono::Local;

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Locate the device, stamp the punch with coordinates and address, send it.
    pub async fn punch(
        ctx: &AppContext,
        kind: PunchKind,
        coords: Option<Coordinates>,
        note: Option<String>,
    ) -> AppResult<LocationResult> {
        ctx.require_login()?;

        let resolver = ctx.location_resolver(coords);
        let location = resolver.get_location_with_address().await?;

        info(format!(
            "📍 {:.6}, {:.6} | {}",
            location.latitude,
            location.longitude,
            location.address.as_deref().unwrap_or("--")
        ));

        let request = PunchRequest::new(location.clone(), note, Local::now());
        AttendanceService::new(&ctx.pipeline)
            .punch(kind, &request)
            .await?;

        ctx.storage.log_event(
            kind.label(),
            &format!("{:.6},{:.6}", location.latitude, location.longitude),
            location.address.as_deref().unwrap_or(""),
        );
        success(format!("{} recorded at {}", capitalize(kind.label()), request.timestamp));
        Ok(location)
    }

    pub async fn locate(ctx: &AppContext, coords: Coordinates) -> AppResult<String> {
        let resolver = ctx.location_resolver(Some(coords));
        Ok(resolver
            .get_address_from_coordinates(coords.latitude, coords.longitude)
            .await)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
