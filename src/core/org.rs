use crate::context::AppContext;
use crate::db::DeviceStorage;
use crate::errors::AppResult;
use crate::services::OrganizationService;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::{bold, pretty_json};

pub struct OrgLogic;

impl OrgLogic {
    /// Organization-selection flow: persist the tenant base URL, then fetch
    /// its company info from the new backend. A failed fetch keeps the
    /// selection and only warns.
    pub async fn select(ctx: &AppContext, url: &str) -> AppResult<()> {
        ctx.store.select_organization(ctx.storage.as_ref(), url)?;
        ctx.storage
            .log_event("org_select", url, "Organization base URL selected");
        success(format!("Organization selected: {}", url));

        match OrganizationService::new(&ctx.pipeline).company_info().await {
            Ok(company) => {
                let name = company
                    .get("name")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
                ctx.store.update_company_info(ctx.storage.as_ref(), company)?;
                if let Some(n) = name {
                    info(format!("Company: {}", n));
                }
            }
            Err(e) => {
                warning(format!("Could not fetch company info: {}", e.user_message()));
            }
        }

        Ok(())
    }

    pub fn show(ctx: &AppContext) -> AppResult<()> {
        let snapshot = ctx.store.snapshot();
        match &snapshot.base_url {
            Some(url) => println!("{} {}", bold("Base URL:"), url),
            None => println!(
                "{} {} (default, no organization selected)",
                bold("Base URL:"),
                ctx.config.api_base_url
            ),
        }
        println!("{}\n{}", bold("Company:"), pretty_json(&snapshot.company_info));
        Ok(())
    }
}
