use crate::cli::parser::{Commands, OrgAction};
use crate::context::AppContext;
use crate::core::org::OrgLogic;
use crate::errors::AppResult;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Org { action } = cmd {
        match action {
            OrgAction::Select { url } => OrgLogic::select(ctx, url).await?,
            OrgAction::Show => OrgLogic::show(ctx)?,
        }
    }
    Ok(())
}
