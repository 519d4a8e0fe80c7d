use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::request::{RawRequest, RequestLogic};
use crate::errors::AppResult;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Request {
        path,
        method,
        secure,
        data,
        files,
        headers,
        exact,
        timeout,
    } = cmd
    {
        let raw = RawRequest {
            path: path.clone(),
            method: method.clone(),
            secure: *secure,
            data: data.clone(),
            files: files.clone(),
            headers: headers.clone(),
            exact: *exact,
            timeout: *timeout,
        };
        let desc = RequestLogic::build(&raw)?;
        let response = RequestLogic::execute(&ctx.pipeline, desc).await?;
        RequestLogic::print(&response);
    }
    Ok(())
}
