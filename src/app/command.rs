use crate::config::Command;
use crate::core::api::ApiClient;
use crate::core::request::{callback, Callback};
use crate::domain::model::ApiResponse;
use crate::utils::error::{ApiError, Result};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_HTTP_STATUS: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// What a command observed: the `(err, res)` pair handed to its callback.
#[derive(Debug)]
pub struct CommandOutcome {
    pub error: Option<ApiError>,
    pub response: Option<ApiResponse>,
}

impl CommandOutcome {
    pub fn exit_code(&self) -> i32 {
        exit_code(&self.error, &self.response)
    }

    /// Status line followed by the body, if the server answered.
    pub fn render(&self) -> Option<String> {
        self.response.as_ref().map(render_response)
    }
}

/// 0 when no error was reported, 1 when the server answered with an error
/// status, 2 when no response was received.
pub fn exit_code(error: &Option<ApiError>, response: &Option<ApiResponse>) -> i32 {
    match (error, response) {
        (None, _) => EXIT_SUCCESS,
        (Some(_), Some(_)) => EXIT_HTTP_STATUS,
        (Some(_), None) => EXIT_FAILURE,
    }
}

pub fn render_response(response: &ApiResponse) -> String {
    let body = response.text();
    if body.is_empty() {
        response.status().to_string()
    } else {
        format!("{}\n{}", response.status(), body)
    }
}

/// Issues the operation named by `command` and waits for its callback.
pub async fn run_command(api: &ApiClient, command: &Command) -> Result<CommandOutcome> {
    match command {
        Command::Resources => complete(|cb| api.resources().end(Some(cb))).await,
        Command::Reset => complete(|cb| api.reset(Some(cb))).await,
        Command::MigrateTenant { tenant_id } => {
            complete(|cb| api.migrate_tenant(tenant_id, Some(cb))).await
        }
        Command::EvacuateHost { host_name } => {
            complete(|cb| api.evacuate_host(host_name, Some(cb))).await
        }
    }
}

async fn complete<F>(start: F) -> Result<CommandOutcome>
where
    F: FnOnce(Callback) -> JoinHandle<()>,
{
    let (tx, rx) = oneshot::channel();
    let handle = start(callback(move |error, response| {
        let _ = tx.send(CommandOutcome { error, response });
    }));
    handle.await?;
    rx.await.map_err(|_| ApiError::Incomplete)
}
