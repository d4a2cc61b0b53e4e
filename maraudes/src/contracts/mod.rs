pub mod create_action;
pub mod delete_action;
pub mod get_action;
pub mod list_actions;
pub mod today_active;
pub mod update_action;
pub mod weekly_schedule;

use crate::data::OutreachAction;
use serde::Deserialize;
use session::AuthorizedApi;

/// REST wrapper over the `/maraudes` endpoints. One method per operation,
/// each defined next to its request/response contracts.
pub struct MaraudeSubsystem {
    api: AuthorizedApi,
}

impl MaraudeSubsystem {
    pub fn new(api: AuthorizedApi) -> Self {
        MaraudeSubsystem { api }
    }

    pub(crate) fn api(&self) -> &AuthorizedApi {
        &self.api
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionEnvelope {
    pub action: OutreachAction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[allow(dead_code)]
    pub message: String,
}
