pub mod check_duplicate;
pub mod create_report;
pub mod delete_report;
pub mod distribution_types;
pub mod get_report;
pub mod list_reports;
pub mod report_stats;
pub mod send_report_email;
pub mod update_report;
pub mod workflow;

use crate::data::MaraudeReport;
use serde::Deserialize;
use session::AuthorizedApi;

/// REST wrapper over the `/reports` endpoints.
pub struct ReportSubsystem {
    api: AuthorizedApi,
}

impl ReportSubsystem {
    pub fn new(api: AuthorizedApi) -> Self {
        ReportSubsystem { api }
    }

    pub(crate) fn api(&self) -> &AuthorizedApi {
        &self.api
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportEnvelope {
    pub report: MaraudeReport,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}
