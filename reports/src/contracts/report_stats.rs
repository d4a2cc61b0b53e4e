use crate::contracts::ReportSubsystem;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::entity_ids::AssociationId;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct StatsQuery {
    pub association_id: Option<AssociationId>,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

impl StatsQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(association_id) = &self.association_id {
            params.push(("associationId", association_id.inner()));
        }
        if let Some(from) = self.from {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.to_string()));
        }
        params
    }
}

/// Period aggregates for the reports screen.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsSummary {
    #[serde(default)]
    pub total_reports: u64,
    #[serde(default)]
    pub total_beneficiaries: u64,
    #[serde(default)]
    pub total_volunteers: u64,
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: ReportStatsSummary,
}

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn report_stats(&self, query: &StatsQuery) -> Result<ReportStatsSummary, ApiError> {
        let url = self
            .api()
            .endpoint_with("reports/stats/summary", &query.to_params())?;
        let envelope: StatsEnvelope = self.api().get_json(url).await?;
        Ok(envelope.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::testing::subsystem_against;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn decodes_the_summary() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/reports/stats/summary")
                .query_param("associationId", "assoc-1");
            then.status(200).json_body(json!({
                "stats": {
                    "totalReports": 12,
                    "totalBeneficiaries": 230,
                    "totalVolunteers": 48,
                    "byStatus": {"draft": 2, "submitted": 4, "validated": 6}
                }
            }));
        });

        let subsystem = subsystem_against(&server);
        let stats = subsystem
            .report_stats(&StatsQuery {
                association_id: Some("assoc-1".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        mock.assert();
        assert_eq!(stats.total_reports, 12);
        assert_eq!(stats.by_status["validated"], 6);
    }
}
