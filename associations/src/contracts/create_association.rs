use crate::contracts::{AssociationEnvelope, AssociationSubsystem};
use crate::data::{Association, AssociationInput};
use session::ApiError;

impl AssociationSubsystem {
    #[tracing::instrument(err, skip(self, input), level = "info")]
    pub async fn create_association(
        &self,
        input: AssociationInput,
    ) -> Result<Association, ApiError> {
        input.validate().map_err(ApiError::Validation)?;
        let url = self.api().endpoint("associations")?;
        let envelope: AssociationEnvelope = self.api().post_json(url, &input).await?;
        Ok(envelope.association)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::testing::{sample_association_json, subsystem_against};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn posts_a_valid_association() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/associations")
                .header("authorization", "Bearer admin-token")
                .json_body_partial(
                    json!({"name": "Entraide Bordeaux", "email": "contact@entraide-bordeaux.fr"})
                        .to_string(),
                );
            then.status(201).json_body(json!({
                "message": "Association créée",
                "association": sample_association_json("assoc-2")
            }));
        });

        let subsystem = subsystem_against(&server);
        let association = subsystem
            .create_association(AssociationInput {
                name: "Entraide Bordeaux".into(),
                email: "contact@entraide-bordeaux.fr".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        mock.assert();
        assert_eq!(association.id, *"assoc-2");
    }

    #[tokio::test]
    async fn invalid_email_blocks_the_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/associations");
            then.status(201).json_body(json!({
                "association": sample_association_json("assoc-2")
            }));
        });

        let subsystem = subsystem_against(&server);
        let result = subsystem
            .create_association(AssociationInput {
                name: "Entraide Bordeaux".into(),
                email: "pas-un-email".into(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        mock.assert_hits(0);
    }
}
