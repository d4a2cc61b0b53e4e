use crate::contracts::AssociationSubsystem;
use crate::data::AssociationDetail;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::entity_ids::AssociationId;

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    association: AssociationDetail,
}

impl AssociationSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn get_association(
        &self,
        id: &AssociationId,
    ) -> Result<AssociationDetail, ApiError> {
        let url = self.api().endpoint(&format!("associations/{id}"))?;
        let envelope: DetailEnvelope = self.api().get_json(url).await?;
        Ok(envelope.association)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::testing::subsystem_against;
    use httpmock::prelude::*;
    use serde_json::json;
    use session::data::UserRole;

    #[tokio::test]
    async fn decodes_the_detail_with_embedded_rows() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/associations/assoc-1");
            then.status(200).json_body(json!({
                "association": {
                    "id": "assoc-1",
                    "name": "Entraide Bordeaux",
                    "email": "contact@entraide-bordeaux.fr",
                    "isActive": true,
                    "createdAt": "2023-05-02T09:30:00Z",
                    "updatedAt": "2023-11-18T16:05:00Z",
                    "users": [
                        {"id": "user-1", "firstName": "Claire", "lastName": "Moreau", "role": "coordinator", "isActive": true}
                    ],
                    "maraudeActions": [
                        {"id": "action-1", "title": "Maraude Saint-Michel", "scheduledDate": null, "status": "planned"}
                    ]
                }
            }));
        });

        let subsystem = subsystem_against(&server);
        let detail = subsystem.get_association(&"assoc-1".into()).await.unwrap();

        mock.assert();
        assert_eq!(detail.association.id, *"assoc-1");
        let users = detail.users.unwrap();
        assert_eq!(users[0].role, UserRole::Coordinator);
        let actions = detail.maraude_actions.unwrap();
        assert_eq!(actions[0].status, "planned");
    }
}
