pub mod association_stats;
pub mod create_association;
pub mod delete_association;
pub mod get_association;
pub mod list_associations;
pub mod update_association;

use crate::data::Association;
use serde::Deserialize;
use session::AuthorizedApi;

/// REST wrapper over the `/associations` endpoints (admin surface).
pub struct AssociationSubsystem {
    api: AuthorizedApi,
}

impl AssociationSubsystem {
    pub fn new(api: AuthorizedApi) -> Self {
        AssociationSubsystem { api }
    }

    pub(crate) fn api(&self) -> &AuthorizedApi {
        &self.api
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssociationEnvelope {
    pub association: Association,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[allow(dead_code)]
    pub message: String,
}
