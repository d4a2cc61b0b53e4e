pub mod list_merchants;
pub mod nearby_merchants;

use session::AuthorizedApi;

/// REST wrapper over the `/merchants` endpoints.
pub struct MerchantSubsystem {
    api: AuthorizedApi,
}

impl MerchantSubsystem {
    pub fn new(api: AuthorizedApi) -> Self {
        MerchantSubsystem { api }
    }

    pub(crate) fn api(&self) -> &AuthorizedApi {
        &self.api
    }
}
