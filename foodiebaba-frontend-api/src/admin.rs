use foodiebaba_boundary::{Restaurant, RestaurantId};

use crate::{Api, ApiRequest, Result};

/// FoodieBaba moderation API
#[derive(Clone)]
pub struct AdminApi {
    api: Api,
    token: String,
}

impl AdminApi {
    #[must_use]
    pub const fn new(api: Api, token: String) -> Self {
        Self { api, token }
    }
    /// An empty result may come back as `null`.
    pub async fn pending_restaurants(&self) -> Result<Vec<Restaurant>> {
        let request = ApiRequest::get("/admin/restaurants/pending").authorized();
        self.api
            .send::<Option<Vec<Restaurant>>>(request, Some(&self.token))
            .await
            .map(Option::unwrap_or_default)
    }
    pub async fn approve_restaurant(&self, id: RestaurantId) -> Result<()> {
        let request = ApiRequest::put(format!("/admin/restaurants/{id}/approve")).authorized();
        self.api.send_empty(request, Some(&self.token)).await
    }
    pub async fn reject_restaurant(&self, id: RestaurantId) -> Result<()> {
        let request = ApiRequest::put(format!("/admin/restaurants/{id}/reject")).authorized();
        self.api.send_empty(request, Some(&self.token)).await
    }
}
