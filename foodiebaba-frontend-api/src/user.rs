use foodiebaba_boundary::{NewRestaurant, NewReview, RestaurantId};

use crate::{Api, ApiRequest, FileUpload, FormPart, Result};

const PHOTOS_FIELD: &str = "photos";

/// Authorized FoodieBaba API
#[derive(Clone)]
pub struct UserApi {
    api: Api,
    token: String,
}

impl UserApi {
    #[must_use]
    pub const fn new(api: Api, token: String) -> Self {
        Self { api, token }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    async fn send_empty(&self, request: ApiRequest) -> Result<()> {
        self.api
            .send_empty(request.authorized(), Some(&self.token))
            .await
    }

    /// Submits a restaurant for moderation.
    pub async fn create_restaurant(&self, restaurant: &NewRestaurant) -> Result<()> {
        let request = ApiRequest::post("/restaurants").json(restaurant)?;
        self.send_empty(request).await
    }

    pub async fn upload_photos(&self, id: RestaurantId, files: Vec<FileUpload>) -> Result<()> {
        let parts = files
            .into_iter()
            .map(|file| FormPart {
                name: PHOTOS_FIELD.to_string(),
                file,
            })
            .collect();
        let request = ApiRequest::post(format!("/restaurants/{id}/photos")).multipart(parts);
        self.send_empty(request).await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<()> {
        let request = ApiRequest::post("/reviews").json(review)?;
        self.send_empty(request).await
    }
}
