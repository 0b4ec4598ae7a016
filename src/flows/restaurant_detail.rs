use std::{cell::RefCell, rc::Rc};

use foodiebaba_boundary::{Restaurant, RestaurantId};

use crate::{
    context::AppContext,
    submission::Submission,
    validate::{PhotoSelection, ReviewForm, Validate},
    Error,
};

use super::{messages, report, submit, Outcome};

/// A single restaurant with its reviews and photos.
#[derive(Clone)]
pub struct RestaurantDetail {
    ctx: AppContext,
    id: RestaurantId,
    restaurant: Rc<RefCell<Option<Restaurant>>>,
    review: Submission,
    upload: Submission,
}

impl RestaurantDetail {
    #[must_use]
    pub fn new(ctx: AppContext, id: RestaurantId) -> Self {
        Self {
            ctx,
            id,
            restaurant: Rc::default(),
            review: Submission::new(),
            upload: Submission::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> RestaurantId {
        self.id
    }

    #[must_use]
    pub fn restaurant(&self) -> Option<Restaurant> {
        self.restaurant.borrow().clone()
    }

    /// Reviews and photos can only be added with an identity.
    #[must_use]
    pub fn can_contribute(&self) -> bool {
        self.ctx.session().is_logged_in()
    }

    #[must_use]
    pub const fn review_submission(&self) -> &Submission {
        &self.review
    }

    #[must_use]
    pub const fn upload_submission(&self) -> &Submission {
        &self.upload
    }

    pub async fn load(&self) -> Result<Restaurant, Error> {
        let result = self.ctx.public_api().restaurant(self.id).await;
        let restaurant = report(&self.ctx, result, messages::LOAD_RESTAURANT_FAILED)?;
        *self.restaurant.borrow_mut() = Some(restaurant.clone());
        Ok(restaurant)
    }

    /// Adds a review and reloads the restaurant.
    pub async fn add_review(&self, form: &ReviewForm) -> Result<(), Error> {
        form.validate()?;
        let review = form.to_new_review(self.id);
        let user_api = self.ctx.user_api();
        let outcome = Outcome {
            success: messages::REVIEW_ADDED,
            failure: messages::ADD_REVIEW_FAILED,
        };
        submit(&self.ctx, &self.review, outcome, || async move {
            user_api?.create_review(&review).await
        })
        .await?;
        self.reload().await;
        Ok(())
    }

    /// Uploads the selected photos and reloads the restaurant.
    pub async fn upload_photos(&self, selection: PhotoSelection) -> Result<(), Error> {
        selection.validate()?;
        let id = self.id;
        let user_api = self.ctx.user_api();
        let outcome = Outcome {
            success: messages::PHOTOS_UPLOADED,
            failure: messages::UPLOAD_PHOTOS_FAILED,
        };
        submit(&self.ctx, &self.upload, outcome, || async move {
            user_api?.upload_photos(id, selection.files).await
        })
        .await?;
        self.reload().await;
        Ok(())
    }

    async fn reload(&self) {
        // Failures have already been reported.
        if let Err(err) = self.load().await {
            log::debug!("Unable to reload restaurant {}: {err}", self.id);
        }
    }
}
