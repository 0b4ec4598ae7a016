use std::{cell::RefCell, rc::Rc};

use crate::{
    context::AppContext,
    submission::Submission,
    validate::{RestaurantForm, Validate},
    Error,
};

use super::{messages, submit, Outcome};

/// Submits new restaurants for moderation.
#[derive(Clone)]
pub struct AddRestaurant {
    ctx: AppContext,
    form: Rc<RefCell<RestaurantForm>>,
    submission: Submission,
}

impl AddRestaurant {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: Rc::default(),
            submission: Submission::new(),
        }
    }

    #[must_use]
    pub fn form(&self) -> RestaurantForm {
        self.form.borrow().clone()
    }

    pub fn update_form(&self, f: impl FnOnce(&mut RestaurantForm)) {
        f(&mut self.form.borrow_mut());
    }

    #[must_use]
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Submits the form and clears it on success.
    pub async fn submit(&self) -> Result<(), Error> {
        let form = self.form();
        form.validate()?;
        let restaurant = form.to_new_restaurant();
        let user_api = self.ctx.user_api();
        let outcome = Outcome {
            success: messages::RESTAURANT_ADDED,
            failure: messages::ADD_RESTAURANT_FAILED,
        };
        submit(&self.ctx, &self.submission, outcome, || async move {
            user_api?.create_restaurant(&restaurant).await
        })
        .await?;
        *self.form.borrow_mut() = RestaurantForm::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use foodiebaba_boundary::UserRole;

    use super::*;
    use crate::{
        api::{Body, Method},
        flows::testing::logged_in,
        notify::Notice,
        validate::REQUIRED,
    };

    fn fill(flow: &AddRestaurant) {
        flow.update_form(|form| {
            form.name = "Curry House".into();
            form.category = "Indian".into();
            form.address = "Main Street 1".into();
            form.description = "Spicy".into();
        });
    }

    #[tokio::test]
    async fn submit_and_reset_form() {
        let f = logged_in(UserRole::User);
        f.client.respond(201, r#"{"id":12}"#);
        let flow = AddRestaurant::new(f.ctx.clone());
        fill(&flow);
        flow.submit().await.unwrap();

        assert_eq!(flow.form(), RestaurantForm::default());
        assert_eq!(
            f.notifier.last(),
            Some(Notice::success("Restaurant added and pending approval"))
        );
        let request = f.client.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8080/restaurants");
        assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
        let Body::Json(json) = request.body else {
            panic!("expected JSON body");
        };
        let body: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(body["category"], "Indian");
    }

    #[tokio::test]
    async fn keep_form_on_failure() {
        let f = logged_in(UserRole::User);
        f.client.respond(500, "");
        let flow = AddRestaurant::new(f.ctx.clone());
        fill(&flow);
        flow.submit().await.unwrap_err();
        assert_eq!(flow.form().name, "Curry House");
        assert_eq!(
            f.notifier.last(),
            Some(Notice::error("Failed to add restaurant"))
        );
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_locally() {
        let f = logged_in(UserRole::User);
        let flow = AddRestaurant::new(f.ctx.clone());
        fill(&flow);
        flow.update_form(|form| form.address = "   ".into());
        let err = flow.submit().await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get("address")),
            Some(REQUIRED)
        );
        assert_eq!(f.client.request_count(), 0);
    }
}
