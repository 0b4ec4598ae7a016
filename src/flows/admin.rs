use std::{cell::RefCell, rc::Rc};

use foodiebaba_boundary::{Restaurant, RestaurantId};

use crate::{context::AppContext, submission::Submission, Error};

use super::{messages, report, submit, Outcome};

/// Moderation of submitted restaurants.
#[derive(Clone)]
pub struct AdminPanel {
    ctx: AppContext,
    pending: Rc<RefCell<Vec<Restaurant>>>,
    submission: Submission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moderation {
    Approve,
    Reject,
}

impl AdminPanel {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            pending: Rc::default(),
            submission: Submission::new(),
        }
    }

    #[must_use]
    pub fn pending(&self) -> Vec<Restaurant> {
        self.pending.borrow().clone()
    }

    #[must_use]
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }

    pub async fn load(&self) -> Result<(), Error> {
        let result = match self.ctx.admin_api() {
            Ok(admin_api) => admin_api.pending_restaurants().await,
            Err(err) => Err(err),
        };
        let restaurants = report(&self.ctx, result, messages::FETCH_PENDING_FAILED)?;
        *self.pending.borrow_mut() = restaurants;
        Ok(())
    }

    pub async fn approve(&self, id: RestaurantId) -> Result<(), Error> {
        self.moderate(id, Moderation::Approve).await
    }

    pub async fn reject(&self, id: RestaurantId) -> Result<(), Error> {
        self.moderate(id, Moderation::Reject).await
    }

    /// On success the restaurant is removed from the local list.
    pub async fn moderate(&self, id: RestaurantId, action: Moderation) -> Result<(), Error> {
        let admin_api = self.ctx.admin_api();
        let outcome = match action {
            Moderation::Approve => Outcome {
                success: messages::RESTAURANT_APPROVED,
                failure: messages::APPROVE_FAILED,
            },
            Moderation::Reject => Outcome {
                success: messages::RESTAURANT_REJECTED,
                failure: messages::REJECT_FAILED,
            },
        };
        submit(&self.ctx, &self.submission, outcome, || async move {
            let admin_api = admin_api?;
            match action {
                Moderation::Approve => admin_api.approve_restaurant(id).await,
                Moderation::Reject => admin_api.reject_restaurant(id).await,
            }
        })
        .await?;
        self.pending.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use foodiebaba_boundary::UserRole;

    use super::*;
    use crate::{
        api::Method,
        flows::testing::{fixture, logged_in, restaurant_json},
        notify::Notice,
    };

    fn pending_json() -> String {
        format!(
            "[{},{}]",
            restaurant_json(7, "Curry House"),
            restaurant_json(8, "Noodle Bar")
        )
    }

    #[tokio::test]
    async fn load_pending_restaurants() {
        let f = logged_in(UserRole::Admin);
        f.client.respond(200, pending_json());
        let panel = AdminPanel::new(f.ctx.clone());
        panel.load().await.unwrap();
        assert_eq!(panel.pending().len(), 2);
        let request = f.client.last_request().unwrap();
        assert_eq!(
            request.url,
            "http://localhost:8080/admin/restaurants/pending"
        );
        assert_eq!(
            request.header("Authorization"),
            Some("Bearer secret-token")
        );
    }

    #[tokio::test]
    async fn load_pending_restaurants_with_null_associations() {
        let f = logged_in(UserRole::Admin);
        f.client.respond(
            200,
            r#"[{"id":7,"name":"Curry House","category":"Indian","address":"Main Street 1","description":"Spicy","status":"pending","photos":null,"reviews":null,"created_by":1}]"#,
        );
        let panel = AdminPanel::new(f.ctx.clone());
        panel.load().await.unwrap();
        let pending = panel.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 7);
        assert!(pending[0].reviews.is_empty());
        assert!(f.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn reject_removes_restaurant_locally() {
        let f = logged_in(UserRole::Admin);
        f.client.respond(200, pending_json());
        f.client.respond(200, r#"{"message":"Restaurant rejected"}"#);
        let panel = AdminPanel::new(f.ctx.clone());
        panel.load().await.unwrap();
        panel.reject(8).await.unwrap();

        let request = f.client.last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(
            request.url,
            "http://localhost:8080/admin/restaurants/8/reject"
        );
        assert_eq!(f.client.request_count(), 2);
        let ids: Vec<_> = panel.pending().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7]);
        assert_eq!(
            f.notifier.last(),
            Some(Notice::success("Restaurant rejected"))
        );
    }

    #[tokio::test]
    async fn keep_restaurant_if_moderation_fails() {
        let f = logged_in(UserRole::Admin);
        f.client.respond(200, pending_json());
        f.client.respond(403, r#"{"message":"Forbidden"}"#);
        let panel = AdminPanel::new(f.ctx.clone());
        panel.load().await.unwrap();
        panel.approve(7).await.unwrap_err();
        assert_eq!(panel.pending().len(), 2);
        assert_eq!(f.notifier.last(), Some(Notice::error("Forbidden")));
    }

    #[tokio::test]
    async fn anonymous_load_fails_fast() {
        let f = fixture();
        let panel = AdminPanel::new(f.ctx.clone());
        let err = panel.load().await.unwrap_err();
        assert_eq!(err, Error::Api(crate::api::Error::MissingCredentials));
        assert_eq!(f.client.request_count(), 0);
    }

    #[tokio::test]
    async fn failed_load_uses_fallback() {
        let f = logged_in(UserRole::Admin);
        f.client.respond(500, "");
        let panel = AdminPanel::new(f.ctx.clone());
        panel.load().await.unwrap_err();
        assert_eq!(
            f.notifier.last(),
            Some(Notice::error("Failed to fetch pending restaurants"))
        );
    }
}
