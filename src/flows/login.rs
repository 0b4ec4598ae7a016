use crate::{
    api,
    context::AppContext,
    page::Page,
    submission::Submission,
    validate::{LoginForm, Validate},
    Error,
};

use super::{messages, submit, Outcome};

#[derive(Clone)]
pub struct Login {
    ctx: AppContext,
    submission: Submission,
}

impl Login {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            submission: Submission::new(),
        }
    }

    #[must_use]
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Logs in and returns the page to show next.
    pub async fn submit(&self, form: &LoginForm) -> Result<Page, Error> {
        form.validate()?;
        let credentials = form.to_credentials();
        let public_api = self.ctx.public_api();
        let session = self.ctx.session().clone();
        let outcome = Outcome {
            success: messages::LOGIN_SUCCEEDED,
            failure: messages::LOGIN_FAILED,
        };
        submit(&self.ctx, &self.submission, outcome, || async move {
            let identity = public_api.login(&credentials).await?;
            session.login(identity);
            Ok::<_, api::Error>(())
        })
        .await?;
        Ok(Page::Home)
    }
}

#[cfg(test)]
mod tests {
    use foodiebaba_boundary::UserRole;

    use super::*;
    use crate::{
        api::{Method, TransportError},
        flows::testing::fixture,
        notify::Notice,
        submission::SubmissionState,
        validate::INVALID_EMAIL,
    };

    fn form() -> LoginForm {
        LoginForm {
            email: "alice@example.com".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_creates_session() {
        let f = fixture();
        f.client
            .respond(200, r#"{"username":"alice","role":"admin","token":"jwt"}"#);
        let login = Login::new(f.ctx.clone());
        let next = login.submit(&form()).await.unwrap();
        assert_eq!(next, Page::Home);

        let identity = f.ctx.session().identity().unwrap();
        assert_eq!(identity.role, UserRole::Admin);
        assert_eq!(identity.token, "jwt");
        assert_eq!(login.submission().state(), SubmissionState::Succeeded);
        assert_eq!(f.notifier.last(), Some(Notice::success("Login successful")));

        let request = f.client.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8080/login");
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn rejected_login_keeps_session_absent() {
        let f = fixture();
        f.client.respond(401, r#"{"message":"Invalid credentials"}"#);
        let login = Login::new(f.ctx.clone());
        let err = login.submit(&form()).await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert!(!f.ctx.session().is_logged_in());
        assert_eq!(
            login.submission().state(),
            SubmissionState::Failed("Invalid credentials".into())
        );
        assert_eq!(f.notifier.last(), Some(Notice::error("Invalid credentials")));
    }

    #[tokio::test]
    async fn rejection_without_message_uses_fallback() {
        let f = fixture();
        f.client.respond(500, "");
        let login = Login::new(f.ctx.clone());
        login.submit(&form()).await.unwrap_err();
        assert_eq!(f.notifier.last(), Some(Notice::error("Login failed")));
    }

    #[tokio::test]
    async fn network_failure() {
        let f = fixture();
        f.client.fail(TransportError::NoResponse("offline".into()));
        let login = Login::new(f.ctx.clone());
        login.submit(&form()).await.unwrap_err();
        assert_eq!(
            f.notifier.last(),
            Some(Notice::error("Network error, please try again"))
        );
    }

    #[tokio::test]
    async fn invalid_input_is_not_sent() {
        let f = fixture();
        let login = Login::new(f.ctx.clone());
        let form = LoginForm {
            email: "alice".into(),
            password: "secret".into(),
        };
        let err = login.submit(&form).await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get("email")),
            Some(INVALID_EMAIL)
        );
        assert_eq!(f.client.request_count(), 0);
        assert_eq!(login.submission().state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn busy_while_submitting() {
        let f = fixture();
        let login = Login::new(f.ctx.clone());
        let _pending = login.submission().begin().unwrap();
        let err = login.submit(&form()).await.unwrap_err();
        assert_eq!(err, Error::Busy);
        assert_eq!(f.client.request_count(), 0);
    }
}
