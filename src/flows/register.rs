use crate::{
    context::AppContext,
    page::Page,
    submission::Submission,
    validate::{RegisterForm, Validate},
    Error,
};

use super::{messages, submit, Outcome};

#[derive(Clone)]
pub struct Register {
    ctx: AppContext,
    submission: Submission,
}

impl Register {
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

    /// Creates the account; the user has to log in afterwards.
    pub async fn submit(&self, form: &RegisterForm) -> Result<Page, Error> {
        form.validate()?;
        let new_user = form.to_new_user();
        let public_api = self.ctx.public_api();
        let outcome = Outcome {
            success: messages::REGISTRATION_SUCCEEDED,
            failure: messages::REGISTRATION_FAILED,
        };
        submit(&self.ctx, &self.submission, outcome, || async move {
            public_api.register(&new_user).await
        })
        .await?;
        Ok(Page::Login)
    }
}
