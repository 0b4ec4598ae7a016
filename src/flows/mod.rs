//! What happens when the user interacts with a page.
//!
//! The flows are UI agnostic: they validate input, call the backend,
//! update the session and emit notices. Rendering is up to the frontend.

use std::future::Future;

use crate::{api, context::AppContext, submission::Submission, Error};

mod add_restaurant;
mod admin;
mod login;
mod register;
mod restaurant_detail;
mod restaurants;

pub use self::{
    add_restaurant::*, admin::*, login::*, register::*, restaurant_detail::*, restaurants::*,
};

/// Notices of finished operations.
pub mod messages {
    pub const LOGIN_SUCCEEDED: &str = "Login successful";
    pub const LOGIN_FAILED: &str = "Login failed";
    pub const REGISTRATION_SUCCEEDED: &str = "Registration successful";
    pub const REGISTRATION_FAILED: &str = "Registration failed";
    pub const FETCH_RESTAURANTS_FAILED: &str = "Failed to fetch restaurants";
    pub const LOAD_RESTAURANT_FAILED: &str = "Failed to load restaurant";
    pub const RESTAURANT_ADDED: &str = "Restaurant added and pending approval";
    pub const ADD_RESTAURANT_FAILED: &str = "Failed to add restaurant";
    pub const REVIEW_ADDED: &str = "Review added";
    pub const ADD_REVIEW_FAILED: &str = "Failed to add review";
    pub const PHOTOS_UPLOADED: &str = "Photos uploaded successfully";
    pub const UPLOAD_PHOTOS_FAILED: &str = "Failed to upload photos";
    pub const FETCH_PENDING_FAILED: &str = "Failed to fetch pending restaurants";
    pub const RESTAURANT_APPROVED: &str = "Restaurant approved";
    pub const APPROVE_FAILED: &str = "Failed to approve restaurant";
    pub const RESTAURANT_REJECTED: &str = "Restaurant rejected";
    pub const REJECT_FAILED: &str = "Failed to reject restaurant";
}

struct Outcome {
    success: &'static str,
    failure: &'static str,
}

/// Runs `call` while holding the submission lock and reports the outcome.
///
/// The call is not started if the lock is already held.
async fn submit<T, C, F>(
    ctx: &AppContext,
    submission: &Submission,
    outcome: Outcome,
    call: C,
) -> Result<T, Error>
where
    C: FnOnce() -> F,
    F: Future<Output = api::Result<T>>,
{
    let pending = submission.begin()?;
    match call().await {
        Ok(value) => {
            ctx.notify_success(outcome.success);
            pending.succeed();
            Ok(value)
        }
        Err(err) => {
            let err = Error::Api(err);
            let message = ctx
                .notify_failure(&err, outcome.failure)
                .unwrap_or_else(|| outcome.failure.to_string());
            pending.fail(message);
            Err(err)
        }
    }
}

/// Reports a failed load without touching any submission lock.
fn report<T>(ctx: &AppContext, result: api::Result<T>, failure: &str) -> Result<T, Error> {
    result.map_err(|err| {
        let err = Error::Api(err);
        ctx.notify_failure(&err, failure);
        err
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::rc::Rc;

    use foodiebaba_boundary::{Identity, UserRole};

    use crate::{
        api::mock::MockClient, config::Config, context::AppContext, notify::RecordingNotifier,
        storage::MemoryStorage,
    };

    pub struct Fixture {
        pub ctx: AppContext,
        pub client: MockClient,
        pub notifier: RecordingNotifier,
    }

    pub fn fixture() -> Fixture {
        let client = MockClient::new();
        let notifier = RecordingNotifier::new();
        let ctx = AppContext::restore(
            Config::default(),
            Rc::new(client.clone()),
            MemoryStorage::new(),
            Rc::new(notifier.clone()),
        );
        Fixture {
            ctx,
            client,
            notifier,
        }
    }

    pub fn logged_in(role: UserRole) -> Fixture {
        let fixture = fixture();
        fixture.ctx.session().login(Identity {
            username: "alice".into(),
            role,
            token: "secret-token".into(),
        });
        fixture
    }

    pub fn restaurant_json(id: u64, name: &str) -> String {
        format!(
            r#"{{"id":{id},"name":"{name}","category":"Indian","address":"Main Street 1","description":"Spicy","approvalStatus":"pending"}}"#
        )
    }
}
