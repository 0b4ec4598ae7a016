use std::rc::Rc;

use crate::{
    api::{self, AdminApi, Api, HttpClient, PublicApi, UserApi},
    config::Config,
    notify::{Notice, Notifier},
    session::SessionManager,
    storage::SessionStorage,
    Error,
};

/// Everything a page needs to talk to the backend.
#[derive(Clone)]
pub struct AppContext {
    config: Rc<Config>,
    api: Api,
    session: SessionManager,
    notifier: Rc<dyn Notifier>,
}

impl AppContext {
    pub fn new(
        config: Config,
        client: Rc<dyn HttpClient>,
        session: SessionManager,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let api = Api::new(&config.api.base_url, client);
        Self {
            config: Rc::new(config),
            api,
            session,
            notifier,
        }
    }

    /// Creates the session on top of `storage` and restores it.
    pub fn restore<S>(
        config: Config,
        client: Rc<dyn HttpClient>,
        storage: S,
        notifier: Rc<dyn Notifier>,
    ) -> Self
    where
        S: SessionStorage + 'static,
    {
        let session = SessionManager::new(
            storage,
            config.session.storage_key.clone(),
            Rc::clone(&notifier),
        );
        session.restore();
        Self::new(config, client, session, notifier)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &SessionManager {
        &self.session
    }

    #[must_use]
    pub fn public_api(&self) -> PublicApi {
        PublicApi::new(self.api.clone())
    }

    /// The identity is looked up on every call.
    pub fn user_api(&self) -> api::Result<UserApi> {
        let token = self.token()?;
        Ok(UserApi::new(self.api.clone(), token))
    }

    pub fn admin_api(&self) -> api::Result<AdminApi> {
        let token = self.token()?;
        Ok(AdminApi::new(self.api.clone(), token))
    }

    fn token(&self) -> api::Result<String> {
        self.session
            .with_identity(|identity| identity.map(|i| i.token.clone()))
            .ok_or(api::Error::MissingCredentials)
    }

    pub fn notify_success(&self, message: &str) {
        self.notifier.notify(Notice::success(message));
    }

    /// Reports a failed call; validation and lock errors are not reported.
    pub fn notify_failure(&self, err: &Error, fallback: &str) -> Option<String> {
        let Error::Api(err) = err else {
            return None;
        };
        let message = err.user_message(fallback);
        log::warn!("{fallback}: {err}");
        self.notifier.notify(Notice::error(message.clone()));
        Some(message)
    }
}
