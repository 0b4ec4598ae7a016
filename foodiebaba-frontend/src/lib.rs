use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use foodiebaba::{
    config::Config,
    notify::{LogNotifier, Notice, Notifier},
    storage::BrowserStorage,
    AppContext, Page,
};
use foodiebaba_boundary::Identity;
use foodiebaba_frontend_api::GlooClient;

mod files;

mod pages;
use pages::*;

mod components;
use components::*;

/// Collects notices for rendering.
#[derive(Clone, Copy)]
struct SignalNotifier(RwSignal<Vec<Notice>>);

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        LogNotifier.notify(notice.clone());
        self.0.update(|n| n.push(notice));
    }
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let notices = RwSignal::new(Vec::<Notice>::new());

    // -- init context -- //

    let ctx = AppContext::restore(
        Config::from_build_env_or_default(),
        Rc::new(GlooClient),
        BrowserStorage,
        Rc::new(SignalNotifier(notices)),
    );
    log::debug!("Backend: {}", ctx.config().api.base_url);

    let identity = RwSignal::new(ctx.session().identity());
    let subscription = ctx.session().on_identity_change(move |id| {
        log::debug!("Identity changed");
        identity.set(id.cloned());
    });
    on_cleanup(move || subscription.unsubscribe());

    let identity: Signal<Option<Identity>> = identity.into();
    provide_context(ctx);
    provide_context(identity);

    view! {
      <Router>
        <NavBar identity />
        <Notices notices />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home /> }
            />
            <Route
              path=Page::Login.path()
              view=move || view! { <Login /> }
            />
            <Route
              path=Page::Register.path()
              view=move || view! { <Register /> }
            />
            <Route
              path="/restaurants/:id"
              view=move || view! {
                <Guard>
                  <Restaurant />
                </Guard>
              }
            />
            <Route
              path=Page::AddRestaurant.path()
              view=move || view! {
                <Guard>
                  <AddRestaurant />
                </Guard>
              }
            />
            <Route
              path=Page::Admin.path()
              view=move || view! {
                <Guard>
                  <Admin />
                </Guard>
              }
            />
            <Route
              path="/*any"
              view=move || view! { <Redirect path = Page::Home.path() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
