use leptos::*;
use leptos_router::*;

use foodiebaba::{
    page::{self, MenuItem},
    AppContext, Page,
};
use foodiebaba_boundary::Identity;

#[component]
pub fn NavBar(identity: Signal<Option<Identity>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let on_logout = move || {
        ctx.session().logout();
        navigate(&Page::Home.path(), NavigateOptions::default());
    };

    let items = create_memo(move |_| identity.with(|identity| page::menu(identity.as_ref())));

    view! {
      <nav>
        <ul>
          <For
            each = move || items.get()
            key = |item| format!("{item:?}")
            children = move |item| {
              let on_logout = on_logout.clone();
              view! { <NavItem item on_logout /> }
            }
          />
        </ul>
      </nav>
    }
}

#[component]
fn NavItem<F>(item: MenuItem, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    match item {
        MenuItem::Link { label, page } => view! {
          <li><A href = page.path()>{ label }</A></li>
        }
        .into_view(),
        MenuItem::Greeting(greeting) => view! { <li>{ greeting }</li> }.into_view(),
        MenuItem::Logout => view! {
          <li><a href="#" on:click = move |ev| { ev.prevent_default(); on_logout(); }>"Logout"</a></li>
        }
        .into_view(),
    }
}
