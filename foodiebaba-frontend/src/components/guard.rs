use leptos::*;
use leptos_router::*;

use foodiebaba::{navigate, Navigation};
use foodiebaba_boundary::Identity;

/// Renders `children` only if the current identity may see the page,
/// otherwise redirects.
#[component]
pub fn Guard(children: ChildrenFn) -> impl IntoView {
    let identity = expect_context::<Signal<Option<Identity>>>();
    let location = use_location();

    // Evaluated again on every identity change.
    let navigation = Signal::derive(move || {
        let path = location.pathname.get();
        identity.with(|identity| navigate(&path, identity.as_ref()))
    });

    move || match navigation.get() {
        Navigation::Render(_) => children().into_view(),
        Navigation::Redirect(page) => view! { <Redirect path = page.path() /> }.into_view(),
    }
}
