use leptos::*;
use leptos_router::*;

use foodiebaba::{
    flows::{AdminPanel, Moderation},
    AppContext, Page,
};
use foodiebaba_boundary::RestaurantId;

#[component]
pub fn Admin() -> impl IntoView {
    let panel = AdminPanel::new(expect_context::<AppContext>());

    // -- signals -- //

    let pending = create_rw_signal(panel.pending());

    // -- actions -- //

    let fetch_pending = create_action({
        let panel = panel.clone();
        move |(): &()| {
            let panel = panel.clone();
            async move {
                if let Err(err) = panel.load().await {
                    log::debug!("Unable to load pending restaurants: {err}");
                }
                pending.set(panel.pending());
            }
        }
    });

    let moderate = create_action(move |(id, action): &(RestaurantId, Moderation)| {
        let panel = panel.clone();
        let (id, action) = (*id, *action);
        async move {
            if let Err(err) = panel.moderate(id, action).await {
                log::debug!("Unable to moderate restaurant {id}: {err}");
            }
            pending.set(panel.pending());
        }
    });

    let busy = Signal::derive(move || moderate.pending().get());

    // -- init -- //

    fetch_pending.dispatch(());

    view! {
      <section>
        <h2>"Pending restaurants"</h2>
        { move || fetch_pending.pending().get().then(|| view! { <p>"Loading..."</p> }) }
        { move || pending.with(Vec::is_empty).then(|| view! { <p>"No pending restaurants"</p> }) }
        <ul>
          <For
            each = move || pending.get()
            key = |r| r.id
            children = move |r| {
              let id = r.id;
              view! {
                <li>
                  <A href = Page::RestaurantDetail(id).path()>{ r.name }</A>
                  " " <span>{ r.category }</span>
                  " " <span>{ r.address }</span>
                  <button
                    prop:disabled = move || busy.get()
                    on:click = move |_| moderate.dispatch((id, Moderation::Approve))
                  >
                    "Approve"
                  </button>
                  <button
                    prop:disabled = move || busy.get()
                    on:click = move |_| moderate.dispatch((id, Moderation::Reject))
                  >
                    "Reject"
                  </button>
                </li>
              }
            }
          />
        </ul>
      </section>
    }
}
