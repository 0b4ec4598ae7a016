use leptos::*;
use leptos_router::*;

use foodiebaba::{flows::Restaurants, AppContext, Page};

#[derive(Debug, Clone)]
enum Command {
    Fetch,
    Search { name: String, category: String },
    Next,
    Previous,
}

#[component]
pub fn Home() -> impl IntoView {
    let list = Restaurants::new(expect_context::<AppContext>());

    // -- signals -- //

    let restaurants = create_rw_signal(list.restaurants());
    let pager = create_rw_signal(list.pager());
    let error = create_rw_signal(None::<String>);
    let name = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());

    // -- actions -- //

    let run = create_action(move |command: &Command| {
        let list = list.clone();
        let command = command.clone();
        async move {
            let result = match command {
                Command::Fetch => list.fetch().await,
                Command::Search { name, category } => list.search(&name, &category).await,
                Command::Next => list.next().await,
                Command::Previous => list.previous().await,
            };
            if let Err(err) = result {
                log::debug!("Unable to load restaurants: {err}");
            }
            restaurants.set(list.restaurants());
            pager.set(list.pager());
            error.set(list.error());
        }
    });

    let loading = run.pending();

    // -- init -- //

    run.dispatch(Command::Fetch);

    view! {
      <section>
        <form on:submit = move |ev| {
          ev.prevent_default();
          run.dispatch(Command::Search {
            name: name.get_untracked(),
            category: category.get_untracked(),
          });
        }>
          <input
            type = "search"
            placeholder = "Search by name"
            prop:value = move || name.get()
            on:input = move |ev| name.set(event_target_value(&ev))
          />
          <input
            type = "search"
            placeholder = "Category"
            prop:value = move || category.get()
            on:input = move |ev| category.set(event_target_value(&ev))
          />
          <button type = "submit">"Search"</button>
        </form>
        { move || loading.get().then(|| view! { <p>"Loading..."</p> }) }
        { move || error.get().map(|err| view! { <p class="error">{ err }</p> }) }
        <ul>
          <For
            each = move || restaurants.get()
            key = |r| r.id
            children = move |r| view! {
              <li>
                <A href = Page::RestaurantDetail(r.id).path()>{ r.name }</A>
                " " <span>{ r.category }</span>
                " " <span>{ r.address }</span>
              </li>
            }
          />
        </ul>
        <div class="pagination">
          <button
            prop:disabled = move || loading.get() || !pager.with(|p| p.has_previous())
            on:click = move |_| run.dispatch(Command::Previous)
          >
            "Previous"
          </button>
          <span>
            { move || pager.with(|p| match p.total_pages() {
                Some(total) => format!("Page {} of {total}", p.page()),
                None => format!("Page {}", p.page()),
            }) }
          </span>
          <button
            prop:disabled = move || loading.get() || !pager.with(|p| p.has_next())
            on:click = move |_| run.dispatch(Command::Next)
          >
            "Next"
          </button>
        </div>
      </section>
    }
}
