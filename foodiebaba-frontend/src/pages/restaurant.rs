use leptos::*;
use leptos_router::*;

use foodiebaba::{
    flows::RestaurantDetail,
    validate::{FieldErrors, PhotoSelection, ReviewForm},
    AppContext, Error,
};
use foodiebaba_boundary::{Identity, Restaurant as RestaurantData, RestaurantId, Review};

use crate::{components::*, files};

#[component]
pub fn Restaurant() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<RestaurantId>().ok()))
    });

    move || match id.get() {
        Some(id) => view! { <RestaurantProfile id /> }.into_view(),
        None => view! { <h2>"Restaurant not found"</h2> }.into_view(),
    }
}

#[component]
fn RestaurantProfile(id: RestaurantId) -> impl IntoView {
    let detail = RestaurantDetail::new(expect_context::<AppContext>(), id);

    // -- signals -- //

    let identity = expect_context::<Signal<Option<Identity>>>();
    let restaurant = create_rw_signal(None::<RestaurantData>);

    // -- actions -- //

    let fetch_restaurant = create_action({
        let detail = detail.clone();
        move |(): &()| {
            let detail = detail.clone();
            async move {
                if let Ok(r) = detail.load().await {
                    restaurant.set(Some(r));
                }
            }
        }
    });

    let on_changed = {
        let detail = detail.clone();
        move || restaurant.set(detail.restaurant())
    };

    fetch_restaurant.dispatch(());

    move || match restaurant.get() {
        Some(r) => {
            identity.track();
            let contribute = detail.can_contribute().then(|| {
                view! {
                  <ReviewEditor detail = detail.clone() on_changed = on_changed.clone() />
                  <PhotoUpload detail = detail.clone() on_changed = on_changed.clone() />
                }
            });
            view! {
              <RestaurantInfo restaurant = r />
              { contribute }
            }
            .into_view()
        }
        None if fetch_restaurant.pending().get() => view! { <p>"Loading..."</p> }.into_view(),
        None => view! { <h2>"Restaurant not found"</h2> }.into_view(),
    }
}

#[component]
fn RestaurantInfo(restaurant: RestaurantData) -> impl IntoView {
    let RestaurantData {
        name,
        category,
        address,
        description,
        status,
        photos,
        reviews,
        ..
    } = restaurant;

    view! {
      <article>
        <h2>{ name }</h2>
        <p>{ category } " · " { address }</p>
        <p>{ description }</p>
        <p>"Status: " { status.to_string() }</p>
        <h3>"Photos"</h3>
        <div class="photos">
          { photos.into_iter().map(|p| view! { <img src = p.url alt = "" /> }).collect_view() }
        </div>
        <h3>"Reviews"</h3>
        <ul>
          { reviews.into_iter().map(|r| view! { <ReviewItem review = r /> }).collect_view() }
        </ul>
      </article>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    let author = review
        .author
        .map_or_else(|| "Anonymous".to_string(), |a| a.username);
    view! {
      <li>
        <strong>{ author }</strong>
        " " <span>{ format!("{}/5", review.rating) }</span>
        <p>{ review.comment }</p>
      </li>
    }
}

#[component]
fn ReviewEditor<F>(detail: RestaurantDetail, on_changed: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    // -- signals -- //

    let rating = create_rw_signal(String::from("5"));
    let comment = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::new());

    // -- actions -- //

    let add_review = create_action(move |form: &ReviewForm| {
        let form = form.clone();
        let detail = detail.clone();
        let on_changed = on_changed.clone();
        async move {
            match detail.add_review(&form).await {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    comment.set(String::new());
                    on_changed();
                }
                Err(Error::Validation(e)) => errors.set(e),
                Err(err) => log::debug!("Unable to add review: {err}"),
            }
        }
    });

    let disabled = Signal::derive(move || add_review.pending().get());
    let errors = Signal::from(errors);

    let submit = move || {
        add_review.dispatch(ReviewForm {
            rating: rating.get_untracked().parse().unwrap_or_default(),
            comment: comment.get_untracked(),
        });
    };

    view! {
      <form on:submit = move |ev| { ev.prevent_default(); submit(); }>
        <h3>"Add a review"</h3>
        <label for = "rating">"Rating"</label>
        <select
          id = "rating"
          prop:value = move || rating.get()
          on:change = move |ev| rating.set(event_target_value(&ev))
        >
          { (1..=5).rev().map(|n| view! { <option value = n.to_string()>{ n }</option> }).collect_view() }
        </select>
        { move || errors.with(|e| e.get("rating")).map(|msg| view! { <p class="error">{ msg }</p> }) }
        <Field label = "Comment" name = "comment" value = comment errors disabled multiline = true />
        <button type = "submit" prop:disabled = move || disabled.get()>"Submit review"</button>
      </form>
    }
}

#[component]
fn PhotoUpload<F>(detail: RestaurantDetail, on_changed: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    // -- signals -- //

    let selection = create_rw_signal(PhotoSelection::default());
    let errors = create_rw_signal(FieldErrors::new());

    // -- actions -- //

    let upload = create_action(move |selection: &PhotoSelection| {
        let selection = selection.clone();
        let detail = detail.clone();
        let on_changed = on_changed.clone();
        async move {
            match detail.upload_photos(selection).await {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    on_changed();
                }
                Err(Error::Validation(e)) => errors.set(e),
                Err(err) => log::debug!("Unable to upload photos: {err}"),
            }
        }
    });

    let disabled = Signal::derive(move || upload.pending().get());

    let on_select = move |ev: ev::Event| {
        spawn_local(async move {
            match files::selected_files(&ev).await {
                Ok(files) => selection.set(PhotoSelection { files }),
                Err(err) => log::warn!("Unable to read selected files: {err}"),
            }
        });
    };

    view! {
      <form on:submit = move |ev| { ev.prevent_default(); upload.dispatch(selection.get_untracked()); }>
        <h3>"Upload photos"</h3>
        <input type = "file" accept = "image/*" multiple on:change = on_select />
        { move || errors.with(|e| e.get("photos")).map(|msg| view! { <p class="error">{ msg }</p> }) }
        <button type = "submit" prop:disabled = move || disabled.get()>"Upload"</button>
      </form>
    }
}
