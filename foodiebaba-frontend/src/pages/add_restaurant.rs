use leptos::*;

use foodiebaba::{
    flows,
    validate::{FieldErrors, RestaurantForm},
    AppContext, Error,
};

use crate::components::*;

#[component]
pub fn AddRestaurant() -> impl IntoView {
    let flow = flows::AddRestaurant::new(expect_context::<AppContext>());

    // -- signals -- //

    let name = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::new());

    // -- signal modifiers -- //

    let show_form = move |form: RestaurantForm| {
        name.set(form.name);
        category.set(form.category);
        address.set(form.address);
        description.set(form.description);
    };

    // -- actions -- //

    let submit_action = create_action(move |form: &RestaurantForm| {
        let form = form.clone();
        let flow = flow.clone();
        async move {
            flow.update_form(|f| *f = form);
            match flow.submit().await {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    show_form(flow.form());
                }
                Err(Error::Validation(e)) => errors.set(e),
                Err(err) => log::debug!("Unable to add restaurant: {err}"),
            }
        }
    });

    let disabled = Signal::derive(move || submit_action.pending().get());
    let errors = Signal::from(errors);

    let submit = move || {
        submit_action.dispatch(RestaurantForm {
            name: name.get_untracked(),
            category: category.get_untracked(),
            address: address.get_untracked(),
            description: description.get_untracked(),
        });
    };

    view! {
      <section>
        <h2>"Add Restaurant"</h2>
        <form on:submit = move |ev| { ev.prevent_default(); submit(); }>
          <Field label = "Name" name = "name" value = name errors disabled />
          <Field label = "Category" name = "category" value = category errors disabled />
          <Field label = "Address" name = "address" value = address errors disabled />
          <Field label = "Description" name = "description" value = description errors disabled multiline = true />
          <button type = "submit" prop:disabled = move || disabled.get()>"Add Restaurant"</button>
        </form>
      </section>
    }
}
