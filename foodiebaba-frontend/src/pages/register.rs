use leptos::*;
use leptos_router::*;

use foodiebaba::{
    flows,
    validate::{FieldErrors, RegisterForm},
    AppContext, Error, Page,
};

use crate::components::*;

#[component]
pub fn Register() -> impl IntoView {
    let register = flows::Register::new(expect_context::<AppContext>());
    let navigate = use_navigate();

    // -- signals -- //

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::new());

    // -- actions -- //

    let register_action = create_action(move |form: &RegisterForm| {
        log::info!("Try to register new account for {}", form.email);
        let form = form.clone();
        let register = register.clone();
        let navigate = navigate.clone();
        async move {
            match register.submit(&form).await {
                Ok(page) => navigate(&page.path(), NavigateOptions::default()),
                Err(Error::Validation(e)) => errors.set(e),
                Err(err) => log::warn!("Unable to register new account: {err}"),
            }
        }
    });

    let disabled = Signal::derive(move || register_action.pending().get());
    let errors = Signal::from(errors);

    let submit = move || {
        register_action.dispatch(RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
      <section>
        <h2>"Register"</h2>
        <form on:submit = move |ev| { ev.prevent_default(); submit(); }>
          <Field label = "Username" name = "username" value = username errors disabled />
          <Field label = "Email" name = "email" input_type = "email" value = email errors disabled />
          <Field label = "Password" name = "password" input_type = "password" value = password errors disabled />
          <button type = "submit" prop:disabled = move || disabled.get()>"Register"</button>
        </form>
        <p>
          "You already have an account? "
          <A href = Page::Login.path()>"Login"</A>
        </p>
      </section>
    }
}
