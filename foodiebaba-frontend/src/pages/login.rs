use leptos::*;
use leptos_router::*;

use foodiebaba::{
    flows,
    validate::{FieldErrors, LoginForm},
    AppContext, Error, Page,
};

use crate::components::*;

#[component]
pub fn Login() -> impl IntoView {
    let login = flows::Login::new(expect_context::<AppContext>());
    let navigate = use_navigate();

    // -- signals -- //

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::new());

    // -- actions -- //

    let login_action = create_action(move |form: &LoginForm| {
        log::info!("Logging in with {email}", email = form.email);
        let form = form.clone();
        let login = login.clone();
        let navigate = navigate.clone();
        async move {
            match login.submit(&form).await {
                Ok(page) => {
                    errors.set(FieldErrors::new());
                    navigate(&page.path(), NavigateOptions::default());
                }
                Err(Error::Validation(e)) => errors.set(e),
                Err(err) => log::debug!("Login failed: {err}"),
            }
        }
    });

    let disabled = Signal::derive(move || login_action.pending().get());
    let errors = Signal::from(errors);

    let submit = move || {
        login_action.dispatch(LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
      <section>
        <h2>"Login"</h2>
        <form on:submit = move |ev| { ev.prevent_default(); submit(); }>
          <Field label = "Email" name = "email" input_type = "email" value = email errors disabled />
          <Field label = "Password" name = "password" input_type = "password" value = password errors disabled />
          <button type = "submit" prop:disabled = move || disabled.get()>"Log in"</button>
        </form>
        <p>
          "Don't have an account? "
          <A href = Page::Register.path()>"Register"</A>
        </p>
      </section>
    }
}
