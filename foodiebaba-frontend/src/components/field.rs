use leptos::*;

use foodiebaba::validate::FieldErrors;

/// A labeled input with its validation message.
#[component]
pub fn Field(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: Signal<FieldErrors>,
    disabled: Signal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(name));

    let input = if multiline {
        view! {
          <textarea
            id = name
            name = name
            prop:value = move || value.get()
            prop:disabled = move || disabled.get()
            on:input = move |ev| value.set(event_target_value(&ev))
          />
        }
        .into_view()
    } else {
        view! {
          <input
            id = name
            name = name
            type = input_type
            prop:value = move || value.get()
            prop:disabled = move || disabled.get()
            on:input = move |ev| value.set(event_target_value(&ev))
          />
        }
        .into_view()
    };

    view! {
      <div class="field">
        <label for = name>{ label }</label>
        { input }
        { move || error().map(|msg| view! { <p class="error">{ msg }</p> }) }
      </div>
    }
}
