use leptos::*;

use foodiebaba::notify::{Level, Notice};

#[component]
pub fn Notices(notices: RwSignal<Vec<Notice>>) -> impl IntoView {
    let dismiss = move |index: usize| {
        notices.update(|n| {
            if index < n.len() {
                n.remove(index);
            }
        });
    };

    move || {
        notices
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, Notice { level, message })| {
                let class = match level {
                    Level::Success => "notice success",
                    Level::Error => "notice error",
                };
                view! {
                  <div class = class role = "status">
                    <span>{ message }</span>
                    <button on:click = move |_| dismiss(index)>"×"</button>
                  </div>
                }
            })
            .collect_view()
    }
}
