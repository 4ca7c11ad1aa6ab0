//! 検索入力コンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBox<F>(
    query: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="search-box">
            <input
                type="text"
                id="search"
                placeholder="Search by first or last name"
                prop:value=move || query.get()
                on:input=move |ev| {
                    on_input(event_target_value(&ev));
                }
            />
        </div>
    }
}
