//! 詳細パネルコンポーネント

use grave_finder_common::RecordDetail;
use leptos::prelude::*;

#[component]
pub fn DetailPanel(detail: RecordDetail) -> impl IntoView {
    let RecordDetail { title, rows, image_url, image_alt } = detail;

    view! {
        <div class="detail-panel">
            <h2>{title}</h2>
            {rows
                .into_iter()
                .map(|(label, value)| view! { <p>{format!("{}: {}", label, value)}</p> })
                .collect_view()}
            {image_url.map(|src| {
                view! {
                    <img
                        src=src
                        alt=image_alt
                        style="width: 600px; height: 400px;"
                    />
                }
            })}
        </div>
    }
}
