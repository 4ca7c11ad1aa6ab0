//! 候補リストコンポーネント

use grave_finder_common::{Record, MULTIPLE_RESULTS_HEADING};
use leptos::prelude::*;

#[component]
pub fn CandidateList<F>(
    candidates: Vec<Record>,
    on_pick: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send,
{
    view! {
        <div class="candidate-list">
            <h2>{MULTIPLE_RESULTS_HEADING}</h2>
            <ul>
                {candidates
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| {
                        let on_pick = on_pick.clone();
                        view! {
                            <li>
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| on_pick(index)
                                >
                                    {record.display_name()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
