//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::dataset;
use crate::components::{
    header::Header,
    search_box::SearchBox,
    candidate_list::CandidateList,
    detail_panel::DetailPanel,
    status_line::StatusLine,
};
use crate::config::{DATASET_URL, PUBLIC_URL};
use grave_finder_common::{
    Event, RecordDetail, RecordStore, SearchSession, SelectionState,
};

/// データ読み込み状況
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready(usize),
    Failed,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 読み込み完了までは空のストアで検索する
    let (store, set_store) = signal(RecordStore::default());
    let (session, set_session) = signal(SearchSession::new());
    let (load_status, set_load_status) = signal(LoadStatus::Loading);

    spawn_local(async move {
        match dataset::load_dataset(DATASET_URL).await {
            Ok(loaded) => {
                log::info!("loaded {} records from {}", loaded.len(), DATASET_URL);
                set_load_status.set(LoadStatus::Ready(loaded.len()));
                // 読み込み中に入力された検索語で再計算
                set_session.update(|s| *s = s.refresh(&loaded));
                set_store.set(loaded);
            }
            Err(err) => {
                log::error!("failed to load {}: {}", DATASET_URL, err);
                set_load_status.set(LoadStatus::Failed);
            }
        }
    });

    let dispatch = move |event: Event| {
        let next = store.with_untracked(|st| session.with_untracked(|s| s.apply(&event, st)));
        set_session.set(next);
    };

    let on_query = move |text: String| dispatch(Event::QueryChanged(text));
    let on_pick = move |index: usize| dispatch(Event::PersonPicked(index));

    let query = Signal::derive(move || session.with(|s| s.query.clone()));
    let selection = Signal::derive(move || session.with(|s| s.selection.clone()));

    view! {
        <div class="App">
            <Header />

            <SearchBox query=query on_input=on_query />

            {move || match selection.get() {
                SelectionState::Idle | SelectionState::NoMatch => ().into_any(),
                SelectionState::Candidates(records) => {
                    view! { <CandidateList candidates=records on_pick=on_pick /> }.into_any()
                }
                SelectionState::Selected(record) => {
                    let detail = RecordDetail::from_record(&record, PUBLIC_URL);
                    view! { <DetailPanel detail=detail /> }.into_any()
                }
            }}

            <StatusLine selection=selection />

            <p class="text-muted load-status">
                {move || match load_status.get() {
                    LoadStatus::Loading => "Loading records...".to_string(),
                    LoadStatus::Ready(count) => format!("{} records", count),
                    // 失敗時は空のストアのまま「該当なし」表示になる
                    LoadStatus::Failed => String::new(),
                }}
            </p>
        </div>
    }
}
