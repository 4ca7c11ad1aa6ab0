//! 表示状態の状態遷移
//!
//! 検索語の変更・候補の選択というイベントから、画面に表示する状態
//! （未入力 / 該当なし / 候補リスト / 詳細表示）を純粋関数で求める。

use crate::matcher;
use crate::record::{Record, RecordStore};
use serde::Serialize;

/// 画面の表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "records", rename_all = "camelCase")]
pub enum SelectionState {
    /// 検索語なし（空または空白のみ）
    #[default]
    Idle,
    /// 検索語はあるが該当0件
    NoMatch,
    /// 該当2件以上（常に2件以上を保持）
    Candidates(Vec<Record>),
    /// 1件に確定
    Selected(Record),
}

impl SelectionState {
    pub fn candidates(&self) -> &[Record] {
        match self {
            SelectionState::Candidates(records) => records,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<&Record> {
        match self {
            SelectionState::Selected(record) => Some(record),
            _ => None,
        }
    }
}

/// 状態遷移イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// 入力欄の文字列が変わった
    QueryChanged(String),
    /// 候補リストのn番目を選んだ
    PersonPicked(usize),
}

/// 現在の状態とイベントから次の状態を求める
pub fn reduce(state: &SelectionState, event: &Event, store: &RecordStore) -> SelectionState {
    match event {
        Event::QueryChanged(text) => from_query(text, store),
        Event::PersonPicked(index) => match state {
            SelectionState::Candidates(records) => match records.get(*index) {
                Some(record) => SelectionState::Selected(record.clone()),
                None => state.clone(),
            },
            // 候補リスト表示中以外の選択は無視
            _ => state.clone(),
        },
    }
}

fn from_query(text: &str, store: &RecordStore) -> SelectionState {
    if matcher::QueryTerms::parse(text).is_empty() {
        return SelectionState::Idle;
    }

    let mut matches = store.search(text);
    match matches.len() {
        0 => SelectionState::NoMatch,
        1 => SelectionState::Selected(matches.remove(0).clone()),
        _ => SelectionState::Candidates(matches.into_iter().cloned().collect()),
    }
}

/// 検索セッション（入力文字列と表示状態の組）
///
/// 候補を選んでも入力文字列は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    pub query: String,
    pub selection: SelectionState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを適用した次のセッションを返す
    pub fn apply(&self, event: &Event, store: &RecordStore) -> Self {
        let query = match event {
            Event::QueryChanged(text) => text.clone(),
            Event::PersonPicked(_) => self.query.clone(),
        };

        Self {
            query,
            selection: reduce(&self.selection, event, store),
        }
    }

    /// データ読み込み完了後に現在の検索語で再計算
    pub fn refresh(&self, store: &RecordStore) -> Self {
        self.apply(&Event::QueryChanged(self.query.clone()), store)
    }
}
