//! 対話式検索モジュール
//!
//! 検索語を入力するたびに状態を更新し、候補が複数あれば選択肢を出す。
//! 候補を選んでも検索語はそのまま残る。

use crate::error::{GraveFinderError, Result};
use crate::report::render_state;
use dialoguer::{Input, Select};
use grave_finder_common::{
    Event, Record, RecordStore, SearchSession, SelectionState, MULTIPLE_RESULTS_HEADING,
};

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// 検索語を適用
    Search(String),
    /// 終了
    Quit,
}

/// 入力行をアクションに変換（空行・qで終了）
pub fn parse_action(input: &str) -> SessionAction {
    match input.trim() {
        "" | "q" | "Q" => SessionAction::Quit,
        _ => SessionAction::Search(input.to_string()),
    }
}

/// 対話式で検索
pub fn run_interactive(store: &RecordStore, image_base: &str) -> Result<()> {
    println!("🔎 {}件のレコードを読み込みました", store.len());
    println!("---");
    println!("操作: 名前を入力して[Enter] / [Enter]のみ・qで終了");
    println!("---\n");

    let mut session = SearchSession::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Search by first or last name")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GraveFinderError::Prompt(e.to_string()))?;

        let text = match parse_action(&input) {
            SessionAction::Quit => break,
            SessionAction::Search(text) => text,
        };

        session = session.apply(&Event::QueryChanged(text), store);

        if let SelectionState::Candidates(records) = &session.selection {
            if let Some(index) = pick_candidate(records)? {
                session = session.apply(&Event::PersonPicked(index), store);
            }
        }

        println!("{}\n", render_state(&session.selection, image_base));
    }

    Ok(())
}

fn pick_candidate(records: &[Record]) -> Result<Option<usize>> {
    let labels: Vec<String> = records.iter().map(Record::display_name).collect();

    Select::new()
        .with_prompt(MULTIPLE_RESULTS_HEADING)
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| GraveFinderError::Prompt(e.to_string()))
}
