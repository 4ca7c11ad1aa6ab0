//! 該当なし表示コンポーネント

use grave_finder_common::{SelectionState, NO_RESULTS_MESSAGE};
use leptos::prelude::*;

/// 表示する状態メッセージ（該当なしのときのみ）
pub fn status_message(selection: &SelectionState) -> Option<&'static str> {
    match selection {
        SelectionState::NoMatch => Some(NO_RESULTS_MESSAGE),
        _ => None,
    }
}

#[component]
pub fn StatusLine(selection: Signal<SelectionState>) -> impl IntoView {
    let message = move || selection.with(status_message);

    view! {
        {move || message().map(|text| view! { <p class="no-results">{text}</p> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grave_finder_common::Record;

    #[test]
    fn test_message_only_for_no_match() {
        assert_eq!(status_message(&SelectionState::NoMatch), Some("No results found."));
        assert_eq!(status_message(&SelectionState::Idle), None);
        assert_eq!(status_message(&SelectionState::Selected(Record::default())), None);
        assert_eq!(
            status_message(&SelectionState::Candidates(vec![Record::default(), Record::default()])),
            None
        );
    }
}
