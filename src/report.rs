//! 表示状態のテキスト整形

use grave_finder_common::{
    or_not_available, RecordDetail, SelectionState, MULTIPLE_RESULTS_HEADING, NO_RESULTS_MESSAGE,
};

/// 表示状態を端末向けテキストにする
pub fn render_state(state: &SelectionState, image_base: &str) -> String {
    match state {
        SelectionState::Idle => "検索語を入力してください".to_string(),
        SelectionState::NoMatch => NO_RESULTS_MESSAGE.to_string(),
        SelectionState::Candidates(records) => {
            let mut lines = vec![MULTIPLE_RESULTS_HEADING.to_string()];
            for (i, record) in records.iter().enumerate() {
                lines.push(format!("  {}) {}", i + 1, record.display_name()));
            }
            lines.join("\n")
        }
        SelectionState::Selected(record) => {
            render_detail(&RecordDetail::from_record(record, image_base))
        }
    }
}

pub fn render_detail(detail: &RecordDetail) -> String {
    let mut lines = vec![detail.title.clone()];
    for (label, value) in &detail.rows {
        lines.push(format!("  {}: {}", label, value));
    }
    lines.push(format!("  Image: {}", or_not_available(detail.image_url.as_deref())));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use grave_finder_common::Record;

    fn person(first: &str, last: &str) -> Record {
        Record {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_no_match() {
        assert_eq!(render_state(&SelectionState::NoMatch, ""), "No results found.");
    }

    #[test]
    fn test_render_candidates() {
        let state = SelectionState::Candidates(vec![person("John", "Smith"), person("Jane", "Smithson")]);
        let text = render_state(&state, "");
        assert_eq!(
            text,
            "Multiple results found. Please select:\n  1) John Smith\n  2) Jane Smithson"
        );
    }

    #[test]
    fn test_render_selected() {
        let record = Record {
            section: Some("A".into()),
            image_file: Some("jones.jpg".into()),
            ..person("Mary", "Jones")
        };
        let text = render_state(&SelectionState::Selected(record), "/img");
        assert!(text.starts_with("Gravestone Information for Mary Jones"));
        assert!(text.contains("  Section: A"));
        assert!(text.contains("  Birth Date: N/A"));
        assert!(text.ends_with("  Image: /img/jones.jpg"));
    }

    #[test]
    fn test_render_selected_without_image() {
        let text = render_state(&SelectionState::Selected(person("Ada", "Lovelace")), "");
        assert!(text.ends_with("  Image: N/A"));
    }
}
