//! 検索語照合モジュール
//!
//! 入力文字列を正規化して検索語に分割し、姓・名に対する部分一致で
//! レコードを絞り込む。順位付けはせず、データの並び順を保持する。

use crate::record::Record;

/// 正規化済みの検索語
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTerms {
    /// 空または空白のみ（検索なし）
    Empty,
    /// 1語: 姓・名のどちらかに含まれる
    Single(String),
    /// 2語: 姓・名に順不同で振り分けられる
    Pair(String, String),
    /// 3語以上: 照合しない
    TooMany(usize),
}

impl QueryTerms {
    /// 入力文字列を解析
    ///
    /// 前後の空白を除去して小文字化し、半角スペースで分割する。
    /// 連続スペースで生じる空トークンは捨てる。
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        let terms: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();

        match terms.as_slice() {
            [] => QueryTerms::Empty,
            [term] => QueryTerms::Single(term.to_string()),
            [t0, t1] => QueryTerms::Pair(t0.to_string(), t1.to_string()),
            _ => QueryTerms::TooMany(terms.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, QueryTerms::Empty)
    }

    /// レコードが検索語にマッチするか
    pub fn matches(&self, record: &Record) -> bool {
        let first = lowercase_or_empty(record.first_name.as_deref());
        let last = lowercase_or_empty(record.last_name.as_deref());

        match self {
            QueryTerms::Single(term) => first.contains(term.as_str()) || last.contains(term.as_str()),
            QueryTerms::Pair(t0, t1) => {
                (first.contains(t0.as_str()) && last.contains(t1.as_str()))
                    || (first.contains(t1.as_str()) && last.contains(t0.as_str()))
            }
            QueryTerms::Empty | QueryTerms::TooMany(_) => false,
        }
    }
}

fn lowercase_or_empty(value: Option<&str>) -> String {
    value.map(str::to_lowercase).unwrap_or_default()
}

/// マッチしたレコードを元の順序で返す
pub fn find_matches<'a>(records: &'a [Record], raw: &str) -> Vec<&'a Record> {
    let terms = QueryTerms::parse(raw);
    if terms.is_empty() {
        return Vec::new();
    }

    records.iter().filter(|record| terms.matches(record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: &str) -> Record {
        Record {
            first_name: Some(first.into()).filter(|s: &String| !s.is_empty()),
            last_name: Some(last.into()).filter(|s: &String| !s.is_empty()),
            ..Default::default()
        }
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.display_name()).collect()
    }

    fn sample() -> Vec<Record> {
        vec![
            person("John", "Smith"),
            person("Jane", "Smithson"),
            person("James", "Monroe"),
            person("Marilyn", "Monroe"),
            person("Smith", "Adams"),
        ]
    }

    #[test]
    fn test_parse_terms() {
        assert_eq!(QueryTerms::parse(""), QueryTerms::Empty);
        assert_eq!(QueryTerms::parse("   \t "), QueryTerms::Empty);
        assert_eq!(QueryTerms::parse("  Mary "), QueryTerms::Single("mary".into()));
        assert_eq!(
            QueryTerms::parse("John  Smith"),
            QueryTerms::Pair("john".into(), "smith".into())
        );
        assert_eq!(QueryTerms::parse("a b c"), QueryTerms::TooMany(3));
    }

    #[test]
    fn test_single_term_case_insensitive() {
        let records = sample();
        let lower = find_matches(&records, "monroe");
        let upper = find_matches(&records, "MONROE");
        assert_eq!(lower, upper);
        assert_eq!(names(&lower), vec!["James Monroe", "Marilyn Monroe"]);
    }

    #[test]
    fn test_single_term_matches_first_or_last() {
        let records = sample();
        let results = find_matches(&records, "smith");
        assert_eq!(
            names(&results),
            vec!["John Smith", "Jane Smithson", "Smith Adams"]
        );
    }

    #[test]
    fn test_substring_inside_name() {
        let records = sample();
        let results = find_matches(&records, "ril");
        assert_eq!(names(&results), vec!["Marilyn Monroe"]);
    }

    #[test]
    fn test_pair_order_insensitive() {
        let records = sample();
        let forward = find_matches(&records, "John Smith");
        let reverse = find_matches(&records, "Smith John");
        assert_eq!(forward, reverse);
        assert_eq!(names(&forward), vec!["John Smith"]);
    }

    #[test]
    fn test_pair_requires_both_sides() {
        let records = sample();
        // "smith"は名にも姓にも現れるが、もう一方の語が揃わないと不一致
        let results = find_matches(&records, "smith jane");
        assert_eq!(names(&results), vec!["Jane Smithson"]);
        assert!(find_matches(&records, "smith smith").is_empty());
    }

    #[test]
    fn test_three_terms_never_match() {
        let records = vec![person("Mary Ann", "Jones Lee")];
        assert!(find_matches(&records, "mary ann jones").is_empty());
        assert!(find_matches(&records, "a b c").is_empty());
    }

    #[test]
    fn test_missing_names_never_match() {
        let records = vec![
            Record::default(),
            person("", "Jones"),
            person("Mary", ""),
        ];
        assert_eq!(names(&find_matches(&records, "jones")), vec!["Jones"]);
        assert!(find_matches(&records, "mary jones").is_empty());
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let records = sample();
        assert!(find_matches(&records, "").is_empty());
        assert!(find_matches(&records, "    ").is_empty());
    }

    #[test]
    fn test_duplicate_names_kept() {
        let records = vec![person("Ann", "Lee"), person("Ann", "Lee")];
        assert_eq!(find_matches(&records, "ann lee").len(), 2);
    }

    #[test]
    fn test_no_unicode_normalization() {
        let records = vec![person("José", "Núñez")];
        assert_eq!(find_matches(&records, "JOSÉ").len(), 1);
        assert!(find_matches(&records, "jose").is_empty());
    }
}
