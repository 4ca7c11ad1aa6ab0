//! Gravestone Search Common Library
//!
//! CLIとWeb(WASM)で共有される型と検索ロジック

pub mod error;
pub mod record;
pub mod matcher;
pub mod selection;
pub mod detail;

pub use error::{Error, Result};
pub use record::{ColumnMap, Record, RecordStore};
pub use matcher::{find_matches, QueryTerms};
pub use selection::{reduce, Event, SearchSession, SelectionState};
pub use detail::{
    image_url, or_not_available, RecordDetail, MULTIPLE_RESULTS_HEADING, NOT_AVAILABLE,
    NO_RESULTS_MESSAGE,
};
