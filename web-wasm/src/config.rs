//! 配信先の設定（ビルド時に固定）

/// 墓所データCSVのURL
pub const DATASET_URL: &str = "/data/graves.csv";

/// 画像アセットのベースURL（`GRAVE_FINDER_PUBLIC_URL`、未指定なら空）
pub const PUBLIC_URL: &str = match option_env!("GRAVE_FINDER_PUBLIC_URL") {
    Some(url) => url,
    None => "",
};
