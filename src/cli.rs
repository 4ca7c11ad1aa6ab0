use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grave-finder")]
#[command(about = "墓所データ検索ツール（Gravestone Search）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データファイル（CSV / xlsx）。省略時は環境変数・設定ファイルを使用
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 名前で検索して結果を表示
    Search {
        /// 検索語（姓・名、2語まで）
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// 表示状態をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に検索
    Interactive,

    /// データを点検（姓名なし・画像欠落）
    Check {
        /// 画像フォルダ（指定時は画像ファイルの存在を確認）
        #[arg(long)]
        images: Option<PathBuf>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// データファイルを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// 画像のベースURLを設定
        #[arg(long)]
        set_image_base: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 検索語を1つの文字列に連結
    pub fn query_text(query: &[String]) -> String {
        query.join(" ")
    }
}
