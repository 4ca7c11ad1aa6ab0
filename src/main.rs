use anyhow::Context;
use clap::Parser;
use grave_finder::{check, cli, config, dataset, interactive, report};
use grave_finder_common::{Event, RecordStore, SearchSession};
use cli::{Cli, Commands};
use config::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, json } => {
            let store = open_store(&config, cli.dataset.as_deref())?;
            let text = Commands::query_text(&query);
            let session = SearchSession::new().apply(&Event::QueryChanged(text), &store);

            if json {
                println!("{}", serde_json::to_string_pretty(&session.selection)?);
            } else {
                println!("{}", report::render_state(&session.selection, &config.image_base));
            }
        }

        Commands::Interactive => {
            println!("🪦 grave-finder - 対話検索\n");
            let store = open_store(&config, cli.dataset.as_deref())?;
            interactive::run_interactive(&store, &config.image_base)?;
        }

        Commands::Check { images, json } => {
            let store = open_store(&config, cli.dataset.as_deref())?;
            let result = check::check_store(&store, images.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("🪦 grave-finder - データ点検\n");
                check::print_report(&store, &result);
            }
        }

        Commands::Config { set_dataset, set_image_base, show } => {
            let mut config = config;

            if let Some(path) = set_dataset {
                config.set_dataset(path)?;
                println!("✔ データファイルを設定しました");
            }

            if let Some(base) = set_image_base {
                config.set_image_base(base)?;
                println!("✔ 画像のベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  データファイル: {}",
                    config
                        .dataset_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!(
                    "  画像ベースURL: {}",
                    if config.image_base.is_empty() { "(なし)" } else { &config.image_base }
                );
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config, flag: Option<&Path>) -> anyhow::Result<RecordStore> {
    let path = config.resolve_dataset(flag)?;
    let store = dataset::load_store(&path)
        .with_context(|| format!("load {}", path.display()))?;
    Ok(store)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
