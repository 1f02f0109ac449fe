//! gpi preview コマンド
//!
//! インストールせずにリポジトリ直下の内容を一覧する。

use crate::config::InstallerConfig;
use crate::forge::{ForgeApiFactory, RepoEntry};
use crate::repo::RepoReference;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Repository URL (e.g. https://github.com/owner/repo)
    pub url: String,

    /// Treat the repository as private (send the auth token)
    #[arg(long)]
    pub private: bool,

    /// Auth token for private repositories (falls back to config file, then GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    // 1. トークン解決と参照検証
    let config = InstallerConfig::load().map_err(|e| e.to_string())?;
    let token = config.resolve_token(args.token);
    let reference =
        RepoReference::new(&args.url, args.private, token, None).map_err(|e| e.to_string())?;

    // 2. フォージAPIで直下のエントリ一覧を取得（API返却順のまま）
    let factory = ForgeApiFactory::with_defaults();
    let client = factory.create(&reference).map_err(|e| e.to_string())?;
    let entries = client
        .list_contents(&reference)
        .await
        .map_err(|e| e.to_string())?;

    // 3. 出力
    if args.json {
        print_json(&entries)?;
    } else {
        print_table(&entries);
    }

    Ok(())
}

fn print_table(entries: &[RepoEntry]) {
    if entries.is_empty() {
        println!("Repository is empty");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Type"]);

    for entry in entries {
        table.add_row(vec![entry.name.as_str(), entry.kind.as_str()]);
    }

    println!("{table}");
}

fn print_json(entries: &[RepoEntry]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(entries)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize entries: {}", e))
}
