//! gpi versions コマンド
//!
//! リポジトリのタグ一覧を表示する。

use crate::config::InstallerConfig;
use crate::forge::ForgeApiFactory;
use crate::repo::RepoReference;
use clap::Parser;

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

    // 2. タグ一覧を取得（API返却順のまま。タグなしはエラー）
    let factory = ForgeApiFactory::with_defaults();
    let client = factory.create(&reference).map_err(|e| e.to_string())?;
    let tags = client
        .list_tags(&reference)
        .await
        .map_err(|e| e.to_string())?;

    // 3. 出力
    if args.json {
        serde_json::to_string_pretty(&tags)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize tags: {}", e))?;
    } else {
        for tag in &tags {
            println!("{tag}");
        }
    }

    Ok(())
}
