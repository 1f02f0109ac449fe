//! gpi install コマンド
//!
//! リポジトリをローカルパッケージとして同期する。既にインストール
//! 済みなら更新になる。

use crate::config::InstallerConfig;
use crate::output::CommandSummary;
use crate::repo::RepoReference;
use crate::sync::Synchronizer;
use crate::vcs::GitCli;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

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

    /// Tag or branch to check out after syncing
    #[arg(long)]
    pub version: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    // 1. 設定読み込みとトークン解決
    let config = InstallerConfig::load().map_err(|e| e.to_string())?;
    let token = config.resolve_token(args.token);

    // 2. 参照を検証（ネットワークより前に失敗させる）
    let reference = RepoReference::new(&args.url, args.private, token, args.version)
        .map_err(|e| e.to_string())?;

    // 3. スピナーを回しつつ同期
    let spinner = sync_spinner(format!("Syncing '{}'...", reference.package_name()));
    let vcs = GitCli;
    let sync = Synchronizer::new(&config.packages_root, &vcs);
    let result = sync.run(&reference);
    spinner.finish_and_clear();

    // 4. サマリ出力
    let outcome = result.map_err(|e| e.to_string())?;
    CommandSummary::from_outcome(&outcome).print();

    Ok(())
}

fn sync_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
