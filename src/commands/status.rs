//! gpi status コマンド
//!
//! リポジトリがローカルにインストール済みかどうかを表示する。
//! 判定はパッケージディレクトリの有無のみで、ネットワークには出ない。

use crate::config::InstallerConfig;
use crate::package::{check_status, InstallState, PackageStatus};
use crate::repo::RepoReference;
use crate::vcs::{GitCli, UNKNOWN_VERSION};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Repository URL (e.g. https://github.com/owner/repo)
    pub url: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = InstallerConfig::load().map_err(|e| e.to_string())?;
    let reference =
        RepoReference::new(&args.url, false, None, None).map_err(|e| e.to_string())?;

    let vcs = GitCli;
    let status = check_status(&config.packages_root, &reference, &vcs);

    if args.json {
        serde_json::to_string_pretty(&status)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize status: {}", e))?;
    } else {
        println!("{}", format_line(reference.package_name().as_str(), &status));
    }

    Ok(())
}

fn format_line(name: &str, status: &PackageStatus) -> String {
    match status.status {
        InstallState::Installed => {
            let version = status.version.as_deref().unwrap_or(UNKNOWN_VERSION);
            format!("{}: installed (version: {})", name, version)
        }
        InstallState::NotInstalled => format!("{}: not installed", name),
    }
}
