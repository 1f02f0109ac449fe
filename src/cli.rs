use clap::{Parser, Subcommand};

use crate::commands::{install, list, preview, status, versions};

#[derive(Debug, Parser)]
#[command(name = "gpi")]
#[command(about = "GitHub Package Installer CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// リポジトリをパッケージとしてインストール・更新
    Install(install::Args),

    /// リポジトリ直下の内容を取得前に確認
    Preview(preview::Args),

    /// リポジトリのタグ一覧を表示
    Versions(versions::Args),

    /// インストール状態を表示
    Status(status::Args),

    /// インストール済みパッケージ一覧
    List(list::Args),
}
