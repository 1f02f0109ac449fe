//! バージョン管理ツール抽象化
//!
//! リポジトリ実体の取得・更新は外部のgitツールへ委譲する。
//! テスト時に MockVcs を注入してツール呼び出しをモック化できる。

use crate::error::{GpiError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// タグが特定できないときの表示値
pub const UNKNOWN_VERSION: &str = "Unknown";

/// バージョン管理ツール操作を抽象化するトレイト
///
/// 本番コードでは GitCli を使用する。各操作は外部ツールの終了コードで
/// 成否を判定し、失敗時は取り込んだ出力をそのままエラーに載せる。
pub trait VersionControl: Send + Sync {
    /// リポジトリを destination へ複製
    ///
    /// - 非0終了は出力つきの Clone エラー
    /// - 失敗時に作られた中途ディレクトリの後始末はしない
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()>;

    /// 全リモートから更新を取得（作業ディレクトリは destination）
    fn fetch_all(&self, destination: &Path) -> Result<()>;

    /// 指定refをチェックアウト
    ///
    /// - 空refは成功扱いのno-op（ツールは起動しない）
    fn checkout(&self, destination: &Path, git_ref: &str) -> Result<()>;

    /// 現在チェックアウト中のコミットに最も近いタグ
    ///
    /// - `destination/.git` がない、またはタグが取れない場合は "Unknown"
    fn describe_current_tag(&self, destination: &Path) -> String;
}

/// 外部gitコマンドによる本番実装
///
/// 引数はすべてargvとして個別に渡す。シェル文字列は組み立てないので
/// ref・パス・URLのクォートは不要。
pub struct GitCli;

impl VersionControl for GitCli {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()> {
        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(destination)
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            Err(GpiError::Clone {
                output: collect_output(&output),
            })
        }
    }

    fn fetch_all(&self, destination: &Path) -> Result<()> {
        let output = Command::new("git")
            .args(["fetch", "--all"])
            .current_dir(destination)
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            Err(GpiError::Fetch {
                output: collect_output(&output),
            })
        }
    }

    fn checkout(&self, destination: &Path, git_ref: &str) -> Result<()> {
        if git_ref.is_empty() {
            return Ok(());
        }

        let output = Command::new("git")
            .args(["checkout", git_ref])
            .current_dir(destination)
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            Err(GpiError::Checkout {
                git_ref: git_ref.to_string(),
                output: collect_output(&output),
            })
        }
    }

    fn describe_current_tag(&self, destination: &Path) -> String {
        if !destination.join(".git").is_dir() {
            return UNKNOWN_VERSION.to_string();
        }

        let result = Command::new("git")
            .args(["describe", "--tags", "--abbrev=0"])
            .current_dir(destination)
            .output();

        match result {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let tag = stdout.lines().next().unwrap_or("").trim();
                if tag.is_empty() {
                    UNKNOWN_VERSION.to_string()
                } else {
                    tag.to_string()
                }
            }
            _ => UNKNOWN_VERSION.to_string(),
        }
    }
}

/// 外部ツールの出力を1ブロックへまとめる
///
/// gitは失敗理由をstderrへ書くためstderrを先に、stdoutを後に置く。
/// 内容は改変せずそのまま返す。
fn collect_output(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut parts = Vec::new();
    if !stderr.trim().is_empty() {
        parts.push(stderr.trim().to_string());
    }
    if !stdout.trim().is_empty() {
        parts.push(stdout.trim().to_string());
    }
    parts.join("\n")
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "vcs_test.rs"]
mod tests;
