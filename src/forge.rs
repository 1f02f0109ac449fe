//! フォージ別APIクライアント
//!
//! GitHub等のホスティングサービスのメタデータAPIを叩く層。
//! リポジトリの実体取得はここではなく `vcs` が外部gitツールで行う。

pub mod github;

pub use github::GitHubForge;

use crate::config::HttpConfig;
use crate::error::{GpiError, Result};
use crate::repo::RepoReference;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// フォージ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForgeKind {
    GitHub,
    GitLab,
    Bitbucket,
}

impl ForgeKind {
    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            ForgeKind::GitHub => "GitHub",
            ForgeKind::GitLab => "GitLab",
            ForgeKind::Bitbucket => "Bitbucket",
        }
    }

    /// ホスト名から種別を判定（`www.` プレフィックスは許容）
    pub fn from_host(host: &str) -> Option<ForgeKind> {
        match host.to_ascii_lowercase().as_str() {
            "github.com" | "www.github.com" => Some(ForgeKind::GitHub),
            "gitlab.com" | "www.gitlab.com" => Some(ForgeKind::GitLab),
            "bitbucket.org" | "www.bitbucket.org" => Some(ForgeKind::Bitbucket),
            _ => None,
        }
    }

    /// URLから種別を判定。未知のホストはリクエスト前に検証エラー
    pub fn from_url(url: &Url) -> Result<ForgeKind> {
        let host = url.host_str().unwrap_or("");
        Self::from_host(host)
            .ok_or_else(|| GpiError::Validation(format!("Unknown forge host: {}", host)))
    }
}

impl std::fmt::Display for ForgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// リポジトリ直下の1エントリ
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// エントリ種別（APIの `type` フィールドの値そのまま）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
            EntryKind::Symlink => "symlink",
            EntryKind::Submodule => "submodule",
            EntryKind::Other => "other",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// フォージ別APIクライアント trait
///
/// 取得系は1リクエスト1操作。リトライもキャッシュも行わず、
/// 失敗はその場でエラーとして返す。
pub trait ForgeApi: Send + Sync + std::fmt::Debug {
    /// リポジトリ直下のエントリ一覧を取得（API返却順を保持）
    fn list_contents<'a>(
        &'a self,
        reference: &'a RepoReference,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RepoEntry>>> + Send + 'a>>;

    /// タグ名一覧を取得（API返却順を保持）
    fn list_tags<'a>(
        &'a self,
        reference: &'a RepoReference,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + 'a>>;
}

/// フォージクライアントファクトリー
///
/// HTTP設定を保持し、参照先URLのホストに応じたクライアントを生成する。
pub struct ForgeApiFactory {
    config: HttpConfig,
}

impl ForgeApiFactory {
    /// 新しいファクトリーを作成
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// デフォルト設定でファクトリーを作成
    pub fn with_defaults() -> Self {
        Self::new(HttpConfig::default())
    }

    /// 参照先に応じたクライアントを生成
    ///
    /// 未対応のフォージはリクエストを出す前に検証エラーになる。
    pub fn create(&self, reference: &RepoReference) -> Result<Box<dyn ForgeApi>> {
        match ForgeKind::from_url(reference.url())? {
            ForgeKind::GitHub => Ok(Box::new(GitHubForge::new(&self.config))),
            other => Err(GpiError::Validation(format!(
                "{} repositories are not yet supported",
                other
            ))),
        }
    }
}

impl Default for ForgeApiFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
