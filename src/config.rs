//! HTTP設定とインストーラ設定

use crate::env::EnvVar;
use crate::error::{GpiError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "gpi-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 設定ファイルの内容（~/.gpi/config.toml）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// パッケージ格納ディレクトリ
    pub packages_dir: Option<PathBuf>,
    /// プライベートリポジトリ用トークン
    pub token: Option<String>,
}

/// 実効インストーラ設定
///
/// 優先順位: 環境変数 > 設定ファイル > デフォルト
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// パッケージ格納ディレクトリ（インストール済み判定の唯一の台帳）
    pub packages_root: PathBuf,
    /// 設定ファイル由来のトークン
    token: Option<String>,
}

impl InstallerConfig {
    /// デフォルトパス（~/.gpi/config.toml）から読み込む
    pub fn load() -> Result<Self> {
        let home = EnvVar::get("HOME")
            .ok_or_else(|| GpiError::Config("HOME environment variable not set".to_string()))?;
        let home = PathBuf::from(home);
        let file = Self::read_file(&home.join(".gpi").join("config.toml"))?;
        Ok(Self::resolve(file, home.join(".gpi").join("packages")))
    }

    /// 指定パスから読み込む（テスト用の注入点）
    pub fn load_from(path: &Path, default_root: PathBuf) -> Result<Self> {
        let file = Self::read_file(path)?;
        Ok(Self::resolve(file, default_root))
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GpiError::Config(format!("{}: {}", path.display(), e)))
    }

    fn resolve(file: ConfigFile, default_root: PathBuf) -> Self {
        let packages_root = EnvVar::packages_dir()
            .or(file.packages_dir)
            .unwrap_or(default_root);
        Self {
            packages_root,
            token: file.token.filter(|t| !t.is_empty()),
        }
    }

    /// トークン解決（優先順位: 明示指定 > 設定ファイル > GITHUB_TOKEN）
    pub fn resolve_token(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.clone())
            .or_else(EnvVar::forge_token)
    }
}
