use std::path::PathBuf;

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// パッケージ格納ディレクトリの上書き指定
    pub const PACKAGES_DIR: &'static str = "GPI_PACKAGES_DIR";

    /// プライベートリポジトリ用トークンのフォールバック
    pub const FORGE_TOKEN: &'static str = "GITHUB_TOKEN";

    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// `GPI_PACKAGES_DIR` が指すディレクトリ
    pub fn packages_dir() -> Option<PathBuf> {
        Self::get(Self::PACKAGES_DIR).map(PathBuf::from)
    }

    /// `GITHUB_TOKEN` のトークン
    pub fn forge_token() -> Option<String> {
        Self::get(Self::FORGE_TOKEN)
    }
}
