//! リポジトリ参照とパッケージ識別子
//!
//! CLIから受け取ったURLを検証済みの参照へ変換する共通パイプライン。
//! 検証はI/Oより前にここで完結させる。
//!
//! ## 使い方
//!
//! ```ignore
//! use gpi::repo::RepoReference;
//!
//! let reference =
//!     RepoReference::new("https://github.com/acme/My-Tool.git", false, None, None)?;
//! assert_eq!(reference.package_name().as_str(), "my-tool");
//! ```
//!
//! ## 識別子の導出規則
//!
//! 1. URLパスの末尾スラッシュを無視する
//! 2. 最後の `/` 区切りセグメントを取り出す
//! 3. 末尾の `.git` を1つだけ除去する（大文字小文字を区別）
//! 4. 小文字化する

use crate::error::{GpiError, Result};
use std::fmt;
use url::Url;

/// パッケージ識別子（パッケージディレクトリ名そのもの）
///
/// URLのbasenameのみから導出するため、オーナーが異なっていても
/// basenameが同じリポジトリは同一パッケージに別名化される。
/// 2つ目の同名リポジトリの同期は既存パッケージの更新として動く。
/// これは登録簿を持たないファイルシステム台帳方式の意図した帰結。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 検証済みリポジトリ参照
///
/// URL・可視性・トークン・チェックアウト対象refを1つに束ねる。
/// 生成に成功した時点でURLは整形式であり、識別子も導出済み。
#[derive(Clone)]
pub struct RepoReference {
    url: Url,
    private: bool,
    token: Option<String>,
    requested_ref: Option<String>,
    package_name: PackageName,
}

impl RepoReference {
    /// 新しい参照を検証付きで作成
    ///
    /// 空文字列のトークン・refは未指定として正規化する。
    pub fn new(
        url: &str,
        private: bool,
        token: Option<String>,
        requested_ref: Option<String>,
    ) -> Result<Self> {
        let url = parse_repo_url(url)?;
        let package_name = derive_package_name(&url)?;

        Ok(Self {
            url,
            private,
            token: token.filter(|t| !t.is_empty()),
            requested_ref: requested_ref.filter(|r| !r.is_empty()),
            package_name,
        })
    }

    /// 参照先URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 導出済みパッケージ識別子
    pub fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    /// プライベートリポジトリかどうか
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// API認証に使うトークン（privateかつトークンありの場合のみ）
    pub fn auth_token(&self) -> Option<&str> {
        if self.private {
            self.token.as_deref()
        } else {
            None
        }
    }

    /// チェックアウト対象のref（タグ・ブランチ）
    pub fn requested_ref(&self) -> Option<&str> {
        self.requested_ref.as_deref()
    }

    /// チェックアウト用ref（未指定は空文字列 = checkoutはno-op）
    pub fn ref_or_empty(&self) -> &str {
        self.requested_ref().unwrap_or("")
    }

    /// 外部ツールに渡すclone用URL
    ///
    /// privateかつトークンありの場合のみauthority部へ注入する:
    /// `scheme://TOKEN@host/...`
    pub fn clone_url(&self) -> String {
        if let Some(token) = self.auth_token() {
            let mut url = self.url.clone();
            if url.set_username(token).is_ok() {
                return url.to_string();
            }
        }
        self.url.to_string()
    }
}

// トークンをログへ流出させないため、Debugは内容を伏せる
impl fmt::Debug for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoReference")
            .field("url", &self.url.as_str())
            .field("private", &self.private)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("requested_ref", &self.requested_ref)
            .field("package_name", &self.package_name)
            .finish()
    }
}

/// URLを検証付きでパース
///
/// 1. 空入力を拒否
/// 2. `url::Url` として整形式であること
/// 3. スキームは http / https のみ
/// 4. ホストが空でないこと
fn parse_repo_url(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GpiError::Validation("empty URL".to_string()));
    }

    let url =
        Url::parse(input).map_err(|e| GpiError::Validation(format!("{}: {}", input, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(GpiError::Validation(format!(
                "Unsupported scheme: {}",
                scheme
            )))
        }
    }

    if url.host_str().map_or(true, |h| h.is_empty()) {
        return Err(GpiError::Validation(format!("Missing host: {}", input)));
    }

    Ok(url)
}

/// URLパスからパッケージ識別子を導出
fn derive_package_name(url: &Url) -> Result<PackageName> {
    let basename = url
        .path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    let basename = basename.strip_suffix(".git").unwrap_or(basename);
    let name = basename.to_lowercase();

    if name.is_empty() {
        return Err(GpiError::Validation(format!(
            "No repository name in URL path: {}",
            url
        )));
    }

    Ok(PackageName(name))
}

#[cfg(test)]
#[path = "repo_test.rs"]
mod tests;

#[cfg(test)]
#[path = "repo_proptests.rs"]
mod proptests;
