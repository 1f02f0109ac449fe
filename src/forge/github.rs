//! GitHub APIクライアント
//!
//! WebホストをAPIホストへ置き換えてメタデータを取得する。
//! GitHubはHTTPステータスに依らずエラーを本文で返すことがあるため、
//! 成否の判定は本文ペイロードの形で行う。

use crate::config::HttpConfig;
use crate::error::{GpiError, Result};
use crate::forge::{ForgeApi, RepoEntry};
use crate::repo::RepoReference;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

const API_HOST: &str = "api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const NOT_FOUND_MESSAGE: &str = "Not Found";

/// GitHub APIクライアント
#[derive(Debug)]
pub struct GitHubForge {
    http: Client,
}

impl GitHubForge {
    /// 新しいGitHubForgeを作成
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            http: config.build_client(),
        }
    }

    /// リソースAPI URLを構築
    ///
    /// Webホストを `api.github.com/repos` へ置換し、パス末尾の `.git` を
    /// 除去してからリソース名を連結する:
    /// `https://github.com/u/r.git` -> `https://api.github.com/repos/u/r/contents`
    fn resource_url(reference: &RepoReference, resource: &str) -> String {
        let path = reference.url().path().trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        format!("https://{}/repos{}/{}", API_HOST, path, resource)
    }

    /// リソースを取得し本文をJSONとしてパース
    ///
    /// 1リクエストのみ。接続・タイムアウト系はTransport、
    /// 本文が非JSONならJsonエラーになる。
    async fn fetch_json(&self, reference: &RepoReference, resource: &str) -> Result<Value> {
        let url = Self::resource_url(reference, resource);

        let mut req = self.http.get(&url).header("Accept", ACCEPT_HEADER);

        if let Some(token) = reference.auth_token() {
            req = req.header("Authorization", format!("token {}", token));
        }

        let response = req.send().await?;

        // ステータスコードでは成否を判定しない
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

impl ForgeApi for GitHubForge {
    fn list_contents<'a>(
        &'a self,
        reference: &'a RepoReference,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RepoEntry>>> + Send + 'a>> {
        Box::pin(async move {
            let value = self.fetch_json(reference, "contents").await?;
            parse_contents_payload(value)
        })
    }

    fn list_tags<'a>(
        &'a self,
        reference: &'a RepoReference,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + 'a>> {
        Box::pin(async move {
            let value = self.fetch_json(reference, "tags").await?;
            parse_tags_payload(value)
        })
    }
}

/// エラー形ペイロードの `message` を取り出す
fn error_message(value: &Value) -> Option<&str> {
    value.as_object()?.get("message")?.as_str()
}

/// `/contents` のペイロードをエントリ一覧へ変換
///
/// - `{"message": "Not Found"}` はNotFound
/// - その他のエラー形はメッセージをそのまま載せたForgeエラー
/// - 正常形はエントリの配列（順序保持、フィルタなし）
fn parse_contents_payload(value: Value) -> Result<Vec<RepoEntry>> {
    if let Some(message) = error_message(&value) {
        if message == NOT_FOUND_MESSAGE {
            return Err(GpiError::NotFound);
        }
        return Err(GpiError::Forge {
            message: message.to_string(),
        });
    }

    let entries: Vec<RepoEntry> = serde_json::from_value(value)?;
    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// `/tags` のペイロードをタグ名一覧へ変換
///
/// null・空配列・エラー形はすべて「タグなし」。
/// 空のタグ一覧を成功として返すことはない。
fn parse_tags_payload(value: Value) -> Result<Vec<String>> {
    match value {
        Value::Array(items) if !items.is_empty() => {
            let tags: Vec<TagEntry> = serde_json::from_value(Value::Array(items))?;
            Ok(tags.into_iter().map(|t| t.name).collect())
        }
        _ => Err(GpiError::NoTags),
    }
}
