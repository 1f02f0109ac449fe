//! テスト用モックVCS

use super::*;
use std::path::PathBuf;
use std::sync::Mutex;

/// 記録された呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Clone { url: String, destination: PathBuf },
    FetchAll { destination: PathBuf },
    Checkout { destination: PathBuf, git_ref: String },
    Describe { destination: PathBuf },
}

/// テスト用モックVCS
///
/// 呼び出しを記録し、設定された結果を返す。clone成功時は destination を
/// 実ディレクトリとして作成し、登録されたファイルを書き込む
/// （エントリポイント探索を実走させるため）。
pub struct MockVcs {
    calls: Mutex<Vec<VcsCall>>,
    clone_error: Option<String>,
    fetch_error: Option<String>,
    checkout_error: Option<String>,
    clone_files: Vec<(String, String)>,
    current_tag: String,
}

impl MockVcs {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            clone_error: None,
            fetch_error: None,
            checkout_error: None,
            clone_files: Vec::new(),
            current_tag: UNKNOWN_VERSION.to_string(),
        }
    }

    /// clone成功時に書き込むファイルを登録
    pub fn with_clone_files(mut self, files: &[(&str, &str)]) -> Self {
        self.clone_files = files
            .iter()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect();
        self
    }

    /// cloneを失敗させる（outputはツール出力として載る）
    pub fn with_clone_error(mut self, output: &str) -> Self {
        self.clone_error = Some(output.to_string());
        self
    }

    /// fetchを失敗させる
    pub fn with_fetch_error(mut self, output: &str) -> Self {
        self.fetch_error = Some(output.to_string());
        self
    }

    /// checkoutを失敗させる
    pub fn with_checkout_error(mut self, output: &str) -> Self {
        self.checkout_error = Some(output.to_string());
        self
    }

    /// describeが返すタグを設定
    pub fn with_current_tag(mut self, tag: &str) -> Self {
        self.current_tag = tag.to_string();
        self
    }

    /// 記録された呼び出し一覧
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: VcsCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for MockVcs {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()> {
        self.record(VcsCall::Clone {
            url: url.to_string(),
            destination: destination.to_path_buf(),
        });

        if let Some(output) = &self.clone_error {
            return Err(GpiError::Clone {
                output: output.clone(),
            });
        }

        std::fs::create_dir_all(destination)?;
        for (name, content) in &self.clone_files {
            std::fs::write(destination.join(name), content)?;
        }
        Ok(())
    }

    fn fetch_all(&self, destination: &Path) -> Result<()> {
        self.record(VcsCall::FetchAll {
            destination: destination.to_path_buf(),
        });

        match &self.fetch_error {
            Some(output) => Err(GpiError::Fetch {
                output: output.clone(),
            }),
            None => Ok(()),
        }
    }

    fn checkout(&self, destination: &Path, git_ref: &str) -> Result<()> {
        self.record(VcsCall::Checkout {
            destination: destination.to_path_buf(),
            git_ref: git_ref.to_string(),
        });

        // 空refはno-op契約のまま成功
        if git_ref.is_empty() {
            return Ok(());
        }

        match &self.checkout_error {
            Some(output) => Err(GpiError::Checkout {
                git_ref: git_ref.to_string(),
                output: output.clone(),
            }),
            None => Ok(()),
        }
    }

    fn describe_current_tag(&self, destination: &Path) -> String {
        self.record(VcsCall::Describe {
            destination: destination.to_path_buf(),
        });
        self.current_tag.clone()
    }
}
