//! 同期オーケストレータ
//!
//! リポジトリ参照をローカルパッケージへ同期する。インストール済みか
//! どうかの判定はパッケージディレクトリの有無のみで行う（別台帳は
//! 持たない）。途中で失敗した場合のロールバックも行わず、次回の
//! 同期が続きから修復する。
//!
//! ## 使い方
//!
//! ```ignore
//! use gpi::sync::Synchronizer;
//! use gpi::vcs::GitCli;
//!
//! let vcs = GitCli;
//! let sync = Synchronizer::new(&packages_root, &vcs);
//! let outcome = sync.run(&reference)?;
//!
//! println!("{}: {}", outcome.action.display_name(), outcome.package);
//! ```

mod lock;

pub use lock::SyncLock;

use crate::error::{GpiError, Result};
use crate::package::{locate_entry_point, EntryPoint, LocalPackage};
use crate::repo::{PackageName, RepoReference};
use crate::vcs::VersionControl;
use std::fs;
use std::path::{Path, PathBuf};

/// 同期アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// 新規インストール（clone + checkout）
    Installed,
    /// 既存パッケージの更新（fetch + checkout）
    Updated,
}

impl SyncAction {
    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            SyncAction::Installed => "Installed",
            SyncAction::Updated => "Updated",
        }
    }
}

/// 同期結果
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// 実行されたアクション
    pub action: SyncAction,
    /// パッケージ識別子
    pub package: PackageName,
    /// 配置先ディレクトリ
    pub directory: PathBuf,
    /// 検出されたエントリポイント
    pub entry_point: EntryPoint,
}

/// 同期オーケストレータ
pub struct Synchronizer<'a> {
    packages_root: PathBuf,
    vcs: &'a dyn VersionControl,
}

impl<'a> Synchronizer<'a> {
    pub fn new(packages_root: impl Into<PathBuf>, vcs: &'a dyn VersionControl) -> Self {
        Self {
            packages_root: packages_root.into(),
            vcs,
        }
    }

    /// 参照先リポジトリをローカルパッケージへ同期
    pub fn run(&self, reference: &RepoReference) -> Result<SyncOutcome> {
        // 1. 配置先ルートを確保
        fs::create_dir_all(&self.packages_root)?;

        // 2. 同一パッケージの並行同期を防ぐ（ドロップで解放）
        let _lock = SyncLock::acquire(&self.packages_root, reference.package_name())?;

        let package = LocalPackage::under(&self.packages_root, reference.package_name());

        // 3. ディレクトリの有無でインストール/更新を決定
        let action = if package.is_installed() {
            self.update(reference, package.directory())?;
            SyncAction::Updated
        } else {
            self.install(reference, package.directory())?;
            SyncAction::Installed
        };

        // 4. エントリポイント検出
        let entry_point = locate_entry_point(package.directory()).ok_or_else(|| {
            GpiError::EntryPointNotFound {
                directory: package.directory().to_path_buf(),
            }
        })?;

        Ok(SyncOutcome {
            action,
            package: package.name().clone(),
            directory: package.directory().to_path_buf(),
            entry_point,
        })
    }

    fn install(&self, reference: &RepoReference, directory: &Path) -> Result<()> {
        self.vcs.clone_repo(&reference.clone_url(), directory)?;
        self.vcs.checkout(directory, reference.ref_or_empty())
    }

    fn update(&self, reference: &RepoReference, directory: &Path) -> Result<()> {
        self.vcs.fetch_all(directory)?;
        self.vcs.checkout(directory, reference.ref_or_empty())
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
