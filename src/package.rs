//! ローカルパッケージ
//!
//! パッケージディレクトリの存在がインストール済み判定の唯一の材料。
//! マニフェストやロックファイルのような追加の台帳は持たない。

pub mod entry_point;
pub mod status;

pub use entry_point::{locate_entry_point, EntryPoint};
pub use status::{check_status, InstallState, PackageStatus};

use crate::repo::PackageName;
use crate::vcs::VersionControl;
use std::path::{Path, PathBuf};

/// ローカルパッケージ（識別子と格納ディレクトリの組）
#[derive(Debug, Clone)]
pub struct LocalPackage {
    name: PackageName,
    directory: PathBuf,
}

impl LocalPackage {
    /// 格納ルート直下の識別子ディレクトリとして構成
    pub fn under(packages_root: &Path, name: &PackageName) -> Self {
        Self {
            directory: packages_root.join(name.as_str()),
            name: name.clone(),
        }
    }

    /// パッケージ識別子
    pub fn name(&self) -> &PackageName {
        &self.name
    }

    /// 格納ディレクトリ
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// インストール済みかどうか
    pub fn is_installed(&self) -> bool {
        self.directory.is_dir()
    }

    /// 現在チェックアウト中のバージョン（不明なら "Unknown"）
    pub fn current_version(&self, vcs: &dyn VersionControl) -> String {
        vcs.describe_current_tag(&self.directory)
    }
}
