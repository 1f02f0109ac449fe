//! インストール状態レポート

use crate::package::LocalPackage;
use crate::repo::RepoReference;
use crate::vcs::VersionControl;
use serde::Serialize;
use std::path::Path;

/// インストール状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallState {
    Installed,
    NotInstalled,
}

/// 状態レポート
///
/// versionはインストール済みの場合のみ持つ。タグが特定できなくても
/// "Unknown" が入るため、インストール済みでversionなしにはならない。
#[derive(Debug, Clone, Serialize)]
pub struct PackageStatus {
    pub status: InstallState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// 参照先パッケージの状態を取得
///
/// 検証済みの参照に対しては失敗しない。
pub fn check_status(
    packages_root: &Path,
    reference: &RepoReference,
    vcs: &dyn VersionControl,
) -> PackageStatus {
    let package = LocalPackage::under(packages_root, reference.package_name());

    if !package.is_installed() {
        return PackageStatus {
            status: InstallState::NotInstalled,
            version: None,
        };
    }

    PackageStatus {
        status: InstallState::Installed,
        version: Some(package.current_version(vcs)),
    }
}
