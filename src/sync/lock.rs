//! パッケージ単位の同期ロック
//!
//! 同じパッケージへの並行同期を防ぐため、配置先ルート直下の
//! `.<name>.lock` に対して排他ロックを取る。ドット始まりなので
//! 一覧表示からは除外される。ロックファイル自体は解放後も残す。

use crate::error::Result;
use crate::repo::PackageName;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// 同期中のパッケージを排他する RAII ガード
///
/// ドロップ時にロックを解放する。
pub struct SyncLock {
    file: File,
    path: PathBuf,
}

impl SyncLock {
    /// 排他ロックを取得（解放されるまでブロックする）
    pub fn acquire(packages_root: &Path, name: &PackageName) -> Result<Self> {
        let path = packages_root.join(format!(".{}.lock", name.as_str()));
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        file.lock_exclusive()?;
        Ok(Self { file, path })
    }

    /// ロックファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SyncLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
