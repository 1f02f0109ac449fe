//! パッケージエントリポイント探索
//!
//! パッケージ直下のみを走査する（再帰しない）。サブディレクトリに
//! 候補があっても対象外。

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// 定数
// ============================================================================

/// エントリポイント候補の拡張子
pub(crate) const ENTRY_EXTENSION: &str = "php";

/// エントリポイントを示すヘッダマーカー（大文字小文字は区別しない）
pub(crate) const ENTRY_MARKER_PATTERN: &str = r"(?i)plugin name:";

/// パッケージのエントリポイントファイル
///
/// パスではなくファイル名のみを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    file_name: String,
}

impl EntryPoint {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// エントリポイントを探索
///
/// 1. 直下の `*.php` をglob順（辞書順）で列挙
/// 2. マーカーを含む最初のファイルを返す（読めないファイルは判定スキップ）
/// 3. マーカーがどこにもなければ列挙順の先頭
/// 4. 候補が1つもなければ None
pub fn locate_entry_point(package_dir: &Path) -> Option<EntryPoint> {
    let candidates = candidate_files(package_dir);
    let marker = Regex::new(ENTRY_MARKER_PATTERN).unwrap();

    for path in &candidates {
        if let Ok(content) = std::fs::read_to_string(path) {
            if marker.is_match(&content) {
                return entry_point_from(path);
            }
        }
    }

    candidates.first().and_then(|path| entry_point_from(path))
}

/// 直下のエントリポイント候補を列挙
///
/// ディレクトリ部はglobエスケープする（`[` などを含むパス対策）。
fn candidate_files(package_dir: &Path) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&package_dir.to_string_lossy()),
        ENTRY_EXTENSION
    );

    match glob::glob(&pattern) {
        Ok(paths) => paths.flatten().filter(|path| path.is_file()).collect(),
        Err(_) => Vec::new(),
    }
}

fn entry_point_from(path: &Path) -> Option<EntryPoint> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(EntryPoint::new)
}
