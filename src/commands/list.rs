//! gpi list コマンド
//!
//! インストール済みパッケージの一覧を表示する。

use crate::config::InstallerConfig;
use crate::path_ext::PathExt;
use crate::vcs::{GitCli, VersionControl};
use chrono::{DateTime, Local};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 一覧の1行分
#[derive(Debug, Clone, Serialize)]
struct PackageRow {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<DateTime<Local>>,
    path: PathBuf,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = InstallerConfig::load().map_err(|e| e.to_string())?;
    let vcs = GitCli;
    let rows = collect_packages(&config.packages_root, &vcs);

    if args.json {
        print_json(&rows)?;
    } else {
        print_table(&rows);
    }

    Ok(())
}

/// 配置先ルート直下のパッケージを列挙（名前昇順）
///
/// ドット始まりのエントリ（ロックファイル等）は対象外。
fn collect_packages(packages_root: &Path, vcs: &dyn VersionControl) -> Vec<PackageRow> {
    let mut rows: Vec<PackageRow> = packages_root
        .read_dir_entries()
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| row_for(&path, vcs))
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

fn row_for(directory: &Path, vcs: &dyn VersionControl) -> Option<PackageRow> {
    let name = directory.file_name()?.to_str()?.to_string();
    if name.starts_with('.') {
        return None;
    }

    let modified = std::fs::metadata(directory)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Local>::from);

    Some(PackageRow {
        name,
        version: vcs.describe_current_tag(directory),
        modified,
        path: directory.to_path_buf(),
    })
}

fn print_table(rows: &[PackageRow]) {
    if rows.is_empty() {
        println!("No packages installed");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Version", "Modified", "Path"]);

    for row in rows {
        let modified = row
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let path = row.path.display().to_string();

        table.add_row(vec![
            row.name.as_str(),
            row.version.as_str(),
            modified.as_str(),
            path.as_str(),
        ]);
    }

    println!("{table}");
}

fn print_json(rows: &[PackageRow]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(rows)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize packages: {}", e))
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
