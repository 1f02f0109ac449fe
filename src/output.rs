//! コマンド出力の整形

use crate::sync::SyncOutcome;
use owo_colors::OwoColorize;

/// 同期完了サマリ
///
/// 見出し行とインデント付き詳細行から成る。
pub struct CommandSummary {
    pub headline: String,
    pub details: Vec<String>,
}

impl CommandSummary {
    pub fn from_outcome(outcome: &SyncOutcome) -> Self {
        Self {
            headline: format!(
                "{} {} '{}'",
                "✓".green(),
                outcome.action.display_name(),
                outcome.package
            ),
            details: vec![
                format!("Entry point: {}", outcome.entry_point),
                format!("Location: {}", outcome.directory.display()),
            ],
        }
    }

    pub fn print(&self) {
        println!("{}", self.headline);
        for line in &self.details {
            println!("  {line}");
        }
    }
}
