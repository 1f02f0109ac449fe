use super::*;
use crate::vcs::mock::{MockVcs, VcsCall};
use tempfile::TempDir;

const MARKER_CONTENT: &str = "<?php\n// Plugin Name: Tool\n";

fn reference(url: &str) -> RepoReference {
    RepoReference::new(url, false, None, None).unwrap()
}

fn reference_at(url: &str, git_ref: &str) -> RepoReference {
    RepoReference::new(url, false, None, Some(git_ref.to_string())).unwrap()
}

// === インストール（新規） ===

#[test]
fn test_run_installs_when_directory_missing() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[("tool.php", MARKER_CONTENT)]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let outcome = sync.run(&reference("https://github.com/acme/tool")).unwrap();

    assert_eq!(outcome.action, SyncAction::Installed);
    assert_eq!(outcome.package.as_str(), "tool");
    assert_eq!(outcome.directory, temp_dir.path().join("tool"));
    assert_eq!(outcome.entry_point.file_name(), "tool.php");
}

#[test]
fn test_install_clones_then_checks_out() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[("tool.php", MARKER_CONTENT)]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    sync.run(&reference_at("https://github.com/acme/tool", "v2.0.0"))
        .unwrap();

    let dest = temp_dir.path().join("tool");
    assert_eq!(
        vcs.calls(),
        vec![
            VcsCall::Clone {
                url: "https://github.com/acme/tool".to_string(),
                destination: dest.clone(),
            },
            VcsCall::Checkout {
                destination: dest,
                git_ref: "v2.0.0".to_string(),
            },
        ]
    );
}

#[test]
fn test_install_without_ref_passes_empty_checkout() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[("tool.php", MARKER_CONTENT)]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    sync.run(&reference("https://github.com/acme/tool")).unwrap();

    let calls = vcs.calls();
    assert!(matches!(
        &calls[1],
        VcsCall::Checkout { git_ref, .. } if git_ref.is_empty()
    ));
}

#[test]
fn test_install_uses_credentialed_clone_url() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[("tool.php", MARKER_CONTENT)]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);
    let reference = RepoReference::new(
        "https://github.com/acme/tool.git",
        true,
        Some("TOK".to_string()),
        None,
    )
    .unwrap();

    sync.run(&reference).unwrap();

    assert!(matches!(
        &vcs.calls()[0],
        VcsCall::Clone { url, .. } if url == "https://TOK@github.com/acme/tool.git"
    ));
}

#[test]
fn test_run_creates_packages_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("nested").join("packages");
    let vcs = MockVcs::new().with_clone_files(&[("tool.php", MARKER_CONTENT)]);
    let sync = Synchronizer::new(&root, &vcs);

    sync.run(&reference("https://github.com/acme/tool")).unwrap();

    assert!(root.is_dir());
}

// === 更新（既存） ===

#[test]
fn test_run_updates_when_directory_exists() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("tool");
    std::fs::create_dir_all(&dest).unwrap();
    std::fs::write(dest.join("tool.php"), MARKER_CONTENT).unwrap();
    let vcs = MockVcs::new();
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let outcome = sync
        .run(&reference_at("https://github.com/acme/tool", "v3.1.0"))
        .unwrap();

    assert_eq!(outcome.action, SyncAction::Updated);
    assert_eq!(
        vcs.calls(),
        vec![
            VcsCall::FetchAll {
                destination: dest.clone(),
            },
            VcsCall::Checkout {
                destination: dest,
                git_ref: "v3.1.0".to_string(),
            },
        ]
    );
}

#[test]
fn test_second_run_with_same_reference_is_an_update() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[("tool.php", MARKER_CONTENT)]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);
    let reference = reference("https://github.com/acme/tool");

    let first = sync.run(&reference).unwrap();
    let second = sync.run(&reference).unwrap();

    assert_eq!(first.action, SyncAction::Installed);
    assert_eq!(second.action, SyncAction::Updated);
}

#[test]
fn test_update_never_clones() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("tool");
    std::fs::create_dir_all(&dest).unwrap();
    std::fs::write(dest.join("tool.php"), MARKER_CONTENT).unwrap();
    let vcs = MockVcs::new();
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    sync.run(&reference("https://github.com/acme/tool")).unwrap();

    assert!(vcs
        .calls()
        .iter()
        .all(|call| !matches!(call, VcsCall::Clone { .. })));
}

// === 失敗時 ===

#[test]
fn test_clone_failure_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_error("remote: repository not found");
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let err = sync
        .run(&reference("https://github.com/acme/tool"))
        .unwrap_err();

    assert!(matches!(
        err,
        GpiError::Clone { output } if output == "remote: repository not found"
    ));
}

#[test]
fn test_fetch_failure_propagates() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("tool")).unwrap();
    let vcs = MockVcs::new().with_fetch_error("could not resolve host");
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let err = sync
        .run(&reference("https://github.com/acme/tool"))
        .unwrap_err();

    assert!(matches!(err, GpiError::Fetch { .. }));
}

#[test]
fn test_checkout_failure_leaves_directory_in_place() {
    // ロールバックはしない。失敗後もディレクトリは残り、
    // 次回の同期は更新扱いで続きから修復する。
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new()
        .with_clone_files(&[("tool.php", MARKER_CONTENT)])
        .with_checkout_error("pathspec 'v9.9.9' did not match");
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let err = sync
        .run(&reference_at("https://github.com/acme/tool", "v9.9.9"))
        .unwrap_err();

    assert!(matches!(
        err,
        GpiError::Checkout { git_ref, .. } if git_ref == "v9.9.9"
    ));
    assert!(temp_dir.path().join("tool").join("tool.php").is_file());
}

#[test]
fn test_missing_entry_point_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[("README.md", "# tool")]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let err = sync
        .run(&reference("https://github.com/acme/tool"))
        .unwrap_err();

    assert!(matches!(
        err,
        GpiError::EntryPointNotFound { directory } if directory == temp_dir.path().join("tool")
    ));
}

// === エントリポイント検出 ===

#[test]
fn test_marker_file_wins_over_glob_order() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = MockVcs::new().with_clone_files(&[
        ("aaa.php", "<?php // helper\n"),
        ("entry.php", MARKER_CONTENT),
    ]);
    let sync = Synchronizer::new(temp_dir.path(), &vcs);

    let outcome = sync.run(&reference("https://github.com/acme/tool")).unwrap();

    assert_eq!(outcome.entry_point.file_name(), "entry.php");
}

// === アクション表示 ===

#[test]
fn test_sync_action_display_name() {
    assert_eq!(SyncAction::Installed.display_name(), "Installed");
    assert_eq!(SyncAction::Updated.display_name(), "Updated");
}
