//! Integration tests for whence


use harness::{TestTree, run_whence};

// ============================================================================
// Path-search mode
// ============================================================================

#[test]
fn test_finds_executable_on_path() {
    let tree = TestTree::new();
    tree.add_file("git.exe", "");
    tree.add_file("git.sh", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["git"]);
    assert!(status.success(), "whence should succeed");
    assert!(stdout.contains("git.exe"), "should find git.exe: {}", stdout);
    assert!(stdout.contains("git.sh"), "should find git.sh: {}", stdout);
}

#[test]
fn test_bare_name_does_not_match_prefixed_names() {
    let tree = TestTree::new();
    tree.add_file("git.exe", "");
    tree.add_file("mygit.exe", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["git"]);
    assert!(status.success());
    assert!(!stdout.contains("mygit.exe"), "anchored match: {}", stdout);
}

#[test]
fn test_exact_flag_disables_extension_wildcard() {
    let tree = TestTree::new();
    tree.add_file("git", "");
    tree.add_file("git.exe", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["git", "--exact", "--all"]);
    assert!(status.success());
    assert!(stdout.contains("git"), "should find the bare file");
    assert!(!stdout.contains("git.exe"), "no wildcard with --exact: {}", stdout);
}

#[test]
fn test_non_executables_need_all_flag() {
    let tree = TestTree::new();
    tree.add_file("note.txt", "hello");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["note"]);
    assert!(!status.success(), "no executable match without --all");
    assert!(stdout.is_empty());

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["note", "--all"]);
    assert!(status.success());
    assert!(stdout.contains("note.txt"));
}

#[test]
fn test_path_mode_does_not_recurse() {
    let tree = TestTree::new();
    tree.add_file("sub/tool.exe", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["tool"]);
    assert!(!status.success());
    assert!(stdout.is_empty(), "path mode is one level deep: {}", stdout);
}

#[test]
fn test_path_mode_scans_multiple_roots() {
    let first = TestTree::new();
    let second = TestTree::new();
    first.add_file("tool.bat", "");
    second.add_file("tool.cmd", "");

    let (stdout, _stderr, status) = run_whence(&[first.path(), second.path()], &["tool"]);
    assert!(status.success());
    assert!(stdout.contains("tool.bat"));
    assert!(stdout.contains("tool.cmd"));
}

#[test]
fn test_first_match_prints_a_single_line() {
    let tree = TestTree::new();
    tree.add_file("a.exe", "");
    tree.add_file("b.exe", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["*.exe", "--first"]);
    assert!(status.success());
    assert_eq!(stdout.lines().count(), 1, "one match only: {}", stdout);
}

// ============================================================================
// Hidden-entry rules
// ============================================================================

#[test]
fn test_hidden_entries_match_by_default() {
    let tree = TestTree::new();
    tree.add_file(".helper.sh", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &[".helper.sh"]);
    assert!(status.success());
    assert!(stdout.contains(".helper.sh"));
}

#[test]
fn test_no_hidden_skips_hidden_entries() {
    let tree = TestTree::new();
    tree.add_file(".helper.sh", "");
    tree.add_file("helper.sh", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["*helper*", "--no-hidden"]);
    assert!(status.success());
    assert!(stdout.contains("helper.sh"));
    assert!(!stdout.contains(".helper.sh"), "hidden skipped: {}", stdout);
}

#[test]
fn test_hidden_only_reports_only_hidden_entries() {
    let tree = TestTree::new();
    tree.add_file(".helper.sh", "");
    tree.add_file("helper.sh", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["*helper*", "--hidden-only"]);
    assert!(status.success());
    assert!(stdout.contains(".helper.sh"));
    assert_eq!(stdout.lines().count(), 1, "only the hidden one: {}", stdout);
}

// ============================================================================
// Global-search mode
// ============================================================================

#[test]
fn test_global_mode_recurses() {
    let tree = TestTree::new();
    tree.add_file("deep/down/tool.exe", "");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, status) = run_whence(&[], &["tool", "-g", &root]);
    assert!(status.success());
    assert!(stdout.contains("tool.exe"));
}

#[test]
fn test_global_mode_matches_directories() {
    let tree = TestTree::new();
    tree.add_dir("toolbox");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, status) = run_whence(&[], &["toolbox", "--exact", "-g", &root]);
    assert!(status.success());
    assert!(stdout.contains("toolbox"), "directories match: {}", stdout);
}

#[test]
fn test_exclude_skips_whole_subtree() {
    let tree = TestTree::new();
    tree.add_file("keep/tool.exe", "");
    tree.add_file("skip/tool.exe", "");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, status) = run_whence(&[], &["tool", "-g", &root, "-X", "skip"]);
    assert!(status.success());
    assert!(stdout.contains("keep"));
    assert!(!stdout.contains("skip"), "excluded subtree: {}", stdout);
}

#[test]
fn test_level_bounds_recursion() {
    let tree = TestTree::new();
    tree.add_file("shallow.exe", "");
    tree.add_file("one/two/deep.exe", "");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, status) = run_whence(&[], &["*.exe", "-g", &root, "-L", "1"]);
    assert!(status.success());
    assert!(stdout.contains("shallow.exe"));
    assert!(!stdout.contains("deep.exe"), "depth bounded: {}", stdout);
}

#[test]
fn test_missing_root_yields_no_matches_without_error() {
    let tree = TestTree::new();
    let missing = tree.path().join("nowhere").to_string_lossy().to_string();

    let (stdout, stderr, status) = run_whence(&[], &["tool", "-g", &missing]);
    assert!(!status.success(), "no matches exits nonzero");
    assert_eq!(status.code(), Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.is_empty(), "missing roots are not errors: {}", stderr);
}

// ============================================================================
// Sorting and output formats
// ============================================================================

#[test]
fn test_sort_by_size_reversed_is_descending() {
    let tree = TestTree::new();
    tree.add_file("small.sh", "x");
    tree.add_file("large.sh", "xxxxxxxxxxxxxxxx");
    tree.add_file("medium.sh", "xxxxxxxx");

    let (stdout, _stderr, status) =
        run_whence(&[tree.path()], &["*.sh", "--sort", "size", "--reverse"]);
    assert!(status.success());
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("large.sh"), "{}", stdout);
    assert!(lines[1].contains("medium.sh"), "{}", stdout);
    assert!(lines[2].contains("small.sh"), "{}", stdout);
}

#[test]
fn test_count_appends_summary_line() {
    let tree = TestTree::new();
    tree.add_file("a.exe", "");
    tree.add_file("b.exe", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["*.exe", "--count"]);
    assert!(status.success());
    assert!(stdout.contains("2 matches"), "{}", stdout);
}

#[test]
fn test_json_output_has_count_and_matches() {
    let tree = TestTree::new();
    tree.add_file("tool.exe", "payload");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["tool", "--json"]);
    assert!(status.success());
    assert!(stdout.contains("\"count\": 1"), "{}", stdout);
    assert!(stdout.contains("\"name\": \"tool.exe\""), "{}", stdout);
    assert!(stdout.contains("\"kind\": \"executable\""), "{}", stdout);
    assert!(stdout.contains("\"size\": 7"), "{}", stdout);
}

#[test]
fn test_csv_output_has_header_and_rows() {
    let tree = TestTree::new();
    tree.add_file("tool.exe", "");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["tool", "--csv"]);
    assert!(status.success());
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("path,name,kind,hidden,readonly,size,modified")
    );
    let row = lines.next().expect("one data row");
    assert!(row.contains("tool.exe,executable,false"), "{}", row);
}

#[test]
fn test_long_output_shows_attributes_and_size() {
    let tree = TestTree::new();
    tree.add_file("tool.exe", "12345");

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["tool", "--long"]);
    assert!(status.success());
    assert!(stdout.starts_with("x--"), "attribute string first: {}", stdout);
    assert!(stdout.contains("5B"), "human size: {}", stdout);
    assert!(stdout.contains("tool.exe"));
}

// ============================================================================
// Regex mode and diagnostics
// ============================================================================

#[test]
fn test_regex_mode() {
    let tree = TestTree::new();
    tree.add_file("tool-v1.exe", "");
    tree.add_file("tool-v22.exe", "");

    let (stdout, _stderr, status) =
        run_whence(&[tree.path()], &["^tool-v.\\.exe$", "--regex"]);
    assert!(status.success());
    assert!(stdout.contains("tool-v1.exe"));
    assert!(!stdout.contains("tool-v22.exe"), "{}", stdout);
}

#[test]
fn test_debug_categories_trace_to_stderr() {
    let tree = TestTree::new();
    tree.add_file("tool.exe", "");

    let (stdout, stderr, status) =
        run_whence(&[tree.path()], &["tool", "--debug", "scan,match"]);
    assert!(status.success());
    assert!(stdout.contains("tool.exe"));
    assert!(stderr.contains("[scan]"), "scan trace: {}", stderr);
    assert!(stderr.contains("[match]"), "match trace: {}", stderr);
}

#[test]
fn test_no_match_exits_one_with_empty_output() {
    let tree = TestTree::new();

    let (stdout, _stderr, status) = run_whence(&[tree.path()], &["missing"]);
    assert_eq!(status.code(), Some(1));
    assert!(stdout.is_empty());
}
