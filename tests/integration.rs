//! Integration tests for mdpress.
//!
//! These tests run whole documents through the converter and whole
//! directory trees through the site builder and the binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use mdpress::{convert, Converter, SiteBuilder};
use mdpress_config::Config;
use mdpress_core::DiagnosticKind;

/// Helper to create a file, with parents, under `root`.
fn create_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Helper to collect diagnostic kinds for a document.
fn diagnostics(input: &str) -> Vec<DiagnosticKind> {
    Converter::new()
        .convert(input)
        .diagnostics
        .into_iter()
        .map(|d| d.kind)
        .collect()
}

// =============================================================================
// Document Scenarios
// =============================================================================

#[test]
fn test_heading_document() {
    assert_eq!(convert("# h1\n"), "<article>\n\n<h1>h1</h1>\n\n</article>");
}

#[test]
fn test_two_paragraphs_do_not_share_a_wrapper() {
    let html = convert("test para1\n\ntest para2");
    assert_eq!(
        html,
        "<article>\n\n<p>test para1\n</p>\n\n<p>test para2</p>\n\n</article>"
    );
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn test_missing_separator_renders_literally_with_one_warning() {
    assert_eq!(convert("#h1\n"), "<article>\n\n<p>#h1\n</p>\n\n</article>");
    assert_eq!(diagnostics("#h1\n"), vec![DiagnosticKind::MissingSeparator]);
}

#[test]
fn test_all_heading_levels() {
    for level in 1..=6 {
        let input = format!("{} Title {level}\n", "#".repeat(level));
        let html = convert(&input);
        assert!(
            html.contains(&format!("<h{level}>Title {level}</h{level}>")),
            "{html}"
        );
    }
}

#[test]
fn test_seven_markers_are_paragraph_text() {
    let html = convert("####### Title\n");
    assert!(html.contains("<p>####### Title\n</p>"), "{html}");
    assert!(!html.contains("<h"));
}

#[test]
fn test_emphasis_styles() {
    let html = convert("*one* **two** ***three***");
    assert!(html.contains("<i>one</i>"));
    assert!(html.contains("<b>two</b>"));
    assert!(html.contains("<i><b>three</b></i>"));
}

#[test]
fn test_mismatched_runs_keep_opening_markers() {
    let html = convert("**text* more");
    assert!(html.contains("**text* more"), "{html}");
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
}

#[test]
fn test_hard_breaks() {
    assert!(convert("a  \nb").contains("a<br />\nb"));
    assert!(convert("a   \nb").contains("a<br />\nb"));
    assert!(!convert("a \nb").contains("<br />"));
    assert!(!convert("a\nb").contains("<br />"));
}

#[test]
fn test_blog_post() {
    let input = "# My first post\n\
                 \n\
                 Welcome to *my* blog.  \n\
                 This line follows a **hard break**.\n\
                 \n\
                 ## Second section\n\
                 Closing words with ***style***.\n";
    let expected = "<article>\n\
                    \n<h1>My first post</h1>\n\
                    \n<p>Welcome to <i>my</i> blog.<br />\n\
                    This line follows a <b>hard break</b>.\n\
                    </p>\n\
                    \n<h2>Second section</h2>\n\
                    \n<p>Closing words with <i><b>style</b></i>.\n\
                    </p>\n\
                    \n</article>";
    assert_eq!(convert(input), expected);
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(convert("# T\r\n\r\nx\r\n"), convert("# T\n\nx\n"));
}

#[test]
fn test_every_error_kind_is_recoverable() {
    let cases = [
        ("####### x\n", DiagnosticKind::TooManyMarkers),
        ("#x\n", DiagnosticKind::MissingSeparator),
        ("# x", DiagnosticKind::UnterminatedHeading),
        ("****x", DiagnosticKind::InvalidDelimiterRun),
        ("* x", DiagnosticKind::EmptyOrInvalidEmphasis),
        ("*x** y", DiagnosticKind::DelimiterRunOverflow),
        ("*x", DiagnosticKind::UnterminatedEmphasis),
    ];
    for (input, kind) in cases {
        let conversion = Converter::new().convert(input);
        assert_eq!(
            conversion.diagnostics.first().map(|d| d.kind),
            Some(kind),
            "{input:?}"
        );
        assert!(conversion.html.starts_with("<article>\n"));
        assert!(conversion.html.ends_with("\n</article>"));
    }
}

// =============================================================================
// Site Builder
// =============================================================================

#[test]
fn test_site_mirrors_tree() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    create_file(src.path(), "index.md", "# Home\n");
    create_file(src.path(), "about.md", "About *me*");
    create_file(src.path(), "img/logo.svg", "<svg/>");
    create_file(src.path(), "posts/2024/hello.md", "Hello");
    create_file(src.path(), ".drafts/wip.md", "# wip\n");

    let report = SiteBuilder::new(Config::default())
        .unwrap()
        .build(src.path(), dst.path())
        .unwrap();

    assert_eq!(report.converted, 3);
    assert_eq!(report.copied, 1);
    assert_eq!(report.directories, 4);
    assert!(dst.path().join("index.html").is_file());
    assert!(dst.path().join("about.html").is_file());
    assert!(dst.path().join("img/logo.svg").is_file());
    assert!(dst.path().join("posts/2024/hello.html").is_file());
    assert!(!dst.path().join(".drafts").exists());

    let hello = fs::read_to_string(dst.path().join("posts/2024/hello.html")).unwrap();
    assert_eq!(hello, "<article>\n\n<p>Hello</p>\n\n</article>");
}

#[test]
fn test_site_build_is_repeatable() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    create_file(src.path(), "a.md", "a");

    let builder = SiteBuilder::new(Config::default()).unwrap();
    let first = builder.build(src.path(), dst.path()).unwrap();
    let second = builder.build(src.path(), dst.path()).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn test_binary_converts_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mdpress"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# Title\nbody\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<article>\n\n<h1>Title</h1>\n\n<p>body\n</p>\n\n</article>\n"
    );
}

#[test]
fn test_binary_builds_site() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    create_file(src.path(), "post.md", "#oops\n");

    let output = Command::new(env!("CARGO_BIN_EXE_mdpress"))
        .arg("--src-dir")
        .arg(src.path())
        .arg("--dst-dir")
        .arg(dst.path())
        .args(["--serial", "--container", "main"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let html = fs::read_to_string(dst.path().join("post.html")).unwrap();
    assert_eq!(html, "<main>\n\n<p>#oops\n</p>\n\n</main>");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[WARN]"), "{stderr}");
    assert!(stderr.contains("post.md"), "{stderr}");
}

#[test]
fn test_binary_fails_on_missing_source() {
    let dst = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_mdpress"))
        .arg("--src-dir")
        .arg(dst.path().join("missing"))
        .arg("--dst-dir")
        .arg(dst.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[ERROR]"), "{stderr}");
}
