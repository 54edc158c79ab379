//! Tests for the command-capture actions

use super::helpers::parse_and_execute;
use crate::executor::ExecError;

#[test]
fn test_capture_files_command_output() {
    let report = parse_and_execute(r#"capture(cmd="echo collected")"#).unwrap();

    assert_eq!(report.evidence.files.len(), 1);
    let file = &report.evidence.files[0];
    assert_eq!(file.name, "echo_collected.txt");
    assert_eq!(file.contents, b"collected\n");
}

#[test]
fn test_capture_honors_file_name() {
    let report =
        parse_and_execute(r#"capture(cmd="echo collected", file_name="notes.txt")"#).unwrap();

    assert_eq!(report.evidence.files[0].name, "notes.txt");
}

#[test]
fn test_capture_keeps_failing_command_output() {
    // A non-zero exit is evidence, not an error
    let source = r#"capture(cmd="echo broken; exit 3", file_name="broken.txt")"#;
    let report = parse_and_execute(source).unwrap();

    assert_eq!(report.evidence.files[0].contents, b"broken\n");
}

#[test]
fn test_capture_includes_stderr() {
    let source = r#"capture(cmd="echo oops 1>&2", file_name="err.txt")"#;
    let report = parse_and_execute(source).unwrap();

    assert_eq!(report.evidence.files[0].contents, b"oops\n");
}

#[test]
fn test_capture_requires_cmd() {
    let err = parse_and_execute("capture()").unwrap_err();
    assert!(matches!(
        err,
        ExecError::Directive { source, .. }
            if matches!(*source, ExecError::InvalidArguments { .. })
    ));
}

#[test]
fn test_kubectl_requires_args() {
    let err = parse_and_execute("kubectl()").unwrap_err();
    assert!(matches!(
        err,
        ExecError::Directive { source, .. }
            if matches!(*source, ExecError::InvalidArguments { .. })
    ));
}

#[test]
fn test_multiple_captures_accumulate_in_order() {
    let source = r#"
capture(cmd="echo one", file_name="one.txt")
capture(cmd="echo two", file_name="two.txt")
"#;
    let report = parse_and_execute(source).unwrap();

    let names: Vec<&str> = report
        .evidence
        .files
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["one.txt", "two.txt"]);
}
