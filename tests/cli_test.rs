use std::process::{Command, Output};

const DEMO_OUTPUT: &str = "Value is: This is not a # comment\nResult: 15\n";
const PYTHON_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test.py");

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_decomment"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_prints_demo() {
    let output = run(&[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), DEMO_OUTPUT);
}

/// 開啟除錯日誌時 stdout 仍然只有兩行
#[test]
fn test_verbose_demo_keeps_logs_off_stdout() {
    let output = run(&["demo", "--verbose"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), DEMO_OUTPUT);
    assert!(!String::from_utf8(output.stderr).unwrap().contains("Result: 15"));
}

#[test]
fn test_strip_report_goes_to_stderr() {
    let output = run(&["strip", PYTHON_FIXTURE, "--report"]);

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("class TestClass:\n"));
    assert!(stdout.contains(r#"self.value = "This is not a # comment""#));
    assert!(stdout.ends_with("    print(f\"Result: {result}\")\n"));
    assert!(!stdout.contains("docstrings"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(r#""language": "python""#));
    assert!(stderr.contains(r#""docstrings": 3"#));
}

#[test]
fn test_strip_unknown_language_exits_with_config_code() {
    let readme = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    let output = run(&["strip", readme]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
