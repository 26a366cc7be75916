use decomment::config::toml_config::StripFileConfig;
use decomment::utils::validation::Validate;
use decomment::{DecommentError, Language, LocalStorage, StripConfig, StripEngine};
use tempfile::TempDir;

const PYTHON_FIXTURE: &str = include_str!("fixtures/test.py");

fn storage_in(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_strip_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("test.py"), PYTHON_FIXTURE).unwrap();

    let mut config = StripConfig::new("test.py".to_string());
    config.output = Some("clean/test.py".to_string());
    config.validate().unwrap();

    let engine = StripEngine::new(storage_in(&temp_dir));
    let run = engine.run(&config).await.unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("clean/test.py")).unwrap();
    assert_eq!(written, run.text);
    assert!(written.contains(r#"self.value = "This is not a # comment""#));
    assert!(!written.contains("docstring"));

    assert_eq!(run.report.language, Language::Python);
    assert_eq!(run.report.output.as_deref(), Some("clean/test.py"));
    assert_eq!(run.report.bytes_before, PYTHON_FIXTURE.len());
    assert_eq!(run.report.bytes_after, written.len());

    // 原始檔案不變
    let original = std::fs::read_to_string(temp_dir.path().join("test.py")).unwrap();
    assert_eq!(original, PYTHON_FIXTURE);
}

#[tokio::test]
async fn test_strip_in_place_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("script.txt"),
        "--[[ header ]]\nprint('hi') -- greet\n",
    )
    .unwrap();

    let config_path = temp_dir.path().join("decomment.toml");
    tokio::fs::write(&config_path, "[strip]\nlanguage = \"lua\"\nin_place = true\n")
        .await
        .unwrap();
    let file = StripFileConfig::from_file(&config_path).unwrap();

    let config = StripConfig::new("script.txt".to_string())
        .merge_file(&file, None)
        .unwrap();
    config.validate().unwrap();

    let engine = StripEngine::new(storage_in(&temp_dir));
    let run = engine.run(&config).await.unwrap();

    assert_eq!(run.report.language, Language::Lua);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("script.txt")).unwrap(),
        "print('hi')\n"
    );
}

#[tokio::test]
async fn test_strip_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let engine = StripEngine::new(storage_in(&temp_dir));

    let result = engine.run(&StripConfig::new("nope.js".to_string())).await;

    assert!(matches!(result, Err(DecommentError::IoError(_))));
}

#[test]
fn test_strip_unknown_extension_without_language() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("notes.md"), "# title\n").unwrap();
    let engine = StripEngine::new(storage_in(&temp_dir));

    let result = tokio_test::block_on(engine.run(&StripConfig::new("notes.md".to_string())));

    match result {
        Err(e @ DecommentError::UnknownLanguageError { .. }) => assert_eq!(e.exit_code(), 2),
        other => panic!("unexpected result: {:?}", other.map(|run| run.report)),
    }
}
