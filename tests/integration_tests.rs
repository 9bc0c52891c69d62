use anyhow::Result;
use oracle::{Command, LocalStorage, NoProgress, OracleEngine, OracleError, Outcome, Settings};
use regex::Regex;
use std::path::Path;
use tempfile::TempDir;

const LINKS: &str = r#"{
  "socialMediaLinks": [
    { "name": "Google", "url": "https://google.com/search?q={query}" },
    { "name": "Bing", "url": "https://www.bing.com/search?q={query}" },
    { "name": "LinkedIn", "url": "https://www.linkedin.com/search/results/all/?keywords={query}" }
  ]
}"#;

fn setup(links: Option<&str>) -> Result<(TempDir, Settings)> {
    let temp_dir = TempDir::new()?;
    let links_path = temp_dir.path().join("links.json");
    if let Some(content) = links {
        std::fs::write(&links_path, content)?;
    }
    let settings = Settings::new(links_path, temp_dir.path().join("results"));
    Ok((temp_dir, settings))
}

fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[tokio::test]
async fn test_find_end_to_end() -> Result<()> {
    let (temp_dir, settings) = setup(Some(LINKS))?;
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    let outcome = engine.run(Command::Find { name: "John Doe".to_string() }).await?;

    let query_dir = temp_dir.path().join("results/Results-John_Doe");
    let names = file_names(&query_dir)?;
    assert_eq!(names.len(), 1);

    let pattern = Regex::new(r"^Results-\d{2}-\d{2}-\d{4}_\d{2}-\d{2}\.txt$")?;
    assert!(pattern.is_match(&names[0]), "unexpected file name {}", names[0]);
    assert_eq!(outcome, Outcome::Written(vec![query_dir.join(&names[0])]));

    let text = std::fs::read_to_string(query_dir.join(&names[0]))?;
    assert!(text.starts_with("+------------------------+\n|     Search Results     |\n"));
    assert!(text.contains("Google              \nhttps://google.com/search?q=John+Doe\n\n"));
    assert!(text.contains("https://www.linkedin.com/search/results/all/?keywords=John+Doe"));
    assert!(text.ends_with("\n+------------------------+\n"));
    Ok(())
}

#[tokio::test]
async fn test_summary_end_to_end() -> Result<()> {
    let (temp_dir, settings) = setup(Some(LINKS))?;
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    engine.run(Command::Summary { name: "Ada Lovelace".to_string() }).await?;

    let query_dir = temp_dir.path().join("results/Results-Ada_Lovelace");
    let names = file_names(&query_dir)?;
    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("Results-"));
    assert!(names[1].starts_with("Summary-"));

    let summary = std::fs::read_to_string(query_dir.join(&names[1]))?;
    let expected_breakdown = "\
Breakdown by platform:
----------------------
Google               1 link(s)
Bing                 1 link(s)
LinkedIn             1 link(s)
";
    assert!(summary.contains("Total links generated: 3\n"));
    assert!(summary.contains(expected_breakdown));
    Ok(())
}

#[tokio::test]
async fn test_toml_links_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let links_path = temp_dir.path().join("links.toml");
    std::fs::write(
        &links_path,
        r#"
[[socialMediaLinks]]
name = "GitHub"
url = "https://github.com/search?q={query}&type=users"
"#,
    )?;
    let settings = Settings::new(&links_path, temp_dir.path().join("results"));
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    let paths = engine.find("Grace Hopper").await?;

    let text = std::fs::read_to_string(&paths[0])?;
    assert!(text.contains("https://github.com/search?q=Grace+Hopper&type=users"));
    Ok(())
}

#[tokio::test]
async fn test_missing_links_file_creates_no_output() -> Result<()> {
    let (temp_dir, settings) = setup(None)?;
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    let err = engine.run(Command::Find { name: "John Doe".to_string() }).await.unwrap_err();

    assert!(matches!(err, OracleError::ConfigNotFound { .. }));
    assert!(!temp_dir.path().join("results").exists());
    Ok(())
}

#[tokio::test]
async fn test_invalid_links_file_creates_no_output() -> Result<()> {
    let (temp_dir, settings) = setup(Some(r#"{"socialMediaLinks": "#))?;
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    let err = engine.summary("John Doe").await.unwrap_err();

    assert!(matches!(err, OracleError::ConfigInvalid { .. }));
    assert!(!temp_dir.path().join("results").exists());
    Ok(())
}

#[tokio::test]
async fn test_delete_without_results_is_noop() -> Result<()> {
    let (temp_dir, settings) = setup(None)?;
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    let outcome = engine.run(Command::Delete).await?;

    assert_eq!(outcome, Outcome::NothingToPurge(temp_dir.path().join("results")));
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_every_query_dir() -> Result<()> {
    let (temp_dir, settings) = setup(Some(LINKS))?;
    let engine = OracleEngine::new(&settings, LocalStorage::new(), NoProgress);

    engine.find("John Doe").await?;
    engine.summary("Jane Roe").await?;
    assert_eq!(
        file_names(&temp_dir.path().join("results"))?,
        vec!["Results-Jane_Roe".to_string(), "Results-John_Doe".to_string()]
    );

    let outcome = engine.run(Command::Delete).await?;

    assert_eq!(outcome, Outcome::Purged(temp_dir.path().join("results")));
    assert!(!temp_dir.path().join("results").exists());
    Ok(())
}
