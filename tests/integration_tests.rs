use anyhow::Result;
use book_etl::{run_books_etl, Book, CliConfig, EtlError, TomlConfig};
use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const BOOKS_CSV: &str = "\
title,authors,description,average_rating,categories,published_date,image_url,isbn,publisher,language_code,num_pages,price
Dune,Frank Herbert,Desert planet.,4.25,Science Fiction,1965-08-01,http://img/dune.jpg,0441013597,Ace,eng,604,9.99
Foo,Bar,,4.5,,,,,,,120,
Le Petit Prince,Antoine de Saint-Exupéry,Un conte poétique.,4.3,Fable,1943,,,Gallimard,fre,96,7.5
";

fn cli_config(source_url: String, output_path: &Path) -> CliConfig {
    CliConfig {
        source_url,
        output_path: output_path.to_str().unwrap().to_string(),
        output_file: "books.json".to_string(),
        strict: false,
        config: None,
        verbose: false,
        json_logs: false,
    }
}

fn read_books(path: &Path) -> Vec<Book> {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[tokio::test]
async fn test_end_to_end_writes_one_book_per_row() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("src").join("data");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(BOOKS_CSV);
    });

    let report = run_books_etl(cli_config(server.url("/books.csv"), &output_dir)).await?;

    api_mock.assert();
    assert_eq!(report.books_written, 3);

    let output_file = output_dir.join("books.json");
    assert_eq!(Path::new(&report.output_path), output_file);

    let books = read_books(&output_file);
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Foo", "Le Petit Prince"]);

    assert_eq!(books[0].year, "1965");
    assert_eq!(books[0].benefits, "Desert planet....");
    assert_eq!(books[0].pages, 604);
    assert_eq!(books[2].year, "1943");
    assert_eq!(books[2].author, "Antoine de Saint-Exupéry");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_default_record_matches_expected_json() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200)
            .body("title,authors,average_rating,num_pages\nFoo,Bar,4.5,120\n");
    });

    let report = run_books_etl(cli_config(server.url("/books.csv"), temp_dir.path())).await?;

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report.output_path)?)?;
    let expected = serde_json::json!([{
        "title": "Foo",
        "author": "Bar",
        "description": "",
        "rating": 4.5,
        "genre": "Fiction",
        "year": "Unknown",
        "benefits": "No benefits listed",
        "imageUrl": "",
        "isbn": "",
        "publisher": "Unknown",
        "language": "English",
        "pages": 120,
        "price": 0.0
    }]);
    assert_eq!(written, expected);

    Ok(())
}

#[tokio::test]
async fn test_output_is_indented_and_keeps_non_ascii() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200).body("title,authors\nCafé,Zoë\n");
    });

    let report = run_books_etl(cli_config(server.url("/books.csv"), temp_dir.path())).await?;

    let text = std::fs::read_to_string(&report.output_path)?;
    assert!(text.starts_with("[\n  {\n    \"title\": \"Café\",\n    \"author\": \"Zoë\","));
    assert!(!text.contains("\\u"));

    Ok(())
}

#[tokio::test]
async fn test_two_runs_produce_identical_files() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200).body(BOOKS_CSV);
    });

    let first = run_books_etl(cli_config(server.url("/books.csv"), temp_dir.path())).await?;
    let first_bytes = std::fs::read(&first.output_path)?;

    let second = run_books_etl(cli_config(server.url("/books.csv"), temp_dir.path())).await?;
    let second_bytes = std::fs::read(&second.output_path)?;

    api_mock.assert_hits(2);
    assert_eq!(first_bytes, second_bytes);

    Ok(())
}

#[tokio::test]
async fn test_not_found_leaves_no_output_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("data");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(404);
    });

    let err = run_books_etl(cli_config(server.url("/books.csv"), &output_dir))
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, EtlError::HttpStatusError { status: 404, .. }));
    assert_ne!(err.severity().exit_code(), 0);
    assert!(!output_dir.join("books.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_failed_run_keeps_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let previous = b"[\"previous run\"]";
    std::fs::write(temp_dir.path().join("books.json"), previous)?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/broken.csv");
        then.status(200).body("title,authors\nFoo,Bar,unexpected\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/down.csv");
        then.status(503);
    });

    let err = run_books_etl(cli_config(server.url("/broken.csv"), temp_dir.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, EtlError::MalformedCsvError { .. }));

    let err = run_books_etl(cli_config(server.url("/down.csv"), temp_dir.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, EtlError::HttpStatusError { status: 503, .. }));

    assert_eq!(std::fs::read(temp_dir.path().join("books.json"))?, previous);

    Ok(())
}

#[tokio::test]
async fn test_invalid_config_fails_before_request() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200).body(BOOKS_CSV);
    });

    let mut config = cli_config(server.url("/books.csv"), temp_dir.path());
    config.output_file = String::new();

    let err = run_books_etl(config).await.unwrap_err();

    assert!(matches!(err, EtlError::InvalidConfigValueError { .. }));
    api_mock.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn test_toml_config_strict_mode_rejects_bad_number() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200)
            .body("title,average_rating\nGood,4.1\nBad,abc\n");
    });

    let toml_for = |strict: bool| {
        format!(
            r#"
[source]
url = "{}"
timeout_seconds = 10

[load]
output_path = "{}"
filename = "catalog.json"

[transform]
strict = {}
"#,
            server.url("/books.csv"),
            output_path,
            strict
        )
    };

    let err = run_books_etl(TomlConfig::from_toml_str(&toml_for(true))?)
        .await
        .unwrap_err();
    assert!(matches!(err, EtlError::TransformError { row: 2, .. }));
    assert!(!temp_dir.path().join("catalog.json").exists());

    let report = run_books_etl(TomlConfig::from_toml_str(&toml_for(false))?).await?;
    assert_eq!(report.books_written, 2);

    let books = read_books(&temp_dir.path().join("catalog.json"));
    assert_eq!(books[0].rating, 4.1);
    assert_eq!(books[1].rating, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_null_markers_and_fractional_pages() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200)
            .body("title,description,published_date,num_pages\nFoo,NaN,NA,120.5\n");
    });

    let report = run_books_etl(cli_config(server.url("/books.csv"), temp_dir.path())).await?;

    let books = read_books(Path::new(&report.output_path));
    assert_eq!(books[0].description, "");
    assert_eq!(books[0].benefits, "No benefits listed");
    assert_eq!(books[0].year, "Unknown");
    assert_eq!(books[0].pages, 120);

    Ok(())
}

#[tokio::test]
async fn test_invalid_utf8_body_fails_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/books.csv");
        then.status(200).body(b"title\nCaf\xff\n");
    });

    let err = run_books_etl(cli_config(server.url("/books.csv"), temp_dir.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, EtlError::CsvError(_)));
    assert!(!temp_dir.path().join("books.json").exists());

    Ok(())
}
