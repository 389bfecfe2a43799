//! Document parsing and rendering coverage.

use super::*;
use anyhow::{Result, ensure};
use rstest::rstest;
use std::path::PathBuf;
use test_helpers::documents::DocumentDir;

#[rstest]
#[case("config.yaml", DocumentFormat::Yaml)]
#[case("config.YML", DocumentFormat::Yaml)]
#[case("config.json", DocumentFormat::Json)]
#[case("nested/dir/config.toml", DocumentFormat::Toml)]
#[case("config", DocumentFormat::Yaml)]
#[case("config.ini", DocumentFormat::Yaml)]
fn format_follows_extension(#[case] path: &str, #[case] expected: DocumentFormat) {
    assert_eq!(DocumentFormat::from_path(Path::new(path)), expected);
}

#[test]
fn unknown_format_name_is_rejected() {
    let err = "xml".parse::<DocumentFormat>().expect_err("xml is not supported");
    assert_eq!(err.to_string(), "unknown document format 'xml'");
}

#[rstest]
#[case("config.yaml", "")]
#[case("config.json", "  \n")]
#[case("config.toml", "\n\n")]
fn blank_documents_are_null(#[case] path: &str, #[case] contents: &str) -> Result<()> {
    ensure!(parse_document(Path::new(path), contents)?.is_null());
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_yes_remains_a_string() -> Result<()> {
    let value = parse_document(Path::new("config.yaml"), "recipient: yes\nenabled: true")?;
    ensure!(value.get("recipient") == Some(&Value::from("yes")), "yes was coerced");
    ensure!(value.get("enabled") == Some(&Value::from(true)), "true was not a bool");
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
#[case::tilde("age: ~\n")]
#[case::lowercase("age: null\n")]
#[case::capitalised("age: Null\n")]
#[case::uppercase("age: NULL\n")]
#[case::empty("age:\n")]
fn yaml_null_spellings_parse_as_null(#[case] contents: &str) -> Result<()> {
    let value = parse_document(Path::new("local.yaml"), contents)?;
    ensure!(value.get("age") == Some(&Value::Null), "got {value:?}");
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
#[case("age: 'null'\n", "null")]
#[case("age: \"~\"\n", "~")]
fn yaml_quoted_nulls_stay_strings(#[case] contents: &str, #[case] text: &str) -> Result<()> {
    let value = parse_document(Path::new("local.yaml"), contents)?;
    ensure!(value.get("age") == Some(&Value::from(text)), "got {value:?}");
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_scalar_keys_become_strings() -> Result<()> {
    let value = parse_document(Path::new("ports.yaml"), "80: http\n443: https\n")?;
    ensure!(value.get("80") == Some(&Value::from("http")), "integer key lost");
    ensure!(value.get("443") == Some(&Value::from("https")), "integer key lost");
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
#[case("recipient: first\nrecipient: second")]
#[case("recipient: [")]
fn yaml_parse_failures_name_the_document(#[case] contents: &str) {
    let err = parse_document(Path::new("broken.yaml"), contents).expect_err("expected parse failure");
    assert!(matches!(err, MergerError::Document { .. }));
    assert!(err.to_string().contains("broken.yaml"), "message: {err}");
}

#[test]
fn json_documents_keep_key_order() -> Result<()> {
    let value = parse_document(Path::new("a.json"), r#"{"b": 1, "a": [null, 2.5]}"#)?;
    let keys: Vec<&str> = value
        .as_mapping()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    ensure!(keys == ["b", "a"], "unexpected order {keys:?}");
    Ok(())
}

#[cfg(feature = "toml")]
#[test]
fn toml_tables_become_mappings() -> Result<()> {
    let value = parse_document(
        Path::new("a.toml"),
        "title = \"demo\"\n[server]\nport = 8080\nhosts = [\"a\", \"b\"]\n",
    )?;
    ensure!(value.pointer(&["server", "port"]) == Some(&Value::from(8080)));
    ensure!(value.get("title").and_then(Value::as_str) == Some("demo"));
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_rendering_parses_back_to_the_same_value() -> Result<()> {
    let source = "name: Bobby\nwork:\n  employed: true\nhobbies:\n- basketball\n- spearfishing\nage: 20\n";
    let value = parse_document(Path::new("in.yaml"), source)?;
    let rendered = render_document(&value, DocumentFormat::Yaml)?;
    ensure!(parse_document(Path::new("out.yaml"), &rendered)? == value);
    ensure!(
        rendered.find("name") < rendered.find("age"),
        "key order not preserved:\n{rendered}"
    );
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_rendering_of_record_lists_parses_back() -> Result<()> {
    let source = r#"{
        "work": [
            {"name": "Google", "position": "Engineer"},
            {"name": "Initech", "position": "Staff", "remote": null}
        ],
        "age": 20
    }"#;
    let value = parse_as(DocumentFormat::Json, Path::new("in.json"), source)?;
    let rendered = render_document(&value, DocumentFormat::Yaml)?;
    let reparsed = parse_document(Path::new("out.yaml"), &rendered)?;
    ensure!(reparsed == value, "round trip changed the value:\n{rendered}");
    Ok(())
}

#[test]
fn json_rendering_is_pretty_and_newline_terminated() -> Result<()> {
    let value: Value = [("a", 1)].into_iter().collect();
    let rendered = render_document(&value, DocumentFormat::Json)?;
    ensure!(rendered == "{\n  \"a\": 1\n}\n", "got {rendered:?}");
    Ok(())
}

#[cfg(feature = "toml")]
#[test]
fn toml_rendering_rejects_top_level_sequences() {
    let value = Value::Sequence(vec![Value::from(1)]);
    let err = render_document(&value, DocumentFormat::Toml).expect_err("toml needs a table");
    assert!(matches!(err, MergerError::Render { format: "toml", .. }));
}

#[test]
fn load_document_reads_from_disk() -> Result<()> {
    let dir = DocumentDir::new()?;
    let path = dir.write("base.json", r#"{"debug": false}"#)?;
    ensure!(load_document(&path)?.get("debug") == Some(&Value::from(false)));
    Ok(())
}

#[test]
fn load_document_reports_unreadable_paths() {
    let path = PathBuf::from("definitely/not/here.yaml");
    let err = load_document(&path).expect_err("missing file must fail");
    assert!(matches!(err, MergerError::Document { ref path, .. } if path.ends_with("here.yaml")));
}

#[cfg(feature = "toml")]
#[rstest]
#[case("ts = 1979-05-27T07:32:00Z\n", "1979-05-27T07:32:00Z")]
#[case("ts = 1979-05-27\n", "1979-05-27")]
fn toml_datetimes_become_strings(#[case] contents: &str, #[case] stamp: &str) -> Result<()> {
    let value = parse_document(Path::new("a.toml"), contents)?;
    ensure!(value.get("ts") == Some(&Value::from(stamp)), "got {value:?}");

    let json = render_document(&value, DocumentFormat::Json)?;
    ensure!(!json.contains("$__toml_private_datetime"), "wrapper leaked: {json}");
    let toml = render_document(&value, DocumentFormat::Toml)?;
    ensure!(parse_document(Path::new("b.toml"), &toml)? == value, "got {toml}");
    Ok(())
}

#[test]
fn single_entry_mappings_are_not_mistaken_for_datetimes() -> Result<()> {
    let value = parse_document(Path::new("a.json"), r#"{"$__toml_private_datetime": 1}"#)?;
    ensure!(value.get("$__toml_private_datetime") == Some(&Value::from(1)));
    Ok(())
}
