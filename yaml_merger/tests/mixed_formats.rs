//! Merging layers written in different document formats.

use anyhow::{Result, ensure};
use parking_lot::Mutex;
use std::sync::Arc;
use test_helpers::documents::DocumentDir;
use yaml_merger::diagnostics::silent_reporter;
use yaml_merger::{Diagnostic, DocumentFormat, Pipeline, Value, parse_as, render_document};

#[test]
fn yaml_json_and_toml_layers_fold_into_one_document() -> Result<()> {
    let dir = DocumentDir::new()?;
    let base = dir.write(
        "base.yaml",
        "service:\n  name: api\n  replicas: 1\nfeatures:\n  - auth\n",
    )?;
    let team = dir.write(
        "team.json",
        r#"{"service": {"replicas": 3}, "features": ["billing"]}"#,
    )?;
    let host = dir.write(
        "host.toml",
        "features = [\"tracing\"]\n\n[service]\nregion = \"eu-west-1\"\n",
    )?;

    let merged = Pipeline::with_reporter(silent_reporter()).merge_files([&base, &team, &host])?;

    let expected = parse_as(
        DocumentFormat::Json,
        &base,
        r#"{
            "service": {"name": "api", "replicas": 3, "region": "eu-west-1"},
            "features": ["auth", "billing", "tracing"]
        }"#,
    )?;
    ensure!(merged.as_ref() == Some(&expected), "unexpected merge {merged:?}");
    Ok(())
}

#[test]
fn rendered_yaml_parses_back_to_the_merged_value() -> Result<()> {
    let dir = DocumentDir::new()?;
    let base = dir.write("base.yaml", "name: Alex\nwork:\n  - id: 1\n    role: dev\n")?;
    let overlay = dir.write("overlay.yml", "work:\n  id: 1\n  role: lead\n")?;

    let Some(merged) = Pipeline::new().merge_files([&base, &overlay])? else {
        anyhow::bail!("expected a merged document");
    };
    let rendered = render_document(&merged, DocumentFormat::Yaml)?;
    let reparsed = parse_as(DocumentFormat::Yaml, &base, &rendered)?;

    ensure!(reparsed == merged, "round trip changed the value:\n{rendered}");
    let work = merged.get("work").and_then(Value::as_sequence).map(<[_]>::len);
    ensure!(work == Some(2), "two shared keys append rather than merge");
    Ok(())
}

#[test]
fn missing_layers_are_reported_not_fatal() -> Result<()> {
    let dir = DocumentDir::new()?;
    let base = dir.write("base.yaml", "level: 1\n")?;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let pipeline = Pipeline::with_reporter(Arc::new(move |diagnostic: &Diagnostic<'_>| {
        if let Diagnostic::MissingDocument { path } = diagnostic {
            sink.lock().push(path.to_path_buf());
        }
    }));

    let absent = dir.path().join("host.yaml");
    let merged = pipeline.merge_files([&base, &absent])?;

    ensure!(merged.and_then(|value| value.get("level").cloned()) == Some(Value::from(1)));
    let missing = seen.lock().clone();
    ensure!(missing == [absent]);
    Ok(())
}
