//! YAML support backed by `serde-saphyr`.

use serde_saphyr::Options;

use crate::value::Value;

/// Parse YAML into a [`Value`] using strict boolean semantics, so `yes` and
/// `on` stay strings.
pub(super) fn parse(contents: &str) -> Result<Value, serde_saphyr::Error> {
    serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
}

pub(super) fn render(value: &Value) -> Result<String, String> {
    serde_saphyr::to_string(value).map_err(|err| err.to_string())
}
