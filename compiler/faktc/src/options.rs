//! Compiler option decoding (spec §6.2): the base64(JSON) `sourceSetContext`
//! routing record, plus the `enabled` and `debug` flags.
//!
//! Absence of `sourceSetContext` is the caller's concern to turn into a
//! clean no-op with one warning line (spec §7.4); a present-but-malformed
//! value is always an [`OptionsError`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use fakt_ir::{RoutingRecord, SourceSetRef};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("sourceSetContext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("sourceSetContext is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("sourceSetContext is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct SourceSetDto {
    name: String,
    parents: Vec<String>,
}

impl From<SourceSetDto> for SourceSetRef {
    fn from(dto: SourceSetDto) -> Self {
        SourceSetRef::new(dto.name, dto.parents)
    }
}

#[derive(Deserialize)]
struct RoutingRecordDto {
    #[serde(rename = "compilationName")]
    compilation_name: String,
    #[serde(rename = "targetName")]
    target_name: String,
    #[serde(rename = "platformType")]
    platform_type: String,
    #[serde(rename = "isTest")]
    is_test: bool,
    #[serde(rename = "defaultSourceSet")]
    default_source_set: SourceSetDto,
    #[serde(rename = "allSourceSets")]
    all_source_sets: Vec<SourceSetDto>,
    #[serde(rename = "outputDirectory")]
    output_directory: String,
}

/// Decodes the `sourceSetContext` compiler option value into a
/// [`RoutingRecord`] (spec §6.2). A malformed value — not base64, not
/// UTF-8, or not matching the schema — is an [`OptionsError`].
pub fn decode_routing_record(base64_value: &str) -> Result<RoutingRecord, OptionsError> {
    let bytes = BASE64.decode(base64_value)?;
    let json = String::from_utf8(bytes)?;
    let dto: RoutingRecordDto = serde_json::from_str(&json)?;
    Ok(RoutingRecord {
        compilation_name: dto.compilation_name,
        target_name: dto.target_name,
        platform_kind: dto.platform_type,
        is_test: dto.is_test,
        default_source_set: dto.default_source_set.into(),
        source_sets: dto.all_source_sets.into_iter().map(Into::into).collect(),
        output_dir: std::path::PathBuf::from(dto.output_directory),
    })
}

/// Plugin-level options beyond the routing record (spec §6.2): `enabled`
/// toggles the whole plugin off, `debug` requests verbose telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginOptions {
    pub enabled: bool,
    pub debug: bool,
}

impl PluginOptions {
    /// Builds from raw, possibly-absent option values; missing `enabled`
    /// defaults to `true` (the plugin runs unless explicitly disabled).
    pub fn from_raw(enabled: Option<bool>, debug: Option<bool>) -> Self {
        Self {
            enabled: enabled.unwrap_or(true),
            debug: debug.unwrap_or(false),
        }
    }
}

/// Warns about and discards any compiler option this plugin does not
/// recognize (spec §6.2: "Unknown options are ignored with a warning").
pub fn warn_unknown_options(known: &[&str], supplied: &[&str]) {
    for option in supplied {
        if !known.contains(option) {
            tracing::warn!(option = %option, "unknown compiler option ignored");
        }
    }
}
