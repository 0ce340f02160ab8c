//! File-level conversions between binary and YAML schemas.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use codec::CodecLimits;
use tracing::{debug, warn};

use crate::paths::{derive_output, expect_schema_name, SchemaFormat};

/// The outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_written: usize,
}

/// Converts a binary schema at `input` into YAML under `output`.
pub fn deconstruct_file(input: &Path, output: &Path, limits: &CodecLimits) -> Result<Conversion> {
    convert(input, output, SchemaFormat::Binary, |path| {
        let bytes = fs::read(path).with_context(|| format!("read schema {}", path.display()))?;
        debug!(bytes = bytes.len(), "decoding binary schema");
        Ok(text::bin_to_yaml(&bytes, limits)?.into_bytes())
    })
}

/// Converts a YAML schema at `input` into binary under `output`.
pub fn reconstruct_file(input: &Path, output: &Path, limits: &CodecLimits) -> Result<Conversion> {
    convert(input, output, SchemaFormat::Yaml, |path| {
        let yaml =
            fs::read_to_string(path).with_context(|| format!("read schema {}", path.display()))?;
        debug!(bytes = yaml.len(), "encoding yaml schema");
        Ok(text::yaml_to_bin(&yaml, limits)?)
    })
}

// The output file is only created once the whole input converted.
fn convert<F>(input: &Path, output: &Path, format: SchemaFormat, render: F) -> Result<Conversion>
where
    F: FnOnce(&Path) -> Result<Vec<u8>>,
{
    if !input.exists() {
        bail!("path to schema does not exist: {}", input.display());
    }
    let name = expect_schema_name(input, format)?;
    let rendered = render(input)?;

    let target = derive_output(output, &name.converted_file_name());
    if target.ignored_file_name {
        warn!(
            output = %output.display(),
            "file path specified; ignoring supplied filename"
        );
    }
    fs::write(&target.path, &rendered)
        .with_context(|| format!("write {}", target.path.display()))?;

    Ok(Conversion {
        input: input.to_path_buf(),
        output: target.path,
        bytes_written: rendered.len(),
    })
}
