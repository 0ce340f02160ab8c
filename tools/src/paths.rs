//! Schema file naming rules and output path derivation.

use std::fmt;
use std::path::{Path, PathBuf};

const NAME_PREFIX: &str = "UserGameStatsSchema_";

/// The two on-disk forms of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Binary,
    Yaml,
}

impl SchemaFormat {
    /// The extension written for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Binary => "bin",
            Self::Yaml => "yaml",
        }
    }

    /// The format a conversion from `self` produces.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Binary => Self::Yaml,
            Self::Yaml => Self::Binary,
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "bin" => Some(Self::Binary),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A validated `UserGameStatsSchema_<digits>.<ext>` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName {
    app_id: String,
    format: SchemaFormat,
}

impl SchemaName {
    /// The decimal app id embedded in the name.
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    #[must_use]
    pub const fn format(&self) -> SchemaFormat {
        self.format
    }

    /// The file name this schema converts to.
    #[must_use]
    pub fn converted_file_name(&self) -> String {
        format!(
            "{NAME_PREFIX}{}.{}",
            self.app_id,
            self.format.counterpart().extension()
        )
    }
}

/// The reason a path is not a schema file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The path has no UTF-8 file name component.
    NoFileName { path: PathBuf },
    /// The name does not follow `UserGameStatsSchema_<digits>.<ext>`.
    NonConforming { name: String },
    /// The name is valid but for the other format.
    WrongFormat {
        name: String,
        expected: SchemaFormat,
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileName { path } => write!(f, "{} has no file name", path.display()),
            Self::NonConforming { name } => write!(
                f,
                "file name {name} does not conform to {NAME_PREFIX}<app id>.<bin|yaml>"
            ),
            Self::WrongFormat { name, expected } => {
                write!(f, "file name {name} must end in .{expected}")
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Validates the file name of `path`.
pub fn parse_schema_name(path: &Path) -> Result<SchemaName, NameError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| NameError::NoFileName {
            path: path.to_path_buf(),
        })?;
    let non_conforming = || NameError::NonConforming {
        name: name.to_owned(),
    };
    let rest = name.strip_prefix(NAME_PREFIX).ok_or_else(non_conforming)?;
    let (app_id, ext) = rest.split_once('.').ok_or_else(non_conforming)?;
    if app_id.is_empty() || !app_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_conforming());
    }
    let format = SchemaFormat::from_extension(ext).ok_or_else(non_conforming)?;
    Ok(SchemaName {
        app_id: app_id.to_owned(),
        format,
    })
}

/// Validates `path` as a schema file name of the given format.
pub fn expect_schema_name(path: &Path, expected: SchemaFormat) -> Result<SchemaName, NameError> {
    let name = parse_schema_name(path)?;
    if name.format == expected {
        Ok(name)
    } else {
        Err(NameError::WrongFormat {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            expected,
        })
    }
}

/// Where a converted file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    pub path: PathBuf,
    /// True when `--output` named a file whose name was replaced.
    pub ignored_file_name: bool,
}

/// Places `file_name` inside `output` when it is a directory, otherwise next
/// to it.
#[must_use]
pub fn derive_output(output: &Path, file_name: &str) -> OutputPath {
    if output.is_dir() {
        OutputPath {
            path: output.join(file_name),
            ignored_file_name: false,
        }
    } else {
        OutputPath {
            path: output.with_file_name(file_name),
            ignored_file_name: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conforming_names() {
        let name = parse_schema_name(Path::new("dir/UserGameStatsSchema_480.bin")).unwrap();
        assert_eq!(name.app_id(), "480");
        assert_eq!(name.format(), SchemaFormat::Binary);
        assert_eq!(name.converted_file_name(), "UserGameStatsSchema_480.yaml");

        let name = parse_schema_name(Path::new("UserGameStatsSchema_7.yml")).unwrap();
        assert_eq!(name.format(), SchemaFormat::Yaml);
        assert_eq!(name.converted_file_name(), "UserGameStatsSchema_7.bin");
    }

    #[test]
    fn rejects_nonconforming_names() {
        for name in [
            "UserGameStatsSchema_.bin",
            "UserGameStatsSchema_48a.bin",
            "UserGameStatsSchema_480.json",
            "UserGameStatsSchema_480",
            "usergamestatsschema_480.bin",
            "Schema_480.bin",
            "UserGameStatsSchema_480.bin.bak",
        ] {
            assert!(
                matches!(
                    parse_schema_name(Path::new(name)),
                    Err(NameError::NonConforming { .. })
                ),
                "{name} accepted"
            );
        }
    }

    #[test]
    fn wrong_format_reported() {
        let err = expect_schema_name(Path::new("UserGameStatsSchema_1.yaml"), SchemaFormat::Binary)
            .unwrap_err();
        assert!(matches!(
            err,
            NameError::WrongFormat {
                expected: SchemaFormat::Binary,
                ..
            }
        ));
        assert!(err.to_string().contains(".bin"));
    }

    #[test]
    fn output_in_directory() {
        let out = derive_output(Path::new("."), "UserGameStatsSchema_1.yaml");
        assert_eq!(out.path, Path::new("./UserGameStatsSchema_1.yaml"));
        assert!(!out.ignored_file_name);
    }

    #[test]
    fn output_file_name_replaced() {
        let out = derive_output(
            Path::new("no-such-dir-for-test/custom.yaml"),
            "UserGameStatsSchema_1.yaml",
        );
        assert_eq!(
            out.path,
            Path::new("no-such-dir-for-test/UserGameStatsSchema_1.yaml")
        );
        assert!(out.ignored_file_name);
    }
}
