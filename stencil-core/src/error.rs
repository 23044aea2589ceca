use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for stencil operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of declaration involved in a name collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Interface,
    Method,
    Property,
    Parameter,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Method => "method",
            Self::Property => "property",
            Self::Parameter => "parameter",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{kind} '{name}' is already declared in '{owner}'")]
    #[diagnostic(
        code(stencil::duplicate_declaration),
        help("use the get-or-create accessor to extend the existing {kind} instead")
    )]
    DuplicateDeclaration {
        kind: DeclarationKind,
        name: String,
        owner: String,
    },

    #[error(
        "placeholder '{placeholder}' not found{}",
        .path.as_ref().map(|p| format!(" in '{}'", p.display())).unwrap_or_default()
    )]
    #[diagnostic(
        code(stencil::missing_placeholder),
        help(
            "the file was edited and its insertion marker removed; restore the line `{token}` where new entries should go"
        )
    )]
    MissingPlaceholder {
        path: Option<PathBuf>,
        placeholder: String,
        token: String,
    },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(stencil::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(stencil::config), help("check the syntax of your stencil.toml"))]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown placeholder '{0}'")]
    #[diagnostic(
        code(stencil::unknown_placeholder),
        help("run `stencil placeholders` to list the known markers")
    )]
    UnknownPlaceholder(String),

    #[error("unknown {what} '{value}'")]
    #[diagnostic(code(stencil::unknown_kind), help("valid values are: {expected}"))]
    UnknownKind {
        what: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate declaration error.
    pub fn duplicate(
        kind: DeclarationKind,
        name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self::DuplicateDeclaration {
            kind,
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// Attach the file path to a [`Error::MissingPlaceholder`] raised on
    /// in-memory text.
    pub fn in_file(self, file: &std::path::Path) -> Self {
        match self {
            Self::MissingPlaceholder {
                path: None,
                placeholder,
                token,
            } => Self::MissingPlaceholder {
                path: Some(file.to_path_buf()),
                placeholder,
                token,
            },
            other => other,
        }
    }

    /// Whether this error only concerns a single artifact, so the rest of a
    /// generation run can continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateDeclaration { .. } | Self::MissingPlaceholder { .. }
        )
    }
}
