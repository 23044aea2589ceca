//! Registration of generated classes in the import aggregator.

use std::{fmt, path::Path, str::FromStr};

use stencil_codegen::{Placeholder, Splice, SpliceOutcome, splice_file};
use stencil_core::{Error, Result, Storage, to_camel_case};

/// Which registry of the import aggregator a class is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorKind {
    Controller,
    Service,
    Directive,
    Filter,
}

impl AggregatorKind {
    pub fn placeholder(&self) -> Placeholder {
        match self {
            Self::Controller => Placeholder::Controller,
            Self::Service => Placeholder::Service,
            Self::Directive => Placeholder::Directive,
            Self::Filter => Placeholder::Filter,
        }
    }
}

impl fmt::Display for AggregatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder().name())
    }
}

impl FromStr for AggregatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "controller" => Ok(Self::Controller),
            "service" => Ok(Self::Service),
            "directive" => Ok(Self::Directive),
            "filter" => Ok(Self::Filter),
            _ => Err(Error::UnknownKind {
                what: "aggregator kind",
                value: s.to_string(),
                expected: "controller, service, directive, filter",
            }),
        }
    }
}

/// The two entries registering `class_name` in the aggregator.
///
/// `import_dir` is the module path of the class's directory as seen from
/// the aggregator file.
pub fn aggregator_entries(class_name: &str, import_dir: &str, kind: AggregatorKind) -> [Splice; 2] {
    let camel = to_camel_case(class_name);
    let instance = match camel.strip_suffix("Filter") {
        Some(stem) if !stem.is_empty() => stem,
        _ => camel.as_str(),
    };
    [
        Splice::new(
            Placeholder::Import,
            format!("import {{ {class_name} }} from \"{import_dir}/{class_name}\";"),
        ),
        Splice::new(kind.placeholder(), format!("{instance}: {class_name},")),
    ]
}

/// Splice the import line and the registry entry for `class_name` into the
/// aggregator at `aggregator_path`, in one read and one write.
pub fn register_in_aggregator(
    storage: &dyn Storage,
    aggregator_path: &Path,
    class_name: &str,
    import_dir: &str,
    kind: AggregatorKind,
) -> Result<Vec<SpliceOutcome>> {
    let entries = aggregator_entries(class_name, import_dir, kind);
    tracing::debug!(class = class_name, %kind, "registering in aggregator");
    splice_file(storage, aggregator_path, &entries)
}
