//! Constructor dependency injection.

use std::{path::Path, str::FromStr};

use stencil_core::{Error, Result, relative_import_path, to_camel_case};

use crate::model::{FileModel, ImportKind, Parameter, Property};

/// A dependency to inject into a class constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injectable {
    pub name: String,
    pub ty: String,
    /// Project path of the module declaring `ty`, or the module specifier
    /// itself for library injectables. No import is added without it.
    pub path: Option<String>,
    /// Library injectables keep their name verbatim (`$scope`) and their
    /// path is not made relative.
    pub is_lib: bool,
    pub import_kind: ImportKind,
}

impl Injectable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            path: None,
            is_lib: false,
            import_kind: ImportKind::Module,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn lib(mut self) -> Self {
        self.is_lib = true;
        self
    }

    pub fn with_import_kind(mut self, kind: ImportKind) -> Self {
        self.import_kind = kind;
        self
    }

    /// Name of the constructor parameter.
    pub fn instance_name(&self) -> String {
        if self.is_lib {
            self.name.clone()
        } else {
            to_camel_case(&self.name)
        }
    }

    fn import_path(&self, destination: &Path) -> Option<String> {
        let path = self.path.as_deref().filter(|p| !p.is_empty())?;
        if self.is_lib {
            Some(path.to_string())
        } else {
            Some(relative_import_path(destination, Path::new(path)))
        }
    }
}

/// Parses `name:Type[:path]`. A name starting with `$` is a library
/// injectable.
impl FromStr for Injectable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let (Some(name), Some(ty)) = (parts.next(), parts.next()) else {
            return Err(Error::UnknownKind {
                what: "injectable",
                value: s.to_string(),
                expected: "name:Type or name:Type:path",
            });
        };
        if name.is_empty() || ty.is_empty() {
            return Err(Error::UnknownKind {
                what: "injectable",
                value: s.to_string(),
                expected: "name:Type or name:Type:path",
            });
        }

        let mut injectable = Self::new(name, ty);
        if name.starts_with('$') {
            injectable = injectable.lib();
        }
        if let Some(path) = parts.next() {
            injectable = injectable.at(path);
        }
        Ok(injectable)
    }
}

/// Inject `injectables` into the main class of `file`.
///
/// Each distinct name becomes a private constructor parameter property and
/// its type is imported from `path` (relative to `destination`, the
/// directory the file is written to). The static `$inject` property lists
/// the instance names in order.
pub fn inject(file: &mut FileModel, injectables: &[Injectable], destination: &Path) -> Result<()> {
    let mut names: Vec<String> = Vec::new();

    for injectable in injectables {
        let instance = injectable.instance_name();
        if names.contains(&instance) {
            tracing::debug!(name = %instance, "already injected");
            continue;
        }

        file.main_class_mut()
            .constructor_mut()
            .add_parameter(Parameter::new(&instance, &injectable.ty).private())?;

        if let Some(import_path) = injectable.import_path(destination) {
            file.add_import([injectable.ty.as_str()], &import_path, injectable.import_kind);
        }
        names.push(instance);
    }

    let list = names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ");
    file.main_class_mut()
        .add_property(Property::new("$inject", "").static_member().with_default(format!("[{list}]")))?;
    Ok(())
}
