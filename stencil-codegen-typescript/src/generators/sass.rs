//! Stylesheet partial generator.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use stencil_codegen::{Placeholder, Splice, splice_file};
use stencil_core::{Error, FileRules, GeneratedFile, Result, Storage, to_camel_case};

use super::GenerateReport;

/// Name of the stylesheet that imports every partial.
pub const COMMON_SCSS: &str = "_common.scss";

/// The category of a stylesheet partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SassKind {
    Font,
    #[default]
    Page,
    Component,
    Directive,
}

impl SassKind {
    /// Directory of the partial, relative to the stylesheet root.
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Font => "fonts",
            Self::Page => "pages",
            Self::Component => "components",
            Self::Directive => "directives",
        }
    }

    pub fn placeholder(&self) -> Placeholder {
        match self {
            Self::Font => Placeholder::ScssFont,
            Self::Page => Placeholder::ScssPage,
            Self::Component => Placeholder::ScssComponent,
            Self::Directive => Placeholder::ScssDirective,
        }
    }
}

impl fmt::Display for SassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Font => "font",
            Self::Page => "page",
            Self::Component => "component",
            Self::Directive => "directive",
        };
        f.write_str(s)
    }
}

impl FromStr for SassKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "font" => Ok(Self::Font),
            "page" => Ok(Self::Page),
            "component" => Ok(Self::Component),
            "directive" => Ok(Self::Directive),
            _ => Err(Error::UnknownKind {
                what: "stylesheet kind",
                value: s.to_string(),
                expected: "font, page, component, directive",
            }),
        }
    }
}

/// Writes `_<name>.scss` and imports it from `_common.scss`.
#[derive(Debug, Clone)]
pub struct SassGenerator {
    name: String,
    kind: SassKind,
    scss_dir: PathBuf,
}

impl SassGenerator {
    pub fn new(name: impl Into<String>, kind: SassKind, scss_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            scss_dir: scss_dir.into(),
        }
    }

    fn partial_name(&self) -> String {
        to_camel_case(&self.name)
    }

    /// The `@import` line for `_common.scss`.
    pub fn import_line(&self) -> String {
        format!("@import '{}/{}';", self.kind.dir(), self.partial_name())
    }

    pub fn generate(&self, storage: &dyn Storage, base: &Path) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();

        let partial = SassPartial { generator: self };
        let path = partial.path(base);
        let written = partial.write(storage, base)?;
        report.record_write(path, written);

        let common = base.join(&self.scss_dir).join(COMMON_SCSS);
        let splice = Splice::new(self.kind.placeholder(), self.import_line());
        report.record_splice(&common, splice_file(storage, &common, &[splice]))?;
        Ok(report)
    }
}

/// The partial itself. Created once, then owned by the user.
struct SassPartial<'a> {
    generator: &'a SassGenerator,
}

impl GeneratedFile for SassPartial<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.generator.scss_dir)
            .join(self.generator.kind.dir())
            .join(format!("_{}.scss", self.generator.partial_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let name = &self.generator.name;
        match self.generator.kind {
            SassKind::Font => format!(
                "@font-face {{
  font-family: '{name}';
  src: url('#{{$font-path}}/{name}.eot?#iefix') format('embedded-opentype'),
  url('#{{$font-path}}/{name}.woff') format('woff'),
  url('#{{$font-path}}/{name}.ttf') format('truetype'),
  url('#{{$font-path}}/{name}.svg#{name}') format('svg');
  font-weight: normal;
  font-style: normal;
}}
"
            ),
            SassKind::Page => format!("#{}-page {{\n}}\n", self.generator.partial_name()),
            SassKind::Component | SassKind::Directive => {
                format!(".{} {{\n}}\n", self.generator.partial_name())
            }
        }
    }
}
