//! Import table for one TypeScript file.

use indexmap::{IndexMap, IndexSet};
use stencil_codegen::{CodeFragment, Renderable};

/// How a module is bound by an import statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// Named imports: `import { A, B } from "path";`
    Module,
    /// Namespace alias: `import Alias = path;`
    Namespace,
    /// Default import: `import A from "path";`
    Default,
}

impl ImportKind {
    /// Namespace and default imports bind exactly one identifier.
    fn binds_one(self) -> bool {
        matches!(self, ImportKind::Namespace | ImportKind::Default)
    }
}

/// One import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    symbols: IndexSet<String>,
    module_path: String,
    kind: ImportKind,
}

impl ImportEntry {
    /// Symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn kind(&self) -> ImportKind {
        self.kind
    }

    /// Render the statement.
    pub fn render(&self) -> String {
        let first = self.symbols.first();
        match (self.kind, first) {
            (_, None) => format!("import \"{}\";", self.module_path),
            (ImportKind::Module, Some(_)) => {
                let names: Vec<&str> = self.symbols().collect();
                format!(
                    "import {{ {} }} from \"{}\";",
                    names.join(", "),
                    self.module_path
                )
            }
            (ImportKind::Default, Some(name)) => {
                format!("import {} from \"{}\";", name, self.module_path)
            }
            (ImportKind::Namespace, Some(alias)) => {
                format!("import {} = {};", alias, self.module_path)
            }
        }
    }
}

/// The set of imports of one file.
///
/// Entries are keyed by module path *and* kind: repeated imports of the same
/// path with the same kind merge their symbols into one statement, while a
/// namespace or default import of a path that also has named imports stays a
/// separate statement. Statements are emitted in the order their modules were
/// first referenced.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    entries: IndexMap<(String, ImportKind), ImportEntry>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `symbols` from `module_path`, merging into an existing entry
    /// of the same kind.
    ///
    /// A namespace or default entry keeps the first symbol it was given;
    /// any other symbol for it is logged and ignored.
    pub fn add<I, S>(&mut self, symbols: I, module_path: &str, kind: ImportKind) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .entries
            .entry((module_path.to_string(), kind))
            .or_insert_with(|| ImportEntry {
                symbols: IndexSet::new(),
                module_path: module_path.to_string(),
                kind,
            });
        for symbol in symbols {
            let symbol = symbol.into();
            if entry.symbols.contains(&symbol) {
                tracing::trace!(%symbol, module_path, "import already registered");
                continue;
            }
            if let Some(bound) = entry.symbols.first().filter(|_| kind.binds_one()) {
                tracing::warn!(
                    %symbol,
                    %bound,
                    module_path,
                    ?kind,
                    "import binds a single identifier, ignoring extra symbol"
                );
                continue;
            }
            entry.symbols.insert(symbol);
        }
        self
    }

    /// Check if a module is imported with the given kind.
    pub fn contains(&self, module_path: &str, kind: ImportKind) -> bool {
        self.entries.contains_key(&(module_path.to_string(), kind))
    }

    /// Check if a symbol is imported from a module, under any kind.
    pub fn has_symbol(&self, module_path: &str, symbol: &str) -> bool {
        self.entries
            .values()
            .any(|e| e.module_path == module_path && e.symbols.contains(symbol))
    }

    /// Iterate over entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ImportEntry> {
        self.entries.values()
    }

    /// Number of import statements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Renderable for ImportTable {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().map(|e| CodeFragment::Line(e.render())).collect()
    }
}
