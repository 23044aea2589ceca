//! The file model passed between generator passes.

use stencil_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};
use stencil_core::{DeclarationKind, Error, Result};

use super::{
    class::{ClassModel, InterfaceModel, separated},
    decl::{Method, Placement},
    imports::{ImportKind, ImportTable},
};

/// A structured representation of one TypeScript source file.
///
/// Owns the import table and every declaration of the file. Declarations are
/// reached through get-or-create accessors keyed by name, which always hand
/// back the same instance for the same name.
///
/// `generate()` renders, in order: imports, a blank line, interfaces, classes
/// and free functions, with exactly one blank line between top-level items.
/// It is a pure function of the current state.
#[derive(Debug, Clone)]
pub struct FileModel {
    name: String,
    imports: ImportTable,
    interfaces: Vec<InterfaceModel>,
    classes: Vec<ClassModel>,
    functions: Vec<Method>,
    indent: Indent,
}

impl FileModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: ImportTable::new(),
            interfaces: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
            indent: Indent::default(),
        }
    }

    /// Set the indentation used by [`FileModel::generate`].
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the file. Classes keep their own names.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn imports(&self) -> &ImportTable {
        &self.imports
    }

    /// Register an import; see [`ImportTable::add`].
    pub fn add_import<I, S>(&mut self, symbols: I, module_path: &str, kind: ImportKind) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.add(symbols, module_path, kind);
        self
    }

    /// Get or create a class by name.
    pub fn add_class(&mut self, name: &str) -> &mut ClassModel {
        let index = match self.classes.iter().position(|c| c.name() == name) {
            Some(index) => index,
            None => {
                self.classes.push(ClassModel::new(name));
                self.classes.len() - 1
            }
        };
        &mut self.classes[index]
    }

    /// Create a class that must not exist yet.
    pub fn add_unique_class(&mut self, name: &str) -> Result<&mut ClassModel> {
        if self.class(name).is_some() {
            return Err(Error::duplicate(DeclarationKind::Class, name, &self.name));
        }
        Ok(self.add_class(name))
    }

    /// The file's primary class: the first one added, or a new class named
    /// after the file. Stays reachable after the class is renamed.
    pub fn main_class_mut(&mut self) -> &mut ClassModel {
        if self.classes.is_empty() {
            self.classes.push(ClassModel::new(self.name.clone()));
        }
        &mut self.classes[0]
    }

    pub fn class(&self, name: &str) -> Option<&ClassModel> {
        self.classes.iter().find(|c| c.name() == name)
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut ClassModel> {
        self.classes.iter_mut().find(|c| c.name() == name)
    }

    pub fn classes(&self) -> &[ClassModel] {
        &self.classes
    }

    /// Get or create an interface by name.
    pub fn add_interface(&mut self, name: &str) -> &mut InterfaceModel {
        let index = match self.interfaces.iter().position(|i| i.name() == name) {
            Some(index) => index,
            None => {
                self.interfaces.push(InterfaceModel::new(name));
                self.interfaces.len() - 1
            }
        };
        &mut self.interfaces[index]
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceModel> {
        self.interfaces.iter().find(|i| i.name() == name)
    }

    pub fn interface_mut(&mut self, name: &str) -> Option<&mut InterfaceModel> {
        self.interfaces.iter_mut().find(|i| i.name() == name)
    }

    /// Get or create a free-standing function by name.
    pub fn add_function(&mut self, name: &str) -> &mut Method {
        let index = match self.functions.iter().position(|f| f.name() == name) {
            Some(index) => index,
            None => {
                self.functions.push(Method::new(name));
                self.functions.len() - 1
            }
        };
        &mut self.functions[index]
    }

    pub fn function(&self, name: &str) -> Option<&Method> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Render the whole file with the configured indentation.
    pub fn generate(&self) -> String {
        self.generate_with_indent(self.indent)
    }

    /// Render the whole file with a custom indentation.
    pub fn generate_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for FileModel {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out = self.imports.to_fragments();

        let groups: Vec<Vec<CodeFragment>> = self
            .interfaces
            .iter()
            .map(Renderable::to_fragments)
            .chain(self.classes.iter().map(Renderable::to_fragments))
            .chain(
                self.functions
                    .iter()
                    .map(|f| f.fragments(Placement::Free)),
            )
            .collect();

        if !out.is_empty() && !groups.is_empty() {
            out.push(CodeFragment::Blank);
        }
        out.extend(separated(groups));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Parameter, Property};

    #[test]
    fn test_empty_file() {
        assert_eq!(FileModel::new("empty").generate(), "");
    }

    #[test]
    fn test_section_order() {
        let mut file = FileModel::new("UserList");
        file.add_function("UserList").set_arrow(true);
        file.add_class("UserStore");
        file.add_interface("IUserListProps");
        file.add_import(["React"], "react", ImportKind::Default);

        assert_eq!(
            file.generate(),
            "import React from \"react\";\n\
             \n\
             export interface IUserListProps {}\n\
             \n\
             export class UserStore {}\n\
             \n\
             export const UserList = () => {\n\
             };\n"
        );
    }

    #[test]
    fn test_accessors_return_same_instance() {
        let mut file = FileModel::new("UserController");
        file.add_class("UserController").set_parent("BaseController");
        file.add_class("UserController")
            .add_property(Property::new("busy", "boolean"))
            .unwrap();

        assert_eq!(file.classes().len(), 1);
        let class = file.class("UserController").unwrap();
        assert_eq!(class.parent(), Some("BaseController"));
        assert!(class.property("busy").is_some());
    }

    #[test]
    fn test_main_class_survives_rename() {
        let mut file = FileModel::new("user");
        file.main_class_mut().set_name("UserController");
        file.main_class_mut()
            .constructor_mut()
            .add_parameter(Parameter::new("apiService", "ApiService").private())
            .unwrap();

        assert_eq!(file.classes().len(), 1);
        assert!(file.generate().contains("constructor(private apiService: ApiService)"));
    }

    #[test]
    fn test_add_unique_class() {
        let mut file = FileModel::new("a");
        file.add_unique_class("A").unwrap();
        let err = file.add_unique_class("A").unwrap_err();
        assert_eq!(err.to_string(), "class 'A' is already declared in 'a'");
    }

    #[test]
    fn test_generate_is_pure() {
        let mut file = FileModel::new("a");
        file.add_import(["A"], "./A", ImportKind::Module);
        file.add_class("B").add_method("run").set_content("go();");
        assert_eq!(file.generate(), file.generate());
    }

    #[test]
    fn test_custom_indent() {
        let mut file = FileModel::new("a").with_indent(Indent::TWO);
        file.add_class("A").constructor_mut().set_content("super();");
        assert_eq!(
            file.generate(),
            "export class A {\n  constructor() {\n    super();\n  }\n}\n"
        );
    }
}
