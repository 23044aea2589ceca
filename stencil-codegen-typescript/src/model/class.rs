//! Class and interface models.

use stencil_codegen::{CodeFragment, Renderable};
use stencil_core::{DeclarationKind, Error, Result};

use super::decl::{Constructor, Method, Parameter, Placement, Property};

/// A class declaration assembled from declaration builders.
///
/// Every accessor is keyed by name, so independent passes over the same
/// model (DI wiring, ACL registration, CRUD methods) extend the same
/// declarations instead of producing colliding ones.
///
/// # Example
///
/// ```
/// use stencil_codegen_typescript::model::{ClassModel, Property};
///
/// let mut class = ClassModel::new("UserController");
/// class.set_parent("BaseController");
/// class.constructor_mut().set_content("super();");
/// class.add_property(Property::new("busy", "boolean").with_default(false)).unwrap();
/// class.constructor_mut().append_content("this.load();");
///
/// assert!(class.to_string().contains("super();\n        this.load();"));
/// ```
#[derive(Debug, Clone)]
pub struct ClassModel {
    name: String,
    parent: Option<String>,
    exported: bool,
    properties: Vec<Property>,
    methods: Vec<Method>,
    constructor: Option<Constructor>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            exported: true,
            properties: Vec::new(),
            methods: Vec::new(),
            constructor: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the class. Everything the model emits picks up the new name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn set_parent(&mut self, parent: impl Into<String>) -> &mut Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn set_exported(&mut self, exported: bool) -> &mut Self {
        self.exported = exported;
        self
    }

    /// Add a property.
    ///
    /// Re-adding an identical property returns the existing one. A different
    /// property with the same name, or one shadowing a constructor parameter
    /// property, is a [`Error::DuplicateDeclaration`].
    pub fn add_property(&mut self, property: Property) -> Result<&mut Property> {
        let shadows_parameter = self.constructor.as_ref().is_some_and(|c| {
            c.parameters()
                .iter()
                .any(|p| p.is_property() && p.name() == property.name())
        });
        if shadows_parameter {
            return Err(Error::duplicate(
                DeclarationKind::Property,
                property.name(),
                &self.name,
            ));
        }
        merge_property(&mut self.properties, property, &self.name)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Get or create a method by name.
    pub fn add_method(&mut self, name: &str) -> &mut Method {
        let index = match self.methods.iter().position(|m| m.name() == name) {
            Some(index) => index,
            None => {
                tracing::trace!(class = %self.name, method = name, "new method");
                self.methods.push(Method::new(name));
                self.methods.len() - 1
            }
        };
        &mut self.methods[index]
    }

    /// Create a method that must not exist yet.
    pub fn add_unique_method(&mut self, name: &str) -> Result<&mut Method> {
        if self.method(name).is_some() {
            return Err(Error::duplicate(DeclarationKind::Method, name, &self.name));
        }
        Ok(self.add_method(name))
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name() == name)
    }

    pub fn method_mut(&mut self, name: &str) -> Option<&mut Method> {
        self.methods.iter_mut().find(|m| m.name() == name)
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    /// Get the constructor, creating an empty one on first use.
    pub fn constructor_mut(&mut self) -> ConstructorMut<'_> {
        ConstructorMut {
            constructor: self.constructor.get_or_insert_with(Constructor::default),
            properties: &self.properties,
            owner: &self.name,
        }
    }

    /// Replace the constructor. Fails if one of its parameter properties
    /// collides with a declared property.
    pub fn set_constructor(&mut self, constructor: Constructor) -> Result<ConstructorMut<'_>> {
        if let Some(param) = constructor
            .parameters()
            .iter()
            .find(|p| shadows(&self.properties, p))
        {
            return Err(Error::duplicate(
                DeclarationKind::Property,
                param.name(),
                &self.name,
            ));
        }
        Ok(ConstructorMut {
            constructor: self.constructor.insert(constructor),
            properties: &self.properties,
            owner: &self.name,
        })
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let extends = self
            .parent
            .as_ref()
            .map(|p| format!(" extends {p}"))
            .unwrap_or_default();
        format!("{export}class {}{extends}", self.name)
    }
}

impl Renderable for ClassModel {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut groups: Vec<Vec<CodeFragment>> = Vec::new();

        let (statics, instance): (Vec<&Property>, Vec<&Property>) =
            self.properties.iter().partition(|p| p.is_static());
        let properties: Vec<CodeFragment> = statics
            .into_iter()
            .chain(instance)
            .map(|p| CodeFragment::Line(p.member_line()))
            .collect();
        if !properties.is_empty() {
            groups.push(properties);
        }

        if let Some(constructor) = &self.constructor {
            groups.push(constructor.fragments());
        }
        for method in &self.methods {
            groups.push(method.fragments(Placement::Member));
        }

        if groups.is_empty() {
            return vec![CodeFragment::Line(format!("{} {{}}", self.header()))];
        }

        vec![CodeFragment::block(
            format!("{} {{", self.header()),
            separated(groups),
            "}",
        )]
    }
}

impl std::fmt::Display for ClassModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}

/// Mutable access to the constructor of a [`ClassModel`].
///
/// A parameter property also declares a member, so its name must not be
/// taken by a property of the class.
#[derive(Debug)]
pub struct ConstructorMut<'a> {
    constructor: &'a mut Constructor,
    properties: &'a [Property],
    owner: &'a str,
}

impl ConstructorMut<'_> {
    pub fn add_parameter(&mut self, param: Parameter) -> Result<&mut Self> {
        if shadows(self.properties, &param) {
            return Err(Error::duplicate(
                DeclarationKind::Property,
                param.name(),
                self.owner,
            ));
        }
        self.constructor.add_parameter(param)?;
        Ok(self)
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.constructor.set_content(content);
        self
    }

    pub fn append_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.constructor.append_content(content);
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.constructor.parameters()
    }
}

fn shadows(properties: &[Property], param: &Parameter) -> bool {
    param.is_property() && properties.iter().any(|p| p.name() == param.name())
}

/// An interface declaration: properties only.
#[derive(Debug, Clone)]
pub struct InterfaceModel {
    name: String,
    parent: Option<String>,
    exported: bool,
    properties: Vec<Property>,
}

impl InterfaceModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            exported: true,
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Set the interface this one extends.
    pub fn set_parent(&mut self, parent: impl Into<String>) -> &mut Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn set_exported(&mut self, exported: bool) -> &mut Self {
        self.exported = exported;
        self
    }

    /// Add a property; same merge rules as [`ClassModel::add_property`].
    pub fn add_property(&mut self, property: Property) -> Result<&mut Property> {
        merge_property(&mut self.properties, property, &self.name)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl Renderable for InterfaceModel {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let extends = self
            .parent
            .as_ref()
            .map(|p| format!(" extends {p}"))
            .unwrap_or_default();
        let header = format!("{export}interface {}{extends}", self.name);

        if self.properties.is_empty() {
            return vec![CodeFragment::Line(format!("{header} {{}}"))];
        }
        vec![CodeFragment::block(
            format!("{header} {{"),
            self.properties
                .iter()
                .map(|p| CodeFragment::Line(p.signature_line()))
                .collect(),
            "}",
        )]
    }
}

impl std::fmt::Display for InterfaceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}

fn merge_property<'a>(
    properties: &'a mut Vec<Property>,
    property: Property,
    owner: &str,
) -> Result<&'a mut Property> {
    match properties.iter().position(|p| p.name() == property.name()) {
        Some(index) if properties[index] == property => {
            tracing::debug!(owner, property = property.name(), "property already declared");
            Ok(&mut properties[index])
        }
        Some(_) => Err(Error::duplicate(
            DeclarationKind::Property,
            property.name(),
            owner,
        )),
        None => {
            let index = properties.len();
            properties.push(property);
            Ok(&mut properties[index])
        }
    }
}

/// Join fragment groups with one blank line between them.
pub(crate) fn separated(groups: Vec<Vec<CodeFragment>>) -> Vec<CodeFragment> {
    let mut out = Vec::new();
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            out.push(CodeFragment::Blank);
        }
        out.extend(group);
    }
    out
}

fn render(node: &impl Renderable) -> String {
    let mut builder = stencil_codegen::CodeBuilder::default();
    builder.emit(node);
    builder.build()
}
