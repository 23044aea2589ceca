//! Declaration builders: properties, parameters, methods and constructors.

use std::fmt;

use stencil_codegen::CodeFragment;
use stencil_core::{DeclarationKind, Error, Result};

/// Member access modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Public,
    Private,
    Protected,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial value of a property or parameter.
///
/// Numbers and booleans render as literal tokens. `Raw` text is emitted
/// verbatim; callers quote string literals themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Raw(String),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_nan() => f.write_str("NaN"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

/// A class or interface property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    ty: String,
    access: Access,
    is_static: bool,
    optional: bool,
    default: Option<DefaultValue>,
}

impl Property {
    /// Create a public instance property. An empty `ty` omits the annotation.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: Access::Public,
            is_static: false,
            optional: false,
            default: None,
        }
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn private(self) -> Self {
        self.with_access(Access::Private)
    }

    pub fn protected(self) -> Self {
        self.with_access(Access::Protected)
    }

    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// Class member form: `private busy: boolean = false;`
    pub(crate) fn member_line(&self) -> String {
        let mut line = format!("{} ", self.access);
        if self.is_static {
            line.push_str("static ");
        }
        line.push_str(&self.name);
        self.push_annotation(&mut line);
        if let Some(default) = &self.default {
            line.push_str(&format!(" = {default}"));
        }
        line.push(';');
        line
    }

    /// Interface member form: `name?: string;`
    pub(crate) fn signature_line(&self) -> String {
        let mut line = self.name.clone();
        self.push_annotation(&mut line);
        line.push(';');
        line
    }

    fn push_annotation(&self, line: &mut String) {
        if self.optional {
            line.push('?');
        }
        if !self.ty.is_empty() {
            line.push_str(": ");
            line.push_str(&self.ty);
        }
    }
}

/// A method or constructor parameter.
///
/// A parameter with an access modifier is a parameter property: it also
/// declares an instance property of the same name and type.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    ty: String,
    access: Option<Access>,
    optional: bool,
    default: Option<DefaultValue>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: None,
            optional: false,
            default: None,
        }
    }

    /// Turn this parameter into a parameter property.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    pub fn private(self) -> Self {
        self.with_access(Access::Private)
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn access(&self) -> Option<Access> {
        self.access
    }

    pub fn is_property(&self) -> bool {
        self.access.is_some()
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(access) = self.access {
            out.push_str(access.as_str());
            out.push(' ');
        }
        out.push_str(&self.name);
        if self.optional {
            out.push('?');
        }
        if !self.ty.is_empty() {
            out.push_str(": ");
            out.push_str(&self.ty);
        }
        if let Some(default) = &self.default {
            out.push_str(&format!(" = {default}"));
        }
        out
    }
}

/// Parameter list shared by methods and constructors.
#[derive(Debug, Clone, Default, PartialEq)]
struct Parameters(Vec<Parameter>);

impl Parameters {
    /// Add a parameter; re-adding an identical one is a no-op, a different
    /// parameter with the same name is a collision.
    fn add(&mut self, param: Parameter, owner: &str) -> Result<()> {
        match self.0.iter().find(|p| p.name == param.name) {
            Some(existing) if *existing == param => Ok(()),
            Some(_) => Err(Error::duplicate(
                DeclarationKind::Parameter,
                param.name,
                owner,
            )),
            None => {
                self.0.push(param);
                Ok(())
            }
        }
    }

    fn render(&self) -> String {
        self.0
            .iter()
            .map(Parameter::render)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Free text of a method body: the initial content plus appended chunks.
#[derive(Debug, Clone, Default, PartialEq)]
struct Body {
    content: Option<String>,
    appended: Vec<String>,
}

impl Body {
    fn fragments(&self) -> Vec<CodeFragment> {
        self.content
            .iter()
            .chain(self.appended.iter())
            .map(|chunk| CodeFragment::Text(chunk.clone()))
            .collect()
    }
}

/// The class constructor. At most one per class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constructor {
    params: Parameters,
    body: Body,
}

impl Constructor {
    /// Add a parameter (see [`Parameter::with_access`] for parameter properties).
    pub fn add_parameter(&mut self, param: Parameter) -> Result<&mut Self> {
        self.params.add(param, "constructor")?;
        Ok(self)
    }

    /// Replace the initial body text.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.body.content = Some(content.into());
        self
    }

    /// Append text after the current body.
    pub fn append_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.body.appended.push(content.into());
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.params.0
    }

    pub(crate) fn fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("constructor({}) {{", self.params.render()),
            self.body.fragments(),
            "}",
        )]
    }
}

/// Where a method is declared, which decides its surface syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Class member.
    Member,
    /// Top-level function of a file.
    Free,
    /// Function declared inside another method's body.
    Nested,
}

/// A method, free function or nested function.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    access: Access,
    is_static: bool,
    is_arrow: bool,
    is_async: bool,
    exported: bool,
    params: Parameters,
    return_type: Option<String>,
    binding_type: Option<String>,
    body: Body,
    inner: Vec<Method>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: Access::Public,
            is_static: false,
            is_arrow: false,
            is_async: false,
            exported: true,
            params: Parameters::default(),
            return_type: None,
            binding_type: None,
            body: Body::default(),
            inner: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_arrow(&self) -> bool {
        self.is_arrow
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.params.0
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn set_access(&mut self, access: Access) -> &mut Self {
        self.access = access;
        self
    }

    pub fn set_static(&mut self, is_static: bool) -> &mut Self {
        self.is_static = is_static;
        self
    }

    /// Use the arrow form (`name = () => {}` / `const name = () => {}`).
    pub fn set_arrow(&mut self, is_arrow: bool) -> &mut Self {
        self.is_arrow = is_arrow;
        self
    }

    pub fn set_async(&mut self, is_async: bool) -> &mut Self {
        self.is_async = is_async;
        self
    }

    /// Whether a free function is exported. Ignored for members.
    pub fn set_exported(&mut self, exported: bool) -> &mut Self {
        self.exported = exported;
        self
    }

    pub fn set_return_type(&mut self, ty: impl Into<String>) -> &mut Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Type annotation of the constant an arrow free function is bound to
    /// (`export const List: ComponentType<Props> = ...`).
    pub fn set_binding_type(&mut self, ty: impl Into<String>) -> &mut Self {
        self.binding_type = Some(ty.into());
        self
    }

    pub fn add_parameter(&mut self, param: Parameter) -> Result<&mut Self> {
        let owner = self.name.clone();
        self.params.add(param, &owner)?;
        Ok(self)
    }

    /// Replace the initial body text.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.body.content = Some(content.into());
        self
    }

    /// Append text after the current body.
    pub fn append_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.body.appended.push(content.into());
        self
    }

    /// Get or create a function nested in this method's body.
    pub fn add_inner_function(&mut self, name: &str) -> &mut Method {
        let index = match self.inner.iter().position(|m| m.name == name) {
            Some(index) => index,
            None => {
                self.inner.push(Method::new(name));
                self.inner.len() - 1
            }
        };
        &mut self.inner[index]
    }

    pub fn inner_function(&self, name: &str) -> Option<&Method> {
        self.inner.iter().find(|m| m.name == name)
    }

    pub(crate) fn fragments(&self, placement: Placement) -> Vec<CodeFragment> {
        let mut body = self.body.fragments();
        for inner in &self.inner {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(inner.fragments(Placement::Nested));
        }
        let close = if self.is_arrow { "};" } else { "}" };
        vec![CodeFragment::block(self.header(placement), body, close)]
    }

    fn header(&self, placement: Placement) -> String {
        let params = self.params.render();
        let ret = self
            .return_type
            .as_ref()
            .map(|t| format!(": {t}"))
            .unwrap_or_default();
        let async_kw = if self.is_async { "async " } else { "" };

        let prefix = match placement {
            Placement::Member => {
                let static_kw = if self.is_static { "static " } else { "" };
                format!("{} {static_kw}", self.access)
            }
            Placement::Free if self.exported => "export ".to_string(),
            Placement::Free | Placement::Nested => String::new(),
        };

        if self.is_arrow {
            let binding = match placement {
                Placement::Member => self.name.clone(),
                Placement::Free | Placement::Nested => {
                    let ty = self
                        .binding_type
                        .as_ref()
                        .map(|t| format!(": {t}"))
                        .unwrap_or_default();
                    format!("const {}{ty}", self.name)
                }
            };
            format!("{prefix}{binding} = {async_kw}({params}){ret} => {{")
        } else {
            let function_kw = match placement {
                Placement::Member => "",
                Placement::Free | Placement::Nested => "function ",
            };
            format!("{prefix}{async_kw}{function_kw}{}({params}){ret} {{", self.name)
        }
    }
}
