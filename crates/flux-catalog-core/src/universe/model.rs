//! Type universe data model
//!
//! Mirrors what a metadata dump exposes for each module: top-level type
//! definitions with their fields and custom attribute instances. Names follow
//! metadata conventions, so generic definitions carry an arity suffix
//! (`` ValueArgument`1 ``).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full name of the pseudo type that stands for module-level members
pub const MODULE_PSEUDO_TYPE: &str = "<Module>";

/// Separator between a metadata type name and its generic arity
const ARITY_SEPARATOR: char = '`';

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Strip a trailing generic arity suffix: `` Sin`1 `` → `Sin`.
pub fn strip_arity(name: &str) -> &str {
    match name.rsplit_once(ARITY_SEPARATOR) {
        Some((base, arity)) if !arity.is_empty() && arity.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => name,
    }
}

pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// Reference to a type as used in a field signature or generic argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    /// Arguments of a generic instantiation; empty for anything else
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeRef>,
    /// True for an unbound type variable such as `T`
    #[serde(default, skip_serializing_if = "is_false")]
    pub generic_parameter: bool,
}

impl TypeRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            generic_arguments: Vec::new(),
            generic_parameter: false,
        }
    }

    /// Type with no namespace, e.g. a keyword alias like `float`
    pub fn named(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    pub fn generic_parameter(name: impl Into<String>) -> Self {
        Self {
            generic_parameter: true,
            ..Self::named(name)
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.generic_arguments = arguments;
        self
    }

    pub fn is_generic_instance(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    /// Namespace plus metadata name, without generic arguments
    pub fn full_name_without_generic_arguments(&self) -> String {
        if self.generic_parameter {
            return self.name.clone();
        }
        qualify(&self.namespace, &self.name)
    }

    /// Full name including generic arguments: ``List`1<System.Single>``
    pub fn full_name(&self) -> String {
        let base = self.full_name_without_generic_arguments();
        if !self.is_generic_instance() {
            return base;
        }
        let args: Vec<String> = self.generic_arguments.iter().map(TypeRef::full_name).collect();
        format!("{base}<{}>", args.join(","))
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Field declared on a type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_static: bool,
    pub field_type: TypeRef,
}

/// Custom attribute applied to a type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeInstance {
    /// Full name of the attribute type
    pub attribute_type: String,
    /// Constructor arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<Value>,
}

impl AttributeInstance {
    pub fn new(attribute_type: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            attribute_type: attribute_type.into(),
            arguments,
        }
    }

    /// Arguments joined for display; strings are shown without quotes
    pub fn arguments_summary(&self) -> String {
        self.arguments
            .iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Type definition as read from a module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_class: bool,
    /// Declared type variable names, in order
    #[serde(default)]
    pub generic_parameters: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub attributes: Vec<AttributeInstance>,
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            is_class: true,
            generic_parameters: Vec::new(),
            fields: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Full name followed by declared type variables: ``Ns.Cast`2<A, B>``
    pub fn declaration(&self) -> String {
        if self.generic_parameters.is_empty() {
            return self.full_name();
        }
        format!("{}<{}>", self.full_name(), self.generic_parameters.join(", "))
    }

    /// First attribute whose type full name equals `attribute_type`
    pub fn find_attribute(&self, attribute_type: &str) -> Option<&AttributeInstance> {
        self.attributes
            .iter()
            .find(|attr| attr.attribute_type == attribute_type)
    }

    pub fn is_module_pseudo_type(&self) -> bool {
        self.full_name() == MODULE_PSEUDO_TYPE
    }
}

/// One module's worth of type definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleDump {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// Every type definition under consideration, in module order
#[derive(Debug, Clone, Default)]
pub struct TypeUniverse {
    modules: Vec<String>,
    types: Vec<TypeDescriptor>,
}

impl TypeUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_modules(modules: impl IntoIterator<Item = ModuleDump>) -> Self {
        let mut universe = Self::new();
        for module in modules {
            universe.push_module(module);
        }
        universe
    }

    pub fn push_module(&mut self, module: ModuleDump) {
        self.modules.push(module.name);
        self.types.extend(module.types);
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn module_names(&self) -> &[String] {
        &self.modules
    }

    /// Locate a type by exact full name
    pub fn find(&self, full_name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|td| td.full_name() == full_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
