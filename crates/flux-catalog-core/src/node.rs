//! Node handles
//!
//! A `NodeHandle` is the cataloged view of one discovered type: its name,
//! declared type variables and exposed input ports.

use serde::Serialize;

use crate::universe::{qualify, strip_arity, TypeDescriptor, TypeRef};

/// Wrapper types that expose a field as a node input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputShape {
    /// `ValueArgument<T>`
    Value,
    /// `ObjectArgument<T>`
    Object,
    /// `ObjectArgumentList<T>`
    ObjectList,
}

impl InputShape {
    pub const ALL: [InputShape; 3] = [Self::Value, Self::Object, Self::ObjectList];

    /// Simple name of the wrapper type, without arity suffix
    pub fn constructor_name(&self) -> &'static str {
        match self {
            Self::Value => "ValueArgument",
            Self::Object => "ObjectArgument",
            Self::ObjectList => "ObjectArgumentList",
        }
    }

    pub fn from_constructor_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.constructor_name() == name)
    }
}

impl std::fmt::Display for InputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.constructor_name())
    }
}

/// Input port exposed by a node field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInput {
    /// Field name
    pub name: String,
    pub shape: InputShape,
    /// Sole generic argument of the wrapper type
    pub element_type: TypeRef,
}

/// Output port. Outputs are not discovered yet, so handles always carry an
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeOutput {
    pub name: String,
    pub element_type: TypeRef,
}

/// One discovered type
#[derive(Debug, Clone, Serialize)]
pub struct NodeHandle {
    pub namespace: String,
    /// Metadata name, arity suffix included
    pub name: String,
    pub generic_parameters: Vec<String>,
    pub inputs: Vec<NodeInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<NodeOutput>,
    /// Whether the type carries the node name marker
    pub is_node: bool,
}

impl NodeHandle {
    pub fn from_descriptor(td: &TypeDescriptor, inputs: Vec<NodeInput>, is_node: bool) -> Self {
        Self {
            namespace: td.namespace.clone(),
            name: td.name.clone(),
            generic_parameters: td.generic_parameters.clone(),
            inputs,
            outputs: Vec::new(),
            is_node,
        }
    }

    /// Namespace plus metadata name
    pub fn full_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Namespace plus simple name, without arity or type variables
    pub fn display_name(&self) -> String {
        qualify(&self.namespace, strip_arity(&self.name))
    }

    /// Full name followed by declared type variables
    pub fn declaration(&self) -> String {
        if self.generic_parameters.is_empty() {
            return self.full_name();
        }
        format!(
            "{}<{}>",
            self.full_name(),
            self.generic_parameters.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_shape_names() {
        assert_eq!(
            InputShape::from_constructor_name("ValueArgument"),
            Some(InputShape::Value)
        );
        assert_eq!(
            InputShape::from_constructor_name("ObjectArgumentList"),
            Some(InputShape::ObjectList)
        );
        assert_eq!(InputShape::from_constructor_name("ValueArgument`1"), None);
        assert_eq!(InputShape::from_constructor_name("Operation"), None);
    }

    #[test]
    fn test_handle_names() {
        let mut td = TypeDescriptor::new("ProtoFlux.Runtimes.Execution.Nodes", "ValueAdd`1");
        td.generic_parameters = vec!["T".to_string()];
        let handle = NodeHandle::from_descriptor(&td, Vec::new(), true);

        assert_eq!(
            handle.full_name(),
            "ProtoFlux.Runtimes.Execution.Nodes.ValueAdd`1"
        );
        assert_eq!(
            handle.display_name(),
            "ProtoFlux.Runtimes.Execution.Nodes.ValueAdd"
        );
        assert_eq!(
            handle.declaration(),
            "ProtoFlux.Runtimes.Execution.Nodes.ValueAdd`1<T>"
        );
        assert!(handle.outputs.is_empty());
    }

    #[test]
    fn test_global_namespace_has_no_leading_dot() {
        let mut td = TypeDescriptor::new("", "Pair`2");
        td.generic_parameters = vec!["A".to_string(), "B".to_string()];
        let handle = NodeHandle::from_descriptor(&td, Vec::new(), true);

        assert_eq!(handle.full_name(), td.full_name());
        assert_eq!(handle.display_name(), "Pair");
        assert_eq!(handle.declaration(), "Pair`2<A, B>");
    }
}
