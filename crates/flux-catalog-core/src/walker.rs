//! Type universe walker
//!
//! Classifies every domain class in a universe: types carrying the name
//! marker are nodes and get their input fields extracted; types carrying the
//! category marker are grouped under the parsed category path.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::category::{CategoryKey, MultiMap};
use crate::error::{CatalogError, Result};
use crate::node::{InputShape, NodeHandle, NodeInput};
use crate::universe::{strip_arity, AttributeInstance, TypeDescriptor, TypeRef, TypeUniverse};

pub const DEFAULT_NODE_NAME_MARKER: &str = "ProtoFlux.Core.NodeNameAttribute";
pub const DEFAULT_NODE_CATEGORY_MARKER: &str = "ProtoFlux.Core.NodeCategoryAttribute";
pub const DEFAULT_NAMESPACE_PREFIX: &str = "ProtoFlux.";
pub const DEFAULT_INPUT_NAMESPACE: &str = "ProtoFlux.Core";

/// Fully-qualified names of the two marker attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub node_name: String,
    pub node_category: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            node_name: DEFAULT_NODE_NAME_MARKER.to_string(),
            node_category: DEFAULT_NODE_CATEGORY_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    pub markers: Markers,
    /// Only types whose namespace starts with this prefix are classified
    pub namespace_prefix: String,
    /// Namespace holding the input wrapper types
    pub input_namespace: String,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
            input_namespace: DEFAULT_INPUT_NAMESPACE.to_string(),
        }
    }
}

/// Classification of one domain class
#[derive(Debug, Clone)]
pub struct TypeReport {
    pub handle: NodeHandle,
    pub category: Option<CategoryKey>,
    /// Every attribute on the type, for inspection only
    pub attributes: Vec<AttributeInstance>,
}

/// Outcome of a walk
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    /// Category path → handles declared in it, in discovery order
    pub categories: MultiMap<CategoryKey, NodeHandle>,
    /// One report per classified type, in universe order
    pub reports: Vec<TypeReport>,
}

impl WalkResult {
    /// Handles of types carrying the name marker
    pub fn nodes(&self) -> impl Iterator<Item = &NodeHandle> {
        self.reports
            .iter()
            .map(|r| &r.handle)
            .filter(|h| h.is_node)
    }

    /// Sort the grouped handles into a catalog
    pub fn into_catalog(self) -> Catalog {
        Catalog::from_groups(self.categories)
    }
}

/// Walks a type universe once markers have been resolved
pub struct Walker<'u> {
    universe: &'u TypeUniverse,
    options: WalkOptions,
    node_name: String,
    node_category: String,
}

impl<'u> Walker<'u> {
    /// Resolve both marker attribute types in the universe.
    ///
    /// Fails with `MissingMarker` when either one is absent.
    pub fn new(universe: &'u TypeUniverse, options: WalkOptions) -> Result<Self> {
        let node_name = resolve_marker(universe, &options.markers.node_name)?;
        tracing::info!(marker = %node_name, "[NodeName]: found");
        let node_category = resolve_marker(universe, &options.markers.node_category)?;
        tracing::info!(marker = %node_category, "[Category]: found");

        Ok(Self {
            universe,
            options,
            node_name,
            node_category,
        })
    }

    /// Classify every type of the universe, in order
    pub fn walk(&self) -> Result<WalkResult> {
        let mut result = WalkResult::default();

        for td in self.universe.types() {
            let Some(report) = self.classify(td)? else {
                continue;
            };
            if let Some(category) = &report.category {
                result.categories.add(category.clone(), report.handle.clone());
            }
            result.reports.push(report);
        }

        tracing::info!(
            entries = result.categories.group_count(),
            types = result.reports.len(),
            "detected categories"
        );
        Ok(result)
    }

    /// Classify one type; `None` for types outside the domain
    pub fn classify(&self, td: &TypeDescriptor) -> Result<Option<TypeReport>> {
        if td.is_module_pseudo_type() || !td.is_class {
            return Ok(None);
        }
        if !td.namespace.starts_with(&self.options.namespace_prefix) {
            return Ok(None);
        }

        let declaration = td.declaration();
        let is_node = td.find_attribute(&self.node_name).is_some();
        let inputs = if is_node {
            self.collect_inputs(td)?
        } else {
            Vec::new()
        };

        let category = match td.find_attribute(&self.node_category) {
            Some(attr) => Some(parse_category(td, attr)?),
            None => None,
        };

        tracing::debug!(
            type_name = %declaration,
            is_node,
            inputs = inputs.len(),
            category = category.as_ref().map(|c| c.as_str()).unwrap_or("<none>"),
            "classified"
        );
        for input in &inputs {
            tracing::debug!(type_name = %declaration, input = %input.name, element = %input.element_type, "input");
        }
        for attr in &td.attributes {
            tracing::debug!(
                type_name = %declaration,
                attr = %attr.attribute_type,
                args = %attr.arguments_summary(),
                "attribute"
            );
        }

        Ok(Some(TypeReport {
            handle: NodeHandle::from_descriptor(td, inputs, is_node),
            category,
            attributes: td.attributes.clone(),
        }))
    }

    fn collect_inputs(&self, td: &TypeDescriptor) -> Result<Vec<NodeInput>> {
        let mut inputs = Vec::new();

        for field in &td.fields {
            if !field.is_public || field.is_static {
                continue;
            }
            let Some(shape) = self.input_shape(&field.field_type) else {
                continue;
            };

            // wrappers are always instantiated with exactly one argument
            let [element_type] = field.field_type.generic_arguments.as_slice() else {
                return Err(CatalogError::MalformedInput {
                    owner: td.full_name(),
                    field: field.name.clone(),
                    field_type: field.field_type.full_name(),
                });
            };

            inputs.push(NodeInput {
                name: field.name.clone(),
                shape,
                element_type: element_type.clone(),
            });
        }

        Ok(inputs)
    }

    /// Which input wrapper `ty` names, matched by namespace and simple name
    fn input_shape(&self, ty: &TypeRef) -> Option<InputShape> {
        if ty.generic_parameter || ty.namespace != self.options.input_namespace {
            return None;
        }
        InputShape::from_constructor_name(strip_arity(&ty.name))
    }
}

fn resolve_marker(universe: &TypeUniverse, full_name: &str) -> Result<String> {
    universe
        .find(full_name)
        .map(TypeDescriptor::full_name)
        .ok_or_else(|| CatalogError::MissingMarker {
            name: full_name.to_string(),
        })
}

fn parse_category(td: &TypeDescriptor, attr: &AttributeInstance) -> Result<CategoryKey> {
    let Some(Value::String(raw)) = attr.arguments.first() else {
        return Err(CatalogError::invalid_argument(format!(
            "category marker on {} has no string argument",
            td.full_name()
        )));
    };

    CategoryKey::new(raw).map_err(|_| {
        CatalogError::invalid_argument(format!(
            "category name on {} must not be empty",
            td.full_name()
        ))
    })
}

/// Resolve markers and walk the universe in one call
pub fn walk_universe(universe: &TypeUniverse, options: WalkOptions) -> Result<WalkResult> {
    Walker::new(universe, options)?.walk()
}
