pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod node;
pub mod universe;
pub mod walker;

pub use catalog::{Catalog, CatalogEntry};
pub use category::{CategoryKey, MultiMap, CATEGORY_SEPARATOR};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use node::{InputShape, NodeHandle, NodeInput, NodeOutput};
pub use universe::{
    load_universe, read_module, strip_arity, AttributeInstance, FieldDescriptor, LoadOptions,
    ModuleDump, TypeDescriptor, TypeRef, TypeUniverse, MODULE_PSEUDO_TYPE,
};
pub use walker::{walk_universe, Markers, TypeReport, WalkOptions, WalkResult, Walker};
