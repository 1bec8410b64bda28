//! Type universe: the type definitions of every loaded module, and the
//! loader that builds it from metadata dumps.

mod loader;
mod model;

pub use loader::{load_universe, read_module, LoadOptions, DEFAULT_INCLUDE_PATTERNS};
pub(crate) use model::qualify;
pub use model::{
    strip_arity, AttributeInstance, FieldDescriptor, ModuleDump, TypeDescriptor, TypeRef,
    TypeUniverse, MODULE_PSEUDO_TYPE,
};
