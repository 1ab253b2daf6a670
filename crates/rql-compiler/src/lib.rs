pub mod config;
pub mod error;
pub mod query;

pub use error::{ErrorClass, RqlError};
pub use query::{
    compiler::{CompileOptions, RqlCompiler},
    decode::{decode_node, decode_str, decode_tree},
    dialect::Dialect,
    registry::{CompilerRegistry, register_builtin_dialects},
    resolver::{FieldMap, FieldResolver, IdentityResolver},
};
