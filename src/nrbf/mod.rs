mod bytes;
mod error;
mod node;
mod primitive;
mod records;
mod registry;
mod value;

/// Error and result aliases.
pub use error::{NrbfError, Result};
/// Generic record tree node types.
pub use node::{AggregateNode, LeafNode, Node};
/// Primitive kind tags.
pub use primitive::PrimitiveType;
/// Record tag grammar and the stream deserialization entry point.
pub use records::{BinaryArrayType, BinaryType, RecordType, deserialize};
/// Per-parse object registry and class member metadata tables.
pub use registry::{ClassMeta, MemberMeta, ObjectEntry, ObjectRegistry};
/// Leaf scalar value union.
pub use value::Value;
