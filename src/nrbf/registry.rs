use std::collections::HashMap;

use crate::nrbf::records::BinaryType;
use crate::nrbf::{AggregateNode, Node, NrbfError, PrimitiveType, Result, Value};

/// Member name and type descriptor tables for one class record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMeta {
	/// Per-member metadata in declaration order.
	pub members: Vec<MemberMeta>,
}

/// Metadata for a single class member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberMeta {
	/// Member name.
	pub name: Box<str>,
	/// Wire type descriptor for the member value.
	pub binary_type: BinaryType,
	/// Primitive kind, present for `Primitive`/`PrimitiveArray` descriptors.
	pub primitive_type: Option<PrimitiveType>,
	/// Declared class name, present for `Class`/`SystemClass` descriptors.
	pub class_name: Option<Box<str>>,
	/// Declaring library id, present for `Class` descriptors.
	pub library_id: Option<i32>,
}

impl ClassMeta {
	/// Materialize the `MembersMeta` tree child for a class record node.
	pub fn to_node(&self) -> Node {
		let mut node = AggregateNode::new("MembersMeta");
		for member in &self.members {
			let mut item = AggregateNode::new("MemberMeta");
			item.add_leaf("Name", Value::String(member.name.clone()));
			item.add_leaf("BinaryType", Value::Enum(member.binary_type.as_str()));
			if let Some(kind) = member.primitive_type {
				item.add_leaf("PrimitiveType", Value::Enum(kind.as_str()));
			}
			if let Some(class_name) = &member.class_name {
				item.add_leaf("ClassName", Value::String(class_name.clone()));
			}
			if let Some(library_id) = member.library_id {
				item.add_leaf("LibraryId", Value::I32(library_id));
			}
			node.add(item.into());
		}
		node.into()
	}
}

/// Registry entry for one producer-assigned object id.
#[derive(Debug, Clone, Copy)]
pub struct ObjectEntry {
	meta: Option<usize>,
}

/// Per-parse mapping from object ids to registered objects.
///
/// Class member metadata lives in an arena owned by the registry; entries
/// reference it by index, so a `ClassWithId` record shares the defining
/// class's metadata slot instead of copying it. Producer ids are not
/// validated for uniqueness: re-registering an id replaces the prior
/// mapping, matching producer behavior.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
	entries: HashMap<i32, ObjectEntry>,
	metas: Vec<ClassMeta>,
}

impl ObjectRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an id-bearing object without class metadata.
	pub fn register(&mut self, id: i32) {
		self.entries.insert(id, ObjectEntry { meta: None });
	}

	/// Register a class object, storing its member metadata.
	pub fn register_class(&mut self, id: i32, meta: ClassMeta) {
		let index = self.metas.len();
		self.metas.push(meta);
		self.entries.insert(id, ObjectEntry { meta: Some(index) });
	}

	/// Register `id` as sharing the metadata slot of `source_id`.
	pub fn share_class(&mut self, id: i32, source_id: i32) -> Result<()> {
		let entry = self.resolve(source_id)?;
		let index = entry.meta.ok_or_else(|| NrbfError::CorruptStream {
			detail: format!("metadata id {source_id} does not refer to a class record"),
		})?;
		self.entries.insert(id, ObjectEntry { meta: Some(index) });
		Ok(())
	}

	/// Look up the entry registered under `id`.
	pub fn resolve(&self, id: i32) -> Result<ObjectEntry> {
		self.entries.get(&id).copied().ok_or(NrbfError::DanglingReference { id })
	}

	/// Look up the class metadata registered under `id`.
	pub fn class_meta(&self, id: i32) -> Result<&ClassMeta> {
		let entry = self.resolve(id)?;
		let index = entry.meta.ok_or_else(|| NrbfError::CorruptStream {
			detail: format!("metadata id {id} does not refer to a class record"),
		})?;
		Ok(&self.metas[index])
	}

	/// Whether any object is registered under `id`.
	pub fn contains(&self, id: i32) -> bool {
		self.entries.contains_key(&id)
	}

	/// Number of registered ids.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::{ClassMeta, MemberMeta, ObjectRegistry};
	use crate::nrbf::records::BinaryType;
	use crate::nrbf::{NrbfError, PrimitiveType};

	fn meta_with_member(name: &str) -> ClassMeta {
		ClassMeta {
			members: vec![MemberMeta {
				name: name.into(),
				binary_type: BinaryType::Primitive,
				primitive_type: Some(PrimitiveType::Int32),
				class_name: None,
				library_id: None,
			}],
		}
	}

	#[test]
	fn unregistered_id_is_dangling() {
		let registry = ObjectRegistry::new();
		let err = registry.resolve(9).expect_err("nothing registered");
		match err {
			NrbfError::DanglingReference { id } => assert_eq!(id, 9),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn reregistration_supersedes_prior_mapping() {
		let mut registry = ObjectRegistry::new();
		registry.register_class(5, meta_with_member("First"));
		registry.register_class(5, meta_with_member("Second"));

		let meta = registry.class_meta(5).expect("meta resolves");
		assert_eq!(&*meta.members[0].name, "Second");
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn shared_class_resolves_to_same_metadata() {
		let mut registry = ObjectRegistry::new();
		registry.register_class(1, meta_with_member("Count"));
		registry.share_class(2, 1).expect("share succeeds");
		registry.share_class(3, 2).expect("chained share succeeds");

		assert_eq!(&*registry.class_meta(3).expect("meta resolves").members[0].name, "Count");
	}

	#[test]
	fn sharing_from_non_class_is_corrupt() {
		let mut registry = ObjectRegistry::new();
		registry.register(4);
		let err = registry.share_class(5, 4).expect_err("no metadata to share");
		assert!(matches!(err, NrbfError::CorruptStream { .. }));
	}

	#[test]
	fn members_meta_node_lists_descriptors() {
		let meta = meta_with_member("Count");
		let node = meta.to_node();
		assert_eq!(node.name(), "MembersMeta");

		let member = node.get_child("MemberMeta").expect("member entry");
		assert_eq!(
			member.get_leaf_value("Name").expect("name leaf"),
			&crate::nrbf::Value::String("Count".into())
		);
		assert_eq!(
			member.get_leaf_value("PrimitiveType").expect("primitive type leaf"),
			&crate::nrbf::Value::Enum("Int32")
		);
	}
}
