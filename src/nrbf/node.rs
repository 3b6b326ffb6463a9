use crate::nrbf::{NrbfError, Result, Value};

/// One element of the decoded record tree.
///
/// `name` identifies the record or field kind and is fixed at
/// construction. A parent may additionally attach a semantic `role`
/// (for example `"Args"` on a method-call argument record); display
/// surfaces prefer the role, but the structural identity never changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Interior node with ordered children.
	Aggregate(AggregateNode),
	/// Terminal node with an optional scalar value.
	Leaf(LeafNode),
}

/// Interior tree node; child order mirrors stream order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateNode {
	/// Record or field kind name.
	pub name: Box<str>,
	/// Semantic role attached by the parent, if any.
	pub role: Option<&'static str>,
	/// Ordered children.
	pub children: Vec<Node>,
}

/// Terminal tree node.
///
/// `value: None` means the leaf was constructed without a payload (for
/// example `MessageEnd`); it is a distinct state from `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
	/// Record or field kind name.
	pub name: Box<str>,
	/// Semantic role attached by the parent, if any.
	pub role: Option<&'static str>,
	/// Scalar payload, absent for marker leaves.
	pub value: Option<Value>,
}

impl AggregateNode {
	/// Create an empty aggregate.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			role: None,
			children: Vec::new(),
		}
	}

	/// Append a child node.
	pub fn add(&mut self, node: Node) {
		self.children.push(node);
	}

	/// Append a leaf child carrying `value`.
	pub fn add_leaf(&mut self, name: &str, value: Value) {
		self.children.push(Node::Leaf(LeafNode::with_value(name, value)));
	}
}

impl LeafNode {
	/// Create a marker leaf without a payload.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			role: None,
			value: None,
		}
	}

	/// Create a leaf carrying `value`.
	pub fn with_value(name: &str, value: Value) -> Self {
		Self {
			name: name.into(),
			role: None,
			value: Some(value),
		}
	}

	/// Whether the leaf was constructed with an explicit value.
	pub fn has_value(&self) -> bool {
		self.value.is_some()
	}
}

impl Node {
	/// Structural name of the node.
	pub fn name(&self) -> &str {
		match self {
			Self::Aggregate(node) => &node.name,
			Self::Leaf(node) => &node.name,
		}
	}

	/// Display name: the parent-assigned role if present, else the name.
	pub fn display_name(&self) -> &str {
		match self {
			Self::Aggregate(node) => node.role.unwrap_or(&node.name),
			Self::Leaf(node) => node.role.unwrap_or(&node.name),
		}
	}

	/// Attach a semantic role, keeping the structural name intact.
	pub fn with_role(mut self, role: &'static str) -> Self {
		match &mut self {
			Self::Aggregate(node) => node.role = Some(role),
			Self::Leaf(node) => node.role = Some(role),
		}
		self
	}

	/// Ordered children; empty for leaves.
	pub fn children(&self) -> &[Node] {
		match self {
			Self::Aggregate(node) => &node.children,
			Self::Leaf(_) => &[],
		}
	}

	/// First child with a matching structural name, if any.
	pub fn find_child(&self, name: &str) -> Option<&Node> {
		self.children().iter().find(|child| child.name() == name)
	}

	/// First child with a matching structural name.
	pub fn get_child(&self, name: &str) -> Result<&Node> {
		self.find_child(name).ok_or_else(|| NrbfError::ChildNotFound { name: name.to_owned() })
	}

	/// Value of the first leaf child with a matching name, if any.
	pub fn find_leaf_value(&self, name: &str) -> Option<&Value> {
		self.children().iter().find_map(|child| match child {
			Node::Leaf(leaf) if &*leaf.name == name => leaf.value.as_ref(),
			_ => None,
		})
	}

	/// Value of the first leaf child with a matching name.
	pub fn get_leaf_value(&self, name: &str) -> Result<&Value> {
		self.find_leaf_value(name).ok_or_else(|| NrbfError::ChildNotFound { name: name.to_owned() })
	}

	/// Whether the node is a leaf constructed with an explicit value.
	pub fn has_value(&self) -> bool {
		match self {
			Self::Aggregate(_) => false,
			Self::Leaf(leaf) => leaf.has_value(),
		}
	}
}

impl From<AggregateNode> for Node {
	fn from(node: AggregateNode) -> Self {
		Self::Aggregate(node)
	}
}

impl From<LeafNode> for Node {
	fn from(node: LeafNode) -> Self {
		Self::Leaf(node)
	}
}

#[cfg(test)]
mod tests {
	use super::{AggregateNode, LeafNode, Node};
	use crate::nrbf::{NrbfError, Value};

	fn sample() -> Node {
		let mut node = AggregateNode::new("Object");
		node.add_leaf("ObjectId", Value::I32(7));
		node.add_leaf("ObjectId", Value::I32(9));
		node.add(Node::Leaf(LeafNode::new("MessageEnd")));
		node.into()
	}

	#[test]
	fn get_child_returns_first_match() {
		let node = sample();
		let child = node.get_child("ObjectId").expect("child exists");
		assert_eq!(child.find_leaf_value("ObjectId"), None);
		assert_eq!(node.get_leaf_value("ObjectId").expect("leaf value"), &Value::I32(7));
	}

	#[test]
	fn missing_child_is_reported_by_name() {
		let node = sample();
		let err = node.get_child("LibraryId").expect_err("no such child");
		match err {
			NrbfError::ChildNotFound { name } => assert_eq!(name, "LibraryId"),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn absent_value_is_distinct_from_null() {
		let marker = Node::Leaf(LeafNode::new("MessageEnd"));
		let null = Node::Leaf(LeafNode::with_value("Value", Value::Null));
		assert!(!marker.has_value());
		assert!(null.has_value());
	}

	#[test]
	fn role_changes_display_name_only() {
		let node = Node::from(AggregateNode::new("ArraySingleObject")).with_role("Args");
		assert_eq!(node.name(), "ArraySingleObject");
		assert_eq!(node.display_name(), "Args");
	}

	#[test]
	fn find_leaf_value_skips_aggregates_with_same_name() {
		let mut inner = AggregateNode::new("Value");
		inner.add_leaf("Nested", Value::Bool(true));
		let mut node = AggregateNode::new("Member");
		node.add(inner.into());
		node.add_leaf("Value", Value::I32(3));

		let node = Node::from(node);
		assert_eq!(node.find_leaf_value("Value"), Some(&Value::I32(3)));
	}
}
