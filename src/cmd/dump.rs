use std::fs;
use std::path::PathBuf;

use netdoc::nrbf::{Node, Value, deserialize};

use crate::cmd::util::emit_json;

const INDENT: &str = "    ";

/// Parse the stream at `path` and render the record tree.
pub fn run(path: PathBuf, json: bool) -> netdoc::nrbf::Result<()> {
	let bytes = fs::read(&path)?;
	let root = deserialize(&bytes)?;

	if json {
		emit_json(&node_to_json(&root));
	} else {
		print!("{}", render_markup(&root));
	}
	Ok(())
}

/// Render the tree as nested open/close tag markup.
fn render_markup(root: &Node) -> String {
	let mut out = String::new();
	render_node(&mut out, root, 0);
	out
}

fn render_node(out: &mut String, node: &Node, depth: usize) {
	let pad = INDENT.repeat(depth);
	let name = node.display_name();
	match node {
		Node::Leaf(leaf) => match &leaf.value {
			Some(value) => {
				out.push_str(&pad);
				out.push_str(&format!("<{name}>{}</{name}>\n", escape_markup(&render_value(value))));
			}
			None => {
				out.push_str(&pad);
				out.push_str(&format!("<{name}/>\n"));
			}
		},
		Node::Aggregate(_) => {
			out.push_str(&pad);
			out.push_str(&format!("<{name}>\n"));
			for child in node.children() {
				// Member metadata is registry bookkeeping, not display data.
				if child.name() == "MembersMeta" {
					continue;
				}
				render_node(out, child, depth + 1);
			}
			out.push_str(&pad);
			out.push_str(&format!("</{name}>\n"));
		}
	}
}

fn render_value(value: &Value) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::U8(v) => v.to_string(),
		Value::I8(v) => v.to_string(),
		Value::I16(v) => v.to_string(),
		Value::U16(v) => v.to_string(),
		Value::I32(v) => v.to_string(),
		Value::U32(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::String(v) => v.to_string(),
		Value::Enum(name) => (*name).to_owned(),
	}
}

fn escape_markup(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			c => out.push(c),
		}
	}
	out
}

fn node_to_json(node: &Node) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	let mut out = Map::new();
	out.insert("name".to_owned(), serde_json::json!(node.display_name()));
	match node {
		Node::Leaf(leaf) => {
			if let Some(value) = &leaf.value {
				out.insert("value".to_owned(), value_to_json(value));
			}
		}
		Node::Aggregate(_) => {
			let children: Vec<JsonValue> = node.children().iter().map(node_to_json).collect();
			out.insert("children".to_owned(), JsonValue::Array(children));
		}
	}
	JsonValue::Object(out)
}

fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::U8(v) => serde_json::json!(v),
		Value::I8(v) => serde_json::json!(v),
		Value::I16(v) => serde_json::json!(v),
		Value::U16(v) => serde_json::json!(v),
		Value::I32(v) => serde_json::json!(v),
		Value::U32(v) => serde_json::json!(v),
		Value::I64(v) => serde_json::json!(v),
		Value::U64(v) => serde_json::json!(v),
		Value::F32(v) => serde_json::json!(v),
		Value::F64(v) => serde_json::json!(v),
		Value::String(v) => serde_json::json!(v),
		Value::Enum(name) => serde_json::json!(name),
	}
}
