#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use netdoc::nrbf::{NrbfError, Value, deserialize};

#[test]
fn minimal_fixture_round_trips() {
	let bytes = fs::read(fixture_path("hello.nrbf")).expect("fixture reads");
	let root = deserialize(&bytes).expect("fixture parses");

	assert_eq!(root.name(), "Root");
	let children = root.children();
	assert_eq!(children.len(), 3);
	assert_eq!(children[0].name(), "SerializedStreamHeader");
	assert_eq!(children[1].name(), "BinaryObjectString");
	assert_eq!(children[2].name(), "MessageEnd");

	let header = &children[0];
	assert_eq!(header.get_leaf_value("RootId").expect("root id"), &Value::I32(1));
	assert_eq!(header.get_leaf_value("HeaderId").expect("header id"), &Value::I32(-1));

	let string = &children[1];
	assert_eq!(string.get_leaf_value("Value").expect("value"), &Value::String("hi".into()));
	assert!(!children[2].has_value());
}

#[test]
fn empty_stream_returns_empty_root() {
	let root = deserialize(&[]).expect("empty stream parses");
	assert!(root.children().is_empty());
}

#[test]
fn truncated_fixture_fails_with_unexpected_eof() {
	let bytes = fs::read(fixture_path("truncated.nrbf")).expect("fixture reads");
	let err = deserialize(&bytes).expect_err("truncated stream fails");
	assert!(matches!(err, NrbfError::UnexpectedEof { .. }));
}

#[test]
fn query_interface_finds_children_and_defaults() {
	let bytes = fs::read(fixture_path("hello.nrbf")).expect("fixture reads");
	let root = deserialize(&bytes).expect("fixture parses");

	let string = root.get_child("BinaryObjectString").expect("string record");
	assert_eq!(string.find_leaf_value("ObjectId"), Some(&Value::I32(1)));
	assert_eq!(string.find_leaf_value("LibraryId"), None);
	assert_eq!(string.find_leaf_value("LibraryId").unwrap_or(&Value::Null), &Value::Null);

	let err = root.get_child("BinaryLibrary").expect_err("no library record");
	assert!(matches!(err, NrbfError::ChildNotFound { .. }));
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}
