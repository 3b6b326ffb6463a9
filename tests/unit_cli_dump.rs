#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

#[test]
fn dump_renders_markup_tree() {
	let output = run_netdoc(&["dump", &fixture_path("hello.nrbf").display().to_string()]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert!(stdout.starts_with("<Root>"), "got:\n{stdout}");
	assert!(stdout.contains("<SerializedStreamHeader>"), "got:\n{stdout}");
	assert!(stdout.contains("<Value>hi</Value>"), "got:\n{stdout}");
	assert!(stdout.contains("<MessageEnd/>"), "got:\n{stdout}");
	assert!(stdout.trim_end().ends_with("</Root>"), "got:\n{stdout}");
}

#[test]
fn dump_json_output_is_valid_and_structured() {
	let output = run_netdoc(&["dump", &fixture_path("hello.nrbf").display().to_string(), "--json"]);
	assert!(output.status.success(), "command should succeed");

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["name"], "Root");

	let children = json["children"].as_array().expect("root children array");
	assert_eq!(children.len(), 3);
	assert_eq!(children[1]["name"], "BinaryObjectString");
}

#[test]
fn info_reports_record_counts() {
	let output = run_netdoc(&["info", &fixture_path("hello.nrbf").display().to_string()]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert!(stdout.contains("record_count: 3"), "got:\n{stdout}");
	assert!(stdout.contains("BinaryObjectString: 1"), "got:\n{stdout}");
}

#[test]
fn truncated_stream_fails_without_partial_markup() {
	let output = run_netdoc(&["dump", &fixture_path("truncated.nrbf").display().to_string()]);
	assert!(!output.status.success(), "truncated input should fail");

	let stderr = String::from_utf8(output.stderr).expect("stderr is utf-8");
	assert!(stderr.contains("error:"), "got:\n{stderr}");
	assert!(output.stdout.is_empty(), "no partial rendering expected");
}

fn run_netdoc(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_netdoc")).args(args).output().expect("command executes")
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}
