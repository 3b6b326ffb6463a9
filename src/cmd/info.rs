use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use netdoc::nrbf::{Node, deserialize};

use crate::cmd::util::emit_json;

#[derive(serde::Serialize)]
struct InfoReport {
	path: String,
	record_count: usize,
	node_count: usize,
	max_depth: usize,
	records: Vec<RecordCount>,
}

#[derive(serde::Serialize)]
struct RecordCount {
	name: String,
	count: usize,
}

/// Print high-level stream statistics.
pub fn run(path: PathBuf, json: bool) -> netdoc::nrbf::Result<()> {
	let bytes = fs::read(&path)?;
	let root = deserialize(&bytes)?;
	let report = build_report(&path, &root);

	if json {
		emit_json(&report);
		return Ok(());
	}

	println!("path: {}", report.path);
	println!("record_count: {}", report.record_count);
	println!("node_count: {}", report.node_count);
	println!("max_depth: {}", report.max_depth);
	println!("records:");
	for record in &report.records {
		println!("  {}: {}", record.name, record.count);
	}
	Ok(())
}

fn build_report(path: &Path, root: &Node) -> InfoReport {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for child in root.children() {
		*counts.entry(child.name()).or_insert(0) += 1;
	}

	let mut records: Vec<RecordCount> = counts
		.into_iter()
		.map(|(name, count)| RecordCount {
			name: name.to_owned(),
			count,
		})
		.collect();
	records.sort_by(|left, right| right.count.cmp(&left.count).then_with(|| left.name.cmp(&right.name)));

	InfoReport {
		path: path.display().to_string(),
		record_count: root.children().len(),
		node_count: count_nodes(root),
		max_depth: depth_of(root),
		records,
	}
}

fn count_nodes(node: &Node) -> usize {
	1 + node.children().iter().map(count_nodes).sum::<usize>()
}

fn depth_of(node: &Node) -> usize {
	1 + node.children().iter().map(depth_of).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use netdoc::nrbf::{AggregateNode, Value};

	use super::build_report;

	#[test]
	fn report_counts_records_and_nodes() {
		let mut first = AggregateNode::new("BinaryObjectString");
		first.add_leaf("ObjectId", Value::I32(1));
		let mut second = AggregateNode::new("BinaryObjectString");
		second.add_leaf("ObjectId", Value::I32(2));

		let mut root = AggregateNode::new("Root");
		root.add(first.into());
		root.add(second.into());
		root.add(AggregateNode::new("MethodCall").into());

		let report = build_report(Path::new("payload.bin"), &root.into());
		assert_eq!(report.record_count, 3);
		assert_eq!(report.node_count, 6);
		assert_eq!(report.max_depth, 3);

		assert_eq!(report.records[0].name, "BinaryObjectString");
		assert_eq!(report.records[0].count, 2);
		assert_eq!(report.records[1].name, "MethodCall");
	}
}
