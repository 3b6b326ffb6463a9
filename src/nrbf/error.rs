use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NrbfError>;

/// Errors produced while reading and decoding NRBF stream data.
#[derive(Debug, Error)]
pub enum NrbfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected end of stream at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Length-prefixed string payload was not valid UTF-8.
	#[error("string at offset {at} is not valid utf-8")]
	MalformedString {
		/// Byte offset of the string payload.
		at: usize,
	},
	/// Record tag byte outside the known tag space.
	#[error("unsupported record type {tag}")]
	UnsupportedRecordType {
		/// Offending tag byte.
		tag: u8,
	},
	/// Member/element type descriptor byte outside the known tag space.
	#[error("unsupported binary type {tag}")]
	UnsupportedBinaryType {
		/// Offending descriptor byte.
		tag: u8,
	},
	/// Primitive kind tag that is unassigned or has no decoding rule.
	#[error("unsupported primitive type {tag}")]
	UnsupportedPrimitiveType {
		/// Offending primitive tag byte.
		tag: u8,
	},
	/// Well-formed NRBF construct this engine declines to decode.
	#[error("unsupported feature: {feature}")]
	UnsupportedFeature {
		/// Name of the undecoded construct.
		feature: &'static str,
	},
	/// Object or metadata id referenced before (or without) being registered.
	#[error("dangling object reference {id}")]
	DanglingReference {
		/// The unresolved id.
		id: i32,
	},
	/// A structural stream invariant was violated.
	#[error("corrupt stream: {detail}")]
	CorruptStream {
		/// Description of the violated invariant.
		detail: String,
	},
	/// A count, length, or dimension field was negative.
	#[error("negative length for {field}: {len}")]
	NegativeLength {
		/// Logical field being validated.
		field: &'static str,
		/// Parsed signed value.
		len: i32,
	},
	/// Tree query found no child with the requested name.
	#[error("child not found: {name}")]
	ChildNotFound {
		/// Requested child name.
		name: String,
	},
}
