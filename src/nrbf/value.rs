/// Scalar payload carried by a leaf node.
///
/// The union is closed: every value a record can produce is one of these
/// variants, so consumers can match exhaustively. Integer widths mirror
/// the wire format rather than collapsing to one machine width.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null (the `Null` primitive kind or `ObjectNull` payloads).
	Null,
	/// Boolean decoded from a single byte.
	Bool(bool),
	/// Unsigned 8-bit integer (`Byte`).
	U8(u8),
	/// Signed 8-bit integer (`SByte`).
	I8(i8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Signed 64-bit integer (`Int64` and `TimeSpan` tick counts).
	I64(i64),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// 32-bit float (`Single`).
	F32(f32),
	/// 64-bit float (`Double`).
	F64(f64),
	/// Length-prefixed UTF-8 string.
	String(Box<str>),
	/// Symbolic tag from a closed wire enum (for example a `BinaryArrayType`).
	Enum(&'static str),
}
