use crate::nrbf::bytes::Cursor;
use crate::nrbf::{NrbfError, Result, Value};

/// Primitive kind tags of the wire format.
///
/// The full tag space is represented, including kinds this engine cannot
/// decode (`Invalid`, `Char`, `Decimal`, `DateTime`); those fail with
/// `UnsupportedPrimitiveType` at read time rather than being dropped from
/// the enum, so the tag space stays auditable in one place. Value 4 is
/// unassigned by the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
	/// Reserved invalid kind.
	Invalid = 0,
	/// Single-byte boolean.
	Boolean = 1,
	/// Unsigned 8-bit integer.
	Byte = 2,
	/// UTF-16 code unit (not decoded).
	Char = 3,
	/// 128-bit decimal (not decoded).
	Decimal = 5,
	/// 64-bit float.
	Double = 6,
	/// Signed 16-bit integer.
	Int16 = 7,
	/// Signed 32-bit integer.
	Int32 = 8,
	/// Signed 64-bit integer.
	Int64 = 9,
	/// Signed 8-bit integer.
	SByte = 10,
	/// 32-bit float.
	Single = 11,
	/// Signed 64-bit tick count.
	TimeSpan = 12,
	/// Packed date-time (not decoded).
	DateTime = 13,
	/// Unsigned 16-bit integer.
	UInt16 = 14,
	/// Unsigned 32-bit integer.
	UInt32 = 15,
	/// Unsigned 64-bit integer.
	UInt64 = 16,
	/// Zero-byte null marker.
	Null = 17,
	/// Length-prefixed UTF-8 string.
	String = 18,
}

impl PrimitiveType {
	/// Parse a primitive kind tag byte.
	pub fn from_u8(tag: u8) -> Result<Self> {
		Ok(match tag {
			0 => Self::Invalid,
			1 => Self::Boolean,
			2 => Self::Byte,
			3 => Self::Char,
			5 => Self::Decimal,
			6 => Self::Double,
			7 => Self::Int16,
			8 => Self::Int32,
			9 => Self::Int64,
			10 => Self::SByte,
			11 => Self::Single,
			12 => Self::TimeSpan,
			13 => Self::DateTime,
			14 => Self::UInt16,
			15 => Self::UInt32,
			16 => Self::UInt64,
			17 => Self::Null,
			18 => Self::String,
			_ => return Err(NrbfError::UnsupportedPrimitiveType { tag }),
		})
	}

	/// Render the kind as its stable wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Invalid => "Invalid",
			Self::Boolean => "Boolean",
			Self::Byte => "Byte",
			Self::Char => "Char",
			Self::Decimal => "Decimal",
			Self::Double => "Double",
			Self::Int16 => "Int16",
			Self::Int32 => "Int32",
			Self::Int64 => "Int64",
			Self::SByte => "SByte",
			Self::Single => "Single",
			Self::TimeSpan => "TimeSpan",
			Self::DateTime => "DateTime",
			Self::UInt16 => "UInt16",
			Self::UInt32 => "UInt32",
			Self::UInt64 => "UInt64",
			Self::Null => "Null",
			Self::String => "String",
		}
	}
}

/// Decode one scalar of the requested kind from the stream.
pub fn read_primitive(cursor: &mut Cursor<'_>, kind: PrimitiveType) -> Result<Value> {
	match kind {
		PrimitiveType::Boolean => Ok(Value::Bool(cursor.read_u8()? != 0)),
		PrimitiveType::Byte => Ok(Value::U8(cursor.read_u8()?)),
		PrimitiveType::SByte => Ok(Value::I8(cursor.read_u8()? as i8)),
		PrimitiveType::Int16 => Ok(Value::I16(cursor.read_i16_le()?)),
		PrimitiveType::UInt16 => Ok(Value::U16(cursor.read_u16_le()?)),
		PrimitiveType::Int32 => Ok(Value::I32(cursor.read_i32_le()?)),
		PrimitiveType::UInt32 => Ok(Value::U32(cursor.read_u32_le()?)),
		PrimitiveType::Int64 => Ok(Value::I64(cursor.read_i64_le()?)),
		PrimitiveType::UInt64 => Ok(Value::U64(cursor.read_u64_le()?)),
		PrimitiveType::TimeSpan => Ok(Value::I64(cursor.read_i64_le()?)),
		PrimitiveType::Single => Ok(Value::F32(cursor.read_f32_le()?)),
		PrimitiveType::Double => Ok(Value::F64(cursor.read_f64_le()?)),
		PrimitiveType::Null => Ok(Value::Null),
		PrimitiveType::String => Ok(Value::String(read_string(cursor)?)),
		PrimitiveType::Invalid | PrimitiveType::Char | PrimitiveType::Decimal | PrimitiveType::DateTime => {
			Err(NrbfError::UnsupportedPrimitiveType { tag: kind as u8 })
		}
	}
}

/// Decode a length-prefixed UTF-8 string.
pub fn read_string(cursor: &mut Cursor<'_>) -> Result<Box<str>> {
	let raw_length = read_7bit_length(cursor)?;
	let length = usize::try_from(raw_length).unwrap_or(usize::MAX);
	let at = cursor.pos();
	let bytes = cursor.read_exact(length)?;
	let text = std::str::from_utf8(bytes).map_err(|_| NrbfError::MalformedString { at })?;
	Ok(text.into())
}

/// Decode the 7-bit group length prefix.
///
/// At most 5 groups are consumed; a set continuation bit on the fifth
/// group simply terminates the sequence, matching producer behavior.
fn read_7bit_length(cursor: &mut Cursor<'_>) -> Result<u64> {
	let mut length = 0_u64;
	for group in 0..5_u32 {
		let byte = cursor.read_u8()?;
		length |= u64::from(byte & 0x7F) << (group * 7);
		if byte & 0x80 == 0 {
			break;
		}
	}
	Ok(length)
}

#[cfg(test)]
mod tests {
	use super::{PrimitiveType, read_7bit_length, read_primitive, read_string};
	use crate::nrbf::bytes::Cursor;
	use crate::nrbf::{NrbfError, Value};

	#[test]
	fn single_group_length_decodes_directly() {
		let mut cursor = Cursor::new(&[0x05]);
		assert_eq!(read_7bit_length(&mut cursor).expect("length decodes"), 5);
	}

	#[test]
	fn two_group_length_decodes_to_300() {
		let mut cursor = Cursor::new(&[0xAC, 0x02]);
		assert_eq!(read_7bit_length(&mut cursor).expect("length decodes"), 300);
	}

	#[test]
	fn maximal_five_group_length_is_accepted() {
		let mut cursor = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
		let length = read_7bit_length(&mut cursor).expect("length decodes");
		assert_eq!(length, 0x07_FFFF_FFFF);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn fifth_group_terminates_even_with_continuation_bit() {
		let mut cursor = Cursor::new(&[0x80, 0x80, 0x80, 0x80, 0x81, 0x42]);
		read_7bit_length(&mut cursor).expect("length decodes");
		assert_eq!(cursor.remaining(), 1);
	}

	#[test]
	fn truncated_length_prefix_is_unexpected_eof() {
		let mut cursor = Cursor::new(&[0x80]);
		let err = read_7bit_length(&mut cursor).expect_err("missing continuation");
		assert!(matches!(err, NrbfError::UnexpectedEof { .. }));
	}

	#[test]
	fn string_payload_decodes_as_utf8() {
		let mut cursor = Cursor::new(&[0x02, b'h', b'i']);
		assert_eq!(&*read_string(&mut cursor).expect("string decodes"), "hi");
	}

	#[test]
	fn truncated_string_payload_is_unexpected_eof() {
		let mut cursor = Cursor::new(&[0x05, b'h', b'i']);
		let err = read_string(&mut cursor).expect_err("payload too short");
		assert!(matches!(err, NrbfError::UnexpectedEof { .. }));
	}

	#[test]
	fn invalid_utf8_is_malformed_string() {
		let mut cursor = Cursor::new(&[0x02, 0xFF, 0xFE]);
		let err = read_string(&mut cursor).expect_err("bad utf-8");
		match err {
			NrbfError::MalformedString { at } => assert_eq!(at, 1),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn boolean_reads_single_byte() {
		let mut cursor = Cursor::new(&[0x01, 0x00]);
		assert_eq!(read_primitive(&mut cursor, PrimitiveType::Boolean).expect("bool"), Value::Bool(true));
		assert_eq!(read_primitive(&mut cursor, PrimitiveType::Boolean).expect("bool"), Value::Bool(false));
	}

	#[test]
	fn sbyte_is_twos_complement() {
		let mut cursor = Cursor::new(&[0xFF]);
		assert_eq!(read_primitive(&mut cursor, PrimitiveType::SByte).expect("sbyte"), Value::I8(-1));
	}

	#[test]
	fn int32_reads_little_endian() {
		let mut cursor = Cursor::new(&[0x2A, 0x00, 0x00, 0x00]);
		assert_eq!(read_primitive(&mut cursor, PrimitiveType::Int32).expect("i32"), Value::I32(42));
	}

	#[test]
	fn timespan_surfaces_as_signed_ticks() {
		let bytes = (-600_000_000_i64).to_le_bytes();
		let mut cursor = Cursor::new(&bytes);
		assert_eq!(
			read_primitive(&mut cursor, PrimitiveType::TimeSpan).expect("timespan"),
			Value::I64(-600_000_000)
		);
	}

	#[test]
	fn null_consumes_no_bytes() {
		let mut cursor = Cursor::new(&[0xAA]);
		assert_eq!(read_primitive(&mut cursor, PrimitiveType::Null).expect("null"), Value::Null);
		assert_eq!(cursor.remaining(), 1);
	}

	#[test]
	fn undecodable_kinds_are_rejected() {
		for kind in [PrimitiveType::Invalid, PrimitiveType::Char, PrimitiveType::Decimal, PrimitiveType::DateTime] {
			let mut cursor = Cursor::new(&[0x00; 16]);
			let err = read_primitive(&mut cursor, kind).expect_err("kind has no decoding rule");
			assert!(matches!(err, NrbfError::UnsupportedPrimitiveType { .. }));
		}
	}

	#[test]
	fn unassigned_tag_byte_is_rejected() {
		let err = PrimitiveType::from_u8(4).expect_err("4 is unassigned");
		match err {
			NrbfError::UnsupportedPrimitiveType { tag } => assert_eq!(tag, 4),
			other => panic!("unexpected error: {other:?}"),
		}
	}
}
