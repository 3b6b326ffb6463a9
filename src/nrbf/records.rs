use crate::nrbf::bytes::Cursor;
use crate::nrbf::primitive::{read_primitive, read_string};
use crate::nrbf::registry::{ClassMeta, MemberMeta, ObjectRegistry};
use crate::nrbf::{AggregateNode, LeafNode, Node, NrbfError, PrimitiveType, Result, Value};

/// `MethodCall` flag: the call carries no argument payload.
const FLAG_NO_ARGS: u32 = 0x0000_0001;
/// `MethodCall` flag: arguments are encoded inline as values-with-codes.
const FLAG_ARGS_INLINE: u32 = 0x0000_0002;
/// `MethodCall` flag: the logical call context follows inline.
const FLAG_CONTEXT_INLINE: u32 = 0x0000_0020;

/// Record tags of the wire format.
///
/// The full tag space is represented; tags the engine recognizes but
/// declines to decode keep explicit `UnsupportedFeature` dispatch arms
/// rather than being dropped from the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
	/// Stream header with root/header ids and format version.
	SerializedStreamHeader = 0,
	/// Class instance reusing previously registered member metadata.
	ClassWithId = 1,
	/// System class without member type descriptors (not decoded).
	SystemClassWithMembers = 2,
	/// Class without member type descriptors (not decoded).
	ClassWithMembers = 3,
	/// System class with member names and type descriptors.
	SystemClassWithMembersAndTypes = 4,
	/// Class with member names, type descriptors, and a library id.
	ClassWithMembersAndTypes = 5,
	/// Id-bearing string object.
	BinaryObjectString = 6,
	/// General array with rank, dimensions, and optional bounds offsets.
	BinaryArray = 7,
	/// Inline primitive value with an explicit kind tag.
	MemberPrimitiveTyped = 8,
	/// Raw reference to another record's object id.
	MemberReference = 9,
	/// Null object marker.
	ObjectNull = 10,
	/// End-of-message marker.
	MessageEnd = 11,
	/// Library declaration wrapping one class or array record.
	BinaryLibrary = 12,
	/// Run of up to 255 null objects (not decoded).
	ObjectNullMultiple256 = 13,
	/// Run of null objects with a 32-bit count (not decoded).
	ObjectNullMultiple = 14,
	/// Single-dimension array of one primitive kind.
	ArraySinglePrimitive = 15,
	/// Single-dimension array of records sharing one record tag.
	ArraySingleObject = 16,
	/// Single-dimension array of per-element tagged records.
	ArraySingleString = 17,
	/// Remote method call message.
	MethodCall = 21,
	/// Remote method return message (not decoded).
	MethodReturn = 22,
}

impl RecordType {
	/// Parse a record tag byte.
	pub fn from_u8(tag: u8) -> Result<Self> {
		Ok(match tag {
			0 => Self::SerializedStreamHeader,
			1 => Self::ClassWithId,
			2 => Self::SystemClassWithMembers,
			3 => Self::ClassWithMembers,
			4 => Self::SystemClassWithMembersAndTypes,
			5 => Self::ClassWithMembersAndTypes,
			6 => Self::BinaryObjectString,
			7 => Self::BinaryArray,
			8 => Self::MemberPrimitiveTyped,
			9 => Self::MemberReference,
			10 => Self::ObjectNull,
			11 => Self::MessageEnd,
			12 => Self::BinaryLibrary,
			13 => Self::ObjectNullMultiple256,
			14 => Self::ObjectNullMultiple,
			15 => Self::ArraySinglePrimitive,
			16 => Self::ArraySingleObject,
			17 => Self::ArraySingleString,
			21 => Self::MethodCall,
			22 => Self::MethodReturn,
			_ => return Err(NrbfError::UnsupportedRecordType { tag }),
		})
	}

	/// Render the tag as its stable wire name.
	pub fn name(self) -> &'static str {
		match self {
			Self::SerializedStreamHeader => "SerializedStreamHeader",
			Self::ClassWithId => "ClassWithId",
			Self::SystemClassWithMembers => "SystemClassWithMembers",
			Self::ClassWithMembers => "ClassWithMembers",
			Self::SystemClassWithMembersAndTypes => "SystemClassWithMembersAndTypes",
			Self::ClassWithMembersAndTypes => "ClassWithMembersAndTypes",
			Self::BinaryObjectString => "BinaryObjectString",
			Self::BinaryArray => "BinaryArray",
			Self::MemberPrimitiveTyped => "MemberPrimitiveTyped",
			Self::MemberReference => "MemberReference",
			Self::ObjectNull => "ObjectNull",
			Self::MessageEnd => "MessageEnd",
			Self::BinaryLibrary => "BinaryLibrary",
			Self::ObjectNullMultiple256 => "ObjectNullMultiple256",
			Self::ObjectNullMultiple => "ObjectNullMultiple",
			Self::ArraySinglePrimitive => "ArraySinglePrimitive",
			Self::ArraySingleObject => "ArraySingleObject",
			Self::ArraySingleString => "ArraySingleString",
			Self::MethodCall => "MethodCall",
			Self::MethodReturn => "MethodReturn",
		}
	}

	/// Whether the tag is one of the class-instance records.
	pub fn is_class(self) -> bool {
		matches!(
			self,
			Self::ClassWithId
				| Self::SystemClassWithMembers
				| Self::ClassWithMembers
				| Self::SystemClassWithMembersAndTypes
				| Self::ClassWithMembersAndTypes
		)
	}

	/// Whether the tag is one of the array records.
	pub fn is_array(self) -> bool {
		matches!(
			self,
			Self::BinaryArray | Self::ArraySinglePrimitive | Self::ArraySingleObject | Self::ArraySingleString
		)
	}
}

/// Type descriptor for a class member or array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryType {
	/// Inline primitive value of a recorded kind.
	Primitive = 0,
	/// String object record.
	String = 1,
	/// Arbitrary object record.
	Object = 2,
	/// System class record named by a class name.
	SystemClass = 3,
	/// Class record named by a class name and library id.
	Class = 4,
	/// Array-of-objects record.
	ObjectArray = 5,
	/// Array-of-strings record.
	StringArray = 6,
	/// Array-of-primitives record of a recorded kind.
	PrimitiveArray = 7,
}

impl BinaryType {
	/// Parse a member/element type descriptor byte.
	pub fn from_u8(tag: u8) -> Result<Self> {
		Ok(match tag {
			0 => Self::Primitive,
			1 => Self::String,
			2 => Self::Object,
			3 => Self::SystemClass,
			4 => Self::Class,
			5 => Self::ObjectArray,
			6 => Self::StringArray,
			7 => Self::PrimitiveArray,
			_ => return Err(NrbfError::UnsupportedBinaryType { tag }),
		})
	}

	/// Render the descriptor as its stable wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Primitive => "Primitive",
			Self::String => "String",
			Self::Object => "Object",
			Self::SystemClass => "SystemClass",
			Self::Class => "Class",
			Self::ObjectArray => "ObjectArray",
			Self::StringArray => "StringArray",
			Self::PrimitiveArray => "PrimitiveArray",
		}
	}
}

/// Shape classifier carried by a `BinaryArray` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryArrayType {
	/// Rank-1 array with zero-based indices.
	Single = 0,
	/// Array of arrays.
	Jagged = 1,
	/// Multi-dimensional array.
	Rectangular = 2,
	/// Rank-1 array with explicit lower bounds.
	SingleOffset = 3,
	/// Array of arrays with explicit lower bounds.
	JaggedOffset = 4,
	/// Multi-dimensional array with explicit lower bounds.
	RectangularOffset = 5,
}

impl BinaryArrayType {
	/// Parse an array shape byte. Only six values exist; anything else is
	/// structural corruption rather than a feature gap.
	pub fn from_u8(tag: u8) -> Result<Self> {
		Ok(match tag {
			0 => Self::Single,
			1 => Self::Jagged,
			2 => Self::Rectangular,
			3 => Self::SingleOffset,
			4 => Self::JaggedOffset,
			5 => Self::RectangularOffset,
			_ => {
				return Err(NrbfError::CorruptStream {
					detail: format!("unknown binary array type {tag}"),
				});
			}
		})
	}

	/// Render the shape as its stable wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Single => "Single",
			Self::Jagged => "Jagged",
			Self::Rectangular => "Rectangular",
			Self::SingleOffset => "SingleOffset",
			Self::JaggedOffset => "JaggedOffset",
			Self::RectangularOffset => "RectangularOffset",
		}
	}

	/// Whether the shape carries a per-rank lower-bounds table.
	pub fn has_lower_bounds(self) -> bool {
		matches!(self, Self::SingleOffset | Self::JaggedOffset | Self::RectangularOffset)
	}
}

/// State for one parse session: the stream cursor and the object registry.
///
/// Owned exclusively by a single `deserialize` call; both parts mutate in
/// place, so a context must never be shared across threads.
pub(crate) struct Context<'a> {
	pub(crate) cursor: Cursor<'a>,
	pub(crate) objects: ObjectRegistry,
}

impl<'a> Context<'a> {
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			objects: ObjectRegistry::new(),
		}
	}
}

/// Deserialize a complete NRBF stream into a `Root` node tree.
///
/// Top-level records become the root's children in stream order. The
/// stream may only end on a record tag boundary; exhaustion inside a
/// record surfaces `UnexpectedEof`. An empty stream yields an empty root.
pub fn deserialize(bytes: &[u8]) -> Result<Node> {
	let mut ctx = Context::new(bytes);
	let mut root = AggregateNode::new("Root");
	while ctx.cursor.remaining() > 0 {
		let tag = read_record_tag(&mut ctx)?;
		root.add(read_record(&mut ctx, tag)?);
	}
	Ok(root.into())
}

fn read_record_tag(ctx: &mut Context<'_>) -> Result<RecordType> {
	RecordType::from_u8(ctx.cursor.read_u8()?)
}

/// Dispatch one record whose tag has already been read.
pub(crate) fn read_record(ctx: &mut Context<'_>, record_type: RecordType) -> Result<Node> {
	match record_type {
		RecordType::SerializedStreamHeader => read_serialized_stream_header(ctx),
		RecordType::ClassWithId => read_class_with_id(ctx),
		RecordType::SystemClassWithMembers => Err(NrbfError::UnsupportedFeature {
			feature: "SystemClassWithMembers record",
		}),
		RecordType::ClassWithMembers => Err(NrbfError::UnsupportedFeature {
			feature: "ClassWithMembers record",
		}),
		RecordType::SystemClassWithMembersAndTypes => read_system_class_with_members_and_types(ctx),
		RecordType::ClassWithMembersAndTypes => read_class_with_members_and_types(ctx),
		RecordType::BinaryObjectString => read_binary_object_string(ctx),
		RecordType::BinaryArray => read_binary_array(ctx),
		RecordType::MemberPrimitiveTyped => read_member_primitive_typed(ctx),
		RecordType::MemberReference => read_member_reference(ctx),
		RecordType::ObjectNull => Ok(LeafNode::new("ObjectNull").into()),
		RecordType::MessageEnd => Ok(LeafNode::new("MessageEnd").into()),
		RecordType::BinaryLibrary => read_binary_library(ctx),
		RecordType::ObjectNullMultiple256 => Err(NrbfError::UnsupportedFeature {
			feature: "ObjectNullMultiple256 record",
		}),
		RecordType::ObjectNullMultiple => Err(NrbfError::UnsupportedFeature {
			feature: "ObjectNullMultiple record",
		}),
		RecordType::ArraySinglePrimitive => read_array_single_primitive(ctx),
		RecordType::ArraySingleObject => read_array_single_object(ctx),
		RecordType::ArraySingleString => read_array_single_string(ctx),
		RecordType::MethodCall => read_method_call(ctx),
		RecordType::MethodReturn => Err(NrbfError::UnsupportedFeature {
			feature: "MethodReturn record",
		}),
	}
}

/// Read an `ObjectId` field, register the id, and start the record node.
fn read_object_header(ctx: &mut Context<'_>, name: &'static str) -> Result<(AggregateNode, i32)> {
	let object_id = ctx.cursor.read_i32_le()?;
	ctx.objects.register(object_id);
	let mut node = AggregateNode::new(name);
	node.add_leaf("ObjectId", Value::I32(object_id));
	Ok((node, object_id))
}

fn read_count(ctx: &mut Context<'_>, field: &'static str) -> Result<usize> {
	let raw = ctx.cursor.read_i32_le()?;
	if raw < 0 {
		return Err(NrbfError::NegativeLength { field, len: raw });
	}
	Ok(raw as usize)
}

/// Read the member metadata block: all names first, then all type
/// descriptors, then each descriptor's conditional payload.
fn read_members_meta(ctx: &mut Context<'_>) -> Result<ClassMeta> {
	let count = read_count(ctx, "member count")?;

	let mut names = Vec::with_capacity(count);
	for _ in 0..count {
		names.push(read_string(&mut ctx.cursor)?);
	}

	let mut binary_types = Vec::with_capacity(count);
	for _ in 0..count {
		binary_types.push(BinaryType::from_u8(ctx.cursor.read_u8()?)?);
	}

	let mut members = Vec::with_capacity(count);
	for (name, binary_type) in names.into_iter().zip(binary_types) {
		let mut member = MemberMeta {
			name,
			binary_type,
			primitive_type: None,
			class_name: None,
			library_id: None,
		};
		match binary_type {
			BinaryType::Primitive | BinaryType::PrimitiveArray => {
				member.primitive_type = Some(PrimitiveType::from_u8(ctx.cursor.read_u8()?)?);
			}
			BinaryType::SystemClass => {
				member.class_name = Some(read_string(&mut ctx.cursor)?);
			}
			BinaryType::Class => {
				member.class_name = Some(read_string(&mut ctx.cursor)?);
				member.library_id = Some(ctx.cursor.read_i32_le()?);
			}
			BinaryType::String | BinaryType::Object | BinaryType::ObjectArray | BinaryType::StringArray => {}
		}
		members.push(member);
	}

	Ok(ClassMeta { members })
}

/// Read member values against the metadata registered under `metadata_id`,
/// one value per member in declaration order.
fn read_class_members(ctx: &mut Context<'_>, metadata_id: i32) -> Result<Node> {
	let count = ctx.objects.class_meta(metadata_id)?.members.len();
	let mut members = AggregateNode::new("Members");
	for index in 0..count {
		// Clone one member descriptor so the registry borrow is released
		// before recursive reads register new objects.
		let MemberMeta {
			name,
			binary_type,
			primitive_type,
			..
		} = ctx.objects.class_meta(metadata_id)?.members[index].clone();

		let mut member = AggregateNode::new("Member");
		member.add_leaf("Name", Value::String(name));
		member.add(read_element(ctx, binary_type, primitive_type)?);
		members.add(member.into());
	}
	Ok(members.into())
}

/// Read one member or array element value per its type descriptor.
fn read_element(ctx: &mut Context<'_>, binary_type: BinaryType, primitive_type: Option<PrimitiveType>) -> Result<Node> {
	match binary_type {
		BinaryType::Primitive => {
			let kind = primitive_type.ok_or_else(|| NrbfError::CorruptStream {
				detail: "primitive member without a recorded primitive kind".to_owned(),
			})?;
			Ok(LeafNode::with_value("Value", read_primitive(&mut ctx.cursor, kind)?).into())
		}
		BinaryType::String
		| BinaryType::Object
		| BinaryType::SystemClass
		| BinaryType::Class
		| BinaryType::ObjectArray
		| BinaryType::StringArray
		| BinaryType::PrimitiveArray => {
			let tag = read_record_tag(ctx)?;
			read_record(ctx, tag)
		}
	}
}

fn read_serialized_stream_header(ctx: &mut Context<'_>) -> Result<Node> {
	let mut node = AggregateNode::new("SerializedStreamHeader");
	node.add_leaf("RootId", Value::I32(ctx.cursor.read_i32_le()?));
	node.add_leaf("HeaderId", Value::I32(ctx.cursor.read_i32_le()?));
	node.add_leaf("MajorVersion", Value::I32(ctx.cursor.read_i32_le()?));
	node.add_leaf("MinorVersion", Value::I32(ctx.cursor.read_i32_le()?));
	Ok(node.into())
}

fn read_class_with_id(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, object_id) = read_object_header(ctx, "ClassWithId")?;
	let metadata_id = ctx.cursor.read_i32_le()?;
	node.add_leaf("MetadataId", Value::I32(metadata_id));

	// Borrow the defining class's metadata slot; the members below are
	// then read against it.
	ctx.objects.share_class(object_id, metadata_id)?;
	node.add(read_class_members(ctx, metadata_id)?);
	Ok(node.into())
}

fn read_system_class_with_members_and_types(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, object_id) = read_object_header(ctx, "SystemClassWithMembersAndTypes")?;
	node.add_leaf("ObjectName", Value::String(read_string(&mut ctx.cursor)?));

	let meta = read_members_meta(ctx)?;
	node.add(meta.to_node());
	ctx.objects.register_class(object_id, meta);
	node.add(read_class_members(ctx, object_id)?);
	Ok(node.into())
}

fn read_class_with_members_and_types(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, object_id) = read_object_header(ctx, "ClassWithMembersAndTypes")?;
	node.add_leaf("ObjectName", Value::String(read_string(&mut ctx.cursor)?));

	let meta = read_members_meta(ctx)?;
	node.add(meta.to_node());
	node.add_leaf("LibraryId", Value::I32(ctx.cursor.read_i32_le()?));
	ctx.objects.register_class(object_id, meta);
	node.add(read_class_members(ctx, object_id)?);
	Ok(node.into())
}

fn read_binary_object_string(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, _object_id) = read_object_header(ctx, "BinaryObjectString")?;
	node.add_leaf("Value", Value::String(read_string(&mut ctx.cursor)?));
	Ok(node.into())
}

fn read_binary_array(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, _object_id) = read_object_header(ctx, "BinaryArray")?;

	let array_type = BinaryArrayType::from_u8(ctx.cursor.read_u8()?)?;
	node.add_leaf("BinaryArrayType", Value::Enum(array_type.as_str()));

	let rank = ctx.cursor.read_i32_le()?;
	node.add_leaf("Rank", Value::I32(rank));
	if rank < 0 {
		return Err(NrbfError::NegativeLength {
			field: "array rank",
			len: rank,
		});
	}
	let rank = rank as usize;

	let mut dimensions = AggregateNode::new("Dimensions");
	let mut element_count = 0_usize;
	for index in 0..rank {
		let dimension = ctx.cursor.read_i32_le()?;
		dimensions.add_leaf("Dimension", Value::I32(dimension));
		if dimension < 0 {
			return Err(NrbfError::NegativeLength {
				field: "array dimension",
				len: dimension,
			});
		}

		element_count = if index == 0 {
			dimension as usize
		} else {
			element_count.checked_mul(dimension as usize).ok_or_else(|| NrbfError::CorruptStream {
				detail: "array dimension product overflows".to_owned(),
			})?
		};
	}
	node.add(dimensions.into());

	if array_type.has_lower_bounds() {
		let mut lower_bounds = AggregateNode::new("LowerBounds");
		for _ in 0..rank {
			lower_bounds.add_leaf("LowerBound", Value::I32(ctx.cursor.read_i32_le()?));
		}
		node.add(lower_bounds.into());
	}

	let binary_type = BinaryType::from_u8(ctx.cursor.read_u8()?)?;
	let mut primitive_type = None;
	match binary_type {
		BinaryType::Primitive | BinaryType::PrimitiveArray => {
			primitive_type = Some(PrimitiveType::from_u8(ctx.cursor.read_u8()?)?);
		}
		BinaryType::SystemClass => {
			node.add_leaf("ClassName", Value::String(read_string(&mut ctx.cursor)?));
		}
		BinaryType::Class => {
			node.add_leaf("ClassName", Value::String(read_string(&mut ctx.cursor)?));
			node.add_leaf("LibraryId", Value::I32(ctx.cursor.read_i32_le()?));
		}
		BinaryType::String | BinaryType::Object | BinaryType::ObjectArray | BinaryType::StringArray => {}
	}

	let mut elements = AggregateNode::new("Elements");
	for _ in 0..element_count {
		elements.add(read_element(ctx, binary_type, primitive_type)?);
	}
	node.add(elements.into());
	Ok(node.into())
}

fn read_member_primitive_typed(ctx: &mut Context<'_>) -> Result<Node> {
	let kind = PrimitiveType::from_u8(ctx.cursor.read_u8()?)?;
	Ok(LeafNode::with_value("MemberPrimitiveTyped", read_primitive(&mut ctx.cursor, kind)?).into())
}

fn read_member_reference(ctx: &mut Context<'_>) -> Result<Node> {
	// The raw id is surfaced as-is; resolution is left to the consumer,
	// since a reference may point forward in the stream.
	Ok(LeafNode::with_value("MemberReference", Value::I32(ctx.cursor.read_i32_le()?)).into())
}

fn read_binary_library(ctx: &mut Context<'_>) -> Result<Node> {
	let mut node = AggregateNode::new("BinaryLibrary");
	node.add_leaf("LibraryId", Value::I32(ctx.cursor.read_i32_le()?));
	node.add_leaf("LibraryName", Value::String(read_string(&mut ctx.cursor)?));

	let tag = read_record_tag(ctx)?;
	if !tag.is_class() && !tag.is_array() {
		return Err(NrbfError::CorruptStream {
			detail: format!("binary library followed by {} instead of a class or array record", tag.name()),
		});
	}
	node.add(read_record(ctx, tag)?);
	Ok(node.into())
}

fn read_array_single_primitive(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, _object_id) = read_object_header(ctx, "ArraySinglePrimitive")?;
	let length = read_count(ctx, "array length")?;
	let kind = PrimitiveType::from_u8(ctx.cursor.read_u8()?)?;

	let mut elements = AggregateNode::new("Elements");
	for _ in 0..length {
		elements.add_leaf("Element", read_primitive(&mut ctx.cursor, kind)?);
	}
	node.add(elements.into());
	Ok(node.into())
}

fn read_array_single_object(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, _object_id) = read_object_header(ctx, "ArraySingleObject")?;
	let length = read_count(ctx, "array length")?;

	// One record tag is shared by every element of an object array.
	let tag = read_record_tag(ctx)?;
	let mut elements = AggregateNode::new("Elements");
	for _ in 0..length {
		elements.add(read_record(ctx, tag)?);
	}
	node.add(elements.into());
	Ok(node.into())
}

fn read_array_single_string(ctx: &mut Context<'_>) -> Result<Node> {
	let (mut node, _object_id) = read_object_header(ctx, "ArraySingleString")?;
	let length = ctx.cursor.read_u32_le()?;

	let mut elements = AggregateNode::new("Elements");
	for _ in 0..length {
		let tag = read_record_tag(ctx)?;
		elements.add(read_record(ctx, tag)?);
	}
	node.add(elements.into());
	Ok(node.into())
}

/// Read an inline primitive-kind byte followed by a value of that kind.
fn read_typed_value(ctx: &mut Context<'_>) -> Result<Value> {
	let kind = PrimitiveType::from_u8(ctx.cursor.read_u8()?)?;
	read_primitive(&mut ctx.cursor, kind)
}

fn read_method_call(ctx: &mut Context<'_>) -> Result<Node> {
	let mut node = AggregateNode::new("MethodCall");

	let flags = ctx.cursor.read_u32_le()?;
	node.add_leaf("Flags", Value::U32(flags));
	node.add_leaf("MethodName", read_typed_value(ctx)?);
	node.add_leaf("TypeName", read_typed_value(ctx)?);

	if flags & FLAG_CONTEXT_INLINE != 0 {
		node.add_leaf("CallContext", read_typed_value(ctx)?);
	}

	if flags & FLAG_ARGS_INLINE != 0 {
		return Err(NrbfError::UnsupportedFeature {
			feature: "inline method call arguments",
		});
	}
	if flags & FLAG_NO_ARGS == 0 {
		let tag = read_record_tag(ctx)?;
		node.add(read_record(ctx, tag)?.with_role("Args"));
	}

	Ok(node.into())
}
