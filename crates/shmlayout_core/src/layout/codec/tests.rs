use super::{decode, decode_text_bytes};
use crate::layout::{FieldValue, LayoutError, SchemaSource, StructValue, Value, parse_struct};

const SCHEMA: &str = r#"
internal struct Point
{
	public Int32 x;
	public Int32 y;
}

internal struct Label
{
	[MarshalAs(UnmanagedType.ByValArray, SizeConst = 4)]
	public byte[] text;
}

internal struct Track
{
	public UInt16 id;
	[MarshalAs(UnmanagedType.ByValArray, SizeConst = 2)]
	public Point[] corners;
	[MarshalAs(UnmanagedType.ByValArray, SizeConst = 3)]
	public Single[] sectors;
	public Label name;
	public Boolean wet;
	public Void end;
}
"#;

fn source() -> SchemaSource {
	SchemaSource::from_text("codec-tests", SCHEMA)
}

fn point_value(x: i64, y: i64) -> Value {
	Value::Struct(StructValue {
		type_name: "Point".into(),
		fields: vec![
			FieldValue {
				name: "x".into(),
				value: Value::I64(x),
			},
			FieldValue {
				name: "y".into(),
				value: Value::I64(y),
			},
		],
	})
}

#[test]
fn point_decodes_to_named_fields() {
	let node = parse_struct(&source(), "Point", None, 0).expect("Point parses");
	let value = decode(&[0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00], &node).expect("decode");

	let Value::Struct(item) = &value else {
		panic!("expected struct, got {}", value.kind());
	};
	assert_eq!(item.type_name.as_ref(), "Point");
	assert_eq!(item.field("x"), Some(&Value::I64(1)));
	assert_eq!(item.field("y"), Some(&Value::I64(2)));
	assert_eq!(value, point_value(1, 2));
}

#[test]
fn byte_array_becomes_text() {
	let node = parse_struct(&source(), "Label", None, 0).expect("Label parses");
	let value = decode(&[0x41, 0x42, 0x00, 0x00], &node).expect("decode");
	assert_eq!(value.field("text").and_then(Value::as_str), Some("AB"));
}

#[test]
fn zero_filled_text_is_empty() {
	let node = parse_struct(&source(), "Label", None, 0).expect("Label parses");
	let value = decode(&[0_u8; 4], &node).expect("decode");
	assert_eq!(value.field("text").and_then(Value::as_str), Some(""));
}

#[test]
fn unterminated_text_uses_full_length() {
	let node = parse_struct(&source(), "Label", None, 0).expect("Label parses");
	let value = decode(b"ABCD", &node).expect("decode");
	assert_eq!(value.field("text").and_then(Value::as_str), Some("ABCD"));
}

#[test]
fn invalid_utf8_is_replaced() {
	assert_eq!(decode_text_bytes(&[0x41, 0xFF, 0x42, 0x00, 0x43]).as_ref(), "A\u{FFFD}B");
}

#[test]
fn short_buffer_is_underrun() {
	let node = parse_struct(&source(), "Point", None, 0).expect("Point parses");
	let err = decode(&[0_u8; 6], &node).expect_err("two bytes short");
	assert!(matches!(err, LayoutError::BufferUnderrun { need: 8, have: 6 }));
}

#[test]
fn nested_track_decodes() {
	let node = parse_struct(&source(), "Track", None, 0).expect("Track parses");
	assert_eq!(node.size(), 2 + 16 + 12 + 4 + 1);

	let mut bytes = 7_u16.to_le_bytes().to_vec();
	for value in [1_i32, 2, 3, 4] {
		bytes.extend_from_slice(&value.to_le_bytes());
	}
	for value in [10.5_f32, 20.25, 30.0] {
		bytes.extend_from_slice(&value.to_le_bytes());
	}
	bytes.extend_from_slice(b"Spa\0");
	bytes.push(1);

	let value = decode(&bytes, &node).expect("decode");
	assert_eq!(value.field("id"), Some(&Value::U64(7)));
	assert_eq!(value.field("corners"), Some(&Value::Array(vec![point_value(1, 2), point_value(3, 4)])));
	assert_eq!(
		value.field("sectors"),
		Some(&Value::Array(vec![Value::F32(10.5), Value::F32(20.25), Value::F32(30.0)]))
	);
	assert_eq!(value.field("name").and_then(|name| name.field("text")).and_then(Value::as_str), Some("Spa"));
	assert_eq!(value.field("wet"), Some(&Value::Bool(true)));
	assert_eq!(value.field("end"), Some(&Value::Null));
}

#[test]
fn subtree_uses_absolute_offsets() {
	let node = parse_struct(&source(), "Track", None, 0).expect("Track parses");
	let corner = node.child("corners").and_then(|item| item.element(1)).expect("second corner");

	let mut bytes = vec![0_u8; node.size()];
	bytes[corner.start..corner.start + 4].copy_from_slice(&9_i32.to_le_bytes());
	let value = decode(&bytes, corner).expect("decode corner");
	assert_eq!(value.field("x"), Some(&Value::I64(9)));
	assert_eq!(value.field("y"), Some(&Value::I64(0)));
}

#[test]
fn single_scalar_is_unwrapped() {
	let node = parse_struct(&source(), "Track", None, 0).expect("Track parses");
	let id = node.child("id").expect("id");
	let bytes = [0x34, 0x12];
	assert_eq!(decode(&bytes, id).expect("decode id"), Value::U64(0x1234));
}

#[test]
fn decode_is_repeatable() {
	let node = parse_struct(&source(), "Track", None, 0).expect("Track parses");
	let bytes: Vec<u8> = (0..node.size() as u8).collect();
	assert_eq!(decode(&bytes, &node).expect("first"), decode(&bytes, &node).expect("second"));
}
