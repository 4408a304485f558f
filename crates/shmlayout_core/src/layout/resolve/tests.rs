use super::{get_value, resolve};
use crate::layout::{FieldPath, LayoutError, LayoutNode, SchemaSource, Value, parse_struct};

const SCHEMA: &str = "internal struct Point\n{\npublic Int32 x;\npublic Int32 y;\n}\ninternal struct Shared\n{\npublic Int32 Version;\n[MarshalAs(UnmanagedType.ByValArray, SizeConst = 2)]\npublic Point[] Points;\n}\n";

fn layout(root: &str) -> LayoutNode {
	parse_struct(&SchemaSource::from_text("resolve-tests", SCHEMA), root, None, 0).expect("layout parses")
}

fn point_bytes() -> Vec<u8> {
	vec![0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]
}

#[test]
fn qualified_field_resolves_to_scalar() {
	let root = layout("Point");
	assert_eq!(get_value(&point_bytes(), &root, "Point.x").expect("Point.x decodes"), Value::I64(1));
	assert_eq!(get_value(&point_bytes(), &root, "y").expect("y decodes"), Value::I64(2));
}

#[test]
fn unknown_field_is_reported() {
	let root = layout("Point");
	let err = get_value(&point_bytes(), &root, "Point.z").expect_err("z is not a field");
	assert!(matches!(
		err,
		LayoutError::FieldNotFound { ref segment, ref type_name } if segment == "z" && type_name == "Point"
	));
}

#[test]
fn odd_segments_are_reported_as_missing_fields() {
	let root = layout("Point");
	for (path, segment) in [("Point.-1", "-1"), ("Point.z-1", "z-1"), ("Point.x y", "x y"), ("Point.99999999999999999999999", "99999999999999999999999")] {
		let err = get_value(&point_bytes(), &root, path).expect_err("segment does not resolve");
		assert!(
			matches!(err, LayoutError::FieldNotFound { segment: ref seg, ref type_name } if seg == segment && type_name == "Point"),
			"{path}: {err}"
		);
	}
}

#[test]
fn overflowing_index_on_array_is_reported() {
	let root = layout("Shared");
	let err = get_value(&[0; 20], &root, "Points.18446744073709551616").expect_err("index overflows");
	assert!(matches!(
		err,
		LayoutError::FieldNotFound { ref segment, ref type_name } if segment == "18446744073709551616" && type_name == "Point[]"
	));
}

#[test]
fn numeric_segment_indexes_arrays() {
	let root = layout("Shared");
	let node = resolve(&root, &FieldPath::parse("Points.1.y").expect("path parses")).expect("resolves");
	assert_eq!((node.start, node.end), (16, 20));

	let bracket = resolve(&root, &FieldPath::parse("Points[1].y").expect("path parses")).expect("resolves");
	assert_eq!(node, bracket);
}

#[test]
fn out_of_range_index_is_reported() {
	let root = layout("Shared");
	let err = resolve(&root, &FieldPath::parse("Points.2").expect("path parses")).expect_err("only two points");
	assert!(matches!(
		err,
		LayoutError::FieldNotFound { ref segment, ref type_name } if segment == "2" && type_name == "Point[]"
	));
}

#[test]
fn index_on_struct_is_reported() {
	let root = layout("Shared");
	let err = resolve(&root, &FieldPath::parse("Version.0").expect("path parses")).expect_err("scalar has no elements");
	assert!(matches!(err, LayoutError::FieldNotFound { ref type_name, .. } if type_name == "Int32"));
}

#[test]
fn whole_array_decodes_to_list() {
	let root = layout("Shared");
	let mut bytes = 3_i32.to_le_bytes().to_vec();
	for value in [10_i32, 11, 20, 21] {
		bytes.extend_from_slice(&value.to_le_bytes());
	}

	let Value::Array(points) = get_value(&bytes, &root, "Points").expect("Points decodes") else {
		panic!("expected array");
	};
	assert_eq!(points.len(), 2);
	assert_eq!(points[1].field("x"), Some(&Value::I64(20)));
	assert_eq!(get_value(&bytes, &root, "Shared.Version").expect("Version decodes"), Value::I64(3));
}

#[test]
fn invalid_path_syntax_fails_before_decode() {
	let root = layout("Point");
	let err = get_value(&[], &root, "x..y").expect_err("bad syntax");
	assert!(matches!(err, LayoutError::InvalidFieldPath { .. }));
}
