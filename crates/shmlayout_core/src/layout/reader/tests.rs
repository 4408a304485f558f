use std::sync::Arc;

use super::SnapshotReader;
use crate::layout::{LayoutError, MemorySnapshot, SchemaSource, Value};

fn source(width: &str) -> SchemaSource {
	SchemaSource::from_text(
		"reader-tests",
		&format!("internal struct Shared\n{{\npublic {width} Version;\n[MarshalAs(UnmanagedType.ByValArray, SizeConst = 4)]\npublic byte[] Name;\n}}\n"),
	)
}

#[test]
fn value_before_snapshot_fails() {
	let reader = SnapshotReader::new(source("Int32"), "Shared");
	assert!(matches!(reader.get_value("Version"), Err(LayoutError::NoSnapshot)));
}

#[test]
fn update_buffer_trims_to_layout() {
	let mut reader = SnapshotReader::new(source("Int32"), "Shared");
	let mut bytes = 5_i32.to_le_bytes().to_vec();
	bytes.extend_from_slice(b"Spa\0");
	bytes.extend_from_slice(&[0xAA; 8]);

	let held = reader.update_buffer(&mut MemorySnapshot::new(bytes)).expect("snapshot fits").len();
	assert_eq!(held, 8);
	assert_eq!(reader.required_len().expect("layout builds"), 8);
	assert_eq!(reader.get_value("Version").expect("Version decodes"), Value::I64(5));
	assert_eq!(reader.get_value("Shared.Name").expect("Name decodes"), Value::String("Spa".into()));
	assert!(matches!(reader.get_root().expect("root decodes"), Value::Struct(_)));
}

#[test]
fn short_snapshot_is_rejected() {
	let mut reader = SnapshotReader::new(source("Int32"), "Shared");
	let err = reader.update_buffer(&mut MemorySnapshot::new(vec![0; 6])).expect_err("too short");
	assert!(matches!(err, LayoutError::BufferUnderrun { need: 8, have: 6 }));
	assert!(reader.buffer().is_none());
}

#[test]
fn reload_rebuilds_layout() {
	let mut reader = SnapshotReader::new(source("Int32"), "Shared");
	let before = reader.layout().expect("layout builds");
	assert_eq!(before.end, 8);

	reader.reload_schema(source("Int64"));
	let after = reader.layout().expect("layout rebuilds");
	assert!(!Arc::ptr_eq(&before, &after));
	assert_eq!(after.end, 12);
}

#[test]
fn missing_root_surfaces_on_first_use() {
	let reader = SnapshotReader::new(source("Int32"), "Other");
	assert!(matches!(reader.required_len(), Err(LayoutError::SchemaNotFound { .. })));
}
