use std::io::Write;

use super::SchemaSource;

const RAW: &str = "namespace Demo\r\n{\r\n\t\tinternal struct Point\r\n\t{\r\n\r\n\t\t// horizontal\r\n\t\tpublic Int32 x;  \r\n\t\tpublic Int32 y;\r\n\t}\r\n}\r\n";

#[test]
fn lines_are_trimmed_and_blank_lines_dropped() {
	let source = SchemaSource::from_text("raw", RAW);
	let lines: Vec<&str> = source.lines().iter().map(AsRef::as_ref).collect();
	assert_eq!(
		lines,
		vec!["namespace Demo", "{", "internal struct Point", "{", "public Int32 x;", "public Int32 y;", "}", "}"]
	);
	assert_eq!(source.id(), "raw");
}

#[test]
fn load_reads_plain_files() {
	let mut file = tempfile::NamedTempFile::new().expect("temp file");
	file.write_all(RAW.as_bytes()).expect("write schema");

	let source = SchemaSource::load(file.path()).expect("schema loads");
	assert_eq!(source.id(), file.path().display().to_string());
	assert_eq!(source, SchemaSource::from_text(source.id().to_owned(), RAW));
}

#[test]
fn load_inflates_zstd_files() {
	let mut file = tempfile::NamedTempFile::new().expect("temp file");
	let packed = zstd::encode_all(RAW.as_bytes(), 3).expect("zstd encodes");
	file.write_all(&packed).expect("write schema");

	let source = SchemaSource::load(file.path()).expect("schema loads");
	assert!(source.lines().iter().any(|line| line.as_ref() == "internal struct Point"));
}

#[test]
fn load_reports_missing_files() {
	let dir = tempfile::tempdir().expect("temp dir");
	let err = SchemaSource::load(dir.path().join("missing.cs")).expect_err("missing file fails");
	assert!(matches!(err, crate::layout::LayoutError::Io(_)));
}
