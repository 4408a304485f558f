use std::sync::Arc;
use std::thread;

use super::LayoutCache;
use crate::layout::{LayoutError, SchemaSource};

const POINT: &str = "internal struct Point\n{\npublic Int32 x;\npublic Int32 y;\n}\ninternal struct Pair<T>\n{\npublic T a;\npublic T b;\n}\n";

fn source() -> SchemaSource {
	SchemaSource::from_text("cache-tests", POINT)
}

#[test]
fn second_request_reuses_tree() {
	let cache = LayoutCache::new();
	let source = source();
	let first = cache.get_layout(&source, "Point").expect("first build");
	let second = cache.get_layout(&source, "Point").expect("cached");
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(cache.len(), 1);
}

#[test]
fn invalidate_forces_rebuild() {
	let cache = LayoutCache::new();
	let source = source();
	let first = cache.get_layout(&source, "Point").expect("first build");
	cache.invalidate();
	assert!(cache.is_empty());

	let rebuilt = cache.get_layout(&source, "Point").expect("rebuild");
	assert!(!Arc::ptr_eq(&first, &rebuilt));
	assert_eq!(first, rebuilt);
}

#[test]
fn generic_argument_is_part_of_key() {
	let cache = LayoutCache::new();
	let source = source();
	let narrow = cache.get_or_build(&source, "Pair", Some("Int16")).expect("Pair<Int16>");
	let wide = cache.get_or_build(&source, "Pair", Some("Int64")).expect("Pair<Int64>");
	assert_eq!(narrow.size(), 4);
	assert_eq!(wide.size(), 16);
	assert_eq!(cache.len(), 2);
}

#[test]
fn source_identity_is_part_of_key() {
	let cache = LayoutCache::new();
	let a = SchemaSource::from_text("a", "internal struct R\n{\npublic Int32 v;\n}\n");
	let b = SchemaSource::from_text("b", "internal struct R\n{\npublic Int64 v;\n}\n");
	assert_eq!(cache.get_layout(&a, "R").expect("a builds").size(), 4);
	assert_eq!(cache.get_layout(&b, "R").expect("b builds").size(), 8);
}

#[test]
fn failed_build_is_not_cached() {
	let cache = LayoutCache::new();
	let err = cache.get_layout(&source(), "Missing").expect_err("unknown root fails");
	assert!(matches!(err, LayoutError::SchemaNotFound { .. }));
	assert!(cache.is_empty());
}

#[test]
fn concurrent_first_builds_share_one_tree() {
	let cache = Arc::new(LayoutCache::new());
	let source = Arc::new(source());

	let handles: Vec<_> = (0..8)
		.map(|_| {
			let cache = Arc::clone(&cache);
			let source = Arc::clone(&source);
			thread::spawn(move || cache.get_layout(&source, "Point").expect("build succeeds"))
		})
		.collect();

	let trees: Vec<_> = handles.into_iter().map(|handle| handle.join().expect("thread joins")).collect();
	for tree in &trees[1..] {
		assert!(Arc::ptr_eq(&trees[0], tree));
	}
	assert_eq!(cache.len(), 1);
}
