use std::path::PathBuf;

use shmlayout::layout::{Result, SchemaSource, scan_headers};

/// List every struct header with its generic placeholder.
pub fn run(schema: PathBuf) -> Result<()> {
	let source = SchemaSource::load(&schema)?;
	let headers = scan_headers(&source);

	println!("schema: {}", schema.display());
	println!("structs: {}", headers.len());
	for header in headers {
		match header.placeholder {
			Some(placeholder) => println!("  {}<{}>", header.name, placeholder),
			None => println!("  {}", header.name),
		}
	}

	Ok(())
}
