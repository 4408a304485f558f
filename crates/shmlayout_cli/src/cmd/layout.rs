use shmlayout::layout::{FieldPath, LayoutCache, Result, UnpackFormat, resolve};

use crate::cmd::SchemaArgs;
use crate::cmd::print::print_layout;

/// Print the layout of the root struct or of the subtree at `path`.
pub fn run(args: SchemaArgs, path: Option<String>, json: bool) -> Result<()> {
	let resolved = args.resolve()?;
	let cache = LayoutCache::with_options(resolved.config.parse.clone());
	let root = cache.get_layout(&resolved.source, &resolved.root)?;
	let node = match &path {
		Some(path) => resolve(root.as_ref(), &FieldPath::parse(path)?)?,
		None => root.as_ref(),
	};

	if json {
		println!("{}", serde_json::to_string_pretty(node).map_err(std::io::Error::other)?);
		return Ok(());
	}

	let format = UnpackFormat::for_node(node);
	println!("schema: {}", resolved.source.id());
	println!("root: {}", resolved.root);
	if let Some(path) = &path {
		println!("path: {path}");
	}
	println!("range: {}..{}", node.start, node.end);
	println!("size: {}", node.size());
	println!("values: {}", format.value_count());
	println!("format: {format}");
	println!("layout:");
	print_layout(path.as_deref().unwrap_or(&resolved.root), node, 2);

	Ok(())
}
