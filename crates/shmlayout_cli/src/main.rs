#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "shmlayout", about = "Packed struct layout and shared-memory snapshot tools")]
struct Cli {
	/// Log filter directive, e.g. `debug` or `shmlayout=trace`.
	#[arg(long, global = true)]
	log_level: Option<String>,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List struct declarations in a schema file.
	Structs { schema: PathBuf },
	/// Print the byte layout of a struct or one of its fields.
	Layout {
		#[command(flatten)]
		schema: cmd::SchemaArgs,
		#[arg(long)]
		path: Option<String>,
		#[arg(long)]
		json: bool,
	},
	/// Decode a value from a snapshot capture.
	Get {
		path: Option<String>,
		/// Snapshot capture file; defaults to the config value.
		#[arg(long)]
		snapshot: Option<PathBuf>,
		#[command(flatten)]
		schema: cmd::SchemaArgs,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.log_level.as_deref());

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(level: Option<&str>) {
	let filter = match level {
		Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn")),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(command: Commands) -> shmlayout::layout::Result<()> {
	match command {
		Commands::Structs { schema } => cmd::structs::run(schema),
		Commands::Layout { schema, path, json } => cmd::layout::run(schema, path, json),
		Commands::Get { path, snapshot, schema, json } => cmd::get::run(snapshot, path, schema, json),
	}
}
