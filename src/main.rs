use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use propmerge::resolve::{self, Algorithm};
use propmerge::sources::{NameSplitter, load_source, load_sources, parse_manifest_file};
use propmerge::syntax::{Delimiters, Token, Tokenizer};

#[derive(Parser)]
#[command(name = "propmerge")]
#[command(
	author,
	version,
	about = "Merge layered property files and resolve ${key} placeholders"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Merge property files and print the fully resolved map
	Resolve(ResolveArgs),
	/// Parse property files and report circular references
	Check(CheckArgs),
}

#[derive(Args)]
struct ResolveArgs {
	/// Property files in override order (later files win)
	files: Vec<PathBuf>,

	/// Resolution strategy
	#[arg(long, value_enum, default_value_t = AlgorithmArg::Tree)]
	algorithm: AlgorithmArg,

	/// Placeholder opening delimiter
	#[arg(long, default_value = "${")]
	prefix: String,

	/// Placeholder closing delimiter
	#[arg(long, default_value = "}")]
	suffix: String,

	/// Comma-separated source names instead of positional files
	#[arg(long, conflicts_with = "files")]
	list: Option<String>,

	/// Prefix wrapped around each name from --list
	#[arg(long, requires = "list")]
	name_prefix: Option<String>,

	/// Suffix wrapped around each name from --list
	#[arg(long, requires = "list")]
	name_suffix: Option<String>,

	/// Key inside a listed source naming its prototype sources
	#[arg(long, default_value = "prototype")]
	prototype_key: String,

	/// Read sources, algorithm, and delimiters from a manifest file
	#[arg(long, conflicts_with_all = ["files", "list"])]
	manifest: Option<PathBuf>,
}

#[derive(Args)]
struct CheckArgs {
	/// Property files to check, in override order
	files: Vec<PathBuf>,

	/// Placeholder opening delimiter
	#[arg(long, default_value = "${")]
	prefix: String,

	/// Placeholder closing delimiter
	#[arg(long, default_value = "}")]
	suffix: String,
}

/// CLI-facing spelling of the resolution strategies.
#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
	/// Squash maps and resolve recursively; detects circular references
	Squash,
	/// Build a reference tree; parses each value once, no cycle detection
	Tree,
}

impl From<AlgorithmArg> for Algorithm {
	fn from(arg: AlgorithmArg) -> Self {
		match arg {
			AlgorithmArg::Squash => Algorithm::SimpleSquash,
			AlgorithmArg::Tree => Algorithm::BuildTree,
		}
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Resolve(args) => handle_resolve(&args),
		Commands::Check(args) => handle_check(&args),
	}
}

fn handle_resolve(args: &ResolveArgs) -> Result<ExitCode> {
	let (algorithm, delimiters, paths) = if let Some(ref manifest_path) = args.manifest {
		let manifest = parse_manifest_file(manifest_path)
			.with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;
		let paths = if let Some(ref list) = manifest.list {
			expand_list(
				list,
				manifest.name_prefix.as_deref(),
				manifest.name_suffix.as_deref(),
				&manifest.prototype_key,
			)
		} else {
			manifest.sources.clone()
		};
		(manifest.algorithm, manifest.delimiters(), paths)
	} else {
		let delimiters = Delimiters::new(args.prefix.as_str(), args.suffix.as_str());
		let paths = if let Some(ref list) = args.list {
			expand_list(
				list,
				args.name_prefix.as_deref(),
				args.name_suffix.as_deref(),
				&args.prototype_key,
			)
		} else {
			args.files.clone()
		};
		(Algorithm::from(args.algorithm), delimiters, paths)
	};

	if paths.is_empty() {
		anyhow::bail!("No property files given. Pass files, --list, or --manifest.");
	}

	let maps = load_sources(&paths).context("Failed to load property files")?;
	let resolved =
		resolve::merge_with(algorithm, &maps, &delimiters).context("Failed to resolve placeholders")?;

	for (key, value) in &resolved {
		println!("{key} = {value}");
	}

	Ok(ExitCode::SUCCESS)
}

/// Expand a comma-separated name list into file paths, loading each named
/// file's prototype key to pull prototype sources in ahead of it.
fn expand_list(
	list: &str,
	name_prefix: Option<&str>,
	name_suffix: Option<&str>,
	prototype_key: &str,
) -> Vec<PathBuf> {
	let key = prototype_key.to_string();
	let mut splitter = NameSplitter::new().with_prototype_lookup(move |wrapped| {
		load_source(Path::new(wrapped))
			.ok()
			.and_then(|map| map.get(&key).cloned())
	});
	if let Some(prefix) = name_prefix {
		splitter = splitter.with_prefix(prefix);
	}
	if let Some(suffix) = name_suffix {
		splitter = splitter.with_suffix(suffix);
	}

	splitter.split(list).into_iter().map(PathBuf::from).collect()
}

fn handle_check(args: &CheckArgs) -> Result<ExitCode> {
	if args.files.is_empty() {
		println!("No property files to check.");
		return Ok(ExitCode::SUCCESS);
	}

	// Report parse status per file before attempting resolution.
	let mut maps = Vec::new();
	let mut failed = false;
	for path in &args.files {
		match load_source(path) {
			Ok(map) => {
				println!("  {} ({} keys)", path.display(), map.len());
				maps.push(map);
			}
			Err(e) => {
				eprintln!("  {}: {e}", path.display());
				failed = true;
			}
		}
	}
	if failed {
		return Ok(ExitCode::FAILURE);
	}

	let delimiters = Delimiters::new(args.prefix.as_str(), args.suffix.as_str());
	let resolved = match resolve::merge_with(Algorithm::SimpleSquash, &maps, &delimiters) {
		Ok(resolved) => resolved,
		Err(e) => {
			eprintln!("Resolution error: {e}");
			return Ok(ExitCode::FAILURE);
		}
	};

	// Unresolved references are policy, not errors; surface them as warnings.
	let tokenizer = Tokenizer::new(&delimiters).context("Invalid placeholder delimiters")?;
	for (key, value) in &resolved {
		for token in tokenizer.tokenize(value) {
			if let Token::Placeholder { key: reference, .. } = token {
				println!("  warning: '{key}' references undefined key '{reference}'");
			}
		}
	}

	println!("No circular references found.");
	Ok(ExitCode::SUCCESS)
}
