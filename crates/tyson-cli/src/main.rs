//! `tyson` CLI — query and edit JSON objects by key path from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the value at a dotted key path (stdin → stdout)
//! echo '{"obj":{"num":42}}' | tyson get obj.num
//!
//! # Require a type; an empty result exits with status 1
//! tyson get obj.num --as int -i data.json
//!
//! # Fall back to a default instead of failing
//! tyson get obj.missing --as string --default '"none"' -i data.json
//!
//! # Check, set, and remove top-level keys
//! tyson has obj -i data.json
//! tyson set name '"Alice"' -i data.json -o data.json
//! tyson remove obj -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tyson::{Document, KeyPath, Node, Object};

#[derive(Parser)]
#[command(
    name = "tyson",
    version,
    about = "Typed key-path queries over JSON objects"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log lookups and I/O to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a dotted key path
    Get {
        /// Dotted key path, e.g. "event.creator.email" (empty for the root)
        path: String,
        /// Type the value must have
        #[arg(long = "as", value_enum, default_value_t = Kind::Any)]
        kind: Kind,
        /// JSON value to print if nothing of the requested type is found
        #[arg(long)]
        default: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print whether a top-level key is present
    Has {
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Assign a JSON value to a top-level key
    Set {
        key: String,
        /// The value, as JSON (strings need quotes: '"text"')
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Delete a top-level key (no-op if absent)
    Remove {
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Target type of a `get` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Any,
    Bool,
    Float,
    Int,
    String,
    Object,
    Array,
    Bools,
    Floats,
    Ints,
    Strings,
    Objects,
    Arrays,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Any => "any",
            Kind::Bool => "bool",
            Kind::Float => "float",
            Kind::Int => "int",
            Kind::String => "string",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Bools => "bools",
            Kind::Floats => "floats",
            Kind::Ints => "ints",
            Kind::Strings => "strings",
            Kind::Objects => "objects",
            Kind::Arrays => "arrays",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Get {
            path,
            kind,
            default,
            input,
        } => {
            let doc = read_document(input.as_deref())?;
            let fallback = default
                .as_deref()
                .map(serde_json::from_str::<Value>)
                .transpose()
                .context("Failed to parse --default as JSON")?;

            let keys = KeyPath::parse(&path);
            debug!(path = %keys, kind = kind.name(), "query");

            match query(doc.object(), keys.keys(), kind)? {
                Node::Value(found) => println!("{}", found),
                Node::Empty => match fallback {
                    Some(value) => println!("{}", value),
                    None => {
                        eprintln!("no {} value at '{}'", kind.name(), path);
                        process::exit(1);
                    }
                },
            }
        }
        Commands::Has { key, input } => {
            let doc = read_document(input.as_deref())?;
            println!("{}", doc.has(&key));
        }
        Commands::Set {
            key,
            value,
            input,
            output,
        } => {
            let mut doc = read_document(input.as_deref())?;
            let value: Value = serde_json::from_str(&value)
                .with_context(|| format!("Failed to parse value for '{}' as JSON", key))?;
            if doc.set(key.as_str(), value).is_some() {
                debug!(key = %key, "overwrote existing value");
            }
            write_document(output.as_deref(), &doc)?;
        }
        Commands::Remove { key, input, output } => {
            let mut doc = read_document(input.as_deref())?;
            if doc.remove(&key).is_none() {
                debug!(key = %key, "key not present");
            }
            write_document(output.as_deref(), &doc)?;
        }
    }

    Ok(())
}

/// Run a typed lookup and render the result back to JSON.
fn query(object: Object<'_>, keys: &[&str], kind: Kind) -> Result<Node<Value>> {
    fn json<T: serde::Serialize>(node: Node<T>) -> Result<Node<Value>> {
        match node {
            Node::Value(v) => Ok(Node::Value(serde_json::to_value(v)?)),
            Node::Empty => Ok(Node::Empty),
        }
    }

    match kind {
        Kind::Any => json(object.get(keys)),
        Kind::Bool => json(object.get_bool(keys)),
        Kind::Float => json(object.get_f64(keys)),
        Kind::Int => json(object.get_int(keys)),
        Kind::String => json(object.get_str(keys)),
        Kind::Object => json(object.get_object(keys)),
        Kind::Array => json(object.get_array(keys)),
        Kind::Bools => json(object.get_bools(keys)),
        Kind::Floats => json(object.get_f64s(keys)),
        Kind::Ints => json(object.get_ints(keys)),
        Kind::Strings => json(object.get_strs(keys)),
        Kind::Objects => json(object.get_objects(keys)),
        Kind::Arrays => json(object.get_arrays(keys)),
    }
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "tyson=debug" } else { "tyson=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_document(path: Option<&Path>) -> Result<Document> {
    let json = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read from stdin")?,
    };
    debug!(
        source = %path.map_or("<stdin>".into(), |p| p.display().to_string()),
        bytes = json.len(),
        "read input"
    );
    Document::parse(&json).context("Failed to parse input as a JSON object")
}

/// Pretty-print `doc` to `path`, or to stdout when no path is given.
fn write_document(path: Option<&Path>, doc: &Document) -> Result<()> {
    let pretty = serde_json::to_string_pretty(doc)?;
    match path {
        Some(path) => fs::write(path, pretty + "\n")
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => {
            println!("{}", pretty);
            Ok(())
        }
    }
}
