//! Command-line shell around one tree.
//!
//! ## Usage
//!
//! ```text
//! redblack [KEYS...] [--insert K]... [--delete K]... [--search K]...
//!          [--capacity N] [-v | -vv]
//! ```
//!
//! Positional arguments are whitespace-separated key lists used to build
//! the initial tree. Operations then run in command-line order. Every key
//! token is validated here; the tree never sees malformed input.
//!
//! ## Example
//!
//! ```
//! use redblack::shell::{run, ShellOptions};
//!
//! let options = ShellOptions::parse(["10 20", "30", "--delete", "20"]).unwrap();
//! let mut out = Vec::new();
//! let tree = run(&options, &mut out).unwrap();
//!
//! assert_eq!(tree.keys().collect::<Vec<_>>(), vec![10, 30]);
//! ```

use std::io::{self, Write};

use log::{info, warn, LevelFilter};
use thiserror::Error;

use crate::tree::RedBlackTree;
use crate::types::ExportSlot;

pub const USAGE: &str = "usage: redblack [KEYS...] [--insert K]... [--delete K]... \
[--search K]... [--capacity N] [-v|-vv]";

/// Command-line failures, reported before any tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A key token could not be parsed as an integer
    #[error("invalid key {token:?}: expected an integer")]
    InvalidInput { token: String },

    #[error("unknown option {0:?}")]
    UnknownOption(String),

    #[error("option {0} expects a value")]
    MissingArgument(&'static str),
}

/// One scripted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Delete(i64),
    Search(i64),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellOptions {
    /// Keys for the initial construction, in order
    pub keys: Vec<i64>,

    /// Operations applied after construction
    pub ops: Vec<Op>,

    /// Slab pre-allocation; defaults to the number of keys and inserts
    pub capacity: Option<usize>,

    /// 0 = warn, 1 = debug, 2+ = trace
    pub verbosity: u8,

    pub help: bool,
}

impl ShellOptions {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Self, ShellError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => options.help = true,
                "-v" => options.verbosity = options.verbosity.saturating_add(1),
                "-vv" => options.verbosity = options.verbosity.saturating_add(2),
                "--insert" | "--delete" | "--search" | "--capacity" => {
                    let flag = flag_name(arg);
                    let value = args.next().ok_or(ShellError::MissingArgument(flag))?;
                    let value = value.as_ref();
                    match flag {
                        "--insert" => options.ops.push(Op::Insert(parse_key(value)?)),
                        "--delete" => options.ops.push(Op::Delete(parse_key(value)?)),
                        "--search" => options.ops.push(Op::Search(parse_key(value)?)),
                        _ => {
                            let capacity = value.trim().parse::<usize>().map_err(|_| {
                                ShellError::InvalidInput {
                                    token: value.to_string(),
                                }
                            })?;
                            options.capacity = Some(capacity);
                        }
                    }
                }
                other if other.starts_with("--") => {
                    return Err(ShellError::UnknownOption(other.to_string()));
                }
                text => options.keys.extend(parse_keys(text)?),
            }
        }

        Ok(options)
    }

    /// Logger level for the configured verbosity
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn flag_name(arg: &str) -> &'static str {
    match arg {
        "--insert" => "--insert",
        "--delete" => "--delete",
        "--search" => "--search",
        _ => "--capacity",
    }
}

/// Parse one key token
///
/// # Example
///
/// ```
/// use redblack::shell::parse_key;
///
/// assert_eq!(parse_key("-12"), Ok(-12));
/// assert!(parse_key("twelve").is_err());
/// ```
pub fn parse_key(token: &str) -> Result<i64, ShellError> {
    token.trim().parse::<i64>().map_err(|_| ShellError::InvalidInput {
        token: token.to_string(),
    })
}

/// Parse a whitespace-separated key list; the first bad token fails the list
pub fn parse_keys(text: &str) -> Result<Vec<i64>, ShellError> {
    text.split_whitespace().map(parse_key).collect()
}

/// Build the tree, apply the scripted operations and print the result.
///
/// Deleting or searching for an absent key reports "not found" and the
/// session continues.
pub fn run<W: Write>(options: &ShellOptions, out: &mut W) -> io::Result<RedBlackTree> {
    let capacity = options.capacity.unwrap_or(options.keys.len() + options.ops.len());
    let mut tree: RedBlackTree = RedBlackTree::with_capacity(capacity);
    for &key in &options.keys {
        tree.insert_key(key);
    }
    info!("built tree {} with {} keys", tree.id(), options.keys.len());

    for op in &options.ops {
        match *op {
            Op::Insert(key) => {
                tree.insert_key(key);
                writeln!(out, "insert {key}: ok")?;
            }
            Op::Delete(key) => match tree.remove_key(key) {
                Some(_) => writeln!(out, "delete {key}: ok")?,
                None => {
                    warn!("delete {key}: not found");
                    writeln!(out, "delete {key}: not found")?;
                }
            },
            Op::Search(key) => match tree.search(key) {
                Some(handle) => {
                    let color = tree.color_of(handle).unwrap_or_default();
                    writeln!(out, "search {key}: found ({color:?})")?;
                }
                None => writeln!(out, "search {key}: not found")?,
            },
        }
    }

    print_tree(&tree, out)?;
    Ok(tree)
}

/// Write the breadth-first export, in-order keys, stats and state root
pub fn print_tree<V, W: Write>(tree: &RedBlackTree<V>, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "tree: {} nodes, height {}, black height {}",
        tree.len(),
        tree.height(),
        tree.black_height()
    )?;

    for slot in tree.export() {
        let indent = "  ".repeat(slot.depth() + 1);
        match slot {
            ExportSlot::Node(view) => {
                writeln!(out, "{indent}{} {:?}", view.key, view.color)?
            }
            ExportSlot::Nil { .. } => writeln!(out, "{indent}NIL")?,
        }
    }

    let keys: Vec<String> = tree.keys().map(|key| key.to_string()).collect();
    writeln!(out, "in-order: [{}]", keys.join(", "))?;

    let root = tree.state_root_hex().map_err(io::Error::other)?;
    writeln!(out, "state root: {root}")
}

// ============================================================================
// Unit Tests
// ============================================================================
