use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::render::{format_timestamp, render_outline};
use crate::loader::load_thread;
use crate::tree::ThreadTree;
use crate::utils::{DEFAULT_MAX_ARCHIVE_BYTES, MAX_BYTES_ENV, single_line};

#[derive(Parser)]
#[command(name = "thread-archive")]
#[command(version = "0.1.0")]
#[command(about = "Rebuild reply threads from line-delimited JSON post archives", long_about = None)]
pub struct Cli {
    /// Maximum archive size in bytes
    #[arg(long, global = true, env = MAX_BYTES_ENV, default_value_t = DEFAULT_MAX_ARCHIVE_BYTES)]
    pub max_size: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about an archived thread
    Stats {
        /// Archive file (one JSON post per line)
        file: PathBuf,
    },
    /// Print the reply tree of an archived thread
    Tree {
        /// Archive file (one JSON post per line)
        file: PathBuf,
        /// Print the tree as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Stats { file }) => {
            show_stats(file, cli.max_size)?;
        }
        Some(Commands::Tree { file, json }) => {
            show_tree(file, cli.max_size, *json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Load a thread, reporting hidden posts on stderr
fn load(file: &Path, max_size: u64) -> Result<Option<ThreadTree>> {
    let thread = load_thread(file, max_size)?;

    match &thread {
        Some(thread) => {
            if let Some(notice) = thread.orphan_notice() {
                eprintln!("Warning: {}", notice);
            }
        }
        None => println!("Archive contains no posts"),
    }

    Ok(thread)
}

fn show_stats(file: &Path, max_size: u64) -> Result<()> {
    let Some(thread) = load(file, max_size)? else {
        return Ok(());
    };
    let root = &thread.root;

    let timestamps: Vec<i64> = root.walk().filter_map(|(_, node)| node.post.timestamp).collect();

    println!("Thread Archive Statistics");
    println!("=========================");
    println!("Posts in tree: {}", thread.post_count());
    println!(
        "  Root: {} by @{}",
        root.id(),
        single_line(&root.post.author_handle, 40)
    );
    println!("  Direct replies: {}", root.len_children());
    println!("  Longest reply chain: {}", root.depth());
    println!("Orphaned posts: {}", thread.orphan_count());
    if thread.detached_reply_count() > 0 {
        println!("  Replies hidden with them: {}", thread.detached_reply_count());
    }

    if let Some(earliest) = timestamps.iter().min() {
        println!("Earliest post: {}", format_timestamp(Some(*earliest)));
    }
    if let Some(latest) = timestamps.iter().max() {
        println!("Latest post: {}", format_timestamp(Some(*latest)));
    }

    Ok(())
}

fn show_tree(file: &Path, max_size: u64, json: bool) -> Result<()> {
    let Some(thread) = load(file, max_size)? else {
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &thread.root)?;
        writeln!(stdout)?;
    } else {
        for line in render_outline(&thread.root) {
            writeln!(stdout, "{}", line)?;
        }
    }

    Ok(())
}
