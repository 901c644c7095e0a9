//! Interactive menu over a binary search tree of integers.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use bstree::command::{Command, Key, Outcome, Session};
use bstree::error::Error;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bstree")]
#[command(about = "Add, delete, and search integer keys in a binary search tree", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Don't print the menu or prompts, for piped input
    #[arg(long)]
    no_menu: bool,

    /// Comma-separated keys to insert before reading commands
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    preload: Vec<Key>,
}

const MENU: &str = "\
Binary Search Tree Menu:
1. Add an element to the BST
2. Delete element in the BST
3. Search element in the BST
4. Exit";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::with_keys(cli.preload.iter().copied());
    info!(len = session.tree().len(), "preloaded keys");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        if !cli.no_menu {
            writeln!(stdout, "{}", MENU)?;
            prompt(&mut stdout, "Enter your choice: ")?;
        }
        let line = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => break,
        };

        let command = match line.parse::<Command>() {
            // A bare menu choice asks for its key on the next line, like the numbered menu.
            Err(Error::MissingKey(name)) => {
                if !cli.no_menu {
                    prompt(&mut stdout, &format!("Enter the element to {}: ", name))?;
                }
                let key = match lines.next() {
                    Some(key) => key.context("failed to read from stdin")?,
                    None => break,
                };
                format!("{} {}", line.trim(), key.trim()).parse::<Command>()
            }
            parsed => parsed,
        };

        match command {
            Ok(command) => {
                let outcome = session.execute(command);
                writeln!(stdout, "{}", outcome)?;
                if outcome == Outcome::Exit {
                    break;
                }
            }
            Err(Error::Empty) => {}
            Err(err) => {
                warn!(%err, line = line.as_str(), "rejected command");
                writeln!(stdout, "Invalid choice. Please try again. ({})", err)?;
            }
        }
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout, text: &str) -> io::Result<()> {
    write!(stdout, "{}", text)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_accepts_leading_negative_key() {
        let cli = Cli::try_parse_from(["bstree", "--preload", "-5,3"]).unwrap();
        assert_eq!(cli.preload, [-5, 3]);

        let cli = Cli::try_parse_from(["bstree", "--preload=-5,-3", "--no-menu"]).unwrap();
        assert_eq!(cli.preload, [-5, -3]);
        assert!(cli.no_menu);
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bstree"]).unwrap();

        assert!(cli.preload.is_empty());
        assert!(!cli.verbose);
        assert!(!cli.no_menu);
    }

    #[test]
    fn preload_rejects_non_integer_keys() {
        assert!(Cli::try_parse_from(["bstree", "--preload", "1,two"]).is_err());
    }
}
