//! The menu-driven front end to a [`Tree`]: lines of input become [`Command`]s and a
//! [`Session`] applies them to the tree it owns, reporting each result as an [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use bstree::command::{Command, Outcome, Session};
//!
//! let mut session = Session::new();
//! for line in ["1 50", "add 30", "insert 70"] {
//!     session.execute(line.parse().unwrap());
//! }
//!
//! let outcome = session.execute("search 30".parse().unwrap());
//! assert_eq!(
//!     outcome.to_string(),
//!     "Element found in the BST.\nParent: 50\nLeft Child: none\nRight Child: none"
//! );
//!
//! assert_eq!(session.execute(Command::Exit), Outcome::Exit);
//! ```

use std::fmt;
use std::mem;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::owned::Tree;

/// The key type the command layer works with.
pub type Key = i64;

/// One thing to do to the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add the key to the tree.
    Insert(Key),
    /// Remove the key from the tree.
    Delete(Key),
    /// Look the key up and report its parent and children.
    Search(Key),
    /// List every key in order.
    Print,
    /// Stop reading commands.
    Exit,
}

impl FromStr for Command {
    type Err = Error;

    /// Accepts the numbered menu choices (`1 <key>` add, `2 <key>` delete, `3 <key>` search,
    /// `4` exit) as well as command words like `insert 5` or `quit`. Case is ignored.
    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(Error::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "1" | "add" | "insert" | "i" => Self::Insert(parse_key(words.next(), "add")?),
            "2" | "delete" | "del" | "remove" | "d" => {
                Self::Delete(parse_key(words.next(), "delete")?)
            }
            "3" | "search" | "find" | "s" => Self::Search(parse_key(words.next(), "search")?),
            "print" | "list" | "p" => Self::Print,
            "4" | "exit" | "quit" | "q" => Self::Exit,
            _ => return Err(Error::UnknownCommand(head.to_string())),
        };

        match words.next() {
            Some(extra) => Err(Error::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_key(word: Option<&str>, command: &'static str) -> Result<Key> {
    let word = word.ok_or(Error::MissingKey(command))?;
    word.parse().map_err(|source| Error::InvalidKey {
        input: word.to_string(),
        source,
    })
}

/// Owned copies of the keys around a node found by a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbours {
    /// The parent's key, `None` for the root.
    pub parent: Option<Key>,
    /// The left child's key.
    pub left: Option<Key>,
    /// The right child's key.
    pub right: Option<Key>,
}

/// The result of executing a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The key was inserted, or was already present if `duplicate`.
    Inserted {
        /// The inserted key.
        key: Key,
        /// Whether the tree already held the key, leaving it unchanged.
        duplicate: bool,
    },
    /// The key was deleted, or wasn't there to begin with unless `existed`.
    Deleted {
        /// The deleted key.
        key: Key,
        /// Whether the tree held the key before.
        existed: bool,
    },
    /// The result of a search. `found` is `None` when the key isn't in the tree.
    Searched {
        /// The key searched for.
        key: Key,
        /// Where the key was found.
        found: Option<Neighbours>,
    },
    /// Every key in ascending order.
    Listing(Vec<Key>),
    /// The session is over.
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted {
                key,
                duplicate: false,
            } => write!(f, "Inserted {} into the BST.", key),
            Self::Inserted {
                key,
                duplicate: true,
            } => write!(f, "{} is already in the BST.", key),
            Self::Deleted { key, existed: true } => write!(f, "Deleted {} from the BST.", key),
            Self::Deleted {
                key,
                existed: false,
            } => write!(f, "{} is not in the BST.", key),
            Self::Searched { found: None, .. } => write!(f, "Element not found in the BST."),
            Self::Searched {
                found: Some(found), ..
            } => {
                writeln!(f, "Element found in the BST.")?;
                writeln!(f, "Parent: {}", OptionalKey(found.parent))?;
                writeln!(f, "Left Child: {}", OptionalKey(found.left))?;
                write!(f, "Right Child: {}", OptionalKey(found.right))
            }
            Self::Listing(keys) if keys.is_empty() => write!(f, "The BST is empty."),
            Self::Listing(keys) => {
                write!(f, "BST (in-order):")?;
                for key in keys {
                    write!(f, " {}", key)?;
                }
                Ok(())
            }
            Self::Exit => write!(f, "Exiting the program."),
        }
    }
}

/// Renders a missing key as `none` rather than a sentinel number, since every integer is a
/// valid key.
struct OptionalKey(Option<Key>);

impl fmt::Display for OptionalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => write!(f, "{}", key),
            None => write!(f, "none"),
        }
    }
}

/// Owns a tree and applies [`Command`]s to it.
#[derive(Debug, Default)]
pub struct Session {
    tree: Tree<Key>,
}

impl Session {
    /// A session over an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session over a tree holding the given keys, inserted in order.
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            tree: keys.into_iter().collect(),
        }
    }

    /// The tree this session has built so far.
    pub fn tree(&self) -> &Tree<Key> {
        &self.tree
    }

    /// Applies the command to the tree.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Insert(key) => {
                let duplicate = self.tree.contains(&key);
                self.tree = mem::take(&mut self.tree).insert(key);
                debug!(key, duplicate, "insert");
                Outcome::Inserted { key, duplicate }
            }
            Command::Delete(key) => {
                let existed = self.tree.contains(&key);
                self.tree = mem::take(&mut self.tree).delete(&key);
                debug!(key, existed, "delete");
                Outcome::Deleted { key, existed }
            }
            Command::Search(key) => {
                let found = self.tree.search(&key).position().map(|p| Neighbours {
                    parent: p.parent.copied(),
                    left: p.left.copied(),
                    right: p.right.copied(),
                });
                debug!(key, found = found.is_some(), "search");
                Outcome::Searched { key, found }
            }
            Command::Print => {
                let keys: Vec<Key> = self.tree.iter().copied().collect();
                debug!(len = keys.len(), "print");
                Outcome::Listing(keys)
            }
            Command::Exit => Outcome::Exit,
        }
    }
}
