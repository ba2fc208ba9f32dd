//! # RoveFS Explorer
//!
//! Lazy-expansion model of a remote device's filesystem, plus per-entry
//! actions dispatched to an abstract [`DeviceConnection`].
//!
//! The tree starts as a root node with a single placeholder child and fills
//! in one directory at a time: expanding an unexpanded node asks the
//! connection for a listing, turns each entry into a typed child node, and
//! seeds further placeholders under new subdirectories. Rendering the tree,
//! picking save locations, and confirming destructive actions all belong to
//! the presentation layer; talking to the device belongs to the connection
//! implementation. Neither lives here.
//!
//! ## Example
//!
//! ```no_run
//! use connection::DeviceConnection;
//! use explorer::{Actions, Browser, Tree};
//!
//! fn browse<C: DeviceConnection>(conn: &C) -> Result<(), Box<dyn std::error::Error>> {
//!     let browser = Browser::new(conn);
//!     let actions = Actions::new(conn);
//!
//!     let mut tree = Tree::new();
//!     browser.expand(&mut tree, tree.root())?;
//!
//!     if let Some(&first) = tree.node(tree.root()).children().first() {
//!         actions.download(&tree, first, "/tmp/first".as_ref())?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`path`]: remote path normalization
//! - [`tree`]: the arena-based tree model
//! - [`browse`]: lazy directory expansion
//! - [`actions`]: download, delete, decrypt-and-save

pub mod actions;
pub mod browse;
pub mod path;
pub mod tree;

pub use actions::{ActionError, Actions};
pub use browse::Browser;
pub use connection::DeviceConnection;
pub use path::normalize;
pub use tree::{Node, NodeId, NodeKind, Tree, LOADING_LABEL};
