//! Per-entry actions dispatched to the device connection.
//!
//! The dispatcher performs the remote side of an action and nothing else:
//! a successful delete does not touch the tree, since removing the node from
//! the local view is the presentation layer's job (see [`Tree::detach`]).

use std::fs;
use std::path::{Path, PathBuf};

use connection::{DeviceConnection, DeviceError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::tree::{NodeId, NodeKind, Tree};

/// Errors that can occur while dispatching an entry action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The target node is synthetic (root or placeholder) and has no remote
    /// entry to act on.
    #[error("not an actionable entry: {0}")]
    NotActionable(String),

    /// The device operation failed.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Writing the received bytes to local storage failed.
    #[error("writing {path} failed: {source}")]
    Write {
        /// Local destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Entry action dispatcher.
pub struct Actions<C> {
    connection: C,
}

impl<C: DeviceConnection> Actions<C> {
    /// Create a dispatcher over a device connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Download the remote file behind a node into a local file.
    pub fn download(&self, tree: &Tree, id: NodeId, local: &Path) -> Result<(), ActionError> {
        let node = target(tree, id)?;
        debug!(remote = %node.path(), local = %local.display(), "downloading file");
        self.connection.read_file(node.path(), local)?;
        Ok(())
    }

    /// Delete the remote entry behind a node.
    ///
    /// The tree is not mutated; on success the caller detaches the node
    /// from its parent.
    pub fn delete(&self, tree: &Tree, id: NodeId) -> Result<(), ActionError> {
        let node = target(tree, id)?;
        debug!(remote = %node.path(), "deleting remote entry");
        self.connection.delete(node.path())?;
        Ok(())
    }

    /// Decrypt the remote executable behind a node and save the plaintext
    /// bytes to a local file.
    ///
    /// An empty payload from the device fails with [`DeviceError::NoData`]
    /// and no local file is created; a partial or empty output file is never
    /// left behind.
    pub fn decrypt_to(&self, tree: &Tree, id: NodeId, local: &Path) -> Result<(), ActionError> {
        let node = target(tree, id)?;
        debug!(remote = %node.path(), local = %local.display(), "decrypting file");
        let bytes = self.connection.decrypt_file(node.path())?;
        if bytes.is_empty() {
            warn!(remote = %node.path(), "device returned an empty decrypt payload");
            return Err(DeviceError::NoData(node.path().to_string()).into());
        }
        fs::write(local, &bytes).map_err(|source| ActionError::Write {
            path: local.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Upload a local file to the device.
    ///
    /// Stub: the device side has no write path yet, so this performs no
    /// action. TODO: implement once the connection contract grows an upload
    /// operation.
    pub fn upload(&self, _tree: &Tree, _id: NodeId, _local: &Path) -> Result<(), ActionError> {
        Ok(())
    }
}

/// Resolve an action target, refusing synthetic nodes.
fn target<'t>(tree: &'t Tree, id: NodeId) -> Result<&'t crate::tree::Node, ActionError> {
    let node = tree.node(id);
    match node.kind() {
        NodeKind::Root | NodeKind::Placeholder => {
            Err(ActionError::NotActionable(node.name().to_string()))
        }
        NodeKind::Directory | NodeKind::File | NodeKind::Other => Ok(node),
    }
}
