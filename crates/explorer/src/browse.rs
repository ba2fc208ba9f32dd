//! Lazy directory expansion against a device connection.

use connection::{DeviceConnection, Result};
use tracing::{debug, warn};

use crate::tree::{NodeId, Tree};

/// Materializes directory children on first expansion.
///
/// The browser holds the connection; thanks to the blanket reference impl on
/// [`DeviceConnection`] it can share one transport with the action
/// dispatcher by being constructed over `&conn`.
pub struct Browser<C> {
    connection: C,
}

impl<C: DeviceConnection> Browser<C> {
    /// Create a browser over a device connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Expand a directory node, fetching its children on first call.
    ///
    /// Idempotent: a node that is not in the unexpanded state (already
    /// expanded, or not a directory at all) is left untouched and the call
    /// succeeds trivially. On the first call the placeholder is removed
    /// before the listing request, so a failed listing leaves the node
    /// expanded-but-empty and the error propagates; a later call on that
    /// node is a trivial success, matching the behavior of the original
    /// device toolkit.
    ///
    /// The listing call blocks until the device answers. Callers must not
    /// issue a second `expand` for the same node while one is outstanding;
    /// no de-duplication is performed here.
    pub fn expand(&self, tree: &mut Tree, id: NodeId) -> Result<()> {
        if !tree.is_unexpanded(id) {
            return Ok(());
        }

        tree.clear_children(id);
        let path = tree.node(id).path().to_string();

        debug!(path = %path, "listing remote directory");
        let entries = self.connection.list_directory(&path).inspect_err(|err| {
            warn!(path = %path, error = %err, "listing failed, node left without children");
        })?;

        // Children are installed in connection order; no sorting.
        for entry in entries {
            tree.push_entry_child(id, entry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;

    use connection::{DeviceError, DirEntry, EntryType};

    use super::*;
    use crate::tree::NodeKind;

    /// Connection double that serves one scripted listing and counts calls.
    struct ScriptedDevice {
        listing: connection::Result<Vec<DirEntry>>,
        calls: Cell<usize>,
    }

    impl ScriptedDevice {
        fn listing(entries: Vec<DirEntry>) -> Self {
            Self {
                listing: Ok(entries),
                calls: Cell::new(0),
            }
        }

        fn failing(err: DeviceError) -> Self {
            Self {
                listing: Err(err),
                calls: Cell::new(0),
            }
        }
    }

    impl DeviceConnection for ScriptedDevice {
        fn list_directory(&self, _path: &str) -> connection::Result<Vec<DirEntry>> {
            self.calls.set(self.calls.get() + 1);
            match &self.listing {
                Ok(entries) => Ok(entries.clone()),
                Err(DeviceError::Unavailable) => Err(DeviceError::Unavailable),
                Err(other) => panic!("unexpected scripted error: {other}"),
            }
        }

        fn read_file(&self, _remote: &str, _local: &Path) -> connection::Result<()> {
            unimplemented!("not used by browse tests")
        }

        fn delete(&self, _path: &str) -> connection::Result<()> {
            unimplemented!("not used by browse tests")
        }

        fn decrypt_file(&self, _path: &str) -> connection::Result<Vec<u8>> {
            unimplemented!("not used by browse tests")
        }
    }

    fn etc_listing() -> Vec<DirEntry> {
        vec![
            DirEntry::new("/etc", EntryType::Directory),
            DirEntry::new("/etc/passwd", EntryType::File),
        ]
    }

    #[test]
    fn test_expand_root_builds_children() {
        let device = ScriptedDevice::listing(etc_listing());
        let browser = Browser::new(&device);
        let mut tree = Tree::new();
        let root = tree.root();

        browser.expand(&mut tree, root).unwrap();

        let children = tree.node(tree.root()).children().to_vec();
        assert_eq!(children.len(), 2);

        let etc = tree.node(children[0]);
        assert_eq!(etc.name(), "etc");
        assert_eq!(etc.path(), "/etc");
        assert_eq!(etc.kind(), NodeKind::Directory);
        assert!(tree.is_unexpanded(children[0]));

        let passwd = tree.node(children[1]);
        assert_eq!(passwd.name(), "passwd");
        assert_eq!(passwd.path(), "/etc/passwd");
        assert_eq!(passwd.kind(), NodeKind::File);
        assert!(passwd.children().is_empty());
    }

    #[test]
    fn test_expand_is_idempotent() {
        let device = ScriptedDevice::listing(etc_listing());
        let browser = Browser::new(&device);
        let mut tree = Tree::new();
        let root = tree.root();

        browser.expand(&mut tree, root).unwrap();
        let first = tree.node(tree.root()).children().to_vec();

        browser.expand(&mut tree, root).unwrap();
        let second = tree.node(tree.root()).children().to_vec();

        assert_eq!(first, second);
        assert_eq!(device.calls.get(), 1);
    }

    #[test]
    fn test_expand_preserves_connection_order() {
        let device = ScriptedDevice::listing(vec![
            DirEntry::new("/zzz", EntryType::File),
            DirEntry::new("/aaa", EntryType::File),
        ]);
        let browser = Browser::new(&device);
        let mut tree = Tree::new();
        let root = tree.root();

        browser.expand(&mut tree, root).unwrap();

        let names: Vec<&str> = tree
            .node(tree.root())
            .children()
            .iter()
            .map(|&id| tree.node(id).name())
            .collect();
        assert_eq!(names, ["zzz", "aaa"]);
    }

    #[test]
    fn test_expand_empty_basename_displays_full_path() {
        let device = ScriptedDevice::listing(vec![DirEntry::new("/", EntryType::Directory)]);
        let browser = Browser::new(&device);
        let mut tree = Tree::new();
        let root = tree.root();

        browser.expand(&mut tree, root).unwrap();

        let child = tree.node(tree.node(tree.root()).children()[0]);
        assert_eq!(child.name(), "/");
        assert!(!child.name().is_empty());
    }

    #[test]
    fn test_expand_unavailable_leaves_node_empty() {
        let device = ScriptedDevice::failing(DeviceError::Unavailable);
        let browser = Browser::new(&device);
        let mut tree = Tree::new();
        let root = tree.root();

        let err = browser.expand(&mut tree, root).unwrap_err();
        assert!(matches!(err, DeviceError::Unavailable));
        assert!(tree.node(tree.root()).children().is_empty());

        // The node now looks expanded, so retrying is a trivial success and
        // the device is not asked again.
        browser.expand(&mut tree, root).unwrap();
        assert_eq!(device.calls.get(), 1);
    }

    #[test]
    fn test_expand_file_node_is_a_noop() {
        let device = ScriptedDevice::listing(etc_listing());
        let browser = Browser::new(&device);
        let mut tree = Tree::new();
        let root = tree.root();

        browser.expand(&mut tree, root).unwrap();
        let passwd = tree.node(tree.root()).children()[1];

        browser.expand(&mut tree, passwd).unwrap();
        assert!(tree.node(passwd).children().is_empty());
        assert_eq!(device.calls.get(), 1);
    }
}
