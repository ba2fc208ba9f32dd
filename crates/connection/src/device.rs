//! The device connection capability trait.

use std::path::Path;

use crate::entry::DirEntry;
use crate::error::Result;

/// Blocking operations a device transport must provide.
///
/// The explorer is written entirely against this trait; the wire protocol,
/// session management, and thread safety of the underlying transport are the
/// implementor's concern. Calls may block for as long as the remote takes to
/// answer — no timeout is imposed here.
///
/// Upload is deliberately not part of the contract: the explorer declares it
/// unimplemented and never calls the device for it.
pub trait DeviceConnection {
    /// List the entries of a remote directory.
    ///
    /// The order of the returned entries is whatever the device produced;
    /// no sorting is guaranteed or expected.
    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>>;

    /// Read a remote file into a local file.
    fn read_file(&self, remote_path: &str, local_path: &Path) -> Result<()>;

    /// Delete a remote file or directory entry.
    fn delete(&self, path: &str) -> Result<()>;

    /// Decrypt a remote executable image and return its plaintext bytes.
    fn decrypt_file(&self, path: &str) -> Result<Vec<u8>>;
}

// A shared reference is itself a connection, so one transport can back both
// the browser and the action dispatcher.
impl<T: DeviceConnection + ?Sized> DeviceConnection for &T {
    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>> {
        (**self).list_directory(path)
    }

    fn read_file(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        (**self).read_file(remote_path, local_path)
    }

    fn delete(&self, path: &str) -> Result<()> {
        (**self).delete(path)
    }

    fn decrypt_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).decrypt_file(path)
    }
}
