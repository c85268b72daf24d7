use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::fatal::FatalError;

/// Size of the handle pool, including the reserved slot 0.
pub const MAX_HANDLES: usize = 10;

/// Opaque reference to an open file in the [`FileTable`].
///
/// Handle values are in `1..MAX_HANDLES`; 0 is never issued so it can double
/// as a sentinel at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHandle(usize);

impl FileHandle {
    /// Raw slot index of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed-capacity table of open files.
///
/// Slots are allocated by a first-fit linear scan starting after the
/// reserved slot. Handles are released only by an explicit [`close`];
/// leaking them exhausts the pool, which is fatal.
///
/// [`close`]: FileTable::close
pub struct FileTable {
    slots: [Option<File>; MAX_HANDLES],
}

impl FileTable {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// First free slot after the reserved one, or the fatal exhaustion error.
    fn find_free(&self) -> Result<usize, FatalError> {
        (1..MAX_HANDLES)
            .find(|&i| self.slots[i].is_none())
            .ok_or(FatalError::HandlePoolExhausted)
    }

    /// Open `path` for binary read.
    ///
    /// Returns the fresh handle and the file's byte length, or `Ok(None)` if
    /// the file does not exist (recoverable, no slot is consumed). A full
    /// pool is fatal even when the file is missing: the slot scan happens
    /// before the filesystem is touched.
    pub fn open_read(&mut self, path: &Path) -> Result<Option<(FileHandle, u64)>, FatalError> {
        let slot = self.find_free()?;

        let Ok(mut file) = File::open(path) else {
            debug!(path = %path.display(), "read open failed");
            return Ok(None);
        };
        let len = file_length(&mut file).map_err(|source| FatalError::LengthProbe {
            path: path.to_path_buf(),
            source,
        })?;

        self.slots[slot] = Some(file);
        trace!(handle = slot, len, path = %path.display(), "opened for read");
        Ok(Some((FileHandle(slot), len)))
    }

    /// Open `path` for binary write, truncating any existing content.
    ///
    /// Callers assume a write open always succeeds, so failure is fatal.
    pub fn open_write(&mut self, path: &Path) -> Result<FileHandle, FatalError> {
        let slot = self.find_free()?;

        let file = File::create(path).map_err(|source| FatalError::WriteOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.slots[slot] = Some(file);
        trace!(handle = slot, path = %path.display(), "opened for write");
        Ok(FileHandle(slot))
    }

    /// Close the file and return its slot to the free pool.
    ///
    /// # Panics
    /// Panics if the handle is not open; closing a free handle is a caller
    /// contract violation.
    pub fn close(&mut self, handle: FileHandle) {
        let file = self.slots[handle.0].take();
        assert!(file.is_some(), "close of handle {} which is not open", handle.0);
        trace!(handle = handle.0, "closed");
    }

    /// Seek to an absolute byte offset.
    pub fn seek(&mut self, handle: FileHandle, offset: u64) -> io::Result<()> {
        self.file_mut(handle).seek(SeekFrom::Start(offset)).map(|_| ())
    }

    /// Read into `buf`, returning the number of bytes read (0 at end of file).
    pub fn read(&mut self, handle: FileHandle, buf: &mut [u8]) -> io::Result<usize> {
        self.file_mut(handle).read(buf)
    }

    /// Write `buf`, returning the number of bytes written.
    pub fn write(&mut self, handle: FileHandle, buf: &[u8]) -> io::Result<usize> {
        self.file_mut(handle).write(buf)
    }

    /// Existence probe: attempt an open-for-read and discard it immediately.
    /// Never touches the handle pool.
    pub fn exists(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }

    /// Number of currently free slots (the reserved slot is not counted).
    pub fn free_slots(&self) -> usize {
        (1..MAX_HANDLES).filter(|&i| self.slots[i].is_none()).count()
    }

    fn file_mut(&mut self, handle: FileHandle) -> &mut File {
        self.slots[handle.0]
            .as_mut()
            .expect("file operation on handle which is not open")
    }
}

impl Default for FileTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte length of an open file, computed by seeking to the end and restoring
/// the previous position.
fn file_length(file: &mut File) -> io::Result<u64> {
    let pos = file.stream_position()?;
    let end = file.seek(SeekFrom::End(0))?;
    file.seek(SeekFrom::Start(pos))?;
    Ok(end)
}
