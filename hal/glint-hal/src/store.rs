//! Persistent byte store abstractions
//!
//! The message playlist lives in a small non-volatile region that is read
//! and written one byte at a time. Implementations map offsets onto EEPROM,
//! emulated EEPROM in flash, or plain RAM for host tests.

/// Errors from byte store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Offset is outside the reserved region
    OutOfRange,
    /// The underlying memory rejected the write
    Write,
}

/// Byte-addressable persistent store
///
/// Offsets are relative to the start of the reserved message region and
/// must be `< capacity()`. Every access is short and non-blocking so it can
/// be made from the receive handler.
pub trait ByteStore {
    /// Number of bytes reserved for messages
    fn capacity(&self) -> usize;

    /// Read the byte at `offset`
    fn read(&self, offset: usize) -> Result<u8, StoreError>;

    /// Write `value` at `offset`
    fn write(&mut self, offset: usize, value: u8) -> Result<(), StoreError>;
}

impl<T: ByteStore + ?Sized> ByteStore for &mut T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn read(&self, offset: usize) -> Result<u8, StoreError> {
        (**self).read(offset)
    }

    fn write(&mut self, offset: usize, value: u8) -> Result<(), StoreError> {
        (**self).write(offset, value)
    }
}

/// RAM-backed byte store
///
/// Used directly on the host and as the write-back mirror of flash-based
/// stores on chips without EEPROM. Tracks whether it has unsaved changes.
#[derive(Debug, Clone)]
pub struct MemoryStore<const N: usize> {
    data: [u8; N],
    dirty: bool,
}

impl<const N: usize> Default for MemoryStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryStore<N> {
    /// Create an empty store (all zero, i.e. an empty playlist)
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            dirty: false,
        }
    }

    /// Create a store pre-loaded with `bytes`
    ///
    /// Bytes past `N` are ignored; the remainder is zero-filled.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut store = Self::new();
        let len = bytes.len().min(N);
        store.data[..len].copy_from_slice(&bytes[..len]);
        store
    }

    /// Raw contents
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Replace the contents without marking the store dirty
    ///
    /// Used when loading the mirror from its backing memory.
    pub fn load(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(N);
        self.data[..len].copy_from_slice(&bytes[..len]);
        self.data[len..].fill(0);
        self.dirty = false;
    }

    /// Check for writes since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark contents as persisted
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl<const N: usize> ByteStore for MemoryStore<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read(&self, offset: usize) -> Result<u8, StoreError> {
        self.data.get(offset).copied().ok_or(StoreError::OutOfRange)
    }

    fn write(&mut self, offset: usize, value: u8) -> Result<(), StoreError> {
        let slot = self.data.get_mut(offset).ok_or(StoreError::OutOfRange)?;
        if *slot != value {
            *slot = value;
            self.dirty = true;
        }
        Ok(())
    }
}
