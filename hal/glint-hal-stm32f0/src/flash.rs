//! Flash-backed message store for STM32F0
//!
//! STM32F042 has 32KB flash with 1KB pages and no EEPROM. The store lives
//! in a RAM mirror sized by the firmware; byte writes from the receive path
//! only touch the mirror, and [`FlashStore::flush`] rewrites the last flash
//! page once the upload has gone quiet.

use embassy_stm32::flash::{Blocking, Error as FlashDriverError, Flash};
use glint_hal::{ByteStore, MemoryStore, StoreError};

/// Total flash on the supported chips
pub const FLASH_SIZE: usize = 32 * 1024;

/// Flash page size for STM32F0 series
pub const FLASH_PAGE_SIZE: usize = 1024;

/// Offset of the store page from the start of flash
pub const STORE_PAGE: u32 = (FLASH_SIZE - FLASH_PAGE_SIZE) as u32;

const ERASED: u8 = 0xFF;

/// Error from flash operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Programming failed or did not verify
    Program,
    /// Page is write protected
    Protected,
    /// Offset or length not aligned to the write size
    Unaligned,
    /// Other error
    Other,
}

impl From<FlashDriverError> for FlashError {
    fn from(e: FlashDriverError) -> Self {
        match e {
            FlashDriverError::Prog | FlashDriverError::Seq => FlashError::Program,
            FlashDriverError::Protected => FlashError::Protected,
            FlashDriverError::Unaligned | FlashDriverError::Size => FlashError::Unaligned,
            _ => FlashError::Other,
        }
    }
}

/// Message store of `N` bytes persisted to the last flash page
pub struct FlashStore<'d, const N: usize> {
    flash: Flash<'d, Blocking>,
    mirror: MemoryStore<N>,
}

impl<'d, const N: usize> FlashStore<'d, N> {
    /// The mirror is written back as whole half-words into one page
    const FITS_PAGE: () = assert!(
        N > 0 && N <= FLASH_PAGE_SIZE && N % 2 == 0,
        "store must be an even size within one flash page"
    );

    /// Take the flash peripheral and load the stored playlist
    pub fn new(flash: Flash<'d, Blocking>) -> Result<Self, FlashError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_PAGE;
        let mut store = Self {
            flash,
            mirror: MemoryStore::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Replace the mirror with the flash contents
    ///
    /// An erased page reads as an empty playlist.
    pub fn reload(&mut self) -> Result<(), FlashError> {
        let mut buf = [0u8; N];
        self.flash.blocking_read(STORE_PAGE, &mut buf)?;
        if buf.iter().all(|&b| b == ERASED) {
            buf.fill(0);
        }
        self.mirror.load(&buf);
        Ok(())
    }

    /// Persist the mirror if it changed; returns whether flash was written
    pub fn flush(&mut self) -> Result<bool, FlashError> {
        if !self.mirror.is_dirty() {
            return Ok(false);
        }
        let end = STORE_PAGE + FLASH_PAGE_SIZE as u32;
        self.flash.blocking_erase(STORE_PAGE, end)?;
        self.flash
            .blocking_write(STORE_PAGE, self.mirror.as_bytes())?;
        self.mirror.mark_clean();
        Ok(true)
    }
}

impl<const N: usize> ByteStore for FlashStore<'_, N> {
    fn capacity(&self) -> usize {
        self.mirror.capacity()
    }

    fn read(&self, offset: usize) -> Result<u8, StoreError> {
        self.mirror.read(offset)
    }

    fn write(&mut self, offset: usize, value: u8) -> Result<(), StoreError> {
        self.mirror.write(offset, value)
    }
}
