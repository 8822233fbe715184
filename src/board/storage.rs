//! Settings record in internal flash.
//!
//! The UI core writes through a RAM mirror ([`FlashMirror`]) that looks
//! like a small EEPROM. After each poll tick the mirror hands any change
//! to [`storage_task`], which persists it with `sequential-storage`.
//!
//! Storage layout:
//!   - One key-value record (`KEY_SETTINGS`) holding the raw settings bytes.
//!   - Flash pages are managed by `sequential-storage`, which handles wear
//!     levelling and GC.

use defmt::{debug, error, info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embedded_storage_async::nor_flash::NorFlash;
use quasi_snake::config::{SETTINGS_LEN, STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use quasi_snake::hal::ByteStorage;
use quasi_snake::Error;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

const KEY_SETTINGS: u8 = 0x01;

/// Scratch buffer size for `sequential-storage` item headers plus data.
const MAX_RECORD_SIZE: usize = 64;

type Record = [u8; SETTINGS_LEN];

/// Latest record waiting to be written; newer values overwrite older ones.
static SAVE_SIGNAL: Signal<CriticalSectionRawMutex, Record> = Signal::new();

/// EEPROM-like view of the settings record.
pub struct FlashMirror {
    bytes: Record,
    dirty: bool,
}

impl FlashMirror {
    /// Mirror of an erased device: every byte reads `0xFF`.
    pub const fn blank() -> Self {
        Self {
            bytes: [0xFF; SETTINGS_LEN],
            dirty: false,
        }
    }

    /// Load the stored record, falling back to a blank mirror.
    pub async fn load(flash: &mut impl NorFlash) -> Self {
        let mut mirror = Self::blank();
        let mut buf = [0u8; MAX_RECORD_SIZE];

        match sequential_storage::map::fetch_item::<u8, &[u8], _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_SETTINGS,
        )
        .await
        {
            Ok(Some(data)) if data.len() == SETTINGS_LEN => {
                mirror.bytes.copy_from_slice(data);
                info!("Loaded settings from flash: {=[u8]}", data);
            }
            Ok(Some(data)) => {
                warn!("Ignoring settings record of {} bytes", data.len());
            }
            Ok(None) => {
                info!("No settings in flash");
            }
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
            }
        }
        mirror
    }

    /// Hand the record to the storage task if the UI changed it.
    pub fn sync(&mut self) {
        if self.dirty {
            self.dirty = false;
            SAVE_SIGNAL.signal(self.bytes);
        }
    }

    fn range(offset: u16, len: usize) -> Result<core::ops::Range<usize>, Error> {
        let start = offset as usize;
        let end = start.checked_add(len).ok_or(Error::OutOfBounds)?;
        if end > SETTINGS_LEN {
            return Err(Error::OutOfBounds);
        }
        Ok(start..end)
    }
}

impl ByteStorage for FlashMirror {
    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Error> {
        let range = Self::range(offset, buf.len())?;
        buf.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Error> {
        let range = Self::range(offset, data.len())?;
        // Unchanged bytes cost no flash write.
        if self.bytes[range.clone()] != *data {
            self.bytes[range].copy_from_slice(data);
            self.dirty = true;
        }
        Ok(())
    }
}

/// Persist every record the UI hands over.
pub async fn storage_task(mut flash: impl NorFlash) -> ! {
    loop {
        let record = SAVE_SIGNAL.wait().await;
        debug!("Storage: saving {=[u8]}", &record[..]);
        save(&mut flash, &record).await;
    }
}

async fn save(flash: &mut impl NorFlash, record: &Record) {
    let mut buf = [0u8; MAX_RECORD_SIZE];
    let item: &[u8] = &record[..];

    match sequential_storage::map::store_item::<u8, &[u8], _>(
        flash,
        STORAGE_START..STORAGE_END,
        &mut sequential_storage::cache::NoCache::new(),
        &mut buf,
        &KEY_SETTINGS,
        &item,
    )
    .await
    {
        Ok(_) => info!("Saved settings to flash"),
        Err(e) => error!("Flash write error: {:?}", defmt::Debug2Format(&e)),
    }
}
