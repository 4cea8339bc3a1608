//! Build-time configuration
//!
//! Everything here is fixed at compile time. The hour style follows the
//! `clock-24h` cargo feature; pins match the reference wiring:
//!
//! | Signal      | GPIO |
//! |-------------|------|
//! | LCD SCLK    | 18   |
//! | LCD SI      | 19   |
//! | LCD SCS     | 17   |
//! | LCD DISP    | 20   |
//!
//! EXTCOMIN is tied low; VCOM is toggled in software on every frame.

use rollover_core::HourFormat;

/// Hour style shown on the face
pub const HOUR_FORMAT: HourFormat = HourFormat::from_24h_flag(cfg!(feature = "clock-24h"));

/// LCD SPI clock
pub const LCD_SPI_FREQUENCY_HZ: u32 = 1_000_000;

/// Face redraw interval
///
/// The moving layer travels 45 px per minute, so twice a second keeps each
/// step to a single pixel.
pub const REFRESH_INTERVAL_MS: u64 = 500;

/// Time the RTC starts from when it was not running
pub const DEFAULT_HOUR: u8 = 12;
/// See [`DEFAULT_HOUR`]
pub const DEFAULT_MINUTE: u8 = 0;
