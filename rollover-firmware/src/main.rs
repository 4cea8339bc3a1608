//! Rollover - rolling-digit clock face firmware
//!
//! Firmware binary for RP2040 boards with a 144x168 Sharp memory LCD. The
//! on-chip RTC is the clock source; digits roll upward over the minute.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use {defmt_rtt as _, panic_probe as _};

use crate::config::{DEFAULT_HOUR, DEFAULT_MINUTE, LCD_SPI_FREQUENCY_HZ};
use crate::sharp::SharpLcd;

mod config;
mod sharp;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rollover firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // The RTC keeps running across soft resets; only set it on a cold start
    let mut rtc = Rtc::new(p.RTC);
    if !rtc.is_running() {
        let start = DateTime {
            year: 2000,
            month: 1,
            day: 1,
            day_of_week: DayOfWeek::Saturday,
            hour: DEFAULT_HOUR,
            minute: DEFAULT_MINUTE,
            second: 0,
        };
        match rtc.set_datetime(start) {
            Ok(()) => info!("RTC started at {}:{:02}", DEFAULT_HOUR, DEFAULT_MINUTE),
            Err(e) => warn!("RTC start failed: {}", Debug2Format(&e)),
        }
    }

    // Sharp LCD on SPI0 (write-only, chip select is active high)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = LCD_SPI_FREQUENCY_HZ;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let cs = Output::new(p.PIN_17, Level::Low);
    let disp = Output::new(p.PIN_20, Level::High);
    let lcd = SharpLcd::new(spi, cs);
    info!("LCD initialized");

    spawner.spawn(tasks::face_task(rtc, lcd, disp)).unwrap();

    info!("All tasks spawned");
}
