//! Face task
//!
//! Owns the RTC, the face state and the LCD. Every refresh it reads the
//! RTC, computes a new assignment when the minute has changed, and redraws
//! the canvas at the current point of the slide.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{RTC, SPI0};
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{Duration, Instant, Ticker};
use rollover_display::{CanvasBackend, ClockFace, Face};

use crate::config::{HOUR_FORMAT, REFRESH_INTERVAL_MS};
use crate::sharp::SharpLcd;

/// The panel as wired on the board
pub type Lcd = SharpLcd<Spi<'static, SPI0, Async>, Output<'static>>;

/// Face task - drives the clock face from the RTC
///
/// `_disp` is the panel's display-enable line; it is held here so the pin
/// stays driven high.
#[embassy_executor::task]
pub async fn face_task(rtc: Rtc<'static, RTC>, lcd: Lcd, _disp: Output<'static>) {
    info!(
        "Face task started ({} hour)",
        if HOUR_FORMAT.is_24_hour() { 24 } else { 12 }
    );

    let mut clock = ClockFace::new(HOUR_FORMAT);
    let mut face = Face::new();
    let mut canvas = CanvasBackend::new(lcd);

    if let Err(e) = canvas.target_mut().clear_panel().await {
        warn!("LCD clear failed: {}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_INTERVAL_MS));
    let mut shown: Option<(u8, u8)> = None;
    let mut tick_start = Instant::now();

    loop {
        match rtc.now() {
            Ok(now) => {
                let reading = (now.hour, now.minute);
                if shown != Some(reading) {
                    match clock.update(now.hour, now.minute) {
                        Ok(update) => match face.apply(&update, &mut canvas) {
                            Ok(applied) => {
                                info!(
                                    "Tick {}: {}:{:02}, {} cells, animated={}",
                                    update.sequence,
                                    update.time.hours(),
                                    update.time.minutes(),
                                    applied.cells_changed,
                                    applied.animated
                                );
                                shown = Some(reading);
                                tick_start = Instant::now();
                            }
                            Err(e) => {
                                warn!("Face update failed: {}", e);
                                // Show the retry without a slide as well
                                if !update.intent.is_animated() {
                                    clock.restart();
                                }
                            }
                        },
                        Err(e) => warn!("Invalid RTC reading: {}", e),
                    }
                }
            }
            Err(e) => warn!("RTC read failed: {}", Debug2Format(&e)),
        }

        let elapsed_ms = tick_start.elapsed().as_millis().min(u32::MAX as u64) as u32;
        trace!("Redraw at {} ms", elapsed_ms);

        // Drawing into the frame buffer cannot fail
        let _ = canvas.draw(elapsed_ms);
        if let Err(e) = canvas.target_mut().flush().await {
            warn!("LCD flush failed: {}", e);
        }

        ticker.next().await;
    }
}
