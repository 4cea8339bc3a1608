//! Sharp memory LCD driver
//!
//! Driver for the 144x168 LS013B7DH05-class memory-in-pixel panels over
//! SPI. The frame buffer is kept in wire layout (command byte, then per line
//! the address, 18 data bytes and a trailer) so a flush is a single write.
//!
//! The panel clocks LSB first while the RP2040 SPI shifts MSB first, so the
//! command and line addresses are stored bit-reversed. Pixel data is stored
//! with the leftmost pixel in the MSB, which lands on the wire first.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;

/// Display dimensions
pub const WIDTH: usize = 144;
pub const HEIGHT: usize = 168;

const LINE_BYTES: usize = WIDTH / 8;
/// Address + data + trailer
const LINE_STRIDE: usize = 1 + LINE_BYTES + 1;
/// Command + lines + final trailer
const FRAME_LEN: usize = 1 + HEIGHT * LINE_STRIDE + 1;

/// Panel commands, already bit-reversed for MSB-first SPI
mod cmd {
    pub const WRITE_LINE: u8 = 0x80;
    pub const VCOM: u8 = 0x40;
    pub const CLEAR_ALL: u8 = 0x20;
}

/// LCD errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// SPI transfer failed
    Spi,
    /// Chip select could not be driven
    ChipSelect,
}

/// Sharp memory LCD
///
/// `On` pixels are dark.
pub struct SharpLcd<SPI, CS> {
    spi: SPI,
    /// Chip select, active high
    cs: CS,
    vcom: bool,
    frame: [u8; FRAME_LEN],
}

impl<SPI, CS> SharpLcd<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a driver with a white frame
    pub fn new(spi: SPI, cs: CS) -> Self {
        let mut frame = [0xFF; FRAME_LEN];
        frame[0] = cmd::WRITE_LINE;
        for line in 0..HEIGHT {
            let start = 1 + line * LINE_STRIDE;
            // Lines are numbered from 1
            frame[start] = (line as u8 + 1).reverse_bits();
            frame[start + LINE_STRIDE - 1] = 0x00;
        }
        frame[FRAME_LEN - 1] = 0x00;

        Self {
            spi,
            cs,
            vcom: false,
            frame,
        }
    }

    /// Clear the panel memory
    pub async fn clear_panel(&mut self) -> Result<(), LcdError> {
        let command = [cmd::CLEAR_ALL | self.next_vcom(), 0x00];
        self.transfer(&command).await
    }

    /// Write the whole frame to the panel
    pub async fn flush(&mut self) -> Result<(), LcdError> {
        self.frame[0] = cmd::WRITE_LINE | self.next_vcom();

        self.cs.set_high().map_err(|_| LcdError::ChipSelect)?;
        let result = self.spi.write(&self.frame).await;
        let flushed = match result {
            Ok(()) => self.spi.flush().await,
            Err(e) => Err(e),
        };
        self.cs.set_low().map_err(|_| LcdError::ChipSelect)?;

        flushed.map_err(|_| LcdError::Spi)
    }

    /// Alternate VCOM on every transfer to keep the panel DC-free
    fn next_vcom(&mut self) -> u8 {
        self.vcom = !self.vcom;
        if self.vcom {
            cmd::VCOM
        } else {
            0
        }
    }

    async fn transfer(&mut self, bytes: &[u8]) -> Result<(), LcdError> {
        self.cs.set_high().map_err(|_| LcdError::ChipSelect)?;
        let result = self.spi.write(bytes).await;
        self.cs.set_low().map_err(|_| LcdError::ChipSelect)?;
        result.map_err(|_| LcdError::Spi)
    }

    fn set_pixel(&mut self, x: usize, y: usize, dark: bool) {
        let index = 1 + y * LINE_STRIDE + 1 + x / 8;
        let mask = 0x80 >> (x % 8);
        if dark {
            self.frame[index] &= !mask;
        } else {
            self.frame[index] |= mask;
        }
    }
}

impl<SPI, CS> OriginDimensions for SharpLcd<SPI, CS> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI, CS> DrawTarget for SharpLcd<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x < WIDTH && y < HEIGHT {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0x00 } else { 0xFF };
        for line in 0..HEIGHT {
            let start = 1 + line * LINE_STRIDE + 1;
            self.frame[start..start + LINE_BYTES].fill(fill);
        }
        Ok(())
    }
}
