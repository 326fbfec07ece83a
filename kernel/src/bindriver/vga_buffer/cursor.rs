use x86_64::instructions::port::Port;

const CRTC_INDEX: u16 = 0x3d4;
const CRTC_DATA: u16 = 0x3d5;

const CURSOR_LOCATION_HIGH: u8 = 14;
const CURSOR_LOCATION_LOW: u8 = 15;

/// CRT controller register pair driving the blinking hardware cursor.
pub struct HardwareCursor {
    index: Port<u8>,
    data: Port<u8>,
}

impl HardwareCursor {
    pub const fn new() -> HardwareCursor {
        HardwareCursor {
            index: Port::new(CRTC_INDEX),
            data: Port::new(CRTC_DATA),
        }
    }

    /// Pushes a linear position to the cursor location registers,
    /// high byte first. Callers pass grid coordinates that are already
    /// wrapped, so the position always fits in 16 bits.
    pub fn move_to(&mut self, row: usize, col: usize) {
        let pos = (row * super::buffer::BUFFER_WIDTH + col) as u16;
        unsafe {
            self.index.write(CURSOR_LOCATION_HIGH);
            self.data.write((pos >> 8) as u8);
            self.index.write(CURSOR_LOCATION_LOW);
            self.data.write((pos & 0xff) as u8);
        }
    }

    #[cfg(test)]
    pub fn position(&mut self) -> u16 {
        let high: u8;
        let low: u8;
        unsafe {
            self.index.write(CURSOR_LOCATION_HIGH);
            high = self.data.read();
            self.index.write(CURSOR_LOCATION_LOW);
            low = self.data.read();
        }
        (high as u16) << 8 | low as u16
    }
}
