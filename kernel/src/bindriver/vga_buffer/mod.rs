pub mod buffer;
pub mod cursor;
pub mod helper;

const TAB_WIDTH: usize = 4;

pub struct Writer {
    pub row_position: usize,
    pub column_position: usize,
    pub color_code: helper::ColorCode,
    pub buffer: &'static mut buffer::Buffer,
    pub cursor: cursor::HardwareCursor,
}

impl Writer {
    pub fn write_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.column_position = 0;
                self.row_position += 1;
                self.scroll_if_needed();
                self.sync_cursor();
            }
            b'\r' => {
                self.column_position = 0;
                self.sync_cursor();
            }
            b'\t' => {
                let spaces = TAB_WIDTH - self.column_position % TAB_WIDTH;
                for _ in 0..spaces {
                    self.write_byte(b' ');
                }
            }
            // remaining control bytes are dropped, cursor stays put
            0x00..=0x1f => {}
            byte => {
                let row = self.row_position;
                let col = self.column_position;

                let color_code = self.color_code;
                self.buffer.chars[row][col].write(buffer::ScreenChar {
                    ascii_character: byte,
                    color_code,
                });
                self.column_position += 1;
                if self.column_position >= buffer::BUFFER_WIDTH {
                    self.column_position = 0;
                    self.row_position += 1;
                    self.scroll_if_needed();
                }
                self.sync_cursor();
            }
        }
    }
    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
    pub fn clear(&mut self) {
        for row in 0..buffer::BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.row_position = 0;
        self.column_position = 0;
        self.sync_cursor();
    }
    fn clear_row(&mut self, row: usize) {
        let blank = buffer::ScreenChar {
            ascii_character: b' ',
            color_code: self.color_code,
        };
        for col in 0..buffer::BUFFER_WIDTH {
            self.buffer.chars[row][col].write(blank);
        }
    }
    fn scroll_if_needed(&mut self) {
        if self.row_position < buffer::BUFFER_HEIGHT {
            return;
        }
        for row in 1..buffer::BUFFER_HEIGHT {
            for col in 0..buffer::BUFFER_WIDTH {
                let character = self.buffer.chars[row][col].read();
                self.buffer.chars[row - 1][col].write(character);
            }
        }
        self.clear_row(buffer::BUFFER_HEIGHT - 1);
        self.row_position = buffer::BUFFER_HEIGHT - 1;
    }
    fn sync_cursor(&mut self) {
        self.cursor.move_to(self.row_position, self.column_position);
    }
}

use core::fmt;

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}

use spin::Mutex;

lazy_static! {
    pub static ref WRITER: Mutex<Writer> = Mutex::new(Writer {
        row_position: 0,
        column_position: 0,
        color_code: helper::ColorCode::new(helper::Color::LightGray, helper::Color::Black),
        buffer: unsafe { &mut *(0xb8000 as *mut buffer::Buffer) },
        cursor: cursor::HardwareCursor::new(),
    });
}

pub fn init() {
    clear();
}

pub fn clear() {
    WRITER.lock().clear();
}

pub fn set_color(foreground: helper::Color, background: helper::Color) {
    WRITER.lock().color_code = helper::ColorCode::new(foreground, background);
}

pub fn print(args: fmt::Arguments) {
    use core::fmt::Write;
    WRITER.lock().write_fmt(args).unwrap();
}

pub fn print_green(args: fmt::Arguments) {
    use core::fmt::Write;
    let mut w = WRITER.lock();
    let old_color = w.color_code;
    w.color_code = helper::ColorCode::new(helper::Color::Green, helper::Color::Black);
    w.write_fmt(args).expect("could not write to vga buffer");
    w.color_code = old_color;
}

pub fn print_red(args: fmt::Arguments) {
    use core::fmt::Write;
    unsafe { WRITER.force_unlock() };
    let w = WRITER.try_lock();
    w.and_then(|mut w| {
        let old_color = w.color_code;
        w.color_code = helper::ColorCode::new(helper::Color::Red, helper::Color::Black);
        w.write_fmt(args).expect("could not write to vga buffer");
        w.color_code = old_color;
        Some(w)
    }).expect("need to print to vga");
}
