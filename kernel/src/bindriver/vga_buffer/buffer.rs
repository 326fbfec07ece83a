
pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

use volatile::Volatile;

pub struct Buffer {
    pub chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: super::helper::ColorCode,
}

assert_eq_size!(check_screen_char_size; ScreenChar, u16);
assert_eq_size!(check_buffer_size; Buffer, [u16; BUFFER_WIDTH * BUFFER_HEIGHT]);
