
#[macro_use]
pub mod cio;
pub mod vga_buffer;
pub mod serial;
pub mod qemu;

pub fn init() {
  crate::bindriver::serial::init();
  debug!("setting up VGA text console");
  crate::bindriver::vga_buffer::init();
}
