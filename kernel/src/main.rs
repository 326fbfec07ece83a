#![feature(custom_test_frameworks)]

#![test_runner(crate::test::test_runner)]
#![reexport_test_harness_main = "test_main"]

#![allow(unused_variables,dead_code)]
#![warn(unused_import_braces)]
#![deny(keyword_idents,unused_extern_crates,stable_features)]

#![no_std]
#![no_main]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate static_assertions;
#[macro_use]
extern crate log;

#[macro_use]
mod common;
#[macro_use]
mod bindriver;
mod version;
#[cfg(test)]
mod test;

bootloader::entry_point!(kernel_main);

fn kernel_main(boot_info: &'static bootloader::BootInfo) -> ! {
  // init drivers for core hardware
  bindriver::init();
  info!("EchOS v{}", version::VERSION);
  #[cfg(test)]
  {
    info!("Running test harness");
    test_main();
    loop{}
  }
  #[cfg(not(test))]
  {
    use crate::bindriver::vga_buffer::helper::Color;
    println!("EchOS v{}\n", version::VERSION);
    print!("Setting console palette...");
    bindriver::vga_buffer::set_color(Color::LightGray, Color::Black);
    print_green!("[ OK ]\n");
    println!("Hello, World!");
    info!("boot sequence complete");
    hlt_cpu!();
  }
}

use core::panic::PanicInfo;

/// This function is called on panic.
#[panic_handler]
pub fn panic(info: &PanicInfo) -> ! {
  error!("Panic occured: {}", info);
  print_red!("\n\n===== PANIC OCCURED IN KERNEL =====\n");
  print_red!("{}\n", info);
  #[cfg(test)]
  {
    use crate::bindriver::qemu::*;
    exit_qemu(QemuExitCode::Failed);
  }
  hlt_cpu!();
}
