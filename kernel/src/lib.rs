#![no_std]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]

// The core never allocates. Hosted builds and tests link `alloc` for the
// recording console and test helpers.
#[cfg(not(target_os = "none"))]
extern crate alloc;

// Hardware-dependent modules, bare-metal target only
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod arch;

pub mod config;
pub mod console;
pub mod drivers;
pub mod fs;
pub mod shell;

pub use shell::{Flow, Shell};
