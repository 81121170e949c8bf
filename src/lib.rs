#[macro_use]
extern crate lazy_static;
extern crate hex;

#[macro_use]
extern crate log;

pub mod crypto;
pub mod errors;
pub mod pin;
