#[macro_use]
extern crate log;
extern crate simplelog;

use pingen::pin::ibm3624;
use pingen::pin::request::{PinRequest, PvvRequest};
use pingen::pin::visa_pvv;

fn main() {
    let _ = simplelog::SimpleLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
    );

    let pin_request = PinRequest::new("0123456789ABCDEFFEDCBA9876543210", "1234567899876543")
        .with_pin_length("12")
        .with_offset("123456789012");

    match ibm3624::generate_pin(&pin_request) {
        Ok(res) => {
            info!("IBM 3624 PIN         : {} ({})", res.pin(), res.response_code());
            info!("PIN offset used      : {}", res.pin_offset());
        }
        Err(e) => error!("PIN generation failed: {}", e),
    }

    match ibm3624::derive_natural_pin("432041891163", "123456789012") {
        Ok(natural_pin) => info!("IBM 3624 natural PIN : {}", natural_pin),
        Err(e) => error!("natural PIN derivation failed: {}", e),
    }

    match ibm3624::derive_offset("432041891163", "319695112151") {
        Ok(offset) => info!("IBM 3624 offset      : {}", offset),
        Err(e) => error!("offset derivation failed: {}", e),
    }

    let pvv_request = PvvRequest::new(
        "0123456789ABCDEFFEDCBA9876543210",
        "1",
        "1234567899876543",
        "1111",
    );
    match visa_pvv::calculate_pvv(&pvv_request) {
        Ok(pvv) => info!("VISA PVV             : {}", pvv),
        Err(e) => error!("PVV calculation failed: {}", e),
    }
}
