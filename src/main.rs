pub(crate) mod color;
pub(crate) mod command;
pub(crate) mod devices;
pub(crate) mod effects;
pub(crate) mod framebuffer;
pub(crate) mod intervaltimer;
pub(crate) mod lightengine;
pub(crate) mod olastrip;
pub(crate) mod stdinport;

use std::net::SocketAddr;

use clap::Parser;

use crate::color::ColorOrder;
use crate::devices::{LogStatusLed, SystemClock};
use crate::lightengine::LightEngine;
use crate::olastrip::OlaStrip;
use crate::stdinport::StdinPort;

#[derive(Parser)]
struct Cli {
    /// The OLA OSC endpoint to send frames to
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:7770")]
    ola_addr: SocketAddr,

    /// Wire color order of the strip (rgb, grb, rgbw, grbw)
    #[arg(long, value_name = "ORDER", default_value = "grb")]
    color_order: ColorOrder,

    /// Number of pixels on the strip
    #[arg(long, value_name = "COUNT", default_value_t = 40)]
    pixel_count: usize,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let strip = match OlaStrip::new(args.ola_addr, args.pixel_count, args.color_order) {
        Ok(strip) => strip,
        Err(msg) => panic!("Cannot set up OLA output: {}", msg),
    };

    let port = match StdinPort::new() {
        Ok(port) => port,
        Err(msg) => panic!("Cannot set up command input: {}", msg),
    };

    let mut engine = match LightEngine::new(
        Box::new(strip),
        Box::new(LogStatusLed::new()),
        Box::new(SystemClock::new()),
        Box::new(port),
    ) {
        Ok(engine) => engine,
        Err(err) => panic!("Cannot set up light engine: {}", err),
    };

    if let Err(err) = engine.run() {
        panic!("Light engine stopped: {}", err);
    }
}
