use std::net::{SocketAddr, UdpSocket};
use std::str::FromStr;

use rgb::RGB8;
use rosc::{encoder, OscMessage, OscPacket, OscType};

use crate::color::ColorOrder;
use crate::devices::{DeviceError, PixelStrip};

/// One DMX universe worth of channels.
const UNIVERSE_SIZE: usize = 512;

/// Strip output via OLA: each commit is sent as an OSC blob to the OLA
/// daemon's UDP port, packed in the strip's wire order.
pub struct OlaStrip {
    sock: UdpSocket,
    target_addr: SocketAddr,
    pixel_count: usize,
    color_order: ColorOrder,
    buffer: Vec<u8>,
}

impl OlaStrip {
    pub fn new(
        target_addr: SocketAddr,
        pixel_count: usize,
        color_order: ColorOrder,
    ) -> Result<Self, String> {
        let channels = pixel_count * color_order.channel_count();
        if channels > UNIVERSE_SIZE {
            return Err(format!(
                "{pixel_count} pixels need {channels} channels, universe has {UNIVERSE_SIZE}"
            ));
        }

        let our_addr = SocketAddr::from_str("0.0.0.0:0").unwrap();
        let sock = match UdpSocket::bind(our_addr) {
            Ok(sock) => sock,
            Err(error) => return Err(error.to_string()),
        };

        Ok(OlaStrip {
            sock,
            target_addr,
            pixel_count,
            color_order,
            buffer: Vec::with_capacity(channels),
        })
    }
}

impl PixelStrip for OlaStrip {
    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    fn write(&mut self, pixels: &[RGB8], brightness: f32) -> Result<(), DeviceError> {
        self.buffer.clear();
        for pixel in pixels {
            let scaled = RGB8::new(
                (pixel.r as f32 * brightness) as u8,
                (pixel.g as f32 * brightness) as u8,
                (pixel.b as f32 * brightness) as u8,
            );
            self.color_order.pack_into(scaled, &mut self.buffer);
        }

        let msg_buf = encoder::encode(&OscPacket::Message(OscMessage {
            addr: "/dmx/universe/0".to_string(),
            args: vec![OscType::Blob(Vec::clone(&self.buffer))],
        }))
        .map_err(|err| DeviceError::WriteFailed(format!("{:?}", err)))?;

        self.sock
            .send_to(&msg_buf, self.target_addr)
            .map_err(|err| DeviceError::WriteFailed(err.to_string()))?;
        Ok(())
    }
}
