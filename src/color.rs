use std::str::FromStr;

use rgb::RGB8;

/// Gamma applied to moonlight shimmer pixels. Rainbow and sunrise commit raw
/// values on purpose; the warm ramps look better uncorrected.
const GAMMA: f32 = 1.8;

const SUNRISE_GREEN_MAX: u16 = 130;
const SUNRISE_BLUE_MAX: u16 = 45;

/// Channel order on the wire. Four-channel strips carry a white byte that we
/// always leave at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorOrder {
    Rgb,
    Grb,
    Rgbw,
    Grbw,
}

impl ColorOrder {
    pub fn channel_count(&self) -> usize {
        match self {
            ColorOrder::Rgb | ColorOrder::Grb => 3,
            ColorOrder::Rgbw | ColorOrder::Grbw => 4,
        }
    }

    /// Appends one pixel's channel bytes in wire order.
    pub fn pack_into(&self, color: RGB8, buffer: &mut Vec<u8>) {
        match self {
            ColorOrder::Rgb => buffer.extend([color.r, color.g, color.b]),
            ColorOrder::Grb => buffer.extend([color.g, color.r, color.b]),
            ColorOrder::Rgbw => buffer.extend([color.r, color.g, color.b, 0]),
            ColorOrder::Grbw => buffer.extend([color.g, color.r, color.b, 0]),
        }
    }
}

impl FromStr for ColorOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(ColorOrder::Rgb),
            "grb" => Ok(ColorOrder::Grb),
            "rgbw" => Ok(ColorOrder::Rgbw),
            "grbw" => Ok(ColorOrder::Grbw),
            other => Err(format!("Unknown color order: {other}")),
        }
    }
}

/// Continuous hue cycle over 0..=255, tiled into three 85-wide bands
/// (red to green, green to blue, blue to red). The 3x / 255-3x slopes make
/// the bands meet exactly, so wheel(255) == wheel(0).
pub fn wheel(position: u8) -> RGB8 {
    let position = position as u16;
    if position < 85 {
        RGB8::new((255 - position * 3) as u8, (position * 3) as u8, 0)
    } else if position < 170 {
        let position = position - 85;
        RGB8::new(0, (255 - position * 3) as u8, (position * 3) as u8)
    } else {
        let position = position - 170;
        RGB8::new((position * 3) as u8, 0, (255 - position * 3) as u8)
    }
}

/// Per-channel gamma correction: floor((c/255)^1.8 * 255).
pub fn gamma_correct(color: RGB8) -> RGB8 {
    let correct = |channel: u8| ((channel as f32 / 255.0).powf(GAMMA) * 255.0).floor() as u8;
    RGB8::new(correct(color.r), correct(color.g), correct(color.b))
}

/// Sunrise ramp at a given frame (0..=230): red rises fastest and saturates,
/// green and blue trail behind with their own caps. The caps are applied to
/// the index before the channel offsets, so frame 230 lands on (255, 110, 45).
pub fn sunrise_channels(index: u8) -> RGB8 {
    let index = index as u16;
    let r = if index < 85 { index * 3 } else { 255 };
    let g = index.min(SUNRISE_GREEN_MAX).saturating_sub(20);
    let b = index.min(170 + SUNRISE_BLUE_MAX).saturating_sub(170);
    RGB8::new(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_cycle_is_closed() {
        assert_eq!(wheel(0), wheel(255u8.wrapping_add(1)));
        assert_eq!(wheel(255), RGB8::new(255, 0, 0));
        assert_eq!(wheel(0), RGB8::new(255, 0, 0));
    }

    #[test]
    fn wheel_band_boundaries_are_continuous() {
        for boundary in [85u8, 170u8] {
            let before = wheel(boundary - 1);
            let after = wheel(boundary);
            for (a, b) in [
                (before.r, after.r),
                (before.g, after.g),
                (before.b, after.b),
            ] {
                assert!(
                    (a as i16 - b as i16).abs() <= 3,
                    "jump of more than 3 at boundary {boundary}"
                );
            }
        }
        // One channel rests at zero on each side of a boundary.
        assert_eq!(wheel(85).r, 0);
        assert_eq!(wheel(170).g, 0);
    }

    #[test]
    fn gamma_endpoints_are_fixed() {
        assert_eq!(gamma_correct(RGB8::new(0, 0, 0)), RGB8::new(0, 0, 0));
        assert_eq!(gamma_correct(RGB8::new(255, 255, 255)), RGB8::new(255, 255, 255));
    }

    #[test]
    fn gamma_is_monotonic_per_channel() {
        let mut last = 0u8;
        for value in 0..=255u8 {
            let corrected = gamma_correct(RGB8::new(value, value, value));
            assert_eq!(corrected.r, corrected.g);
            assert_eq!(corrected.r, corrected.b);
            assert!(corrected.r >= last);
            last = corrected.r;
        }
    }

    #[test]
    fn sunrise_endpoints() {
        assert_eq!(sunrise_channels(0), RGB8::new(0, 0, 0));
        assert_eq!(sunrise_channels(230), RGB8::new(255, 110, 45));
    }

    #[test]
    fn sunrise_red_is_monotonic_and_saturates() {
        let mut last = 0u8;
        for index in 0..=230u8 {
            let color = sunrise_channels(index);
            assert!(color.r >= last);
            if index >= 85 {
                assert_eq!(color.r, 255);
            }
            last = color.r;
        }
    }

    #[test]
    fn sunrise_green_and_blue_stay_in_range() {
        for index in 0..=230u8 {
            let color = sunrise_channels(index);
            assert!(color.g <= 130);
            assert!(color.b <= 45);
        }
    }

    #[test]
    fn color_order_packing() {
        let color = RGB8::new(1, 2, 3);
        let mut buffer = Vec::new();
        ColorOrder::Rgb.pack_into(color, &mut buffer);
        assert_eq!(buffer, [1, 2, 3]);

        buffer.clear();
        ColorOrder::Grb.pack_into(color, &mut buffer);
        assert_eq!(buffer, [2, 1, 3]);

        buffer.clear();
        ColorOrder::Grbw.pack_into(color, &mut buffer);
        assert_eq!(buffer, [2, 1, 3, 0]);

        assert_eq!(ColorOrder::Rgb.channel_count(), 3);
        assert_eq!(ColorOrder::Rgbw.channel_count(), 4);
    }
}
