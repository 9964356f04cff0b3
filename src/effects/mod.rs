pub(crate) mod moonlight;
pub(crate) mod rainbow;
pub(crate) mod sunrise;

use rgb::RGB8;

pub use moonlight::MoonlightState;
pub use rainbow::RainbowState;
pub use sunrise::SunriseState;

/// The one active effect. Switching replaces the whole value, so a new effect
/// always starts from its initial progress and can never read a previous
/// effect's leftovers.
pub enum EffectState {
    Off,
    Solid(RGB8),
    Rainbow(RainbowState),
    Sunrise(SunriseState),
    Moonlight(MoonlightState),
}
