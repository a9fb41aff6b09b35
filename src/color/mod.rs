mod rgbw;
mod utils;

use smart_leds::{RGB8, RGBW};

pub use rgbw::rgb_to_rgbw;
pub use smart_leds::White;
pub use utils::{pack_rgbw, rgb_from_u32, unpack_rgbw};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;
