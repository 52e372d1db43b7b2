use crate::common::{ColorRGB, ColorValue};

const INTENSITY_STEP: u16 = 0x54;

// Channel intensity from one plane bit and the brighten bit: 0x00, 0x54, 0xA8 or 0xFC.
pub fn plane_intensity(base: u8, brighten: u8) -> ColorValue {
    (base as u16 * 2 * INTENSITY_STEP + brighten as u16 * INTENSITY_STEP) as ColorValue
}

// Color of a 4-bit index laid out as brighten:red:green:blue (MSB first).
pub fn palette_color(idx: u8) -> ColorRGB {
    let brighten = (idx >> 3) & 1;
    [
        plane_intensity((idx >> 2) & 1, brighten),
        plane_intensity((idx >> 1) & 1, brighten),
        plane_intensity(idx & 1, brighten),
    ]
}
