/// One 8-bit palette index.
///
/// The palette is a fixed 3-3-2 RGB cube: bits 7..5 red, 4..2 green, 1..0 blue.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Color = Color(0x00);
    pub const WHITE: Color = Color(0xFF);
    pub const GREY: Color = Color(0x92);
    pub const DARK_GREY: Color = Color(0x49);
    pub const TEAL: Color = Color(0x12);
    pub const NAVY: Color = Color(0x02);

    /// Nearest palette entry for an RGB triple (truncating quantization).
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r & 0xE0) | ((g & 0xE0) >> 3) | (b >> 6))
    }

    /// Expand the index back to RGB, replicating high bits into the low ones.
    pub fn to_rgb(self) -> [u8; 3] {
        fn expand3(v: u8) -> u8 {
            (v << 5) | (v << 2) | (v >> 1)
        }
        fn expand2(v: u8) -> u8 {
            (v << 6) | (v << 4) | (v << 2) | v
        }

        let r = (self.0 >> 5) & 0x07;
        let g = (self.0 >> 2) & 0x07;
        let b = self.0 & 0x03;
        [expand3(r), expand3(g), expand2(b)]
    }
}
