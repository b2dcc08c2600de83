/// 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const GRAY: Color = Color(0x808080);
    pub const DARK_GRAY: Color = Color(0x404040);
    pub const LIGHT_BLUE: Color = Color(0x4d4dff);
    pub const YELLOW: Color = Color(0xffff00);
}

/// A single queued pixel write. Produced by draw listeners during one
/// render frame and consumed when that frame is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Pixel {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}
