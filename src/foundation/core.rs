use std::fmt;

use crate::foundation::{
    error::{VoiceprintsError, VoiceprintsResult},
    rng::ColorSource,
};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Pixel size of the drawing area, sampled once when a renderer mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> VoiceprintsResult<Self> {
        if width == 0 || height == 0 {
            return Err(VoiceprintsError::validation(format!(
                "viewport must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn center_x(self) -> f64 {
        f64::from(self.width) / 2.0
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
///
/// Serializes as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn from_hex(s: &str) -> VoiceprintsResult<Self> {
        let hex = s.strip_prefix('#').ok_or_else(|| {
            VoiceprintsError::validation(format!("colour '{s}' must start with '#'"))
        })?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || !(hex.len() == 6 || hex.len() == 8) {
            return Err(VoiceprintsError::validation(format!(
                "colour '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| VoiceprintsError::validation(format!("colour '{s}' is not hex")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = VoiceprintsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_string()
    }
}

/// Fixed, ordered set of fill colours for the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette(pub [Rgba8; 4]);

impl Palette {
    /// Navy, sky blue, magenta, aqua.
    pub const DEFAULT: Palette = Palette([
        Rgba8::opaque(0x1c, 0x1c, 0x3c),
        Rgba8::opaque(0x3c, 0x99, 0xdc),
        Rgba8::opaque(0xff, 0x00, 0x7f),
        Rgba8::opaque(0x00, 0xff, 0xcc),
    ]);

    pub fn colors(&self) -> &[Rgba8] {
        &self.0
    }

    pub fn contains(&self, c: Rgba8) -> bool {
        self.0.contains(&c)
    }

    /// Draw one entry uniformly from `source`.
    pub fn pick(&self, source: &mut dyn ColorSource) -> Rgba8 {
        let i = source.next_index(self.0.len());
        self.0[i.min(self.0.len() - 1)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
