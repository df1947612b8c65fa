//! Linear RGB colour used for sprite tinting and the theme.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// RGB colour with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let bad = || ConfigError::ThemeColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        Ok(Rgb::from_u24(v))
    }

    /// From a packed `0xRRGGBB` value; any alpha byte is ignored.
    pub fn from_u24(v: u32) -> Self {
        let ch = |shift: u32| ((v >> shift) & 0xFF) as f32 / 255.0;
        Rgb::new(ch(16), ch(8), ch(0))
    }

    /// Hue in degrees, saturation and value in [0, 1].
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h  = h.rem_euclid(360.0);
        let hi = (h / 60.0) as u32;
        let f  = h / 60.0 - hi as f32;
        let p  = v * (1.0 - s);
        let q  = v * (1.0 - s * f);
        let t  = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match hi {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb::new(r, g, b)
    }

    /// Move a fraction `rate` of the way toward `target`, per channel.
    pub fn approach(&mut self, target: Rgb, rate: f32) {
        self.r += (target.r - self.r) * rate;
        self.g += (target.g - self.g) * rate;
        self.b += (target.b - self.b) * rate;
    }

    /// Scale every channel, e.g. by an opacity for additive blending.
    pub fn scaled(self, k: f32) -> Self {
        Rgb::new(self.r * k, self.g * k, self.b * k)
    }

    /// Packed 0xAARRGGBB with A = 0xFF, channels clamped.
    pub fn to_argb(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        0xFF000000 | (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.to_argb() & 0x00FF_FFFF)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_and_prints() {
        let c = Rgb::from_hex("#00d2ff").unwrap();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 210.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 1.0);
        assert_eq!(c.to_hex(), "#00D2FF");
        assert_eq!("ff8800".parse::<Rgb>().unwrap().to_hex(), "#FF8800");
    }

    #[test]
    fn bad_hex_rejected() {
        for s in ["", "#12345", "#1234567", "#gg0000", "#ééé"] {
            assert!(matches!(Rgb::from_hex(s), Err(ConfigError::ThemeColor(_))), "{s}");
        }
    }

    #[test]
    fn argb_is_opaque_and_clamped() {
        let c = Rgb::new(2.0, -1.0, 0.5).to_argb();
        assert_eq!(c >> 24, 0xFF);
        assert_eq!((c >> 16) & 0xFF, 0xFF);
        assert_eq!((c >> 8) & 0xFF, 0x00);
        assert_eq!(c & 0xFF, 128);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0).to_hex(), "#FF0000");
        assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0).to_hex(), "#00FF00");
        assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0).to_hex(), "#0000FF");
    }

    #[test]
    fn approach_moves_toward_white() {
        let mut c = Rgb::BLACK;
        c.approach(Rgb::WHITE, 0.05);
        assert!((c.r - 0.05).abs() < 1e-6);
        for _ in 0..500 { c.approach(Rgb::WHITE, 0.05); }
        assert!(c.r > 0.99 && c.r <= 1.0);
    }
}
