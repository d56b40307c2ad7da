//! Colors and the presentation palette

/// 24-bit color; opacity travels separately on each draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a 0xRRGGBB literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Linear interpolation toward `other`, `t` clamped to 0.0..=1.0
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Convert a floating opacity to the 0..=255 command range
#[inline]
pub fn alpha(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Fixed presentation palette (off-white theme)
pub mod palette {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::from_hex(0xFAF7EE);
    pub const PRIMARY: Rgb = Rgb::from_hex(0xFFC947);
    pub const CORRECT: Rgb = Rgb::from_hex(0x50DC78);
    pub const WRONG: Rgb = Rgb::from_hex(0xFF6384);
    pub const TEXT: Rgb = Rgb::from_hex(0x282C3C);
    pub const DIM: Rgb = Rgb::from_hex(0x6E7887);

    /// Trail, ripples and sparkles; white would vanish on the off-white background
    pub const GLINT: Rgb = Rgb::from_hex(0xCDAA5F);

    pub const OPTION_FILL: Rgb = Rgb::from_hex(0xF0F5FF);
    pub const OPTION_BORDER: Rgb = Rgb::from_hex(0xB4B4B4);
    pub const SHADOW: Rgb = Rgb::BLACK;

    pub const CURSOR_RING: Rgb = Rgb::from_hex(0x5A5A5A);
    pub const CURSOR_DOT: Rgb = Rgb::from_hex(0xFFD778);

    pub const ROCKET_TRAIL: Rgb = Rgb::from_hex(0xFFE6B4);
    pub const BUBBLE: Rgb = Rgb::from_hex(0x78AAE6);

    /// Firework shell colors
    pub const FIREWORK: [Rgb; 4] = [
        Rgb::from_hex(0xFFB450), // Amber
        Rgb::from_hex(0xFF7878), // Coral
        Rgb::from_hex(0xB4DC78), // Lime
        Rgb::from_hex(0x78B4FF), // Sky
    ];

    /// Balloon body colors
    pub const BALLOON: [Rgb; 4] = [
        Rgb::from_hex(0xFFAA78), // Peach
        Rgb::from_hex(0xFF7896), // Pink
        Rgb::from_hex(0x96D2FF), // Light blue
        Rgb::from_hex(0xB4F0B4), // Mint
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(Rgb::from_hex(0x50DC78), Rgb::new(80, 220, 120));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
    }

    #[test]
    fn alpha_clamps() {
        assert_eq!(alpha(-5.0), 0);
        assert_eq!(alpha(300.0), 255);
        assert_eq!(alpha(127.9), 127);
    }
}
