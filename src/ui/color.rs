//! Packed 4-channel colour values and the interpolation used by every
//! hover/press transition.

use std::fmt;

/// 0xAARRGGBB packed colour
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({:#010X})", self.0)
    }
}

impl Argb {
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const TRANSPARENT: Argb = Argb(0);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Argb((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB with the alpha channel replaced
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Linear per-channel interpolation toward `to`.
    ///
    /// `progress <= 0` yields `self`, `progress >= 1` yields `to` exactly.
    pub fn lerp(self, to: Argb, progress: f32) -> Argb {
        if progress.is_nan() || progress <= 0.0 {
            return self;
        }
        if progress >= 1.0 {
            return to;
        }
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * progress;
            v.clamp(0.0, 255.0) as u8
        };
        Argb::from_rgba(
            mix(self.red(), to.red()),
            mix(self.green(), to.green()),
            mix(self.blue(), to.blue()),
            mix(self.alpha(), to.alpha()),
        )
    }

    /// Move each RGB channel `factor` of the way toward 255
    pub fn lighten(self, factor: f32) -> Argb {
        let up = |c: u8| -> u8 { (c as f32 + (255.0 - c as f32) * factor).clamp(0.0, 255.0) as u8 };
        Argb::from_rgba(
            up(self.red()),
            up(self.green()),
            up(self.blue()),
            self.alpha(),
        )
    }

    /// Scale each RGB channel down by `factor`
    pub fn darken(self, factor: f32) -> Argb {
        let down = |c: u8| -> u8 { (c as f32 * (1.0 - factor)).clamp(0.0, 255.0) as u8 };
        Argb::from_rgba(
            down(self.red()),
            down(self.green()),
            down(self.blue()),
            self.alpha(),
        )
    }
}

/// White with an alpha proportional to `strength` (used for hover glows)
pub fn glow(strength: f32, max_alpha: f32) -> Argb {
    let alpha = (max_alpha * strength.clamp(0.0, 1.0)) as u8;
    Argb::WHITE.with_alpha(alpha)
}
