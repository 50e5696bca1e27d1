//! RGBA colors for fan vertices

use rand::Rng;

/// An 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from red, green and blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color with each channel drawn uniformly from 0..=255
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_white() {
        assert_eq!(Color::WHITE, Color::rgb(255, 255, 255));
        assert_eq!(Color::WHITE.a, 255);
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn test_random_is_opaque_and_seeded() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = Color::random(&mut a);
        assert_eq!(first.a, 255);
        assert_eq!(first, Color::random(&mut b));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
        let translucent = Color { a: 128, ..Color::BLACK };
        assert_eq!(translucent.to_string(), "#00000080");
    }
}
