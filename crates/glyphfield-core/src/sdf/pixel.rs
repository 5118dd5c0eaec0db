/// Binary classification of one atlas sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pixel {
    Background,
    Foreground,
}

impl Pixel {
    /// Zero is background; any nonzero byte is ink.
    #[inline]
    pub fn from_byte(b: u8) -> Self {
        if b == 0 {
            Pixel::Background
        } else {
            Pixel::Foreground
        }
    }

    /// Field sign for samples of this class: background distances are
    /// negative, foreground distances positive.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Pixel::Background => -1.0,
            Pixel::Foreground => 1.0,
        }
    }
}
