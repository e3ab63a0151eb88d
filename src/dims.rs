/// Pixel dimensions of a 4:2:2 frame.
///
/// Chroma is shared between horizontally adjacent pixel pairs, so the width
/// must be even (and therefore at least 2). The height must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Everything that can be wrong about frame dimensions or buffer sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionsError {
    #[error("width and height must both be non-zero, got {width}x{height}")]
    Zero { width: usize, height: usize },

    #[error("width must be even for 4:2:2 chroma subsampling, got {width}")]
    OddWidth { width: usize },

    #[error("{width}x{height} overflows the addressable sample count")]
    Overflow { width: usize, height: usize },

    #[error("invalid packed buffer size, expected {expected} but got {got}")]
    InvalidBufferSize { expected: usize, got: usize },

    #[error("invalid size of plane {plane}, expected {expected} but got {got}")]
    InvalidPlaneSize {
        plane: usize,
        expected: usize,
        got: usize,
    },
}

impl Dimensions {
    /// Validated constructor, see [`Dimensions::check`]
    pub fn new(width: usize, height: usize) -> Result<Self, DimensionsError> {
        let dims = Self { width, height };
        dims.check()?;
        Ok(dims)
    }

    /// Verify that these dimensions describe a representable 4:2:2 frame
    pub fn check(self) -> Result<(), DimensionsError> {
        let Self { width, height } = self;

        if width == 0 || height == 0 {
            return Err(DimensionsError::Zero { width, height });
        }

        if width % 2 != 0 {
            return Err(DimensionsError::OddWidth { width });
        }

        // The packed buffer is the largest derived size
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(2))
            .ok_or(DimensionsError::Overflow { width, height })?;

        Ok(())
    }

    /// Samples per row of the half-horizontal-resolution chroma planes
    pub fn chroma_width(self) -> usize {
        self.width / 2
    }

    /// Length of the full-resolution luma plane
    pub fn luma_len(self) -> usize {
        self.width * self.height
    }

    /// Length of each chroma plane
    pub fn chroma_len(self) -> usize {
        self.chroma_width() * self.height
    }

    /// Length of the interleaved packed buffer (2 bytes per pixel)
    pub fn packed_len(self) -> usize {
        self.width * self.height * 2
    }
}
