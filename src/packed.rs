use crate::alloc::try_zeroed;
use crate::{Dimensions, DimensionsError, Error};

/// A packed 4:2:2 frame as produced by typical capture hardware.
///
/// Samples are interleaved as `[Y0, Cb, Y1, Cr]` per pair of horizontally
/// adjacent pixels: luma at full resolution, one shared chroma pair per two
/// pixels. The buffer holds exactly `width * height * 2` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedFrame {
    dims: Dimensions,
    samples: Vec<u8>,
}

impl PackedFrame {
    /// Wrap an interleaved sample buffer, verifying its length against the
    /// given dimensions
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, DimensionsError> {
        let dims = Dimensions::new(width, height)?;

        if samples.len() != dims.packed_len() {
            return Err(DimensionsError::InvalidBufferSize {
                expected: dims.packed_len(),
                got: samples.len(),
            });
        }

        Ok(Self { dims, samples })
    }

    /// Allocate an all-zero frame of the given size
    pub fn blank(width: usize, height: usize) -> Result<Self, Error> {
        let dims = Dimensions::new(width, height)?;
        let samples = try_zeroed(dims.packed_len())?;

        Ok(Self { dims, samples })
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// The interleaved `[Y0, Cb, Y1, Cr]` sample bytes
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the frame, returning the sample buffer
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Re-verify the dimension and buffer length invariants
    pub fn bounds_check(&self) -> Result<(), DimensionsError> {
        self.dims.check()?;

        if self.samples.len() != self.dims.packed_len() {
            return Err(DimensionsError::InvalidBufferSize {
                expected: self.dims.packed_len(),
                got: self.samples.len(),
            });
        }

        Ok(())
    }
}
