use crate::alloc::try_zeroed;
use crate::{Dimensions, DimensionsError, Error};

/// A planar 4:2:2 image as consumed by still-image compression engines.
///
/// Luma is stored at full resolution, the Cb and Cr planes at half
/// horizontal resolution: `y[i * width + j]` is the luma sample at row `i`,
/// column `j`, while `cb[i * (width / 2) + k]` and `cr[i * (width / 2) + k]`
/// are shared by columns `2k` and `2k + 1` of row `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarImage {
    dims: Dimensions,
    y: Vec<u8>,
    cb: Vec<u8>,
    cr: Vec<u8>,
}

impl PlanarImage {
    /// Wrap three sample planes, verifying each length against the given
    /// dimensions
    pub fn from_planes(
        width: usize,
        height: usize,
        y: Vec<u8>,
        cb: Vec<u8>,
        cr: Vec<u8>,
    ) -> Result<Self, DimensionsError> {
        let dims = Dimensions::new(width, height)?;

        check_plane_sizes(dims, &y, &cb, &cr)?;

        Ok(Self { dims, y, cb, cr })
    }

    /// Allocate an all-zero image of the given size
    pub fn blank(width: usize, height: usize) -> Result<Self, Error> {
        let dims = Dimensions::new(width, height)?;

        Ok(Self {
            dims,
            y: try_zeroed(dims.luma_len())?,
            cb: try_zeroed(dims.chroma_len())?,
            cr: try_zeroed(dims.chroma_len())?,
        })
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

    pub fn y_plane(&self) -> &[u8] {
        &self.y
    }

    pub fn cb_plane(&self) -> &[u8] {
        &self.cb
    }

    pub fn cr_plane(&self) -> &[u8] {
        &self.cr
    }

    /// Consume the image, returning the Y, Cb and Cr planes
    pub fn into_planes(self) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        (self.y, self.cb, self.cr)
    }

    /// Re-verify the dimension and plane length invariants
    pub fn bounds_check(&self) -> Result<(), DimensionsError> {
        self.dims.check()?;
        check_plane_sizes(self.dims, &self.y, &self.cb, &self.cr)
    }
}

fn check_plane_sizes(
    dims: Dimensions,
    y: &[u8],
    cb: &[u8],
    cr: &[u8],
) -> Result<(), DimensionsError> {
    let expected = [dims.luma_len(), dims.chroma_len(), dims.chroma_len()];

    for (plane, (got, expected)) in [y.len(), cb.len(), cr.len()].into_iter().zip(expected).enumerate() {
        if got != expected {
            return Err(DimensionsError::InvalidPlaneSize {
                plane,
                expected,
                got,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_planes() {
        let image = PlanarImage::from_planes(4, 2, vec![0; 8], vec![0; 4], vec![0; 4]).unwrap();

        assert_eq!(image.y_plane().len(), 8);
        assert_eq!(image.cb_plane().len(), 4);
        assert_eq!(image.cr_plane().len(), 4);
        image.bounds_check().unwrap();
    }

    #[test]
    fn rejects_luma_size_mismatch() {
        assert!(matches!(
            PlanarImage::from_planes(4, 2, vec![0; 7], vec![0; 4], vec![0; 4]),
            Err(DimensionsError::InvalidPlaneSize {
                plane: 0,
                expected: 8,
                got: 7
            })
        ));
    }

    #[test]
    fn rejects_chroma_size_mismatch() {
        assert!(matches!(
            PlanarImage::from_planes(4, 2, vec![0; 8], vec![0; 4], vec![0; 5]),
            Err(DimensionsError::InvalidPlaneSize {
                plane: 2,
                expected: 4,
                got: 5
            })
        ));
    }

    #[test]
    fn rejects_odd_width() {
        assert!(matches!(
            PlanarImage::from_planes(5, 2, vec![0; 10], vec![0; 4], vec![0; 4]),
            Err(DimensionsError::OddWidth { width: 5 })
        ));
    }

    #[test]
    fn into_planes_returns_ownership() {
        let image = PlanarImage::blank(2, 2).unwrap();
        let (y, cb, cr) = image.into_planes();

        assert_eq!(y.len(), 4);
        assert_eq!(cb.len(), 2);
        assert_eq!(cr.len(), 2);
    }
}
