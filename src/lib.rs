//! Bridge between packed YUYV 4:2:2 capture frames and the planar images
//! consumed by still-image compression engines.
//!
//! Capture hardware typically hands out one interleaved byte stream
//! (`[Y0, Cb, Y1, Cr]` per pixel pair) while still-image codecs want three
//! separate sample planes. [`to_planar`] and [`to_packed`] convert between
//! the two losslessly, [`ByteSink`] collects the compressed bytes a codec
//! emits through its write callback, and [`compress`]/[`decompress`] tie
//! both to an engine plugged in behind [`StillEncoder`]/[`StillDecoder`].
//!
//! ```
//! use still_frame::{to_packed, to_planar, PackedFrame};
//!
//! let frame = PackedFrame::new(4, 1, vec![10, 20, 11, 30, 12, 21, 13, 31])?;
//!
//! let image = to_planar(&frame)?;
//! assert_eq!(image.y_plane(), [10, 11, 12, 13]);
//! assert_eq!(image.cb_plane(), [20, 21]);
//! assert_eq!(image.cr_plane(), [30, 31]);
//!
//! assert_eq!(to_packed(&image)?, frame);
//! # Ok::<(), still_frame::Error>(())
//! ```

pub use alloc::AllocError;
pub use codec::{CodecError, StillDecoder, StillEncoder, compress, decompress};
pub use convert::{to_packed, to_planar};
pub use dims::{Dimensions, DimensionsError};
pub use packed::PackedFrame;
pub use planar::PlanarImage;
pub use sink::ByteSink;

mod alloc;
mod codec;
mod convert;
mod dims;
mod packed;
mod planar;
mod sink;

/// Any failure from converting, compressing or decompressing a frame
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDimensions(#[from] DimensionsError),

    #[error(transparent)]
    Allocation(#[from] AllocError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
