use crate::{ByteSink, Error, PackedFrame, PlanarImage, to_packed, to_planar};

/// Failure reported by the external still-image engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("codec reported error {code}: {message}")]
pub struct CodecError {
    /// Numeric status code from the engine
    pub code: i32,
    /// Engine-supplied description
    pub message: String,
}

impl CodecError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Still-image compression engine.
///
/// `encode` compresses a planar 4:2:2 image and emits the resulting
/// container bytes through `sink`, in zero or more sequential chunks, all
/// within the single call. Engine failures (encoder creation, quality
/// setting, image construction, write) are reported as [`CodecError`];
/// a failed [`ByteSink::append`] is passed through as-is.
pub trait StillEncoder {
    fn encode(
        &mut self,
        image: &PlanarImage,
        quality: u8,
        sink: &mut ByteSink,
    ) -> Result<(), Error>;
}

/// Still-image decompression engine.
///
/// `decode` must produce 8-bit 4:2:2 planes; malformed input or an
/// unsupported format is a [`CodecError`].
pub trait StillDecoder {
    fn decode(&mut self, data: &[u8]) -> Result<PlanarImage, Error>;
}

/// Compress a packed capture frame into a still-image container.
///
/// The frame is de-interleaved into planar form, handed to `encoder`, and
/// the encoder's output chunks are collected into a fresh [`ByteSink`].
/// `quality` is clamped to `0..=100`.
pub fn compress<E>(encoder: &mut E, frame: &PackedFrame, quality: u8) -> Result<Vec<u8>, Error>
where
    E: StillEncoder + ?Sized,
{
    let quality = quality.min(100);

    let image = to_planar(frame)?;

    let mut sink = ByteSink::new();
    encoder.encode(&image, quality, &mut sink)?;

    tracing::debug!(
        width = frame.width(),
        height = frame.height(),
        quality,
        compressed_len = sink.len(),
        "compressed packed frame"
    );

    Ok(sink.finalize())
}

/// Decompress a still-image container back into a packed capture frame.
///
/// The decoded planes are re-validated while reassembling the packed frame,
/// so a decoder emitting inconsistent planes surfaces an error rather than a
/// malformed frame.
pub fn decompress<D>(decoder: &mut D, data: &[u8]) -> Result<PackedFrame, Error>
where
    D: StillDecoder + ?Sized,
{
    let image = decoder.decode(data)?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        compressed_len = data.len(),
        "decoded still image"
    );

    to_packed(&image)
}
