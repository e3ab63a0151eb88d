use rand::RngCore;
use still_frame::{
    ByteSink, CodecError, Error, PackedFrame, PlanarImage, StillDecoder, StillEncoder, compress,
    decompress,
};

const MAGIC: &[u8; 4] = b"PL42";

/// Toy lossless engine storing the planes in a length-prefixed container.
///
/// Output is emitted through the sink in chunks of `chunk_size` bytes to
/// exercise the incremental write path the way a real encoder callback
/// would.
struct PlaneCodec {
    chunk_size: usize,
}

impl PlaneCodec {
    fn emit(&self, sink: &mut ByteSink, data: &[u8]) -> Result<(), Error> {
        for chunk in data.chunks(self.chunk_size.max(1)) {
            sink.append(chunk)?;
        }

        Ok(())
    }
}

impl StillEncoder for PlaneCodec {
    fn encode(
        &mut self,
        image: &PlanarImage,
        _quality: u8,
        sink: &mut ByteSink,
    ) -> Result<(), Error> {
        let mut header = Vec::from(*MAGIC);
        header.extend_from_slice(&(image.width() as u32).to_le_bytes());
        header.extend_from_slice(&(image.height() as u32).to_le_bytes());

        self.emit(sink, &header)?;
        self.emit(sink, image.y_plane())?;
        self.emit(sink, image.cb_plane())?;
        self.emit(sink, image.cr_plane())?;

        Ok(())
    }
}

impl StillDecoder for PlaneCodec {
    fn decode(&mut self, data: &[u8]) -> Result<PlanarImage, Error> {
        let rest = data
            .strip_prefix(MAGIC)
            .ok_or_else(|| CodecError::new(1, "bad magic"))?;

        let (dims, rest) = rest
            .split_at_checked(8)
            .ok_or_else(|| CodecError::new(2, "truncated header"))?;

        let width = u32::from_le_bytes(dims[..4].try_into().unwrap()) as usize;
        let height = u32::from_le_bytes(dims[4..].try_into().unwrap()) as usize;

        let luma_len = width * height;
        let chroma_len = (width / 2) * height;

        if rest.len() != luma_len + 2 * chroma_len {
            return Err(CodecError::new(3, "truncated planes").into());
        }

        let (y, rest) = rest.split_at(luma_len);
        let (cb, cr) = rest.split_at(chroma_len);

        Ok(PlanarImage::from_planes(
            width,
            height,
            y.to_vec(),
            cb.to_vec(),
            cr.to_vec(),
        )?)
    }
}

fn random_frame(width: usize, height: usize) -> PackedFrame {
    let mut samples = vec![0u8; width * height * 2];
    rand::rng().fill_bytes(&mut samples);

    PackedFrame::new(width, height, samples).unwrap()
}

#[test]
fn compress_then_decompress_is_identity() {
    let frame = random_frame(64, 48);
    let mut codec = PlaneCodec { chunk_size: 4096 };

    let compressed = compress(&mut codec, &frame, 100).unwrap();
    let restored = decompress(&mut codec, &compressed).unwrap();

    assert_eq!(restored, frame);
}

#[test]
fn chunk_size_does_not_affect_output() {
    let frame = random_frame(16, 16);

    let whole = compress(&mut PlaneCodec { chunk_size: 1 << 20 }, &frame, 80).unwrap();
    let tiny = compress(&mut PlaneCodec { chunk_size: 3 }, &frame, 80).unwrap();

    assert_eq!(whole, tiny);
}

#[test]
fn shape_survives_the_round_trip() {
    for (width, height) in [(2, 1), (6, 5), (122, 7)] {
        let frame = random_frame(width, height);
        let mut codec = PlaneCodec { chunk_size: 17 };

        let compressed = compress(&mut codec, &frame, 50).unwrap();
        let restored = decompress(&mut codec, &compressed).unwrap();

        assert_eq!(restored.width(), width);
        assert_eq!(restored.height(), height);
        assert_eq!(restored.samples().len(), width * height * 2);
    }
}

#[test]
fn garbage_input_is_a_codec_error() {
    let mut codec = PlaneCodec { chunk_size: 64 };

    let err = decompress(&mut codec, b"definitely not a container").unwrap_err();

    assert!(matches!(err, Error::Codec(CodecError { code: 1, .. })));
}

#[test]
fn truncated_input_is_a_codec_error() {
    let frame = random_frame(8, 8);
    let mut codec = PlaneCodec { chunk_size: 64 };

    let mut compressed = compress(&mut codec, &frame, 100).unwrap();
    compressed.truncate(compressed.len() - 1);

    let err = decompress(&mut codec, &compressed).unwrap_err();

    assert!(matches!(err, Error::Codec(CodecError { code: 3, .. })));
}
