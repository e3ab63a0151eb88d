use crate::alloc::try_zeroed;
use crate::{Error, PackedFrame, PlanarImage};

/// De-interleave a packed 4:2:2 frame into its planar form.
///
/// Every 4-byte group `[Y0, Cb, Y1, Cr]` contributes two samples to the luma
/// plane and one sample to each of the half-width chroma planes. The input is
/// not modified.
pub fn to_planar(frame: &PackedFrame) -> Result<PlanarImage, Error> {
    frame.bounds_check()?;

    let dims = frame.dimensions();
    let chroma_width = dims.chroma_width();

    let mut y = try_zeroed(dims.luma_len())?;
    let mut cb = try_zeroed(dims.chroma_len())?;
    let mut cr = try_zeroed(dims.chroma_len())?;

    let packed_rows = frame.samples().chunks_exact(dims.width * 2);
    let y_rows = y.chunks_exact_mut(dims.width);
    let cb_rows = cb.chunks_exact_mut(chroma_width);
    let cr_rows = cr.chunks_exact_mut(chroma_width);

    for (((packed_row, y_row), cb_row), cr_row) in packed_rows.zip(y_rows).zip(cb_rows).zip(cr_rows)
    {
        for (k, group) in packed_row.chunks_exact(4).enumerate() {
            y_row[k * 2] = group[0];
            cb_row[k] = group[1];
            y_row[k * 2 + 1] = group[2];
            cr_row[k] = group[3];
        }
    }

    Ok(PlanarImage::from_planes(dims.width, dims.height, y, cb, cr)?)
}

/// Reassemble a planar 4:2:2 image into a packed frame.
///
/// Exact inverse of [`to_planar`]: running both over a well-formed frame
/// reproduces the original byte sequence.
pub fn to_packed(image: &PlanarImage) -> Result<PackedFrame, Error> {
    image.bounds_check()?;

    let dims = image.dimensions();
    let chroma_width = dims.chroma_width();

    let mut samples = try_zeroed(dims.packed_len())?;

    let packed_rows = samples.chunks_exact_mut(dims.width * 2);
    let y_rows = image.y_plane().chunks_exact(dims.width);
    let cb_rows = image.cb_plane().chunks_exact(chroma_width);
    let cr_rows = image.cr_plane().chunks_exact(chroma_width);

    for (((packed_row, y_row), cb_row), cr_row) in packed_rows.zip(y_rows).zip(cb_rows).zip(cr_rows)
    {
        for (k, group) in packed_row.chunks_exact_mut(4).enumerate() {
            group[0] = y_row[k * 2];
            group[1] = cb_row[k];
            group[2] = y_row[k * 2 + 1];
            group[3] = cr_row[k];
        }
    }

    Ok(PackedFrame::new(dims.width, dims.height, samples)?)
}
