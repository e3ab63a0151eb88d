/// Backing storage for a plane or sink could not be obtained or grown
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("failed to allocate {requested} additional bytes")]
pub struct AllocError {
    /// Number of bytes the failed request asked for
    pub requested: usize,
}

/// Allocate a zero-filled buffer of `len` bytes, returning an error instead
/// of aborting when the allocation cannot be satisfied.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<u8>, AllocError> {
    let mut buf = Vec::new();

    buf.try_reserve_exact(len)
        .map_err(|_| AllocError { requested: len })?;
    buf.resize(len, 0);

    Ok(buf)
}
