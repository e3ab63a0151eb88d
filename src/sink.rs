use crate::AllocError;

/// Append-only accumulator for incrementally produced bytes.
///
/// Still-image encoders hand their output to a write callback an unspecified
/// number of times with unspecified chunk sizes, so the sink grows its
/// backing storage on demand. Bytes that were appended successfully are never
/// lost, even when a later growth attempt fails.
#[derive(Debug, Default)]
pub struct ByteSink {
    buf: Vec<u8>,
}

impl ByteSink {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Empty sink with backing storage for at least `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut buf = Vec::new();

        buf.try_reserve(capacity)
            .map_err(|_| AllocError { requested: capacity })?;

        Ok(Self { buf })
    }

    /// Append `data` after everything written so far.
    ///
    /// Growth is amortized. If the backing storage cannot be grown the sink
    /// is left unchanged and the previously appended bytes stay retrievable.
    pub fn append(&mut self, data: &[u8]) -> Result<(), AllocError> {
        self.buf
            .try_reserve(data.len())
            .map_err(|_| AllocError {
                requested: data.len(),
            })?;
        self.buf.extend_from_slice(data);

        Ok(())
    }

    /// Number of bytes appended so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The bytes appended so far, in append order
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the sink, returning everything appended
    pub fn finalize(self) -> Vec<u8> {
        self.buf
    }
}
