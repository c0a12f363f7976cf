use spin::Mutex;
use std::{
    io::{Result, Write},
    sync::Arc,
};

/// The boxed sink a [`Logger`](crate::Logger) writes to.
pub type LogOutput = Box<dyn Write + Send>;

/// An in-memory output that can be cloned and read back.
///
/// All clones share the same buffer, so one clone can be handed
/// to a logger while another inspects what was written.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// The output written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Whether nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    /// Discards the written output.
    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
