//! Log writer that shares the terminal with the progress bar

use indicatif::MultiProgress;
use std::io::{self, Write};

/// Writes through `inner` with every bar of `multi` cleared first and
/// redrawn afterwards, so log lines never interleave with a bar redraw.
pub struct ProgressLogWriter<W> {
    multi: MultiProgress,
    inner: W,
}

impl<W: Write> ProgressLogWriter<W> {
    pub fn new(multi: MultiProgress, inner: W) -> Self {
        Self { multi, inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ProgressLogWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.multi.suspend(|| inner.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let inner = &mut self.inner;
        self.multi.suspend(|| inner.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.inner;
        self.multi.suspend(|| inner.flush())
    }
}
