//! Byte stream access to `RingBuffer<u8>`.

use std::io;

use crate::growth::Growth;
use crate::RingBuffer;

/// Appends the bytes to the back of the buffer, growing as needed.
///
/// Writes are never short.
impl<G: Growth> io::Write for RingBuffer<u8, G> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push_range(buf);
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.push_range(buf);
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pulls bytes from the front of the buffer. An empty buffer reads 0 bytes.
impl<G: Growth> io::Read for RingBuffer<u8, G> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.pull_range(buf))
    }
}
