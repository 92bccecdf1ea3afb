//! Byte channel to the server

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

/// A reliable, ordered byte channel
///
/// Every call blocks until the bytes are transferred or an I/O error occurs.
pub trait Channel {
    /// Write all of `bytes`
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn send(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Fill `buf` completely
    ///
    /// # Errors
    /// Returns the underlying I/O error, including an unexpected end of
    /// stream.
    fn receive(&mut self, buf: &mut [u8]) -> io::Result<()>;

    /// Release the channel
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn close(&mut self) -> io::Result<()>;
}

impl Channel for TcpStream {
    fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)?;
        self.flush()
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.read_exact(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        match self.shutdown(Shutdown::Both) {
            // The server may already have hung up
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

impl<C: Channel + ?Sized> Channel for &mut C {
    fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).send(bytes)
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<()> {
        (**self).receive(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
