//! Console text sink.
//!
//! Writes the exported transcript verbatim to any [`std::io::Write`]:
//! stdout (UART0) on the device, a `Vec<u8>` in tests.  Bytes are not
//! reinterpreted; a code of `85` goes out as the single byte `0x55`.

use std::io::Write;

use log::warn;

use crate::app::ports::TextSink;

pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextSink for ConsoleSink<W> {
    fn write(&mut self, bytes: &[u8]) {
        if let Err(e) = self.out.write_all(bytes).and_then(|()| self.out.flush()) {
            warn!("console export failed: {}", e);
        }
    }
}
