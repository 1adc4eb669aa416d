//! Destinations for the human-readable scaling report.
//!
//! A [`Scaling`](crate::scaling::Scaling) writes its report to stdout by
//! default.   Anything implementing [`ConfigurablePrintTarget`] can be
//! redirected to a file, an arbitrary stream, an in-memory buffer, or
//! nowhere at all.

use std::fs::File;
use std::io::{sink, stdout, Error, ErrorKind, Result, Sink, Stdout, Write};

pub(crate) enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink(Sink),
}

impl PrintTarget {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            PrintTarget::Stdout(out) => out,
            PrintTarget::File(file) => file,
            PrintTarget::Buffer(buf) => buf,
            PrintTarget::Stream(stream) => stream.as_mut(),
            PrintTarget::Sink(sink) => sink,
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink(_) => "Sink",
        };
        write!(f, "PrintTarget::{}", name)
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer().flush()
    }
}

/// Redirection of report output.
pub trait ConfigurablePrintTarget {
    /// report to stdout (the default)
    fn print_to_stdout(&mut self);
    /// report to a file
    fn print_to_file(&mut self, file: File);
    /// report to any stream implementing `Write`
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// collect the report in an internal buffer, see
    /// [`get_print_buffer`](ConfigurablePrintTarget::get_print_buffer)
    fn print_to_buffer(&mut self);
    /// discard the report
    fn print_to_sink(&mut self);
    /// Contents of the internal buffer.  Fails unless
    /// [`print_to_buffer`](ConfigurablePrintTarget::print_to_buffer) is active.
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(sink());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        let PrintTarget::Buffer(buf) = self else {
            return Err(Error::new(ErrorKind::Other, "report buffering is not enabled"));
        };
        Ok(String::from_utf8_lossy(buf).into_owned())
    }
}
