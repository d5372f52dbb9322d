#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rox::error::{LoxError, Reporter};
use rox::lox::Lox;

/// Output sink whose contents stay readable after it is handed to the
/// interpreter as a `Box<dyn Write>`.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps every diagnostic as its display string.
#[derive(Default)]
pub struct CollectingReporter {
    pub errors: Vec<String>,
    pub runtime_errors: Vec<String>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, error: &LoxError) {
        self.errors.push(error.to_string());
    }

    fn report_runtime(&mut self, error: &LoxError) {
        self.runtime_errors.push(error.to_string());
    }
}

/// A session writing into a fresh buffer.
pub fn session() -> (Lox<CollectingReporter>, SharedBuffer) {
    let out = SharedBuffer::default();
    let lox = Lox::with_output(CollectingReporter::default(), Box::new(out.clone()));
    (lox, out)
}

/// Runs `source` in a fresh session and returns printed lines, static errors
/// and runtime errors.
pub fn run(source: &str) -> (Vec<String>, Vec<String>, Vec<String>) {
    let (mut lox, out) = session();
    lox.run(source);

    let reporter = lox.reporter();
    (
        out.lines(),
        reporter.errors.clone(),
        reporter.runtime_errors.clone(),
    )
}
