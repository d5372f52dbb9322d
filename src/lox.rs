//! One interpreter session: the pipeline driver shared by file runs and the
//! REPL.
//!
//! The session owns the interpreter (so globals survive between `run` calls)
//! and the two error flags.  Diagnostics go to the [`Reporter`]; nothing in
//! here prints directly.

use std::io::Write;

use log::{debug, info};

use crate::error::{LoxError, Reporter};
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;

/// Exit status for a static (lex, parse or resolve) error.
pub const EXIT_STATIC_ERROR: i32 = 65;

/// Exit status for a runtime error.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

pub struct Lox<R: Reporter> {
    interpreter: Interpreter,
    reporter: R,
    had_error: bool,
    had_runtime_error: bool,
    next_id: usize,
}

impl<R: Reporter> Lox<R> {
    /// A session printing program output to stdout.
    pub fn new(reporter: R) -> Self {
        Self::from_interpreter(reporter, Interpreter::new())
    }

    /// A session printing program output to `out`.
    pub fn with_output(reporter: R, out: Box<dyn Write>) -> Self {
        Self::from_interpreter(reporter, Interpreter::with_output(out))
    }

    fn from_interpreter(reporter: R, interpreter: Interpreter) -> Self {
        info!("Lox session created");

        Self {
            interpreter,
            reporter,
            had_error: false,
            had_runtime_error: false,
            next_id: 0,
        }
    }

    /// Lex, parse, resolve and interpret one complete unit of source.
    ///
    /// Resolution is skipped if lexing or parsing reported anything, and
    /// interpretation is skipped if any static error has been reported since
    /// the last [`Lox::reset_error`].
    pub fn run(&mut self, source: &str) {
        let (tokens, lex_errors) = Scanner::new(source).scan_tokens();
        self.report_all(&lex_errors);

        let mut parser = Parser::with_first_id(&tokens, self.next_id);
        let (statements, parse_errors) = parser.parse();
        self.next_id = parser.next_id();
        self.report_all(&parse_errors);

        if self.had_error {
            debug!("Static errors reported, skipping resolution");
            return;
        }

        let resolved = Resolver::new(&mut self.interpreter).resolve(&statements);
        if let Err(errors) = resolved {
            self.report_all(&errors);
        }

        if self.had_error {
            debug!("Resolve errors reported, skipping interpretation");
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            debug!("Runtime error: {}", error);

            self.reporter.report_runtime(&error);
            self.had_runtime_error = true;
        }
    }

    fn report_all(&mut self, errors: &[LoxError]) {
        for error in errors {
            self.reporter.report(error);
            self.had_error = true;
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears the static-error flag; the REPL calls this after every line.
    pub fn reset_error(&mut self) {
        self.had_error = false;
    }

    /// Process exit status for everything run so far.
    pub fn exit_code(&self) -> i32 {
        if self.had_error {
            EXIT_STATIC_ERROR
        } else if self.had_runtime_error {
            EXIT_RUNTIME_ERROR
        } else {
            0
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
