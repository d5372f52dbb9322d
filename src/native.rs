//! Host built‑ins seeded into the global scope before user code runs.

use chrono::Utc;
use log::trace;

use crate::callable::NativeFunction;
use crate::error::Result;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// Every built‑in the interpreter starts with.
pub fn builtins() -> Vec<NativeFunction> {
    vec![NativeFunction::new("clock", 0, clock)]
}

/// `clock()`: seconds since the Unix epoch, with millisecond resolution.
fn clock(_interpreter: &mut Interpreter, _arguments: &[Value]) -> Result<Value> {
    let seconds: f64 = Utc::now().timestamp_millis() as f64 / 1000.0;

    trace!("clock() returned {}", seconds);

    Ok(Value::Number(seconds))
}
