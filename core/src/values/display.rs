//! String forms of values.
//!
//! `Display` is the form emitted into template output: null is empty, strings
//! are raw. Inside composites, values use their inspect form, where null is
//! `nil` and strings are quoted.

use core::fmt::{self, Write};

use crate::{ToString, values::Value};

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Str(s) => f.write_str(s),
            Value::Object(object) => object.write_string(f),
            _ => write_inspect(f, self),
        }
    }
}

/// Write `value` the way it appears inside a sequence or mapping.
pub(crate) fn write_inspect(f: &mut dyn fmt::Write, value: &Value<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("nil"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Int(i) => write!(f, "{}", i),
        Value::Float(x) => format_float(f, *x),
        Value::Str(s) => write_quoted(f, s),
        Value::Seq(seq) => {
            f.write_char('[')?;
            for (i, elem) in seq.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_inspect(f, &elem)?;
            }
            f.write_char(']')
        }
        Value::Map(map) => {
            if map.is_empty() {
                return f.write_str("{}");
            }
            f.write_char('{')?;
            for (i, (key, value)) in map.entries().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(f, key)?;
                f.write_str(" => ")?;
                write_inspect(f, value)?;
            }
            f.write_char('}')
        }
        Value::Record(record) => {
            write!(f, "#<{}", record.name())?;
            for (i, (name, value)) in record.fields().iter().enumerate() {
                f.write_str(if i == 0 { " " } else { ", " })?;
                write!(f, "{}=", name)?;
                write_inspect(f, value)?;
            }
            f.write_char('>')
        }
        Value::Object(object) => object.write_string(f),
    }
}

/// Format a float ensuring it always has a decimal point
fn format_float(f: &mut dyn fmt::Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            write!(f, "{}", s)
        } else {
            write!(f, "{}.0", s)
        }
    }
}

/// Write a double-quoted string with backslash escapes.
fn write_quoted(f: &mut dyn fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
