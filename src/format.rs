//! Placeholder substitution for log message patterns.
//!
//! Patterns use `{}` anchors that are replaced left-to-right with the
//! supplied arguments:
//!
//! ```
//! use deferlog::format::format;
//!
//! let msg = format("tile {} of {}", &[&3, &9]);
//! assert_eq!(msg, "tile 3 of 9");
//! ```
//!
//! A backslash escapes an anchor (`\{}` renders a literal `{}` without
//! consuming an argument); a double backslash before an anchor renders a
//! single backslash and substitutes normally. Surplus anchors are left
//! verbatim and surplus arguments are ignored.

use std::fmt::{self, Write};

const ANCHOR: &str = "{}";
const ESCAPE: u8 = b'\\';

/// Substitute `{}` anchors in `pattern` with `args`, left to right.
pub fn format(pattern: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let bytes = pattern.as_bytes();
    let mut start = 0;
    let mut arg = 0;

    while arg < args.len() {
        let anchor = match pattern[start..].find(ANCHOR) {
            Some(offset) => start + offset,
            None => {
                if start == 0 {
                    // No anchors at all
                    return pattern.to_string();
                }
                out.push_str(&pattern[start..]);
                return out;
            }
        };

        if anchor > 0 && bytes[anchor - 1] == ESCAPE {
            if anchor >= 2 && bytes[anchor - 2] == ESCAPE {
                // Escaped escape: emit one backslash, substitute normally
                out.push_str(&pattern[start..anchor - 1]);
                let _ = write!(out, "{}", args[arg]);
                arg += 1;
                start = anchor + 2;
            } else {
                // Escaped anchor: literal "{}", argument not consumed
                out.push_str(&pattern[start..anchor - 1]);
                out.push('{');
                start = anchor + 1;
            }
        } else {
            out.push_str(&pattern[start..anchor]);
            let _ = write!(out, "{}", args[arg]);
            arg += 1;
            start = anchor + 2;
        }
    }

    out.push_str(&pattern[start..]);
    out
}
