// Function-call text parser for Commander Core
//
// Grammar: `name(arg, arg, ...)`. Whitespace is insignificant everywhere
// and is removed before scanning. Arguments are returned as raw literal
// text; turning them into Values is left to the positional decoder.

use crate::types::{CommanderError, Result};

const ERR_NO_OPEN: &str = "syntax error: '(' not found.";
const ERR_NO_CLOSE: &str = "syntax error: ')' not found.";
const ERR_TRAILING: &str = "syntax error: extra characters found after ')'.";

enum Phase {
    ScanningName,
    ScanningArgs,
}

/// Split function-call text into its name and raw argument strings.
///
/// A trailing comma before `)` is tolerated. A comma directly followed by
/// another comma yields an empty argument, which the positional decoder
/// then rejects.
pub fn parse_function_call(text: &str) -> Result<(String, Vec<String>)> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut phase = Phase::ScanningName;
    let mut name = String::new();
    let mut args = Vec::new();
    let mut current = String::new();
    let mut closed_at = None;

    for (i, c) in stripped.char_indices() {
        match phase {
            Phase::ScanningName => match c {
                '(' => phase = Phase::ScanningArgs,
                _ => name.push(c),
            },
            Phase::ScanningArgs => match c {
                ')' => {
                    if !current.is_empty() {
                        args.push(std::mem::take(&mut current));
                    }
                    closed_at = Some(i + c.len_utf8());
                    break;
                }
                ',' => args.push(std::mem::take(&mut current)),
                _ => current.push(c),
            },
        }
    }

    let rest = match (phase, closed_at) {
        (Phase::ScanningName, _) => return Err(CommanderError::ParseError(ERR_NO_OPEN.to_string())),
        (Phase::ScanningArgs, None) => return Err(CommanderError::ParseError(ERR_NO_CLOSE.to_string())),
        (Phase::ScanningArgs, Some(end)) => &stripped[end..],
    };

    if !rest.is_empty() {
        return Err(CommanderError::ParseError(ERR_TRAILING.to_string()));
    }

    Ok((name, args))
}
