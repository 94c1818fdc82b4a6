//! Voice transaction parser
//!
//! Turns a free-form utterance like "send 150 to Palesa" into a structured
//! [`Intent`] or a typed [`ParseError`]. Grammar, informally:
//!
//! ```text
//! send_cmd  := ("send"|"pay") WS+ AMOUNT WS+ "to" WS+ RECIPIENT
//! AMOUNT    := DIGIT+ ("." DIGIT+)?
//! RECIPIENT := any non-empty remaining text
//! ```
//!
//! Matching is deliberately lexical, not token-based: the verb is a prefix
//! check, `to` is the first occurrence of that substring anywhere in the
//! line, and the amount is read from the first digit before it with any
//! trailing text ignored. These quirks are covered by tests rather than
//! fixed, so `send 10 tomas to Tom` parses the `to` inside "tomas".

use crate::error::ParseError;
use crate::models::{Intent, Verb};

/// Offset from the `to` match to the start of the recipient text: the two
/// letters of the separator plus one delimiting character.
const RECIPIENT_OFFSET: usize = 3;

/// Parse a voice transaction line into an [`Intent`].
pub fn parse(line: &str) -> Result<Intent, ParseError> {
    let verb = if line.starts_with("send") {
        Verb::Send
    } else if line.starts_with("pay") {
        Verb::Pay
    } else {
        return Err(ParseError::BadVerb);
    };

    let to_pos = line.find("to").ok_or(ParseError::MissingSeparator)?;

    let prefix = &line[..to_pos];
    let digit_pos = prefix
        .find(|c: char| c.is_ascii_digit())
        .ok_or(ParseError::NoAmount)?;

    let amount =
        parse_leading_number(&prefix[digit_pos..]).ok_or(ParseError::BadAmount)?;

    let recipient = line
        .get(to_pos + RECIPIENT_OFFSET..)
        .map(|s| s.trim_end_matches(['\r', '\n']).trim_start())
        .unwrap_or("");
    if recipient.is_empty() {
        return Err(ParseError::NoRecipient);
    }

    Ok(Intent {
        verb,
        amount,
        recipient: recipient.to_string(),
    })
}

/// Longest numeric prefix of `s`: ASCII digits with at most one decimal
/// point. Trailing text is ignored, so "12abc" reads as 12.
fn parse_leading_number(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            end = i + c.len_utf8();
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    s[..end].parse().ok()
}
