//! First-occurrence substitution with JavaScript replacement semantics.
//!
//! `regex::Regex::replace` has its own `$name` expansion where `$1st` means a
//! group called `1st`. Rule tables are written against the JavaScript flavour,
//! so the replacement template is expanded here by hand:
//!
//! | token        | expands to                                   |
//! |--------------|----------------------------------------------|
//! | `$$`         | a literal `$`                                |
//! | `$&`         | the whole match                              |
//! | `` $` ``     | the text before the match                    |
//! | `$'`         | the text after the match                     |
//! | `$n`, `$nn`  | capture group `n` (empty if it didn't take part) |
//!
//! A `$n` naming a group that does not exist is kept literally. Two-digit
//! references are preferred when that group exists.

use crate::Pattern;

/// Replace the first match of `pattern` in `input` using `template`.
///
/// Returns `None` if the pattern does not match.
pub(crate) fn substitute_first(pattern: &Pattern, input: &str, template: &str) -> Option<String> {
    match pattern {
        Pattern::Literal(needle) => {
            let start = input.find(needle.as_str())?;
            let end = start + needle.len();
            let groups = [Some(&input[start..end])];
            Some(splice(input, start, end, template, &groups))
        }
        Pattern::Regex(re) => {
            let caps = re.captures(input)?;
            let whole = caps.get(0)?;
            let groups: Vec<Option<&str>> = caps.iter().map(|m| m.map(|m| m.as_str())).collect();
            Some(splice(input, whole.start(), whole.end(), template, &groups))
        }
    }
}

fn splice(input: &str, start: usize, end: usize, template: &str, groups: &[Option<&str>]) -> String {
    let mut out = String::with_capacity(input.len() + template.len());
    out.push_str(&input[..start]);
    expand(template, groups, &input[..start], &input[end..], &mut out);
    out.push_str(&input[end..]);
    out
}

/// Expand `template` into `out`. `groups[0]` is the whole match.
fn expand(template: &str, groups: &[Option<&str>], before: &str, after: &str, out: &mut String) {
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let Some(offset) = template[i..].find('$') else {
            out.push_str(&template[i..]);
            break;
        };
        out.push_str(&template[i..i + offset]);
        i += offset;

        // `i` points at '$' (ASCII), so `i + 1` is a char boundary.
        let Some(&next) = bytes.get(i + 1) else {
            out.push('$');
            break;
        };

        match next {
            b'$' => {
                out.push('$');
                i += 2;
            }
            b'&' => {
                out.push_str(groups[0].unwrap_or(""));
                i += 2;
            }
            b'`' => {
                out.push_str(before);
                i += 2;
            }
            b'\'' => {
                out.push_str(after);
                i += 2;
            }
            b'0'..=b'9' => match group_reference(bytes, i + 1, groups.len()) {
                Some((index, consumed)) => {
                    out.push_str(groups[index].unwrap_or(""));
                    i += 1 + consumed;
                }
                None => {
                    out.push('$');
                    i += 1;
                }
            },
            _ => {
                out.push('$');
                i += 1;
            }
        }
    }
}

/// Parse a one- or two-digit group reference starting at `at`.
///
/// Returns the group index and the number of digits consumed.
fn group_reference(bytes: &[u8], at: usize, group_count: usize) -> Option<(usize, usize)> {
    let first = (bytes[at] - b'0') as usize;

    if let Some(second) = bytes.get(at + 1).filter(|b| b.is_ascii_digit()) {
        let two = first * 10 + (second - b'0') as usize;
        if two >= 1 && two < group_count {
            return Some((two, 2));
        }
    }

    if first >= 1 && first < group_count { Some((first, 1)) } else { None }
}
