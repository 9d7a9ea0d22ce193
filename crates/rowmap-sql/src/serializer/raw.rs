use super::{Param, Params, ToSql};

use crate::stmt;

#[derive(Clone, Copy, PartialEq)]
enum Scan {
    Code,
    /// Inside `'...'`
    Literal,
    /// Inside `E'...'`, where `\` escapes the next character
    EscapeLiteral,
    /// Inside `"..."`
    QuotedIdent,
    /// After `--`, until end of line
    LineComment,
    /// Inside `/* ... */`
    BlockComment,
}

/// Rewrites every `@Name` placeholder in caller-written SQL.
///
/// Placeholders inside string literals (including `E'...'` escape strings
/// and `$tag$...$tag$` bodies), quoted identifiers and comments are left
/// alone, as is an `@` not followed by a letter or `_` (operators such as
/// `@>` and `@@`).
impl ToSql for &stmt::Raw {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let sql = self.sql.as_str();
        let mut chars = sql.char_indices().peekable();
        let mut scan = Scan::Code;
        let mut prev = None;

        while let Some((pos, ch)) = chars.next() {
            let next = chars.peek().map(|&(_, ch)| ch);
            let after_ident = prev.is_some_and(is_ident_continue);
            prev = Some(ch);

            match scan {
                Scan::Code => match ch {
                    '\'' => scan = Scan::Literal,
                    'E' | 'e' if next == Some('\'') && !after_ident => {
                        f.dst.push(ch);
                        f.dst.push('\'');
                        chars.next();
                        scan = Scan::EscapeLiteral;
                        continue;
                    }
                    '$' if !after_ident => {
                        if let Some(len) = dollar_quoted_len(&sql[pos..]) {
                            f.dst.push_str(&sql[pos..pos + len]);
                            while chars.next_if(|&(i, _)| i < pos + len).is_some() {}
                            continue;
                        }
                    }
                    '"' => scan = Scan::QuotedIdent,
                    '-' if next == Some('-') => scan = Scan::LineComment,
                    '/' if next == Some('*') => {
                        f.dst.push_str("/*");
                        chars.next();
                        scan = Scan::BlockComment;
                        continue;
                    }
                    '@' if next.is_some_and(is_ident_start) => {
                        let start = pos + 1;
                        let mut end = start;
                        while let Some(&(i, ch)) = chars.peek() {
                            if !is_ident_continue(ch) {
                                break;
                            }
                            end = i + ch.len_utf8();
                            chars.next();
                        }

                        Param(&sql[start..end]).to_sql(f);
                        continue;
                    }
                    _ => {}
                },
                Scan::Literal if ch == '\'' => scan = Scan::Code,
                Scan::EscapeLiteral => match ch {
                    '\\' | '\'' if ch == '\\' || next == Some('\'') => {
                        f.dst.push(ch);
                        if let Some((_, escaped)) = chars.next() {
                            f.dst.push(escaped);
                        }
                        continue;
                    }
                    '\'' => scan = Scan::Code,
                    _ => {}
                },
                Scan::QuotedIdent if ch == '"' => scan = Scan::Code,
                Scan::LineComment if ch == '\n' => scan = Scan::Code,
                Scan::BlockComment if ch == '*' && next == Some('/') => {
                    f.dst.push_str("*/");
                    chars.next();
                    scan = Scan::Code;
                    continue;
                }
                _ => {}
            }

            f.dst.push(ch);
        }
    }
}

/// Length of the `$tag$ ... $tag$` string starting at `sql`, if `sql` opens
/// one. An unterminated body runs to the end of the text.
fn dollar_quoted_len(sql: &str) -> Option<usize> {
    let rest = &sql[1..];
    let tag_len = rest.find(|ch: char| !is_ident_continue(ch))?;

    // `$1` is a positional parameter, not a tag.
    if rest.starts_with(|ch: char| ch.is_ascii_digit()) || !rest[tag_len..].starts_with('$') {
        return None;
    }

    let delim = &sql[..tag_len + 2];
    let body = &sql[delim.len()..];

    Some(
        body.find(delim)
            .map_or(sql.len(), |end| delim.len() + end + delim.len()),
    )
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
