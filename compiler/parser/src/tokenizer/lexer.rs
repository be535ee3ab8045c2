// Copyright (C) 2024-2026 The Lume Authors.
// This file is part of the Lume library.

// The Lume library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Lume library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Lume library. If not, see <https://www.gnu.org/licenses/>.

use crate::tokenizer::Token;
use lume_span::{Span, Symbol};

use serde::{Deserialize, Serialize};
use std::{fmt, iter::Peekable, str::Chars};

/// A character cursor over the front of the input that tracks how many
/// bytes it has consumed.
struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    len: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            len: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.len += c.len_utf8();
        Some(c)
    }

    fn next_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.next(),
            _ => None,
        }
    }

    fn next_if_eq(&mut self, expected: char) -> bool {
        self.next_if(|c| c == expected).is_some()
    }
}

/// Returns the long-bracket level if `input` (positioned just after an
/// initial `[`) opens a long bracket, that is, matches `=*[`.
fn long_bracket_level(input: &str) -> Option<usize> {
    let mut level = 0;
    for c in input.chars() {
        match c {
            '=' => level += 1,
            '[' => return Some(level),
            _ => return None,
        }
    }
    None
}

/// Searches `input` for a closing long bracket `]=*]` of exactly `level`.
/// Returns `(content_end, close_end)` byte offsets into `input`.
fn find_long_bracket_close(input: &str, level: usize) -> Option<(usize, usize)> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b']' {
            let mut j = i + 1;
            let mut eqs = 0;
            while j < bytes.len() && bytes[j] == b'=' {
                eqs += 1;
                j += 1;
            }
            // A closer of a different level does not terminate.
            if eqs == level && j < bytes.len() && bytes[j] == b']' {
                return Some((i, j + 1));
            }
        }
        i += 1;
    }
    None
}

fn error(message: &str) -> Token {
    Token::Error(Symbol::intern(message))
}

impl Token {
    /// Scans a long-bracket string starting at the opener `[=*[`.
    /// The opener is `2 + level` bytes long.
    fn eat_long_string(input: &str, level: usize) -> (usize, Token) {
        let open_len = 2 + level;
        let rest = &input[open_len..];

        // A single newline directly after the opener is not part of the content.
        let skip = if rest.starts_with("\r\n") {
            2
        } else if rest.starts_with('\n') || rest.starts_with('\r') {
            1
        } else {
            0
        };
        let rest = &rest[skip..];

        match find_long_bracket_close(rest, level) {
            Some((content_end, close_end)) => {
                let content = &rest[..content_end];
                let len = open_len + skip + close_end;
                (len, Token::StringLit(Symbol::intern(content)))
            }
            None => (input.len(), error("Unterminated string.")),
        }
    }

    /// Scans a comment starting at the first `-` of `--`.
    fn eat_comment(input: &str) -> (usize, Token) {
        debug_assert!(input.starts_with("--"));
        let rest = &input[2..];

        // `--[=*[` opens a long-bracket comment.
        if let Some(level) = rest.strip_prefix('[').and_then(long_bracket_level) {
            let open_len = 2 + 2 + level;
            match find_long_bracket_close(&input[open_len..], level) {
                Some((_, close_end)) => return (open_len + close_end, Token::Comment),
                None => return (input.len(), error("Unterminated comment.")),
            }
        }

        // Otherwise the comment runs to the end of the line.
        let len = match rest.find('\n') {
            Some(newline) => 2 + newline,
            None => input.len(),
        };
        (len, Token::Comment)
    }

    /// Scans a quoted string starting at the opening quote.
    fn eat_quoted_string(cursor: &mut Cursor<'_>, quote: char) -> Token {
        let mut content = String::new();
        // Set when an escape is malformed; the literal is still scanned to
        // its closing quote so tokenization resumes cleanly after it.
        let mut invalid: Option<&'static str> = None;

        loop {
            let Some(c) = cursor.next() else {
                return error("Unterminated string.");
            };

            if c == quote {
                return match invalid {
                    Some(message) => error(message),
                    None => Token::StringLit(Symbol::intern(&content)),
                };
            }

            if c != '\\' {
                // Bare newlines are legal and included verbatim.
                content.push(c);
                continue;
            }

            let Some(escape) = cursor.next() else {
                return error("Unterminated string.");
            };
            match escape {
                'a' => content.push('\x07'),
                'b' => content.push('\x08'),
                'f' => content.push('\x0c'),
                'n' => content.push('\n'),
                'r' => content.push('\r'),
                't' => content.push('\t'),
                'v' => content.push('\x0b'),
                d @ '0'..='9' => {
                    let mut value = d as u32 - '0' as u32;
                    for _ in 0..2 {
                        match cursor.next_if(|c| c.is_ascii_digit()) {
                            Some(d) => value = value * 10 + (d as u32 - '0' as u32),
                            None => break,
                        }
                    }
                    match char::from_u32(value).filter(|_| value <= 255) {
                        Some(c) => content.push(c),
                        None => invalid = Some("Decimal escape too large."),
                    }
                }
                // Escaped newline stands for itself.
                // Any other escaped character also stands for itself.
                c => content.push(c),
            }
        }
    }

    /// Scans a single token from the front of `input` and returns the number
    /// of bytes it spans together with the token. Never fails; lexical
    /// errors come back as [`Token::Error`] and scanning can continue right
    /// after the returned length.
    pub(crate) fn eat(input: &str) -> (usize, Token) {
        debug_assert!(!input.is_empty());

        let mut cursor = Cursor::new(input);

        // Consumes a single character token.
        let single = |cursor: &mut Cursor<'_>, token: Token| {
            cursor.next();
            (1, token)
        };
        // Consumes a character followed by `on` with `then` if found or `els` otherwise.
        let followed_by = |cursor: &mut Cursor<'_>, on: char, then: Token, els: Token| {
            cursor.next();
            if cursor.next_if_eq(on) {
                (2, then)
            } else {
                (1, els)
            }
        };

        let c = match cursor.peek() {
            Some(c) => c,
            None => return (0, Token::Eof),
        };

        match c {
            // Trivia is exactly space, tab, carriage return, and newline;
            // other control characters are rejected below like any
            // unrecognized character.
            ' ' | '\t' | '\r' | '\n' => return single(&mut cursor, Token::WhiteSpace),
            '"' | '\'' => {
                cursor.next();
                let token = Self::eat_quoted_string(&mut cursor, c);
                let len = match token {
                    // An unterminated string consumes everything.
                    Token::Error(_) if cursor.peek().is_none() => input.len(),
                    _ => cursor.len,
                };
                return (len, token);
            }
            x if x.is_ascii_digit() => {
                while cursor.next_if(|c| c.is_ascii_digit()).is_some() {}
                // A fraction part needs a digit right after the dot;
                // otherwise the dot is a separate token.
                let rest = &input[cursor.len..];
                if rest.starts_with('.') && rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
                    cursor.next();
                    while cursor.next_if(|c| c.is_ascii_digit()).is_some() {}
                }
                let text = &input[..cursor.len];
                return (cursor.len, Token::Number(Symbol::intern(text)));
            }
            '-' => {
                if input.starts_with("--") {
                    return Self::eat_comment(input);
                }
                return single(&mut cursor, Token::Minus);
            }
            '[' => {
                if let Some(level) = long_bracket_level(&input[1..]) {
                    return Self::eat_long_string(input, level);
                }
                return single(&mut cursor, Token::LeftSquare);
            }
            '+' => return single(&mut cursor, Token::Add),
            '*' => return single(&mut cursor, Token::Mul),
            '/' => return single(&mut cursor, Token::Div),
            '%' => return single(&mut cursor, Token::Rem),
            '^' => return single(&mut cursor, Token::Pow),
            '#' => return single(&mut cursor, Token::Hash),
            '|' => return single(&mut cursor, Token::Pipe),
            '(' => return single(&mut cursor, Token::LeftParen),
            ')' => return single(&mut cursor, Token::RightParen),
            ']' => return single(&mut cursor, Token::RightSquare),
            '{' => return single(&mut cursor, Token::LeftCurly),
            '}' => return single(&mut cursor, Token::RightCurly),
            ',' => return single(&mut cursor, Token::Comma),
            ':' => return single(&mut cursor, Token::Colon),
            ';' => return single(&mut cursor, Token::Semicolon),
            '=' => return followed_by(&mut cursor, '=', Token::Eq, Token::Assign),
            '<' => return followed_by(&mut cursor, '=', Token::LtEq, Token::Lt),
            '>' => return followed_by(&mut cursor, '=', Token::GtEq, Token::Gt),
            '~' => {
                cursor.next();
                if cursor.next_if_eq('=') {
                    return (2, Token::NotEq);
                }
                return (1, error("Expected '=' after '~'."));
            }
            '.' => {
                cursor.next();
                if cursor.next_if_eq('.') {
                    if cursor.next_if_eq('.') {
                        return (3, Token::Ellipsis);
                    }
                    return (2, Token::DotDot);
                }
                return (1, Token::Dot);
            }
            _ => (),
        }

        if c.is_ascii_alphabetic() || c == '_' {
            cursor.next();
            while cursor.next_if(|c| c.is_ascii_alphanumeric() || c == '_').is_some() {}
            let text = &input[..cursor.len];
            let token = match Token::keyword(text) {
                Some(keyword) => keyword,
                None => Token::Ident(Symbol::intern(text)),
            };
            return (cursor.len, token);
        }

        cursor.next();
        (cursor.len, Token::Error(Symbol::intern(&format!("Unexpected character '{c}'."))))
    }
}

/// A token paired with its source span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// A placeholder token, used to seed the parser cursor.
    pub const fn dummy() -> Self {
        Self {
            token: Token::Eof,
            span: Span::dummy(),
        }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ {}", self.token, self.span)
    }
}
