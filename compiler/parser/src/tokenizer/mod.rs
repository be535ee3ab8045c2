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

//! The tokenizer to convert Lume code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down string
//! text into tokens, ending in a single `Eof`. Lexical errors are returned
//! in-band as [`Token::Error`] tokens and scanning continues after them.

pub(crate) mod token;

pub use self::token::{Token, KEYWORD_TOKENS};

pub(crate) mod lexer;
pub use self::lexer::SpannedToken;

use lume_span::Span;

use std::iter;

/// Creates a new vector of spanned tokens from the given source code text.
pub fn tokenize(input: &str) -> Vec<SpannedToken> {
    tokenize_iter(input).collect()
}

/// Yields spanned tokens from the given source code text.
///
/// Whitespace and comments are skipped; newlines inside them (and inside
/// string literals) advance the line counter. The final item is always a
/// single `Eof` token.
pub fn tokenize_iter(input: &str) -> impl '_ + Iterator<Item = SpannedToken> {
    let mut index = 0usize;
    let mut line = 1u32;
    let mut eof_emitted = false;

    iter::from_fn(move || loop {
        if eof_emitted {
            return None;
        }
        if index >= input.len() {
            eof_emitted = true;
            return Some(SpannedToken {
                token: Token::Eof,
                span: Span::new(input.len() as u32, input.len() as u32, line),
            });
        }

        let (token_len, token) = Token::eat(&input[index..]);
        let span = Span::new(index as u32, (index + token_len) as u32, line);

        // Newlines anywhere in the lexeme (strings, comments, whitespace)
        // bump the line counter for the tokens that follow.
        line += input[index..index + token_len]
            .bytes()
            .filter(|b| *b == b'\n')
            .count() as u32;
        index += token_len;

        match token {
            Token::WhiteSpace | Token::Comment => continue,
            token => return Some(SpannedToken { token, span }),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_span::create_session_if_not_set_then;

    fn kinds(input: &str) -> Vec<String> {
        tokenize(input)
            .iter()
            .map(|t| t.token.kind_str().to_string())
            .collect()
    }

    #[test]
    fn test_tokenizer() {
        create_session_if_not_set_then(|_| {
            let raw = r#"
    local x: number = 42;
    -- a comment
    if x ~= 3.5 then f(x .. "s"); end
    a = { 1, 2 }; b = [[raw]] ... # | ^ %
    "#;
            let tokens = tokenize(raw);
            let mut output = String::new();
            for SpannedToken { token, .. } in tokens.iter() {
                output += &format!("{token} ");
            }

            assert_eq!(
                output,
                r#"local x : number = 42 ; if x ~= 3.5 then f ( x .. "s" ) ; end a = { 1 , 2 } ; b = "raw" ... # | ^ % <eof> "#
            );
        });
    }

    #[test]
    fn test_single_trailing_eof() {
        create_session_if_not_set_then(|_| {
            for source in ["", "   ", "-- only a comment", "local x;"] {
                let tokens = tokenize(source);
                let eofs = tokens.iter().filter(|t| t.token == Token::Eof).count();
                assert_eq!(eofs, 1, "source {source:?}");
                assert_eq!(tokens.last().unwrap().token, Token::Eof);
            }
        });
    }

    #[test]
    fn test_lines_are_monotonic_and_counted() {
        create_session_if_not_set_then(|_| {
            let raw = "local a;\nlocal b;\n\"x\ny\"\nlocal c;";
            let tokens = tokenize(raw);
            let lines: Vec<u32> = tokens.iter().map(|t| t.span.line).collect();
            let mut sorted = lines.clone();
            sorted.sort_unstable();
            assert_eq!(lines, sorted);
            // The multi-line string starts on line 3, so `local c` is on line 5.
            assert_eq!(tokens.last().unwrap().span.line, 5);
        });
    }

    #[test]
    fn test_keywords_and_identifiers() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("while whilst _x x1 elseif");
            let kinds: Vec<_> = tokens.iter().map(|t| t.token.kind_str()).collect();
            assert_eq!(
                kinds,
                ["WHILE", "IDENTIFIER", "IDENTIFIER", "IDENTIFIER", "ELSEIF", "EOF"]
            );
        });
    }

    #[test]
    fn test_string_escapes() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize(r#""a\tb\"c\q\065""#);
            match &tokens[0].token {
                Token::StringLit(s) => {
                    s.with_str(|s| assert_eq!(s, "a\tb\"cqA"));
                }
                other => panic!("expected string, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_decimal_escape_255() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize(r#""\255""#);
            match &tokens[0].token {
                Token::StringLit(s) => s.with_str(|s| {
                    assert_eq!(s.chars().count(), 1);
                    assert_eq!(s.chars().next().unwrap() as u32, 255);
                }),
                other => panic!("expected string, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_decimal_escape_too_large() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize(r#""\256""#);
            match &tokens[0].token {
                Token::Error(message) => {
                    message.with_str(|m| assert_eq!(m, "Decimal escape too large."));
                }
                other => panic!("expected error token, got {other:?}"),
            }
            // Scanning continues past the literal.
            assert_eq!(tokens[1].token, Token::Eof);
        });
    }

    #[test]
    fn test_long_bracket_levels_do_not_interfere() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("[==[ hello ]=] ]==]");
            match &tokens[0].token {
                Token::StringLit(s) => s.with_str(|s| assert_eq!(s, " hello ]=] ")),
                other => panic!("expected string, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_long_bracket_elides_leading_newline() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("[[\nline]]");
            match &tokens[0].token {
                Token::StringLit(s) => s.with_str(|s| assert_eq!(s, "line")),
                other => panic!("expected string, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_long_bracket_comment() {
        create_session_if_not_set_then(|_| {
            assert_eq!(kinds("--[[ nothing\nto see ]] local"), ["LOCAL", "EOF"]);
            // Without a matching opener it is a line comment.
            assert_eq!(kinds("--[= not a long comment\nlocal"), ["LOCAL", "EOF"]);
        });
    }

    #[test]
    fn test_unterminated_string() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("\"abc");
            match &tokens[0].token {
                Token::Error(message) => message.with_str(|m| assert_eq!(m, "Unterminated string.")),
                other => panic!("expected error token, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_form_feed_is_not_trivia() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("a \x0C b");
            assert_eq!(tokens[0].token.kind_str(), "IDENTIFIER");
            match &tokens[1].token {
                Token::Error(message) => {
                    message.with_str(|m| assert_eq!(m, "Unexpected character '\u{c}'."));
                }
                other => panic!("expected error token, got {other:?}"),
            }
            assert_eq!(tokens[2].token.kind_str(), "IDENTIFIER");
        });
    }

    #[test]
    fn test_lone_tilde_is_an_error() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("a ~ b");
            assert_eq!(tokens[0].token.kind_str(), "IDENTIFIER");
            match &tokens[1].token {
                Token::Error(message) => message.with_str(|m| assert_eq!(m, "Expected '=' after '~'.")),
                other => panic!("expected error token, got {other:?}"),
            }
            // Tokenization continues after the error.
            assert_eq!(tokens[2].token.kind_str(), "IDENTIFIER");
        });
    }

    #[test]
    fn test_number_forms() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("1 12.5 3. .5");
            let kinds: Vec<_> = tokens.iter().map(|t| t.token.kind_str()).collect();
            // `3.` is a number followed by a dot; `.5` is a dot then a number.
            assert_eq!(
                kinds,
                ["NUMBER", "NUMBER", "NUMBER", "DOT", "DOT", "NUMBER", "EOF"]
            );
        });
    }

    #[test]
    fn test_interned_lexemes_share_symbols() {
        create_session_if_not_set_then(|_| {
            let tokens = tokenize("foo bar foo");
            let (a, b, c) = match (&tokens[0].token, &tokens[1].token, &tokens[2].token) {
                (Token::Ident(a), Token::Ident(b), Token::Ident(c)) => (*a, *b, *c),
                _ => panic!("expected identifiers"),
            };
            assert_eq!(a, c);
            assert_ne!(a, b);
        });
    }

    #[test]
    fn test_spans_cover_the_source() {
        create_session_if_not_set_then(|_| {
            let raw = "local x = 1;";
            for token in tokenize(raw) {
                if token.token != Token::Eof {
                    let text = &raw[token.span.lo as usize..token.span.hi as usize];
                    assert_eq!(text, token.token.to_string());
                }
            }
        });
    }
}
