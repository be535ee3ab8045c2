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

use crate::token_dump;

use lume_ast::{dump, AstContextInner};
use lume_errors::emitter::Handler;
use lume_errors::{CliError, Result};
use lume_parser::ParserContext;
use lume_span::create_session_if_not_set_then;

use clap::Parser;
use std::{fs, path::PathBuf};
use typed_arena::Arena;

/// Parse a Lume source file and report diagnostics.
#[derive(Debug, Parser)]
#[command(name = "lume", version, about = "The Lume programming language", author)]
pub struct Cli {
    /// The source file to parse.
    pub file: PathBuf,

    /// Print the token stream.
    #[arg(long)]
    pub tokens: bool,

    /// Print the AST as an indented tree.
    #[arg(long)]
    pub ast: bool,

    /// Print the AST as JSON.
    #[arg(long)]
    pub json: bool,

    /// Reprint the parsed program as source text.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Runs the driver, printing any requested dumps to stdout and
    /// diagnostics to stderr. Returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let source = fs::read_to_string(&self.file)
            .map_err(|err| CliError::failed_to_read_file(self.file.display(), err))?;

        let handler = Handler::default();

        create_session_if_not_set_then(|_| {
            let tokens = lume_parser::tokenize(&source);
            if self.tokens {
                print!("{}", token_dump(&tokens));
            }

            let arena = Arena::new();
            let context = AstContextInner::new(&arena);
            let root = ParserContext::new(&handler, context, tokens).parse_program()?;

            // An unsuccessful parse still yields a tree, but it is not
            // meaningful; only dump it for a clean run.
            if !handler.had_errors() {
                if self.ast {
                    print!("{}", dump(root));
                }
                if self.json {
                    match serde_json::to_string_pretty(root) {
                        Ok(json) => println!("{json}"),
                        Err(err) => tracing::error!("could not serialize the AST: {err}"),
                    }
                }
                if self.pretty {
                    println!("{}", format!("{root}").trim());
                }
            }

            Ok(if handler.had_errors() { 1 } else { 0 })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["lume", "main.lume", "--tokens", "--ast"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("main.lume"));
        assert!(cli.tokens);
        assert!(cli.ast);
        assert!(!cli.json);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_missing_file_is_a_cli_error() {
        let cli = Cli::try_parse_from(["lume", "does-not-exist.lume"]).unwrap();
        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("does-not-exist.lume"));
    }

    #[test]
    fn test_run_on_a_valid_file() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "local x: number = 42;").unwrap();

        let cli = Cli::try_parse_from(["lume", file.path().to_str().unwrap()]).unwrap();
        assert_eq!(cli.run().unwrap(), 0);
    }

    #[test]
    fn test_run_reports_errors_with_nonzero_exit() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "local x = ;").unwrap();

        let cli = Cli::try_parse_from(["lume", file.path().to_str().unwrap()]).unwrap();
        assert_eq!(cli.run().unwrap(), 1);
    }
}
