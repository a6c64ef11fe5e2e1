// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! VDF text reader
//!
//! This module turns VDF text into the merged configuration tree.
//! It handles:
//! - Quoted tokens with `\"`, `\\`, `\n` and `\t` escapes (others kept verbatim)
//! - Unquoted tokens
//! - Nested `{ ... }` blocks
//! - `//` line comments and a leading byte-order mark
//!
//! # Architecture
//! The reader uses nom combinators for the lexical level only. Every
//! (key, value) pair of a level is handed to [`MultiMapBuilder`], which owns
//! the duplicate-key semantics. The reader itself never decides what a
//! repeated key means.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::{anychar, char, multispace1, not_line_ending},
    combinator::{map, value},
    multi::{fold_many0, many0_count},
    sequence::{delimited, preceded},
    IResult, Parser,
};
use std::borrow::Cow;
use thiserror::Error;

use crate::core::multimap::MultiMapBuilder;
use crate::core::types::{ConfigMap, ConfigNode};

/// Parse errors with line number context
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
}

/// Parse a complete VDF document into its top-level mapping
///
/// # Arguments
/// * `content` - The full file content
///
/// # Returns
/// The merged top-level mapping, or a ParseError pointing at the failing line
///
/// # Example
/// ```
/// use sc_vdf_mapper::core::parser::parse_vdf;
///
/// let root = parse_vdf(r#""controller_mappings" { "version" "3" }"#)?;
/// assert!(root.contains_key("controller_mappings"));
/// # Ok::<(), sc_vdf_mapper::core::parser::ParseError>(())
/// ```
pub fn parse_vdf(content: &str) -> Result<ConfigMap, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let (rest, root) = parse_block_body(content).map_err(|e| match e {
        nom::Err::Error(err) | nom::Err::Failure(err) => syntax_error(
            content,
            err.input,
            format!("unexpected input ({:?})", err.code),
        ),
        nom::Err::Incomplete(_) => syntax_error(content, "", "unexpected end of input".to_string()),
    })?;

    // The body stops at EOF or at a '}' it cannot close
    if !rest.is_empty() {
        return Err(syntax_error(content, rest, "unmatched '}'".to_string()));
    }

    Ok(root)
}

/// Builds an InvalidSyntax error for the position where `rest` begins.
fn syntax_error(content: &str, rest: &str, message: String) -> ParseError {
    let offset = content.len().saturating_sub(rest.len());
    let line = content[..offset].matches('\n').count() + 1;
    ParseError::InvalidSyntax { line, message }
}

/// Skip whitespace and `//` comments
pub fn skip_trivia(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0_count(alt((
            value((), multispace1),
            value((), preceded(tag("//"), not_line_ending)),
        ))),
    )
    .parse(input)
}

/// Parse a quoted token
///
/// The opening and closing quotes are consumed, escapes are resolved.
/// `""` yields an empty string. An unknown escape such as `\G` is kept
/// verbatim, so Windows paths survive unquoted backslashes.
pub fn parse_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(quoted_fragment, String::new, |mut acc, fragment| {
            acc.push_str(&fragment);
            acc
        }),
        char('"'),
    )
    .parse(input)
}

/// A run of plain characters or one escape sequence
fn quoted_fragment(input: &str) -> IResult<&str, Cow<'_, str>> {
    alt((
        map(is_not("\\\""), Cow::Borrowed),
        map(preceded(char('\\'), anychar), |c| match c {
            'n' => Cow::Borrowed("\n"),
            't' => Cow::Borrowed("\t"),
            '\\' => Cow::Borrowed("\\"),
            '"' => Cow::Borrowed("\""),
            other => Cow::Owned(format!("\\{}", other)),
        }),
    ))
    .parse(input)
}

/// Parse an unquoted token
///
/// Runs until whitespace, a quote or a brace.
pub fn parse_bare(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| !c.is_whitespace() && !matches!(c, '"' | '{' | '}')),
        |s: &str| s.to_string(),
    )
    .parse(input)
}

/// Parse a key or scalar value
pub fn parse_token(input: &str) -> IResult<&str, String> {
    alt((parse_quoted, parse_bare)).parse(input)
}

/// Parse a value: either a nested block or a scalar token
pub fn parse_value(input: &str) -> IResult<&str, ConfigNode> {
    alt((
        map(
            delimited(char('{'), parse_block_body, char('}')),
            ConfigNode::Mapping,
        ),
        map(parse_token, ConfigNode::Scalar),
    ))
    .parse(input)
}

/// Parse the entries of one level until EOF or a closing brace
///
/// Trailing trivia is consumed, so on success the remaining input is empty
/// or starts with `}`.
pub fn parse_block_body(input: &str) -> IResult<&str, ConfigMap> {
    let mut builder = MultiMapBuilder::new();
    let (mut input, _) = skip_trivia(input)?;

    while !input.is_empty() && !input.starts_with('}') {
        let (rest, key) = parse_token(input)?;
        let (rest, _) = skip_trivia(rest)?;
        let (rest, node) = parse_value(rest)?;
        let (rest, _) = skip_trivia(rest)?;

        builder.push(key, node);
        input = rest;
    }

    Ok((input, builder.finish()))
}
