//! Utility functions and errors for parsing input.

use std::str::FromStr;

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the
/// desired type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

/// Parse each line of input with a closure, mapping any line's dynamic error to an
/// [`InvalidLine`] that reports the line's position.
///
/// # Arguments
/// - `input` - The input string to parse.
/// - `parser` - A closure that takes a line index and line string and returns a
///   [`DynamicResult`].
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is returned, sourcing the original error.
///
/// # Returns
///
/// An iterable of parsing results for each line.
pub fn parse_input_lines<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

/// A block of input lines caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing block {}", .block_index.saturating_add(1))]
pub struct InvalidBlock {
    /// The block index, zero based.
    /// This will be formatted to a one-based number for display.
    block_index: usize,
    source: DynamicError,
}

/// Parse blocks of input separated by blank lines with a closure, mapping any block's dynamic
/// error to an [`InvalidBlock`] that reports the block's position.
///
/// Blocks that are entirely whitespace are skipped, so a trailing newline doesn't produce an
/// empty final block.
///
/// # Arguments
/// - `input` - The input string to split on blank lines and parse.
/// - `parser` - A closure that takes a block index and block string and returns a
///   [`DynamicResult`].
///
/// # Errors
///
/// If parsing a block fails, an [`InvalidBlock`] error is returned, sourcing the original error.
///
/// # Returns
///
/// An iterable of parsing results for each block.
pub fn parse_input_blocks<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidBlock>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(move |(block_index, block)| {
            parser(block_index, block).map_err(|source| InvalidBlock {
                block_index,
                source,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_lines_report_failing_line_position() {
        let results: Vec<_> = parse_input_lines("1\nx\n3", |_, line| {
            Ok(parse_with_context::<u32>(line)?)
        })
        .collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        let Err(error) = &results[1] else {
            panic!("line 2 should fail to parse");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
        assert!(results[2].is_ok());
    }

    #[test]
    fn input_blocks_split_on_blank_lines() {
        let Ok(blocks) = parse_input_blocks("a\nb\n\nc\n", |_, block| {
            Ok(block.trim().to_string())
        })
        .collect::<Result<Vec<_>, _>>() else {
            panic!("blocks should parse");
        };

        assert_eq!(blocks, vec!["a\nb".to_string(), "c".to_string()]);
    }

    #[test]
    fn input_blocks_skip_whitespace_blocks() {
        let count = parse_input_blocks("", |_, _block| Ok(())).count();
        assert_eq!(count, 0);

        let count = parse_input_blocks("a\n\n\n\nb", |_, _block| Ok(())).count();
        assert_eq!(count, 2);
    }
}
