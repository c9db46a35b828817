use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 4: Camp Cleanup",
    parsed = AssignmentPairs,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2022<4> {}

/*
Input is one pair of section assignments per line, like `2-4,6-8`: two inclusive ranges of
section ids separated by a comma.
*/

/// The integer type for camp section ids.
type SectionId = u32;

/// An inclusive range of camp sections assigned to one elf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionRange {
    start: SectionId,
    end: SectionId,
}

impl SectionRange {
    /// Whether this range fully contains the other.
    fn contains(self, other: Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Whether this range shares any section with the other.
    fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// The parsed assignment pairs, in input order.
#[derive(Debug)]
struct AssignmentPairs {
    pairs: Vec<(SectionRange, SectionRange)>,
}

/// An error when parsing input into [`AssignmentPairs`].
#[derive(thiserror::Error, Debug)]
enum ParseAssignmentPairsError {
    #[error("expected a line of the shape \"a-b,c-d\", got {0:?}")]
    MalformedPair(String),

    #[error("range start {start} is after range end {end}")]
    InvertedRange { start: SectionId, end: SectionId },
}

/// Parse one `a-b` token into a [`SectionRange`].
fn parse_range(token: &str, line: &str) -> DynamicResult<SectionRange> {
    let (start_token, end_token) = token
        .split_once('-')
        .ok_or_else(|| ParseAssignmentPairsError::MalformedPair(line.to_string()))?;
    let start = parse_with_context::<SectionId>(start_token)?;
    let end = parse_with_context::<SectionId>(end_token)?;
    if start > end {
        return Err(ParseAssignmentPairsError::InvertedRange { start, end }.into());
    }
    Ok(SectionRange { start, end })
}

impl ParseData for AssignmentPairs {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let pairs = parse_input_lines(input, |_, line| {
            let (first_token, second_token) = line
                .split_once(',')
                .ok_or_else(|| ParseAssignmentPairsError::MalformedPair(line.to_string()))?;
            Ok((parse_range(first_token, line)?, parse_range(second_token, line)?))
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { pairs })
    }
}

/*
For part 1, count the pairs where one range fully contains the other (either direction).
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = AssignmentPairs;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let count = input
            .pairs
            .iter()
            .filter(|(first, second)| first.contains(*second) || second.contains(*first))
            .count();
        Ok(count)
    }
}

/*
For part 2, count the pairs whose ranges overlap at all.
*/

impl Solution<PartTwo> for Day04 {
    type Input = AssignmentPairs;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let count = input
            .pairs
            .iter()
            .filter(|(first, second)| first.overlaps(*second))
            .count();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AssignmentPairs::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AssignmentPairs::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn overlap_is_symmetric_at_single_section_touch() {
        let left = SectionRange { start: 5, end: 7 };
        let right = SectionRange { start: 7, end: 9 };
        assert!(left.overlaps(right));
        assert!(right.overlaps(left));
        assert!(!left.contains(right));
    }

    #[test]
    fn malformed_lines_fail_to_parse() {
        assert!(AssignmentPairs::parse("2-4 6-8").is_err());
        assert!(AssignmentPairs::parse("24,6-8").is_err());
        assert!(AssignmentPairs::parse("4-2,6-8").is_err());
    }
}
