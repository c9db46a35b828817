use std::collections::HashSet;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};

#[solution_runner(name = "Day 6: Tuning Trouble", part_one = Day06, part_two = Day06)]
impl super::AdventOfCode2022<6> {}

/*
Input is a single line datastream of characters. A marker is a run of consecutive characters that
are all different; the answer is how many characters have been received when the first marker
completes.
*/

/// An error while scanning the datastream.
#[derive(thiserror::Error, Debug)]
enum MarkerError {
    #[error("no run of {marker_len} distinct characters in the datastream")]
    MarkerNotFound { marker_len: usize },
}

/// Count the characters received when the first run of `marker_len` distinct characters
/// completes.
fn characters_until_marker(signal: &str, marker_len: usize) -> Result<usize, MarkerError> {
    let bytes = signal.trim_end().as_bytes();
    bytes
        .windows(marker_len)
        .position(|window| {
            let distinct: HashSet<u8> = window.iter().copied().collect();
            distinct.len() == marker_len
        })
        .map(|window_start| window_start + marker_len)
        .ok_or(MarkerError::MarkerNotFound { marker_len })
}

/*
For part 1, the start-of-packet marker is 4 distinct characters.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(characters_until_marker(input, 4)?)
    }
}

/*
For part 2, the start-of-message marker is longer: 14 distinct characters.
*/

impl Solution<PartTwo> for Day06 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(characters_until_marker(input, 14)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        let cases = [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11),
        ];
        for (signal, expected) in cases {
            assert_eq!(
                <Day06 as Solution<PartOne>>::solve(signal)?,
                expected,
                "failed signal {signal:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        let cases = [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 19),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 23),
            ("nppdvjthqldpwncqszvftbrmjlhg", 23),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 29),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 26),
        ];
        for (signal, expected) in cases {
            assert_eq!(
                <Day06 as Solution<PartTwo>>::solve(signal)?,
                expected,
                "failed signal {signal:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn datastream_without_marker_fails() {
        assert!(<Day06 as Solution<PartOne>>::solve("aababab").is_err());
        assert!(<Day06 as Solution<PartOne>>::solve("abc").is_err());
    }
}
