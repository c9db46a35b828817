use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 2: Rock Paper Scissors",
    parsed = StrategyGuide,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2022<2> {}

/*
Input is a strategy guide for a rock paper scissors tournament. Each line holds the opponent's
move (`A` rock, `B` paper, `C` scissors), a space, and a response key (`X`, `Y`, or `Z`).

What the response key means differs between parts, so parsing keeps it symbolic.
*/

/// A rock paper scissors shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    /// The score for selecting this shape.
    fn score(self) -> u32 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// The shape this shape defeats.
    fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The shape this shape is defeated by.
    fn loses_to(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
}

/// The second column of the guide, before a part assigns it a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseKey {
    X,
    Y,
    Z,
}

/// The outcome of a round from the responder's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundOutcome {
    Loss,
    Draw,
    Win,
}

impl RoundOutcome {
    /// The score for a round ending in this outcome.
    fn score(self) -> u32 {
        match self {
            Self::Loss => 0,
            Self::Draw => 3,
            Self::Win => 6,
        }
    }

    /// The outcome of responding to the opponent's shape with the given shape.
    fn of_round(opponent: Shape, response: Shape) -> Self {
        if response == opponent {
            Self::Draw
        } else if response.beats() == opponent {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

/// The parsed strategy guide: one (opponent shape, response key) pair per round.
#[derive(Debug)]
struct StrategyGuide {
    rounds: Vec<(Shape, ResponseKey)>,
}

/// An error when parsing input into a [`StrategyGuide`].
#[derive(thiserror::Error, Debug)]
enum ParseStrategyGuideError {
    #[error("expected a line of the shape \"<move> <key>\", got {0:?}")]
    MalformedRound(String),

    #[error("unknown opponent move: {0:?}")]
    UnknownOpponentMove(String),

    #[error("unknown response key: {0:?}")]
    UnknownResponseKey(String),
}

impl ParseData for StrategyGuide {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rounds = parse_input_lines(input, |_, line| {
            let (opponent_token, response_token) = line
                .split_once(' ')
                .ok_or_else(|| ParseStrategyGuideError::MalformedRound(line.to_string()))?;

            let opponent = match opponent_token {
                "A" => Shape::Rock,
                "B" => Shape::Paper,
                "C" => Shape::Scissors,
                other => {
                    return Err(
                        ParseStrategyGuideError::UnknownOpponentMove(other.to_string()).into(),
                    );
                }
            };
            let response = match response_token {
                "X" => ResponseKey::X,
                "Y" => ResponseKey::Y,
                "Z" => ResponseKey::Z,
                other => {
                    return Err(
                        ParseStrategyGuideError::UnknownResponseKey(other.to_string()).into(),
                    );
                }
            };

            Ok((opponent, response))
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { rounds })
    }
}

/// Total the round scores: the score of the chosen shape plus the score of the outcome.
fn score_rounds(rounds: impl Iterator<Item = (Shape, Shape)>) -> u32 {
    rounds
        .map(|(opponent, response)| {
            response.score() + RoundOutcome::of_round(opponent, response).score()
        })
        .checked_sum()
        .expect("summing round scores should not overflow")
}

/*
For part 1, the response key names the shape to play: `X` rock, `Y` paper, `Z` scissors. Answer
with the total score across all rounds.
*/

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = StrategyGuide;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let rounds = input.rounds.iter().map(|&(opponent, key)| {
            let response = match key {
                ResponseKey::X => Shape::Rock,
                ResponseKey::Y => Shape::Paper,
                ResponseKey::Z => Shape::Scissors,
            };
            (opponent, response)
        });
        Ok(score_rounds(rounds))
    }
}

/*
For part 2, the response key names the round's required outcome instead: `X` lose, `Y` draw, `Z`
win. Pick the shape that produces that outcome and answer with the same total score.
*/

impl Solution<PartTwo> for Day02 {
    type Input = StrategyGuide;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let rounds = input.rounds.iter().map(|&(opponent, key)| {
            let response = match key {
                ResponseKey::X => opponent.beats(),
                ResponseKey::Y => opponent,
                ResponseKey::Z => opponent.loses_to(),
            };
            (opponent, response)
        });
        Ok(score_rounds(rounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"A Y
B X
C Z
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = StrategyGuide::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 15);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = StrategyGuide::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 12);
        Ok(())
    }

    #[test]
    fn unknown_tokens_fail_to_parse() {
        assert!(StrategyGuide::parse("D Y").is_err());
        assert!(StrategyGuide::parse("A W").is_err());
        assert!(StrategyGuide::parse("AY").is_err());
    }
}
