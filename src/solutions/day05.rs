use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 5: Supply Stacks",
    parsed = CargoPlan,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2022<5> {}

/*
Input is a drawing of crate stacks followed by a blank line and a list of rearrangement
instructions:

        [D]
    [N] [C]
    [Z] [M] [P]
     1   2   3

    move 1 from 2 to 1
    move 3 from 1 to 3

In the drawing, a stack's crates sit in a column 4 characters wide; the crate letter is at column
offset `1 + 4 * stack_index`. The last drawing line labels the stacks, and instructions refer to
stacks by those 1-based labels.
*/

/// A crate's marking letter.
type CrateLabel = char;

/// One rearrangement step: move `count` crates from one stack to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveInstruction {
    count: usize,
    /// Source stack, zero-based.
    from: usize,
    /// Destination stack, zero-based.
    to: usize,
}

/// The parsed starting stacks and rearrangement procedure.
#[derive(Debug)]
struct CargoPlan {
    /// Crate stacks, each ordered bottom to top.
    stacks: Vec<Vec<CrateLabel>>,
    instructions: Vec<MoveInstruction>,
}

/// An error when parsing input into a [`CargoPlan`].
#[derive(thiserror::Error, Debug)]
enum ParseCargoPlanError {
    #[error("expected a blank line between the stack drawing and the instructions")]
    MissingBlankLine,

    #[error("the stack drawing needs a label line below the crates")]
    MissingLabelLine,

    #[error("expected an instruction of the shape \"move N from A to B\", got {0:?}")]
    MalformedInstruction(String),

    #[error("instructions refer to stack 0, but stack labels start at 1")]
    ZeroStackLabel,
}

impl ParseData for CargoPlan {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let (drawing, procedure) = input
            .split_once("\n\n")
            .ok_or(ParseCargoPlanError::MissingBlankLine)?;

        let (label_line, crate_lines) = {
            let mut lines: Vec<&str> = drawing.lines().collect();
            let label_line = lines.pop().ok_or(ParseCargoPlanError::MissingLabelLine)?;
            (label_line, lines)
        };
        let stack_count = label_line.split_whitespace().count();

        // read each stack's column top-down, then flip to bottom-to-top storage
        let mut stacks: Vec<Vec<CrateLabel>> = vec![Vec::new(); stack_count];
        for line in crate_lines {
            let characters: Vec<char> = line.chars().collect();
            for (stack_index, stack) in stacks.iter_mut().enumerate() {
                let column = 1 + 4 * stack_index;
                if let Some(&label) = characters.get(column)
                    && label != ' '
                {
                    stack.push(label);
                }
            }
        }
        for stack in &mut stacks {
            stack.reverse();
        }

        let instruction_pattern = Regex::new(r"^move (\d+) from (\d+) to (\d+)$")
            .expect("pattern should be valid");
        let instructions = parse_input_lines(procedure.trim_end(), |_, line| {
            let captures = instruction_pattern
                .captures(line)
                .ok_or_else(|| ParseCargoPlanError::MalformedInstruction(line.to_string()))?;
            let count = parse_with_context::<usize>(&captures[1])?;
            let from = parse_with_context::<usize>(&captures[2])?;
            let to = parse_with_context::<usize>(&captures[3])?;
            if from == 0 || to == 0 {
                return Err(ParseCargoPlanError::ZeroStackLabel.into());
            }
            Ok(MoveInstruction {
                count,
                from: from - 1,
                to: to - 1,
            })
        })
        .collect::<Result<_, _>>()?;

        Ok(Self {
            stacks,
            instructions,
        })
    }
}

/// An error while rearranging crates.
#[derive(thiserror::Error, Debug)]
enum RearrangeError {
    /// An instruction refers to a stack label beyond the drawing.
    #[error("instruction refers to missing stack {0}")]
    UnknownStack(usize),

    /// An instruction moves more crates than its source stack holds.
    #[error("cannot move {count} crates from a stack of {held}")]
    NotEnoughCrates { count: usize, held: usize },
}

/// How the crane moves a batch of crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CraneModel {
    /// Moves crates one at a time, reversing the batch's order.
    OneAtATime,
    /// Lifts the whole batch at once, keeping its order.
    AllAtOnce,
}

/// Apply every instruction to the starting stacks and read off the top crate of each stack.
///
/// Stacks left empty contribute nothing to the result.
fn rearranged_stack_tops(plan: &CargoPlan, crane: CraneModel) -> Result<String, RearrangeError> {
    let mut stacks = plan.stacks.clone();

    for instruction in &plan.instructions {
        for index in [instruction.from, instruction.to] {
            if index >= stacks.len() {
                return Err(RearrangeError::UnknownStack(index + 1));
            }
        }

        let source = &mut stacks[instruction.from];
        if instruction.count > source.len() {
            return Err(RearrangeError::NotEnoughCrates {
                count: instruction.count,
                held: source.len(),
            });
        }
        let mut batch = source.split_off(source.len() - instruction.count);
        if crane == CraneModel::OneAtATime {
            batch.reverse();
        }
        stacks[instruction.to].extend(batch);
    }

    Ok(stacks
        .iter()
        .filter_map(|stack| stack.last())
        .collect::<String>())
}

/*
For part 1, the crane moves crates one at a time, so a moved batch ends up in reverse order.
Answer with the string of crates on top of each stack after the whole procedure.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = CargoPlan;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(rearranged_stack_tops(input, CraneModel::OneAtATime)?)
    }
}

/*
For part 2, the crane is a CrateMover 9001 that lifts the whole batch at once, preserving its
order. The answer is read off the same way.
*/

impl Solution<PartTwo> for Day05 {
    type Input = CargoPlan;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(rearranged_stack_tops(input, CraneModel::AllAtOnce)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\nmove 1 from 2 to 1\nmove 3 from 1 to 3\nmove 2 from 2 to 1\nmove 1 from 1 to 2\n";

    #[test]
    fn parses_stacks_bottom_to_top() -> DynamicResult<()> {
        let parsed = CargoPlan::parse(EXAMPLE_INPUT)?;
        assert_eq!(
            parsed.stacks,
            vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]
        );
        assert_eq!(
            parsed.instructions[0],
            MoveInstruction {
                count: 1,
                from: 1,
                to: 0
            }
        );
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = CargoPlan::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "CMZ");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = CargoPlan::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "MCD");
        Ok(())
    }

    #[test]
    fn moving_more_crates_than_held_fails() -> DynamicResult<()> {
        let input = "[A] [B]\n 1   2 \n\nmove 3 from 1 to 2\n";
        let parsed = CargoPlan::parse(input)?;
        assert!(<Day05 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn malformed_instruction_fails_to_parse() {
        let input = "[A]\n 1 \n\nmove one from 1 to 1\n";
        assert!(CargoPlan::parse(input).is_err());
    }
}
