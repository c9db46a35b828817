use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 10: Cathode-Ray Tube",
    parsed = Program,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2022<10> {}

/*
Input is a program for a one-register CPU, one instruction per line. `noop` takes one cycle and
does nothing; `addx V` takes two cycles and then adds `V` to the X register. X starts at 1.
*/

/// One CPU instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    /// Takes one cycle, no effect.
    Noop,
    /// Takes two cycles, then adds the value to the X register.
    AddX(i32),
}

/// The parsed program, in input order.
#[derive(Debug)]
struct Program {
    instructions: Vec<Instruction>,
}

/// An error when parsing input into a [`Program`].
#[derive(thiserror::Error, Debug)]
enum ParseProgramError {
    #[error("instructions are \"noop\" or \"addx V\", got {0:?}")]
    UnknownInstruction(String),
}

impl ParseData for Program {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let instructions = parse_input_lines(input, |_, line| match line.split_once(' ') {
            None if line == "noop" => Ok(Instruction::Noop),
            Some(("addx", value_token)) => {
                Ok(Instruction::AddX(parse_with_context::<i32>(value_token)?))
            }
            _ => Err(ParseProgramError::UnknownInstruction(line.to_string()).into()),
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { instructions })
    }
}

impl Program {
    /// The value of the X register during each cycle, in cycle order.
    ///
    /// An `addx` holds its old value for both of its cycles; the addition lands after the second.
    fn register_by_cycle(&self) -> Vec<i32> {
        let mut values = Vec::new();
        let mut x: i32 = 1;
        for instruction in &self.instructions {
            match *instruction {
                Instruction::Noop => values.push(x),
                Instruction::AddX(value) => {
                    values.push(x);
                    values.push(x);
                    x += value;
                }
            }
        }
        values
    }
}

/*
For part 1, a cycle's signal strength is the cycle number times the X register's value during
that cycle. Answer with the sum of signal strengths during the 20th cycle and every 40 cycles
after that.
*/

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = Program;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .register_by_cycle()
            .iter()
            .enumerate()
            .map(|(cycle_index, &x)| (cycle_index + 1, x))
            .filter(|(cycle, _)| cycle % 40 == 20)
            .map(|(cycle, x)| {
                let cycle = i64::try_from(cycle).expect("cycle count should fit in i64");
                cycle
                    .checked_mul(i64::from(x))
                    .expect("signal strength should not overflow")
            })
            .checked_sum()
            .expect("summing signal strengths should not overflow");
        Ok(total)
    }
}

/*
For part 2, the X register positions a three-pixel-wide sprite on a 40 pixel wide, 6 pixel tall
CRT. Each cycle draws one pixel left to right, top to bottom: lit (`#`) if the sprite overlaps
the pixel's column, dark (`.`) otherwise. Answer with the rendered image.
*/

impl Solution<PartTwo> for Day10 {
    type Input = Program;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const SCREEN_WIDTH: usize = 40;

        let values = input.register_by_cycle();
        let rows: Vec<String> = values
            .chunks(SCREEN_WIDTH)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(column, &x)| {
                        let column = i32::try_from(column)
                            .expect("screen column should fit in i32");
                        if (column - x).abs() <= 1 { '#' } else { '.' }
                    })
                    .collect()
            })
            .collect();
        Ok(rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_EXAMPLE_INPUT: &str = r"noop
addx 3
addx -5
";

    const EXAMPLE_INPUT: &str = r"addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    #[test]
    fn register_holds_through_addx_cycles() -> DynamicResult<()> {
        let parsed = Program::parse(SMALL_EXAMPLE_INPUT)?;
        // noop, then addx 3 (two cycles), then addx -5 (two cycles)
        assert_eq!(parsed.register_by_cycle(), vec![1, 1, 1, 4, 4]);
        Ok(())
    }

    #[test]
    fn register_matches_sampled_cycles() -> DynamicResult<()> {
        let parsed = Program::parse(EXAMPLE_INPUT)?;
        let values = parsed.register_by_cycle();
        assert_eq!(values[19], 21);
        assert_eq!(values[59], 19);
        assert_eq!(values[99], 18);
        assert_eq!(values[139], 21);
        assert_eq!(values[179], 16);
        assert_eq!(values[219], 18);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Program::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 13_140);
        Ok(())
    }

    #[test]
    fn part_two_renders_example_image() -> DynamicResult<()> {
        let parsed = Program::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        let expected = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";
        assert_eq!(result, expected);
        Ok(())
    }

    #[test]
    fn unknown_instructions_fail_to_parse() {
        assert!(Program::parse("noop 3").is_err());
        assert!(Program::parse("addx").is_err());
        assert!(Program::parse("subx 2").is_err());
    }
}
