use aoc_framework::parsing::{parse_input_blocks, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 1: Calorie Counting",
    parsed = CalorieInventory,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2022<1> {}

/*
Input is a list of calorie counts, one number per line, where each elf's inventory is a group of
lines separated from the next elf's by a blank line.
*/

/// The integer type for calorie totals.
///
/// Individual item counts observed in input reach 5 digits across dozens of items per elf, so a
/// 32-bit total is plenty.
type Calories = u32;

/// Total calories carried per elf, in input order.
#[derive(Debug)]
struct CalorieInventory {
    totals: Vec<Calories>,
}

/// An error when parsing input into a [`CalorieInventory`].
#[derive(thiserror::Error, Debug)]
enum ParseCalorieInventoryError {
    #[error("an elf's calorie total overflowed")]
    TotalOverflow,
}

impl ParseData for CalorieInventory {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let totals: Vec<Calories> = parse_input_blocks(input, |_, block| {
            let counts = block
                .lines()
                .map(str::trim)
                .map(parse_with_context::<Calories>)
                .collect::<Result<Vec<_>, _>>()?;
            let total = counts
                .into_iter()
                .checked_sum()
                .ok_or(ParseCalorieInventoryError::TotalOverflow)?;
            Ok(total)
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { totals })
    }
}

/*
For part 1, find the elf carrying the most calories and answer with that total.

> An empty inventory answers 0.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = CalorieInventory;
    type Output = Calories;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.totals.iter().copied().max().unwrap_or(0))
    }
}

/*
For part 2, the elves want backup snack carriers: answer with the sum of the top three elves'
totals.

> With fewer than three elves, sum whatever is there.
*/

impl Solution<PartTwo> for Day01 {
    type Input = CalorieInventory;
    type Output = Calories;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut totals = input.totals.clone();
        totals.sort_unstable_by(|a, b| b.cmp(a));

        let sum = totals
            .into_iter()
            .take(3)
            .checked_sum()
            .expect("sum of three totals should not overflow");
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = CalorieInventory::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 24_000);
        Ok(())
    }

    #[test]
    fn part_one_handles_degenerate_inventories() -> DynamicResult<()> {
        let empty = CalorieInventory::parse("")?;
        assert_eq!(<Day01 as Solution<PartOne>>::solve(&empty)?, 0);

        let single = CalorieInventory::parse("10")?;
        assert_eq!(<Day01 as Solution<PartOne>>::solve(&single)?, 10);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = CalorieInventory::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 45_000);
        Ok(())
    }

    #[test]
    fn part_two_sums_fewer_than_three_elves() -> DynamicResult<()> {
        let parsed = CalorieInventory::parse("10\n20\n\n10\n\n15")?;
        assert_eq!(<Day01 as Solution<PartTwo>>::solve(&parsed)?, 55);

        let single = CalorieInventory::parse("10")?;
        assert_eq!(<Day01 as Solution<PartTwo>>::solve(&single)?, 10);
        Ok(())
    }
}
