use std::collections::HashSet;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 9: Rope Bridge",
    parsed = Motions,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2022<9> {}

/*
Input is a series of head motions, one per line, like `R 4`: a direction (`R`, `U`, `L`, or `D`)
and how many single steps to take in it.
*/

/// One head motion: a unit direction repeated for a number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Motion {
    direction: Vector2<i32>,
    steps: u32,
}

/// The parsed head motions, in input order.
#[derive(Debug)]
struct Motions {
    motions: Vec<Motion>,
}

/// An error when parsing input into [`Motions`].
#[derive(thiserror::Error, Debug)]
enum ParseMotionsError {
    #[error("expected a line of the shape \"R 4\", got {0:?}")]
    MalformedMotion(String),

    #[error("directions are R, U, L, or D, got {0:?}")]
    UnknownDirection(String),
}

impl ParseData for Motions {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let motions = parse_input_lines(input, |_, line| {
            let (direction_token, steps_token) = line
                .split_once(' ')
                .ok_or_else(|| ParseMotionsError::MalformedMotion(line.to_string()))?;
            let direction = match direction_token {
                "R" => Vector2::new(1, 0),
                "U" => Vector2::new(0, 1),
                "L" => Vector2::new(-1, 0),
                "D" => Vector2::new(0, -1),
                other => {
                    return Err(ParseMotionsError::UnknownDirection(other.to_string()).into());
                }
            };
            let steps = parse_with_context::<u32>(steps_token)?;
            Ok(Motion { direction, steps })
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { motions })
    }
}

/*
The rope is a chain of knots starting stacked at the origin. Each head step moves the first knot
one unit; every following knot then catches up to the knot ahead of it: if it's no longer
touching (adjacent or overlapping, diagonals included), it moves one step toward it along each
axis that differs.
*/

/// One knot's catch-up step toward the knot ahead of it, or no movement while still touching.
fn follow_step(leader: Point2<i32>, follower: Point2<i32>) -> Vector2<i32> {
    let offset = leader - follower;
    if offset.x.abs() <= 1 && offset.y.abs() <= 1 {
        return Vector2::zeros();
    }
    offset.map(i32::signum)
}

/// Simulate a rope of `knot_count` knots through every motion and count the positions the last
/// knot visits at least once.
fn count_tail_positions(motions: &Motions, knot_count: usize) -> usize {
    let mut knots: Vec<Point2<i32>> = vec![Point2::origin(); knot_count];
    let mut visited: HashSet<Point2<i32>> = HashSet::new();
    if let Some(tail) = knots.last() {
        visited.insert(*tail);
    }

    for motion in &motions.motions {
        for _ in 0..motion.steps {
            if let Some(head) = knots.first_mut() {
                *head += motion.direction;
            }
            for index in 1..knots.len() {
                let step = follow_step(knots[index - 1], knots[index]);
                if step == Vector2::zeros() {
                    // the rest of the rope can't move if this knot didn't
                    break;
                }
                knots[index] += step;
            }
            if let Some(tail) = knots.last() {
                visited.insert(*tail);
            }
        }
    }

    visited.len()
}

/*
For part 1, the rope has two knots: a head and a tail. Answer with how many positions the tail
visits at least once.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = Motions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_tail_positions(input, 2))
    }
}

/*
For part 2, the rope has ten knots; each knot follows the one ahead of it by the same rule.
Answer with how many positions the last knot visits.
*/

impl Solution<PartTwo> for Day09 {
    type Input = Motions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_tail_positions(input, 10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2
";

    const LARGER_EXAMPLE_INPUT: &str = r"R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20
";

    #[test]
    fn touching_knots_do_not_move() {
        let leader = Point2::new(2, 2);
        for (x, y) in [(2, 2), (1, 2), (3, 3), (2, 1)] {
            assert_eq!(follow_step(leader, Point2::new(x, y)), Vector2::zeros());
        }
    }

    #[test]
    fn separated_knots_step_along_each_differing_axis() {
        // straight behind: straight step
        assert_eq!(
            follow_step(Point2::new(3, 1), Point2::new(1, 1)),
            Vector2::new(1, 0)
        );
        // offset row and column: diagonal step
        assert_eq!(
            follow_step(Point2::new(2, 3), Point2::new(1, 1)),
            Vector2::new(1, 1)
        );
        assert_eq!(
            follow_step(Point2::new(-1, -2), Point2::new(1, 0)),
            Vector2::new(-1, -1)
        );
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Motions::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Motions::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }

    #[test]
    fn part_two_solves_larger_example() -> DynamicResult<()> {
        let parsed = Motions::parse(LARGER_EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 36);
        Ok(())
    }

    #[test]
    fn malformed_motions_fail_to_parse() {
        assert!(Motions::parse("R4").is_err());
        assert!(Motions::parse("north 4").is_err());
        assert!(Motions::parse("R four").is_err());
    }
}
