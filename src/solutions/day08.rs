use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 8: Treetop Tree House",
    parsed = TreeGrid,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2022<8> {}

/*
Input is a rectangular grid of single digits, one row per line, giving the height of each tree.
*/

/// The integer type for tree heights (digits 0 to 9).
type TreeHeight = u8;

/// The parsed grid of tree heights.
#[derive(Debug)]
struct TreeGrid {
    heights: DMatrix<TreeHeight>,
}

/// An error when parsing input into a [`TreeGrid`].
#[derive(thiserror::Error, Debug)]
enum ParseTreeGridError {
    #[error("tree heights must be digits, got {0:?}")]
    InvalidHeight(char),

    #[error("grid rows must all have the same width")]
    UnevenRows,

    #[error("the grid has no trees")]
    EmptyGrid,
}

impl ParseData for TreeGrid {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<TreeHeight>> = parse_input_lines(input, |_, line| {
            let row = line
                .chars()
                .map(|character| {
                    character
                        .to_digit(10)
                        .and_then(|digit| TreeHeight::try_from(digit).ok())
                        .ok_or(ParseTreeGridError::InvalidHeight(character))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(row)
        })
        .collect::<Result<_, _>>()?;

        let row_count = rows.len();
        let column_count = rows.first().ok_or(ParseTreeGridError::EmptyGrid)?.len();
        if column_count == 0 {
            return Err(ParseTreeGridError::EmptyGrid.into());
        }
        if rows.iter().any(|row| row.len() != column_count) {
            return Err(ParseTreeGridError::UnevenRows.into());
        }

        let heights = DMatrix::from_row_iterator(
            row_count,
            column_count,
            rows.into_iter().flatten(),
        );
        Ok(Self { heights })
    }
}

/*
For part 1, a tree is visible from outside the grid if every tree between it and at least one
edge (looking straight up, down, left, or right) is strictly shorter. Count the visible trees;
every edge tree is visible.
*/

/// Whether the tree at the given position can be seen from at least one edge of the grid.
fn is_visible(heights: &DMatrix<TreeHeight>, row: usize, column: usize) -> bool {
    let height = heights[(row, column)];
    let shorter = |r: usize, c: usize| heights[(r, c)] < height;

    (0..column).all(|c| shorter(row, c))
        || (column + 1..heights.ncols()).all(|c| shorter(row, c))
        || (0..row).all(|r| shorter(r, column))
        || (row + 1..heights.nrows()).all(|r| shorter(r, column))
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = TreeGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let heights = &input.heights;
        let count = (0..heights.nrows())
            .flat_map(|row| (0..heights.ncols()).map(move |column| (row, column)))
            .filter(|&(row, column)| is_visible(heights, row, column))
            .count();
        Ok(count)
    }
}

/*
For part 2, a tree's viewing distance in a direction is how many trees it can see before its view
is blocked: count trees outward until reaching one that is as tall or taller (that blocking tree
is counted) or the edge. Its scenic score is the product of the four viewing distances. Answer
with the highest scenic score in the grid.
*/

/// Count the trees a viewer of the given height sees along a line of trees ordered nearest
/// first.
fn viewing_distance(
    viewer_height: TreeHeight,
    line: impl Iterator<Item = TreeHeight>,
) -> usize {
    let mut distance = 0;
    for tree in line {
        distance += 1;
        if tree >= viewer_height {
            break;
        }
    }
    distance
}

/// The product of the four viewing distances from the tree at the given position.
fn scenic_score(heights: &DMatrix<TreeHeight>, row: usize, column: usize) -> usize {
    let height = heights[(row, column)];

    let distances = [
        viewing_distance(height, (0..column).rev().map(|c| heights[(row, c)])),
        viewing_distance(height, (column + 1..heights.ncols()).map(|c| heights[(row, c)])),
        viewing_distance(height, (0..row).rev().map(|r| heights[(r, column)])),
        viewing_distance(height, (row + 1..heights.nrows()).map(|r| heights[(r, column)])),
    ];

    distances
        .into_iter()
        .checked_product()
        .expect("scenic score should not overflow")
}

impl Solution<PartTwo> for Day08 {
    type Input = TreeGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let heights = &input.heights;
        let best = (0..heights.nrows())
            .flat_map(|row| (0..heights.ncols()).map(move |column| (row, column)))
            .map(|(row, column)| scenic_score(heights, row, column))
            .max()
            .unwrap_or(0);
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"30373
25512
65332
33549
35390
";

    #[test]
    fn parses_grid_dimensions_and_heights() -> DynamicResult<()> {
        let parsed = TreeGrid::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.heights.nrows(), 5);
        assert_eq!(parsed.heights.ncols(), 5);
        assert_eq!(parsed.heights[(0, 0)], 3);
        assert_eq!(parsed.heights[(4, 4)], 0);
        assert_eq!(parsed.heights[(1, 2)], 5);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = TreeGrid::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 21);
        Ok(())
    }

    #[test]
    fn interior_visibility_matches_puzzle_walkthrough() -> DynamicResult<()> {
        let parsed = TreeGrid::parse(EXAMPLE_INPUT)?;
        // the top-left 5 is visible, the center 3 is not
        assert!(is_visible(&parsed.heights, 1, 1));
        assert!(!is_visible(&parsed.heights, 2, 2));
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = TreeGrid::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    #[test]
    fn scenic_scores_match_puzzle_walkthrough() -> DynamicResult<()> {
        let parsed = TreeGrid::parse(EXAMPLE_INPUT)?;
        assert_eq!(scenic_score(&parsed.heights, 1, 2), 4);
        assert_eq!(scenic_score(&parsed.heights, 3, 2), 8);
        // edge trees see nothing in at least one direction
        assert_eq!(scenic_score(&parsed.heights, 0, 0), 0);
        Ok(())
    }

    #[test]
    fn malformed_grids_fail_to_parse() {
        assert!(TreeGrid::parse("123\n45\n").is_err());
        assert!(TreeGrid::parse("12a\n456\n").is_err());
        assert!(TreeGrid::parse("").is_err());
    }
}
