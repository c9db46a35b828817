use std::collections::HashSet;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 3: Rucksack Reorganization",
    parsed = Rucksacks,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2022<3> {}

/*
Input is one rucksack per line, each a string of item characters. Item types are letters, with
priorities: `a`-`z` map to 1-26 and `A`-`Z` map to 27-52.

Items are stored as their priority so both parts work on small integers.
*/

/// An item type, represented by its priority (1 to 52).
type ItemPriority = u8;

/// Rucksacks as sequences of item priorities, in input order.
#[derive(Debug)]
struct Rucksacks {
    sacks: Vec<Vec<ItemPriority>>,
}

/// An error when parsing input into [`Rucksacks`].
#[derive(thiserror::Error, Debug)]
enum ParseRucksacksError {
    #[error("item characters must be ascii letters, got {0:?}")]
    InvalidItem(char),
}

/// Convert an item character to its priority.
fn item_priority(item: char) -> Result<ItemPriority, ParseRucksacksError> {
    match item {
        'a'..='z' => Ok(item as ItemPriority - b'a' + 1),
        'A'..='Z' => Ok(item as ItemPriority - b'A' + 27),
        other => Err(ParseRucksacksError::InvalidItem(other)),
    }
}

impl ParseData for Rucksacks {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let sacks = parse_input_lines(input, |_, line| {
            let items = line
                .chars()
                .map(item_priority)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(items)
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { sacks })
    }
}

/// An error while searching rucksacks for shared items.
#[derive(thiserror::Error, Debug)]
enum SharedItemError {
    /// A rucksack's two compartments hold equal item counts, so an odd length is malformed.
    #[error("rucksack holds an odd number of items: {0}")]
    OddItemCount(usize),

    /// A rucksack's compartments share no item type.
    #[error("no item type appears in both compartments")]
    NoCompartmentOverlap,

    /// The final group has fewer than three rucksacks.
    #[error("rucksack count is not a multiple of three")]
    IncompleteGroup,

    /// A group of three rucksacks shares no item type to be its badge.
    #[error("no item type is common to all rucksacks of a group")]
    NoGroupBadge,
}

/// Sum a sequence of item priorities.
fn sum_priorities(priorities: impl Iterator<Item = ItemPriority>) -> u32 {
    priorities
        .map(u32::from)
        .checked_sum()
        .expect("summing priorities should not overflow")
}

/*
For part 1, each rucksack's items split evenly into two compartments: the first half and second
half of its line. Exactly one item type appears in both compartments of a rucksack; answer with
the sum of those items' priorities.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Rucksacks;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let shared: Vec<ItemPriority> = input
            .sacks
            .iter()
            .map(|sack| {
                if sack.len() % 2 != 0 {
                    return Err(SharedItemError::OddItemCount(sack.len()));
                }
                let (first, second) = sack.split_at(sack.len() / 2);
                let second_items: HashSet<ItemPriority> = second.iter().copied().collect();
                first
                    .iter()
                    .copied()
                    .find(|item| second_items.contains(item))
                    .ok_or(SharedItemError::NoCompartmentOverlap)
            })
            .collect::<Result<_, _>>()?;

        Ok(sum_priorities(shared.into_iter()))
    }
}

/*
For part 2, consecutive groups of three rucksacks each carry one badge item: the single item type
common to all three. Answer with the sum of badge priorities.
*/

impl Solution<PartTwo> for Day03 {
    type Input = Rucksacks;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let badges: Vec<ItemPriority> = input
            .sacks
            .chunks(3)
            .map(|group| {
                let [first, second, third] = group else {
                    return Err(SharedItemError::IncompleteGroup);
                };
                let second_items: HashSet<ItemPriority> = second.iter().copied().collect();
                let third_items: HashSet<ItemPriority> = third.iter().copied().collect();
                first
                    .iter()
                    .copied()
                    .find(|item| second_items.contains(item) && third_items.contains(item))
                    .ok_or(SharedItemError::NoGroupBadge)
            })
            .collect::<Result<_, _>>()?;

        Ok(sum_priorities(badges.into_iter()))
    }
}
