use std::collections::VecDeque;

use aoc_framework::parsing::{parse_input_blocks, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 11: Monkey in the Middle",
    parsed = Troop,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2022<11> {}

/*
Input is a series of monkey records separated by blank lines:

    Monkey 0:
      Starting items: 79, 98
      Operation: new = old * 19
      Test: divisible by 23
        If true: throw to monkey 2
        If false: throw to monkey 3

Each record gives the monkey's id, its starting queue of item worry levels, the operation applied
when it inspects an item, a divisibility test, and the two monkeys it throws to depending on the
test result.

The operation is a small arithmetic rule over the item's current worry level ("old") using only
add or multiply with either an integer literal or "old" itself. It's parsed into a closed
operator + operand representation and interpreted, never evaluated as code.
*/

/// The integer type for item worry levels.
///
/// Worry levels stay below the troop's modulus while bounding is active, and the modulus is a
/// product of small divisors, so squaring a bounded level fits comfortably in 64 bits.
type WorryLevel = u64;

/// The integer type for monkey ids.
type MonkeyId = u8;

/// An operand of an inspection [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    /// The item's worry level before the operation.
    OldValue,
    /// A literal number.
    Literal(WorryLevel),
}

/// An operator of an inspection [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
}

/// The transform a monkey applies to an item's worry level when inspecting it.
///
/// Always of the shape `new = old <operator> <operand>`.
#[derive(Debug, Clone, Copy)]
struct Operation {
    operator: Operator,
    operand: Operand,
}

impl Operation {
    /// Apply the operation to a worry level.
    fn apply(self, old: WorryLevel) -> Result<WorryLevel, SimulationError> {
        let operand = match self.operand {
            Operand::OldValue => old,
            Operand::Literal(number) => number,
        };
        let result = match self.operator {
            Operator::Add => old.checked_add(operand),
            Operator::Multiply => old.checked_mul(operand),
        };
        result.ok_or(SimulationError::WorryOverflow)
    }
}

/// A monkey holding a queue of items and the rules for inspecting and throwing them.
#[derive(Debug, Clone)]
struct Monkey {
    /// The monkey's id, used as the routing key for throws.
    id: MonkeyId,

    /// Worry levels of held items, thrown in FIFO order.
    items: VecDeque<WorryLevel>,

    /// The transform applied to an item's worry level on inspection.
    operation: Operation,

    /// The divisor of the routing test `worry % route_divisor == 0`.
    route_divisor: WorryLevel,

    /// Id of the monkey thrown to when the routing test passes.
    true_target: MonkeyId,
    /// Id of the monkey thrown to when the routing test fails.
    false_target: MonkeyId,

    /// Count of items this monkey has inspected over the whole simulation.
    inspections: u64,
}

/// The full population of monkeys plus the shared worry modulus.
#[derive(Debug, Clone)]
struct Troop {
    /// Monkeys in declaration order, which is also turn order within a round.
    monkeys: Vec<Monkey>,

    /// The product of every monkey's route divisor, computed once from the parsed divisors.
    ///
    /// Reducing a worry level modulo this keeps levels bounded without changing any routing
    /// decision, because `(w % modulus) % d == w % d` whenever `d` divides the modulus.
    modulus: WorryLevel,
}

/// An error when parsing input into a [`Troop`].
#[derive(thiserror::Error, Debug)]
enum ParseTroopError {
    /// A monkey record is missing a required line or the line doesn't start as expected.
    #[error("monkey record missing line starting with {expected:?}")]
    MissingRecordLine { expected: &'static str },

    /// The record's id line isn't of the shape `Monkey <id>:`.
    #[error("malformed monkey id line")]
    MalformedIdLine,

    /// The operation expression isn't `old + <n>`, `old * <n>`, `old + old`, or `old * old`.
    #[error("unsupported operation expression: {0:?}")]
    UnsupportedOperation(String),

    /// A route divisor of zero can't be tested against.
    #[error("route divisor must be greater than zero")]
    ZeroRouteDivisor,

    /// The product of route divisors overflowed the worry level type.
    #[error("product of route divisors overflowed")]
    ModulusOverflow,
}

/// Take the next line of a monkey record, requiring it to start with the given prefix.
/// Returns the rest of the line after the prefix.
fn expect_record_line<'input>(
    lines: &mut impl Iterator<Item = &'input str>,
    prefix: &'static str,
) -> Result<&'input str, ParseTroopError> {
    lines
        .next()
        .map(str::trim_start)
        .and_then(|line| line.strip_prefix(prefix))
        .ok_or(ParseTroopError::MissingRecordLine { expected: prefix })
}

/// Parse one blank-line-separated record into a [`Monkey`].
fn parse_monkey(block: &str) -> DynamicResult<Monkey> {
    let mut lines = block.lines();

    let id_rest = expect_record_line(&mut lines, "Monkey ")?;
    let id = parse_with_context::<MonkeyId>(
        id_rest
            .strip_suffix(':')
            .ok_or(ParseTroopError::MalformedIdLine)?,
    )?;

    let items_rest = expect_record_line(&mut lines, "Starting items: ")?;
    let items = items_rest
        .split(", ")
        .map(parse_with_context::<WorryLevel>)
        .collect::<Result<VecDeque<_>, _>>()?;

    let operation_rest = expect_record_line(&mut lines, "Operation: new = old ")?;
    let operation = {
        let (operator_token, operand_token) = operation_rest
            .split_once(' ')
            .ok_or_else(|| ParseTroopError::UnsupportedOperation(operation_rest.to_string()))?;
        let operator = match operator_token {
            "+" => Operator::Add,
            "*" => Operator::Multiply,
            _ => {
                return Err(ParseTroopError::UnsupportedOperation(operation_rest.to_string()).into());
            }
        };
        let operand = if operand_token == "old" {
            Operand::OldValue
        } else {
            Operand::Literal(parse_with_context(operand_token)?)
        };
        Operation { operator, operand }
    };

    let route_divisor = parse_with_context::<WorryLevel>(expect_record_line(
        &mut lines,
        "Test: divisible by ",
    )?)?;
    if route_divisor == 0 {
        return Err(ParseTroopError::ZeroRouteDivisor.into());
    }

    let true_target =
        parse_with_context::<MonkeyId>(expect_record_line(&mut lines, "If true: throw to monkey ")?)?;
    let false_target = parse_with_context::<MonkeyId>(expect_record_line(
        &mut lines,
        "If false: throw to monkey ",
    )?)?;

    Ok(Monkey {
        id,
        items,
        operation,
        route_divisor,
        true_target,
        false_target,
        inspections: 0,
    })
}

impl ParseData for Troop {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let monkeys: Vec<Monkey> =
            parse_input_blocks(input, |_, block| parse_monkey(block)).collect::<Result<_, _>>()?;

        // computed from the parsed divisors before any round runs, then never mutated
        let modulus = monkeys
            .iter()
            .map(|monkey| monkey.route_divisor)
            .checked_product()
            .ok_or(ParseTroopError::ModulusOverflow)?;

        Ok(Self { monkeys, modulus })
    }
}

/*
For part 1, every inspection divides the worry level by 3 (rounding down) before the routing
test, modeling relief that the item survived. Run 20 rounds; in a round each monkey takes one
turn in declaration order, throwing every item it holds. The answer is the "monkey business":
the product of the two largest inspection counts.

For part 2, the relief division is gone and worry levels would grow without bound, so they are
reduced modulo the product of all route divisors instead, which preserves every divisibility
test. Run 10,000 rounds and compute the same monkey business product.
*/

/// An error while running the throwing simulation.
#[derive(thiserror::Error, Debug)]
enum SimulationError {
    /// An item was routed to an id with no matching monkey. This is a configuration error in the
    /// input, so the whole run aborts.
    #[error("no monkey with id {0} to throw to")]
    UnknownTarget(MonkeyId),

    /// A worry level overflowed while applying an inspection operation.
    #[error("worry level overflowed while inspecting an item")]
    WorryOverflow,

    /// Monkey business needs at least two inspection counts to multiply.
    #[error("monkey business is undefined for fewer than two monkeys")]
    TooFewMonkeys,
}

impl Troop {
    /// Run the turn of the monkey at `index`: it inspects and throws every item in its queue in
    /// FIFO order, until the queue is observed empty.
    ///
    /// Items a monkey throws to itself are appended to its own queue and so are still consumed
    /// before the turn ends. Items thrown to monkeys later in the round are processed by them in
    /// the same round.
    fn take_turn(&mut self, index: usize, dampen_divisor: WorryLevel) -> Result<(), SimulationError> {
        while let Some(item) = self.monkeys[index].items.pop_front() {
            let monkey = &self.monkeys[index];

            let inspected = monkey.operation.apply(item)?;
            let dampened = inspected / dampen_divisor;
            // a modulus of 1 would collapse every level to 0, so only bound above that
            let bounded = if self.modulus > 1 {
                dampened % self.modulus
            } else {
                dampened
            };

            let target_id = if bounded % monkey.route_divisor == 0 {
                monkey.true_target
            } else {
                monkey.false_target
            };
            let target_index = self
                .monkeys
                .iter()
                .position(|candidate| candidate.id == target_id)
                .ok_or(SimulationError::UnknownTarget(target_id))?;

            self.monkeys[index].inspections = self.monkeys[index]
                .inspections
                .checked_add(1)
                .expect("inspection count should not overflow");
            self.monkeys[target_index].items.push_back(bounded);
        }
        Ok(())
    }

    /// Run the given number of rounds. Each round gives every monkey exactly one turn, strictly
    /// sequential in declaration order, since a turn mutates other monkeys' queues.
    fn run_rounds(&mut self, rounds: u32, dampen_divisor: WorryLevel) -> Result<(), SimulationError> {
        for _ in 0..rounds {
            for index in 0..self.monkeys.len() {
                self.take_turn(index, dampen_divisor)?;
            }
        }
        Ok(())
    }

    /// The level of monkey business: the product of the two largest inspection counts.
    fn monkey_business(&self) -> Result<u64, SimulationError> {
        if self.monkeys.len() < 2 {
            return Err(SimulationError::TooFewMonkeys);
        }

        let mut counts: Vec<u64> = self.monkeys.iter().map(|monkey| monkey.inspections).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        Ok(counts[0]
            .checked_mul(counts[1])
            .expect("product of top inspection counts should not overflow"))
    }
}

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Troop;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut troop = input.clone();
        troop.run_rounds(20, 3)?;
        Ok(troop.monkey_business()?)
    }
}

impl Solution<PartTwo> for Day11 {
    type Input = Troop;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut troop = input.clone();
        troop.run_rounds(10_000, 1)?;
        Ok(troop.monkey_business()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 10_605);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2_713_310_158);
        Ok(())
    }

    #[test]
    fn modulus_is_product_of_route_divisors() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.modulus, 23 * 19 * 13 * 17);
        Ok(())
    }

    #[test]
    fn bounding_preserves_routing_decisions() {
        // every route divisor divides the modulus, so reducing by the modulus can't change
        // which branch a divisibility test takes
        let divisors: [WorryLevel; 4] = [23, 19, 13, 17];
        let modulus: WorryLevel = divisors.iter().product();
        for worry in [0, 1, 22, 23, 96_576, 96_577, 1_000_000_007] {
            for divisor in divisors {
                assert_eq!((worry % modulus) % divisor, worry % divisor);
            }
        }
    }

    #[test]
    fn inspection_counts_match_items_processed() -> DynamicResult<()> {
        let mut troop = Troop::parse(EXAMPLE_INPUT)?;
        troop.run_rounds(20, 3)?;
        let counts: Vec<u64> = troop.monkeys.iter().map(|monkey| monkey.inspections).collect();
        assert_eq!(counts, vec![101, 95, 7, 105]);
        Ok(())
    }

    #[test]
    fn simulation_is_deterministic() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;

        let mut first = parsed.clone();
        first.run_rounds(1_000, 1)?;
        let mut second = parsed;
        second.run_rounds(1_000, 1)?;

        let first_counts: Vec<u64> = first.monkeys.iter().map(|monkey| monkey.inspections).collect();
        let second_counts: Vec<u64> =
            second.monkeys.iter().map(|monkey| monkey.inspections).collect();
        assert_eq!(first_counts, second_counts);
        assert_eq!(first.monkey_business()?, second.monkey_business()?);
        Ok(())
    }

    #[test]
    fn turn_order_within_a_round_is_load_bearing() -> DynamicResult<()> {
        // running the same round with the population traversed in reverse order must leave
        // different queues behind, since later monkeys process items thrown earlier in the round
        let mut in_order = Troop::parse(EXAMPLE_INPUT)?;
        let mut reversed = in_order.clone();
        reversed.monkeys.reverse();

        in_order.run_rounds(1, 3)?;
        reversed.run_rounds(1, 3)?;

        let queues_by_id = |troop: &Troop| -> Vec<(MonkeyId, Vec<WorryLevel>)> {
            let mut queues: Vec<_> = troop
                .monkeys
                .iter()
                .map(|monkey| (monkey.id, monkey.items.iter().copied().collect()))
                .collect();
            queues.sort_unstable_by_key(|(id, _)| *id);
            queues
        };
        assert_ne!(queues_by_id(&in_order), queues_by_id(&reversed));
        Ok(())
    }

    const SELF_THROW_INPUT: &str = r"Monkey 0:
  Starting items: 2
  Operation: new = old + 1
  Test: divisible by 2
    If true: throw to monkey 1
    If false: throw to monkey 0

Monkey 1:
  Starting items: 9
  Operation: new = old + 1
  Test: divisible by 3
    If true: throw to monkey 0
    If false: throw to monkey 0
";

    #[test]
    fn items_thrown_to_self_are_consumed_in_the_same_turn() -> DynamicResult<()> {
        // item 2 becomes 3 (odd, back to self), then 4 (even, thrown to monkey 1), so monkey 0
        // inspects twice in its single turn
        let mut troop = Troop::parse(SELF_THROW_INPUT)?;
        troop.take_turn(0, 1)?;
        assert_eq!(troop.monkeys[0].inspections, 2);
        assert!(troop.monkeys[0].items.is_empty());
        assert_eq!(troop.monkeys[1].items, VecDeque::from([9, 4]));
        Ok(())
    }

    #[test]
    fn monkey_with_no_items_never_inspects() -> DynamicResult<()> {
        let mut troop = Troop::parse(EXAMPLE_INPUT)?;
        // monkey 2 receives nothing in the first round of the example
        troop.run_rounds(1, 3)?;
        assert_eq!(troop.monkeys[2].items.len(), 0);

        let empty_turn_counts: Vec<u64> =
            troop.monkeys.iter().map(|monkey| monkey.inspections).collect();
        troop.take_turn(2, 3)?;
        let after_counts: Vec<u64> =
            troop.monkeys.iter().map(|monkey| monkey.inspections).collect();
        assert_eq!(empty_turn_counts, after_counts);
        Ok(())
    }

    #[test]
    fn unknown_throw_target_aborts_the_run() -> DynamicResult<()> {
        let input = EXAMPLE_INPUT.replace("throw to monkey 2", "throw to monkey 9");
        let mut troop = Troop::parse(&input)?;
        let result = troop.run_rounds(20, 3);
        assert!(matches!(result, Err(SimulationError::UnknownTarget(9))));
        Ok(())
    }

    #[test]
    fn record_missing_a_target_line_fails_to_parse() {
        let truncated: String = EXAMPLE_INPUT
            .lines()
            .filter(|line| !line.trim_start().starts_with("If false"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(Troop::parse(&truncated).is_err());
    }

    #[test]
    fn operation_is_parsed_as_data_not_code() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        assert!(matches!(
            parsed.monkeys[0].operation,
            Operation {
                operator: Operator::Multiply,
                operand: Operand::Literal(19),
            }
        ));
        assert!(matches!(
            parsed.monkeys[2].operation,
            Operation {
                operator: Operator::Multiply,
                operand: Operand::OldValue,
            }
        ));

        let bad = EXAMPLE_INPUT.replace("new = old * 19", "new = old / 19");
        assert!(Troop::parse(&bad).is_err());
        Ok(())
    }

    #[test]
    fn monkey_business_requires_two_monkeys() {
        let troop = Troop {
            monkeys: vec![],
            modulus: 1,
        };
        assert!(matches!(
            troop.monkey_business(),
            Err(SimulationError::TooFewMonkeys)
        ));
    }
}
