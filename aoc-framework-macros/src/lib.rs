//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// The properties collected from the attribute's arguments.
#[derive(Default)]
struct RunnerProperties {
    /// The expression to use as a solution name; should resolve to a string slice.
    name: Option<Expr>,
    /// The type to use for a `ParseData` generic parameter.
    parsed: Option<Type>,
    /// The type to use for a `Solution<PartOne>` generic parameter.
    part_one: Option<Type>,
    /// The type to use for a `Solution<PartTwo>` generic parameter.
    part_two: Option<Type>,
}

/// Build a compile error for a missing required property.
fn missing_property_error(property: &str) -> TokenStream {
    Error::new(
        proc_macro2::Span::call_site(),
        format!("missing required property: '{property}'"),
    )
    .to_compile_error()
    .into()
}

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// This macro automates the implementation of the `SolutionRunner` trait for Advent of Code
/// solutions, routing to the appropriate solver function based on which solution types are
/// provided.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, representing the solution's
///   display name.
///   Can be a string literal or a constant.
///
/// - `part_one` (required): The type implementing `Solution<PartOne>` for solving part one.
///
/// - `part_two` (optional): The type implementing `Solution<PartTwo>` for solving part two.
///   If omitted, only part one will be solved.
///
/// - `parsed` (optional): A type that implements `ParseData`, used to parse input before solving.
///   If omitted, the unparsed input string is passed directly to solvers.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`name`, `part_one`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// ## With `part_one`
///
/// With a struct `Day06` implementing `Solution<PartOne>`:
///
/// ```ignore
/// #[solution_runner(name = "Day 6", part_one = Day06)]
/// struct Day06Runner;
/// ```
///
/// ## With `part_two`
///
/// With structs `Day02Part1` implementing `Solution<PartOne>` & `Day02Part2` implementing
/// `Solution<PartTwo>` and a struct `AdventOfCodeSolutions<const DAY: u8>` for solutions to run:
///
/// ```ignore
/// const NAME02: &str = "Day 2";
/// #[solution_runner(name = NAME02, part_one = Day02Part1, part_two = Day02Part2)]
/// impl AdventOfCodeSolutions<2> {}
/// ```
///
/// ## With `parsed`
///
/// With a struct `Day11Parsed` implementing `ParseData` and a struct `Day11` implementing both
/// `Solution<PartOne>` & `Solution<PartTwo>`:
///
/// ```ignore
/// #[solution_runner(name = "Day 11", parsed = Day11Parsed, part_one = Day11, part_two = Day11)]
/// struct Day11;
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();

    let property_parser = syn::meta::parser(|meta| {
        // check for expected property keys, track value, error if a duplicate key appears
        if meta.path.is_ident("name") {
            if properties.name.is_some() {
                return Err(meta.error("duplicate 'name' property"));
            }
            properties.name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("parsed") {
            if properties.parsed.is_some() {
                return Err(meta.error("duplicate 'parsed' property"));
            }
            properties.parsed = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_one") {
            if properties.part_one.is_some() {
                return Err(meta.error("duplicate 'part_one' property"));
            }
            properties.part_one = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_two") {
            if properties.part_two.is_some() {
                return Err(meta.error("duplicate 'part_two' property"));
            }
            properties.part_two = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with property_parser);

    // enforce required properties
    let Some(name_expr) = properties.name else {
        return missing_property_error("name");
    };
    let Some(part_one_ty) = properties.part_one else {
        return missing_property_error("part_one");
    };

    let solve_function_call = match (properties.parsed, properties.part_two) {
        (None, None) => {
            quote! {
                aoc_framework::runner::solve_half_solution::<#part_one_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        (None, Some(part_two_ty)) => {
            quote! {
                aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        (Some(parsed_ty), None) => {
            quote! {
                aoc_framework::runner::solve_parsed_half_solution::<#parsed_ty, #part_one_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        (Some(parsed_ty), Some(part_two_ty)) => {
            quote! {
                aoc_framework::runner::solve_parsed_full_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#name_expr, input, handler, timed)
            }
        }
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    // the runner is implemented on the annotated struct or the annotated impl block's type
    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let impl_solution_runner_block = quote! {
        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_function_call
            }
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts
        #impl_solution_runner_block
    })
}
