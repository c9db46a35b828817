use std::collections::HashMap;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 7: No Space Left On Device",
    parsed = FileSystem,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2022<7> {}

/*
Input is a terminal transcript. Lines starting with `$` are commands (`cd <dir>`, `cd ..`,
`cd /`, or `ls`); other lines are `ls` output, either `dir <name>` or `<size> <name>`.

Replaying the transcript reconstructs the directory tree. Directories live in an arena indexed by
position, with a child holding its parent's index rather than a reference, so the tree has no
ownership cycles. A directory's total size (its files plus everything below it) is propagated up
the parent chain as files are discovered.
*/

/// The integer type for file and directory sizes.
type FileSize = u64;

/// One line of the terminal transcript.
#[derive(Debug, PartialEq, Eq)]
enum TerminalLine<'input> {
    /// `$ cd <argument>`
    ChangeDirectory(&'input str),
    /// `$ ls`
    List,
    /// `dir <name>` output
    DirectoryEntry(&'input str),
    /// `<size> <name>` output
    FileEntry { size: FileSize, name: &'input str },
}

/// An error when parsing input into a [`FileSystem`].
#[derive(thiserror::Error, Debug)]
enum ParseFileSystemError {
    #[error("unknown terminal command: {0:?}")]
    UnknownCommand(String),

    #[error("unrecognized transcript line: {0:?}")]
    UnrecognizedLine(String),

    #[error("cannot `cd ..` above the root directory")]
    CdAboveRoot,
}

/// Parse a transcript line into a [`TerminalLine`].
fn parse_terminal_line(line: &str) -> DynamicResult<TerminalLine<'_>> {
    if let Some(command) = line.strip_prefix("$ ") {
        return if command == "ls" {
            Ok(TerminalLine::List)
        } else if let Some(argument) = command.strip_prefix("cd ") {
            Ok(TerminalLine::ChangeDirectory(argument))
        } else {
            Err(ParseFileSystemError::UnknownCommand(command.to_string()).into())
        };
    }

    if let Some(name) = line.strip_prefix("dir ") {
        return Ok(TerminalLine::DirectoryEntry(name));
    }

    let (size_token, name) = line
        .split_once(' ')
        .ok_or_else(|| ParseFileSystemError::UnrecognizedLine(line.to_string()))?;
    let size = parse_with_context::<FileSize>(size_token)?;
    Ok(TerminalLine::FileEntry { size, name })
}

/// A directory in the reconstructed tree.
#[derive(Debug)]
struct DirectoryNode {
    /// Index of the containing directory in the arena. `None` only for the root.
    parent: Option<usize>,

    /// Sizes of files directly inside this directory, keyed by name so a repeated `ls` doesn't
    /// count a file twice.
    files: HashMap<String, FileSize>,

    /// Sum of file sizes in this directory and every directory below it.
    total_size: FileSize,
}

impl DirectoryNode {
    fn new(parent: Option<usize>) -> Self {
        Self {
            parent,
            files: HashMap::new(),
            total_size: 0,
        }
    }
}

/// The directory tree, as an arena of nodes addressed by index.
#[derive(Debug)]
struct FileSystem {
    directories: Vec<DirectoryNode>,
}

impl FileSystem {
    /// The root directory's arena index.
    const ROOT: usize = 0;
}

impl ParseData for FileSystem {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut directories = vec![DirectoryNode::new(None)];
        // child directory indices by (parent index, name), for `cd` lookups
        let mut child_names: HashMap<(usize, String), usize> = HashMap::new();
        let mut current = Self::ROOT;

        parse_input_lines(input.trim_end(), |_, line| {
            match parse_terminal_line(line)? {
                TerminalLine::ChangeDirectory("/") => current = Self::ROOT,
                TerminalLine::ChangeDirectory("..") => {
                    current = directories[current]
                        .parent
                        .ok_or(ParseFileSystemError::CdAboveRoot)?;
                }
                TerminalLine::ChangeDirectory(name) => {
                    current = match child_names.get(&(current, name.to_string())) {
                        Some(&existing) => existing,
                        None => {
                            let index = directories.len();
                            directories.push(DirectoryNode::new(Some(current)));
                            child_names.insert((current, name.to_string()), index);
                            index
                        }
                    };
                }
                TerminalLine::List | TerminalLine::DirectoryEntry(_) => {
                    // `ls` itself changes nothing; a `dir` entry's directory is created lazily
                    // when it's entered, since only entered directories can hold content
                }
                TerminalLine::FileEntry { size, name } => {
                    if !directories[current].files.contains_key(name) {
                        directories[current].files.insert(name.to_string(), size);

                        // propagate the size up the parent chain
                        let mut ancestor = Some(current);
                        while let Some(index) = ancestor {
                            directories[index].total_size = directories[index]
                                .total_size
                                .checked_add(size)
                                .expect("directory total size should not overflow");
                            ancestor = directories[index].parent;
                        }
                    }
                }
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        Ok(Self { directories })
    }
}

/*
For part 1, find all directories with a total size of at most 100,000 and answer with the sum of
their total sizes. Nested qualifying directories count their shared files more than once, which
the puzzle allows.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = FileSystem;
    type Output = FileSize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const SMALL_DIRECTORY_LIMIT: FileSize = 100_000;

        let mut sum: Self::Output = 0;
        for directory in &input.directories {
            if directory.total_size <= SMALL_DIRECTORY_LIMIT {
                sum = sum
                    .checked_add(directory.total_size)
                    .expect("summing small directory sizes should not overflow");
            }
        }
        Ok(sum)
    }
}

/*
For part 2, the disk holds 70,000,000 and the update needs 30,000,000 unused. Answer with the
total size of the smallest single directory whose deletion frees enough space.
*/

/// The disk has no directory big enough to free the space the update needs.
#[derive(thiserror::Error, Debug)]
#[error("no directory is large enough to free {0} units")]
struct NoDeletionCandidate(FileSize);

impl Solution<PartTwo> for Day07 {
    type Input = FileSystem;
    type Output = FileSize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const DISK_SIZE: FileSize = 70_000_000;
        const UNUSED_SPACE_TARGET: FileSize = 30_000_000;

        let used = input.directories[FileSystem::ROOT].total_size;
        let unused = DISK_SIZE.saturating_sub(used);
        let needed = UNUSED_SPACE_TARGET.saturating_sub(unused);

        input
            .directories
            .iter()
            .map(|directory| directory.total_size)
            .filter(|&total| total >= needed)
            .min()
            .ok_or_else(|| NoDeletionCandidate(needed).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn totals_propagate_to_ancestors() -> DynamicResult<()> {
        let parsed = FileSystem::parse(EXAMPLE_INPUT)?;
        let mut totals: Vec<FileSize> = parsed
            .directories
            .iter()
            .map(|directory| directory.total_size)
            .collect();
        totals.sort_unstable();
        assert_eq!(totals, vec![584, 94_853, 24_933_642, 48_381_165]);
        Ok(())
    }

    #[test]
    fn repeated_listings_do_not_double_count() -> DynamicResult<()> {
        let input = "$ cd /\n$ ls\n100 a.txt\n$ ls\n100 a.txt\n";
        let parsed = FileSystem::parse(input)?;
        assert_eq!(parsed.directories[FileSystem::ROOT].total_size, 100);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = FileSystem::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 95_437);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = FileSystem::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 24_933_642);
        Ok(())
    }

    #[test]
    fn cd_above_root_fails_to_parse() {
        assert!(FileSystem::parse("$ cd ..\n").is_err());
    }

    #[test]
    fn unknown_command_fails_to_parse() {
        assert!(FileSystem::parse("$ rm -rf /\n").is_err());
        assert!(FileSystem::parse("not a transcript line\n").is_err());
    }
}
