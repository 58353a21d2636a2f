//! Drop selection policy
//!
//! Decides which file (if any) proceeds to conversion when one or more paths
//! arrive together. A single path converts immediately with no prompt. For
//! several paths the caller presents three fixed choices and feeds the chosen
//! index back through [`DropPrompt::resolve`].

use std::path::PathBuf;

use crate::{ConvertError, ConvertResult};

/// Labels for the multi-file prompt, in their fixed presentation order
///
/// The index of a label is the choice index fed to [`DropPrompt::resolve`].
pub const CHOICE_LABELS: [&str; 3] = [
    "Cancel, I dropped these by accident",
    "Convert the first one",
    "Exit the application",
];

/// What a drop event resolved to
///
/// `Unrecognised` is an explicit variant rather than a default branch: a
/// dismissed prompt or an out-of-range index means nothing happened, and
/// callers must say so rather than crash or convert something by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Proceed to conversion with this path
    Convert(PathBuf),
    /// The user backed out; nothing converted
    Cancelled,
    /// The user asked to leave the application
    Exit,
    /// No recognisable choice was made; nothing converted
    Unrecognised,
}

/// First stage of selection: either an immediate path or a pending prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exactly one path was dropped; convert it without prompting
    Immediate(PathBuf),
    /// Several paths were dropped; a choice is required
    Prompt(DropPrompt),
}

/// A pending multi-file choice, holding the paths in their original order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPrompt {
    paths: Vec<PathBuf>,
}

impl DropPrompt {
    /// Returns the dropped paths in the order the drop source supplied them
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the three choice labels in presentation order
    pub fn choices(&self) -> &'static [&'static str; 3] {
        &CHOICE_LABELS
    }

    /// Maps a choice index to its outcome
    ///
    /// `0` cancels, `1` converts the first path as originally ordered, `2`
    /// exits. Anything else, including `None` for a dismissed prompt, is
    /// [`SelectionOutcome::Unrecognised`].
    pub fn resolve(self, choice: Option<usize>) -> SelectionOutcome {
        match choice {
            Some(0) => SelectionOutcome::Cancelled,
            Some(1) => {
                let mut paths = self.paths;
                SelectionOutcome::Convert(paths.swap_remove(0))
            }
            Some(2) => SelectionOutcome::Exit,
            _ => SelectionOutcome::Unrecognised,
        }
    }
}

/// Resolves a dropped path list to an immediate conversion or a prompt
///
/// Paths are kept in the order the drop source supplied them; "the first
/// one" always means index 0 of that original order.
///
/// # Errors
///
/// Returns `ConvertError::EmptyDrop` if `paths` is empty — drop sources are
/// expected to deliver at least one path.
pub fn select(paths: Vec<PathBuf>) -> ConvertResult<Selection> {
    match paths.len() {
        0 => Err(ConvertError::EmptyDrop),
        1 => {
            let mut paths = paths;
            Ok(Selection::Immediate(paths.swap_remove(0)))
        }
        _ => Ok(Selection::Prompt(DropPrompt { paths })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_single_path_is_immediate() {
        let selection = select(paths(&["a.bin"])).unwrap();
        assert_eq!(selection, Selection::Immediate(PathBuf::from("a.bin")));
    }

    #[test]
    fn test_empty_drop_is_an_error() {
        let result = select(Vec::new());
        assert!(matches!(result, Err(ConvertError::EmptyDrop)));
    }

    #[test]
    fn test_multiple_paths_prompt() {
        let selection = select(paths(&["a.bin", "b.bin"])).unwrap();
        match selection {
            Selection::Prompt(prompt) => {
                assert_eq!(prompt.paths(), paths(&["a.bin", "b.bin"]).as_slice());
                assert_eq!(prompt.choices(), &CHOICE_LABELS);
            }
            other => panic!("expected a prompt, got {other:?}"),
        }
    }

    fn prompt_for(names: &[&str]) -> DropPrompt {
        match select(paths(names)).unwrap() {
            Selection::Prompt(prompt) => prompt,
            other => panic!("expected a prompt, got {other:?}"),
        }
    }

    #[test]
    fn test_choice_zero_cancels() {
        let prompt = prompt_for(&["a", "b", "c"]);
        assert_eq!(prompt.resolve(Some(0)), SelectionOutcome::Cancelled);
    }

    #[test]
    fn test_choice_one_converts_the_first_path() {
        let prompt = prompt_for(&["a", "b", "c"]);
        assert_eq!(
            prompt.resolve(Some(1)),
            SelectionOutcome::Convert(PathBuf::from("a"))
        );
    }

    #[test]
    fn test_choice_two_exits() {
        let prompt = prompt_for(&["a", "b", "c"]);
        assert_eq!(prompt.resolve(Some(2)), SelectionOutcome::Exit);
    }

    #[test]
    fn test_out_of_range_choice_is_unrecognised() {
        for choice in [3usize, 4, 99, usize::MAX] {
            let prompt = prompt_for(&["a", "b"]);
            assert_eq!(prompt.resolve(Some(choice)), SelectionOutcome::Unrecognised);
        }
    }

    #[test]
    fn test_dismissed_prompt_is_unrecognised() {
        let prompt = prompt_for(&["a", "b"]);
        assert_eq!(prompt.resolve(None), SelectionOutcome::Unrecognised);
    }

    #[test]
    fn test_order_is_preserved_not_sorted() {
        // "zzz" sorts after "aaa"; the first dropped path must still win.
        let prompt = prompt_for(&["zzz", "aaa"]);
        assert_eq!(
            prompt.resolve(Some(1)),
            SelectionOutcome::Convert(PathBuf::from("zzz"))
        );
    }
}
