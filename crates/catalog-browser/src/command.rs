//! Line-oriented user commands.
//!
//! One command per line: `search <text>`, `category <name>`, `min <value>`,
//! `max <value>`, `sort <none|asc|desc>`, `show`, `quit`. Arguments are taken
//! verbatim after the first space, so `search blue shirt` searches for
//! `"blue shirt"` and a bare `min` clears the lower bound.

use std::str::FromStr;

use catalog_core::{CoreError, SortOption};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(String),
    MinPrice(String),
    MaxPrice(String),
    Sort(SortOption),
    /// Re-render the current frame.
    Show,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command \"{0}\"")]
    Unknown(String),

    #[error("{0} requires an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Sort(#[from] CoreError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, arg) = match line.trim_start().split_once(' ') {
            Some((verb, arg)) => (verb, arg),
            None => (line.trim(), ""),
        };

        match verb {
            "" => Err(CommandError::Empty),
            "search" | "s" => Ok(Command::Search(arg.to_string())),
            "category" | "c" => {
                let arg = arg.trim();
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("category"));
                }
                Ok(Command::Category(arg.to_string()))
            }
            "min" => Ok(Command::MinPrice(arg.trim().to_string())),
            "max" => Ok(Command::MaxPrice(arg.trim().to_string())),
            "sort" => Ok(Command::Sort(arg.parse()?)),
            "show" => Ok(Command::Show),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().expect("expected valid command")
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(parse("search blue shirt"), Command::Search("blue shirt".into()));
    }

    #[test]
    fn bare_search_clears_the_term() {
        assert_eq!(parse("search"), Command::Search(String::new()));
    }

    #[test]
    fn category_requires_a_name() {
        assert_eq!(parse("category Shoes"), Command::Category("Shoes".into()));
        assert!(matches!(
            "category ".parse::<Command>(),
            Err(CommandError::MissingArgument("category"))
        ));
    }

    #[test]
    fn price_bounds_are_raw_text() {
        assert_eq!(parse("min 10"), Command::MinPrice("10".into()));
        assert_eq!(parse("max abc"), Command::MaxPrice("abc".into()));
        assert_eq!(parse("max"), Command::MaxPrice(String::new()));
    }

    #[test]
    fn sort_accepts_aliases() {
        assert_eq!(parse("sort asc"), Command::Sort(SortOption::PriceAsc));
        assert_eq!(parse("sort price_desc"), Command::Sort(SortOption::PriceDesc));
        assert_eq!(parse("sort"), Command::Sort(SortOption::Default));
    }

    #[test]
    fn sort_rejects_unknown_order() {
        assert!(matches!(
            "sort cheapest".parse::<Command>(),
            Err(CommandError::Sort(CoreError::InvalidSortOption(_)))
        ));
    }

    #[test]
    fn quit_and_show() {
        assert_eq!(parse("quit\n"), Command::Quit);
        assert_eq!(parse("q"), Command::Quit);
        assert_eq!(parse("show"), Command::Show);
    }

    #[test]
    fn rejects_empty_and_unknown_lines() {
        assert!(matches!("   ".parse::<Command>(), Err(CommandError::Empty)));
        assert!(matches!(
            "buy 3".parse::<Command>(),
            Err(CommandError::Unknown(ref v)) if v == "buy"
        ));
    }
}
