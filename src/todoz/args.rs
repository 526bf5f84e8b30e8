use clap::{Parser, Subcommand};
use todoz::model::TodoId;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A small, persistent todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "a")]
    Add {
        /// Text of the todo (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List {
        /// Which todos to show: all, active or completed
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Mark todos as done, or reopen them
    #[command(aliases = ["t", "done"])]
    Toggle {
        /// Ids of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<TodoId>,
    },

    /// Change the text of a todo (opens $EDITOR when no text is given)
    #[command(alias = "e")]
    Edit {
        /// Id of the todo
        id: TodoId,

        /// New text
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "rm")]
    Delete {
        /// Ids of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<TodoId>,
    },

    /// Remove all completed todos
    #[command(alias = "cc")]
    ClearCompleted,

    /// Remove every todo and the stored data
    ClearAll,

    /// Get or set configuration
    Config {
        /// Configuration key (add-delay-ms, default-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_multiple_words() {
        let cli = Cli::try_parse_from(["todoz", "add", "Buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Add { text }) => assert_eq!(text.join(" "), "Buy milk"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn parses_toggle_ids_and_alias() {
        let cli = Cli::try_parse_from(["todoz", "done", "1", "3"]).unwrap();
        match cli.command {
            Some(Commands::Toggle { ids }) => assert_eq!(ids, vec![TodoId(1), TodoId(3)]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(Cli::try_parse_from(["todoz", "rm", "p1"]).is_err());
    }

    #[test]
    fn edit_text_is_optional() {
        let cli = Cli::try_parse_from(["todoz", "edit", "2"]).unwrap();
        match cli.command {
            Some(Commands::Edit { id, text }) => {
                assert_eq!(id, TodoId(2));
                assert!(text.is_empty());
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["todoz", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
