use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://api:4567";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bible-cli")]
#[command(about = "Command line client for a self-hosted bible-api server")]
pub struct Cli {
    /// Base URL of the bible-api server
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Fetch a verse or passage
    Verse {
        /// Bible reference, e.g. "John 3:16"
        reference: String,

        /// Translation ID (no default; the server picks when omitted)
        #[arg(long, short = 't')]
        translation: Option<String>,

        /// How the server resolves references in single-chapter books
        #[arg(long, value_name = "MODE")]
        single_chapter_book_matching: Option<String>,
    },

    /// List available translations
    Translations,

    /// List books for a translation
    Books {
        #[arg(long, short = 't', default_value = "web")]
        translation: String,
    },

    /// List chapters for a book in a translation
    Chapters {
        /// Book ID (e.g. JHN)
        book: String,

        #[arg(long, short = 't', default_value = "web")]
        translation: String,
    },

    /// Get a random verse
    Random {
        /// Comma-separated list of book IDs
        #[arg(long, conflicts_with = "testament")]
        books: Option<String>,

        /// Limit to the Old or New Testament
        #[arg(long, value_enum)]
        testament: Option<Testament>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Testament {
    #[value(name = "OT")]
    Old,
    #[value(name = "NT")]
    New,
}

impl Testament {
    pub fn as_str(self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validation::validate_server_url(&self.server)
    }
}
