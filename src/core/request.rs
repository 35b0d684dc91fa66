use crate::config::{Cli, Command};

/// A single outbound request descriptor: base URL, path, and query pairs.
/// Built once at argument-parse time, consumed by exactly one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub base_url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RequestSpec {
    /// Map a parsed command line onto the one URL it stands for.
    pub fn from_cli(cli: &Cli) -> Self {
        let base_url = cli.server.trim_end_matches('/').to_string();

        let (path, query) = match &cli.command {
            Command::Verse {
                reference,
                translation,
                single_chapter_book_matching,
            } => {
                let mut query = Vec::new();
                if let Some(translation) = translation {
                    query.push(("translation".to_string(), translation.clone()));
                }
                if let Some(mode) = single_chapter_book_matching {
                    query.push(("single_chapter_book_matching".to_string(), mode.clone()));
                }
                // Spaces become '+'; everything else passes through verbatim.
                (format!("/{}", reference.replace(' ', "+")), query)
            }
            Command::Translations => ("/data".to_string(), Vec::new()),
            Command::Books { translation } => (format!("/data/{}", translation), Vec::new()),
            Command::Chapters { book, translation } => {
                (format!("/data/{}/{}", translation, book), Vec::new())
            }
            Command::Random { books, testament } => {
                // Random always reads from the "web" translation.
                let mut path = "/data/web/random".to_string();
                if let Some(books) = books {
                    path.push('/');
                    path.push_str(books);
                } else if let Some(testament) = testament {
                    path.push('/');
                    path.push_str(testament.as_str());
                }
                (path, Vec::new())
            }
        };

        Self {
            base_url,
            path,
            query,
        }
    }

    pub fn url(&self) -> String {
        let mut url = format!("{}{}", self.base_url, self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn url_for(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        RequestSpec::from_cli(&cli).url()
    }

    #[test]
    fn verse_encodes_spaces_as_plus() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "verse",
                "John 3:16",
            ]),
            "http://localhost:4567/John+3:16"
        );
    }

    #[test]
    fn verse_with_translation_query() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "verse",
                "John 3:16",
                "--translation",
                "kjv",
            ]),
            "http://localhost:4567/John+3:16?translation=kjv"
        );
    }

    #[test]
    fn verse_range_reference_passes_through() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "verse",
                "Genesis 1:1-3",
            ]),
            "http://localhost:4567/Genesis+1:1-3"
        );
    }

    #[test]
    fn verse_single_chapter_book_matching_flag() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "verse",
                "Jude 1",
                "--single-chapter-book-matching",
                "indifferent",
            ]),
            "http://localhost:4567/Jude+1?single_chapter_book_matching=indifferent"
        );
    }

    #[test]
    fn verse_combines_both_query_params() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "verse",
                "Jude 1",
                "--translation",
                "kjv",
                "--single-chapter-book-matching",
                "indifferent",
            ]),
            "http://localhost:4567/Jude+1?translation=kjv&single_chapter_book_matching=indifferent"
        );
    }

    #[test]
    fn translations_path() {
        assert_eq!(
            url_for(&["bible-cli", "--server", "http://localhost:4567", "translations"]),
            "http://localhost:4567/data"
        );
    }

    #[test]
    fn books_defaults_to_web() {
        assert_eq!(
            url_for(&["bible-cli", "--server", "http://localhost:4567", "books"]),
            "http://localhost:4567/data/web"
        );
    }

    #[test]
    fn books_with_explicit_translation() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "books",
                "--translation",
                "kjv",
            ]),
            "http://localhost:4567/data/kjv"
        );
    }

    #[test]
    fn chapters_path() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "chapters",
                "JHN",
            ]),
            "http://localhost:4567/data/web/JHN"
        );
    }

    #[test]
    fn random_plain() {
        assert_eq!(
            url_for(&["bible-cli", "--server", "http://localhost:4567", "random"]),
            "http://localhost:4567/data/web/random"
        );
    }

    #[test]
    fn random_with_books() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "random",
                "--books",
                "JHN,MAT",
            ]),
            "http://localhost:4567/data/web/random/JHN,MAT"
        );
    }

    #[test]
    fn random_with_testament() {
        assert_eq!(
            url_for(&[
                "bible-cli",
                "--server",
                "http://localhost:4567",
                "random",
                "--testament",
                "NT",
            ]),
            "http://localhost:4567/data/web/random/NT"
        );
    }

    #[test]
    fn random_books_and_testament_conflict() {
        let err = Cli::try_parse_from([
            "bible-cli",
            "random",
            "--books",
            "JHN",
            "--testament",
            "OT",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn default_server_url_applies() {
        assert_eq!(
            url_for(&["bible-cli", "translations"]),
            "http://api:4567/data"
        );
    }

    #[test]
    fn trailing_slash_on_server_is_trimmed() {
        assert_eq!(
            url_for(&["bible-cli", "--server", "http://localhost:4567/", "books"]),
            "http://localhost:4567/data/web"
        );
    }
}
