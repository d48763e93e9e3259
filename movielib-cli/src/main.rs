use clap::{Parser, Subcommand};
use movielib::{MovieLibrary, MovieUpdate, Result};
use std::process;

/// movielib CLI — manage a JSON-backed movie collection from the command line
#[derive(Parser)]
#[command(name = "movielib", version, about)]
struct Cli {
    /// Path to the JSON storage file
    #[arg(long, default_value = "movies.json")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every movie in the collection
    List,

    /// Add a new movie
    Add {
        /// Movie title (must be unique, ignoring case)
        title: String,
        /// Director name
        director: String,
        /// Release year
        year: i32,
        /// Genres, comma-separated (e.g. Crime,Drama)
        #[arg(value_delimiter = ',')]
        genres: Vec<String>,
    },

    /// Remove a movie by title
    Remove {
        /// Title of the movie to remove
        title: String,
    },

    /// Update fields of an existing movie
    Update {
        /// Title of the movie to update
        title: String,
        /// New director
        #[arg(long)]
        director: Option<String>,
        /// New release year
        #[arg(long)]
        year: Option<i32>,
        /// New genres, comma-separated (replaces the existing list)
        #[arg(long, value_delimiter = ',')]
        genres: Option<Vec<String>>,
    },

    /// List all titles
    Titles,

    /// Count the movies in the collection
    Count,

    /// Look up a single movie by exact title
    Get {
        /// Title to look up (case-insensitive)
        title: String,
    },

    /// Find movies whose title contains a substring
    Search {
        /// Substring to look for (case-insensitive)
        substring: String,
    },

    /// Find movies released in a given year
    ByYear {
        /// Release year
        year: i32,
    },

    /// Find movies by director
    ByDirector {
        /// Director name (case-insensitive)
        director: String,
    },

    /// Find movies carrying a genre
    ByGenre {
        /// Genre label (case-insensitive)
        genre: String,
    },

    /// Titles of the oldest movies in the collection
    Oldest,

    /// Average release year across the collection
    AverageYear,

    /// Titles of the movies with the longest title
    Longest,

    /// Titles of movies released between two years, inclusive
    Between {
        /// Start year
        start: i32,
        /// End year
        end: i32,
    },

    /// The most common release year in the collection
    CommonYear,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut library = MovieLibrary::open(&cli.file)?;

    match cli.command {
        Command::List => {
            print_output(&serde_json::to_value(library.movies())?);
        }

        Command::Add {
            title,
            director,
            year,
            genres,
        } => {
            let added = library.add(&title, &director, year, genres)?;
            print_output(&serde_json::to_value(&added)?);
        }

        Command::Remove { title } => {
            let removed = library.remove(&title)?;
            print_output(&serde_json::to_value(&removed)?);
        }

        Command::Update {
            title,
            director,
            year,
            genres,
        } => {
            let patch = MovieUpdate {
                director,
                year,
                genres,
            };
            let updated = library.update(&title, patch)?;
            print_output(&serde_json::to_value(&updated)?);
        }

        Command::Titles => {
            print_output(&serde_json::to_value(library.titles())?);
        }

        Command::Count => {
            print_output(&serde_json::to_value(library.count())?);
        }

        Command::Get { title } => {
            print_output(&serde_json::to_value(library.find_by_title(&title))?);
        }

        Command::Search { substring } => {
            print_output(&serde_json::to_value(
                library.find_by_title_substring(&substring),
            )?);
        }

        Command::ByYear { year } => {
            print_output(&serde_json::to_value(library.find_by_year(year))?);
        }

        Command::ByDirector { director } => {
            print_output(&serde_json::to_value(library.find_by_director(&director))?);
        }

        Command::ByGenre { genre } => {
            print_output(&serde_json::to_value(library.find_by_genre(&genre))?);
        }

        Command::Oldest => {
            print_output(&serde_json::to_value(library.oldest_titles())?);
        }

        Command::AverageYear => {
            print_output(&serde_json::to_value(library.average_year())?);
        }

        Command::Longest => {
            print_output(&serde_json::to_value(library.longest_titles())?);
        }

        Command::Between { start, end } => {
            print_output(&serde_json::to_value(
                library.titles_between_years(start, end),
            )?);
        }

        Command::CommonYear => {
            print_output(&serde_json::to_value(library.most_common_year())?);
        }
    }

    Ok(())
}

fn print_output(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}
