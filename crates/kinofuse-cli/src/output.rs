use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;
use kinofuse_models::{CanonicalMovie, SearchHit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({"type": "success", "message": msg.as_ref()}));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode.
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({"type": "error", "message": msg.as_ref()}));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({"type": "info", "message": msg.as_ref()}));
            }
        }
    }

    pub fn movie(&self, movie: &CanonicalMovie) {
        match self.format {
            OutputFormat::Human => {
                println!(
                    "{} {}",
                    movie.title_en.bold(),
                    movie
                        .year
                        .as_deref()
                        .map(|y| format!("({})", y))
                        .unwrap_or_default()
                );
                if let Some(title_ru) = &movie.title_ru {
                    println!("  {}", title_ru);
                }
                println!(
                    "  imdb: {}  kinopoisk: {}",
                    movie.imdb_id, movie.kinopoisk_id
                );
                println!(
                    "  ratings: imdb {}  kp {}  metacritic {}",
                    fmt_rating(movie.rating_imdb),
                    fmt_rating(movie.rating_kp),
                    fmt_rating(movie.rating_metacritic)
                );
                if !movie.genres.is_empty() {
                    println!("  genres: {}", movie.genres.join(", "));
                }
                if let Some(runtime) = movie.runtime {
                    println!("  runtime: {} min", runtime);
                }
                if let Some(short) = &movie.short_description_en {
                    println!("  {}", short);
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_serializable(movie);
            }
        }
    }

    pub fn search_hits(&self, hits: &[SearchHit]) {
        match self.format {
            OutputFormat::Human => {
                for (index, hit) in hits.iter().enumerate() {
                    let title = hit
                        .title_en
                        .as_deref()
                        .or(hit.title_ru.as_deref())
                        .unwrap_or("<untitled>");
                    println!(
                        "{:2}. {} {}  [kp {}{}]",
                        index + 1,
                        title.bold(),
                        hit.year.map(|y| format!("({})", y)).unwrap_or_default(),
                        hit.kinopoisk_id,
                        hit.imdb_id
                            .as_deref()
                            .map(|id| format!(", {}", id))
                            .unwrap_or_default()
                    );
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_serializable(&hits);
            }
        }
    }

    pub fn print_serializable<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => self.print_json(&json),
            Err(e) => self.error(format!("failed to serialize output: {}", e)),
        }
    }

    fn print_json(&self, value: &serde_json::Value) {
        let rendered = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value),
            _ => serde_json::to_string(value),
        };
        match rendered {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("failed to render JSON output: {}", e),
        }
    }
}

fn fmt_rating(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}
