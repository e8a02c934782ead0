//! snipkit - tag and highlight code snippets from the command line
//!
//! Reads a snippet from FILE (or stdin) and prints highlighted HTML,
//! terminal colours, detected patterns or derived tags.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use snipkit::config::Config;
use snipkit::error::{Result, SnipError};
use snipkit::markup::{parse_line_spec, preview, to_ansi};
use snipkit::syntax::{annotate, SyntaxManager};
use snipkit::tags::tag_description;
use snipkit::{detect_patterns, render_snippet, synthesize_tags, RenderOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// What the command should print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Html,
    Ansi,
    Patterns,
    Tags,
    Languages,
    WriteConfig,
    Help,
    Version,
}

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    mode: Mode,
    language: Option<String>,
    line_numbers: Option<bool>,
    emphasized: Option<String>,
    detect_patterns: bool,
    preview: bool,
    file: Option<PathBuf>,
}

impl CliArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => cli.mode = Mode::Help,
                "--version" | "-V" => cli.mode = Mode::Version,
                "--lang" | "-l" => cli.language = Some(required(&mut args, &arg)?),
                "--line-numbers" | "-n" => cli.line_numbers = Some(true),
                "--no-line-numbers" => cli.line_numbers = Some(false),
                "--emphasize" | "-e" => cli.emphasized = Some(required(&mut args, &arg)?),
                "--detect-patterns" | "-p" => cli.detect_patterns = true,
                "--preview" => cli.preview = true,
                "--ansi" => cli.mode = Mode::Ansi,
                "--patterns" => cli.mode = Mode::Patterns,
                "--tags" => cli.mode = Mode::Tags,
                "--languages" => cli.mode = Mode::Languages,
                "--write-config" => cli.mode = Mode::WriteConfig,
                other if other.starts_with('-') && other != "-" => {
                    return Err(SnipError::InvalidArgument(format!("unknown option '{}'", other)));
                }
                other => {
                    if cli.file.is_some() {
                        return Err(SnipError::InvalidArgument(format!(
                            "unexpected argument '{}'",
                            other
                        )));
                    }
                    if other != "-" {
                        cli.file = Some(PathBuf::from(other));
                    }
                }
            }
        }

        Ok(cli)
    }
}

fn required<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| SnipError::InvalidArgument(format!("{} needs a value", flag)))
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SNIPKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = CliArgs::parse(env::args().skip(1))?;

    match cli.mode {
        Mode::Help => {
            print_usage();
            return Ok(());
        }
        Mode::Version => {
            print_version();
            return Ok(());
        }
        Mode::Languages => {
            for name in SyntaxManager::global().list_languages() {
                println!("{}", name);
            }
            return Ok(());
        }
        Mode::WriteConfig => {
            let path = Config::load()?.save()?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load()?;
    let code = read_input(cli.file.as_ref())?;
    let language = cli
        .language
        .clone()
        .or_else(|| {
            cli.file
                .as_ref()
                .and_then(|p| SyntaxManager::global().detect_language(p))
                .map(str::to_string)
        })
        .unwrap_or_default();
    debug!(language = %language, bytes = code.len(), "read snippet");

    let mode = match cli.mode {
        Mode::Html if config.ansi => Mode::Ansi,
        mode => mode,
    };

    match mode {
        Mode::Patterns => {
            for pattern in detect_patterns(&code) {
                println!("{}", pattern.label);
            }
        }
        Mode::Tags => {
            for tag in synthesize_tags(&code, &language) {
                match tag_description(&tag.name) {
                    Some(desc) => println!("{}\t{}", tag.name, desc),
                    None => println!("{}", tag.name),
                }
            }
        }
        Mode::Ansi => {
            let code = if cli.preview {
                preview(&code, config.preview_lines)
            } else {
                code.as_str()
            };
            let line_numbers = cli.line_numbers.unwrap_or(config.line_numbers) && !cli.preview;
            println!("{}", to_ansi(&annotate(code, &language), line_numbers)?);
        }
        _ => {
            let options = render_options(&cli, &config)?;
            println!("{}", render_snippet(&code, &language, &options));
        }
    }

    Ok(())
}

/// Merge config defaults with command-line overrides
fn render_options(cli: &CliArgs, config: &Config) -> Result<RenderOptions> {
    let mut options = RenderOptions::from(config);
    if let Some(line_numbers) = cli.line_numbers {
        options.line_numbers = line_numbers;
    }
    if let Some(spec) = &cli.emphasized {
        options.emphasized_lines = parse_line_spec(spec)?;
    }
    options.detect_patterns |= cli.detect_patterns;
    options.preview = cli.preview;
    Ok(options)
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

fn print_usage() {
    println!("snipkit {} - code snippet tagging and highlighting", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snipkit [OPTIONS] [FILE]");
    println!();
    println!("Reads the snippet from FILE, or stdin when FILE is absent or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --lang LANG         Language label (default: guessed from FILE)");
    println!("  -n, --line-numbers      Number lines");
    println!("      --no-line-numbers   Do not number lines");
    println!("  -e, --emphasize LINES   Emphasize lines, e.g. 1,3-5");
    println!("  -p, --detect-patterns   Wrap recognised idioms in overlay spans");
    println!("      --preview           Render only the first few lines");
    println!("      --ansi              Print terminal colours instead of HTML");
    println!("      --patterns          List detected patterns");
    println!("      --tags              List derived tags");
    println!("      --languages         List languages with dedicated rules");
    println!("      --write-config      Write the current settings to ~/.snipkit.toml");
    println!("  -h, --help              Show this help message");
    println!("  -V, --version           Show version information");
    println!();
    println!("Set SNIPKIT_LOG (e.g. SNIPKIT_LOG=debug) to control log output.");
}

fn print_version() {
    println!("snipkit {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["-l", "Python", "-e", "1,3-4", "-p", "--tags", "snippet.py"]).unwrap();
        assert_eq!(cli.mode, Mode::Tags);
        assert_eq!(cli.language.as_deref(), Some("Python"));
        assert_eq!(cli.emphasized.as_deref(), Some("1,3-4"));
        assert!(cli.detect_patterns);
        assert_eq!(cli.file, Some(PathBuf::from("snippet.py")));
    }

    #[test]
    fn test_parse_stdin_dash() {
        assert_eq!(parse(&["-"]).unwrap().file, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["-l"]).is_err());
        assert!(parse(&["a.js", "b.js"]).is_err());
    }

    #[test]
    fn test_render_options_override_config() {
        let cli = parse(&["--no-line-numbers", "-e", "2", "--preview"]).unwrap();
        let config = Config {
            detect_patterns: true,
            ..Config::default()
        };
        let options = render_options(&cli, &config).unwrap();
        assert!(!options.line_numbers);
        assert!(options.detect_patterns);
        assert!(options.preview);
        assert!(options.emphasized_lines.contains(&2));
    }

    #[test]
    fn test_render_options_bad_lines() {
        let cli = parse(&["-e", "x-y"]).unwrap();
        assert!(render_options(&cli, &Config::default()).is_err());
    }
}
