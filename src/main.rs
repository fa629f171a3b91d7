mod report;

use chrono::{DateTime, Utc};
use hexcast::registry::{REGISTRY, validate};
use hexcast::{Context, MissingEntry, Options, generate_reading_verbose_with, get_structure_by_id, get_structure_by_key};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(env_filter).init();
}

enum Mode {
    Reading { question: String },
    Id(u8),
    Key(String),
    Trigram(String),
    Check,
}

struct CliConfig {
    mode: Mode,
    seed: Option<u64>,
    at: Option<DateTime<Utc>>,
    strict: bool,
    json: bool,
    verbose: bool,
    color: bool,
}

fn run(config: &CliConfig) -> Result<(), String> {
    match &config.mode {
        Mode::Reading { question } => {
            let mut ctx = Context { seed: config.seed, ..Context::default() };
            if let Some(at) = config.at {
                ctx.timestamp = at;
            }
            let missing_entry = if config.strict { MissingEntry::Reject } else { MissingEntry::Fallback };
            let opts = Options { missing_entry };

            let res = generate_reading_verbose_with(question, &ctx, &opts).map_err(|e| e.to_string())?;
            if config.json {
                let value = if config.verbose {
                    serde_json::json!({ "reading": res.reading, "details": res.details })
                } else {
                    serde_json::to_value(&res.reading).map_err(|e| e.to_string())?
                };
                print_json(&value)?;
            } else {
                let details = config.verbose.then_some(&res.details);
                report::print_reading(&res.reading, details, config.color);
            }
        }
        Mode::Id(id) => {
            let structure = get_structure_by_id(*id).ok_or_else(|| format!("no hexagram with id {id} (expected 1-64)"))?;
            show_structure(&structure, config)?;
        }
        Mode::Key(key) => {
            let structure = get_structure_by_key(key).map_err(|e| e.to_string())?;
            show_structure(&structure, config)?;
        }
        Mode::Trigram(name) => {
            let descriptor = hexcast::trigram(name).ok_or_else(|| format!("unknown trigram '{name}'"))?;
            if config.json {
                print_json(descriptor)?;
            } else {
                report::print_trigram(descriptor, config.color);
            }
        }
        Mode::Check => {
            let issues = validate(&REGISTRY);
            if config.json {
                let lines: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                print_json(&lines)?;
            } else {
                report::print_issues(&issues, config.color);
            }
            if !issues.is_empty() {
                return Err(format!("{} registry issue(s)", issues.len()));
            }
        }
    }
    Ok(())
}

fn show_structure(structure: &hexcast::Structure, config: &CliConfig) -> Result<(), String> {
    if config.json {
        print_json(structure)
    } else {
        report::print_structure(structure, config.color);
        Ok(())
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut question: Option<String> = None;
    let mut mode: Option<Mode> = None;
    let mut seed: Option<u64> = None;
    let mut at: Option<DateTime<Utc>> = None;
    let mut strict = false;
    let mut json = false;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("hexcast {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict" => strict = true,
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "--check" => set_mode(&mut mode, Mode::Check)?,
            "--seed" => {
                let value = args.next().ok_or_else(|| "error: --seed expects a value".to_string())?;
                seed = Some(parse_seed(&value)?);
            }
            "--at" => {
                let value = args.next().ok_or_else(|| "error: --at expects a value".to_string())?;
                at = Some(parse_at(&value)?);
            }
            "--id" => {
                let value = args.next().ok_or_else(|| "error: --id expects a value".to_string())?;
                set_mode(&mut mode, Mode::Id(parse_id(&value)?))?;
            }
            "--key" => {
                let value = args.next().ok_or_else(|| "error: --key expects a value".to_string())?;
                set_mode(&mut mode, Mode::Key(value))?;
            }
            "--trigram" => {
                let value = args.next().ok_or_else(|| "error: --trigram expects a value".to_string())?;
                set_mode(&mut mode, Mode::Trigram(value))?;
            }
            "--question" | "-q" => {
                let value = args.next().ok_or_else(|| "error: --question expects a value".to_string())?;
                set_question(&mut question, value)?;
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_question(&mut question, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--seed=") => seed = Some(parse_seed(arg.trim_start_matches("--seed="))?),
            _ if arg.starts_with("--at=") => at = Some(parse_at(arg.trim_start_matches("--at="))?),
            _ if arg.starts_with("--id=") => set_mode(&mut mode, Mode::Id(parse_id(arg.trim_start_matches("--id="))?))?,
            _ if arg.starts_with("--key=") => {
                set_mode(&mut mode, Mode::Key(arg.trim_start_matches("--key=").to_string()))?;
            }
            _ if arg.starts_with("--question=") => {
                set_question(&mut question, arg.trim_start_matches("--question=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg.clone()).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                set_question(&mut question, rest)?;
                break;
            }
        }
    }

    let mode = match mode {
        Some(mode) => {
            if question.is_some() {
                return Err("error: a question only applies to readings".to_string());
            }
            mode
        }
        None => {
            let question = match question {
                Some(value) => value,
                None => read_stdin_question()?,
            };
            Mode::Reading { question: question.trim().to_string() }
        }
    };

    Ok(CliConfig { mode, seed, at, strict, json, verbose, color })
}

fn set_mode(slot: &mut Option<Mode>, mode: Mode) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: --id, --key, --trigram and --check are mutually exclusive".to_string());
    }
    *slot = Some(mode);
    Ok(())
}

fn set_question(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: question provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

/// Questions are optional: an interactive terminal yields an empty one.
fn read_stdin_question() -> Result<String, String> {
    if io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value.parse().map_err(|_| format!("error: invalid --seed '{value}' (expected an unsigned integer)"))
}

fn parse_id(value: &str) -> Result<u8, String> {
    value.parse().map_err(|_| format!("error: invalid --id '{value}' (expected 1-64)"))
}

fn parse_at(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("error: invalid --at '{value}' (expected RFC 3339, e.g. 2024-01-01T12:00:00Z)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "hexcast {version}

Three-coin hexagram casting CLI.

Usage:
  hexcast [OPTIONS] [--] [question...]
  hexcast [OPTIONS] --question <text>
  hexcast [OPTIONS] --id <n> | --key <bits> | --trigram <name> | --check

Options:
  -q, --question <text>      Question to record on the reading. If omitted, reads
                             remaining args, or stdin when it is not a terminal.
  --seed <n>                 Seed the coin tosses for a reproducible reading.
  --at <timestamp>           Timestamp to stamp on the reading (RFC 3339).
                             Default: now.
  --strict                   Fail instead of falling back when a key has no entry.
  -v, --verbose              Include the per-line cast trace.
  --json                     Print JSON instead of the terminal report.
  --id <n>                   Show hexagram <n> (1-64).
  --key <bits>               Show the hexagram for six 0/1 characters, bottom first.
  --trigram <name>           Show a trigram (e.g. Heaven, kan, ☲).
  --check                    Validate the registry.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter (default: warn), e.g. hexcast=debug.

Exit codes:
  0  Success.
  1  Lookup failure, strict-mode gap, or registry issues.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
