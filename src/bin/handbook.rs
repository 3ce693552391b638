//! Terminal front end for the math handbook.
//!
//! One-shot mode renders the filtered view for `--search`/`--category` and
//! exits. `--interactive` keeps a `FilterState` alive and re-renders after
//! every line read from stdin, the way the handbook screen recomputes on every
//! keystroke or tab tap.

use anyhow::{Context, Result, anyhow, bail};
use math_handbook::render::render_view;
use math_handbook::{
    Catalog, CategorySelection, FilterState, derive_categories, filter_concepts, load_catalog,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    init_logging(cli.verbose)?;

    let catalog = load_catalog(cli.catalog_path.as_deref())?;
    debug!(records = catalog.len(), "catalog ready");

    let mut state = FilterState::new();
    if let Some(search) = cli.search {
        state.set_search_text(search);
    }
    if let Some(category) = cli.category {
        state.select_category(CategorySelection::from_text(&category));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        Output::Categories => {
            for category in derive_categories(&catalog) {
                writeln!(out, "{category}")?;
            }
        }
        Output::Json => {
            for record in filter_concepts(&catalog, &state.query()) {
                let line = serde_json::to_string(record).context("serializing concept")?;
                writeln!(out, "{line}")?;
            }
        }
        Output::Text => write_view(&catalog, &state, &mut out)?,
        Output::Interactive => {
            let stdin = io::stdin();
            run_interactive(&catalog, &mut state, stdin.lock(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(())
}

fn write_view(catalog: &Catalog, state: &FilterState, out: &mut impl Write) -> Result<()> {
    let mut rendered = String::new();
    render_view(catalog.title(), &state.view(catalog), &mut rendered)
        .map_err(|_| anyhow!("rendering view"))?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Apply one command per input line and re-render after each.
fn run_interactive<R: BufRead, W: Write>(
    catalog: &Catalog,
    state: &mut FilterState,
    reader: R,
    out: &mut W,
) -> Result<()> {
    write_view(catalog, state, out)?;
    for line in reader.lines() {
        let line = line.context("reading stdin")?;
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Category(name) => state.select_category(CategorySelection::from_text(&name)),
            Command::AllCategories => state.select_category(CategorySelection::All),
            Command::Clear => state.clear(),
            Command::Search(text) => state.set_search_text(text),
        }
        writeln!(out)?;
        write_view(catalog, state, out)?;
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Category(String),
    AllCategories,
    Clear,
    Quit,
}

impl Command {
    /// Commands must start at column zero; anything else is search text as typed.
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line {
            "/quit" => Command::Quit,
            "/all" => Command::AllCategories,
            "/clear" => Command::Clear,
            _ => match line.strip_prefix("/category ") {
                Some(name) => Command::Category(name.trim().to_string()),
                None => Command::Search(line.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Output {
    Text,
    Json,
    Categories,
    Interactive,
}

#[derive(Debug)]
struct Cli {
    search: Option<String>,
    category: Option<String>,
    catalog_path: Option<PathBuf>,
    output: Output,
    verbose: u8,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();

        let mut search = None;
        let mut category = None;
        let mut catalog_path = None;
        let mut output = Output::Text;
        let mut verbose: u8 = 0;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--search" | "-s" => search = Some(next_value("--search", &mut args)?),
                "--category" | "-c" => {
                    let value = next_value("--category", &mut args)?;
                    category = Some(normalize_token(value, "--category")?);
                }
                "--catalog" => {
                    let value = next_value("--catalog", &mut args)?;
                    catalog_path = Some(PathBuf::from(normalize_token(value, "--catalog")?));
                }
                "--json" => output = set_output(output, Output::Json)?,
                "--list-categories" => output = set_output(output, Output::Categories)?,
                "--interactive" | "-i" => output = set_output(output, Output::Interactive)?,
                "--verbose" => verbose = verbose.saturating_add(1),
                flag if is_short_verbose(flag) => {
                    let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                    verbose = verbose.saturating_add(count);
                }
                "--help" | "-h" => usage(0),
                other => {
                    bail!("unknown argument: {other}");
                }
            }
        }

        Ok(Self {
            search,
            category,
            catalog_path,
            output,
            verbose,
        })
    }
}

/// `-v`, `-vv`, `-vvv`, ...
fn is_short_verbose(flag: &str) -> bool {
    flag.len() > 1
        && flag.starts_with('-')
        && flag[1..].chars().all(|c| c == 'v')
}

fn set_output(current: Output, requested: Output) -> Result<Output> {
    if current != Output::Text && current != requested {
        bail!("--json, --list-categories and --interactive are mutually exclusive");
    }
    Ok(requested)
}

fn next_value(flag: &str, args: &mut env::ArgsOs) -> Result<String> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?;
    value
        .into_string()
        .map_err(|_| anyhow!("{flag} value must be valid UTF-8"))
}

fn normalize_token(raw: String, flag: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("{flag} value must not be empty");
    }
    Ok(trimmed.to_string())
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: handbook [options]\n\nOptions:\n  -s, --search <text>       Case-insensitive match on title, description or formula.\n  -c, --category <name>     Restrict to one category (\"All\" disables the filter).\n      --catalog <path>      Load a catalog file (or set MATH_HANDBOOK_CATALOG).\n      --list-categories     Print the category tabs, one per line.\n      --json                Print matching concepts as NDJSON.\n  -i, --interactive         Read commands from stdin: /category <name>, /all, /clear, /quit;\n                            any other line becomes the search text.\n  -v, --verbose             Increase log verbosity (repeatable).\n  -h, --help                Show this help text.\n"
    );
    std::process::exit(code);
}
