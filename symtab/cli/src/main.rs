//! Report symbol sizes from `objdump -t` output.
//!
//! ## Usage
//!
//! ```bash
//! # Largest symbols first
//! objdump -t firmware.elf | symtab
//!
//! # Only objects in .bss, as HTML
//! symtab -i firmware.sym --filter objects --section .bss --output html
//!
//! # Generate shell completions
//! source <(COMPLETE=bash symtab)
//! ```

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, ValueEnum, ValueHint};
use symtab_lib::lines::read_lines;
use symtab_lib::{
    SortKey, SortOrder, SymbolFilter, SymbolTable, SymbolsError, render_html, render_json,
    render_terminal,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses disassembled application binaries and outputs some formatted data
#[derive(Parser, Debug)]
#[command(name = "symtab", version, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// The symbol table (`objdump -t` output) to parse; "-" reads stdin
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Keep only symbols of this type
    #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,

    /// Keep only symbols in this section (e.g. .bss)
    #[arg(short, long, value_name = "NAME")]
    section: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortArg::Size)]
    sort: SortArg,

    /// Sort ascending instead of descending
    #[arg(long)]
    ascending: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputArg::Terminal)]
    output: OutputArg,

    /// Heading for HTML output (defaults to the input file name)
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Disable colors (plain text output)
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
EXAMPLES:
  objdump -t app.elf | symtab                  # all symbols, largest first
  symtab -i app.sym -f functions               # functions only
  symtab -i app.sym -s .bss --sort name        # .bss symbols by name
  symtab -i app.sym -o html > symbols.html     # HTML report
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FilterArg {
    All,
    Objects,
    Functions,
    Files,
}

impl From<FilterArg> for SymbolFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => SymbolFilter::All,
            FilterArg::Objects => SymbolFilter::Objects,
            FilterArg::Functions => SymbolFilter::Functions,
            FilterArg::Files => SymbolFilter::Files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Size,
    Address,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Size => SortKey::Size,
            SortArg::Address => SortKey::Address,
            SortArg::Name => SortKey::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Terminal,
    Html,
    Json,
}

const DEFAULT_TITLE: &str = "Symbol Table";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Handle dynamic completions (COMPLETE env var) before parsing
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(table) = load_table(cli.input.as_deref())? else {
        eprintln!("ERROR: missing input file");
        Cli::command().print_long_help()?;
        std::process::exit(1);
    };

    let mut table = table.filter(cli.filter.into());
    if let Some(section) = cli.section.as_deref() {
        table = table.in_section(section);
    }
    let order = if cli.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    table.sort_by(cli.sort.into(), order);
    info!(entries = table.len(), total_size = table.total_size(), "report ready");

    let rendered = match cli.output {
        OutputArg::Terminal => {
            let colored = !cli.plain && io::stdout().is_terminal();
            render_terminal(&table, colored)
        }
        OutputArg::Json => {
            let mut json = render_json(&table)?;
            json.push('\n');
            json
        }
        OutputArg::Html => render_html(&table, &html_title(&cli)),
    };

    io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}

/// Loads the table from `--input`, or from piped stdin when no input is
/// given. Returns `None` when there is nothing to read.
fn load_table(input: Option<&Path>) -> Result<Option<SymbolTable>, SymbolsError> {
    match input {
        Some(path) if path == Path::new("-") => {
            SymbolTable::from_reader(io::stdin().lock()).map(Some)
        }
        Some(path) => SymbolTable::from_file(path).map(Some),
        None if !io::stdin().is_terminal() => {
            let lines = read_lines(io::stdin().lock()).map_err(SymbolsError::Read)?;
            if lines.is_empty() {
                Ok(None)
            } else {
                Ok(Some(SymbolTable::from_lines(&lines)))
            }
        }
        None => Ok(None),
    }
}

fn html_title(cli: &Cli) -> String {
    if let Some(title) = &cli.title {
        return title.clone();
    }
    cli.input
        .as_deref()
        .filter(|p| *p != Path::new("-"))
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,symtab_lib=info,symtab=info".to_string(),
            2 => "info,symtab_lib=debug,symtab=debug".to_string(),
            _ => "debug,symtab_lib=trace,symtab=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}
