use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pathfinder_tools::config::{InputOptions, OutputFormat, TallyConfig};
use pathfinder_tools::{Result, logging, tally};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)?;

    let config = cli.to_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tally::calculate_experience(&cli.data, &config, &mut out)?;
    Ok(())
}

#[derive(Parser)]
#[command(author, version, about = "Totals experience by player.")]
struct Cli {
    /// Input CSV or Excel workbook.
    data: PathBuf,

    /// Keyword indicating global experience.
    #[arg(long = "all", default_value = "All", env = "PATHFINDER_EXP_ALL")]
    all: String,

    /// Column holding the comma-delimited character list.
    #[arg(long, default_value = "Characters")]
    tags_column: String,

    /// Column holding the experience value.
    #[arg(long, default_value = "Total")]
    value_column: String,

    /// Field delimiter for delimited text input.
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Worksheet to read from Excel input (defaults to the first sheet).
    #[arg(long)]
    sheet: Option<String>,

    /// How to print the totals.
    #[arg(long, value_enum, default_value_t = FormatKind::Table)]
    format: FormatKind,

    /// Also write the totals to this Excel workbook.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Do not print the parsed rows before the totals.
    #[arg(long)]
    no_rows: bool,

    /// Increase logging verbosity (repeatable). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatKind {
    Table,
    Json,
}

impl From<FormatKind> for OutputFormat {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Table => OutputFormat::Table,
            FormatKind::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn to_config(&self) -> TallyConfig {
        TallyConfig {
            sentinel: self.all.clone(),
            input: InputOptions {
                tags_column: self.tags_column.clone(),
                value_column: self.value_column.clone(),
                delimiter: self.delimiter,
                sheet: self.sheet.clone(),
            },
            format: self.format.into(),
            show_rows: !self.no_rows,
            workbook: self.output.clone(),
        }
    }
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
        },
    }
}
