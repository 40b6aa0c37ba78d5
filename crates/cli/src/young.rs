//! young - Inspect, transform and enumerate Young diagrams
//!
//! A diagram is given either by its boundary word (`--word RURUR`) or by its
//! row lengths (`--rows 2,1`, optionally inside a larger frame with
//! `--height`/`--width`).

mod report;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use young_core::diagram::tuple_string;
use young_core::{BinaryWord, YoungDiagram, YoungDiagrams};

use report::{DiagramReport, FamilyReport, InfoReport};

/// Output type for results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Human readable text (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Inspect, transform and enumerate Young diagrams in a rectangular frame.
#[derive(Parser, Debug)]
#[command(name = "young")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Use debug logging level
    #[arg(short = 'd', long, global = true, action = clap::ArgAction::SetTrue)]
    debug: bool,

    /// Type of output to generate
    #[arg(
        short = 't',
        long = "output-type",
        global = true,
        value_enum,
        default_value = "text"
    )]
    output_type: OutputType,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, global = true, default_value = "-")]
    outfile: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the diagram, its boundary word and a drawing
    Show(DiagramArgs),
    /// Print every numerical characteristic of the diagram
    Info(DiagramArgs),
    /// Swap rows and columns
    Transpose(DiagramArgs),
    /// Complement inside the frame, turned by half a turn
    Complement(DiagramArgs),
    /// Rotate the boundary word
    Rotate {
        #[command(flatten)]
        diagram: DiagramArgs,
        /// Number of steps to the right; negative rotates left
        #[arg(short = 's', long, default_value = "1", allow_hyphen_values = true)]
        steps: i64,
    },
    /// Append a second boundary word
    Concat {
        #[command(flatten)]
        diagram: DiagramArgs,
        /// Word of the diagram to append
        #[arg(long = "with")]
        other: String,
    },
    /// List the cyclic orbit of the diagram
    Orbit(DiagramArgs),
    /// Enumerate the diagrams of a frame
    Family {
        /// Frame height
        #[arg(long)]
        height: usize,
        /// Frame width
        #[arg(long)]
        width: usize,
        /// Only upper triangular diagrams
        #[arg(long, conflicts_with = "minimal")]
        upper_triangular: bool,
        /// One minimal upper triangular diagram per cyclic orbit
        #[arg(long)]
        minimal: bool,
    },
}

/// How a diagram is read from the command line.
#[derive(ClapArgs, Debug, Clone)]
struct DiagramArgs {
    /// Boundary word over R and U, e.g. RURUR
    #[arg(short = 'w', long, conflicts_with_all = ["rows", "height", "width"])]
    word: Option<String>,

    /// Comma-separated row lengths, top row first
    #[arg(short = 'r', long, value_delimiter = ',')]
    rows: Option<Vec<usize>>,

    /// Frame height (defaults to the number of rows)
    #[arg(long)]
    height: Option<usize>,

    /// Frame width (defaults to the longest row)
    #[arg(long)]
    width: Option<usize>,
}

impl DiagramArgs {
    fn to_diagram(&self) -> Result<YoungDiagram> {
        if let Some(ref word) = self.word {
            let word: BinaryWord = word.parse().context("invalid --word")?;
            return Ok(YoungDiagram::from_word(&word));
        }
        if self.rows.is_none() && self.height.is_none() && self.width.is_none() {
            bail!(
                "a diagram needs --word or --rows (or an empty --height/--width frame)"
            );
        }
        let rows = self.rows.clone().unwrap_or_default();
        let height = self.height.unwrap_or(rows.len());
        let width = self
            .width
            .unwrap_or_else(|| rows.iter().copied().max().unwrap_or(0));
        Ok(YoungDiagram::new(height, width, rows)?)
    }
}

fn init_tracing(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_diagram<W: Write>(
    out: &mut W,
    d: &YoungDiagram,
    output_type: OutputType,
) -> Result<()> {
    match output_type {
        OutputType::Text => {
            writeln!(out, "{d}")?;
            writeln!(out, "word: {}", d.word())?;
        }
        OutputType::Json => write_json(out, &DiagramReport::from(d))?,
    }
    Ok(())
}

fn write_diagrams<W: Write>(
    out: &mut W,
    diagrams: &[YoungDiagram],
    output_type: OutputType,
) -> Result<()> {
    match output_type {
        OutputType::Text => {
            for d in diagrams {
                writeln!(out, "{}  {}", d.word(), tuple_string(d.row_lengths()))?;
            }
        }
        OutputType::Json => {
            let reports: Vec<DiagramReport> =
                diagrams.iter().map(DiagramReport::from).collect();
            write_json(out, &reports)?;
        }
    }
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn write_info<W: Write>(
    out: &mut W,
    d: &YoungDiagram,
    output_type: OutputType,
) -> Result<()> {
    let info = InfoReport::from(d);
    if let OutputType::Json = output_type {
        return write_json(out, &info);
    }
    writeln!(out, "{d}")?;
    writeln!(out, "height: {}", info.height)?;
    writeln!(out, "width: {}", info.width)?;
    writeln!(out, "n: {}", info.half_perimeter)?;
    writeln!(out, "rows: {}", tuple_string(&info.rows))?;
    writeln!(out, "columns: {}", tuple_string(&info.columns))?;
    writeln!(out, "volume: {}", info.volume)?;
    writeln!(out, "word: {}", info.word)?;
    writeln!(out, "slope: {}", optional(info.slope))?;
    writeln!(out, "orbit length: {}", info.orbit_length)?;
    writeln!(out, "upper triangular: {}", optional(info.upper_triangular))?;
    writeln!(out, "lower triangular: {}", optional(info.lower_triangular))?;
    writeln!(
        out,
        "steps to next lower triangular: {}",
        info.steps_to_next_lower_triangular
    )?;
    Ok(())
}

fn run<W: Write>(
    command: &Command,
    out: &mut W,
    output_type: OutputType,
) -> Result<()> {
    match command {
        Command::Show(args) => {
            let d = args.to_diagram()?;
            match output_type {
                OutputType::Text => {
                    write_diagram(out, &d, output_type)?;
                    if let Some(table) = d.render() {
                        write!(out, "{table}")?;
                    }
                }
                OutputType::Json => write_diagram(out, &d, output_type)?,
            }
        }
        Command::Info(args) => write_info(out, &args.to_diagram()?, output_type)?,
        Command::Transpose(args) => {
            write_diagram(out, &args.to_diagram()?.transpose(), output_type)?
        }
        Command::Complement(args) => {
            write_diagram(out, &args.to_diagram()?.complement(), output_type)?
        }
        Command::Rotate { diagram, steps } => {
            let d = diagram.to_diagram()?;
            debug!(%d, steps, "rotating");
            write_diagram(out, &d.cyclic_action(*steps), output_type)?
        }
        Command::Concat { diagram, other } => {
            let other: YoungDiagram = other.parse().context("invalid --with")?;
            write_diagram(out, &diagram.to_diagram()?.concat(&other), output_type)?
        }
        Command::Orbit(args) => {
            let orbit: Vec<_> = args.to_diagram()?.cyclic_orbit().collect();
            write_diagrams(out, &orbit, output_type)?
        }
        Command::Family {
            height,
            width,
            upper_triangular,
            minimal,
        } => {
            let family = YoungDiagrams::new(*height, *width);
            let diagrams: Vec<_> = if *minimal {
                family.minimal_upper_triangulars()?.collect()
            } else if *upper_triangular {
                family.upper_triangulars()?.collect()
            } else {
                family.iter().collect()
            };
            debug!(%family, count = diagrams.len(), "enumerated");
            match output_type {
                OutputType::Text => {
                    writeln!(out, "{family}")?;
                    write_diagrams(out, &diagrams, output_type)?;
                }
                OutputType::Json => {
                    write_json(out, &FamilyReport::new(&family, &diagrams))?
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let result = (|| -> Result<()> {
        let mut output: Box<dyn Write> = if args.outfile == "-" {
            Box::new(BufWriter::new(io::stdout()))
        } else {
            let file = File::create(&args.outfile).with_context(|| {
                format!("failed to create output file {}", args.outfile)
            })?;
            Box::new(BufWriter::new(file))
        };
        run(&args.command, &mut output, args.output_type)?;
        output.flush()?;
        Ok(())
    })();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
