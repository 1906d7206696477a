use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug};
use pairalign::alignment::{AlignMode, Aligner, GapModel, GetCode, MatchMismatch};
use std::process::ExitCode;

const PROGRAM: &str = "pairalign";

/// Computes an optimal pairwise alignment of two sequences.
#[derive(Parser, Debug)]
#[command(name = PROGRAM, version, about)]
struct Cli {
    /// The first sequence (consumed by `D` states)
    a: String,

    /// The second sequence (consumed by `I` states)
    b: String,

    /// The alignment semantics
    #[arg(short, long, value_enum, default_value_t = Mode::Global)]
    mode: Mode,

    /// Score for a pair of equal residues
    #[arg(long = "match", value_name = "INT", default_value_t = 1, allow_negative_numbers = true)]
    matching: i32,

    /// Score for a pair of unequal residues
    #[arg(long, value_name = "INT", default_value_t = -1, allow_negative_numbers = true)]
    mismatch: i32,

    /// Linear penalty per gap symbol
    #[arg(long, value_name = "INT", allow_negative_numbers = true, conflicts_with_all = ["gap_open", "gap_extend"])]
    gap: Option<i32>,

    /// Affine penalty for opening a gap run
    #[arg(long, value_name = "INT", allow_negative_numbers = true, requires = "gap_extend")]
    gap_open: Option<i32>,

    /// Affine penalty for every symbol in a gap run
    #[arg(long, value_name = "INT", allow_negative_numbers = true, requires = "gap_open")]
    gap_extend: Option<i32>,

    /// Reject inputs needing more matrix cells than this
    #[arg(long, value_name = "NUM")]
    max_cells: Option<usize>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Global,
    Local,
    Semiglobal,
}

impl From<Mode> for AlignMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Global => AlignMode::Global,
            Mode::Local => AlignMode::Local,
            Mode::Semiglobal => AlignMode::Semiglobal,
        }
    }
}

impl Cli {
    fn gap_model(&self) -> GapModel<i32> {
        match (self.gap, self.gap_open, self.gap_extend) {
            (_, Some(open), Some(extend)) => GapModel::affine(open, extend),
            (Some(cost), ..) => GapModel::linear(cost),
            _ => GapModel::linear(-1),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let mut aligner = Aligner::new(
        cli.mode.into(),
        MatchMismatch::new(cli.matching, cli.mismatch),
        cli.gap_model(),
    );
    if let Some(max_cells) = cli.max_cells {
        aligner = aligner.with_max_cells(max_cells);
    }
    debug!("{aligner:?}");

    let (a, b) = (cli.a.as_bytes(), cli.b.as_bytes());
    let alignment = match aligner.align(a, b) {
        Ok(alignment) => alignment,
        Err(e) => {
            eprintln!("{PROGRAM} ERROR! {e}");
            return ExitCode::from(u8::try_from(e.get_code()).unwrap_or(1));
        }
    };

    let (gapped_a, gapped_b) = alignment.view_bytes(a, b);
    println!("score\t{}", alignment.score);
    println!("states\t{}", alignment.states);
    println!("a_range\t{:?}", alignment.a_range);
    println!("b_range\t{:?}", alignment.b_range);
    println!("{}", String::from_utf8_lossy(&gapped_a));
    println!("{}", String::from_utf8_lossy(&gapped_b));

    ExitCode::SUCCESS
}
