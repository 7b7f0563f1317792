// Idiomatic Rust CLI for Oxirle.
//
// Thin glue over the library core: parses an encoded sequence from the
// command line or from a file of raw bytes, builds a sliding window, and
// renders it to stdout. Uses explicit subcommands and long-form options.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::rle::{Run, RunIndex, SlidingWindow, decode_all};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Built-in sample for `demo`: four 2s, the literals 5,1,2, five 9s.
const DEMO_DATA: &[i8] = &[4, 2, -3, 5, 1, 2, 5, 9];

/// Width large enough to show any demo sequence in full.
const DEMO_FULL_WIDTH: usize = 9999;

// ---------------------------------------------------------------------------
// Encoded-sequence parsing
// ---------------------------------------------------------------------------

fn parse_encoded_list(s: &str) -> Result<Vec<i8>, String> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<i8>()
                .map_err(|e| format!("invalid encoded value '{tok}': {e}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Streaming RLE decoder with a scrollable viewport.
#[derive(Parser, Debug)]
#[command(
    name = "oxirle",
    version,
    about = "Streaming RLE decoder with a scrollable viewport",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Fully expand an encoded sequence and print it.
    Expand(InputArgs),
    /// Scroll a window across an encoded sequence.
    View(ViewArgs),
    /// Print run/literal statistics for an encoded sequence.
    Info(InputArgs),
    /// Print the built-in sample session.
    Demo,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Encoded sequence as comma-separated signed bytes, e.g. "4,2,-3,5,1,2,5,9".
    #[arg(
        value_name = "ENCODED",
        required_unless_present = "input",
        allow_hyphen_values = true
    )]
    values: Option<String>,

    /// Read the encoded sequence from a file of raw bytes instead.
    #[arg(
        short = 'i',
        long,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        conflicts_with = "values"
    )]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ViewArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Viewport width in decoded values.
    #[arg(short = 'w', long, default_value_t = 8)]
    width: usize,

    /// Step script applied after the initial fill: 'r' shifts right, 'l' left.
    #[arg(short = 's', long, value_name = "SCRIPT", default_value = "")]
    steps: String,
}

/// Global flags shared by every command.
#[derive(Debug, Clone, Copy)]
struct Options {
    quiet: bool,
    verbose: u8,
    json_output: bool,
}

// ---------------------------------------------------------------------------
// Input loading and rendering
// ---------------------------------------------------------------------------

fn load_encoded(args: &InputArgs) -> Result<Vec<i8>, String> {
    if let Some(path) = &args.input {
        let bytes = fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
        Ok(bytes.into_iter().map(|b| b as i8).collect())
    } else {
        parse_encoded_list(args.values.as_deref().unwrap_or_default())
    }
}

fn render_values(values: impl IntoIterator<Item = i8>) -> String {
    let rendered: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    rendered.join(" ")
}

/// One window line: left padding while the window is clipped against the
/// left boundary, then the buffered values.
fn render_window(window: &SlidingWindow) -> String {
    let padding = window.left_padding().min(window.virtual_len());
    format!("{}{}", " ".repeat(padding), render_values(window.iter()))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_expand(opts: &Options, args: &InputArgs) -> i32 {
    let encoded = match load_encoded(args) {
        Ok(encoded) => encoded,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };
    let decoded = match decode_all(&encoded) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };
    println!("{}", render_values(decoded.iter().copied()));
    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "oxirle: expand: {} encoded bytes, {} decoded values",
            encoded.len(),
            decoded.len()
        );
    }
    0
}

fn cmd_view(opts: &Options, args: &ViewArgs) -> i32 {
    if let Some(bad) = args.steps.chars().find(|&c| c != 'r' && c != 'l') {
        eprintln!("oxirle: --steps: invalid step '{bad}' (expected 'r' or 'l')");
        return 1;
    }
    let encoded = match load_encoded(&args.input) {
        Ok(encoded) => encoded,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };
    let mut window = match SlidingWindow::new(&encoded, args.width) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };

    println!("  {}", render_window(&window));
    let mut refused = 0usize;
    for step in args.steps.chars() {
        let moved = match step {
            'r' => window.step_right(),
            _ => window.step_left(),
        };
        if moved {
            println!("{step} {}", render_window(&window));
        } else {
            refused += 1;
            println!("{step} {} (boundary)", render_window(&window));
        }
    }

    if opts.json_output {
        let stats = serde_json::json!({
            "width": window.width(),
            "window_len": window.len(),
            "virtual_len": window.virtual_len(),
            "steps": args.steps.len(),
            "refused": refused,
            "at_start": window.at_start(),
            "at_end": window.at_end(),
        });
        eprintln!("{stats}");
    }
    0
}

fn cmd_info(opts: &Options, args: &InputArgs) -> i32 {
    let encoded = match load_encoded(args) {
        Ok(encoded) => encoded,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };
    let index = match RunIndex::parse(&encoded) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };

    let repeat_runs = index
        .runs()
        .filter(|r| matches!(r, Run::Repeat { .. }))
        .count();
    let literal_runs = index.run_count() - repeat_runs;

    if opts.json_output {
        let stats = serde_json::json!({
            "encoded_len": encoded.len(),
            "runs": index.run_count(),
            "repeat_runs": repeat_runs,
            "literal_runs": literal_runs,
            "stored_literals": index.literal_count(),
            "virtual_len": index.virtual_len(),
        });
        println!("{stats}");
    } else {
        println!("encoded bytes:   {}", encoded.len());
        println!("runs:            {}", index.run_count());
        println!("  repeat runs:   {repeat_runs}");
        println!("  literal runs:  {literal_runs}");
        println!("stored literals: {}", index.literal_count());
        println!("virtual length:  {}", index.virtual_len());
    }
    0
}

fn cmd_demo(opts: &Options) -> i32 {
    println!("Encoded: {}", render_values(DEMO_DATA.iter().copied()));

    // Whole sequence in one oversized window.
    match SlidingWindow::new(DEMO_DATA, DEMO_FULL_WIDTH) {
        Ok(window) => println!("Decoded: {}\n", render_values(window.iter())),
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    }

    // Short forward/backward walk.
    println!("2 fwd, 2 back (window 5):");
    let mut window = match SlidingWindow::new(DEMO_DATA, 5) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };
    println!("{}", render_window(&window));
    for _ in 0..2 {
        window.step_right();
        println!("{}", render_window(&window));
    }
    for _ in 0..2 {
        window.step_left();
        println!("{}", render_window(&window));
    }
    println!();

    // Full scroll to the right edge and back.
    println!("To end, back to begin (window 8):");
    let mut window = match SlidingWindow::new(DEMO_DATA, 8) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("oxirle: {e}");
            return 1;
        }
    };
    println!("{}", render_window(&window));
    while window.step_right() {
        println!("{}", render_window(&window));
    }
    while window.step_left() {
        println!("{}", render_window(&window));
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "oxirle: demo: {} encoded bytes, virtual length {}",
            DEMO_DATA.len(),
            window.virtual_len()
        );
    }
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let opts = Options {
        quiet: cli.quiet,
        verbose: cli.verbose,
        json_output: cli.json_output,
    };

    let exit_code = match &cli.command {
        Cmd::Expand(args) => cmd_expand(&opts, args),
        Cmd::View(args) => cmd_view(&opts, args),
        Cmd::Info(args) => cmd_info(&opts, args),
        Cmd::Demo => cmd_demo(&opts),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_encoded_list_values() {
        assert_eq!(
            parse_encoded_list("4,2,-3,5,1,2,5,9").unwrap(),
            vec![4, 2, -3, 5, 1, 2, 5, 9]
        );
        assert_eq!(
            parse_encoded_list(" 1 , -128 , 127 ").unwrap(),
            vec![1, -128, 127]
        );
        assert_eq!(parse_encoded_list("").unwrap(), Vec::<i8>::new());
        assert!(parse_encoded_list("1,x").is_err());
        assert!(parse_encoded_list("128").is_err());
    }

    #[test]
    fn view_subcommand_maps_correctly() {
        let cli = Cli::try_parse_from([
            "oxirle",
            "view",
            "--width",
            "5",
            "--steps",
            "rrll",
            "4,2,-3,5,1,2,5,9",
        ])
        .expect("cli parse failed");
        match cli.command {
            Cmd::View(args) => {
                assert_eq!(args.width, 5);
                assert_eq!(args.steps, "rrll");
                assert_eq!(args.input.values.as_deref(), Some("4,2,-3,5,1,2,5,9"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn expand_requires_some_input() {
        assert!(Cli::try_parse_from(["oxirle", "expand"]).is_err());
        assert!(Cli::try_parse_from(["oxirle", "expand", "--input", "enc.bin"]).is_ok());
    }

    #[test]
    fn demo_data_is_well_formed() {
        let index = RunIndex::parse(DEMO_DATA).unwrap();
        assert_eq!(index.run_count(), 3);
        assert_eq!(index.virtual_len(), 12);
    }
}
