use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use madcolor::color::{
    ColorSelector, ColorTable, DEFAULT_MAX_ATTEMPTS, SelectOptions, Thresholds,
};
use madcolor::input::read_text;
use madcolor::logging;
use madcolor::mode::{ColorizeConfig, Scheme, colorize, list_table, measure};
use madcolor::output::{copy_to_clipboard, print_error, print_warning, write_output};
use madcolor::render::{render_ansi, render_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// <div> of <span> elements
    Html,
    /// 24-bit terminal colors
    Ansi,
}

#[derive(Debug, Parser)]
#[command(
    name = "madcolor",
    version,
    about = "Colorize text one character at a time, with contrast-aware color picking",
    after_help = "Examples:
  madcolor -t 'hello world'                        Random named colors as HTML
  madcolor -t 'hello' -b white -c 50 --distance 20 Readable-ish colors on white
  madcolor -a -i -f notes.txt -o notes.html        Invented colors on complements
  madcolor --drift --format ansi -t 'psychedelic'  Preview in the terminal
  madcolor --measure tomato '#123'                 Distance and contrast of two colors
  madcolor --list -b black                         Named colors measured against black"
)]
struct Args {
    /// Text to colorize (reads --input, or stdin, when omitted)
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'f', long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also copy the output to the system clipboard
    #[arg(long)]
    clip: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Fixed background color (name, #rrggbb or #rgb)
    #[arg(short, long, value_name = "COLOR")]
    background: Option<String>,

    /// Set each background to the complement of its foreground
    #[arg(short, long, conflicts_with_all = ["background", "drift"])]
    anti: bool,

    /// Use each character's background as the next one's foreground
    #[arg(long, conflicts_with = "background")]
    drift: bool,

    /// Randomly generate colors rather than pick named ones
    #[arg(short, long)]
    invent: bool,

    /// Minimum contrast, percent (100 = equal luminance)
    #[arg(short, long, default_value_t = 36, value_name = "PCT",
          value_parser = clap::value_parser!(u8).range(0..=100))]
    contrast: u8,

    /// Minimum RGB distance, percent of black-to-white
    #[arg(long, default_value_t = 19, value_name = "PCT",
          value_parser = clap::value_parser!(u8).range(0..=100))]
    distance: u8,

    /// Random draws before falling back to white on black
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_name = "N")]
    max_attempts: usize,

    /// Minimum foreground brightness (sum of channels, 0-765)
    #[arg(long, default_value_t = 0, value_name = "SUM",
          value_parser = clap::value_parser!(u16).range(0..=765))]
    min_brightness: u16,

    /// Maximum foreground brightness (sum of channels, 0-765)
    #[arg(long, default_value_t = 765, value_name = "SUM",
          value_parser = clap::value_parser!(u16).range(0..=765))]
    max_brightness: u16,

    /// Seed the random generator for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// List the named colors and exit
    #[arg(long, conflicts_with = "measure")]
    list: bool,

    /// Print distance and contrast between two colors and exit
    #[arg(long, num_args = 2, value_names = ["COLOR_A", "COLOR_B"])]
    measure: Option<Vec<String>>,

    /// Debug-level log messages
    #[arg(short, long)]
    verbose: bool,

    /// Trace-level log messages, including every chosen color
    #[arg(short, long)]
    debug: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Write log messages to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn select_options(&self) -> SelectOptions {
        SelectOptions {
            max_attempts: self.max_attempts,
            brightness: self.min_brightness..=self.max_brightness,
        }
    }

    fn thresholds(&self) -> Thresholds {
        Thresholds::from_percentages(self.contrast, self.distance)
    }
}

fn emit(rendered: &str, args: &Args) {
    if let Err(e) = write_output(rendered, args.output.as_deref()) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
    if args.clip
        && let Err(e) = copy_to_clipboard(rendered)
    {
        print_warning(&e.to_string());
    }
}

// Mode: list the named colors
fn run_list(table: &ColorTable, args: &Args) {
    let against = args.background.as_deref().map(|s| {
        let (color, ok) = table.parse_color(s);
        if !ok {
            print_warning(&format!("unrecognized color '{}', using {}", s, color));
        }
        (color, args.thresholds())
    });
    emit(&list_table(table, against), args);
}

// Mode: measure two colors
fn run_measure(table: &ColorTable, a: &str, b: &str, args: &Args) {
    match measure(table, a, b, args.thresholds()) {
        Ok(report) => emit(&report, args),
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

// Mode: colorize text
fn run_colorize(table: &ColorTable, args: &Args) {
    let text = read_text(args.text.as_deref(), args.input.as_deref()).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    let scheme = if args.anti {
        Scheme::Anti
    } else if args.drift {
        Scheme::Drift
    } else if let Some(ref bg) = args.background {
        let (color, ok) = table.parse_color(bg);
        if !ok {
            print_warning(&format!("unrecognized color '{}', using {}", bg, color));
        }
        Scheme::OnBackground(color)
    } else {
        Scheme::Plain
    };

    let config = ColorizeConfig {
        scheme,
        invent: args.invent,
        contrast_pct: args.contrast,
        distance_pct: args.distance,
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut selector = ColorSelector::new(table, args.select_options(), rng);

    tracing::debug!(?config, chars = text.chars().count(), "colorizing");
    let result = colorize(&text, &config, &mut selector);
    if result.fallbacks > 0 {
        tracing::warn!(
            count = result.fallbacks,
            "no contrasting color found for some characters, used white on black"
        );
    }

    let rendered = match args.format {
        Format::Html => render_html(&result.glyphs),
        Format::Ansi => render_ansi(&result.glyphs),
    };
    emit(&rendered, args);
}

fn main() {
    let args = Args::parse();

    // Handle --no-color; ANSI output is explicitly requested otherwise
    if args.no_color {
        colored::control::set_override(false);
    } else if args.format == Format::Ansi {
        colored::control::set_override(true);
    }

    let level = logging::level_for(args.verbose, args.debug, args.quiet);
    if let Err(e) = logging::init(level, args.log.as_deref()) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
    tracing::debug!(?args, "parsed arguments");

    // Validate option combinations
    if args.max_attempts == 0 {
        print_error("--max-attempts must be positive");
        std::process::exit(1);
    }

    if args.min_brightness > args.max_brightness {
        print_error("--min-brightness cannot exceed --max-brightness");
        std::process::exit(1);
    }

    if args.format == Format::Ansi && (args.list || args.measure.is_some()) {
        print_error("--format can only be used when colorizing text");
        std::process::exit(1);
    }

    let table = ColorTable::global();

    // Dispatch to appropriate mode
    if args.list {
        run_list(table, &args);
    } else if let Some([a, b]) = args.measure.as_deref() {
        run_measure(table, a, b, &args);
    } else {
        run_colorize(table, &args);
    }
}
