//! CLI entry point for dirdoc

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use dirdoc::{
    Classifier, Dialect, Error, GenerationSettings, Generator, Result, Settings, TreeStyle,
    WatchConfig, logging, watch,
};
use tracing::debug;

/// Tree drawing style
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    /// `+`/`-` markers with indentation
    Simple,
    /// Unicode box-drawing connectors
    Box,
    /// ASCII connectors
    Ascii,
}

impl From<StyleArg> for TreeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Simple => TreeStyle::Simple,
            StyleArg::Box => TreeStyle::BoxDrawing,
            StyleArg::Ascii => TreeStyle::AsciiExtended,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirdoc")]
#[command(about = "Document a project's directory structure as text or markdown")]
#[command(version)]
struct Args {
    /// Directories to document
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Settings file (default: dirdoc.toml in the first directory, if present)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the document to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Include hidden files and directories
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Exclude entries matching pattern (can be used multiple times, replaces configured patterns)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Show only Python modules, packages and directories
    #[arg(short = 'p', long = "python-only", conflicts_with = "all_files")]
    python_only: bool,

    /// Show every file, not only Python modules
    #[arg(long = "all-files")]
    all_files: bool,

    /// Leave out the "Generated:" line
    #[arg(long = "no-timestamp")]
    no_timestamp: bool,

    /// Leave out the directory and file counts
    #[arg(long = "no-summary")]
    no_summary: bool,

    /// Hide directories with nothing to show
    #[arg(long = "no-empty-dirs")]
    no_empty_dirs: bool,

    /// Tree drawing style
    #[arg(short = 's', long = "style", value_name = "STYLE")]
    style: Option<StyleArg>,

    /// Output markdown (default for .md output files)
    #[arg(short = 'm', long = "markdown", conflicts_with = "text")]
    markdown: bool,

    /// Output plain text (default for stdout and non-.md files)
    #[arg(long = "text")]
    text: bool,

    /// Regenerate the output file whenever the project changes
    #[arg(short = 'w', long = "watch")]
    watch: bool,

    /// Quiet period before regenerating in watch mode
    /// Duration format: 500ms, 2s, 1m
    #[arg(long = "debounce", value_name = "DURATION", default_value = "2s")]
    debounce: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Parse a duration string like "500ms" or "2s" using humantime.
fn parse_duration_string(s: &str) -> std::result::Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Resolve a root argument to an existing directory.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = std::fs::canonicalize(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if !root.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "'{}' is not a directory",
            path.display()
        )));
    }
    Ok(root)
}

fn load_settings(args: &Args, first_root: &Path) -> Result<Settings> {
    if let Some(ref path) = args.config {
        return Settings::load(path);
    }
    match Settings::discover(first_root)? {
        Some(settings) => {
            debug!(root = %first_root.display(), "loaded settings file");
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}

/// Command-line flags win over the settings file.
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if args.all {
        settings.include_hidden = true;
    }
    if let Some(level) = args.level {
        settings.max_depth = i64::try_from(level).unwrap_or(i64::MAX);
    }
    if args.python_only {
        settings.python_files_only = true;
    }
    if args.all_files {
        settings.python_files_only = false;
    }
    if args.no_timestamp {
        settings.include_timestamp = false;
    }
    if args.no_summary {
        settings.include_file_count = false;
    }
    if args.no_empty_dirs {
        settings.include_empty_dirs = false;
    }
    if let Some(style) = args.style {
        settings.tree_style = style.into();
    }
}

/// `-I` patterns are taken verbatim, so a comma inside one is literal.
fn apply_exclude_override(generation: &mut GenerationSettings, args: &Args) {
    if !args.exclude.is_empty() {
        generation.exclude_patterns = args.exclude.clone();
    }
}

fn dialect_for(args: &Args, output: Option<&Path>) -> Dialect {
    if args.markdown {
        Dialect::Markdown
    } else if args.text {
        Dialect::Text
    } else {
        output.map(Dialect::from_path).unwrap_or(Dialect::Text)
    }
}

fn run(args: &Args) -> Result<()> {
    let roots = args
        .paths
        .iter()
        .map(|p| resolve_root(p))
        .collect::<Result<Vec<_>>>()?;
    let first_root = roots
        .first()
        .ok_or_else(|| Error::InvalidArgument("no directory given".to_string()))?;

    let mut settings = load_settings(args, first_root)?;
    apply_overrides(&mut settings, args);

    // Watching always writes a file, falling back to the configured one
    let watching = args.watch || settings.auto_update;
    let output = match args.output {
        Some(ref path) => Some(path.clone()),
        None if watching || !settings.output_path.is_empty() => {
            Some(settings.output_file(first_root))
        }
        None => None,
    };

    let dialect = dialect_for(args, output.as_deref());
    let mut generation = settings.generation_settings();
    apply_exclude_override(&mut generation, args);
    let classifier = Classifier::default();
    let module_extension = generation
        .include_module_files_only
        .then(|| classifier.module_extension.clone());
    let generator = Generator::new(roots, generation, dialect).with_classifier(classifier);

    match output {
        Some(path) if watching => {
            let debounce = parse_duration_string(&args.debounce).map_err(|e| {
                Error::InvalidArgument(format!("invalid --debounce '{}': {}", args.debounce, e))
            })?;
            let config = WatchConfig::new(path)
                .with_debounce(debounce)
                .with_module_extension(module_extension);
            watch(&generator, &config)
        }
        Some(path) => generator.write_to(&path),
        None => {
            let content = generator.generate();
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| Error::Io {
                    path: PathBuf::from("<stdout>"),
                    source: e,
                })
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("dirdoc: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("dirdoc: {}", e);
        process::exit(1);
    }
}
