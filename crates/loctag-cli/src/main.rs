use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use loctag_core::{ExcludePattern, TagConfig};

#[derive(Parser)]
#[command(name = "loctag")]
#[command(about = "loctag — trace rendered markup elements back to source")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inject location attributes into source files
    Tag {
        /// Input files
        paths: Vec<String>,

        /// Rewrite files in place instead of printing to stdout
        #[arg(long)]
        write: bool,

        #[command(flatten)]
        options: TagArgs,
    },

    /// List the elements that would be tagged, without writing
    Check {
        /// Input files
        paths: Vec<String>,

        #[command(flatten)]
        options: TagArgs,
    },
}

#[derive(Args)]
struct TagArgs {
    /// Attribute prefix; the injected attribute is data-<prefix>-id
    #[arg(long, default_value = "loc")]
    prefix: String,

    /// Project root for relative paths (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Eligible file extension (repeatable; defaults to .tsx and .jsx)
    #[arg(long = "include", value_name = "EXT")]
    include: Vec<String>,

    /// Skip paths containing this substring (repeatable)
    #[arg(long = "exclude", value_name = "SUBSTR")]
    exclude: Vec<String>,

    /// Skip paths matching this regex (repeatable)
    #[arg(long = "exclude-regex", value_name = "REGEX")]
    exclude_regex: Vec<String>,

    /// Log each tagged element
    #[arg(long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Tag {
            paths,
            write,
            options,
        } => cmd_tag(&paths, write, &options),
        Command::Check { paths, options } => cmd_check(&paths, &options),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Build one file's configuration from the shared CLI flags.
/// Running the tool is the opt-in, so `enabled` is always on here.
fn build_config(args: &TagArgs, path: &str) -> TagConfig {
    let mut config = TagConfig {
        enabled: Some(true),
        prefix_name: args.prefix.clone(),
        debug: args.debug,
        filename: absolutize(path),
        project_root: args.root.clone(),
        ..TagConfig::default()
    };
    if !args.include.is_empty() {
        config.include = args.include.clone();
    }
    for substring in &args.exclude {
        config.exclude.push(ExcludePattern::from(substring.clone()));
    }
    for pattern in &args.exclude_regex {
        match ExcludePattern::regex(pattern) {
            Ok(p) => config.exclude.push(p),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
    config
}

fn absolutize(path: &str) -> String {
    let p = Path::new(path);
    if p.is_absolute() {
        return path.to_string();
    }
    match std::env::current_dir() {
        Ok(dir) => dir.join(p).to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}

fn cmd_tag(paths: &[String], write: bool, options: &TagArgs) {
    if paths.is_empty() {
        eprintln!("Error: no input files");
        std::process::exit(1);
    }

    for path in paths {
        let source = read_source(path);
        let config = build_config(options, path);
        let output = loctag_lexical::tag_source(&source, &config);

        if write {
            if output == source {
                eprintln!("Unchanged: {path}");
                continue;
            }
            if let Err(e) = std::fs::write(path, &output) {
                eprintln!("Error writing {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Tagged: {path}");
        } else {
            print!("{output}");
        }
    }
}

fn cmd_check(paths: &[String], options: &TagArgs) {
    if paths.is_empty() {
        eprintln!("Error: no input files");
        std::process::exit(1);
    }

    for path in paths {
        let source = read_source(path);
        let config = build_config(options, path);
        let tagged = loctag_lexical::scan_source(&source, &config);

        for element in &tagged {
            println!("{} {}", element.tag_name, element.id);
        }
        eprintln!("{path}: {} element(s)", tagged.len());
    }
}
