//! glossa - linguistic annotation CLI
//!
//! Decodes SENNA-style tag tables into structured annotations: POS, NER,
//! chunking, semantic roles, constituency and (optionally) dependency
//! parses.
//!
//! # Usage
//!
//! ```bash
//! # Decode raw tagger output (no external tools needed)
//! senna < sentences.txt | glossa decode
//!
//! # Tag and annotate sentences with a SENNA installation
//! glossa annotate --senna-dir /opt/senna "John hit the ball."
//!
//! # Attach dependency parses via the Stanford extractor
//! glossa annotate --senna-dir /opt/senna \
//!     --dep-parse --parser-jar /opt/stanford/stanford-parser.jar \
//!     "John hit the ball."
//!
//! # Check collaborator availability
//! glossa info --senna-dir /opt/senna
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;

use glossa::{
    decode_annotation, split_blocks, Annotation, Annotator, DependencyExtractor, SennaTagger,
    SentenceTagBlock, StanfordExtractor, Tagger,
};

// ============================================================================
// CLI Structure
// ============================================================================

/// Linguistic annotation CLI - POS, NER, chunking, SRL, parse trees
#[derive(Parser)]
#[command(name = "glossa", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode raw tagger output from a file or stdin
    Decode {
        /// File holding raw tagger output (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Tag sentences with SENNA and decode the result
    Annotate {
        /// Sentences to annotate (defaults to stdin, one per line)
        sentences: Vec<String>,

        /// SENNA installation directory
        #[arg(long)]
        senna_dir: PathBuf,

        /// File holding sentences, one per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Attach dependency parses via the Stanford extractor
        #[arg(long)]
        dep_parse: bool,

        /// Path to stanford-parser.jar (required with --dep-parse)
        #[arg(long)]
        parser_jar: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Report collaborator availability
    Info {
        /// SENNA installation directory
        #[arg(long)]
        senna_dir: Option<PathBuf>,

        /// Path to stanford-parser.jar
        #[arg(long)]
        parser_jar: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// One JSON object per sentence
    #[default]
    Json,
    /// Human-readable summary
    Text,
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input, format } => run_decode(input, format),
        Commands::Annotate {
            sentences,
            senna_dir,
            input,
            dep_parse,
            parser_jar,
            format,
        } => run_annotate(sentences, senna_dir, input, dep_parse, parser_jar, format),
        Commands::Info {
            senna_dir,
            parser_jar,
        } => run_info(senna_dir, parser_jar),
    }
}

fn run_decode(input: Option<PathBuf>, format: OutputFormat) -> ExitCode {
    let raw = match read_input(input) {
        Ok(raw) => raw,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0;
    for (index, block) in split_blocks(&raw).iter().enumerate() {
        match SentenceTagBlock::parse(block) {
            Ok(block) => print_annotation(&decode_annotation(&block), format),
            Err(e) => {
                eprintln!("error: sentence {index}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_annotate(
    sentences: Vec<String>,
    senna_dir: PathBuf,
    input: Option<PathBuf>,
    dep_parse: bool,
    parser_jar: Option<PathBuf>,
    format: OutputFormat,
) -> ExitCode {
    let sentences = if sentences.is_empty() {
        match read_input(input) {
            Ok(raw) => raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(message) => {
                eprintln!("error: {message}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        sentences
    };
    if sentences.is_empty() {
        eprintln!("error: no sentences to annotate");
        return ExitCode::FAILURE;
    }

    let mut annotator = Annotator::new(Box::new(SennaTagger::new(senna_dir)));
    if dep_parse {
        let Some(jar) = parser_jar else {
            eprintln!("error: --dep-parse requires --parser-jar");
            return ExitCode::FAILURE;
        };
        annotator = annotator.with_extractor(Box::new(StanfordExtractor::new(jar)));
    }

    let refs: Vec<&str> = sentences.iter().map(String::as_str).collect();
    let results = match annotator.annotate_batch(&refs) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0;
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(annotation) => print_annotation(annotation, format),
            Err(e) => {
                eprintln!("error: sentence {index}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_info(senna_dir: Option<PathBuf>, parser_jar: Option<PathBuf>) -> ExitCode {
    match senna_dir {
        Some(dir) => {
            let tagger = SennaTagger::new(dir);
            println!(
                "{}: {} ({})",
                tagger.name(),
                availability(tagger.is_available()),
                tagger.executable().display()
            );
        }
        None => println!("senna: not configured (pass --senna-dir)"),
    }
    match parser_jar {
        Some(jar) => {
            let extractor = StanfordExtractor::new(jar);
            println!("{}: {}", extractor.name(), availability(extractor.is_available()));
        }
        None => println!("stanford: not configured (pass --parser-jar)"),
    }
    ExitCode::SUCCESS
}

// ============================================================================
// Helpers
// ============================================================================

fn availability(available: bool) -> &'static str {
    if available {
        "available"
    } else {
        "missing"
    }
}

/// Read the given file, or stdin when piped.
fn read_input(input: Option<PathBuf>) -> Result<String, String> {
    match input {
        Some(path) => {
            fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err("no input file given and stdin is a terminal".to_string());
            }
            let mut raw = String::new();
            stdin
                .lock()
                .read_to_string(&mut raw)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(raw)
        }
    }
}

fn print_annotation(annotation: &Annotation, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string(annotation) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("error: serialization failed: {e}"),
        },
        OutputFormat::Text => {
            println!("words: {}", annotation.words.join(" "));
            println!(
                "pos:   {}",
                annotation
                    .pos_tags
                    .iter()
                    .map(|(word, pos)| format!("{word}/{pos}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            println!("verbs: {}", annotation.verbs.join(", "));
            for (index, role) in annotation.srl.iter().enumerate() {
                let roles: Vec<String> = role
                    .iter()
                    .map(|(label, text)| format!("{label}={text:?}"))
                    .collect();
                println!("srl {index}: {}", roles.join(" "));
            }
            println!("tree:  {}", annotation.syntax_tree);
            if !annotation.dependency_parse.is_empty() {
                println!("deps:  {}", annotation.dependency_parse);
            }
            println!();
        }
    }
}
