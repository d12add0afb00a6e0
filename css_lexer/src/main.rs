use clap::{Parser, ValueEnum};
use css_lexer::config::RuntimeConfig;
use css_lexer::file_processor::{self, FileProcessor};
use css_lexer::utils::SourceMap;
use css_lexer::{lexical, logging, Token, TokenKind, TokenStream};
use serde::Serialize;
use std::path::PathBuf;

/// Tokenize stylesheets into text and comment tokens
#[derive(Parser)]
#[command(name = "csslex", author, version, about, long_about = None)]
struct Cli {
    /// Stylesheets to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format for tokens
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print per-file token metrics after the tokens
    #[arg(short, long)]
    summary: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct TokenLine<'a> {
    file: &'a str,
    #[serde(flatten)]
    token: &'a Token,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();

    logging::config::init_runtime_preferences(config.logging.clone())?;
    if let Err(e) = logging::init_global_logging()
        .and_then(|_| lexical::init_lexical_analysis_logging())
        .and_then(|_| file_processor::init_file_processor_logging())
    {
        logging::safe_log_error(logging::codes::system::INITIALIZATION_FAILURE, &e);
        eprintln!("{}", logging::get_system_diagnostics());
        return Err(e.into());
    }

    let processor = FileProcessor::from_preferences(&config.file_processor);
    let mut failures = 0usize;

    for path in &cli.files {
        let file = path.to_string_lossy();
        if !tokenize_file(&processor, &config, &file, &cli)? {
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("{} of {} file(s) failed", failures, cli.files.len());
        std::process::exit(1);
    }

    Ok(())
}

/// Returns false when the file could not be read or the scan failed
fn tokenize_file(
    processor: &FileProcessor,
    config: &RuntimeConfig,
    file: &str,
    cli: &Cli,
) -> Result<bool, Box<dyn std::error::Error>> {
    let result = match processor.process_file(file) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}: {}", file, e);
            return Ok(false);
        }
    };

    let source_map = SourceMap::new(result.source.as_str());
    let mut stream =
        TokenStream::with_preferences(file, result.source, config.lexical.clone())?;
    let mut success = true;

    loop {
        let token = stream.next_token();

        match cli.format {
            OutputFormat::Text => println!("{}", token),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&TokenLine { file, token: &token })?)
            }
        }

        if token.kind == TokenKind::Error {
            let span = source_map.span_at(token.pos, 1);
            eprintln!("{}:", file);
            eprint!("{}", source_map.format_error(&span, &token.value));
            success = false;
        }

        if token.is_terminal() {
            break;
        }
    }

    let metrics = stream.finish();
    if cli.summary {
        println!(
            "{}: {} tokens ({} text, {} comment), {} bytes, longest comment {} bytes",
            file,
            metrics.total_tokens,
            metrics.text_tokens,
            metrics.comment_tokens,
            metrics.bytes_scanned,
            metrics.max_comment_length
        );
    }

    Ok(success)
}
