use clap::Parser;
use plainpress::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plainpress")]
#[command(about = "Static site generator for plain text and markdown notes")]
#[command(long_about = "\
Static site generator for plain text and markdown notes

Turns .txt and .md files into static HTML pages plus an index page linking
them. Point it at a single file or at a directory; for a directory, every
immediate .txt/.md entry becomes one page.

Source dialects:

  .txt    blank-line-separated paragraphs; the first paragraph is the title
  .md     restricted markdown: # / ## / ### headers, **bold**, *italic*,
          `code`, [text](url) links, --- horizontal rules

The output directory is deleted and recreated on every run.

Options can also come from a JSON config file:

  { \"input\": \"./docs\", \"stylesheet\": \"https://example.com/site.css\" }

Command-line flags override config-file values.")]
#[command(version)]
struct Cli {
    /// Path to the source file or directory to process
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stylesheet URL linked from every generated page
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// JSON config file supplying options instead of flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (deleted and recreated on every run)
    #[arg(short, long, default_value = "dist")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let run = config::resolve(cli.input, cli.stylesheet, cli.config.as_deref(), cli.output)?;
    let report = generate::generate(&run)?;
    output::print_generate_output(&report);

    Ok(())
}
