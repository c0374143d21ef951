use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use vitae::PipelineError;

/// Structure LLM-written resume or cover letter text and render it as a PDF.
#[derive(Parser)]
#[command(name = "vitae", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resume.
    Resume(Paths),
    /// Render a cover letter.
    CoverLetter {
        #[command(flatten)]
        paths: Paths,
        /// Applicant name shown in the letter header.
        #[arg(long, default_value = "")]
        name: String,
        /// Contact details, one per line.
        #[arg(long, default_value = "")]
        contact: String,
    },
}

#[derive(Args)]
struct Paths {
    /// Text file with the generated document.
    input: PathBuf,
    /// Where to write the PDF.
    output: PathBuf,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("vitae=info")).init();

    let cli = Cli::parse();
    let (paths, pdf) = match cli.command {
        Commands::Resume(paths) => {
            let doc = vitae::parse_resume(&fs::read_to_string(&paths.input)?);
            let pdf = vitae::render_resume(&doc)?;
            (paths, pdf)
        }
        Commands::CoverLetter { paths, name, contact } => {
            let doc = vitae::parse_cover_letter(&fs::read_to_string(&paths.input)?);
            let pdf = vitae::render_cover_letter(&doc, &name, &contact)?;
            (paths, pdf)
        }
    };

    fs::write(&paths.output, &pdf)?;
    log::info!("Wrote {} ({} bytes)", paths.output.display(), pdf.len());
    Ok(())
}
