//! SwaggerWiz CLI
//!
//! Command-line interface for converting endpoint definitions and URL
//! lists into OpenAPI/Swagger documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use swaggerwiz_generator::{write_document, OpenApiGenerator, SwaggerGenerator, WriteOutcome};
use swaggerwiz_parser::{EndpointFile, RouteFile};

const DEFAULT_URLS_INPUT: &str = "urls.txt";
const DEFAULT_URLS_TITLE: &str = "Generated API";
const DEFAULT_URLS_HOST: &str = "localhost";
const DEFAULT_URLS_PROTOCOL: &str = "https";
const DEFAULT_URLS_OUTPUT: &str = "swagger.json";

#[derive(Parser)]
#[command(name = "swaggerwiz")]
#[command(version, about = "Convert endpoint definitions and URL lists into OpenAPI/Swagger documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON endpoint definition file to an OpenAPI 3.0 YAML document
    #[command(after_help = "EXAMPLES:\n  \
        swaggerwiz endpoints --input-file endpoints.json --output openapi.yaml")]
    Endpoints {
        /// Input JSON file (a list of endpoint definitions)
        #[arg(short, long)]
        input_file: PathBuf,

        /// Output YAML file path
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Convert a METHOD:path URL list to a Swagger 2.0 JSON document
    #[command(after_help = "EXAMPLES:\n  \
        # All flags are optional; defaults are built in\n  \
        swaggerwiz urls --input urls.txt --title \"Orders API\" \\\n    \
        --host api.example.com --protocol https --output swagger.json")]
    Urls {
        /// Input file with one METHOD:path per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Document title
        #[arg(short, long)]
        title: Option<String>,

        /// Host name, without the protocol prefix
        #[arg(short = 'u', long)]
        host: Option<String>,

        /// Protocol/scheme (http or https)
        #[arg(short, long)]
        protocol: Option<String>,

        /// Output JSON file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the generated document to the terminal
        #[arg(short, long)]
        verbose: bool,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,
    },
}

/// Configuration for the `urls` subcommand
///
/// Defaults live here; each field is overridden independently by its flag.
struct UrlsConfig {
    input: PathBuf,
    title: String,
    host: String,
    protocol: String,
    output: PathBuf,
    verbose: bool,
    force: bool,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_URLS_INPUT),
            title: DEFAULT_URLS_TITLE.to_string(),
            host: DEFAULT_URLS_HOST.to_string(),
            protocol: DEFAULT_URLS_PROTOCOL.to_string(),
            output: PathBuf::from(DEFAULT_URLS_OUTPUT),
            verbose: false,
            force: false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Endpoints {
            input_file,
            output,
            force,
        } => {
            endpoints_command(input_file.as_path(), output.as_path(), force)?;
        }
        Commands::Urls {
            input,
            title,
            host,
            protocol,
            output,
            verbose,
            force,
        } => {
            let mut config = UrlsConfig::default();
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(title) = title {
                config.title = title;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(protocol) = protocol {
                config.protocol = protocol;
            }
            if let Some(output) = output {
                config.output = output;
            }
            config.verbose = verbose;
            config.force = force;

            urls_command(config)?;
        }
    }

    Ok(())
}

fn endpoints_command(input_file: &Path, output: &Path, force: bool) -> Result<()> {
    println!(
        "{} Reading endpoint definitions: {}",
        "→".cyan(),
        input_file.display()
    );

    let endpoints = EndpointFile::from_file(input_file)
        .context("Failed to load endpoint definition file")?
        .into_endpoints();

    println!("{} Parsed {} endpoint(s)", "✓".green(), endpoints.len());

    let yaml = OpenApiGenerator::new(endpoints)
        .to_yaml()
        .context("Failed to assemble OpenAPI document")?;

    match write_document(output, &yaml, force).context("Failed to write OpenAPI document")? {
        WriteOutcome::Written => {
            println!(
                "{} Swagger YAML file generated: {}",
                "✓".green(),
                output.display()
            );
        }
        WriteOutcome::SkippedExisting => {
            println!(
                "{} File already exists: {} (use --force to overwrite)",
                "⚠".yellow(),
                output.display()
            );
        }
    }

    Ok(())
}

fn urls_command(config: UrlsConfig) -> Result<()> {
    println!("{} Reading URL list: {}", "→".cyan(), config.input.display());

    let routes = RouteFile::from_file(&config.input)
        .context("Failed to load URL list file")?
        .into_routes();

    println!("{} Parsed {} route(s)", "✓".green(), routes.len());

    let generator = SwaggerGenerator::new(routes, &config.title, &config.host, &config.protocol);
    let json = generator
        .to_json()
        .context("Failed to assemble Swagger document")?;

    match write_document(&config.output, &json, config.force)
        .context("Failed to write Swagger document")?
    {
        WriteOutcome::Written => {
            println!("{} Output saved to: {}", "✓".green(), config.output.display());
            if config.verbose {
                println!("{}\n{}", "Swagger 2.0".yellow(), json);
            }
        }
        WriteOutcome::SkippedExisting => {
            println!(
                "{} File already exists: {} (use --force to overwrite)",
                "⚠".yellow(),
                config.output.display()
            );
        }
    }

    Ok(())
}
