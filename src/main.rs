use clap::{Parser, Subcommand};
use inkpress::config::{self, SiteConfig};
use inkpress::generate::{BatchReport, Pipeline};
use inkpress::{layout, output, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if env!("ON_RELEASE_TAG") == "true" || hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(about = "Markdown blog generator and server")]
#[command(long_about = "\
Markdown blog generator and server

Converts every .md file in the source directory into an HTML page using a
shared layout template, then serves the result.

  posts/                     # Source (only *.md directly inside is used)
  ├── hello-world.md         # → site/hello-world.html, title \"hello-world\"
  └── notes.txt              # ignored
  templates/
  └── layout.html            # {{ title }} and {{ content }} insertion points
  site/                      # Output, created if missing

With no subcommand, builds the site and then serves it.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Markdown source directory
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Layout template
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Port to serve on
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site, then serve it (default)
    Serve,
    /// Build the site without serving it
    Build,
    /// Load the layout and list the posts without writing anything
    Check,
    /// Print a stock inkpress.toml with all options documented
    GenConfig,
    /// Print a minimal layout template
    GenLayout,
}

impl Cli {
    fn site_config(&self) -> Result<SiteConfig, config::ConfigError> {
        let mut site = config::load_config(&self.config)?;
        if let Some(source) = &self.source {
            site.source_dir = source.clone();
        }
        if let Some(output) = &self.output {
            site.output_dir = output.clone();
        }
        if let Some(layout) = &self.layout {
            site.layout = layout.clone();
        }
        if let Some(port) = self.port {
            site.server.port = port;
        }
        site.validate()?;
        Ok(site)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", output::error_chain(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.as_ref().unwrap_or(&Command::Serve) {
        Command::Serve => {
            let site = cli.site_config()?;
            build(&site)?;
            server::run(&site.output_dir, &site.server.host, site.server.port)?;
        }
        Command::Build => {
            let site = cli.site_config()?;
            build(&site)?;
        }
        Command::Check => {
            let site = cli.site_config()?;
            layout::Layout::load(&site.layout)?;
            let documents = inkpress::scan::scan(&site.source_dir)?;
            output::print_check_output(&documents);
            println!("==> Layout and posts are readable");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenLayout => {
            println!("{}", layout::stock_layout());
        }
    }

    Ok(())
}

fn build(site: &SiteConfig) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let pipeline = Pipeline::startup(site)?;
    let report = pipeline.run_with(output::print_outcome);
    output::print_summary(&report, pipeline.output_dir());
    Ok(report)
}
