//! Resolves and installs Assimp build plans from the command line.
//!
//! `resolve` prints the plan for a format selection, `formats` lists the
//! catalog, `install` copies headers and licenses from a checkout into the
//! per-target layout and `package` (feature `package`) archives that layout.

#[cfg(feature = "package")]
mod package;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use assimp_features::{
    BuildRequest, Error, FormatCatalog, FormatSelection, Platform, ResolvedPlan, install, resolve,
};
use clap::{Args, Parser, Subcommand};

/// Exit status used when the request names an unknown format
const EXIT_UNKNOWN_FORMAT: u8 = 2;

#[derive(Parser)]
#[command(name = "assimp-plan")]
#[command(version)]
#[command(about = "Resolve which Assimp sources and macros to build", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved plan
    Resolve {
        #[command(flatten)]
        request: RequestArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalogued formats
    Formats {
        /// JSON catalog replacing the built-in one
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Install headers, generated headers and licenses into the layout
    Install {
        #[command(flatten)]
        request: RequestArgs,

        /// Assimp source checkout
        #[arg(long, value_name = "DIR")]
        source: PathBuf,
    },

    /// Archive an installed layout as .tar.gz
    #[cfg(feature = "package")]
    Package {
        /// Layout root (`<prefix>/<arch>_<os>_<abi>`)
        #[arg(long, value_name = "DIR")]
        dir: PathBuf,

        /// Archive to create
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
}

#[derive(Args)]
struct RequestArgs {
    /// Comma-separated format names, or `all`
    #[arg(long, default_value = "")]
    formats: String,

    /// Store scene data in double precision
    #[arg(long)]
    double: bool,

    /// Target triple (e.g. x86_64-unknown-linux-gnu); defaults to the host
    #[arg(long, value_name = "TRIPLE", conflicts_with_all = ["arch", "os", "abi"])]
    target: Option<String>,

    /// Override the architecture tag
    #[arg(long)]
    arch: Option<String>,

    /// Override the OS tag
    #[arg(long)]
    os: Option<String>,

    /// Override the ABI tag
    #[arg(long)]
    abi: Option<String>,

    /// Install prefix
    #[arg(long, value_name = "DIR", default_value = "out")]
    prefix: PathBuf,

    /// JSON catalog replacing the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

impl RequestArgs {
    fn platform(&self) -> Result<Platform> {
        if let Some(triple) = &self.target {
            return Platform::from_triple(triple)
                .ok_or_else(|| anyhow!("invalid target triple `{triple}`"));
        }
        let host = Platform::host();
        Ok(Platform::new(
            self.arch.clone().unwrap_or(host.arch),
            self.os.clone().unwrap_or(host.os),
            self.abi.clone().unwrap_or(host.abi),
        ))
    }

    fn request(&self) -> Result<BuildRequest> {
        Ok(BuildRequest {
            formats: FormatSelection::parse(&self.formats),
            double_precision: self.double,
            platform: self.platform()?,
            install_prefix: self.prefix.clone(),
        })
    }
}

fn load_catalog(path: Option<&Path>) -> Result<FormatCatalog> {
    match path {
        Some(path) => FormatCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(FormatCatalog::builtin()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::UnknownFormat { name, known }) = err.downcast_ref::<Error>() {
                eprintln!("error: unknown format `{name}`");
                eprintln!("valid formats:");
                for format in known {
                    eprintln!("  {format}");
                }
                return ExitCode::from(EXIT_UNKNOWN_FORMAT);
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve { request, json } => {
            let catalog = load_catalog(request.catalog.as_deref())?;
            let plan = resolve(&request.request()?, &catalog)?;
            if json {
                println!("{}", plan.to_json()?);
            } else {
                print_plan(&plan);
            }
        }
        Commands::Formats { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            for name in catalog.sorted_format_names() {
                if catalog.is_unsupported(&name) {
                    println!("{name} (unsupported)");
                } else {
                    println!("{name}");
                }
            }
        }
        Commands::Install { request, source } => {
            let catalog = load_catalog(request.catalog.as_deref())?;
            let plan = resolve(&request.request()?, &catalog)?;
            let report = install::install(&source, &plan, &catalog)
                .with_context(|| format!("failed to install from {}", source.display()))?;
            println!(
                "Installed {} header(s), {} generated header(s), {} license file(s) into {}",
                report.headers.len(),
                report.generated.len(),
                report.licenses.len(),
                plan.layout.root.display()
            );
        }
        #[cfg(feature = "package")]
        Commands::Package { dir, out } => {
            package::create(&dir, &out)?;
            println!("Package created at: {}", out.display());
        }
    }
    Ok(())
}

fn print_plan(plan: &ResolvedPlan) {
    println!("Target:    {}", plan.platform);
    println!(
        "Precision: {}",
        if plan.double_precision { "double" } else { "single" }
    );
    println!("Formats:   {} [{}]", plan.formats.len(), plan.formats.join(", "));
    println!("Disabled:  {}", plan.disabled_formats.len());
    println!("Layout:");
    println!("  lib:     {}", plan.layout.lib.display());
    println!("  include: {}", plan.layout.include.display());
    println!("  bin:     {}", plan.layout.bin.display());
    println!("Macros ({}):", plan.macros.len());
    for m in &plan.macros {
        println!("  {}", m.to_flag());
    }
    println!("Sources ({}):", plan.sources.len());
    for source in &plan.sources {
        println!("  {source}");
    }
}
