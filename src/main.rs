use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use showroom::catalog::{Catalog, SearchCriteria};
use showroom::config::Config;
use showroom::listing::{detail_lines, summary_line};
use showroom::logging::{init_command_tracing, init_tui_tracing};
use showroom::router::parse_location;
use showroom::ui::app::App;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "showroom", version, about = "Terminal storefront for used vehicle listings")]
struct Cli {
    /// Config file (default: ~/.config/showroom/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// JSON catalog to browse instead of the built-in listings
    #[arg(long, value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    /// Location to open the storefront at, e.g. /car-detail/5
    #[arg(long, value_name = "LOCATION")]
    start: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List vehicles matching the given filters
    Search(SearchArgs),
    /// Print a single vehicle
    Show {
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the route a location resolves to
    Resolve { location: String },
}

#[derive(Args, Debug, Default)]
struct SearchArgs {
    #[arg(long)]
    make: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long, value_name = "YEN")]
    price_min: Option<u64>,
    #[arg(long, value_name = "YEN")]
    price_max: Option<u64>,
    #[arg(long)]
    year_min: Option<u16>,
    #[arg(long)]
    year_max: Option<u16>,
    #[arg(long, value_name = "KM")]
    mileage_max: Option<u32>,
    #[arg(long)]
    fuel: Option<String>,
    #[arg(long)]
    transmission: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    body_type: Option<String>,
    #[arg(long)]
    color: Option<String>,
    /// Print matches as a JSON array
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            make: self.make.clone(),
            model: self.model.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            year_min: self.year_min,
            year_max: self.year_max,
            mileage_max: self.mileage_max,
            fuel_type: self.fuel.clone(),
            transmission: self.transmission.clone(),
            location: self.location.clone(),
            body_type: self.body_type.clone(),
            color: self.color.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            init_tui_tracing();
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            let start = cli
                .start
                .clone()
                .filter(|location| !location.trim().is_empty())
                .unwrap_or_else(|| start_location(&config));
            let app = App::new(catalog, config, &start);
            showroom::ui::run(app).context("Terminal session failed")?;
        }
        Some(command) => {
            init_command_tracing();
            let config = load_config(cli.config.as_deref())?;
            run_command(command, &config, cli.catalog.as_deref())?;
        }
    }

    Ok(())
}

fn run_command(command: Commands, config: &Config, catalog_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Search(args) => {
            let catalog = load_catalog(catalog_path, config)?;
            let matches = catalog.filter(&args.criteria());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No vehicles match the given filters");
            } else {
                for record in matches {
                    println!("{}", summary_line(record));
                }
            }
        }
        Commands::Show { id, json } => {
            let catalog = load_catalog(catalog_path, config)?;
            let Some(record) = catalog.lookup(&id) else {
                bail!("Vehicle '{id}' not found");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                for line in detail_lines(record, config.display.show_secondary_price) {
                    println!("{line}");
                }
            }
        }
        Commands::Resolve { location } => {
            let route = parse_location(&location);
            println!("page: {}", route.page.as_str());
            for (name, value) in &route.params {
                println!("{name}: {value}");
            }
            println!("location: {}", route.location());
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// `--catalog` wins over `catalog.path`; the built-in listings come last.
fn load_catalog(cli_path: Option<&Path>, config: &Config) -> Result<Catalog> {
    let path = cli_path.or(config.catalog.path.as_deref());
    match path {
        Some(path) => Catalog::load_from(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}

fn start_location(config: &Config) -> String {
    let configured = config.navigation.start_location.trim();
    if configured.is_empty() {
        "/".to_string()
    } else {
        configured.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_map_to_criteria() {
        let cli = Cli::parse_from([
            "showroom",
            "search",
            "--make",
            "lexus",
            "--price-max",
            "5000000",
            "--location",
            "tokyo",
        ]);
        let Some(Commands::Search(args)) = cli.command else {
            panic!("expected search command");
        };
        let criteria = args.criteria();
        assert_eq!(criteria.make.as_deref(), Some("lexus"));
        assert_eq!(criteria.price_max, Some(5_000_000));
        assert_eq!(criteria.location.as_deref(), Some("tokyo"));
        assert!(criteria.model.is_none());
    }

    #[test]
    fn start_flag_is_separate_from_location_filter() {
        let cli = Cli::parse_from(["showroom", "--start", "/car-detail/3"]);
        assert_eq!(cli.start.as_deref(), Some("/car-detail/3"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn blank_configured_start_falls_back_to_root() {
        let mut config = Config::default();
        config.navigation.start_location = "  ".to_string();
        assert_eq!(start_location(&config), "/");
    }
}
