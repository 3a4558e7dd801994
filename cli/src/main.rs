mod fixtures;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use smartstep_core::{
    builtin_units, validate_catalog, Annotator, AnnotatorConfig, RecipeCatalog, UnitDefinition,
};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smartstep")]
#[command(about = "Annotate recipe instructions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate instructions against a recipe's ingredients and equipment
    Annotate {
        /// Recipe catalog (JSON with "ingredients" and "equipment")
        #[arg(long)]
        recipe: PathBuf,
        /// Unit catalog (JSON array); defaults to the built-in units
        #[arg(long, env = "SMARTSTEP_UNITS_FILE")]
        units: Option<PathBuf>,
        /// Print segments as JSON, one line per instruction
        #[arg(long)]
        json: bool,
        /// Also print the intermediate marked-up text
        #[arg(long)]
        markup: bool,
        /// Instruction text; reads one instruction per stdin line if omitted
        text: Vec<String>,
    },
    /// Report catalog problems that annotation silently works around
    Validate {
        #[arg(long)]
        recipe: PathBuf,
        #[arg(long, env = "SMARTSTEP_UNITS_FILE")]
        units: Option<PathBuf>,
    },
    /// List the unit catalog
    Units {
        #[arg(long, env = "SMARTSTEP_UNITS_FILE")]
        units: Option<PathBuf>,
    },
    /// Rewrite golden fixture expectations from current annotator output
    UpdateFixtures {
        /// Fixtures directory (default: smartstep-core/tests/fixtures/annotation)
        #[arg(long)]
        fixtures_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate {
            recipe,
            units,
            json,
            markup,
            text,
        } => {
            annotate(&recipe, units.as_deref(), json, markup, text)?;
        }
        Commands::Validate { recipe, units } => {
            validate(&recipe, units.as_deref())?;
        }
        Commands::Units { units } => {
            list_units(units.as_deref())?;
        }
        Commands::UpdateFixtures { fixtures_dir } => {
            fixtures::update_fixtures(fixtures_dir.as_deref())?;
        }
    }

    Ok(())
}

fn load_recipe(path: &Path) -> Result<RecipeCatalog> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse recipe catalog {}", path.display()))
}

fn load_units(path: Option<&Path>) -> Result<Vec<UnitDefinition>> {
    let Some(path) = path else {
        return Ok(builtin_units().to_vec());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse unit catalog {}", path.display()))
}

fn annotate(
    recipe: &Path,
    units: Option<&Path>,
    json: bool,
    markup: bool,
    text: Vec<String>,
) -> Result<()> {
    let config = AnnotatorConfig::from_env()?;
    let recipe = load_recipe(recipe)?;
    let units = load_units(units)?;
    let annotator = Annotator::with_config(&recipe.entities(), &units, &config);

    let instructions = if text.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read instructions from stdin")?
    } else {
        vec![text.join(" ")]
    };

    for instruction in instructions.iter().filter(|line| !line.trim().is_empty()) {
        if markup {
            println!("{}", render::visible_markup(&annotator.mark(instruction)));
        }

        let segments = annotator.annotate(instruction);
        if json {
            println!("{}", serde_json::to_string(&segments)?);
        } else {
            println!("{}", render::render_segments(&segments));
        }
    }

    Ok(())
}

fn validate(recipe: &Path, units: Option<&Path>) -> Result<()> {
    let recipe = load_recipe(recipe)?;
    let units = load_units(units)?;
    let entities = recipe.entities();

    let errors = validate_catalog(&entities, &units);
    for error in &errors {
        println!("{}", error);
    }

    if !errors.is_empty() {
        bail!("{} catalog problem(s) found", errors.len());
    }

    println!(
        "Catalog OK: {} entities, {} units",
        entities.len(),
        units.len()
    );
    Ok(())
}

fn list_units(units: Option<&Path>) -> Result<()> {
    let units = load_units(units)?;
    println!("{:<14} {:<8} {:<14} PROPERTY", "NAME", "ABBR", "PLURAL");
    for unit in &units {
        println!(
            "{:<14} {:<8} {:<14} {}",
            unit.name,
            unit.abbreviation,
            unit.plural,
            unit.property.as_str()
        );
    }
    Ok(())
}
