//! simpledoc CLI - document model simplification tool

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use simpledoc::{builtin_registry, DocumentModel, Error, JsonFormat};

#[derive(Parser)]
#[command(name = "simpledoc")]
#[command(version)]
#[command(
    about = "Convert extracted document models to simplified JSON",
    long_about = None
)]
struct Cli {
    /// Input document-model JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Conversion recipe to apply
    #[arg(short, long, default_value = "default")]
    recipe: String,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// List available recipes and exit
    #[arg(long)]
    list_recipes: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_recipes {
        list_recipes();
        return;
    }

    let Some(input) = cli.input.as_deref() else {
        println!("{}", "Usage: simpledoc <FILE> [--recipe NAME]".yellow());
        println!("       simpledoc --help for more information");
        return;
    };

    let result = run(
        input,
        &cli.recipe,
        cli.output.as_deref(),
        if cli.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        },
    );

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if matches!(e, Error::UnknownRecipe(_)) {
            let names = builtin_registry().names().join(", ");
            eprintln!("Valid recipes: {}", names.cyan());
        }
        std::process::exit(1);
    }
}

fn run(
    input: &std::path::Path,
    recipe_name: &str,
    output: Option<&std::path::Path>,
    format: JsonFormat,
) -> simpledoc::Result<()> {
    let recipe = builtin_registry().get(recipe_name)?;
    let model = DocumentModel::from_file(input)?;

    log::info!(
        "simplifying {} with recipe {:?}",
        input.display(),
        recipe.name()
    );
    let doc = recipe.simplify(&model);
    let json = simpledoc::to_json(&doc, format)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!(
                "{} {} ({} sections)",
                "Wrote".green().bold(),
                path.display(),
                doc.section_count()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn list_recipes() {
    let registry = builtin_registry();

    println!("{}", "Available recipes:".green().bold());
    for name in registry.names() {
        if let Ok(recipe) = registry.get(name) {
            println!(
                "  {} {}",
                format!("{:<10}", name).cyan(),
                recipe.description().dimmed()
            );
        }
    }
}
