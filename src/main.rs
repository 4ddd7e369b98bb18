use clap::Parser;
use std::path::Path;

use cart_optimizer::catalog::persistence::{
    load_catalog, load_config, load_deals, load_pantry, load_request, save_result,
    write_shopping_csv,
};
use cart_optimizer::cli::{Cli, Command};
use cart_optimizer::error::{CartError, Result};
use cart_optimizer::interface::{
    display_catalog, display_conversion, display_result, prompt_meal_selection, prompt_yes_no,
    suggest_meal,
};
use cart_optimizer::matching::UnitConverter;
use cart_optimizer::models::{parse_meal_arg, MealRequest, OptimizeWarning};
use cart_optimizer::optimizer::{Optimizer, OptimizerConfig};
use cart_optimizer::{logging, MealCatalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Optimize {
            pantry,
            deals,
            request,
            meals,
            catalog,
            config,
            json,
            save,
            csv,
            interactive,
        } => cmd_optimize(OptimizeArgs {
            pantry,
            deals,
            request,
            meals,
            catalog,
            config,
            json,
            save,
            csv,
            interactive,
        }),
        Command::Meals { category, catalog } => cmd_meals(catalog.as_deref(), category.as_deref()),
        Command::Convert {
            quantity,
            from,
            to,
            strict,
        } => cmd_convert(quantity, &from, &to, strict),
    }
}

struct OptimizeArgs {
    pantry: String,
    deals: String,
    request: Option<String>,
    meals: Vec<String>,
    catalog: Option<String>,
    config: Option<String>,
    json: bool,
    save: Option<String>,
    csv: Option<String>,
    interactive: bool,
}

fn load_catalog_or_builtin(path: Option<&str>) -> Result<MealCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(MealCatalog::builtin()),
    }
}

/// Merge the request file, `--meal` flags and interactive picks, in that order.
fn build_request(args: &OptimizeArgs, catalog: &MealCatalog) -> Result<MealRequest> {
    let mut request = match &args.request {
        Some(path) => load_request(path)?,
        None => MealRequest::new(),
    };

    for arg in &args.meals {
        let (meal_id, servings) = parse_meal_arg(arg).ok_or_else(|| {
            CartError::InvalidInput(format!("Expected NAME or NAME=SERVINGS, got '{}'", arg))
        })?;
        request.insert(&meal_id, servings);
    }

    if args.interactive {
        for (meal_id, servings) in prompt_meal_selection(catalog)?.iter() {
            request.insert(meal_id, servings);
        }
    }

    Ok(request)
}

/// Optimize a shopping list for the selected meals.
fn cmd_optimize(args: OptimizeArgs) -> Result<()> {
    let catalog = load_catalog_or_builtin(args.catalog.as_deref())?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => OptimizerConfig::default(),
    };

    // Load snapshots
    let pantry = load_pantry(&args.pantry)?;
    let deals = load_deals(&args.deals)?;

    let request = build_request(&args, &catalog)?;
    if request.is_empty() {
        println!("No meals selected. Use --meal NAME=SERVINGS, --request or --interactive.");
        return Ok(());
    }

    let result = Optimizer::new(config).optimize(&request, &catalog, &pantry, &deals)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Loaded {} pantry items and {} deals for {} meals",
            pantry.len(),
            deals.len(),
            request.len()
        );
        display_result(&result);

        for warning in &result.warnings {
            if let OptimizeWarning::UnknownMeal { meal_id } = warning {
                if let Some(suggestion) = suggest_meal(&catalog, meal_id) {
                    println!("Did you mean '{}' instead of '{}'?", suggestion, meal_id);
                }
            }
        }
    }

    if let Some(path) = &args.save {
        if Path::new(path).exists() && !prompt_yes_no(&format!("Overwrite {}?", path), false)? {
            println!("Result not saved.");
        } else {
            save_result(path, &result)?;
            println!("Result saved to {}.", path);
        }
    }

    if let Some(path) = &args.csv {
        write_shopping_csv(path, &result)?;
        println!("Shopping list written to {}.", path);
    }

    Ok(())
}

/// List the meals in the catalog.
fn cmd_meals(catalog_path: Option<&str>, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog_or_builtin(catalog_path)?;
    println!("Loaded {} meals", catalog.len());
    display_catalog(&catalog, category);
    Ok(())
}

/// Convert a quantity between two units.
fn cmd_convert(quantity: f64, from: &str, to: &str, strict: bool) -> Result<()> {
    let converter = if strict {
        UnitConverter::strict()
    } else {
        UnitConverter::default()
    };
    display_conversion(quantity, from, to, converter.convert(quantity, from, to));
    Ok(())
}
