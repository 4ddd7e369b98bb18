use clap::{Parser, Subcommand};

/// cart_optimizer - Turns chosen meals into a priced, store-assigned shopping list.
#[derive(Parser, Debug)]
#[command(name = "cart_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log matching decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a shopping list from a pantry, store deals and selected meals.
    Optimize {
        /// Pantry snapshot (JSON list of name, quantity, unit).
        #[arg(long)]
        pantry: String,

        /// Deal snapshot (JSON, or CSV by extension).
        #[arg(long)]
        deals: String,

        /// Meal request file (JSON object of meal id to servings).
        #[arg(long)]
        request: Option<String>,

        /// A meal to cook, as NAME or NAME=SERVINGS. Repeatable.
        #[arg(short, long = "meal", value_name = "NAME=N")]
        meals: Vec<String>,

        /// Meal catalog file; the built-in catalog is used otherwise.
        #[arg(long)]
        catalog: Option<String>,

        /// Optimizer policy file.
        #[arg(long)]
        config: Option<String>,

        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Also save the full result as JSON to this file.
        #[arg(long, value_name = "OUT")]
        save: Option<String>,

        /// Also write the shopping list to this CSV file.
        #[arg(long, value_name = "OUT")]
        csv: Option<String>,

        /// Pick meals and servings interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// List catalog meals by category.
    Meals {
        /// Only show this category.
        #[arg(long)]
        category: Option<String>,

        /// Meal catalog file; the built-in catalog is used otherwise.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Convert a quantity between units.
    Convert {
        quantity: f64,
        from: String,
        to: String,

        /// Refuse the weight/volume density approximation.
        #[arg(long)]
        strict: bool,
    },
}
