use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cart-manager")]
#[command(about = "A small shopping-cart manager backed by JSON files")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Working cart file (overrides CART_FILE)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Do not write an archive copy when saving
    #[arg(long, global = true)]
    pub no_archive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the cart
    Add {
        /// Product name
        name: String,
        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Remove every product with this exact name
    Remove {
        /// Product name
        name: String,
    },
    /// Apply a percentage discount to every product
    Discount {
        /// Percentage between 0 and 100
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },
    /// Show the cart total
    Total,
    /// List products in the cart
    List,
    /// Save the cart to another file
    Export {
        /// Output file path
        output: PathBuf,
    },
    /// Replace the cart with the contents of a saved file
    Import {
        /// Input file path
        input: PathBuf,
    },
}
