use anyhow::{Context, Result};
use console::{style, Emoji};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    cli::args::{Args, Commands},
    services::Cart,
    utils::{
        formatting::{format_cart_table, format_price, format_total},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");

pub struct CliApp {
    cart_file: PathBuf,
    archive_on_save: bool,
}

impl CliApp {
    /// Command line flags take precedence over the loaded configuration.
    pub fn new(config: &Config, args: &Args) -> Self {
        Self {
            cart_file: args.file.clone().unwrap_or_else(|| config.cart_file.clone()),
            archive_on_save: config.archive_on_save && !args.no_archive,
        }
    }

    pub fn cart_file(&self) -> &Path {
        &self.cart_file
    }

    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Add { name, price } => self.handle_add(name, price),
            Commands::Remove { name } => self.handle_remove(name),
            Commands::Discount { percentage } => self.handle_discount(percentage),
            Commands::Total => self.handle_total(),
            Commands::List => self.handle_list(),
            Commands::Export { output } => self.handle_export(output),
            Commands::Import { input } => self.handle_import(input),
        }
    }

    fn empty_cart(&self) -> Cart {
        Cart::new().with_archive_on_save(self.archive_on_save)
    }

    /// A working file that does not exist yet is an empty cart.
    fn open_cart(&self) -> Result<Cart> {
        let mut cart = self.empty_cart();
        if self.cart_file.exists() {
            cart.load_from_file(&self.cart_file).with_context(|| {
                format!("Failed to load cart from {}", self.cart_file.display())
            })?;
        }
        Ok(cart)
    }

    fn store_cart(&self, cart: &Cart) -> Result<()> {
        cart.save_to_file(&self.cart_file).with_context(|| {
            format!("Failed to save cart to {}", self.cart_file.display())
        })
    }

    fn handle_add(&self, name: String, price: f64) -> Result<()> {
        let mut cart = self.open_cart()?;
        cart.add_product(name.clone(), price)?;
        self.store_cart(&cart)?;

        println!(
            "{} Added {} at {}",
            CHECKMARK,
            style(&name).green(),
            style(format_price(price)).yellow()
        );
        Ok(())
    }

    fn handle_remove(&self, name: String) -> Result<()> {
        let mut cart = self.open_cart()?;
        let before = cart.len();
        cart.remove_product(&name);
        let removed = before - cart.len();

        if removed == 0 {
            println!("{} No product named '{}' in the cart", INFO, style(&name).yellow());
            return Ok(());
        }

        self.store_cart(&cart)?;
        println!("{} Removed {} x {}", CHECKMARK, removed, style(&name).green());
        Ok(())
    }

    fn handle_discount(&self, percentage: f64) -> Result<()> {
        let mut cart = self.open_cart()?;
        cart.apply_discount(percentage)?;
        self.store_cart(&cart)?;
        println!("{} Applied {}% discount", CHECKMARK, percentage);
        println!("{}", format_total(cart.total()));
        Ok(())
    }

    fn handle_total(&self) -> Result<()> {
        let cart = self.open_cart()?;
        println!("{}", format_total(cart.total()));
        Ok(())
    }

    fn handle_list(&self) -> Result<()> {
        let cart = self.open_cart()?;
        if cart.is_empty() {
            println!("{} The cart is empty", INFO);
            return Ok(());
        }

        println!("{}", format_cart_table(cart.items()));
        println!("{}", format_total(cart.total()));
        Ok(())
    }

    fn handle_export(&self, output: PathBuf) -> Result<()> {
        let cart = self.open_cart()?;
        cart.save_to_file(&output)
            .with_context(|| format!("Failed to export cart to {}", output.display()))?;

        info!("Exported {} item(s) to {}", cart.len(), output.display());
        println!("{} Exported cart to {}", CHECKMARK, style(output.display()).cyan());
        Ok(())
    }

    fn handle_import(&self, input: PathBuf) -> Result<()> {
        let mut cart = self.empty_cart();
        cart.load_from_file(&input)
            .with_context(|| format!("Failed to import cart from {}", input.display()))?;
        self.store_cart(&cart)?;

        println!(
            "{} Imported {} product(s) from {}",
            CHECKMARK,
            cart.len(),
            style(input.display()).cyan()
        );
        Ok(())
    }
}
