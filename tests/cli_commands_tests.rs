use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cart_manager::cli::{Args, CliApp};
use cart_manager::services::{Cart, CartError};
use cart_manager::utils::Config;

struct TestEnv {
    _tmp: TempDir,
    root: PathBuf,
    cart_file: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let cart_file = root.join("data").join("cart.json");
        Self {
            _tmp: tmp,
            root,
            cart_file,
        }
    }

    fn config(&self) -> Config {
        Config {
            cart_file: self.cart_file.clone(),
            archive_on_save: false,
            environment: "test".to_string(),
        }
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        let args = Args::parse_from(std::iter::once("cart-manager").chain(args.iter().copied()));
        let app = CliApp::new(&self.config(), &args);
        app.run(args.command)
    }

    fn load(&self, path: &Path) -> Cart {
        let mut cart = Cart::new();
        cart.load_from_file(path).expect("load cart");
        cart
    }
}

#[test]
fn test_add_creates_working_file() {
    let env = TestEnv::new();
    env.run(&["add", "Café", "3.5"]).unwrap();
    env.run(&["add", "Croissant", "2.0"]).unwrap();

    let cart = env.load(&env.cart_file);
    assert_eq!(cart.total(), 5.5);
    assert!(!env.root.join("data").join("archives").exists());
}

#[test]
fn test_add_negative_price_fails() {
    let env = TestEnv::new();
    assert!(env.run(&["add", "Ordinateur", "-100"]).is_err());
    assert!(!env.cart_file.exists());
}

#[test]
fn test_remove_and_discount() {
    let env = TestEnv::new();
    env.run(&["add", "Livre", "20"]).unwrap();
    env.run(&["add", "Stylo", "2"]).unwrap();
    env.run(&["remove", "Stylo"]).unwrap();
    env.run(&["discount", "10"]).unwrap();

    assert_eq!(env.load(&env.cart_file).total(), 18.0);
    assert!(env.run(&["discount", "120"]).is_err());
    assert_eq!(env.load(&env.cart_file).total(), 18.0);
}

#[test]
fn test_read_only_commands_on_missing_file() {
    let env = TestEnv::new();
    env.run(&["total"]).unwrap();
    env.run(&["list"]).unwrap();
    env.run(&["remove", "Livre"]).unwrap();
    assert!(!env.cart_file.exists());
}

#[test]
fn test_export_and_import() {
    let env = TestEnv::new();
    let exported = env.root.join("backup").join("panier.json");
    env.run(&["add", "Livre", "10"]).unwrap();
    env.run(&["export", exported.to_str().unwrap()]).unwrap();
    assert_eq!(env.load(&exported).total(), 10.0);

    let other = env.root.join("other.json");
    fs::write(&other, r#"{"products": [{"name": "Stylo", "price": 2}]}"#).unwrap();
    env.run(&["import", other.to_str().unwrap()]).unwrap();

    let cart = env.load(&env.cart_file);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].name, "Stylo");
}

#[test]
fn test_file_flag_overrides_config() {
    let env = TestEnv::new();
    let custom = env.root.join("custom.json");
    env.run(&["--file", custom.to_str().unwrap(), "add", "Livre", "10"]).unwrap();

    assert!(custom.exists());
    assert!(!env.cart_file.exists());
}

#[test]
fn test_no_archive_flag() {
    let env = TestEnv::new();
    let mut config = env.config();
    config.archive_on_save = true;

    let args = Args::parse_from(["cart-manager", "--no-archive", "add", "Livre", "10"]);
    CliApp::new(&config, &args).run(args.command).unwrap();
    assert!(!env.root.join("data").join("archives").exists());

    let args = Args::parse_from(["cart-manager", "add", "Stylo", "2"]);
    CliApp::new(&config, &args).run(args.command).unwrap();
    assert!(env.root.join("data").join("archives").exists());
}

#[test]
fn test_rejected_input_is_returned_as_cart_error() {
    let env = TestEnv::new();
    let err = env.run(&["add", "Ordinateur", "-100"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CartError>(),
        Some(CartError::InvalidPrice { .. })
    ));

    env.run(&["add", "Livre", "20"]).unwrap();
    let err = env.run(&["discount", "150"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CartError>(),
        Some(CartError::InvalidDiscount { .. })
    ));
}
