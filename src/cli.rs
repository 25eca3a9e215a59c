use clap::{Parser, Subcommand};

pub const DEFAULT_CATALOG_SOURCE: &str = "https://fakestoreapi.com/products";

#[derive(Parser, Debug)]
#[command(name = "storecheck", version, about = "Storefront catalog API validation CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CATALOG_SOURCE,
        help = "Catalog source (products JSON file, dir, or url)"
    )]
    pub source: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check,
    Show {
        product: i64,
    },
    Rules,
}
