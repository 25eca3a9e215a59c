use crate::catalog::{self, CatalogError};
use crate::cli::{Cli, Commands};
use crate::domain::models::{ErrorBody, ErrorOut, JsonOut, ProductView};
use crate::services::config::ConfigFile;
use crate::services::output::print_out;
use crate::services::report::build_check_report;
use crate::services::validate::{rules, validate_all, validate_product};

pub fn handle_runtime_commands(
    cli: &Cli,
    config: &ConfigFile,
    source: &str,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check => run_check(cli.json, config, source),
        Commands::Show { product } => {
            let loaded = catalog::load_products(source, config.fetch_timeout())?;
            let record = catalog::find_product(&loaded.products, *product)?;
            let view = ProductView::from_record(record, validate_product(record));
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: view
                    })?
                );
            } else {
                println!(
                    "id: {}",
                    view.id.map_or_else(|| "unknown".to_string(), |i| i.to_string())
                );
                println!("title: {}", view.title.as_deref().unwrap_or("n/a"));
                println!(
                    "price: {}",
                    view.price.map_or_else(|| "n/a".to_string(), |p| p.to_string())
                );
                println!(
                    "rating: {} ({} reviews)",
                    view.rate.map_or_else(|| "n/a".to_string(), |r| r.to_string()),
                    view.review_count.unwrap_or(0)
                );
                if view.defects.is_empty() {
                    println!("defects: none");
                } else {
                    for d in &view.defects {
                        println!("defect: {}", d);
                    }
                }
            }
            Ok(())
        }
        Commands::Rules => print_out(cli.json, &rules(), |r| {
            format!("{}\t{}\t{}", r.name, r.field, r.summary)
        }),
    }
}

/// The check run. Every recognized load failure is reported and swallowed so
/// the process still exits 0; only printing itself can propagate an error.
fn run_check(json: bool, config: &ConfigFile, source: &str) -> anyhow::Result<()> {
    let loaded = match catalog::load_products(source, config.fetch_timeout()) {
        Ok(loaded) => loaded,
        Err(e) => return report_check_failure(json, &e),
    };

    let defects = validate_all(&loaded.products);
    let report = build_check_report(source, &loaded.products, defects);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &report
            })?
        );
        return Ok(());
    }

    if let Some(status) = loaded.status {
        println!("API request successful (status {})", status);
    }
    if report.defects.is_empty() {
        println!("All products passed validation");
    } else {
        println!("Found the following defects:");
        for d in &report.defects {
            println!("{}", d);
        }
    }
    println!("Total products tested: {}", report.products_tested);
    println!("Total defects found: {}", report.defects_found);
    Ok(())
}

fn report_check_failure(json: bool, err: &CatalogError) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ErrorOut {
                ok: false,
                error: ErrorBody {
                    code: err.code(),
                    message: err.to_string(),
                },
                products_tested: Some(0),
            })?
        );
    } else {
        println!("{}", err);
        println!("Total products tested: 0");
        println!("Total defects found: 0");
    }
    Ok(())
}
