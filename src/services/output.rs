use crate::domain::models::{ErrorBody, ErrorOut, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Failure counterpart of `print_out`: `{ok:false, error}` envelope in JSON
/// mode, a single stderr line otherwise. Check-run failures are printed by the
/// check handler itself, which also owes the reader a zero products count.
pub fn print_error(json: bool, code: &'static str, message: &str) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ErrorOut {
                ok: false,
                error: ErrorBody {
                    code,
                    message: message.to_string(),
                },
                products_tested: None,
            })?
        );
    } else {
        eprintln!("error: {}", message);
    }
    Ok(())
}
