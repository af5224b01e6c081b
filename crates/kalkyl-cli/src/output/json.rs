use kalkyl_core::error::KalkylError;
use kalkyl_core::model::Table;

pub fn print(tables: &[Table]) -> Result<(), KalkylError> {
    let json = serde_json::to_string_pretty(tables)?;
    println!("{json}");
    Ok(())
}
