use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "Sport_car_price.csv";

const HEADER: [&str; 8] = [
    "Car Make",
    "Car Model",
    "Year",
    "Engine Size (L)",
    "Horsepower",
    "Torque (lb-ft)",
    "0-60 MPH Time (seconds)",
    "Price (in USD)",
];

/// Demo listings. Prices carry thousands separators, so the writer quotes
/// them; the duplicate 911 row and the blank NSX price exercise the viewer's
/// dedup and skip rules.
const ROWS: [[&str; 8]; 13] = [
    ["Porsche", "911", "2022", "3.0", "379", "331", "4.0", "101,200"],
    ["Lamborghini", "Huracan", "2021", "5.2", "630", "443", "2.8", "274,390"],
    ["Ferrari", "488 GTB", "2022", "3.9", "661", "561", "3.0", "333,750"],
    ["Audi", "R8", "2022", "5.2", "562", "406", "3.2", "142,700"],
    ["McLaren", "720S", "2021", "4.0", "710", "568", "2.7", "298,000"],
    ["Porsche", "911", "2021", "3.0", "379", "331", "4.0", "99,200"],
    ["BMW", "M8", "2022", "4.4", "617", "553", "3.1", "130,000"],
    ["Mercedes-Benz", "AMG GT", "2021", "4.0", "523", "494", "3.8", "118,600"],
    ["Chevrolet", "Corvette", "2022", "6.2", "490", "465", "2.8", "64,500"],
    ["Nissan", "GT-R", "2021", "3.8", "565", "467", "2.9", "113,540"],
    ["Toyota", "GR Supra", "2022", "3.0", "382", "368", "3.9", "43,540"],
    ["Acura", "NSX", "2021", "3.5", "573", "476", "2.9", ""],
    ["Tesla", "Model S Plaid", "2022", "Electric", "1020", "1050", "1.98", "135,000"],
];

fn main() -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    writer.write_record(HEADER).context("writing header")?;
    for row in ROWS {
        writer.write_record(row).context("writing listing")?;
    }
    // A deliberately short row, which the viewer skips on load.
    writer
        .write_record(["Mystery", "Unknown", "2020"])
        .context("writing ragged row")?;
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} listings to {OUTPUT_PATH}", ROWS.len());
    Ok(())
}
