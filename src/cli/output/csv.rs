use anyhow::Result;

use crate::types::{ImportResult, LineItem};

const HEADER: [&str; 6] = [
    "part_name",
    "quantity",
    "unit",
    "unit_price",
    "amount",
    "remarks",
];

/// Items as CSV for piping into other tools. Warnings and stats are not
/// part of this format; use `--format json` for the full result.
pub fn render(result: &ImportResult) -> Result<()> {
    print!("{}", to_csv_string(&result.items)?);
    Ok(())
}

fn to_csv_string(items: &[LineItem]) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for item in items {
        writer.write_record([
            item.part_name.as_str(),
            &item.quantity.to_string(),
            item.unit.as_str(),
            &item.unit_price.to_string(),
            &item.amount.to_string(),
            item.remarks.as_deref().unwrap_or(""),
        ])?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_header_plus_one_record_per_item() {
        let result = crate::import(
            "Bolt M6\t100\tpcs\t0.5\nNut M6\t200\tpcs\t0.3\n",
            &Config::default(),
        );
        let csv = to_csv_string(&result.items).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.join(","));
        assert!(lines[1].starts_with("Bolt M6,100,pcs,0.5,50"));
    }

    #[test]
    fn test_absent_remarks_is_empty_field() {
        let result = crate::import("Bolt M6\t100\tpcs\t0.5\n", &Config::default());
        let csv = to_csv_string(&result.items).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(','));
    }

    #[test]
    fn test_no_items_yields_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_cell_commas_are_quoted() {
        let result = crate::import("Bolt, zinc plated\t10\tpcs\t0.5\n", &Config::default());
        let csv = to_csv_string(&result.items).unwrap();
        assert!(csv.contains("\"Bolt, zinc plated\""));
    }
}
