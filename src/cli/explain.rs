pub const AVAILABLE_WARNINGS: &[(&str, &str)] = &[
    (
        "mixed-format",
        "Inconsistent delimiters or column counts across pasted rows",
    ),
    (
        "missing-unit",
        "Row had no unit cell, defaulted to \"pc\"",
    ),
    ("qty-zero", "Quantity parsed as zero"),
    ("price-zero", "Unit price parsed as zero"),
    (
        "zero-qty-or-price",
        "Quantity and unit price are both zero",
    ),
    ("tiny-price", "Unit price below 0.01"),
    ("large-quantity", "Quantity above 100000"),
    (
        "suspicious-unit",
        "Unit does not match any known unit token",
    ),
    ("name-too-short", "Item name shorter than 2 characters"),
];

pub fn list_warnings() -> String {
    use std::fmt::Write;
    let mut out = String::from("Warning kinds:\n\n");
    for (name, desc) in AVAILABLE_WARNINGS {
        let _ = writeln!(out, "  {name:<20} {desc}");
    }
    out.push_str("\nRun `tabimport explain <warning>` for details.");
    out
}

pub fn explain(warning: &str) -> Option<&'static str> {
    match warning {
        "mixed-format" => Some(
            "mixed-format: Pasted rows did not share one delimiter or one column count.\n\
             \n\
             Happens when a spreadsheet selection is mixed with free-typed lines, or when rows\n\
             were copied from two differently shaped tables. The import still runs: column roles\n\
             are inferred from the dominant row shape and odd-shaped rows are treated as noise.\n\
             \n\
             Scope: table-level (no row index)\n\
             Confidence penalty: 20, applied once to the table mean",
        ),
        "missing-unit" => Some(
            "missing-unit: A row had no usable unit cell.\n\
             \n\
             Either no column was recognized as a unit column (fewer than 40% of its values\n\
             matched known unit tokens) or this row's unit cell was empty. The unit defaults\n\
             to \"pc\" so the row still imports.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 5\n\
             Config: known_units",
        ),
        "qty-zero" => Some(
            "qty-zero: The quantity cell parsed as exactly zero while the price did not.\n\
             \n\
             A zero quantity produces a zero amount, which is almost never intended on a\n\
             quotation line. The row imports as-is; review it before accepting.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 15",
        ),
        "price-zero" => Some(
            "price-zero: The unit price is zero while the quantity is not.\n\
             \n\
             Also emitted when the price cell was unparsable or negative, because unusable\n\
             prices degrade to zero instead of failing the import.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 15",
        ),
        "zero-qty-or-price" => Some(
            "zero-qty-or-price: Quantity and unit price are both zero on one row.\n\
             \n\
             Emitted instead of qty-zero and price-zero when both hit at once, so the row is\n\
             penalized once as a likely placeholder line rather than twice.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 30 (replaces the two individual kinds)",
        ),
        "tiny-price" => Some(
            "tiny-price: Unit price is positive but below 0.01.\n\
             \n\
             Usually a unit mismatch (price per thousand pasted as price per piece) or a\n\
             decimal point slip. The amount still computes; double-check the source column.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 5",
        ),
        "large-quantity" => Some(
            "large-quantity: Quantity exceeds 100000.\n\
             \n\
             Plausible for bulk fasteners, suspicious for most other line items; frequently a\n\
             quantity column swapped with an article number.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 8",
        ),
        "suspicious-unit" => Some(
            "suspicious-unit: The unit value does not match any known unit token.\n\
             \n\
             Matching is case-insensitive and ignores one trailing \"s\". Extend known_units\n\
             in .tabimportrc.toml when your documents use domain-specific units.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 8\n\
             Config: known_units",
        ),
        "name-too-short" => Some(
            "name-too-short: The item name is shorter than 2 characters.\n\
             \n\
             One-character names usually mean the name column was misdetected, often because\n\
             the paste had no obvious text column.\n\
             \n\
             Scope: per row\n\
             Confidence penalty: 10",
        ),
        _ => None,
    }
}
