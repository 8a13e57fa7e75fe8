use crate::emit;
use crate::engine::roles::{is_known_unit, RoleMap, DEFAULT_UNIT};
use crate::tokenizer::Row;
use crate::types::{round2, LineItem, RowResult, WarningKind};

/// Quantities above this trigger [`WarningKind::LargeQuantity`].
pub const LARGE_QUANTITY: f64 = 100_000.0;

/// Positive prices below this trigger [`WarningKind::TinyPrice`].
pub const TINY_PRICE: f64 = 0.01;

fn cell<'a>(row: &'a Row, col: Option<usize>) -> &'a str {
    col.and_then(|c| row.cells.get(c))
        .map_or("", |c| c.as_str())
}

fn parse_quantity(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|q| !q.is_nan())
}

/// Unparsable or negative prices degrade to zero; the zero-price warnings
/// then surface the problem instead of an error.
fn parse_price(cell: &str) -> f64 {
    cell.parse::<f64>()
        .ok()
        .filter(|p| *p >= 0.0 && !p.is_nan())
        .unwrap_or(0.0)
}

/// Convert one tokenized row into a candidate line item plus its quality
/// warnings.
///
/// A row is skipped outright (no item, no warnings) when the name cell is
/// empty or the quantity cell does not parse as a number; skips are
/// reported through `stats.ignore_count`, never as errors.
pub fn build_row(
    row: &Row,
    roles: &RoleMap,
    known_units: &[String],
    row_index: usize,
) -> RowResult {
    let part_name = cell(row, roles.name).to_string();
    if part_name.is_empty() {
        return RowResult::default();
    }

    let Some(quantity) = parse_quantity(cell(row, roles.quantity)) else {
        return RowResult::default();
    };

    let mut warnings = Vec::new();
    let row_ref = Some(row_index);

    let unit_cell = cell(row, roles.unit);
    let unit = if unit_cell.is_empty() {
        emit!(
            warnings,
            row_ref,
            WarningKind::MissingUnit,
            "no unit given, defaulted to \"{DEFAULT_UNIT}\""
        );
        DEFAULT_UNIT.to_string()
    } else {
        unit_cell.to_string()
    };

    let unit_price = parse_price(cell(row, roles.unit_price));

    let remarks_cell = cell(row, roles.remarks);
    let remarks = (!remarks_cell.is_empty()).then(|| remarks_cell.to_string());

    if part_name.chars().count() < 2 {
        emit!(
            warnings,
            row_ref,
            WarningKind::NameTooShort,
            "item name \"{part_name}\" is shorter than 2 characters"
        );
    }

    // Zero quantity and zero price collapse into one combined warning; the
    // individual kinds are mutually exclusive with it.
    match (quantity == 0.0, unit_price == 0.0) {
        (true, true) => emit!(
            warnings,
            row_ref,
            WarningKind::ZeroQtyOrPrice,
            "quantity and unit price are both zero"
        ),
        (true, false) => emit!(warnings, row_ref, WarningKind::QtyZero, "quantity is zero"),
        (false, true) => emit!(
            warnings,
            row_ref,
            WarningKind::PriceZero,
            "unit price is zero"
        ),
        (false, false) => {}
    }

    if unit_price > 0.0 && unit_price < TINY_PRICE {
        emit!(
            warnings,
            row_ref,
            WarningKind::TinyPrice,
            "unit price {unit_price} is below {TINY_PRICE}"
        );
    }

    if quantity > LARGE_QUANTITY {
        emit!(
            warnings,
            row_ref,
            WarningKind::LargeQuantity,
            "quantity {quantity} exceeds {LARGE_QUANTITY}"
        );
    }

    if !is_known_unit(&unit, known_units) {
        emit!(
            warnings,
            row_ref,
            WarningKind::SuspiciousUnit,
            "unit \"{unit}\" is not a known unit token"
        );
    }

    RowResult {
        item: Some(LineItem {
            part_name,
            amount: round2(quantity * unit_price),
            quantity,
            unit,
            unit_price,
            remarks,
        }),
        warnings,
        included: true,
    }
}
