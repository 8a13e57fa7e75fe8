use serde::Serialize;

/// Closed set of quality warnings the pipeline can emit.
///
/// `MixedFormat` is table-level (no row index); everything else is attached
/// to the row that triggered it. Each kind carries a fixed confidence
/// penalty used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WarningKind {
    MissingUnit,
    PriceZero,
    QtyZero,
    MixedFormat,
    LargeQuantity,
    TinyPrice,
    SuspiciousUnit,
    ZeroQtyOrPrice,
    NameTooShort,
}

impl WarningKind {
    pub const ALL: &'static [WarningKind] = &[
        WarningKind::MissingUnit,
        WarningKind::PriceZero,
        WarningKind::QtyZero,
        WarningKind::MixedFormat,
        WarningKind::LargeQuantity,
        WarningKind::TinyPrice,
        WarningKind::SuspiciousUnit,
        WarningKind::ZeroQtyOrPrice,
        WarningKind::NameTooShort,
    ];

    /// Confidence penalty in score points. Row-level kinds are subtracted
    /// from that row's base score of 100; `MixedFormat` is subtracted once
    /// from the table mean.
    pub fn penalty(self) -> u32 {
        match self {
            WarningKind::ZeroQtyOrPrice => 30,
            WarningKind::MixedFormat => 20,
            WarningKind::QtyZero | WarningKind::PriceZero => 15,
            WarningKind::NameTooShort => 10,
            WarningKind::LargeQuantity | WarningKind::SuspiciousUnit => 8,
            WarningKind::TinyPrice | WarningKind::MissingUnit => 5,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.to_string() == name)
    }
}

impl Serialize for WarningKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WarningKind::MissingUnit => "missing-unit",
            WarningKind::PriceZero => "price-zero",
            WarningKind::QtyZero => "qty-zero",
            WarningKind::MixedFormat => "mixed-format",
            WarningKind::LargeQuantity => "large-quantity",
            WarningKind::TinyPrice => "tiny-price",
            WarningKind::SuspiciousUnit => "suspicious-unit",
            WarningKind::ZeroQtyOrPrice => "zero-qty-or-price",
            WarningKind::NameTooShort => "name-too-short",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    /// 0-based index into the tokenized table. `None` for table-level
    /// warnings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

/// One validated row of a quotation/invoice table.
///
/// `amount` is always computed as `round2(quantity * unit_price)`; it is
/// never taken from the pasted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub part_name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Round to two decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Outcome of validating a single tokenized row.
///
/// `item` is `Some` iff `included` is true; a skipped row (empty name,
/// unparsable quantity) contributes only to `ignore_count`.
#[derive(Debug, Default)]
pub struct RowResult {
    pub item: Option<LineItem>,
    pub warnings: Vec<Warning>,
    pub included: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub row_count: usize,
    pub col_count: usize,
    pub mixed_format: bool,
    pub ignore_count: usize,
}

/// Immutable result of one import invocation.
#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub items: Vec<LineItem>,
    pub warnings: Vec<Warning>,
    /// 0-100 heuristic trust score.
    pub confidence: u8,
    pub stats: ImportStats,
}

impl ImportResult {
    /// Caller-side decision: the engine only supplies the score, the
    /// threshold is UI configuration.
    pub fn auto_insertable(&self, threshold: u8) -> bool {
        self.confidence >= threshold
    }

    pub fn count_of(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    pub fn row_warnings(&self, row: usize) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.row == Some(row))
    }
}
