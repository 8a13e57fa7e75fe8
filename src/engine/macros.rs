#[macro_export]
macro_rules! emit {
    ($warnings:expr, $row:expr, $kind:expr, $($msg:tt)+) => {{
        $warnings.push($crate::types::Warning {
            kind: $kind,
            row: $row,
            message: format!($($msg)+),
        });
    }};
}
