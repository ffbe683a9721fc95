/// A cell interpreted for numeric checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Empty or a conventional missing marker (`NA`, `NaN`, `null`, ...).
    Missing,
    Number(f64),
    /// Non-empty text that is not a number.
    Text,
}

const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
];

impl Cell {
    pub fn parse(raw: &str) -> Cell {
        let s = raw.trim();
        if MISSING_MARKERS.contains(&s) {
            return Cell::Missing;
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Missing,
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text,
        }
    }
}
