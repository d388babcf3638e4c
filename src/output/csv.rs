use super::{Formatter, GainRow};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, row: &GainRow) -> String {
        format!(
            "{},{},{:.3},{:.3}",
            row.antenna, row.source, row.angle_deg, row.gain_db
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("antenna,source,angle_deg,gain_db")
    }
}
