use super::{Formatter, GainRow};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, row: &GainRow) -> String {
        serde_json::json!({
            "antenna": row.antenna,
            "source": row.source,
            "angle_deg": row.angle_deg,
            "gain_db": row.gain_db,
        })
        .to_string()
    }
}
