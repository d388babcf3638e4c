use super::{Formatter, GainRow};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, row: &GainRow) -> String {
        if self.verbose {
            format!(
                "{:<16} [{}] {:>7.2}°  {:>8.3} dB",
                row.antenna, row.source, row.angle_deg, row.gain_db
            )
        } else {
            format!(
                "{:<16} {:>7.2}°  {:>8.3} dB",
                row.antenna, row.angle_deg, row.gain_db
            )
        }
    }
}
