mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One gain sample of one antenna
pub struct GainRow<'a> {
    pub antenna: &'a str,
    /// Which table or model produced the value (e.g. "boresight", "fcc")
    pub source: &'a str,
    pub angle_deg: f64,
    pub gain_db: f64,
}

pub trait Formatter: Send {
    fn format(&self, row: &GainRow) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
