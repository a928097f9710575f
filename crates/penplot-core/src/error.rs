pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported chart type: {chart_type}")]
    UnsupportedChart { chart_type: String },

    #[error("Invalid chart payload: {0}")]
    Payload(#[from] serde_json::Error),
}
