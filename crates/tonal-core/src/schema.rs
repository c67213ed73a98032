/// Name of the single table holding classification outcomes.
pub const TABLE: &str = "sentiment_results";

/// Column names of [`TABLE`].
pub mod column {
    pub const ID: &str = "id";
    pub const TEXT: &str = "text";
    pub const SENTIMENT: &str = "sentiment";
    pub const CONFIDENCE: &str = "confidence";
    pub const TIMESTAMP: &str = "timestamp";
}
