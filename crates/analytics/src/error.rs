use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Unsupported collation locale: '{0}'")]
    UnsupportedLocale(String),

    #[error("Failed to construct collator for locale '{locale}': {reason}")]
    Collation { locale: String, reason: String },
}
