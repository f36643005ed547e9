use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("node result for rule '{rule_id}' has no selector")]
    MissingSelector { rule_id: String },

    #[error("node result for rule '{rule_id}' has no result classification")]
    MissingOutcome { rule_id: String },

    #[error("result references rule '{0}' missing from the rule collection")]
    UnindexedRule(String),

    #[error("cannot combine a SARIF {expected} log with a SARIF {found} log")]
    VersionMismatch { expected: String, found: String },

    #[error("output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    #[error("failed to parse {path} as JSON: {source}")]
    InputParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConverterError>;
