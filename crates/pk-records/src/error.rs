use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record parse error: {0}")]
    Parse(String),

    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error("row {row}: unknown {column} value {value:?}")]
    UnknownTag {
        row:    usize,
        column: &'static str,
        value:  String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RecordResult<T> = Result<T, RecordError>;
