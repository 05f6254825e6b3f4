use thiserror::Error;

/// Failures while reading or validating a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input has no header line")]
    EmptyInput,

    #[error("header must name at least the label column")]
    MissingLabel,

    #[error("attribute `{0}` is declared more than once")]
    DuplicateAttribute(String),

    #[error("line {line}: expected {expected} values, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` is not an integer")]
    InvalidValue { line: usize, token: String },

    #[error("line {line}: attribute `{attribute}` has value {value}, expected 0 or 1")]
    NonBinaryValue {
        line: usize,
        attribute: String,
        value: i64,
    },
}

/// Precondition violations of the inference engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("probability table was built from zero instances")]
    EmptyTable,

    #[error("cannot measure accuracy over an empty dataset")]
    EmptyDataset,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("malformed parameters: {0}")]
    Params(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
