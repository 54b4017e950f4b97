use redex_eval::EvalError;

/// Failure of a driver run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl DriverError {
    /// Process exit status: 1 for evaluation failures, 2 for I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Eval(_) => 1,
            DriverError::Io { .. } => 2,
        }
    }
}
