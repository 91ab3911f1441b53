use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    /// A call into the automation primitive layer failed. Propagated to the
    /// caller unmodified; primitive calls are never retried.
    #[error("automation primitive failed: {0}")]
    Primitive(#[from] anyhow::Error),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DriverError>;
