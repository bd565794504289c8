use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum PipelineError {
    /// The pivot queue would have no consumer and the run would stall.
    #[error("a pipeline needs at least one partition worker")]
    NoPartitionWorkers,
}
