use statrs::StatsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NestError {
    #[error("cannot sample with an empty live population")]
    EmptyPopulation,
    #[error("at least one iteration must be collected")]
    NoIterations,
    #[error("expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("invalid walk: {steps} steps from initial step {initial_step}")]
    InvalidWalk { steps: usize, initial_step: f64 },
    #[error("invalid data: {0}")]
    InvalidData(&'static str),
    #[error("invalid distribution parameters: {0}")]
    Distribution(#[from] StatsError),
}
