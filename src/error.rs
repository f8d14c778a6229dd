use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpscBufError {
    #[error("capacity must be nonzero")]
    ZeroCapacity,

    #[error("capacity {0} exceeds the largest supported pool size")]
    CapacityTooLarge(usize),

    #[error("failed to allocate a {0} byte pool")]
    AllocationFailed(usize),
}
