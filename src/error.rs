use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeapError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// capacity is zero or not of the form (2^n)-1
    #[error("Illegal argument for capacity: {0} is not (2^n)-1")]
    InvalidCapacity(usize),

    /// insert on a full heap that is not allowed to grow
    #[error("Priority Queue full - capacity: {capacity}")]
    Full { capacity: usize },
}

#[test]
fn full_message() {
    let err = HeapError::Full { capacity: 3 };
    assert_eq!(err.to_string(), "Priority Queue full - capacity: 3");
}

#[test]
fn invalid_capacity_message() {
    let err = HeapError::InvalidCapacity(10);
    assert_eq!(err.to_string(), "Illegal argument for capacity: 10 is not (2^n)-1");
}
