/// Error type for dense_nn
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    #[error("operand dimensions are incompatible")]
    DimensionErr,
}

pub type Result<T> = std::result::Result<T, Error>;
