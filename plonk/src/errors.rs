use ark_std::{error, fmt};
use turbo_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// A challenge or evaluation was read before it was written.
    MissingTranscriptEntry(&'static str),
    /// A challenge or evaluation was written twice.
    DuplicateTranscriptEntry(&'static str),
    /// The small and large evaluation domains are inconsistent.
    DomainMismatch {
        /// Size of the small domain.
        size: usize,
        /// Size of the large domain.
        large_size: usize,
    },
    /// The worker chunks do not tile the large domain.
    InvalidChunking {
        /// Number of workers.
        num_threads: usize,
        /// Rows per worker.
        thread_size: usize,
        /// Size of the large domain.
        large_size: usize,
    },
    /// More public inputs than rows in the circuit.
    TooManyPublicInputs {
        /// Number of public inputs.
        inputs: usize,
        /// Circuit size.
        circuit_size: usize,
    },
    /// A polynomial or buffer has the wrong length.
    PolynomialSizeMismatch {
        /// Name of the offending polynomial or buffer.
        name: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// Division by zero.
    DivisionByZero,
    /// The degree of the polynomial is higher than the maximum degree supported.
    DegreeError,
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            MissingTranscriptEntry(name) => write!(f, "Transcript entry `{}` is missing.", name),
            DuplicateTranscriptEntry(name) => {
                write!(f, "Transcript entry `{}` was already written.", name)
            }
            DomainMismatch { size, large_size } => write!(
                f,
                "Domain mismatch: small domain {} and large domain {}.",
                size, large_size
            ),
            InvalidChunking {
                num_threads,
                thread_size,
                large_size,
            } => write!(
                f,
                "Invalid chunking: {} threads of {} rows do not tile {} rows.",
                num_threads, thread_size, large_size
            ),
            TooManyPublicInputs {
                inputs,
                circuit_size,
            } => write!(
                f,
                "Too many public inputs: {} for a circuit of size {}.",
                inputs, circuit_size
            ),
            PolynomialSizeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "Polynomial `{}` has length {}, expected {}.",
                name, actual, expected
            ),
            DivisionByZero => f.write_str("Division by zero."),
            DegreeError => f.write_str(
                "The degree of the polynomial is higher than the maximum degree supported.",
            ),
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}
