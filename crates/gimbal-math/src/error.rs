/// Errors surfaced by the transform kernel.
///
/// Arithmetic, constructors and extractors are total over finite inputs;
/// only inversion and selector parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Gauss–Jordan elimination hit an exactly-zero pivot.
    #[error("mat4 is singular (not invertible)")]
    Singular,

    #[error("unknown frustum plane: `{0}`")]
    UnknownPlane(String),
}

pub type Result<T> = std::result::Result<T, MathError>;
