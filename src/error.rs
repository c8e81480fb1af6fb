use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, PaperTearError>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum PaperTearError {
    /// A clip outline had fewer than three vertices, so there is nothing to
    /// triangulate. The plugin treats this as "no mesh", not a failure.
    EmptyOutline,
    /// A triangle referenced a vertex index outside the buffer.
    InvalidIndex,
}

impl std::error::Error for PaperTearError {}
