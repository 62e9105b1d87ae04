use crate::Id;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node with uid={0} is not in the graph")]
    NodeNotFound(Id),

    #[error("{0}")]
    Domain(String),

    #[error("item {uid} has no comparable attribute `{label}`")]
    MissingAttribute { uid: Id, label: String },
}
