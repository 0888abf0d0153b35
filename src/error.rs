use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("could not read maze {path:?}: {source}")]
    MazeIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("maze has no rows")]
    EmptyMaze,
    #[error("maze has no open cell to stand on")]
    NoOpenCell,
    #[error("texture error: {0}")]
    Texture(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
