use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{0}")]
    Cli(String),
    #[error("unknown scene `{0}`; available: {names}", names = scene::preset::NAMES.join(", "))]
    UnknownScene(String),
    #[error("unsupported output format: {0}")]
    OutputFormat(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode png: {0}")]
    Png(#[from] png::EncodingError),
    #[error("cannot encode exr: {0}")]
    Exr(#[from] exr::error::Error),
}
