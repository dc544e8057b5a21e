use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::resolver::ResolveError;
use crate::network::NetworkError;
use crate::sink::EmitError;

// * Top-level error for the command boundary and the binary.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}
