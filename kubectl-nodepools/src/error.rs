use kube::config::InferConfigError;
use kube::config::KubeconfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Kubeconfig(#[from] KubeconfigError),

    #[error(transparent)]
    InferConfig(#[from] InferConfigError),

    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("unrecognized --output type {0}, only name and json are valid")]
    UnrecognizedOutput(String),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid log level: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("interrupted")]
    Interrupted,
}
