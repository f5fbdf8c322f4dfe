use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
