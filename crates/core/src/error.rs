use crate::interaction::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum VaidyaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("patient not found: {0}")]
    PatientNotFound(String),
    #[error("doctor not found: {0}")]
    DoctorNotFound(u32),
    #[error("interaction rule lookup failed: {0}")]
    LookupFailure(#[from] LookupError),

    #[error("data directory does not exist: {path}", path = path.display())]
    MissingDataDir { path: std::path::PathBuf },
    #[error("required data file is missing: {path}", path = path.display())]
    MissingDataFile { path: std::path::PathBuf },
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),

    #[error("text error: {0}")]
    Text(#[from] vaidya_types::TextError),
}

pub type VaidyaResult<T> = std::result::Result<T, VaidyaError>;
