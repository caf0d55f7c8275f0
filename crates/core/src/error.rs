#[derive(Debug, thiserror::Error)]
pub enum BpError {
    /// Loader failures keep their user-facing message unchanged.
    #[error(transparent)]
    Load(#[from] openehr::OpenEhrError),
    #[error("failed to render FHIR output: {0}")]
    Fhir(#[from] fhir::FhirError),
    #[error("failed to write output: {0}")]
    Output(std::io::Error),
}

pub type BpResult<T> = std::result::Result<T, BpError>;
