use crate::domain::diagnostics::errors::DiagnosticsError;
use crate::domain::diagnostics::model::DiagnosticsReport;

pub trait GetDiagnosticsUseCase: Send + Sync {
    fn execute(&self) -> Result<DiagnosticsReport, DiagnosticsError>;
}
