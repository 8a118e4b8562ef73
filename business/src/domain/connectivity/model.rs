/// Raw answer of the upstream API to a connectivity probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub status_code: u16,
    pub body: String,
}

impl ProbeReport {
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
