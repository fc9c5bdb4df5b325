use serde::Deserialize;

/// Untrusted structured suggestion returned by the model. Unknown extra
/// fields are dropped at deserialization; required-field checks belong to
/// the validator, not here.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ModelProposal {
    pub summary: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub reasoning: Option<String>,
}
