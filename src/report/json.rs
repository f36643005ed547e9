use crate::sarif::SarifLog;

pub fn to_json(log: &SarifLog) -> Result<String, serde_json::Error> {
    serde_json::to_string(log)
}

pub fn to_json_pretty(log: &SarifLog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(log)
}
