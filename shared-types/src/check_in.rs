use serde::{Deserialize, Serialize};

/// One user-submitted rating event for a store. Sent once and discarded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub store_id: String,
    pub busy: f64,
    pub line: f64,
    pub hygiene: f64,
    pub mask: f64,
}

impl CheckIn {
    /// The form fields the check-in endpoint reads, in wire order.
    pub fn form_params(&self) -> [(&'static str, String); 5] {
        [
            ("storeId", self.store_id.clone()),
            ("busy", self.busy.to_string()),
            ("line", self.line.to_string()),
            ("hygiene", self.hygiene.to_string()),
            ("mask", self.mask.to_string()),
        ]
    }
}
