use serde::{Deserialize, Serialize};

use super::escalar;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Especializacion {
    #[serde(deserialize_with = "escalar::texto")]
    pub cod_especializacion: String,
    pub nom_especializacion: String,
}
