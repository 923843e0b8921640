use serde::{Deserialize, Serialize};

use super::escalar;

/// Fila de `GET /expediente/caso/{noCaso}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenExpediente {
    pub consec_expe: u32,
    #[serde(default)]
    pub no_caso: Option<u32>,
    #[serde(default)]
    pub fecha_etapa: Option<String>,
}

/// Detalle de `GET /expediente/{consecExpe}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expediente {
    pub consec_expe: u32,
    #[serde(default)]
    pub no_caso: Option<u32>,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub cod_etapa: Option<String>,
    #[serde(default)]
    pub fecha_etapa: Option<String>,
    #[serde(default)]
    pub nom_etapa: Option<String>,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub n_instancia: Option<String>,
    /// Cédula del abogado
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub cedula: Option<String>,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub cod_lugar: Option<String>,
    #[serde(default)]
    pub nom_lugar: Option<String>,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub id_impugna: Option<String>,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub con_suceso: Option<String>,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub con_resul: Option<String>,
}
