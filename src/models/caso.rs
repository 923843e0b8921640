use serde::{Deserialize, Serialize};

use super::escalar;

/// Caso tal como lo devuelve `/caso/{noCaso}` o `/caso/activos/{codCliente}`
/// (la lista de activos no trae `codCliente` ni `fechaFin`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caso {
    pub no_caso: u32,
    #[serde(default, deserialize_with = "escalar::texto_opcional")]
    pub cod_cliente: Option<String>,
    #[serde(default)]
    pub fecha_inicio: String,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default, deserialize_with = "escalar::texto")]
    pub valor: String,
    #[serde(default, deserialize_with = "escalar::texto")]
    pub cod_especializacion: String,
}

impl Caso {
    /// Un caso con fecha fin está cerrado y no se puede editar
    pub fn esta_cerrado(&self) -> bool {
        self.fecha_fin
            .as_deref()
            .map(|fecha| !fecha.trim().is_empty())
            .unwrap_or(false)
    }

    /// Texto de la opción en el desplegable de casos activos
    pub fn etiqueta_opcion(&self) -> String {
        format!("Caso {} - {}", self.no_caso, self.valor)
    }
}

/// Cuerpo de `POST /caso/crear` y `PUT /caso/{noCaso}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevoCaso {
    pub fecha_inicio: String,
    pub fecha_fin: Option<String>,
    pub valor: String,
    pub cod_especializacion: String,
    pub cod_cliente: String,
}

impl NuevoCaso {
    /// Caso recién creado con el número asignado por el servidor
    pub fn into_caso(self, no_caso: u32) -> Caso {
        Caso {
            no_caso,
            cod_cliente: Some(self.cod_cliente),
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            valor: self.valor,
            cod_especializacion: self.cod_especializacion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespuestaCreacion {
    pub success: bool,
    #[serde(default)]
    pub no_caso: Option<u32>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RespuestaOperacion {
    pub success: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
}
