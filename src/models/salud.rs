use serde::{Deserialize, Serialize};

/// Respuesta de `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadoSalud {
    pub status: String,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl EstadoSalud {
    pub fn esta_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
