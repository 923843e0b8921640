use serde::{Deserialize, Serialize};

use super::escalar;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(deserialize_with = "escalar::texto")]
    pub cod_cliente: String,
    pub nom_cliente: String,
    pub apell_cliente: String,
    #[serde(deserialize_with = "escalar::texto")]
    pub n_documento: String,
}

impl Cliente {
    /// "Nombre Apellido", tal como se escribe en el buscador
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nom_cliente, self.apell_cliente)
    }

    /// Texto de la fila en el panel de resultados
    pub fn etiqueta_resultado(&self) -> String {
        format!("{} - {}", self.nombre_completo(), self.n_documento)
    }
}

/// Nombre y apellido extraídos del texto del buscador
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterioBusqueda {
    pub nombre: String,
    pub apellido: String,
}

impl CriterioBusqueda {
    /// Primer token = nombre, el resto = apellido. `None` si hay menos de dos tokens.
    pub fn parse(texto: &str) -> Option<Self> {
        let mut tokens = texto.split_whitespace();
        let nombre = tokens.next()?;
        let apellido = tokens.collect::<Vec<_>>().join(" ");
        if apellido.is_empty() {
            return None;
        }
        Some(Self {
            nombre: nombre.to_string(),
            apellido,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_codigo_numerico() {
        let json = r#"{"codCliente": 7, "nomCliente": "Jane", "apellCliente": "Doe", "nDocumento": "1020"}"#;
        let cliente: Cliente = serde_json::from_str(json).unwrap();
        assert_eq!(cliente.cod_cliente, "7");
        assert_eq!(cliente.etiqueta_resultado(), "Jane Doe - 1020");
    }

    #[test]
    fn criterio_necesita_dos_tokens() {
        assert_eq!(CriterioBusqueda::parse(""), None);
        assert_eq!(CriterioBusqueda::parse("   "), None);
        assert_eq!(CriterioBusqueda::parse("Jane"), None);
        assert_eq!(CriterioBusqueda::parse("  Jane   "), None);
    }

    #[test]
    fn apellido_compuesto() {
        let criterio = CriterioBusqueda::parse("  María  de la   Cruz ").unwrap();
        assert_eq!(criterio.nombre, "María");
        assert_eq!(criterio.apellido, "de la Cruz");
    }
}
