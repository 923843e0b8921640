// ============================================================================
// ESCALARES FLEXIBLES - El backend mezcla números y strings para los códigos
// ============================================================================

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Escalar {
    Texto(String),
    Entero(i64),
    Decimal(f64),
    Logico(bool),
}

impl Escalar {
    fn into_texto(self) -> String {
        match self {
            Escalar::Texto(texto) => texto,
            Escalar::Entero(n) => n.to_string(),
            Escalar::Decimal(n) => n.to_string(),
            Escalar::Logico(b) => b.to_string(),
        }
    }
}

/// Acepta `"7"` o `7` y lo guarda como texto
pub fn texto<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Escalar::deserialize(deserializer).map(Escalar::into_texto)
}

/// Igual que [`texto`] pero admite `null` o campo ausente (con `#[serde(default)]`)
pub fn texto_opcional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Escalar>::deserialize(deserializer).map(|valor| valor.map(Escalar::into_texto))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Prueba {
        #[serde(deserialize_with = "super::texto")]
        codigo: String,
        #[serde(default, deserialize_with = "super::texto_opcional")]
        opcional: Option<String>,
    }

    #[test]
    fn acepta_numeros_y_strings() {
        let a: Prueba = serde_json::from_str(r#"{"codigo": 7, "opcional": "x"}"#).unwrap();
        assert_eq!(a.codigo, "7");
        assert_eq!(a.opcional.as_deref(), Some("x"));

        let b: Prueba = serde_json::from_str(r#"{"codigo": "CL-7", "opcional": 12.5}"#).unwrap();
        assert_eq!(b.codigo, "CL-7");
        assert_eq!(b.opcional.as_deref(), Some("12.5"));
    }

    #[test]
    fn opcional_ausente_o_null() {
        let a: Prueba = serde_json::from_str(r#"{"codigo": 1}"#).unwrap();
        assert_eq!(a.opcional, None);
        let b: Prueba = serde_json::from_str(r#"{"codigo": 1, "opcional": null}"#).unwrap();
        assert_eq!(b.opcional, None);
    }
}
