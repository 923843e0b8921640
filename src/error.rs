// ============================================================================
// ERRORES - Taxonomía de errores de la API y de las operaciones del formulario
// ============================================================================

use thiserror::Error;

/// Error de la capa HTTP
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Red(String),
    #[error("HTTP error {status}: {detalle}")]
    Http { status: u16, detalle: String },
    #[error("Parse error: {0}")]
    Decodificacion(String),
    #[error("Serialization error: {0}")]
    Serializacion(String),
}

impl ApiError {
    /// El backend respondió 404
    pub fn es_no_encontrado(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

/// Operaciones con red, usadas para el mensaje genérico que ve el usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operacion {
    BuscarCliente,
    CargarCasosActivos,
    CargarCaso,
    CrearCaso,
    ActualizarCaso,
    CargarEspecializaciones,
    CargarExpedientes,
    CargarExpediente,
}

impl Operacion {
    pub fn mensaje_error(&self) -> &'static str {
        match self {
            Operacion::BuscarCliente => "Error al buscar cliente",
            Operacion::CargarCasosActivos => "Error al cargar casos activos",
            Operacion::CargarCaso => "Error al cargar caso",
            Operacion::CrearCaso => "Error al crear caso",
            Operacion::ActualizarCaso => "Error al actualizar caso",
            Operacion::CargarEspecializaciones => "Error al cargar especializaciones",
            Operacion::CargarExpedientes => "Error al cargar expedientes",
            Operacion::CargarExpediente => "Error al cargar expediente",
        }
    }
}

/// Funcionalidades de la pestaña expediente que todavía no existen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Funcionalidad {
    GuardarExpediente,
    ImprimirCaso,
    AdjuntarDocumento,
}

impl Funcionalidad {
    pub fn descripcion(&self) -> &'static str {
        match self {
            Funcionalidad::GuardarExpediente => "guardar expediente",
            Funcionalidad::ImprimirCaso => "imprimir caso con expediente",
            Funcionalidad::AdjuntarDocumento => "adjuntar documentos",
        }
    }
}

/// Error de una operación del orquestador
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrquestadorError {
    /// Validación de entrada; la operación se aborta sin tocar el estado
    #[error("{0}")]
    Validacion(String),
    #[error("{}: {fuente}", .operacion.mensaje_error())]
    Red { operacion: Operacion, fuente: ApiError },
    /// El backend respondió `success: false`
    #[error("Operación rechazada por el backend: {0}")]
    Rechazada(String),
    #[error("Funcionalidad no implementada: {}", .0.descripcion())]
    NoImplementado(Funcionalidad),
    /// Respuesta de una petición reemplazada por otra más nueva
    #[error("Respuesta obsoleta descartada")]
    Obsoleta,
}

impl OrquestadorError {
    pub fn red(operacion: Operacion) -> impl FnOnce(ApiError) -> Self {
        move |fuente| OrquestadorError::Red { operacion, fuente }
    }

    /// Las respuestas obsoletas no se muestran al usuario
    pub fn es_silencioso(&self) -> bool {
        matches!(self, OrquestadorError::Obsoleta)
    }

    /// Texto para `window.alert`
    pub fn mensaje_usuario(&self) -> String {
        match self {
            OrquestadorError::Validacion(msg) => msg.clone(),
            OrquestadorError::Red { operacion, .. } => operacion.mensaje_error().to_string(),
            OrquestadorError::Rechazada(msg) => msg.clone(),
            OrquestadorError::NoImplementado(funcionalidad) => format!(
                "Funcionalidad de {} (no implementada todavía)",
                funcionalidad.descripcion()
            ),
            OrquestadorError::Obsoleta => String::new(),
        }
    }
}
