// ============================================================================
// CASOS API - Contrato de la API REST de casos
// ============================================================================
// El orquestador depende de este trait; en el navegador lo implementa
// `ApiClient` (gloo-net) y en los tests un mock en memoria.
// ============================================================================

use crate::error::ApiError;
use crate::models::{
    Caso, Cliente, Especializacion, EstadoSalud, Expediente, NuevoCaso, RespuestaCreacion,
    RespuestaOperacion, ResumenExpediente,
};

/// Los futures no son `Send`: todo corre en el event loop del navegador
#[allow(async_fn_in_trait)]
pub trait CasosApi {
    /// `GET /cliente/buscar/{nombre}/{apellido}`
    async fn buscar_clientes(&self, nombre: &str, apellido: &str) -> Result<Vec<Cliente>, ApiError>;

    /// `GET /cliente/{documento}`
    async fn cliente_por_documento(&self, documento: &str) -> Result<Cliente, ApiError>;

    /// `GET /caso/activos/{codCliente}`
    async fn casos_activos(&self, cod_cliente: &str) -> Result<Vec<Caso>, ApiError>;

    /// `GET /caso/{noCaso}`
    async fn obtener_caso(&self, no_caso: u32) -> Result<Caso, ApiError>;

    /// `POST /caso/crear`
    async fn crear_caso(&self, caso: &NuevoCaso) -> Result<RespuestaCreacion, ApiError>;

    /// `PUT /caso/{noCaso}`
    async fn actualizar_caso(&self, no_caso: u32, caso: &NuevoCaso) -> Result<RespuestaOperacion, ApiError>;

    /// `GET /especializacion/`
    async fn especializaciones(&self) -> Result<Vec<Especializacion>, ApiError>;

    /// `GET /expediente/caso/{noCaso}`
    async fn expedientes_caso(&self, no_caso: u32) -> Result<Vec<ResumenExpediente>, ApiError>;

    /// `GET /expediente/{consecExpe}`
    async fn obtener_expediente(&self, consec_expe: u32) -> Result<Expediente, ApiError>;

    /// `GET /health`
    async fn salud(&self) -> Result<EstadoSalud, ApiError>;
}
