// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al backend de casos
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    Caso, Cliente, Especializacion, EstadoSalud, Expediente, NuevoCaso, RespuestaCreacion,
    RespuestaOperacion, ResumenExpediente,
};
use crate::services::casos_api::CasosApi;
use crate::services::rutas;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, ruta: &str) -> String {
        format!("{}{}", self.base_url, ruta)
    }

    async fn get<T: DeserializeOwned>(&self, ruta: &str) -> Result<T, ApiError> {
        let url = self.url(ruta);
        log::debug!("🌐 GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;

        leer_json(response).await
    }

    async fn post<B, T>(&self, ruta: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(ruta);
        log::debug!("🌐 POST {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Serializacion(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;

        leer_json(response).await
    }

    async fn put<B, T>(&self, ruta: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(ruta);
        log::debug!("🌐 PUT {}", url);

        let response = Request::put(&url)
            .json(body)
            .map_err(|e| ApiError::Serializacion(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;

        leer_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convierte la respuesta en `T`, o en `ApiError::Http` si no es 2xx
async fn leer_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let detalle = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        return Err(ApiError::Http { status, detalle });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decodificacion(e.to_string()))
}

/// Codifica un segmento de ruta (espacios, tildes, `/`)
fn segmento(valor: &str) -> String {
    js_sys::encode_uri_component(valor).into()
}

impl CasosApi for ApiClient {
    async fn buscar_clientes(&self, nombre: &str, apellido: &str) -> Result<Vec<Cliente>, ApiError> {
        log::info!("🔍 Buscando cliente: {} {}", nombre, apellido);
        self.get(&rutas::buscar_cliente(&segmento(nombre), &segmento(apellido)))
            .await
    }

    async fn cliente_por_documento(&self, documento: &str) -> Result<Cliente, ApiError> {
        log::info!("🔍 Buscando cliente por documento: {}", documento);
        self.get(&rutas::cliente_por_documento(&segmento(documento)))
            .await
    }

    async fn casos_activos(&self, cod_cliente: &str) -> Result<Vec<Caso>, ApiError> {
        self.get(&rutas::casos_activos(&segmento(cod_cliente))).await
    }

    async fn obtener_caso(&self, no_caso: u32) -> Result<Caso, ApiError> {
        self.get(&rutas::caso(no_caso)).await
    }

    async fn crear_caso(&self, caso: &NuevoCaso) -> Result<RespuestaCreacion, ApiError> {
        log::info!("📝 Creando caso para cliente: {}", caso.cod_cliente);
        self.post(rutas::CREAR_CASO, caso).await
    }

    async fn actualizar_caso(&self, no_caso: u32, caso: &NuevoCaso) -> Result<RespuestaOperacion, ApiError> {
        log::info!("📝 Actualizando caso: {}", no_caso);
        self.put(&rutas::caso(no_caso), caso).await
    }

    async fn especializaciones(&self) -> Result<Vec<Especializacion>, ApiError> {
        self.get(rutas::ESPECIALIZACIONES).await
    }

    async fn expedientes_caso(&self, no_caso: u32) -> Result<Vec<ResumenExpediente>, ApiError> {
        self.get(&rutas::expedientes_caso(no_caso)).await
    }

    async fn obtener_expediente(&self, consec_expe: u32) -> Result<Expediente, ApiError> {
        self.get(&rutas::expediente(consec_expe)).await
    }

    async fn salud(&self) -> Result<EstadoSalud, ApiError> {
        self.get(rutas::SALUD).await
    }
}
