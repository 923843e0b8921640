pub mod casos_api;
pub mod rutas;
#[cfg(target_arch = "wasm32")]
pub mod api_client;
#[cfg(test)]
pub mod mock;

pub use casos_api::CasosApi;
#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
