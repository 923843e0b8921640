pub mod formulario;
pub mod orquestador;

pub use formulario::{BotonId, CampoId, CampoLargo, FormView, Pestana};
pub use orquestador::Orquestador;
