pub mod escalar;
pub mod cliente;
pub mod caso;
pub mod expediente;
pub mod especializacion;
pub mod salud;

pub use cliente::{Cliente, CriterioBusqueda};
pub use caso::{Caso, NuevoCaso, RespuestaCreacion, RespuestaOperacion};
pub use expediente::{Expediente, ResumenExpediente};
pub use especializacion::Especializacion;
pub use salud::EstadoSalud;
