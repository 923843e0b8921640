// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod seleccion;
pub mod app_state;

pub use reactivity::*;
pub use seleccion::*;
pub use app_state::*;
