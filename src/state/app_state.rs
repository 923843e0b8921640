// ============================================================================
// APP STATE - Estado global del formulario
// ============================================================================

use crate::state::reactivity::ReactiveState;
use crate::state::seleccion::{Nivel, Seleccion, Ticket};
use crate::viewmodels::formulario::FormView;

/// Mensaje para el usuario que no es un error (se muestra con `alert`)
#[derive(Debug, Clone, PartialEq)]
pub enum Aviso {
    Informacion(String),
    Advertencia(String),
}

impl Aviso {
    pub fn mensaje(&self) -> &str {
        match self {
            Aviso::Informacion(msg) | Aviso::Advertencia(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstadoFormulario {
    pub seleccion: Seleccion,
    pub vista: FormView,
    pub avisos: Vec<Aviso>,
}

/// Estado compartido entre el orquestador y la capa web
#[derive(Clone)]
pub struct AppState {
    estado: ReactiveState<EstadoFormulario>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            estado: ReactiveState::new(EstadoFormulario::default()),
        }
    }

    pub fn leer<R>(&self, lector: impl FnOnce(&EstadoFormulario) -> R) -> R {
        self.estado.with(lector)
    }

    /// Modifica el estado y notifica (re-render)
    pub fn modificar<R>(&self, cambio: impl FnOnce(&mut EstadoFormulario) -> R) -> R {
        self.estado.update(cambio)
    }

    /// Modifica sin re-render (tecleo del usuario, tickets)
    pub fn modificar_silencioso<R>(&self, cambio: impl FnOnce(&mut EstadoFormulario) -> R) -> R {
        self.estado.update_silent(cambio)
    }

    /// Emite un ticket de generación para el nivel indicado
    pub fn emitir(&self, nivel: Nivel) -> Ticket {
        self.modificar_silencioso(|estado| estado.seleccion.emitir(nivel))
    }

    pub fn vigente(&self, ticket: &Ticket) -> bool {
        self.leer(|estado| estado.seleccion.vigente(ticket))
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.estado.subscribe(callback);
    }

    pub fn vista(&self) -> FormView {
        self.leer(|estado| estado.vista.clone())
    }

    pub fn seleccion(&self) -> Seleccion {
        self.leer(|estado| estado.seleccion.clone())
    }

    /// Vacía la cola de avisos pendientes
    pub fn tomar_avisos(&self) -> Vec<Aviso> {
        self.modificar_silencioso(|estado| std::mem::take(&mut estado.avisos))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
