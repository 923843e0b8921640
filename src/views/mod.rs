// ============================================================================
// VIEWS - Render del estado en el DOM (sin lógica)
// ============================================================================

pub mod formulario_view;

pub use formulario_view::FormularioDom;
