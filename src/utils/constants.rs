// Textos visibles por el usuario (alertas, placeholders, títulos)

/// Opción vacía del desplegable de casos activos
pub const PLACEHOLDER_CASOS: &str = "-- Seleccionar --";

pub const MSG_NOMBRE_APELLIDO: &str = "Por favor ingrese nombre y apellido";
pub const MSG_DOCUMENTO_REQUERIDO: &str = "Por favor ingrese un número de documento";
pub const MSG_CLIENTE_NO_ENCONTRADO: &str = "Cliente no encontrado";
pub const MSG_SELECCIONE_CLIENTE: &str = "Por favor seleccione un cliente";
pub const MSG_CLIENTE_NO_SELECCIONADO: &str = "Cliente no seleccionado";
pub const MSG_CAMPOS_REQUERIDOS: &str = "Complete todos los campos requeridos";
pub const MSG_SELECCIONE_CASO: &str = "Seleccione un caso primero";
pub const MSG_CASO_CERRADO: &str = "No se puede actualizar un caso cerrado";
pub const MSG_MODO_EDICION: &str = "El caso no está en modo edición";
pub const MSG_CASO_INVALIDO: &str = "Número de caso inválido";

pub const TITULO_EDITAR_SUCESO: &str = "Editar Suceso";
pub const TITULO_EDITAR_RESULTADO: &str = "Editar Resultado";
