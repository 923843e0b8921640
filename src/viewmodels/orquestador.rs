// ============================================================================
// ORQUESTADOR - Lógica del formulario de casos y expedientes
// ============================================================================
// Cadena de cargas: cliente → casos activos → caso → expedientes → expediente.
// Cada operación espera su respuesta antes de tocar el estado dependiente.
// El estado nunca se toma prestado a través de un `.await`.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, Funcionalidad, Operacion, OrquestadorError};
use crate::models::{Caso, Cliente, CriterioBusqueda, EstadoSalud, NuevoCaso};
use crate::services::CasosApi;
use crate::state::{AppState, Aviso, EstadoFormulario, Nivel, Ticket};
use crate::utils::constants::*;
use crate::viewmodels::formulario::{CampoId, CampoLargo, Pestana};

type Resultado = Result<(), OrquestadorError>;

pub struct Orquestador<A> {
    api: Rc<A>,
    state: AppState,
}

impl<A> Clone for Orquestador<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: CasosApi> Orquestador<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, AppState::new())
    }

    pub fn with_state(api: A, state: AppState) -> Self {
        Self {
            api: Rc::new(api),
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Error si otra petición más nueva reemplazó a la del ticket
    fn comprobar(&self, ticket: &Ticket) -> Resultado {
        if self.state.vigente(ticket) {
            Ok(())
        } else {
            log::debug!("⏭️ Respuesta obsoleta descartada ({:?})", ticket.nivel());
            Err(OrquestadorError::Obsoleta)
        }
    }

    fn avisar(estado: &mut EstadoFormulario, aviso: Aviso) {
        log::info!("💬 {}", aviso.mensaje());
        estado.avisos.push(aviso);
    }

    // ------------------------------------------------------------------------
    // Cliente
    // ------------------------------------------------------------------------

    /// Busca clientes por "nombre apellido"
    pub async fn buscar_cliente(&self, texto: &str) -> Resultado {
        let criterio = CriterioBusqueda::parse(texto)
            .ok_or_else(|| OrquestadorError::Validacion(MSG_NOMBRE_APELLIDO.to_string()))?;

        let ticket = self.state.emitir(Nivel::Busqueda);
        let resultado = self
            .api
            .buscar_clientes(&criterio.nombre, &criterio.apellido)
            .await;
        self.comprobar(&ticket)?;
        let clientes = resultado.map_err(OrquestadorError::red(Operacion::BuscarCliente))?;

        log::info!("✅ {} cliente(s) encontrados", clientes.len());
        self.state.modificar(|estado| {
            if clientes.is_empty() {
                estado.vista.ocultar_resultados();
                Self::avisar(estado, Aviso::Advertencia(MSG_CLIENTE_NO_ENCONTRADO.to_string()));
            } else {
                estado.vista.mostrar_resultados(clientes);
            }
        });
        Ok(())
    }

    /// Busca un cliente por número de documento y lo selecciona
    pub async fn buscar_cliente_por_documento(&self, documento: &str) -> Resultado {
        let documento = documento.trim();
        if documento.is_empty() {
            return Err(OrquestadorError::Validacion(MSG_DOCUMENTO_REQUERIDO.to_string()));
        }

        let ticket = self.state.emitir(Nivel::Busqueda);
        let resultado = self.api.cliente_por_documento(documento).await;
        self.comprobar(&ticket)?;

        match resultado {
            Ok(cliente) => self.seleccionar_cliente(cliente).await,
            Err(err) if err.es_no_encontrado() => {
                self.state.modificar(|estado| {
                    estado.vista.ocultar_resultados();
                    Self::avisar(estado, Aviso::Advertencia(MSG_CLIENTE_NO_ENCONTRADO.to_string()));
                });
                Ok(())
            }
            Err(err) => Err(OrquestadorError::red(Operacion::BuscarCliente)(err)),
        }
    }

    /// Click en una fila del panel de resultados
    pub async fn seleccionar_resultado(&self, indice: usize) -> Resultado {
        let cliente = self
            .state
            .leer(|estado| estado.vista.resultados.clientes.get(indice).cloned());
        match cliente {
            Some(cliente) => self.seleccionar_cliente(cliente).await,
            None => {
                log::warn!("⚠️ Resultado {} fuera de rango", indice);
                Ok(())
            }
        }
    }

    pub async fn seleccionar_cliente(&self, cliente: Cliente) -> Resultado {
        log::info!("👤 Cliente seleccionado: {} ({})", cliente.nombre_completo(), cliente.cod_cliente);
        let cod_cliente = cliente.cod_cliente.clone();

        self.state.modificar(|estado| {
            estado.vista.limpiar_caso();
            estado.vista.rellenar_cliente(&cliente);
            estado.vista.ocultar_resultados();
            estado.vista.botones.crear_caso = true;
            estado.vista.casos_activos.cargar(&[]);
            estado.seleccion.cambiar_cliente(cliente);
        });

        self.cargar_casos_activos(&cod_cliente).await
    }

    // ------------------------------------------------------------------------
    // Caso
    // ------------------------------------------------------------------------

    /// Llena el desplegable y carga automáticamente el primer caso
    pub async fn cargar_casos_activos(&self, cod_cliente: &str) -> Resultado {
        let ticket = self.state.emitir(Nivel::Casos);
        let resultado = self.api.casos_activos(cod_cliente).await;
        self.comprobar(&ticket)?;
        let casos = resultado.map_err(OrquestadorError::red(Operacion::CargarCasosActivos))?;

        log::info!("📂 {} caso(s) activos para cliente {}", casos.len(), cod_cliente);
        let primero = casos.first().map(|caso| caso.no_caso);
        self.state.modificar(|estado| {
            estado.vista.casos_activos.cargar(&casos);
            if let Some(no_caso) = primero {
                estado.vista.casos_activos.seleccionar(no_caso);
            }
        });

        match primero {
            Some(no_caso) => self.cargar_caso(no_caso).await,
            None => Ok(()),
        }
    }

    /// Cambio en el desplegable; el placeholder no hace nada
    pub async fn seleccionar_caso(&self, valor: &str) -> Resultado {
        let valor = valor.trim();
        if valor.is_empty() {
            self.state
                .modificar_silencioso(|estado| estado.vista.casos_activos.seleccionado.clear());
            return Ok(());
        }

        let no_caso: u32 = valor
            .parse()
            .map_err(|_| OrquestadorError::Validacion(MSG_CASO_INVALIDO.to_string()))?;
        self.state
            .modificar_silencioso(|estado| estado.vista.casos_activos.seleccionar(no_caso));
        self.cargar_caso(no_caso).await
    }

    pub async fn cargar_caso(&self, no_caso: u32) -> Resultado {
        log::info!("📋 Cargando caso {}", no_caso);
        let ticket = self.state.emitir(Nivel::Caso);
        let resultado = self.api.obtener_caso(no_caso).await;
        self.comprobar(&ticket)?;
        let caso = resultado.map_err(OrquestadorError::red(Operacion::CargarCaso))?;

        self.state.modificar(|estado| {
            estado.vista.rellenar_caso(&caso);
            // Caso cerrado: solo lectura. Abierto: la habilitación no cambia.
            if caso.esta_cerrado() {
                log::info!("🔒 Caso {} cerrado, edición bloqueada", caso.no_caso);
                estado.vista.bloquear_caso();
            }
            estado.seleccion.cambiar_caso(Some(caso));
            estado.seleccion.modo_edicion = false;
        });
        Ok(())
    }

    /// Prepara el formulario para un caso nuevo del cliente seleccionado
    pub async fn nuevo_caso(&self) -> Resultado {
        if self.state.leer(|estado| estado.seleccion.cliente.is_none()) {
            return Err(OrquestadorError::Validacion(MSG_SELECCIONE_CLIENTE.to_string()));
        }

        // La lista de casos en vuelo tampoco debe pisar el caso nuevo
        self.state.emitir(Nivel::Casos);
        let ticket = self.state.emitir(Nivel::Caso);
        self.state.modificar(|estado| {
            estado.vista.habilitar_edicion_caso();
            estado.seleccion.cambiar_caso(None);
            estado.seleccion.modo_edicion = true;
        });

        self.cargar_especializaciones(&ticket).await
    }

    /// Por ahora solo se consulta la lista y se vacía el campo
    async fn cargar_especializaciones(&self, ticket: &Ticket) -> Resultado {
        let resultado = self.api.especializaciones().await;
        self.comprobar(ticket)?;
        let especializaciones =
            resultado.map_err(OrquestadorError::red(Operacion::CargarEspecializaciones))?;

        log::debug!("📚 {} especializaciones disponibles", especializaciones.len());
        self.state
            .modificar(|estado| estado.vista.escribir(CampoId::Especializacion, ""));
        Ok(())
    }

    /// Los campos del caso solo se guardan en modo edición y con el caso abierto
    fn exigir_edicion(&self) -> Resultado {
        self.state.leer(|estado| {
            let seleccion = &estado.seleccion;
            if seleccion.cliente.is_none() {
                return Err(OrquestadorError::Validacion(MSG_CLIENTE_NO_SELECCIONADO.to_string()));
            }
            if seleccion.permite_editar_caso() {
                return Ok(());
            }
            let cerrado = seleccion.caso.as_ref().map(Caso::esta_cerrado).unwrap_or(false);
            let mensaje = if cerrado { MSG_CASO_CERRADO } else { MSG_MODO_EDICION };
            Err(OrquestadorError::Validacion(mensaje.to_string()))
        })
    }

    /// Datos del formulario de caso para crear/actualizar
    fn formulario_caso(&self, sin_cliente: &str) -> Result<NuevoCaso, OrquestadorError> {
        self.state.leer(|estado| {
            let cliente = estado
                .seleccion
                .cliente
                .as_ref()
                .ok_or_else(|| OrquestadorError::Validacion(sin_cliente.to_string()))?;

            let formulario = &estado.vista.caso;
            if formulario.fecha_inicio.esta_vacio()
                || formulario.valor.esta_vacio()
                || formulario.especializacion.esta_vacio()
            {
                return Err(OrquestadorError::Validacion(MSG_CAMPOS_REQUERIDOS.to_string()));
            }

            Ok(NuevoCaso {
                fecha_inicio: formulario.fecha_inicio.valor.trim().to_string(),
                fecha_fin: None,
                valor: formulario.valor.valor.trim().to_string(),
                cod_especializacion: formulario.especializacion.valor.trim().to_string(),
                cod_cliente: cliente.cod_cliente.clone(),
            })
        })
    }

    /// Botón guardar (solo en modo edición): actualiza el caso abierto
    /// seleccionado o crea uno nuevo
    pub async fn guardar(&self) -> Resultado {
        self.exigir_edicion()?;
        let caso_abierto = self.state.leer(|estado| {
            estado
                .seleccion
                .caso
                .as_ref()
                .map(|caso| !caso.esta_cerrado())
                .unwrap_or(false)
        });
        if caso_abierto {
            self.actualizar_caso().await
        } else {
            self.guardar_caso().await
        }
    }

    /// `POST /caso/crear` con los datos del formulario
    pub async fn guardar_caso(&self) -> Resultado {
        self.exigir_edicion()?;
        let nuevo = self.formulario_caso(MSG_CLIENTE_NO_SELECCIONADO)?;

        let ticket = self.state.emitir(Nivel::Caso);
        let respuesta = self
            .api
            .crear_caso(&nuevo)
            .await
            .map_err(OrquestadorError::red(Operacion::CrearCaso))?;

        if !respuesta.success {
            let mensaje = respuesta
                .mensaje
                .unwrap_or_else(|| Operacion::CrearCaso.mensaje_error().to_string());
            return Err(OrquestadorError::Rechazada(mensaje));
        }
        let no_caso = respuesta.no_caso.ok_or_else(|| {
            OrquestadorError::Rechazada("El backend no devolvió el número de caso".to_string())
        })?;

        // El caso ya existe en el backend: el aviso sale aunque haya otra selección
        let vigente = self.state.vigente(&ticket);
        self.state.modificar(|estado| {
            Self::avisar(estado, Aviso::Informacion(format!("Caso {} creado exitosamente", no_caso)));
            if !vigente {
                log::debug!("⏭️ Caso {} creado pero la selección cambió", no_caso);
                return;
            }
            estado.vista.limpiar_caso();
            estado.vista.asignar_no_caso(no_caso);
            estado.vista.bloquear_caso();
            estado.vista.botones.crear_caso = true;
            estado.seleccion.cambiar_caso(Some(nuevo.into_caso(no_caso)));
            estado.seleccion.modo_edicion = false;
        });
        Ok(())
    }

    /// `PUT /caso/{noCaso}` sobre el caso abierto seleccionado
    pub async fn actualizar_caso(&self) -> Resultado {
        let caso = self
            .state
            .leer(|estado| estado.seleccion.caso.clone())
            .ok_or_else(|| OrquestadorError::Validacion(MSG_SELECCIONE_CASO.to_string()))?;
        if caso.esta_cerrado() {
            return Err(OrquestadorError::Validacion(MSG_CASO_CERRADO.to_string()));
        }
        self.exigir_edicion()?;
        let cambios = self.formulario_caso(MSG_CLIENTE_NO_SELECCIONADO)?;

        let ticket = self.state.emitir(Nivel::Caso);
        let resultado = self.api.actualizar_caso(caso.no_caso, &cambios).await;
        self.comprobar(&ticket)?;
        let respuesta = resultado.map_err(OrquestadorError::red(Operacion::ActualizarCaso))?;

        if !respuesta.success {
            let mensaje = respuesta
                .mensaje
                .unwrap_or_else(|| Operacion::ActualizarCaso.mensaje_error().to_string());
            return Err(OrquestadorError::Rechazada(mensaje));
        }

        let mensaje = respuesta
            .mensaje
            .unwrap_or_else(|| format!("Caso {} actualizado", caso.no_caso));
        self.state.modificar(|estado| {
            Self::avisar(estado, Aviso::Informacion(mensaje));
            estado.vista.bloquear_caso();
            estado.seleccion.modo_edicion = false;
        });

        self.cargar_caso(caso.no_caso).await
    }

    // ------------------------------------------------------------------------
    // Pestañas y expediente
    // ------------------------------------------------------------------------

    pub async fn cambiar_pestana(&self, pestana: Pestana) -> Resultado {
        let no_caso = self.state.modificar(|estado| {
            estado.vista.pestana = pestana;
            estado.seleccion.no_caso()
        });

        match (pestana, no_caso) {
            (Pestana::Expediente, Some(no_caso)) => self.cargar_expedientes(no_caso).await,
            _ => Ok(()),
        }
    }

    /// Solo se muestra (y se permite crear) un expediente por caso
    pub async fn cargar_expedientes(&self, no_caso: u32) -> Resultado {
        let ticket = self.state.emitir(Nivel::Expedientes);
        let resultado = self.api.expedientes_caso(no_caso).await;
        self.comprobar(&ticket)?;
        let expedientes = resultado.map_err(OrquestadorError::red(Operacion::CargarExpedientes))?;

        log::info!("🗂️ {} expediente(s) en caso {}", expedientes.len(), no_caso);
        match expedientes.first() {
            Some(primero) => {
                let consec_expe = primero.consec_expe;
                self.state
                    .modificar(|estado| estado.vista.botones.crear_expediente = false);
                self.cargar_expediente(consec_expe).await
            }
            None => {
                self.state.modificar(|estado| {
                    estado.vista.botones.crear_expediente = true;
                    estado.vista.limpiar_expediente();
                    estado.seleccion.expediente = None;
                });
                Ok(())
            }
        }
    }

    pub async fn cargar_expediente(&self, consec_expe: u32) -> Resultado {
        let ticket = self.state.emitir(Nivel::Expediente);
        let resultado = self.api.obtener_expediente(consec_expe).await;
        self.comprobar(&ticket)?;
        let expediente = resultado.map_err(OrquestadorError::red(Operacion::CargarExpediente))?;

        self.state.modificar(|estado| {
            estado.vista.rellenar_expediente(&expediente);
            estado.seleccion.expediente = Some(expediente);
        });
        Ok(())
    }

    pub fn nuevo_expediente(&self) -> Resultado {
        if self.state.leer(|estado| estado.seleccion.caso.is_none()) {
            return Err(OrquestadorError::Validacion(MSG_SELECCIONE_CASO.to_string()));
        }

        self.state.modificar(|estado| {
            estado.vista.habilitar_nuevo_expediente();
            estado.seleccion.modo_edicion = true;
        });
        Ok(())
    }

    pub fn guardar_expediente(&self) -> Resultado {
        Self::no_implementado(Funcionalidad::GuardarExpediente)
    }

    pub fn imprimir_caso(&self) -> Resultado {
        Self::no_implementado(Funcionalidad::ImprimirCaso)
    }

    pub fn adjuntar_documento(&self) -> Resultado {
        Self::no_implementado(Funcionalidad::AdjuntarDocumento)
    }

    fn no_implementado(funcionalidad: Funcionalidad) -> Resultado {
        log::warn!("🚧 Funcionalidad no implementada: {}", funcionalidad.descripcion());
        Err(OrquestadorError::NoImplementado(funcionalidad))
    }

    // ------------------------------------------------------------------------
    // Entrada del usuario y modal
    // ------------------------------------------------------------------------

    /// Valor tecleado en un campo (sin re-render)
    pub fn escribir(&self, campo: CampoId, valor: &str) {
        self.state
            .modificar_silencioso(|estado| estado.vista.escribir(campo, valor));
    }

    pub fn escribir_editor(&self, texto: &str) {
        self.state
            .modificar_silencioso(|estado| estado.vista.modal.texto = texto.to_string());
    }

    pub fn abrir_editor(&self, campo: CampoLargo) {
        self.state.modificar(|estado| estado.vista.abrir_editor(campo));
    }

    /// Copia el texto del modal al campo de origen y cierra
    pub fn guardar_editor(&self, texto: &str) {
        let campo = self.state.modificar(|estado| estado.vista.guardar_editor(texto));
        if campo.is_none() {
            log::warn!("⚠️ Guardar editor sin campo de origen");
        }
    }

    /// Cierra el modal descartando los cambios
    pub fn cerrar_editor(&self) {
        self.state.modificar(|estado| estado.vista.cerrar_editor());
    }

    // ------------------------------------------------------------------------
    // Arranque
    // ------------------------------------------------------------------------

    pub async fn verificar_backend(&self) -> Result<EstadoSalud, ApiError> {
        let salud = self.api.salud().await?;
        if salud.esta_ok() {
            log::info!("✅ Backend disponible: {}", salud.mensaje.as_deref().unwrap_or("ok"));
        } else {
            log::warn!("⚠️ Backend responde con estado: {}", salud.status);
        }
        Ok(salud)
    }
}
