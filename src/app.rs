// ============================================================================
// APP - Aplicación principal: eventos del DOM → orquestador → render
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, MouseEvent};

use crate::dom::{alert, on_change, on_click, on_dblclick, on_enter, on_input};
use crate::error::OrquestadorError;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::formulario::{BotonId, CampoId, CampoLargo};
use crate::viewmodels::Orquestador;
use crate::views::FormularioDom;

type Orq = Orquestador<ApiClient>;

/// Aplicación principal
pub struct App {
    orquestador: Orq,
    dom: FormularioDom,
    al_elegir: Rc<dyn Fn(usize)>,
}

impl App {
    /// Crear nueva aplicación sobre la página ya cargada
    pub fn new() -> Result<Self, JsValue> {
        let orquestador = Orquestador::new(ApiClient::new());
        let dom = FormularioDom::new()?;

        let al_elegir: Rc<dyn Fn(usize)> = {
            let orq = orquestador.clone();
            Rc::new(move |indice| {
                lanzar(&orq, move |o| async move { o.seleccionar_resultado(indice).await })
            })
        };

        // Varios cambios seguidos → un solo render
        let pendiente = Rc::new(Cell::new(false));
        orquestador.state().subscribe_to_changes(move || {
            if pendiente.replace(true) {
                return;
            }
            let pendiente = pendiente.clone();
            Timeout::new(0, move || {
                pendiente.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        let app = Self {
            orquestador,
            dom,
            al_elegir,
        };
        app.bind_events()?;
        Ok(app)
    }

    /// Renderizar aplicación
    pub fn render(&self) -> Result<(), JsValue> {
        let vista = self.orquestador.state().vista();
        self.dom.render(&vista, &self.al_elegir)
    }

    /// Comprueba el backend al arrancar (solo log)
    pub fn verificar_backend(&self) {
        let orq = self.orquestador.clone();
        spawn_local(async move {
            if let Err(e) = orq.verificar_backend().await {
                log::warn!("⚠️ Backend no disponible: {}", e);
            }
        });
    }

    fn bind_events(&self) -> Result<(), JsValue> {
        let orq = &self.orquestador;

        // Cada tecla se guarda en el view-model sin re-render
        for (campo, control) in self.dom.campos() {
            let orq = orq.clone();
            let campo = *campo;
            let lector = control.clone();
            on_input(control.target(), move |_: Event| orq.escribir(campo, &lector.valor()))?;
        }

        for boton in BotonId::TODOS {
            let Some(elemento) = self.dom.boton(boton) else {
                continue;
            };
            let orq = orq.clone();
            let handler: Box<dyn FnMut(MouseEvent)> = match boton {
                BotonId::BuscarCliente => Box::new(move |_| buscar_por_nombre(&orq)),
                BotonId::CrearCaso => {
                    Box::new(move |_| lanzar(&orq, |o| async move { o.nuevo_caso().await }))
                }
                BotonId::GuardarCaso => {
                    Box::new(move |_| lanzar(&orq, |o| async move { o.guardar().await }))
                }
                BotonId::CrearExpediente => {
                    Box::new(move |_| reportar(orq.state(), orq.nuevo_expediente()))
                }
                BotonId::GuardarExpediente => {
                    Box::new(move |_| reportar(orq.state(), orq.guardar_expediente()))
                }
                BotonId::ImprimirCaso => {
                    Box::new(move |_| reportar(orq.state(), orq.imprimir_caso()))
                }
                BotonId::AdjuntarDoc => {
                    Box::new(move |_| reportar(orq.state(), orq.adjuntar_documento()))
                }
                // Navegación entre sucesos/resultados: solo se habilitan
                BotonId::AnteriorSuceso
                | BotonId::SiguienteSuceso
                | BotonId::AnteriorResultado
                | BotonId::SiguienteResultado => continue,
            };
            on_click(elemento.as_ref(), handler)?;
        }

        if let Some(nombre) = self.dom.campo(CampoId::NombreApellido) {
            let orq = orq.clone();
            on_enter(nombre.target(), move || buscar_por_nombre(&orq))?;
        }

        if let Some(documento) = self.dom.campo(CampoId::NDocumento) {
            let orq = orq.clone();
            let lector = documento.clone();
            on_enter(documento.target(), move || {
                let documento = lector.valor();
                lanzar(&orq, move |o| async move {
                    o.buscar_cliente_por_documento(&documento).await
                });
            })?;
        }

        {
            let orq = orq.clone();
            let select = self.dom.casos_activos().clone();
            on_change(self.dom.casos_activos().as_ref(), move |_: Event| {
                let valor = select.value();
                lanzar(&orq, move |o| async move { o.seleccionar_caso(&valor).await });
            })?;
        }

        for (pestana, boton) in self.dom.pestanas() {
            let orq = orq.clone();
            let pestana = *pestana;
            on_click(boton.as_ref(), move |_| {
                lanzar(&orq, move |o| async move { o.cambiar_pestana(pestana).await })
            })?;
        }

        self.bind_modal()
    }

    fn bind_modal(&self) -> Result<(), JsValue> {
        let orq = &self.orquestador;

        for largo in [CampoLargo::Suceso, CampoLargo::Resultado] {
            if let Some(control) = self.dom.campo(largo.campo()) {
                let orq = orq.clone();
                on_dblclick(control.target(), move |_| orq.abrir_editor(largo))?;
            }
        }

        {
            let orq = orq.clone();
            let texto = self.dom.modal_texto().clone();
            on_input(self.dom.modal_texto().as_ref(), move |_: Event| {
                orq.escribir_editor(&texto.value())
            })?;
        }

        {
            let orq = orq.clone();
            let texto = self.dom.modal_texto().clone();
            on_click(self.dom.modal_guardar().as_ref(), move |_| {
                orq.guardar_editor(&texto.value())
            })?;
        }

        if let Some(cerrar) = self.dom.modal_cerrar() {
            let orq = orq.clone();
            on_click(cerrar.as_ref(), move |_| orq.cerrar_editor())?;
        }

        // Click en el fondo del modal (fuera del contenido) también cierra
        {
            let orq = orq.clone();
            let fondo: EventTarget = self.dom.modal().clone().into();
            on_click(self.dom.modal().as_ref(), move |e: MouseEvent| {
                if e.target().as_ref() == Some(&fondo) {
                    orq.cerrar_editor();
                }
            })?;
        }

        Ok(())
    }
}

fn buscar_por_nombre(orq: &Orq) {
    let texto = orq
        .state()
        .leer(|estado| estado.vista.campo(CampoId::NombreApellido).valor.clone());
    lanzar(orq, move |o| async move { o.buscar_cliente(&texto).await });
}

/// Ejecuta una operación asíncrona del orquestador y reporta el resultado
fn lanzar<F, Fut>(orq: &Orq, operacion: F)
where
    F: FnOnce(Orq) -> Fut + 'static,
    Fut: Future<Output = Result<(), OrquestadorError>> + 'static,
{
    let orq = orq.clone();
    spawn_local(async move {
        let resultado = operacion(orq.clone()).await;
        reportar(orq.state(), resultado);
    });
}

/// Errores y avisos pendientes → `window.alert`
fn reportar(state: &AppState, resultado: Result<(), OrquestadorError>) {
    match resultado {
        Ok(()) => {}
        Err(err) if err.es_silencioso() => {}
        Err(err @ OrquestadorError::Validacion(_)) => {
            log::warn!("⚠️ {}", err);
            alert(&err.mensaje_usuario());
        }
        Err(err) => {
            log::error!("❌ {}", err);
            alert(&err.mensaje_usuario());
        }
    }

    for aviso in state.tomar_avisos() {
        alert(aviso.mensaje());
    }
}
