// ============================================================================
// FORMULARIO VIEW - Copia el FormView a los elementos de la página
// ============================================================================
// Sin lógica: valores, habilitación, resultados de búsqueda, desplegable de
// casos, pestañas y modal. Los elementos se buscan una sola vez al arrancar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, EventTarget, HtmlButtonElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::dom::{
    append_child, get_element_by_id, get_typed_by_id, on_click, query_selector_all, set_display,
    set_text_content, toggle_class, ElementBuilder,
};
use crate::models::Cliente;
use crate::viewmodels::formulario::{
    BotonId, CampoId, EditorModal, FormView, Pestana, SelectorCasos,
};

pub const ID_RESULTADOS: &str = "resultadosBusquedaCliente";
pub const ID_CASOS_ACTIVOS: &str = "casosActivos";
pub const ID_MODAL: &str = "modalEditor";
pub const ID_MODAL_TITULO: &str = "modalTitle";
pub const ID_MODAL_TEXTO: &str = "modalTextarea";
pub const ID_MODAL_GUARDAR: &str = "btnGuardarModal";
pub const SELECTOR_MODAL_CERRAR: &str = ".close";
pub const SELECTOR_PESTANAS: &str = ".tab-btn";

const CLASE_VISIBLE: &str = "mostrar";
const CLASE_ACTIVA: &str = "active";

/// Control de formulario asociado a un `CampoId`
#[derive(Clone)]
pub enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Control {
    fn buscar(id: &str) -> Result<Self, JsValue> {
        let element = get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(Control::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => return Ok(Control::TextArea(textarea)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlSelectElement>()
            .map(Control::Select)
            .map_err(|_| JsValue::from_str(&format!("#{} is not a form control", id)))
    }

    pub fn valor(&self) -> String {
        match self {
            Control::Input(input) => input.value(),
            Control::TextArea(textarea) => textarea.value(),
            Control::Select(select) => select.value(),
        }
    }

    /// Solo escribe si cambió (no mueve el cursor mientras se teclea)
    fn set_valor(&self, valor: &str) {
        if self.valor() == valor {
            return;
        }
        match self {
            Control::Input(input) => input.set_value(valor),
            Control::TextArea(textarea) => textarea.set_value(valor),
            Control::Select(select) => select.set_value(valor),
        }
    }

    fn set_habilitado(&self, habilitado: bool) {
        match self {
            Control::Input(input) => input.set_disabled(!habilitado),
            Control::TextArea(textarea) => textarea.set_disabled(!habilitado),
            Control::Select(select) => select.set_disabled(!habilitado),
        }
    }

    pub fn target(&self) -> &EventTarget {
        match self {
            Control::Input(input) => input.as_ref(),
            Control::TextArea(textarea) => textarea.as_ref(),
            Control::Select(select) => select.as_ref(),
        }
    }
}

/// Elementos de la página que refleja el FormView
pub struct FormularioDom {
    campos: Vec<(CampoId, Control)>,
    botones: Vec<(BotonId, HtmlButtonElement)>,
    resultados: Element,
    casos_activos: HtmlSelectElement,
    pestanas: Vec<(Pestana, Element)>,
    modal: Element,
    modal_titulo: Element,
    modal_texto: HtmlTextAreaElement,
    modal_guardar: Element,
    modal_cerrar: Option<Element>,
    /// Último estado pintado (evita reconstruir listas sin cambios)
    anterior: RefCell<Option<FormView>>,
}

impl FormularioDom {
    pub fn new() -> Result<Self, JsValue> {
        let campos = CampoId::TODOS
            .iter()
            .map(|campo| Ok((*campo, Control::buscar(campo.dom_id())?)))
            .collect::<Result<Vec<_>, JsValue>>()?;

        let botones = BotonId::TODOS
            .iter()
            .map(|boton| Ok((*boton, get_typed_by_id::<HtmlButtonElement>(boton.dom_id())?)))
            .collect::<Result<Vec<_>, JsValue>>()?;

        let pestanas = query_selector_all(SELECTOR_PESTANAS)?
            .into_iter()
            .filter_map(|boton| {
                let pestana = boton
                    .get_attribute("data-tab")
                    .as_deref()
                    .and_then(Pestana::from_dom_id);
                if pestana.is_none() {
                    log::warn!("⚠️ Pestaña sin data-tab válido ignorada");
                }
                pestana.map(|pestana| (pestana, boton))
            })
            .collect();

        let elemento = |id: &str| {
            get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
        };

        Ok(Self {
            campos,
            botones,
            resultados: elemento(ID_RESULTADOS)?,
            casos_activos: get_typed_by_id(ID_CASOS_ACTIVOS)?,
            pestanas,
            modal: elemento(ID_MODAL)?,
            modal_titulo: elemento(ID_MODAL_TITULO)?,
            modal_texto: get_typed_by_id(ID_MODAL_TEXTO)?,
            modal_guardar: elemento(ID_MODAL_GUARDAR)?,
            modal_cerrar: query_selector_all(SELECTOR_MODAL_CERRAR)?.into_iter().next(),
            anterior: RefCell::new(None),
        })
    }

    pub fn campos(&self) -> &[(CampoId, Control)] {
        &self.campos
    }

    pub fn campo(&self, id: CampoId) -> Option<&Control> {
        self.campos
            .iter()
            .find(|(campo, _)| *campo == id)
            .map(|(_, control)| control)
    }

    pub fn boton(&self, id: BotonId) -> Option<&HtmlButtonElement> {
        self.botones
            .iter()
            .find(|(boton, _)| *boton == id)
            .map(|(_, elemento)| elemento)
    }

    pub fn pestanas(&self) -> &[(Pestana, Element)] {
        &self.pestanas
    }

    pub fn casos_activos(&self) -> &HtmlSelectElement {
        &self.casos_activos
    }

    pub fn modal(&self) -> &Element {
        &self.modal
    }

    pub fn modal_texto(&self) -> &HtmlTextAreaElement {
        &self.modal_texto
    }

    pub fn modal_guardar(&self) -> &Element {
        &self.modal_guardar
    }

    pub fn modal_cerrar(&self) -> Option<&Element> {
        self.modal_cerrar.as_ref()
    }

    /// Pinta el estado completo; `al_elegir` recibe el índice del cliente clicado
    pub fn render(&self, vista: &FormView, al_elegir: &Rc<dyn Fn(usize)>) -> Result<(), JsValue> {
        for (campo, control) in &self.campos {
            let estado = vista.campo(*campo);
            control.set_valor(&estado.valor);
            control.set_habilitado(estado.habilitado);
        }

        for (boton, elemento) in &self.botones {
            elemento.set_disabled(!vista.botones.habilitado(*boton));
        }

        let anterior = self.anterior.borrow_mut().replace(vista.clone());

        if anterior
            .as_ref()
            .map(|a| a.resultados.clientes != vista.resultados.clientes)
            .unwrap_or(true)
        {
            self.render_resultados(&vista.resultados.clientes, al_elegir)?;
        }
        toggle_class(&self.resultados, CLASE_VISIBLE, vista.resultados.visible)?;

        if anterior
            .as_ref()
            .map(|a| a.casos_activos.opciones != vista.casos_activos.opciones)
            .unwrap_or(true)
        {
            self.render_opciones(&vista.casos_activos)?;
        }
        self.casos_activos.set_value(&vista.casos_activos.seleccionado);

        self.render_pestanas(vista.pestana)?;
        self.render_modal(&vista.modal)
    }

    fn render_resultados(&self, clientes: &[Cliente], al_elegir: &Rc<dyn Fn(usize)>) -> Result<(), JsValue> {
        self.resultados.set_inner_html("");
        for (indice, cliente) in clientes.iter().enumerate() {
            let fila = ElementBuilder::new("div")?
                .class("resultado-item")
                .text(&cliente.etiqueta_resultado())
                .build();
            let al_elegir = al_elegir.clone();
            on_click(fila.as_ref(), move |_| al_elegir(indice))?;
            append_child(&self.resultados, &fila)?;
        }
        Ok(())
    }

    fn render_opciones(&self, selector: &SelectorCasos) -> Result<(), JsValue> {
        self.casos_activos.set_inner_html("");
        for opcion in &selector.opciones {
            let elemento = ElementBuilder::new("option")?
                .attr("value", &opcion.valor)?
                .text(&opcion.etiqueta)
                .build();
            append_child(&self.casos_activos, &elemento)?;
        }
        Ok(())
    }

    fn render_pestanas(&self, activa: Pestana) -> Result<(), JsValue> {
        for (pestana, boton) in &self.pestanas {
            toggle_class(boton, CLASE_ACTIVA, *pestana == activa)?;
        }
        for pestana in [Pestana::Caso, Pestana::Expediente] {
            if let Some(contenido) = get_element_by_id(pestana.dom_id()) {
                toggle_class(&contenido, CLASE_ACTIVA, pestana == activa)?;
            }
        }
        Ok(())
    }

    fn render_modal(&self, modal: &EditorModal) -> Result<(), JsValue> {
        if !modal.abierto {
            return set_display(&self.modal, "none");
        }
        set_text_content(&self.modal_titulo, &modal.titulo);
        if self.modal_texto.value() != modal.texto {
            self.modal_texto.set_value(&modal.texto);
        }
        set_display(&self.modal, "flex")
    }
}
