// ============================================================================
// FORMULARIO - View-model tipado de las pestañas Caso y Expediente
// ============================================================================
// Cada control del DOM tiene un campo con nombre; la capa web solo copia
// este estado a los elementos (ver views::formulario_view).
// ============================================================================

use crate::models::{Caso, Cliente, Expediente};
use crate::utils::constants::{PLACEHOLDER_CASOS, TITULO_EDITAR_RESULTADO, TITULO_EDITAR_SUCESO};

/// Campos de texto del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampoId {
    NombreApellido,
    NDocumento,
    NoCaso,
    FechaInicio,
    FechaFin,
    Valor,
    Especializacion,
    NoCasoExp,
    ConsecExpe,
    NoEtapa,
    FechaEtapa,
    NomEtapa,
    Instancia,
    Abogado,
    Ciudad,
    Entidad,
    Impugnacion,
    Suceso,
    Resultado,
}

impl CampoId {
    pub const TODOS: [CampoId; 19] = [
        CampoId::NombreApellido,
        CampoId::NDocumento,
        CampoId::NoCaso,
        CampoId::FechaInicio,
        CampoId::FechaFin,
        CampoId::Valor,
        CampoId::Especializacion,
        CampoId::NoCasoExp,
        CampoId::ConsecExpe,
        CampoId::NoEtapa,
        CampoId::FechaEtapa,
        CampoId::NomEtapa,
        CampoId::Instancia,
        CampoId::Abogado,
        CampoId::Ciudad,
        CampoId::Entidad,
        CampoId::Impugnacion,
        CampoId::Suceso,
        CampoId::Resultado,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            CampoId::NombreApellido => "nombreApellidoCliente",
            CampoId::NDocumento => "nDocumento",
            CampoId::NoCaso => "noCaso",
            CampoId::FechaInicio => "fechaInicio",
            CampoId::FechaFin => "fechaFin",
            CampoId::Valor => "valor",
            CampoId::Especializacion => "especializacion",
            CampoId::NoCasoExp => "noCasoExp",
            CampoId::ConsecExpe => "consecExpe",
            CampoId::NoEtapa => "noEtapa",
            CampoId::FechaEtapa => "fechaEtapa",
            CampoId::NomEtapa => "nomEtapa",
            CampoId::Instancia => "instancia",
            CampoId::Abogado => "abogado",
            CampoId::Ciudad => "ciudad",
            CampoId::Entidad => "entidad",
            CampoId::Impugnacion => "impugnacion",
            CampoId::Suceso => "suceso",
            CampoId::Resultado => "resultado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotonId {
    BuscarCliente,
    CrearCaso,
    GuardarCaso,
    CrearExpediente,
    GuardarExpediente,
    ImprimirCaso,
    AdjuntarDoc,
    AnteriorSuceso,
    SiguienteSuceso,
    AnteriorResultado,
    SiguienteResultado,
}

impl BotonId {
    pub const TODOS: [BotonId; 11] = [
        BotonId::BuscarCliente,
        BotonId::CrearCaso,
        BotonId::GuardarCaso,
        BotonId::CrearExpediente,
        BotonId::GuardarExpediente,
        BotonId::ImprimirCaso,
        BotonId::AdjuntarDoc,
        BotonId::AnteriorSuceso,
        BotonId::SiguienteSuceso,
        BotonId::AnteriorResultado,
        BotonId::SiguienteResultado,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            BotonId::BuscarCliente => "btnBuscarCliente",
            BotonId::CrearCaso => "btnCrearCaso",
            BotonId::GuardarCaso => "btnGuardarCaso",
            BotonId::CrearExpediente => "btnCrearExpediente",
            BotonId::GuardarExpediente => "btnGuardarExpediente",
            BotonId::ImprimirCaso => "btnImprimirCaso",
            BotonId::AdjuntarDoc => "btnAdjuntarDoc",
            BotonId::AnteriorSuceso => "btnAnteriorSuceso",
            BotonId::SiguienteSuceso => "btnSiguienteSuceso",
            BotonId::AnteriorResultado => "btnAnteriorResultado",
            BotonId::SiguienteResultado => "btnSiguienteResultado",
        }
    }
}

/// Campos de texto largo editables en el modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampoLargo {
    Suceso,
    Resultado,
}

impl CampoLargo {
    pub fn campo(self) -> CampoId {
        match self {
            CampoLargo::Suceso => CampoId::Suceso,
            CampoLargo::Resultado => CampoId::Resultado,
        }
    }

    pub fn titulo(self) -> &'static str {
        match self {
            CampoLargo::Suceso => TITULO_EDITAR_SUCESO,
            CampoLargo::Resultado => TITULO_EDITAR_RESULTADO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pestana {
    Caso,
    Expediente,
}

impl Pestana {
    /// Valor del atributo `data-tab` (y id del contenido)
    pub fn dom_id(self) -> &'static str {
        match self {
            Pestana::Caso => "caso",
            Pestana::Expediente => "expediente",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        match id {
            "caso" => Some(Pestana::Caso),
            "expediente" => Some(Pestana::Expediente),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Campo {
    pub valor: String,
    pub habilitado: bool,
}

impl Campo {
    fn editable() -> Self {
        Self {
            valor: String::new(),
            habilitado: true,
        }
    }

    fn set(&mut self, valor: impl Into<String>) {
        self.valor = valor.into();
    }

    fn limpiar(&mut self) {
        self.valor.clear();
    }

    pub fn esta_vacio(&self) -> bool {
        self.valor.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormularioCaso {
    pub nombre_apellido: Campo,
    pub n_documento: Campo,
    pub no_caso: Campo,
    pub fecha_inicio: Campo,
    pub fecha_fin: Campo,
    pub valor: Campo,
    pub especializacion: Campo,
}

impl Default for FormularioCaso {
    fn default() -> Self {
        Self {
            nombre_apellido: Campo::editable(),
            n_documento: Campo::editable(),
            no_caso: Campo::default(),
            fecha_inicio: Campo::default(),
            fecha_fin: Campo::default(),
            valor: Campo::default(),
            especializacion: Campo::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormularioExpediente {
    pub no_caso: Campo,
    pub consec_expe: Campo,
    pub no_etapa: Campo,
    pub fecha_etapa: Campo,
    pub nom_etapa: Campo,
    pub instancia: Campo,
    pub abogado: Campo,
    pub ciudad: Campo,
    pub entidad: Campo,
    pub impugnacion: Campo,
    pub suceso: Campo,
    pub resultado: Campo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Botones {
    pub buscar_cliente: bool,
    pub crear_caso: bool,
    pub guardar_caso: bool,
    pub crear_expediente: bool,
    pub guardar_expediente: bool,
    pub imprimir_caso: bool,
    pub adjuntar_doc: bool,
    pub anterior_suceso: bool,
    pub siguiente_suceso: bool,
    pub anterior_resultado: bool,
    pub siguiente_resultado: bool,
}

impl Default for Botones {
    fn default() -> Self {
        Self {
            buscar_cliente: true,
            crear_caso: false,
            guardar_caso: false,
            crear_expediente: false,
            guardar_expediente: false,
            imprimir_caso: true,
            adjuntar_doc: false,
            anterior_suceso: false,
            siguiente_suceso: false,
            anterior_resultado: false,
            siguiente_resultado: false,
        }
    }
}

impl Botones {
    pub fn habilitado(&self, boton: BotonId) -> bool {
        match boton {
            BotonId::BuscarCliente => self.buscar_cliente,
            BotonId::CrearCaso => self.crear_caso,
            BotonId::GuardarCaso => self.guardar_caso,
            BotonId::CrearExpediente => self.crear_expediente,
            BotonId::GuardarExpediente => self.guardar_expediente,
            BotonId::ImprimirCaso => self.imprimir_caso,
            BotonId::AdjuntarDoc => self.adjuntar_doc,
            BotonId::AnteriorSuceso => self.anterior_suceso,
            BotonId::SiguienteSuceso => self.siguiente_suceso,
            BotonId::AnteriorResultado => self.anterior_resultado,
            BotonId::SiguienteResultado => self.siguiente_resultado,
        }
    }
}

/// Panel con los clientes encontrados
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelResultados {
    pub visible: bool,
    pub clientes: Vec<Cliente>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpcionCaso {
    pub valor: String,
    pub etiqueta: String,
}

/// Desplegable de casos activos
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorCasos {
    pub opciones: Vec<OpcionCaso>,
    pub seleccionado: String,
}

impl Default for SelectorCasos {
    fn default() -> Self {
        Self {
            opciones: vec![Self::placeholder()],
            seleccionado: String::new(),
        }
    }
}

impl SelectorCasos {
    fn placeholder() -> OpcionCaso {
        OpcionCaso {
            valor: String::new(),
            etiqueta: PLACEHOLDER_CASOS.to_string(),
        }
    }

    /// Placeholder + una opción por caso; la selección vuelve al placeholder
    pub fn cargar(&mut self, casos: &[Caso]) {
        self.opciones = std::iter::once(Self::placeholder())
            .chain(casos.iter().map(|caso| OpcionCaso {
                valor: caso.no_caso.to_string(),
                etiqueta: caso.etiqueta_opcion(),
            }))
            .collect();
        self.seleccionado.clear();
    }

    pub fn seleccionar(&mut self, no_caso: u32) {
        self.seleccionado = no_caso.to_string();
    }
}

/// Modal de edición de textos largos
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorModal {
    pub abierto: bool,
    pub titulo: String,
    pub campo: Option<CampoLargo>,
    pub texto: String,
}

/// Estado completo de la vista
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub pestana: Pestana,
    pub caso: FormularioCaso,
    pub expediente: FormularioExpediente,
    pub botones: Botones,
    pub resultados: PanelResultados,
    pub casos_activos: SelectorCasos,
    pub modal: EditorModal,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            pestana: Pestana::Caso,
            caso: FormularioCaso::default(),
            expediente: FormularioExpediente::default(),
            botones: Botones::default(),
            resultados: PanelResultados::default(),
            casos_activos: SelectorCasos::default(),
            modal: EditorModal::default(),
        }
    }
}

impl FormView {
    pub fn campo(&self, id: CampoId) -> &Campo {
        match id {
            CampoId::NombreApellido => &self.caso.nombre_apellido,
            CampoId::NDocumento => &self.caso.n_documento,
            CampoId::NoCaso => &self.caso.no_caso,
            CampoId::FechaInicio => &self.caso.fecha_inicio,
            CampoId::FechaFin => &self.caso.fecha_fin,
            CampoId::Valor => &self.caso.valor,
            CampoId::Especializacion => &self.caso.especializacion,
            CampoId::NoCasoExp => &self.expediente.no_caso,
            CampoId::ConsecExpe => &self.expediente.consec_expe,
            CampoId::NoEtapa => &self.expediente.no_etapa,
            CampoId::FechaEtapa => &self.expediente.fecha_etapa,
            CampoId::NomEtapa => &self.expediente.nom_etapa,
            CampoId::Instancia => &self.expediente.instancia,
            CampoId::Abogado => &self.expediente.abogado,
            CampoId::Ciudad => &self.expediente.ciudad,
            CampoId::Entidad => &self.expediente.entidad,
            CampoId::Impugnacion => &self.expediente.impugnacion,
            CampoId::Suceso => &self.expediente.suceso,
            CampoId::Resultado => &self.expediente.resultado,
        }
    }

    pub fn campo_mut(&mut self, id: CampoId) -> &mut Campo {
        match id {
            CampoId::NombreApellido => &mut self.caso.nombre_apellido,
            CampoId::NDocumento => &mut self.caso.n_documento,
            CampoId::NoCaso => &mut self.caso.no_caso,
            CampoId::FechaInicio => &mut self.caso.fecha_inicio,
            CampoId::FechaFin => &mut self.caso.fecha_fin,
            CampoId::Valor => &mut self.caso.valor,
            CampoId::Especializacion => &mut self.caso.especializacion,
            CampoId::NoCasoExp => &mut self.expediente.no_caso,
            CampoId::ConsecExpe => &mut self.expediente.consec_expe,
            CampoId::NoEtapa => &mut self.expediente.no_etapa,
            CampoId::FechaEtapa => &mut self.expediente.fecha_etapa,
            CampoId::NomEtapa => &mut self.expediente.nom_etapa,
            CampoId::Instancia => &mut self.expediente.instancia,
            CampoId::Abogado => &mut self.expediente.abogado,
            CampoId::Ciudad => &mut self.expediente.ciudad,
            CampoId::Entidad => &mut self.expediente.entidad,
            CampoId::Impugnacion => &mut self.expediente.impugnacion,
            CampoId::Suceso => &mut self.expediente.suceso,
            CampoId::Resultado => &mut self.expediente.resultado,
        }
    }

    /// Valor tecleado por el usuario en un campo
    pub fn escribir(&mut self, id: CampoId, valor: &str) {
        self.campo_mut(id).set(valor);
    }

    // --- Cliente -----------------------------------------------------------

    pub fn mostrar_resultados(&mut self, clientes: Vec<Cliente>) {
        self.resultados.clientes = clientes;
        self.resultados.visible = true;
    }

    pub fn ocultar_resultados(&mut self) {
        self.resultados.visible = false;
    }

    pub fn rellenar_cliente(&mut self, cliente: &Cliente) {
        self.caso.n_documento.set(cliente.n_documento.clone());
        self.caso.nombre_apellido.set(cliente.nombre_completo());
    }

    // --- Caso --------------------------------------------------------------

    /// Vacía los valores del caso y el documento del cliente (sin tocar la
    /// habilitación). El nombre del cliente se conserva.
    pub fn limpiar_caso(&mut self) {
        self.caso.n_documento.limpiar();
        self.caso.no_caso.limpiar();
        self.caso.fecha_inicio.limpiar();
        self.caso.fecha_fin.limpiar();
        self.caso.valor.limpiar();
        self.caso.especializacion.limpiar();
        self.expediente.no_caso.limpiar();
    }

    pub fn rellenar_caso(&mut self, caso: &Caso) {
        let no_caso = caso.no_caso.to_string();
        self.caso.no_caso.set(no_caso.clone());
        self.caso.fecha_inicio.set(caso.fecha_inicio.clone());
        self.caso.fecha_fin.set(caso.fecha_fin.clone().unwrap_or_default());
        self.caso.valor.set(caso.valor.clone());
        self.caso.especializacion.set(caso.cod_especializacion.clone());
        self.expediente.no_caso.set(no_caso);
    }

    /// Número de caso devuelto por el servidor (también en la pestaña expediente)
    pub fn asignar_no_caso(&mut self, no_caso: u32) {
        self.caso.no_caso.set(no_caso.to_string());
        self.expediente.no_caso.set(no_caso.to_string());
    }

    fn habilitar_campos_caso(&mut self, habilitado: bool) {
        self.caso.fecha_inicio.habilitado = habilitado;
        self.caso.especializacion.habilitado = habilitado;
        self.caso.valor.habilitado = habilitado;
        self.botones.guardar_caso = habilitado;
    }

    /// Caso cerrado: fecha inicio, especialización, valor y guardar quedan bloqueados
    pub fn bloquear_caso(&mut self) {
        self.habilitar_campos_caso(false);
    }

    pub fn habilitar_edicion_caso(&mut self) {
        self.habilitar_campos_caso(true);
    }

    // --- Expediente --------------------------------------------------------

    pub fn rellenar_expediente(&mut self, expediente: &Expediente) {
        let formulario = &mut self.expediente;
        formulario.consec_expe.set(expediente.consec_expe.to_string());
        formulario.no_etapa.set(expediente.cod_etapa.clone().unwrap_or_default());
        formulario.fecha_etapa.set(expediente.fecha_etapa.clone().unwrap_or_default());
        formulario.nom_etapa.set(expediente.nom_etapa.clone().unwrap_or_default());
        formulario.suceso.set(expediente.con_suceso.clone().unwrap_or_default());
        formulario.resultado.set(expediente.con_resul.clone().unwrap_or_default());

        // Identidad y etapa son de solo lectura
        formulario.consec_expe.habilitado = false;
        formulario.no_etapa.habilitado = false;
        formulario.fecha_etapa.habilitado = false;
        formulario.nom_etapa.habilitado = false;
    }

    /// Vacía todos los campos del expediente salvo la referencia al caso
    pub fn limpiar_expediente(&mut self) {
        let formulario = &mut self.expediente;
        for campo in [
            &mut formulario.consec_expe,
            &mut formulario.no_etapa,
            &mut formulario.fecha_etapa,
            &mut formulario.nom_etapa,
            &mut formulario.instancia,
            &mut formulario.abogado,
            &mut formulario.ciudad,
            &mut formulario.entidad,
            &mut formulario.impugnacion,
            &mut formulario.suceso,
            &mut formulario.resultado,
        ] {
            campo.limpiar();
        }
    }

    pub fn habilitar_nuevo_expediente(&mut self) {
        let formulario = &mut self.expediente;
        for campo in [
            &mut formulario.fecha_etapa,
            &mut formulario.abogado,
            &mut formulario.ciudad,
            &mut formulario.entidad,
            &mut formulario.impugnacion,
            &mut formulario.suceso,
            &mut formulario.resultado,
        ] {
            campo.habilitado = true;
        }

        let botones = &mut self.botones;
        botones.anterior_suceso = true;
        botones.siguiente_suceso = true;
        botones.anterior_resultado = true;
        botones.siguiente_resultado = true;
        botones.adjuntar_doc = true;
        botones.guardar_expediente = true;
    }

    // --- Modal -------------------------------------------------------------

    pub fn abrir_editor(&mut self, campo: CampoLargo) {
        self.modal = EditorModal {
            abierto: true,
            titulo: campo.titulo().to_string(),
            campo: Some(campo),
            texto: self.campo(campo.campo()).valor.clone(),
        };
    }

    /// Copia el texto al campo de origen y cierra; devuelve el campo escrito
    pub fn guardar_editor(&mut self, texto: &str) -> Option<CampoLargo> {
        let campo = self.modal.campo.take()?;
        self.campo_mut(campo.campo()).set(texto);
        self.cerrar_editor();
        Some(campo)
    }

    pub fn cerrar_editor(&mut self) {
        self.modal = EditorModal::default();
    }
}
