// API en memoria para los tests del orquestador

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::error::ApiError;
use crate::models::{
    Caso, Cliente, Especializacion, EstadoSalud, Expediente, NuevoCaso, RespuestaCreacion,
    RespuestaOperacion, ResumenExpediente,
};
use crate::services::casos_api::CasosApi;
use crate::services::rutas;

#[derive(Debug, Clone, PartialEq)]
pub enum Llamada {
    BuscarClientes { nombre: String, apellido: String },
    ClientePorDocumento(String),
    CasosActivos(String),
    ObtenerCaso(u32),
    CrearCaso(NuevoCaso),
    ActualizarCaso(u32, NuevoCaso),
    Especializaciones,
    ExpedientesCaso(u32),
    ObtenerExpediente(u32),
    Salud,
}

impl Llamada {
    /// "MÉTODO /ruta" como la vería el backend
    pub fn ruta(&self) -> String {
        match self {
            Llamada::BuscarClientes { nombre, apellido } => {
                format!("GET {}", rutas::buscar_cliente(nombre, apellido))
            }
            Llamada::ClientePorDocumento(doc) => format!("GET {}", rutas::cliente_por_documento(doc)),
            Llamada::CasosActivos(cod) => format!("GET {}", rutas::casos_activos(cod)),
            Llamada::ObtenerCaso(no) => format!("GET {}", rutas::caso(*no)),
            Llamada::CrearCaso(_) => format!("POST {}", rutas::CREAR_CASO),
            Llamada::ActualizarCaso(no, _) => format!("PUT {}", rutas::caso(*no)),
            Llamada::Especializaciones => format!("GET {}", rutas::ESPECIALIZACIONES),
            Llamada::ExpedientesCaso(no) => format!("GET {}", rutas::expedientes_caso(*no)),
            Llamada::ObtenerExpediente(consec) => format!("GET {}", rutas::expediente(*consec)),
            Llamada::Salud => format!("GET {}", rutas::SALUD),
        }
    }
}

#[derive(Default)]
struct Datos {
    llamadas: Vec<Llamada>,
    clientes: Vec<Cliente>,
    casos_activos: HashMap<String, Vec<Caso>>,
    casos: HashMap<u32, Caso>,
    expedientes_caso: HashMap<u32, Vec<ResumenExpediente>>,
    expedientes: HashMap<u32, Expediente>,
    especializaciones: Vec<Especializacion>,
    siguiente_no_caso: u32,
    creacion_rechazada: Option<String>,
    actualizacion_rechazada: Option<String>,
    fallos: HashSet<&'static str>,
    casos_retenidos: HashMap<u32, oneshot::Receiver<()>>,
    listas_retenidas: HashMap<String, oneshot::Receiver<()>>,
    creacion_retenida: Option<oneshot::Receiver<()>>,
}

/// Mock compartido: los clones ven los mismos datos y llamadas
#[derive(Clone, Default)]
pub struct MockApi {
    datos: Rc<RefCell<Datos>>,
}

impl MockApi {
    pub fn new() -> Self {
        let mock = Self::default();
        mock.datos.borrow_mut().siguiente_no_caso = 1;
        mock
    }

    pub fn con_cliente(self, cliente: Cliente) -> Self {
        self.datos.borrow_mut().clientes.push(cliente);
        self
    }

    /// Registra el caso en el detalle y en la lista de activos del cliente
    pub fn con_caso(self, caso: Caso) -> Self {
        {
            let mut datos = self.datos.borrow_mut();
            if let Some(cod) = caso.cod_cliente.clone() {
                if !caso.esta_cerrado() {
                    datos.casos_activos.entry(cod).or_default().push(caso.clone());
                }
            }
            datos.siguiente_no_caso = datos.siguiente_no_caso.max(caso.no_caso + 1);
            datos.casos.insert(caso.no_caso, caso);
        }
        self
    }

    pub fn con_expediente(self, no_caso: u32, expediente: Expediente) -> Self {
        {
            let mut datos = self.datos.borrow_mut();
            datos.expedientes_caso.entry(no_caso).or_default().push(ResumenExpediente {
                consec_expe: expediente.consec_expe,
                no_caso: Some(no_caso),
                fecha_etapa: expediente.fecha_etapa.clone(),
            });
            datos.expedientes.insert(expediente.consec_expe, expediente);
        }
        self
    }

    pub fn con_especializacion(self, codigo: &str, nombre: &str) -> Self {
        self.datos.borrow_mut().especializaciones.push(Especializacion {
            cod_especializacion: codigo.to_string(),
            nom_especializacion: nombre.to_string(),
        });
        self
    }

    /// `POST /caso/crear` responderá `success: false`
    pub fn rechazar_creacion(self, mensaje: &str) -> Self {
        self.datos.borrow_mut().creacion_rechazada = Some(mensaje.to_string());
        self
    }

    /// `PUT /caso/{noCaso}` responderá `success: false`
    pub fn rechazar_actualizacion(self, mensaje: &str) -> Self {
        self.datos.borrow_mut().actualizacion_rechazada = Some(mensaje.to_string());
        self
    }

    /// El método indicado devolverá un error de red
    pub fn fallar(self, metodo: &'static str) -> Self {
        self.datos.borrow_mut().fallos.insert(metodo);
        self
    }

    /// `obtener_caso(no_caso)` no responde hasta que se use el sender
    pub fn retener_caso(&self, no_caso: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.datos.borrow_mut().casos_retenidos.insert(no_caso, rx);
        tx
    }

    /// `casos_activos(cod_cliente)` no responde hasta que se use el sender
    pub fn retener_casos_activos(&self, cod_cliente: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.datos
            .borrow_mut()
            .listas_retenidas
            .insert(cod_cliente.to_string(), rx);
        tx
    }

    /// La próxima `crear_caso` no responde hasta que se use el sender
    pub fn retener_creacion(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.datos.borrow_mut().creacion_retenida = Some(rx);
        tx
    }

    pub fn llamadas(&self) -> Vec<Llamada> {
        self.datos.borrow().llamadas.clone()
    }

    pub fn rutas(&self) -> Vec<String> {
        self.llamadas().iter().map(Llamada::ruta).collect()
    }

    fn registrar(&self, metodo: &'static str, llamada: Llamada) -> Result<(), ApiError> {
        let mut datos = self.datos.borrow_mut();
        datos.llamadas.push(llamada);
        if datos.fallos.contains(metodo) {
            return Err(ApiError::Red(format!("{} no disponible", metodo)));
        }
        Ok(())
    }
}

fn no_encontrado(detalle: &str) -> ApiError {
    ApiError::Http {
        status: 404,
        detalle: detalle.to_string(),
    }
}

fn empieza_con(texto: &str, prefijo: &str) -> bool {
    texto.to_uppercase().starts_with(&prefijo.to_uppercase())
}

impl CasosApi for MockApi {
    async fn buscar_clientes(&self, nombre: &str, apellido: &str) -> Result<Vec<Cliente>, ApiError> {
        self.registrar(
            "buscar_clientes",
            Llamada::BuscarClientes {
                nombre: nombre.to_string(),
                apellido: apellido.to_string(),
            },
        )?;
        Ok(self
            .datos
            .borrow()
            .clientes
            .iter()
            .filter(|c| empieza_con(&c.nom_cliente, nombre) && empieza_con(&c.apell_cliente, apellido))
            .cloned()
            .collect())
    }

    async fn cliente_por_documento(&self, documento: &str) -> Result<Cliente, ApiError> {
        self.registrar("cliente_por_documento", Llamada::ClientePorDocumento(documento.to_string()))?;
        self.datos
            .borrow()
            .clientes
            .iter()
            .find(|c| c.n_documento == documento)
            .cloned()
            .ok_or_else(|| no_encontrado("Cliente no encontrado"))
    }

    async fn casos_activos(&self, cod_cliente: &str) -> Result<Vec<Caso>, ApiError> {
        self.registrar("casos_activos", Llamada::CasosActivos(cod_cliente.to_string()))?;
        let retenida = self.datos.borrow_mut().listas_retenidas.remove(cod_cliente);
        if let Some(rx) = retenida {
            let _ = rx.await;
        }
        Ok(self
            .datos
            .borrow()
            .casos_activos
            .get(cod_cliente)
            .cloned()
            .unwrap_or_default())
    }

    async fn obtener_caso(&self, no_caso: u32) -> Result<Caso, ApiError> {
        self.registrar("obtener_caso", Llamada::ObtenerCaso(no_caso))?;
        let retenido = self.datos.borrow_mut().casos_retenidos.remove(&no_caso);
        if let Some(rx) = retenido {
            let _ = rx.await;
        }
        self.datos
            .borrow()
            .casos
            .get(&no_caso)
            .cloned()
            .ok_or_else(|| no_encontrado("Caso no encontrado"))
    }

    async fn crear_caso(&self, caso: &NuevoCaso) -> Result<RespuestaCreacion, ApiError> {
        self.registrar("crear_caso", Llamada::CrearCaso(caso.clone()))?;
        let retenida = self.datos.borrow_mut().creacion_retenida.take();
        if let Some(rx) = retenida {
            let _ = rx.await;
        }
        let mut datos = self.datos.borrow_mut();
        if let Some(mensaje) = datos.creacion_rechazada.clone() {
            return Ok(RespuestaCreacion {
                success: false,
                no_caso: None,
                mensaje: Some(mensaje),
            });
        }
        let no_caso = datos.siguiente_no_caso;
        datos.siguiente_no_caso += 1;
        datos.casos.insert(no_caso, caso.clone().into_caso(no_caso));
        Ok(RespuestaCreacion {
            success: true,
            no_caso: Some(no_caso),
            mensaje: Some(format!("Caso {} creado exitosamente", no_caso)),
        })
    }

    async fn actualizar_caso(&self, no_caso: u32, caso: &NuevoCaso) -> Result<RespuestaOperacion, ApiError> {
        self.registrar("actualizar_caso", Llamada::ActualizarCaso(no_caso, caso.clone()))?;
        let mut datos = self.datos.borrow_mut();
        if let Some(mensaje) = datos.actualizacion_rechazada.clone() {
            return Ok(RespuestaOperacion {
                success: false,
                mensaje: Some(mensaje),
            });
        }
        let existente = datos
            .casos
            .get_mut(&no_caso)
            .ok_or_else(|| no_encontrado("Caso no encontrado"))?;
        existente.fecha_inicio = caso.fecha_inicio.clone();
        existente.valor = caso.valor.clone();
        existente.cod_especializacion = caso.cod_especializacion.clone();
        Ok(RespuestaOperacion {
            success: true,
            mensaje: Some(format!("Caso {} actualizado", no_caso)),
        })
    }

    async fn especializaciones(&self) -> Result<Vec<Especializacion>, ApiError> {
        self.registrar("especializaciones", Llamada::Especializaciones)?;
        Ok(self.datos.borrow().especializaciones.clone())
    }

    async fn expedientes_caso(&self, no_caso: u32) -> Result<Vec<ResumenExpediente>, ApiError> {
        self.registrar("expedientes_caso", Llamada::ExpedientesCaso(no_caso))?;
        Ok(self
            .datos
            .borrow()
            .expedientes_caso
            .get(&no_caso)
            .cloned()
            .unwrap_or_default())
    }

    async fn obtener_expediente(&self, consec_expe: u32) -> Result<Expediente, ApiError> {
        self.registrar("obtener_expediente", Llamada::ObtenerExpediente(consec_expe))?;
        self.datos
            .borrow()
            .expedientes
            .get(&consec_expe)
            .cloned()
            .ok_or_else(|| no_encontrado("Expediente no encontrado"))
    }

    async fn salud(&self) -> Result<EstadoSalud, ApiError> {
        self.registrar("salud", Llamada::Salud)?;
        Ok(EstadoSalud {
            status: "ok".to_string(),
            mensaje: Some("API de Gestión de Casos funcionando".to_string()),
        })
    }
}
