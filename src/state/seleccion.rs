// ============================================================================
// SELECCIÓN - Cliente/caso/expediente actuales + tickets de generación
// ============================================================================
// Cada nivel de la cadena cliente → casos → caso → expedientes → expediente
// emite un ticket antes de pedir datos. Emitir un nivel invalida ese nivel y
// todos los de abajo; una respuesta con ticket vencido se descarta.
// ============================================================================

use crate::models::{Caso, Cliente, Expediente};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nivel {
    /// Búsqueda de clientes (independiente de la cadena)
    Busqueda,
    Casos,
    Caso,
    Expedientes,
    Expediente,
}

impl Nivel {
    fn indice(self) -> usize {
        match self {
            Nivel::Busqueda => 0,
            Nivel::Casos => 1,
            Nivel::Caso => 2,
            Nivel::Expedientes => 3,
            Nivel::Expediente => 4,
        }
    }
}

const NIVELES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    nivel: Nivel,
    generacion: u64,
}

impl Ticket {
    pub fn nivel(&self) -> Nivel {
        self.nivel
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Generaciones([u64; NIVELES]);

impl Generaciones {
    fn emitir(&mut self, nivel: Nivel) -> Ticket {
        let inicio = nivel.indice();
        let fin = if nivel == Nivel::Busqueda { inicio + 1 } else { NIVELES };
        for generacion in &mut self.0[inicio..fin] {
            *generacion += 1;
        }
        Ticket {
            nivel,
            generacion: self.0[inicio],
        }
    }

    fn vigente(&self, ticket: &Ticket) -> bool {
        self.0[ticket.nivel.indice()] == ticket.generacion
    }
}

/// Estado de navegación derivado de la selección
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Etapa {
    SinCliente,
    ClienteSeleccionado,
    CasoSeleccionado { cerrado: bool },
    ExpedienteSeleccionado { cerrado: bool },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seleccion {
    pub cliente: Option<Cliente>,
    pub caso: Option<Caso>,
    pub expediente: Option<Expediente>,
    pub modo_edicion: bool,
    generaciones: Generaciones,
}

impl Seleccion {
    pub fn etapa(&self) -> Etapa {
        match (&self.cliente, &self.caso, &self.expediente) {
            (None, _, _) => Etapa::SinCliente,
            (Some(_), None, _) => Etapa::ClienteSeleccionado,
            (Some(_), Some(caso), None) => Etapa::CasoSeleccionado { cerrado: caso.esta_cerrado() },
            (Some(_), Some(caso), Some(_)) => Etapa::ExpedienteSeleccionado { cerrado: caso.esta_cerrado() },
        }
    }

    /// Los campos del caso solo se editan en modo edición y sin caso cerrado
    pub fn permite_editar_caso(&self) -> bool {
        self.modo_edicion
            && matches!(
                self.etapa(),
                Etapa::ClienteSeleccionado
                    | Etapa::CasoSeleccionado { cerrado: false }
                    | Etapa::ExpedienteSeleccionado { cerrado: false }
            )
    }

    /// Nuevo cliente: se pierde el contexto de caso y expediente
    pub fn cambiar_cliente(&mut self, cliente: Cliente) {
        self.cliente = Some(cliente);
        self.caso = None;
        self.expediente = None;
        self.modo_edicion = false;
    }

    /// Nuevo caso: se pierde el expediente
    pub fn cambiar_caso(&mut self, caso: Option<Caso>) {
        self.caso = caso;
        self.expediente = None;
    }

    pub fn no_caso(&self) -> Option<u32> {
        self.caso.as_ref().map(|caso| caso.no_caso)
    }

    pub fn emitir(&mut self, nivel: Nivel) -> Ticket {
        self.generaciones.emitir(nivel)
    }

    pub fn vigente(&self, ticket: &Ticket) -> bool {
        self.generaciones.vigente(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente() -> Cliente {
        Cliente {
            cod_cliente: "7".into(),
            nom_cliente: "Jane".into(),
            apell_cliente: "Doe".into(),
            n_documento: "1020".into(),
        }
    }

    fn caso(fecha_fin: Option<&str>) -> Caso {
        Caso {
            no_caso: 101,
            cod_cliente: Some("7".into()),
            fecha_inicio: "2023-05-01".into(),
            fecha_fin: fecha_fin.map(str::to_string),
            valor: "500".into(),
            cod_especializacion: "PEN".into(),
        }
    }

    #[test]
    fn emitir_un_nivel_invalida_los_inferiores() {
        let mut seleccion = Seleccion::default();
        let expediente = seleccion.emitir(Nivel::Expediente);
        let caso = seleccion.emitir(Nivel::Caso);

        assert!(seleccion.vigente(&caso));
        assert!(!seleccion.vigente(&expediente));

        let nuevo_expediente = seleccion.emitir(Nivel::Expediente);
        assert!(seleccion.vigente(&caso));
        assert!(seleccion.vigente(&nuevo_expediente));
    }

    #[test]
    fn busqueda_no_toca_la_cadena() {
        let mut seleccion = Seleccion::default();
        let casos = seleccion.emitir(Nivel::Casos);
        let busqueda = seleccion.emitir(Nivel::Busqueda);
        assert!(seleccion.vigente(&casos));
        assert!(seleccion.vigente(&busqueda));

        seleccion.emitir(Nivel::Casos);
        assert!(seleccion.vigente(&busqueda));
        assert!(!seleccion.vigente(&casos));
    }

    #[test]
    fn etapas_de_navegacion() {
        let mut seleccion = Seleccion::default();
        assert_eq!(seleccion.etapa(), Etapa::SinCliente);

        seleccion.cambiar_cliente(cliente());
        assert_eq!(seleccion.etapa(), Etapa::ClienteSeleccionado);

        seleccion.cambiar_caso(Some(caso(Some("2024-01-01"))));
        assert_eq!(seleccion.etapa(), Etapa::CasoSeleccionado { cerrado: true });

        seleccion.expediente = Some(Expediente::default());
        assert_eq!(seleccion.etapa(), Etapa::ExpedienteSeleccionado { cerrado: true });

        seleccion.cambiar_cliente(cliente());
        assert_eq!(seleccion.caso, None);
        assert_eq!(seleccion.expediente, None);
    }

    #[test]
    fn caso_cerrado_no_permite_edicion() {
        let mut seleccion = Seleccion::default();
        seleccion.cambiar_cliente(cliente());
        seleccion.modo_edicion = true;
        assert!(seleccion.permite_editar_caso());

        seleccion.cambiar_caso(Some(caso(None)));
        assert!(seleccion.permite_editar_caso());

        seleccion.cambiar_caso(Some(caso(Some("2024-01-01"))));
        assert!(!seleccion.permite_editar_caso());

        seleccion.cambiar_caso(Some(caso(None)));
        seleccion.modo_edicion = false;
        assert!(!seleccion.permite_editar_caso());
    }
}
