// Rutas REST relativas a la URL base (los segmentos llegan ya codificados)

pub fn buscar_cliente(nombre: &str, apellido: &str) -> String {
    format!("/cliente/buscar/{}/{}", nombre, apellido)
}

pub fn cliente_por_documento(documento: &str) -> String {
    format!("/cliente/{}", documento)
}

pub fn casos_activos(cod_cliente: &str) -> String {
    format!("/caso/activos/{}", cod_cliente)
}

pub fn caso(no_caso: u32) -> String {
    format!("/caso/{}", no_caso)
}

pub const CREAR_CASO: &str = "/caso/crear";

pub const ESPECIALIZACIONES: &str = "/especializacion/";

pub fn expedientes_caso(no_caso: u32) -> String {
    format!("/expediente/caso/{}", no_caso)
}

pub fn expediente(consec_expe: u32) -> String {
    format!("/expediente/{}", consec_expe)
}

pub const SALUD: &str = "/health";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rutas_de_la_api() {
        assert_eq!(buscar_cliente("Jane", "Doe"), "/cliente/buscar/Jane/Doe");
        assert_eq!(casos_activos("7"), "/caso/activos/7");
        assert_eq!(caso(101), "/caso/101");
        assert_eq!(expedientes_caso(101), "/expediente/caso/101");
        assert_eq!(expediente(9), "/expediente/9");
    }
}
