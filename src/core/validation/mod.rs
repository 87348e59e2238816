//! Order form validation
//!
//! [`validate_pedido`] runs every field rule and collects the failures in a
//! fixed order (name, phone, date, quantity). An empty list means the form
//! may be written.

pub mod validators;

use crate::core::order::PedidoForm;
use chrono::{Local, NaiveDate};

/// Run all field rules against an order form
///
/// The address has no rule. `today` is the reference day for the
/// "not in the past" check.
pub fn validate_pedido(form: &PedidoForm, today: NaiveDate) -> Vec<String> {
    [
        validators::name(&form.nombre),
        validators::phone(&form.numero),
        validators::date(&form.fecha, today),
        validators::quantity(&form.cantidad_bidones),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// [`validate_pedido`] against the server's local calendar date
pub fn validate_pedido_today(form: &PedidoForm) -> Vec<String> {
    validate_pedido(form, Local::now().date_naive())
}
