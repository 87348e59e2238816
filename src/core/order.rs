//! Order (pedido) records and the raw form payload they are built from

use crate::core::error::RequestError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by forms, templates and the validator
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted order row, in table column order
///
/// Field names match the `Pedido` table columns so rows can be decoded with
/// `sqlx::FromRow` and handed to templates without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Pedido {
    pub id_pedido: i64,
    pub nombre: String,
    pub direccion: String,
    pub numero: String,
    pub cantidad_bidones: i64,
    pub fecha: NaiveDate,
}

impl Pedido {
    /// Build a row from an assigned id and the written fields
    pub fn from_new(id_pedido: i64, new: NewPedido) -> Self {
        Self {
            id_pedido,
            nombre: new.nombre,
            direccion: new.direccion,
            numero: new.numero,
            cantidad_bidones: new.cantidad_bidones,
            fecha: new.fecha,
        }
    }
}

/// The five writable fields of an order, already converted to column types
///
/// Conversion only guarantees the values can be bound; the field rules are
/// enforced by the validator before the create workflow builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPedido {
    pub nombre: String,
    pub direccion: String,
    pub numero: String,
    pub cantidad_bidones: i64,
    pub fecha: NaiveDate,
}

/// Raw order form as submitted by the browser
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PedidoForm {
    pub nombre: String,
    pub direccion: String,
    pub numero: String,
    pub cantidad_bidones: String,
    pub fecha: String,
}

impl PedidoForm {
    /// Copy of the form with leading/trailing whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            numero: self.numero.trim().to_string(),
            cantidad_bidones: self.cantidad_bidones.trim().to_string(),
            fecha: self.fecha.trim().to_string(),
        }
    }

    /// Convert the text fields to column types without applying any field rule
    ///
    /// Fails only when quantity is not an integer or the date does not parse,
    /// since those values cannot be bound to their columns. Surrounding
    /// whitespace is ignored for those two; text fields are kept verbatim.
    pub fn to_new_pedido(&self) -> Result<NewPedido, RequestError> {
        let cantidad_bidones = self.cantidad_bidones.trim().parse::<i64>().map_err(|_| {
            RequestError::UnconvertibleField {
                field: "cantidad_bidones".to_string(),
                value: self.cantidad_bidones.clone(),
            }
        })?;
        let fecha = NaiveDate::parse_from_str(self.fecha.trim(), DATE_FORMAT).map_err(|_| {
            RequestError::UnconvertibleField {
                field: "fecha".to_string(),
                value: self.fecha.clone(),
            }
        })?;

        Ok(NewPedido {
            nombre: self.nombre.clone(),
            direccion: self.direccion.clone(),
            numero: self.numero.clone(),
            cantidad_bidones,
            fecha,
        })
    }
}
