//! Scalar column decoding
//!
//! Aggregates come back as `int8` (`count`), `numeric` (`sum` over integers
//! and numerics) or floating point. `numeric` has no native Rust mapping in
//! the driver, so its binary form is decoded here.

use crate::constants::{
    NUMERIC_DIGIT_WIDTH, NUMERIC_HEADER_LEN, NUMERIC_NAN, NUMERIC_NEG, NUMERIC_POS,
};
use pgmetrics_domain::error::Error;
use pgmetrics_domain::ports::DecodedRow;
use pgmetrics_domain::value_objects::MetricValue;
use r2d2_postgres::postgres::Row;
use r2d2_postgres::postgres::types::{FromSql, Type};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// A NUMERIC value read as `f64`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PgNumeric(pub f64);

impl<'a> FromSql<'a> for PgNumeric {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> Result<Self, BoxError> {
        numeric_to_f64(raw).map(PgNumeric)
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::NUMERIC
    }
}

/// Decode the binary NUMERIC representation
///
/// Layout: `ndigits: u16, weight: i16, sign: u16, dscale: u16`, then
/// `ndigits` base-10000 digits, most significant first. The digits are
/// rendered as a decimal literal and parsed, so rounding is exact.
pub fn numeric_to_f64(raw: &[u8]) -> Result<f64, BoxError> {
    if raw.len() < NUMERIC_HEADER_LEN {
        return Err("numeric value is truncated".into());
    }
    let ndigits = u16::from_be_bytes([raw[0], raw[1]]);
    let weight = i16::from_be_bytes([raw[2], raw[3]]);
    let sign = u16::from_be_bytes([raw[4], raw[5]]);

    let digits = &raw[NUMERIC_HEADER_LEN..];
    if digits.len() != usize::from(ndigits) * 2 {
        return Err("numeric digit count does not match payload".into());
    }

    let negative = match sign {
        NUMERIC_POS => false,
        NUMERIC_NEG => true,
        NUMERIC_NAN => return Err("numeric NaN is not a metric value".into()),
        _ => return Err(format!("unsupported numeric sign 0x{sign:04x}").into()),
    };
    if ndigits == 0 {
        return Ok(0.0);
    }

    let mut literal = String::with_capacity(digits.len() * 2 + 8);
    if negative {
        literal.push('-');
    }
    for pair in digits.chunks_exact(2) {
        let digit = u16::from_be_bytes([pair[0], pair[1]]);
        if digit > 9999 {
            return Err(format!("invalid numeric digit {digit}").into());
        }
        literal.push_str(&format!("{digit:04}"));
    }
    let exponent = (i32::from(weight) - i32::from(ndigits) + 1) * NUMERIC_DIGIT_WIDTH;
    literal.push_str(&format!("e{exponent}"));

    Ok(literal.parse::<f64>()?)
}

/// Raw first-column bytes, `None` for SQL NULL
struct RawColumn<'a>(Option<&'a [u8]>);

impl<'a> FromSql<'a> for RawColumn<'a> {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> Result<Self, BoxError> {
        Ok(RawColumn(Some(raw)))
    }

    fn from_sql_null(_ty: &Type) -> Result<Self, BoxError> {
        Ok(RawColumn(None))
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

/// Decode a scalar from its binary wire form
///
/// `None` (SQL NULL) yields `Ok(None)`. Unsupported types and malformed
/// values are recoverable row decode errors.
pub fn decode_value(ty: &Type, raw: Option<&[u8]>) -> DecodedRow {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let decoded = match *ty {
        Type::INT2 => i16::from_sql(ty, raw).map(|n| MetricValue::Integer(i64::from(n))),
        Type::INT4 => i32::from_sql(ty, raw).map(|n| MetricValue::Integer(i64::from(n))),
        Type::INT8 => i64::from_sql(ty, raw).map(MetricValue::Integer),
        Type::FLOAT4 => f32::from_sql(ty, raw).map(|n| MetricValue::Float(f64::from(n))),
        Type::FLOAT8 => f64::from_sql(ty, raw).map(MetricValue::Float),
        Type::NUMERIC => PgNumeric::from_sql(ty, raw).map(|n| MetricValue::Float(n.0)),
        ref other => {
            return Err(Error::row_decode(format!("unsupported type {other}")));
        }
    };

    decoded
        .map(Some)
        .map_err(|e| Error::row_decode(format!("malformed {ty} value: {e}")))
}

/// Decode the first column of a row
pub fn decode_first_column(row: &Row) -> DecodedRow {
    let Some(column) = row.columns().first() else {
        return Err(Error::row_decode("row has no columns"));
    };

    let raw = row
        .try_get::<_, RawColumn<'_>>(0)
        .map_err(|e| Error::row_decode(format!("column '{}': {e}", column.name())))?;

    decode_value(column.type_(), raw.0).map_err(|err| match err {
        Error::RowDecode { message } => {
            Error::row_decode(format!("column '{}': {message}", column.name()))
        }
        other => other,
    })
}
