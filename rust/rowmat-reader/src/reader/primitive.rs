//! Decoders for the fixed-width kinds backed by the shared 64-bit integer and
//! 64-bit float arrays.

use rowmat_common::{Result, error::Error};
use rowmat_vector::column_vector::{DoubleColumnVector, LongColumnVector, PrimitiveColumnVector};

use crate::value::Value;

#[inline]
fn slot_value<T: Copy>(vector: &PrimitiveColumnVector<T>, row: usize) -> Result<T> {
    vector.vector.get(row).copied().ok_or_else(|| {
        Error::invalid_arg(
            "row",
            format!("row {row} is out of range for {} values", vector.vector.len()),
        )
    })
}

pub fn read_boolean(vector: &LongColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(|v| Value::Boolean(v != 0))
}

pub fn read_byte(vector: &LongColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(|v| Value::Byte(v as i8))
}

pub fn read_short(vector: &LongColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(|v| Value::Short(v as i16))
}

pub fn read_int(vector: &LongColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(|v| Value::Int(v as i32))
}

pub fn read_long(vector: &LongColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(Value::Long)
}

pub fn read_float(vector: &DoubleColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(|v| Value::Float(v as f32))
}

pub fn read_double(vector: &DoubleColumnVector, row: usize) -> Result<Value> {
    slot_value(vector, row).map(Value::Double)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_zero_is_false() {
        let vector = LongColumnVector::from_values(&[0, 1, -1, i64::MIN, 2]);
        let decoded = (0..vector.len())
            .map(|row| read_boolean(&vector, row).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            decoded,
            vec![
                Value::Boolean(false),
                Value::Boolean(true),
                Value::Boolean(true),
                Value::Boolean(true),
                Value::Boolean(true),
            ]
        );
    }

    #[test]
    fn test_narrowing_truncates() {
        let vector = LongColumnVector::from_values(&[0x1_0000_0080, -129, 70_000, 1 << 40]);
        assert_eq!(read_byte(&vector, 0).unwrap(), Value::Byte(-128));
        assert_eq!(read_byte(&vector, 1).unwrap(), Value::Byte(127));
        assert_eq!(read_short(&vector, 2).unwrap(), Value::Short(4464));
        assert_eq!(read_int(&vector, 0).unwrap(), Value::Int(128));
        assert_eq!(read_int(&vector, 3).unwrap(), Value::Int(0));
        assert_eq!(read_long(&vector, 3).unwrap(), Value::Long(1 << 40));
    }

    #[test]
    fn test_narrowing_round_trips_in_range() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let b = rng.i8(..);
            let s = rng.i16(..);
            let i = rng.i32(..);
            let vector = LongColumnVector::from_values(&[b as i64, s as i64, i as i64]);
            assert_eq!(read_byte(&vector, 0).unwrap(), Value::Byte(b));
            assert_eq!(read_short(&vector, 1).unwrap(), Value::Short(s));
            assert_eq!(read_int(&vector, 2).unwrap(), Value::Int(i));
        }
    }

    #[test]
    fn test_narrowing_matches_truncation() {
        let mut rng = fastrand::Rng::with_seed(17);
        for _ in 0..1000 {
            let v = rng.i64(..);
            let vector = LongColumnVector::from_values(&[v]);
            assert_eq!(read_byte(&vector, 0).unwrap(), Value::Byte(v as u8 as i8));
            assert_eq!(read_short(&vector, 0).unwrap(), Value::Short(v as u16 as i16));
            assert_eq!(read_int(&vector, 0).unwrap(), Value::Int(v as u32 as i32));
            assert_eq!(read_long(&vector, 0).unwrap(), Value::Long(v));
        }
    }

    #[test]
    fn test_float_rounds_to_nearest() {
        // 1 + 2^-24 lies halfway between two f32 values and rounds to even.
        let halfway = 1.0 + f64::powi(2.0, -24);
        let above = 1.0 + f64::powi(2.0, -24) + f64::powi(2.0, -40);
        let vector = DoubleColumnVector::from_values(&[halfway, above, 0.1, f64::MAX]);
        assert_eq!(read_float(&vector, 0).unwrap(), Value::Float(1.0));
        assert_eq!(
            read_float(&vector, 1).unwrap(),
            Value::Float(1.0 + f32::EPSILON)
        );
        assert_eq!(read_float(&vector, 2).unwrap(), Value::Float(0.1f32));
        assert_eq!(read_float(&vector, 3).unwrap(), Value::Float(f32::INFINITY));
        assert_eq!(read_double(&vector, 2).unwrap(), Value::Double(0.1));
    }

    #[test]
    fn test_float_random_values() {
        let mut rng = fastrand::Rng::with_seed(99);
        for _ in 0..1000 {
            let v = (rng.f64() - 0.5) * 1e12;
            let vector = DoubleColumnVector::from_values(&[v]);
            assert_eq!(read_float(&vector, 0).unwrap(), Value::Float(v as f32));
            assert_eq!(read_double(&vector, 0).unwrap(), Value::Double(v));
        }
    }

    #[test]
    fn test_out_of_range_slot() {
        let vector = LongColumnVector::from_values(&[1]);
        let err = read_long(&vector, 1).unwrap_err();
        assert!(!err.is_binding_mismatch());
        assert_eq!(
            err.to_string(),
            "invalid argument row: row 1 is out of range for 1 values"
        );

        let vector = DoubleColumnVector::from_values(&[]);
        assert!(read_double(&vector, 0).is_err());
        assert!(read_float(&vector, 0).is_err());
    }
}
