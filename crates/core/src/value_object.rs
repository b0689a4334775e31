//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values —
/// two `Address`es with the same fields are the same address, while two
/// customers with the same name are still distinct entities. "Modifying"
/// a value object means constructing a new one.
///
/// The bounds keep value objects cheap to pass around and easy to assert
/// on in tests. `Eq` is deliberately not required: money-bearing values
/// in this model are `f64` and only support `PartialEq`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
