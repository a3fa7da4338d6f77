//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new value; the constructor is the single place where invariants
/// are checked, so every existing value is a valid one.
///
/// ## Encapsulation
///
/// Public value objects keep their fields private and expose read-only
/// accessors. Rust has no way to mark a `pub` field as write-once, so a public
/// field would let callers break the invariants the constructor established,
/// and would freeze the representation into the API.
///
/// Private or crate-internal helper structs may use plain fields freely: every
/// access site lives next to the definition, so changing the layout later stays
/// a local edit.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```
/// use wallclock_core::ValueObject;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Celsius(i32);
///
/// impl Celsius {
///     pub fn degrees(&self) -> i32 {
///         self.0
///     }
/// }
///
/// impl ValueObject for Celsius {}
///
/// assert_eq!(Celsius(21), Celsius(21));
/// assert_eq!(Celsius(21).degrees(), 21);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
