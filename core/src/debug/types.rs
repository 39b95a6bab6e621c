//! Debug value type definitions
//!
//! Core types for the debug item system. Every inspectable value travels
//! through [`DebugValue`], so the presentation layer never needs to know the
//! concrete Rust type behind an item.

use std::fmt;

/// Value kind identifier for registered debug items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Enum,
    I32,
    U32,
    F32,
}

/// Runtime value representation for debug items
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugValue {
    Bool(bool),
    /// Enum stored by its ordinal value
    Enum(i32),
    I32(i32),
    U32(u32),
    F32(f32),
}

impl DebugValue {
    /// Get bool value (non-zero numbers count as true)
    pub fn as_bool(&self) -> bool {
        match self {
            DebugValue::Bool(v) => *v,
            DebugValue::Enum(v) | DebugValue::I32(v) => *v != 0,
            DebugValue::U32(v) => *v != 0,
            DebugValue::F32(v) => *v != 0.0,
        }
    }

    /// Widen to i64 (floats are truncated, NaN becomes 0)
    pub fn as_i64(&self) -> i64 {
        match self {
            DebugValue::Bool(v) => i64::from(*v),
            DebugValue::Enum(v) | DebugValue::I32(v) => i64::from(*v),
            DebugValue::U32(v) => i64::from(*v),
            DebugValue::F32(v) => *v as i64,
        }
    }

    /// Convert to f32 for numeric display and sliders
    pub fn as_f32(&self) -> f32 {
        match self {
            DebugValue::Bool(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
            DebugValue::Enum(v) | DebugValue::I32(v) => *v as f32,
            DebugValue::U32(v) => *v as f32,
            DebugValue::F32(v) => *v,
        }
    }

    /// Re-encode an integer in the same variant as `self`, saturating at the
    /// variant's limits.
    pub fn with_i64(self, value: i64) -> DebugValue {
        match self {
            DebugValue::Bool(_) => DebugValue::Bool(value != 0),
            DebugValue::Enum(_) => DebugValue::Enum(saturate_i32(value)),
            DebugValue::I32(_) => DebugValue::I32(saturate_i32(value)),
            DebugValue::U32(_) => DebugValue::U32(saturate_u32(value)),
            DebugValue::F32(_) => DebugValue::F32(value as f32),
        }
    }

    /// Get the value kind for this debug value
    pub fn kind(&self) -> ValueKind {
        match self {
            DebugValue::Bool(_) => ValueKind::Bool,
            DebugValue::Enum(_) => ValueKind::Enum,
            DebugValue::I32(_) => ValueKind::I32,
            DebugValue::U32(_) => ValueKind::U32,
            DebugValue::F32(_) => ValueKind::F32,
        }
    }
}

impl fmt::Display for DebugValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugValue::Bool(v) => write!(f, "{}", if *v { "On" } else { "Off" }),
            DebugValue::Enum(v) | DebugValue::I32(v) => write!(f, "{}", v),
            DebugValue::U32(v) => write!(f, "{}", v),
            DebugValue::F32(v) => write!(f, "{:.3}", v),
        }
    }
}

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn saturate_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Conversion from the erased value back into a concrete field type.
///
/// Mismatched variants are coerced rather than rejected.
pub trait FromDebugValue: Sized {
    fn from_debug_value(value: DebugValue) -> Self;
}

impl FromDebugValue for bool {
    fn from_debug_value(value: DebugValue) -> Self {
        value.as_bool()
    }
}

impl FromDebugValue for i32 {
    fn from_debug_value(value: DebugValue) -> Self {
        saturate_i32(value.as_i64())
    }
}

impl FromDebugValue for u32 {
    fn from_debug_value(value: DebugValue) -> Self {
        saturate_u32(value.as_i64())
    }
}

impl FromDebugValue for f32 {
    fn from_debug_value(value: DebugValue) -> Self {
        value.as_f32()
    }
}

impl From<bool> for DebugValue {
    fn from(v: bool) -> Self {
        DebugValue::Bool(v)
    }
}

impl From<i32> for DebugValue {
    fn from(v: i32) -> Self {
        DebugValue::I32(v)
    }
}

impl From<u32> for DebugValue {
    fn from(v: u32) -> Self {
        DebugValue::U32(v)
    }
}

impl From<f32> for DebugValue {
    fn from(v: f32) -> Self {
        DebugValue::F32(v)
    }
}

/// A Rust enum that can be stepped through and listed in a dropdown.
///
/// Implementors list their variants in navigation order.
pub trait DebugEnum: Copy + PartialEq + 'static {
    /// All variants, in the order they are cycled
    fn variants() -> &'static [Self];

    /// Display name of a variant
    fn name(self) -> &'static str;

    /// Stored ordinal of a variant
    fn ordinal(self) -> i32;

    /// Look up a variant by ordinal
    fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.ordinal() == ordinal)
    }
}

/// Inclusive range bounds for numeric handlers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Create bounds, swapping the ends if they arrive reversed so that
    /// `min <= max` always holds.
    pub fn new(min: T, max: T) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Clamp a value to these bounds
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Check whether a value lies within these bounds
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}
