//! Type-erased access to values owned by other subsystems
//!
//! The debug menu never owns the values it shows. Each item holds a
//! [`ValueAccessor`] that reads and writes one external storage location.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::types::{DebugEnum, DebugValue, FromDebugValue};

type Getter = Box<dyn Fn() -> DebugValue>;
type Setter = Box<dyn Fn(DebugValue)>;

/// Get/set pair bound to a single external value
pub struct ValueAccessor {
    getter: Getter,
    setter: Setter,
}

impl fmt::Debug for ValueAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueAccessor")
            .field("value", &self.get())
            .finish()
    }
}

impl ValueAccessor {
    /// Create an accessor from raw getter and setter closures
    pub fn new(
        get: impl Fn() -> DebugValue + 'static,
        set: impl Fn(DebugValue) + 'static,
    ) -> Self {
        Self {
            getter: Box::new(get),
            setter: Box::new(set),
        }
    }

    /// Create an accessor whose writes are ignored
    pub fn read_only(get: impl Fn() -> DebugValue + 'static) -> Self {
        Self::new(get, |_| {})
    }

    /// Bind to a shared cell
    pub fn from_cell<T>(cell: Rc<Cell<T>>) -> Self
    where
        T: Copy + Into<DebugValue> + FromDebugValue + 'static,
    {
        let read = Rc::clone(&cell);
        Self::new(
            move || read.get().into(),
            move |value| cell.set(T::from_debug_value(value)),
        )
    }

    /// Bind to one field of a shared settings struct.
    ///
    /// If the owner is already borrowed elsewhere the write is skipped and the
    /// read falls back to `T::default()`.
    pub fn field<S, T>(owner: &Rc<RefCell<S>>, get: fn(&S) -> T, set: fn(&mut S, T)) -> Self
    where
        S: 'static,
        T: Copy + Default + Into<DebugValue> + FromDebugValue + 'static,
    {
        let read = Rc::clone(owner);
        let write = Rc::clone(owner);
        Self::new(
            move || match read.try_borrow() {
                Ok(owner) => get(&owner).into(),
                Err(_) => {
                    tracing::trace!("debug: owner busy during read, using default");
                    T::default().into()
                }
            },
            move |value| match write.try_borrow_mut() {
                Ok(mut owner) => set(&mut owner, T::from_debug_value(value)),
                Err(_) => tracing::debug!("debug: owner busy during write, skipped"),
            },
        )
    }

    /// Bind to an enum field of a shared settings struct, stored by ordinal.
    ///
    /// Unknown ordinals written through the accessor are ignored.
    pub fn enum_field<S, E>(owner: &Rc<RefCell<S>>, get: fn(&S) -> E, set: fn(&mut S, E)) -> Self
    where
        S: 'static,
        E: DebugEnum,
    {
        let read = Rc::clone(owner);
        let write = Rc::clone(owner);
        Self::new(
            move || match read.try_borrow() {
                Ok(owner) => DebugValue::Enum(get(&owner).ordinal()),
                Err(_) => DebugValue::Enum(E::variants().first().map_or(0, |v| v.ordinal())),
            },
            move |value| {
                let ordinal = value.as_i64() as i32;
                let Some(variant) = E::from_ordinal(ordinal) else {
                    tracing::debug!("debug: ignoring unknown enum ordinal {}", ordinal);
                    return;
                };
                match write.try_borrow_mut() {
                    Ok(mut owner) => set(&mut owner, variant),
                    Err(_) => tracing::debug!("debug: owner busy during write, skipped"),
                }
            },
        )
    }

    /// Read the current external value
    pub fn get(&self) -> DebugValue {
        (self.getter)()
    }

    /// Write a new external value
    pub fn set(&self, value: DebugValue) {
        (self.setter)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Mode {
        Off,
        On,
    }

    impl DebugEnum for Mode {
        fn variants() -> &'static [Self] {
            &[Mode::Off, Mode::On]
        }
        fn name(self) -> &'static str {
            match self {
                Mode::Off => "Off",
                Mode::On => "On",
            }
        }
        fn ordinal(self) -> i32 {
            self as i32
        }
    }

    #[derive(Default)]
    struct Settings {
        level: u32,
        mode: Option<Mode>,
    }

    #[test]
    fn test_cell_set_then_get() {
        let cell = Rc::new(Cell::new(3u32));
        let accessor = ValueAccessor::from_cell(Rc::clone(&cell));
        accessor.set(DebugValue::U32(9));
        assert_eq!(accessor.get(), DebugValue::U32(9));
        assert_eq!(cell.get(), 9);
    }

    #[test]
    fn test_field_projection() {
        let settings = Rc::new(RefCell::new(Settings::default()));
        let accessor = ValueAccessor::field(&settings, |s| s.level, |s, v| s.level = v);
        accessor.set(DebugValue::U32(4));
        assert_eq!(settings.borrow().level, 4);
        assert_eq!(accessor.get(), DebugValue::U32(4));
    }

    #[test]
    fn test_field_write_skipped_while_borrowed() {
        let settings = Rc::new(RefCell::new(Settings::default()));
        let accessor = ValueAccessor::field(&settings, |s| s.level, |s, v| s.level = v);
        let guard = settings.borrow();
        accessor.set(DebugValue::U32(4));
        drop(guard);
        assert_eq!(settings.borrow().level, 0);
    }

    #[test]
    fn test_enum_field_ignores_unknown_ordinal() {
        let settings = Rc::new(RefCell::new(Settings {
            level: 0,
            mode: Some(Mode::Off),
        }));
        let accessor = ValueAccessor::enum_field(
            &settings,
            |s| s.mode.unwrap_or(Mode::Off),
            |s, v| s.mode = Some(v),
        );
        accessor.set(DebugValue::Enum(1));
        assert_eq!(settings.borrow().mode, Some(Mode::On));
        accessor.set(DebugValue::Enum(7));
        assert_eq!(settings.borrow().mode, Some(Mode::On));
        assert_eq!(accessor.get(), DebugValue::Enum(1));
    }

    #[test]
    fn test_read_only_ignores_writes() {
        let accessor = ValueAccessor::read_only(|| DebugValue::I32(12));
        accessor.set(DebugValue::I32(0));
        assert_eq!(accessor.get(), DebugValue::I32(12));
    }
}
