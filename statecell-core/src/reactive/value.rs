//! Runtime Type Tags and Dynamic Values
//!
//! A cell is normally parameterized over a concrete `T`, which makes a runtime
//! type query redundant. Hosts that feed a cell with heterogeneous payloads
//! (event buses, scripting bridges, UI bindings) store a [`Value`] instead and
//! ask the cell for its [`TypeTag`].
//!
//! # Equality
//!
//! `Value` follows scripting-host equality rather than deep equality:
//!
//! - `Nil`, `Boolean`, `Number` and `String` compare by value (`NaN != NaN`).
//! - `Table` and `Function` compare by identity: two separately built tables
//!   with the same contents are different values, while clones of one table
//!   are equal.
//!
//! Writing a freshly built table to a cell therefore always notifies, even if
//! its contents match the current one.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// The closed set of payload kinds a cell can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Nil,
    Boolean,
    Number,
    String,
    Table,
    Function,
}

impl TypeTag {
    /// Lower-case name of the kind, as a scripting host would print it.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Nil => "nil",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Table => "table",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types that can report a runtime [`TypeTag`].
///
/// Implemented for the primitive types that map onto a tag, for [`Value`],
/// and for `Option<T>` (where `None` is `Nil`).
pub trait Typed {
    fn type_tag(&self) -> TypeTag;
}

macro_rules! impl_typed {
    ($tag:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_tag(&self) -> TypeTag {
                    $tag
                }
            }
        )+
    };
}

impl_typed!(TypeTag::Nil => ());
impl_typed!(TypeTag::Boolean => bool);
impl_typed!(TypeTag::Number => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_typed!(TypeTag::String => String, &'static str, char, Arc<str>);

impl<T: Typed> Typed for Option<T> {
    fn type_tag(&self) -> TypeTag {
        match self {
            Some(inner) => inner.type_tag(),
            None => TypeTag::Nil,
        }
    }
}

impl<T> Typed for Vec<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Table
    }
}

impl<K, V, S> Typed for IndexMap<K, V, S> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Table
    }
}

/// Keyed table payload. Shared by reference inside [`Value::Table`].
pub type Table = IndexMap<String, Value>;

/// Callable payload. Shared by reference inside [`Value::Function`].
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A dynamically typed payload.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Number(f64),
    String(Arc<str>),
    Table(Arc<Table>),
    Function(Arc<NativeFn>),
}

impl Value {
    /// Wrap a table so it can be stored and compared by identity.
    pub fn table(table: Table) -> Self {
        Value::Table(Arc::new(table))
    }

    /// Wrap a closure as a function value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(&**t),
            _ => None,
        }
    }

    /// Call a function value. Returns `None` for any other kind.
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        match self {
            Value::Function(f) => Some(f(args)),
            _ => None,
        }
    }
}

impl Typed for Value {
    fn type_tag(&self) -> TypeTag {
        match self {
            Value::Nil => TypeTag::Nil,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Table(_) => TypeTag::Table,
            Value::Function(_) => TypeTag::Function,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => Arc::ptr_eq(a, b),
            // Data pointers only; vtable pointers may differ per codegen unit.
            (Value::Function(a), Value::Function(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Table(t) => f.debug_tuple("Table").field(t).finish(),
            Value::Function(func) => write!(f, "Function({:p})", Arc::as_ptr(func) as *const ()),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::table(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Nil)
    }
}
