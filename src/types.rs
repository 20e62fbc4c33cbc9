//! Type model for builtin signatures.
//!
//! This is the data contract produced by the signature parser. Booleans
//! and instance ids are not distinct types at this level; both are
//! `Real`. `Void` is only meaningful as a return type by convention.

/// Kind tag of an externally managed asset handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Sprite,
    Sound,
    Background,
    Path,
    Script,
    Font,
    Timeline,
    Object,
    Room,
}

/// A value type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Void,
    Real,
    String,
    Array(Box<Type>),
    Array2(Box<Type>),
    Grid(Box<Type>),
    List(Box<Type>),
    Map(Box<Type>),
    PriorityQueue(Box<Type>),
    Queue(Box<Type>),
    Stack(Box<Type>),
    /// Resource identifier of the given kind.
    Id(Resource),
    /// Opaque nominal type introduced by an unrecognized type name.
    Newtype(String),
    /// Partially known type; the set lists the candidates. An empty set
    /// means fully unknown.
    Unknown(Vec<Type>),
}

/// One typed argument of a signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub ty: Type,
}

/// Argument-list suffix mode of a signature. The three variants are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgTail {
    /// No further arguments.
    None,
    /// Repeats the representative argument zero or more times.
    Variadic(Argument),
    /// A trailing run of optional arguments.
    Optional(Vec<Argument>),
}

/// A builtin function signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub args: Vec<Argument>,
    pub tail: ArgTail,
    pub ret: Type,
}

/// A declared enumeration. Entry values are assigned sequentially from
/// 0 in declaration order; the grammar has no explicit-value form.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub entries: Vec<(String, i64)>,
}
