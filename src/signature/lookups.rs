use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::types::{Resource, Type};

pub type VectorConstructor = fn(Type) -> Type;

lazy_static! {
    /// Scalar type names. Booleans, integers and instance ids are all
    /// reals at this level. Resource names resolve to the matching id
    /// type. A name in neither table is a `Newtype`, not an error.
    pub static ref SCALAR_LOOKUP: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        map.insert("void", Type::Void);
        map.insert("real", Type::Real);
        map.insert("string", Type::String);
        map.insert("int", Type::Real);
        map.insert("bool", Type::Real);
        map.insert("instance", Type::Real);
        map.insert("unknown", Type::Unknown(vec![]));
        map.insert("sprite", Type::Id(Resource::Sprite));
        map.insert("sound", Type::Id(Resource::Sound));
        map.insert("background", Type::Id(Resource::Background));
        map.insert("path", Type::Id(Resource::Path));
        map.insert("script", Type::Id(Resource::Script));
        map.insert("font", Type::Id(Resource::Font));
        map.insert("timeline", Type::Id(Resource::Timeline));
        map.insert("object", Type::Id(Resource::Object));
        map.insert("room", Type::Id(Resource::Room));
        map
    };

    /// Vector type names. Each requires an angle-bracketed subtype and
    /// wraps it in the named container type.
    pub static ref VECTOR_LOOKUP: HashMap<&'static str, VectorConstructor> = {
        let mut map: HashMap<&'static str, VectorConstructor> = HashMap::new();
        map.insert("array", |subtype| Type::Array(Box::new(subtype)));
        map.insert("array2", |subtype| Type::Array2(Box::new(subtype)));
        map.insert("grid", |subtype| Type::Grid(Box::new(subtype)));
        map.insert("list", |subtype| Type::List(Box::new(subtype)));
        map.insert("map", |subtype| Type::Map(Box::new(subtype)));
        map.insert("pqueue", |subtype| Type::PriorityQueue(Box::new(subtype)));
        map.insert("queue", |subtype| Type::Queue(Box::new(subtype)));
        map.insert("stack", |subtype| Type::Stack(Box::new(subtype)));
        map
    };
}
