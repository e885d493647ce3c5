pub mod builtins;
pub mod capabilities;
pub mod display;
mod entries;
pub mod record;
pub mod value;

pub use capabilities::{
    HasElements, HasEmptyCheck, HasField, HasIndexedAccess, HasMember, HasStringForm, HostObject,
};
pub use record::{AccessorFn, Record};
pub use value::{Map, Seq, Value};
