pub mod atlas;
pub mod object_type;
pub mod store;
pub mod time;
