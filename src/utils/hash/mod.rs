pub mod get_hash;

pub(crate) use get_hash::get_hash;
