/// Record tree rendering command.
pub mod dump;
/// Stream statistics command.
pub mod info;

pub(crate) mod util;
