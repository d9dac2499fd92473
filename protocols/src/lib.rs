pub mod shutdown;
pub mod wol;
