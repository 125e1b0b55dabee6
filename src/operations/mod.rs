pub mod diagonal;
pub mod grid;
pub mod interchange;
pub mod split;
