pub mod block_descriptor;
pub mod block_names;
