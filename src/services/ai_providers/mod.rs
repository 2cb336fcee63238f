pub mod vertex_ai;
