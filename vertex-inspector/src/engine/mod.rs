pub mod camera;
pub mod core;
pub mod mesh;
pub mod scene;
