pub mod interaction;
pub mod panel;
pub mod solid;
