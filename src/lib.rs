//! Core value types for the Ferrite engine's scripting layer: vectors,
//! matrices, quaternions and colours, plus the conversion and arithmetic
//! algebra shared by every transform, physics call and shading parameter.

pub mod core;
pub mod util;
