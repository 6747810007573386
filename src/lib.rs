//! Streaming readers for Wavefront geometry (`.obj`) and material library
//! (`.mtl`) files.
//!
//! Both parsers consume their source line by line and hand back a fully
//! owned aggregate, or a single error with nothing partially built leaking
//! out.

pub mod wavefront;

pub use wavefront::{
	load_mtl, load_obj, parse_mtl_string, parse_obj_string, MtlConfig, MtlError, ObjConfig,
	ObjError, WavefrontMaterial, WavefrontMaterials, WavefrontModel,
};
