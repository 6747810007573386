mod config;
mod error;
mod growth;
mod lines;
mod mtl;
mod obj;
mod scan;

use std::fs::File;
use std::io::{ BufRead, BufReader };
use std::path::Path;

use log::warn;

pub use self::config::{ MtlConfig, ObjConfig };
pub use self::error::{ Attribute, MtlError, ObjError, ValidationError };
pub use self::mtl::{ WavefrontMaterial, WavefrontMaterials };
pub use self::obj::{
	Corner, Face, Group, Normal, TexCoord, Vertex, WavefrontModel, MAX_CORNERS, MIN_CORNERS,
};
pub use self::scan::MAX_NAME_LEN;

pub fn parse_obj_string(input: &str) -> Result<WavefrontModel, ObjError> {
	parse_obj(input.as_bytes())
}

pub fn parse_obj<R: BufRead>(reader: R) -> Result<WavefrontModel, ObjError> {
	obj::parse(reader, &ObjConfig::default())
}

pub fn parse_obj_with<R: BufRead>(reader: R, config: &ObjConfig) -> Result<WavefrontModel, ObjError> {
	obj::parse(reader, config)
}

pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<WavefrontModel, ObjError> {
	load_obj_with(path, &ObjConfig::default())
}

pub fn load_obj_with<P: AsRef<Path>>(path: P, config: &ObjConfig) -> Result<WavefrontModel, ObjError> {
	let path = path.as_ref();
	if path.as_os_str().is_empty() {
		return Err(ObjError::InvalidFormat);
	}

	let file = File::open(path).map_err(|why| {
		warn!("couldn't open {}: {}", path.display(), why);
		ObjError::NotFound
	})?;

	obj::parse(BufReader::new(file), config)
}

pub fn parse_mtl_string(input: &str) -> Result<WavefrontMaterials, MtlError> {
	parse_mtl(input.as_bytes())
}

pub fn parse_mtl<R: BufRead>(reader: R) -> Result<WavefrontMaterials, MtlError> {
	mtl::parse(reader, &MtlConfig::default())
}

pub fn parse_mtl_with<R: BufRead>(reader: R, config: &MtlConfig) -> Result<WavefrontMaterials, MtlError> {
	mtl::parse(reader, config)
}

pub fn load_mtl<P: AsRef<Path>>(path: P) -> Result<WavefrontMaterials, MtlError> {
	load_mtl_with(path, &MtlConfig::default())
}

pub fn load_mtl_with<P: AsRef<Path>>(path: P, config: &MtlConfig) -> Result<WavefrontMaterials, MtlError> {
	let path = path.as_ref();
	if path.as_os_str().is_empty() {
		return Err(MtlError::InvalidFormat);
	}

	let file = File::open(path).map_err(|why| {
		warn!("couldn't open {}: {}", path.display(), why);
		MtlError::NotFound
	})?;

	mtl::parse(BufReader::new(file), config)
}
