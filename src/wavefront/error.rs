use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Failure kinds of the geometry parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjError {
	#[error("OBJ file not found")]
	NotFound,
	#[error("Out of memory")]
	OutOfMemory,
	#[error("Invalid OBJ file format")]
	InvalidFormat,
}

impl ObjError {
	/// Fixed diagnostic text for this error kind.
	pub fn as_str(&self) -> &'static str {
		match *self {
			ObjError::NotFound => "OBJ file not found",
			ObjError::OutOfMemory => "Out of memory",
			ObjError::InvalidFormat => "Invalid OBJ file format",
		}
	}
}

impl From<TryReserveError> for ObjError {
	fn from(_: TryReserveError) -> Self {
		ObjError::OutOfMemory
	}
}

/// Failure kinds of the material library parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MtlError {
	#[error("Material file not found")]
	NotFound,
	#[error("Out of memory")]
	OutOfMemory,
	#[error("Invalid material file format")]
	InvalidFormat,
}

impl MtlError {
	/// Fixed diagnostic text for this error kind.
	pub fn as_str(&self) -> &'static str {
		match *self {
			MtlError::NotFound => "Material file not found",
			MtlError::OutOfMemory => "Out of memory",
			MtlError::InvalidFormat => "Invalid material file format",
		}
	}
}

impl From<TryReserveError> for MtlError {
	fn from(_: TryReserveError) -> Self {
		MtlError::OutOfMemory
	}
}

/// Which sequence a face corner points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
	Vertex,
	TexCoord,
	Normal,
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match *self {
			Attribute::Vertex => "vertex",
			Attribute::TexCoord => "texcoord",
			Attribute::Normal => "normal",
		})
	}
}

/// A face corner referencing past the end of its sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("face {face} corner {corner}: {attribute} index {index} out of bounds (count {count})")]
pub struct ValidationError {
	pub face: usize,
	pub corner: usize,
	pub attribute: Attribute,
	pub index: usize,
	pub count: usize,
}
