use std::io::BufRead;
use std::ops::Index;
use std::slice;

use log::{ debug, error, info };
use nalgebra::Vector3;

use super::config::MtlConfig;
use super::error::MtlError;
use super::growth;
use super::lines::LineReader;
use super::scan::{ bounded_name, parse_float, parse_int, parse_token, parse_vector3, scan };

#[derive(Debug, Clone, PartialEq)]
pub struct WavefrontMaterial {
	pub name: String,
	pub ambient: Vector3<f32>,
	pub diffuse: Vector3<f32>,
	pub specular: Vector3<f32>,
	pub emissive: Vector3<f32>,
	pub specular_exponent: f32,
	pub optical_density: f32,
	pub dissolve: f32,
	pub illum: i32,
	pub diffuse_map: Option<String>,
}

impl WavefrontMaterial {
	/// A material with every numeric field zeroed.
	pub fn new(name: String) -> Self {
		WavefrontMaterial {
			name,
			ambient: Vector3::zeros(),
			diffuse: Vector3::zeros(),
			specular: Vector3::zeros(),
			emissive: Vector3::zeros(),
			specular_exponent: 0.0,
			optical_density: 0.0,
			dissolve: 0.0,
			illum: 0,
			diffuse_map: None,
		}
	}
}

/// Materials in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WavefrontMaterials {
	materials: Vec<WavefrontMaterial>,
}

impl WavefrontMaterials {
	pub fn materials(&self) -> &[WavefrontMaterial] {
		&self.materials
	}

	pub fn len(&self) -> usize {
		self.materials.len()
	}

	pub fn is_empty(&self) -> bool {
		self.materials.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, WavefrontMaterial> {
		self.materials.iter()
	}

	/// First material declared under `name`. Names are not required to be
	/// unique.
	pub fn get(&self, name: &str) -> Option<&WavefrontMaterial> {
		self.materials.iter().find(|material| material.name == name)
	}

	/// Frees every material. Safe to call any number of times.
	pub fn release(&mut self) {
		self.materials = Vec::new();
	}
}

impl Index<usize> for WavefrontMaterials {
	type Output = WavefrontMaterial;

	fn index(&self, index: usize) -> &WavefrontMaterial {
		&self.materials[index]
	}
}

impl<'a> IntoIterator for &'a WavefrontMaterials {
	type Item = &'a WavefrontMaterial;
	type IntoIter = slice::Iter<'a, WavefrontMaterial>;

	fn into_iter(self) -> Self::IntoIter {
		self.materials.iter()
	}
}

fn color(rest: &str) -> Result<Vector3<f32>, MtlError> {
	scan(parse_vector3, rest)
		.map(|[r, g, b]| Vector3::new(r, g, b))
		.ok_or(MtlError::InvalidFormat)
}

fn scalar(rest: &str) -> Result<f32, MtlError> {
	scan(parse_float, rest).ok_or(MtlError::InvalidFormat)
}

/// Payload of a dissolve line: `d` on its own or followed by whitespace, so
/// that other keywords starting with `d` are left alone.
fn dissolve(line: &str) -> Option<&str> {
	let rest = line.strip_prefix('d')?;
	match rest.chars().next() {
		None | Some(' ') | Some('\t') => Some(rest),
		_ => None,
	}
}

/// Applies one property line to `material`. Unknown keywords are no-ops.
fn apply(material: &mut WavefrontMaterial, line: &str) -> Result<(), MtlError> {
	if let Some(rest) = line.strip_prefix("Ka") {
		material.ambient = color(rest)?;
	} else if let Some(rest) = line.strip_prefix("Kd") {
		material.diffuse = color(rest)?;
	} else if let Some(rest) = line.strip_prefix("Ks") {
		material.specular = color(rest)?;
	} else if let Some(rest) = line.strip_prefix("Ke") {
		material.emissive = color(rest)?;
	} else if let Some(rest) = line.strip_prefix("Ns") {
		material.specular_exponent = scalar(rest)?;
	} else if let Some(rest) = line.strip_prefix("Ni") {
		material.optical_density = scalar(rest)?;
	} else if let Some(rest) = dissolve(line) {
		material.dissolve = scalar(rest)?;
	} else if let Some(rest) = line.strip_prefix("illum") {
		material.illum = scan(parse_int, rest).ok_or(MtlError::InvalidFormat)?;
	} else if let Some(rest) = line.strip_prefix("map_Kd") {
		let filename = scan(parse_token, rest).ok_or(MtlError::InvalidFormat)?;
		material.diffuse_map = Some(filename.to_owned());
	} else {
		debug!("ignored material property {:?}", line);
	}

	Ok(())
}

/// Reads a whole material library. Any malformed property line aborts the
/// parse and drops every material read so far.
pub fn parse<R: BufRead>(reader: R, config: &MtlConfig) -> Result<WavefrontMaterials, MtlError> {
	let mut materials: Vec<WavefrontMaterial> = growth::with_capacity(config.material_capacity)?;
	let mut current: Option<usize> = None;
	let mut lines = LineReader::new(reader);

	while let Some((number, line)) = lines.next_line().map_err(|_| MtlError::NotFound)? {
		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		if let Some(rest) = line.strip_prefix("newmtl") {
			let name = scan(parse_token, rest).ok_or_else(|| {
				error!("line {}: newmtl without a name", number);
				MtlError::InvalidFormat
			})?;
			growth::push(&mut materials, WavefrontMaterial::new(bounded_name(name)))?;
			current = Some(materials.len() - 1);
			continue;
		}

		let Some(index) = current else {
			debug!("line {}: property before any newmtl, ignored", number);
			continue;
		};

		apply(&mut materials[index], &line).map_err(|err| {
			error!("line {}: malformed material property {:?}", number, line);
			err
		})?;
	}

	info!("parsed MTL: {} materials", materials.len());

	Ok(WavefrontMaterials { materials })
}
