use std::io::BufRead;
use std::path::{ Path, PathBuf };

use log::{ debug, info, warn };
use nalgebra::Vector3;
use nom::{
	character::complete::{ char, i32 as parse_i32 },
	combinator::{ all_consuming, opt },
	sequence::preceded,
	IResult,
};

use super::config::ObjConfig;
use super::error::{ Attribute, ObjError, ValidationError };
use super::growth;
use super::lines::LineReader;
use super::scan::{ bounded_name, parse_token, parse_vector2, parse_vector3, scan };

pub const MIN_CORNERS: usize = 3;
pub const MAX_CORNERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl Vertex {
	pub fn to_vector(&self) -> Vector3<f32> {
		Vector3::new(self.x, self.y, self.z)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexCoord {
	pub u: f32,
	pub v: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normal {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl Normal {
	pub fn to_vector(&self) -> Vector3<f32> {
		Vector3::new(self.x, self.y, self.z)
	}
}

/// One face corner, all indices 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Corner {
	pub vertex: usize,
	pub texcoord: Option<usize>,
	pub normal: Option<usize>,
}

impl Corner {
	/// Texcoord index with `-1` standing in for an absent one.
	pub fn texcoord_raw(&self) -> i64 {
		self.texcoord.map_or(-1, |index| index as i64)
	}

	/// Normal index with `-1` standing in for an absent one.
	pub fn normal_raw(&self) -> i64 {
		self.normal.map_or(-1, |index| index as i64)
	}
}

/// A polygon of 3 or 4 corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Face {
	corners: [Corner; MAX_CORNERS],
	count: usize,
}

impl Face {
	pub fn corners(&self) -> &[Corner] {
		&self.corners[..self.count]
	}

	pub fn len(&self) -> usize {
		self.count
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	fn push(&mut self, corner: Corner) {
		self.corners[self.count] = corner;
		self.count += 1;
	}
}

/// A named run of consecutive faces, declared by `g` or `o`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
	pub name: String,
	pub start_face: usize,
	pub face_count: usize,
	/// Last `usemtl` seen while this group was active.
	pub material: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WavefrontModel {
	vertices: Vec<Vertex>,
	texcoords: Vec<TexCoord>,
	normals: Vec<Normal>,
	faces: Vec<Face>,
	groups: Vec<Group>,
	mtllib: Option<String>,
}

impl WavefrontModel {
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	pub fn texcoords(&self) -> &[TexCoord] {
		&self.texcoords
	}

	pub fn normals(&self) -> &[Normal] {
		&self.normals
	}

	pub fn faces(&self) -> &[Face] {
		&self.faces
	}

	pub fn groups(&self) -> &[Group] {
		&self.groups
	}

	/// Material library filename exactly as declared by `mtllib`.
	pub fn mtllib(&self) -> Option<&str> {
		self.mtllib.as_deref()
	}

	/// Where the material library sits, taken relative to the OBJ file at
	/// `obj_path`. Nothing is opened.
	pub fn material_library_path<P: AsRef<Path>>(&self, obj_path: P) -> Option<PathBuf> {
		self.mtllib
			.as_ref()
			.map(|filename| obj_path.as_ref().with_file_name(filename))
	}

	pub fn group_faces(&self, group: &Group) -> &[Face] {
		let start = group.start_face.min(self.faces.len());
		let end = group.start_face.saturating_add(group.face_count).min(self.faces.len());
		&self.faces[start..end]
	}

	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
			&& self.texcoords.is_empty()
			&& self.normals.is_empty()
			&& self.faces.is_empty()
			&& self.groups.is_empty()
			&& self.mtllib.is_none()
	}

	/// Frees every owned sequence. Safe to call any number of times.
	pub fn release(&mut self) {
		*self = WavefrontModel::default();
	}

	/// Checks that every face corner points inside the vertex, texcoord and
	/// normal sequences.
	pub fn validate(&self) -> Result<(), ValidationError> {
		for (face_index, face) in self.faces.iter().enumerate() {
			for (corner_index, corner) in face.corners().iter().enumerate() {
				let checks = [
					(Attribute::Vertex, Some(corner.vertex), self.vertices.len()),
					(Attribute::TexCoord, corner.texcoord, self.texcoords.len()),
					(Attribute::Normal, corner.normal, self.normals.len()),
				];

				for (attribute, index, count) in checks {
					match index {
						Some(index) if index >= count => {
							return Err(ValidationError {
								face: face_index,
								corner: corner_index,
								attribute,
								index,
								count,
							});
						},
						_ => (),
					}
				}
			}
		}

		Ok(())
	}
}

/// Corner indices as written, before 1-based conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawCorner {
	vertex: i32,
	texcoord: Option<i32>,
	normal: Option<i32>,
}

/// `v`, `v/vt`, `v//vn` or `v/vt/vn`.
fn raw_corner(input: &str) -> IResult<&str, RawCorner> {
	let (input, vertex) = parse_i32(input)?;
	let (input, texcoord) = opt(preceded(char('/'), opt(parse_i32)))(input)?;
	let (input, normal) = match texcoord {
		Some(_) => opt(preceded(char('/'), opt(parse_i32)))(input)?,
		None => (input, None),
	};

	Ok((input, RawCorner {
		vertex,
		texcoord: texcoord.flatten(),
		normal: normal.flatten(),
	}))
}

#[derive(Debug, PartialEq)]
enum FileEntity<'a> {
	Vertex(Vertex),
	TexCoord(TexCoord),
	Normal(Normal),
	Face(&'a str),
	Group(&'a str),
	Material(&'a str),
	MatLib(&'a str),
	Ignore,
}

fn entity(line: &str) -> FileEntity<'_> {
	if let Some(rest) = line.strip_prefix("v ") {
		scan(parse_vector3, rest)
			.map_or(FileEntity::Ignore, |[x, y, z]| FileEntity::Vertex(Vertex { x, y, z }))
	} else if let Some(rest) = line.strip_prefix("vt ") {
		scan(parse_vector2, rest)
			.map_or(FileEntity::Ignore, |[u, v]| FileEntity::TexCoord(TexCoord { u, v }))
	} else if let Some(rest) = line.strip_prefix("vn ") {
		scan(parse_vector3, rest)
			.map_or(FileEntity::Ignore, |[x, y, z]| FileEntity::Normal(Normal { x, y, z }))
	} else if let Some(rest) = line.strip_prefix("f ") {
		FileEntity::Face(rest)
	} else if let Some(rest) = line.strip_prefix("g ").or_else(|| line.strip_prefix("o ")) {
		scan(parse_token, rest).map_or(FileEntity::Ignore, FileEntity::Group)
	} else if let Some(rest) = line.strip_prefix("usemtl") {
		scan(parse_token, rest).map_or(FileEntity::Ignore, FileEntity::Material)
	} else if let Some(rest) = line.strip_prefix("mtllib") {
		scan(parse_token, rest).map_or(FileEntity::Ignore, FileEntity::MatLib)
	} else {
		FileEntity::Ignore
	}
}

/// 1-based (or negative, end-relative) index to 0-based.
fn resolve(raw: i32, count: usize, relative: bool) -> Option<usize> {
	if raw > 0 {
		Some(raw as usize - 1)
	} else if raw < 0 && relative {
		count.checked_sub(raw.unsigned_abs() as usize)
	} else {
		None
	}
}

/// Like `resolve`, but a missing or zero index means "absent" rather than
/// unusable. The outer `None` marks an unusable index.
fn resolve_optional(raw: Option<i32>, count: usize, relative: bool) -> Option<Option<usize>> {
	match raw {
		None | Some(0) => Some(None),
		Some(raw) => resolve(raw, count, relative).map(Some),
	}
}

struct ModelBuilder<'c> {
	config: &'c ObjConfig,
	model: WavefrontModel,
	current_group: Option<usize>,
}

impl<'c> ModelBuilder<'c> {
	fn new(config: &'c ObjConfig) -> Result<Self, ObjError> {
		let model = WavefrontModel {
			vertices: growth::with_capacity(config.vertex_capacity)?,
			texcoords: growth::with_capacity(config.texcoord_capacity)?,
			normals: growth::with_capacity(config.normal_capacity)?,
			faces: growth::with_capacity(config.face_capacity)?,
			groups: growth::with_capacity(config.group_capacity)?,
			mtllib: None,
		};

		Ok(ModelBuilder {
			config,
			model,
			current_group: None,
		})
	}

	fn line(&mut self, number: usize, line: &str) -> Result<(), ObjError> {
		match entity(line) {
			FileEntity::Vertex(v) => growth::push(&mut self.model.vertices, v)?,
			FileEntity::TexCoord(t) => growth::push(&mut self.model.texcoords, t)?,
			FileEntity::Normal(n) => growth::push(&mut self.model.normals, n)?,
			FileEntity::Face(corners) => self.face(number, corners)?,
			FileEntity::Group(name) => {
				let group = Group {
					name: bounded_name(name),
					start_face: self.model.faces.len(),
					face_count: 0,
					material: None,
				};
				growth::push(&mut self.model.groups, group)?;
				self.current_group = Some(self.model.groups.len() - 1);
			},
			FileEntity::Material(name) => match self.current_group {
				Some(index) => self.model.groups[index].material = Some(name.to_owned()),
				None => debug!("line {}: usemtl {} outside any group", number, name),
			},
			FileEntity::MatLib(filename) => self.model.mtllib = Some(filename.to_owned()),
			FileEntity::Ignore => {
				if !line.trim().is_empty() && !line.starts_with('#') {
					debug!("line {}: ignored {:?}", number, line);
				}
			},
		}

		Ok(())
	}

	fn face(&mut self, number: usize, corners: &str) -> Result<(), ObjError> {
		let mut face = Face::default();

		for token in corners.split_whitespace().take(MAX_CORNERS) {
			match self.corner(token) {
				Some(corner) => face.push(corner),
				None => {
					warn!("line {}: unusable face corner {:?}, face skipped", number, token);
					return Ok(());
				},
			}
		}

		if face.len() < MIN_CORNERS {
			warn!("line {}: face with {} corners skipped", number, face.len());
			return Ok(());
		}

		growth::push(&mut self.model.faces, face)?;
		if let Some(index) = self.current_group {
			self.model.groups[index].face_count += 1;
		}

		Ok(())
	}

	fn corner(&self, token: &str) -> Option<Corner> {
		let (_, raw) = all_consuming(raw_corner)(token).ok()?;
		let relative = self.config.resolve_relative_indices;

		Some(Corner {
			vertex: resolve(raw.vertex, self.model.vertices.len(), relative)?,
			texcoord: resolve_optional(raw.texcoord, self.model.texcoords.len(), relative)?,
			normal: resolve_optional(raw.normal, self.model.normals.len(), relative)?,
		})
	}
}

/// Reads a whole geometry stream. Malformed lines are skipped; only I/O and
/// allocation failures abort, and then nothing built so far survives.
pub fn parse<R: BufRead>(reader: R, config: &ObjConfig) -> Result<WavefrontModel, ObjError> {
	let mut builder = ModelBuilder::new(config)?;
	let mut lines = LineReader::new(reader);

	while let Some((number, line)) = lines.next_line().map_err(|_| ObjError::NotFound)? {
		builder.line(number, &line)?;
	}

	let model = builder.model;
	info!(
		"parsed OBJ: {} vertices, {} texcoords, {} normals, {} faces, {} groups",
		model.vertices.len(),
		model.texcoords.len(),
		model.normals.len(),
		model.faces.len(),
		model.groups.len()
	);

	Ok(model)
}
