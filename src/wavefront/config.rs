/// Tunables for the geometry parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjConfig {
	pub vertex_capacity: usize,
	pub texcoord_capacity: usize,
	pub normal_capacity: usize,
	pub face_capacity: usize,
	pub group_capacity: usize,
	/// Resolve negative face indices against the elements read so far.
	pub resolve_relative_indices: bool,
}

impl Default for ObjConfig {
	fn default() -> Self {
		ObjConfig {
			vertex_capacity: 128,
			texcoord_capacity: 128,
			normal_capacity: 128,
			face_capacity: 128,
			group_capacity: 16,
			resolve_relative_indices: true,
		}
	}
}

/// Tunables for the material library parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtlConfig {
	pub material_capacity: usize,
}

impl Default for MtlConfig {
	fn default() -> Self {
		MtlConfig { material_capacity: 10 }
	}
}
