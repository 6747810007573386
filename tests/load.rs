use std::fs;
use std::path::{ Path, PathBuf };

use nalgebra::Vector3;
use tempfile::tempdir;

use wavefront_loader::wavefront::{
	self, load_mtl, load_obj, MtlConfig, MtlError, ObjConfig, ObjError,
};

fn asset(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
}

#[test]
fn cube_with_materials() {
	let path = asset("cube.obj");
	let obj = load_obj(&path).unwrap();

	assert_eq!(obj.vertices().len(), 8);
	assert_eq!(obj.texcoords().len(), 4);
	assert_eq!(obj.normals().len(), 6);
	assert_eq!(obj.faces().len(), 6);
	assert!(obj.faces().iter().all(|face| face.len() == 4));
	assert_eq!(obj.validate(), Ok(()));

	let groups = obj.groups();
	assert_eq!(groups.len(), 2);
	assert_eq!((groups[0].name.as_str(), groups[0].start_face, groups[0].face_count), ("Cube", 0, 3));
	assert_eq!(groups[0].material.as_deref(), Some("Material"));
	assert_eq!((groups[1].name.as_str(), groups[1].start_face, groups[1].face_count), ("bottom", 3, 3));

	let first = obj.faces()[0].corners()[1];
	assert_eq!((first.vertex, first.texcoord, first.normal), (4, Some(1), Some(0)));

	let mtl_path = obj.material_library_path(&path).unwrap();
	assert_eq!(mtl_path, asset("cube.mtl"));

	let materials = load_mtl(&mtl_path).unwrap();
	let material = materials.get("Material").unwrap();
	assert_eq!(material.diffuse, Vector3::new(0.8, 0.8, 0.8));
	assert_eq!(material.dissolve, 1.0);
	assert_eq!(material.illum, 2);
}

#[test]
fn missing_files() {
	let dir = tempdir().unwrap();
	let missing = dir.path().join("nope.obj");

	assert_eq!(load_obj(&missing), Err(ObjError::NotFound));
	assert_eq!(load_mtl(dir.path().join("nope.mtl")), Err(MtlError::NotFound));
	assert_eq!(ObjError::NotFound.to_string(), "OBJ file not found");
	assert_eq!(MtlError::NotFound.as_str(), "Material file not found");
}

#[test]
fn unusable_paths() {
	assert_eq!(load_obj(""), Err(ObjError::InvalidFormat));
	assert_eq!(load_mtl(""), Err(MtlError::InvalidFormat));
}

#[test]
fn broken_material_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("broken.mtl");
	fs::write(&path, "newmtl ok\nKd 1 1 1\nnewmtl bad\nKa 1 0\n").unwrap();

	assert_eq!(load_mtl(&path), Err(MtlError::InvalidFormat));
	assert_eq!(MtlError::InvalidFormat.to_string(), "Invalid material file format");
}

#[test]
fn large_files_on_disk() {
	let dir = tempdir().unwrap();

	let mut obj = String::from("mtllib big.mtl\n");
	for i in 0..1000 {
		obj.push_str(&format!("v {} 0 0\nvt 0 {}\nvn 0 0 {}\n", i, i, i));
	}
	for i in 1..=998 {
		obj.push_str(&format!("f {0}/{0}/{0} {1}/{1}/{1} {2}/{2}/{2}\n", i, i + 1, i + 2));
	}
	let obj_path = dir.path().join("big.obj");
	fs::write(&obj_path, obj).unwrap();

	let mut mtl = String::new();
	for i in 0..50 {
		mtl.push_str(&format!("newmtl m{}\nKd {} 0 0\n", i, i));
	}
	fs::write(dir.path().join("big.mtl"), mtl).unwrap();

	let model = wavefront::load_obj_with(&obj_path, &ObjConfig::default()).unwrap();
	assert_eq!(model.vertices().len(), 1000);
	assert_eq!(model.texcoords()[999].v, 999.0);
	assert_eq!(model.normals()[500].z, 500.0);
	assert_eq!(model.faces().len(), 998);
	assert_eq!(model.faces()[997].corners()[2].normal, Some(999));
	assert_eq!(model.validate(), Ok(()));

	let mtl_path = model.material_library_path(&obj_path).unwrap();
	let materials = wavefront::load_mtl_with(mtl_path, &MtlConfig::default()).unwrap();
	assert_eq!(materials.len(), 50);
	assert_eq!(materials[49].diffuse.x, 49.0);
}

#[test]
fn string_and_reader_entry_points_agree() {
	let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

	let from_string = wavefront::parse_obj_string(input).unwrap();
	let from_reader = wavefront::parse_obj(input.as_bytes()).unwrap();
	assert_eq!(from_string, from_reader);

	let materials = wavefront::parse_mtl_string("newmtl red\nKd 1 0 0\n").unwrap();
	assert_eq!(materials[0].name, "red");
}
