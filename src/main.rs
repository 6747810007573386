use std::env;
use std::path::Path;
use std::process;

use log::error;

use wavefront_loader::wavefront;

fn main() {
    env_logger::init();

    let pathname = env::args().nth(1).unwrap_or_else(|| String::from("./assets/cube.obj"));
    let path = Path::new(&pathname);
    let display = path.display();

    let obj = match wavefront::load_obj(path) {
        Err(why) => {
            error!("couldn't load {}: {}", display, why);
            process::exit(1);
        },
        Ok(obj) => obj,
    };

    println!(
        "{}: {} vertices, {} texcoords, {} normals, {} faces",
        display,
        obj.vertices().len(),
        obj.texcoords().len(),
        obj.normals().len(),
        obj.faces().len()
    );

    for group in obj.groups() {
        println!(
            "  group {} ({} faces, material {})",
            group.name,
            group.face_count,
            group.material.as_deref().unwrap_or("-")
        );
    }

    if let Err(err) = obj.validate() {
        println!("  warning: {}", err);
    }

    let materials = match obj.material_library_path(path) {
        Some(mtl_path) => match wavefront::load_mtl(&mtl_path) {
            Ok(materials) => Some(materials),
            Err(err) => {
                println!("Material parse error ({}): {}", mtl_path.display(), err);

                None
            },
        },
        None => None,
    };

    if let Some(materials) = materials {
        for material in &materials {
            println!("  material {}: diffuse {:?}, illum {}", material.name, material.diffuse.as_slice(), material.illum);
        }
    }
}
