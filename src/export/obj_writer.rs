//! Writer für Wavefront-OBJ-Dateien.
//!
//! Einzige Stelle mit 1-basierter Index-Arithmetik.

use super::mesh_buffer::{Face, MeshBuffer};

/// Serialisiert einen Mesh-Puffer als OBJ-Text.
///
/// Pro Objekt: `o <name>`, danach dessen `v`-Zeilen, danach dessen `f`-Zeilen.
/// Indizes sind pufferweit und 1-basiert.
pub fn write_obj_string(buffer: &MeshBuffer) -> String {
    let mut output = String::with_capacity(buffer.vertices().len() * 32);
    for object in buffer.objects() {
        output.push_str(&format!("o {}\n", object.name));

        for v in &buffer.vertices()[object.vertices.start as usize..object.vertices.end as usize] {
            output.push_str(&format!(
                "v {} {} {}\n",
                format_float(v.x),
                format_float(v.y),
                format_float(v.z)
            ));
        }

        for face in &buffer.faces()[object.faces.clone()] {
            output.push_str(&format_face(face));
            output.push('\n');
        }
    }

    output
}

fn format_face(face: &Face) -> String {
    let indices: Vec<String> = face.indices().iter().map(|i| (i + 1).to_string()).collect();
    format!("f {}", indices.join(" "))
}

fn format_float(value: f32) -> String {
    format!("{:.4}", value)
}
