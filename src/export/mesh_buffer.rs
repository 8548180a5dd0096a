//! Akkumulierende Mesh-Puffer mit benannten Objekten.
//!
//! Ein [`MeshPart`] ist lokal indiziert (0-basiert). Beim Anhängen an einen
//! [`MeshBuffer`] werden alle Indizes um die bisherige Vertex-Anzahl des
//! Puffers verschoben. Die Indexräume zweier Puffer sind unabhängig.

use std::ops::Range;

use glam::Vec3;

/// Fläche mit 0-basierten Vertex-Indizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Dreieck
    Tri([u32; 3]),
    /// Viereck
    Quad([u32; 4]),
}

impl Face {
    /// Alle Indizes der Fläche
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Tri(i) => i,
            Face::Quad(i) => i,
        }
    }

    /// Fläche mit um `offset` verschobenen Indizes
    pub fn offset(self, offset: u32) -> Self {
        match self {
            Face::Tri(i) => Face::Tri(i.map(|v| v + offset)),
            Face::Quad(i) => Face::Quad(i.map(|v| v + offset)),
        }
    }
}

/// Lokal indiziertes Mesh-Teilstück (ein Band oder ein Ankersatz)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshPart {
    /// Vertices (x, y, z) in Ausgabereihenfolge
    pub vertices: Vec<Vec3>,
    /// Flächen mit Indizes relativ zu `vertices`
    pub faces: Vec<Face>,
}

impl MeshPart {
    /// Ist das Teilstück leer?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Benanntes Objekt innerhalb eines Puffers
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    /// Objektname (`o <name>`)
    pub name: String,
    /// Vertex-Bereich im Puffer
    pub vertices: Range<u32>,
    /// Flächen-Bereich im Puffer
    pub faces: Range<usize>,
}

/// Ein Ausgabe-Stream: alle Vertices, Flächen und Objekte einer Datei.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    objects: Vec<MeshObject>,
}

impl MeshBuffer {
    /// Erstellt einen leeren Puffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Teilstück als benanntes Objekt an.
    ///
    /// Gibt den belegten Vertex-Bereich zurück. Aufeinanderfolgende Aufrufe
    /// liefern lückenlose, überlappungsfreie Bereiche.
    pub fn append(&mut self, name: impl Into<String>, part: &MeshPart) -> Range<u32> {
        let start = self.vertex_count();
        let face_start = self.faces.len();

        self.vertices.extend_from_slice(&part.vertices);
        self.faces
            .extend(part.faces.iter().map(|face| face.offset(start)));

        let end = self.vertex_count();
        self.objects.push(MeshObject {
            name: name.into(),
            vertices: start..end,
            faces: face_start..self.faces.len(),
        });
        start..end
    }

    /// Hängt alle Objekte eines anderen Puffers an (Indizes werden verschoben).
    pub fn extend_from(&mut self, other: &MeshBuffer) {
        let offset = self.vertex_count();
        let face_offset = self.faces.len();

        self.vertices.extend_from_slice(&other.vertices);
        self.faces
            .extend(other.faces.iter().map(|face| face.offset(offset)));
        self.objects
            .extend(other.objects.iter().map(|object| MeshObject {
                name: object.name.clone(),
                vertices: object.vertices.start + offset..object.vertices.end + offset,
                faces: object.faces.start + face_offset..object.faces.end + face_offset,
            }));
    }

    /// Anzahl Vertices
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Anzahl Flächen
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Ist der Puffer leer?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Alle Vertices
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Alle Flächen (Puffer-Indizes, 0-basiert)
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Alle Objekte in Anhänge-Reihenfolge
    pub fn objects(&self) -> &[MeshObject] {
        &self.objects
    }
}
