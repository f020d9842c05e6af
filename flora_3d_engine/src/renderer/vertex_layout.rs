/// Vertex layout description shared between meshes and pipelines.
///
/// The external renderer binds shader input locations against this
/// description, so attribute order, formats, and offsets are fixed
/// per vertex type.

/// Vertex attribute format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum VertexFormat {
    R32_SFLOAT,
    R32G32_SFLOAT,
    R32G32B32_SFLOAT,
    R32G32B32A32_SFLOAT,
    R32G32_UINT,
}

impl VertexFormat {
    /// Size of one attribute of this format in bytes
    pub fn size_bytes(&self) -> u32 {
        match self {
            VertexFormat::R32_SFLOAT => 4,
            VertexFormat::R32G32_SFLOAT | VertexFormat::R32G32_UINT => 8,
            VertexFormat::R32G32B32_SFLOAT => 12,
            VertexFormat::R32G32B32A32_SFLOAT => 16,
        }
    }
}

/// Per-vertex vs per-instance stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexInputRate {
    /// Attributes advance per vertex
    Vertex,
    /// Attributes advance per instance
    Instance,
}

/// A vertex buffer binding slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBinding {
    /// Binding slot index
    pub binding: u32,
    /// Stride between consecutive elements in bytes
    pub stride: u32,
    /// Stepping rate
    pub input_rate: VertexInputRate,
}

/// A single vertex attribute within a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Binding slot this attribute reads from
    pub binding: u32,
    /// Attribute format
    pub format: VertexFormat,
    /// Byte offset within the element
    pub offset: u32,
}

/// Complete vertex layout (bindings + attributes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Buffer binding slots
    pub bindings: Vec<VertexBinding>,
    /// Vertex attributes
    pub attributes: Vec<VertexAttribute>,
}
