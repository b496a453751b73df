//! Attribute kinds, the first-use attribute set, and layout descriptors.
//!
//! A build session does not fix its vertex layout up front. An attribute
//! joins the layout the first time the session touches it, and that
//! first-use order becomes the packing order:
//!
//! - A session that only ever sets positions packs 3 floats per vertex.
//! - A session that sets normals before positions packs normals first.
//!
//! [`AttributeSet`] records the first-use order during a session.
//! [`MeshLayout`] is the finalized descriptor: one binding per active
//! attribute with its float offset and width, which is what a rendering
//! backend walks to bind the interleaved buffer.

/// Semantic meaning of a per-vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAttribute {
    /// Vertex position (float3).
    Position,
    /// Vertex normal (float3).
    Normal,
    /// Vertex color, four 8-bit channels packed into one float.
    Color,
    /// Texture coordinates (float2).
    TexCoord,
    /// Grid-cell coordinate (float2).
    TilePosition,
}

impl GridAttribute {
    /// Get the number of floats this attribute occupies in a packed vertex.
    pub fn component_count(&self) -> u32 {
        match self {
            Self::Position | Self::Normal => 3,
            Self::Color => 1,
            Self::TexCoord | Self::TilePosition => 2,
        }
    }

    /// Get the shader input name this attribute binds to.
    pub fn shader_name(&self) -> &'static str {
        match self {
            Self::Position => "a_position",
            Self::Normal => "a_normal",
            Self::Color => "a_color",
            Self::TexCoord => "a_textCords",
            Self::TilePosition => "a_tile_position",
        }
    }
}

/// Insertion-ordered set of the attributes a session has used.
///
/// Membership marks an attribute as active; the insertion order is the
/// packing order. Marking an attribute twice is a no-op, so the layout is
/// stable however often the session touches it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    order: Vec<GridAttribute>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Mark an attribute as used. The first call for a kind fixes its
    /// place in the packing order.
    pub fn mark_used(&mut self, attribute: GridAttribute) {
        if !self.is_used(attribute) {
            self.order.push(attribute);
        }
    }

    /// Check if an attribute has been marked used.
    pub fn is_used(&self, attribute: GridAttribute) -> bool {
        self.order.contains(&attribute)
    }

    /// Get the floats per vertex across all active attributes.
    pub fn stride(&self) -> u32 {
        self.order.iter().map(|a| a.component_count()).sum()
    }

    /// Iterate the active attributes in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = GridAttribute> + '_ {
        self.order.iter().copied()
    }

    /// Get the number of active attributes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no attribute has been used yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove all attributes, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.order.clear();
    }
}

/// One attribute binding in a finalized layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    /// Semantic meaning of this binding.
    pub attribute: GridAttribute,
    /// Offset in floats from the start of a vertex.
    pub offset: u32,
    /// Width in floats.
    pub components: u32,
}

/// Ordered attribute layout of a packed vertex buffer.
///
/// Built from an [`AttributeSet`] at finalization by accumulating float
/// offsets in first-use order. A rendering backend walks
/// [`bindings`](Self::bindings) to bind each attribute at its offset
/// within the per-vertex [`stride`](Self::stride).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshLayout {
    bindings: Vec<AttributeBinding>,
    stride: u32,
}

impl MeshLayout {
    /// Build a layout from the set's first-use order.
    pub fn from_set(set: &AttributeSet) -> Self {
        let mut bindings = Vec::with_capacity(set.len());
        let mut offset = 0;
        for attribute in set.iter() {
            let components = attribute.component_count();
            bindings.push(AttributeBinding {
                attribute,
                offset,
                components,
            });
            offset += components;
        }
        Self {
            bindings,
            stride: offset,
        }
    }

    /// Get the bindings in packing order.
    pub fn bindings(&self) -> &[AttributeBinding] {
        &self.bindings
    }

    /// Get the floats per vertex.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Check if the layout carries an attribute.
    pub fn has_attribute(&self, attribute: GridAttribute) -> bool {
        self.binding(attribute).is_some()
    }

    /// Get the binding for an attribute kind.
    pub fn binding(&self, attribute: GridAttribute) -> Option<&AttributeBinding> {
        self.bindings.iter().find(|b| b.attribute == attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_counts() {
        assert_eq!(GridAttribute::Position.component_count(), 3);
        assert_eq!(GridAttribute::Normal.component_count(), 3);
        assert_eq!(GridAttribute::Color.component_count(), 1);
        assert_eq!(GridAttribute::TexCoord.component_count(), 2);
        assert_eq!(GridAttribute::TilePosition.component_count(), 2);
    }

    #[test]
    fn test_mark_used_is_idempotent() {
        let mut set = AttributeSet::new();
        set.mark_used(GridAttribute::Position);
        set.mark_used(GridAttribute::Color);
        set.mark_used(GridAttribute::Position);

        assert_eq!(set.len(), 2);
        assert_eq!(set.stride(), 4);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![GridAttribute::Position, GridAttribute::Color]);
    }

    #[test]
    fn test_first_use_order_fixes_offsets() {
        let mut set = AttributeSet::new();
        set.mark_used(GridAttribute::Normal);
        set.mark_used(GridAttribute::Position);
        set.mark_used(GridAttribute::TexCoord);

        let layout = MeshLayout::from_set(&set);
        assert_eq!(layout.stride(), 8);

        let normal = layout.binding(GridAttribute::Normal).unwrap();
        assert_eq!(normal.offset, 0);
        assert_eq!(normal.components, 3);

        let position = layout.binding(GridAttribute::Position).unwrap();
        assert_eq!(position.offset, 3);

        let tex = layout.binding(GridAttribute::TexCoord).unwrap();
        assert_eq!(tex.offset, 6);
        assert_eq!(tex.components, 2);
    }

    #[test]
    fn test_full_set_stride() {
        let mut set = AttributeSet::new();
        set.mark_used(GridAttribute::Position);
        set.mark_used(GridAttribute::Normal);
        set.mark_used(GridAttribute::Color);
        set.mark_used(GridAttribute::TexCoord);
        set.mark_used(GridAttribute::TilePosition);
        assert_eq!(set.stride(), 11);

        let layout = MeshLayout::from_set(&set);
        assert_eq!(layout.bindings().len(), 5);
        assert_eq!(layout.stride(), 11);
    }

    #[test]
    fn test_inactive_attribute_has_no_binding() {
        let mut set = AttributeSet::new();
        set.mark_used(GridAttribute::Position);

        let layout = MeshLayout::from_set(&set);
        assert!(layout.has_attribute(GridAttribute::Position));
        assert!(!layout.has_attribute(GridAttribute::Color));
        assert!(layout.binding(GridAttribute::Color).is_none());
    }

    #[test]
    fn test_empty_set() {
        let set = AttributeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.stride(), 0);

        let layout = MeshLayout::from_set(&set);
        assert_eq!(layout.stride(), 0);
        assert!(layout.bindings().is_empty());
    }

    #[test]
    fn test_clear_resets_order() {
        let mut set = AttributeSet::new();
        set.mark_used(GridAttribute::Color);
        set.mark_used(GridAttribute::Position);
        set.clear();

        assert!(set.is_empty());
        set.mark_used(GridAttribute::Position);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![GridAttribute::Position]);
    }

    #[test]
    fn test_shader_names() {
        assert_eq!(GridAttribute::Position.shader_name(), "a_position");
        assert_eq!(GridAttribute::TilePosition.shader_name(), "a_tile_position");
    }
}
