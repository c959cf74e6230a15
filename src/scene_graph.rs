use serde::{Deserialize, Serialize};
use three_d::*;

/// Axis a cylinder lies along. The fuselage lies along x, tree trunks stand
/// along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Primitive geometry of a scene node, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Sphere { radius: f32 },
    Cuboid { width: f32, height: f32, depth: f32 },
    Cylinder { radius: f32, length: f32, axis: Axis },
    /// Horizontal, facing up.
    Plane { width: f32, depth: f32 },
}

impl Shape {
    /// Local transformation taking the unit primitive (`CpuMesh::sphere`,
    /// `::cube`, `::cylinder`, `::square`) to the described dimensions,
    /// centered on the node position.
    pub fn transformation(&self) -> Mat4 {
        match *self {
            Shape::Sphere { radius } => Mat4::from_scale(radius),
            Shape::Cuboid {
                width,
                height,
                depth,
            } => Mat4::from_nonuniform_scale(0.5 * width, 0.5 * height, 0.5 * depth),
            Shape::Cylinder {
                radius,
                length,
                axis,
            } => {
                // The unit cylinder runs along x from 0 to 1.
                let centered = Mat4::from_translation(vec3(-0.5 * length, 0.0, 0.0))
                    * Mat4::from_nonuniform_scale(length, radius, radius);
                match axis {
                    Axis::X => centered,
                    Axis::Y => Mat4::from_angle_z(degrees(90.0)) * centered,
                }
            }
            Shape::Plane { width, depth } => {
                // The unit square spans the xy plane; lay it flat.
                Mat4::from_angle_x(degrees(-90.0))
                    * Mat4::from_nonuniform_scale(0.5 * width, 0.5 * depth, 1.0)
            }
        }
    }
}

/// Whether a node reacts to the scene lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shading {
    Lit,
    Unlit,
}

/// Renderable payload of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    pub shape: Shape,
    pub color: [u8; 3],
    pub shading: Shading,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraphNode {
    pub name: String,
    /// Relative to the parent node.
    pub position: [f32; 3],
    pub mesh: Option<MeshSpec>,
    pub children: Vec<SceneGraphNode>,
}

impl SceneGraphNode {
    pub fn group(name: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
            mesh: None,
            children: Vec::new(),
        }
    }

    pub fn mesh(name: impl Into<String>, position: [f32; 3], spec: MeshSpec) -> Self {
        Self {
            mesh: Some(spec),
            ..Self::group(name, position)
        }
    }

    pub fn with_child(mut self, child: SceneGraphNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A mesh node with its parent offsets resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMesh {
    pub name: String,
    pub position: Vec3,
    pub spec: MeshSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraph {
    pub root: SceneGraphNode,
}

impl SceneGraph {
    pub fn new(root: SceneGraphNode) -> Self {
        Self { root }
    }

    /// Resolves parent-relative positions into world positions, depth first.
    pub fn flatten(&self) -> Vec<PlacedMesh> {
        let mut placed = Vec::new();
        collect(&self.root, vec3(0.0, 0.0, 0.0), &mut placed);
        placed
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("SceneGraph::to_json(): ERROR: serialization failed.")
    }
}

fn collect(node: &SceneGraphNode, origin: Vec3, placed: &mut Vec<PlacedMesh>) {
    let position = origin + vec3(node.position[0], node.position[1], node.position[2]);

    if let Some(spec) = node.mesh {
        placed.push(PlacedMesh {
            name: node.name.clone(),
            position,
            spec,
        });
    }

    for child in &node.children {
        collect(child, position, placed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_cube() -> MeshSpec {
        MeshSpec {
            shape: Shape::Cuboid {
                width: 2.0,
                height: 2.0,
                depth: 2.0,
            },
            color: [255, 255, 255],
            shading: Shading::Lit,
        }
    }

    #[test]
    fn flatten_accumulates_parent_offsets() {
        let graph = SceneGraph::new(
            SceneGraphNode::group("field", [0.0, 1.0, 0.0])
                .with_child(SceneGraphNode::mesh("marker", [2.0, 0.0, -3.0], white_cube())),
        );

        let placed = graph.flatten();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].name, "marker");
        assert_eq!(placed[0].position, vec3(2.0, 1.0, -3.0));
    }

    #[test]
    fn groups_are_not_placed() {
        let graph = SceneGraph::new(SceneGraphNode::group("empty", [0.0; 3]));
        assert!(graph.flatten().is_empty());
    }

    #[test]
    fn cuboid_scales_unit_cube_to_extents() {
        let m = Shape::Cuboid {
            width: 20.0,
            height: 0.2,
            depth: 4.0,
        }
        .transformation();

        let corner = m * vec4(1.0, 1.0, 1.0, 1.0);
        assert!((corner.x - 10.0).abs() < 1e-5);
        assert!((corner.y - 0.1).abs() < 1e-5);
        assert!((corner.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn cylinder_is_centered_on_its_axis() {
        let m = Shape::Cylinder {
            radius: 1.5,
            length: 10.0,
            axis: Axis::X,
        }
        .transformation();

        let tail = m * vec4(0.0, 0.0, 0.0, 1.0);
        let nose = m * vec4(1.0, 0.0, 0.0, 1.0);
        assert!((tail.x + 5.0).abs() < 1e-4);
        assert!((nose.x - 5.0).abs() < 1e-4);

        let upright = Shape::Cylinder {
            radius: 0.5,
            length: 5.0,
            axis: Axis::Y,
        }
        .transformation();

        let top = upright * vec4(1.0, 0.0, 0.0, 1.0);
        assert!((top.y - 2.5).abs() < 1e-4);
        assert!(top.x.abs() < 1e-4);
    }

    #[test]
    fn plane_lies_flat_facing_up() {
        let m = Shape::Plane {
            width: 2.0,
            depth: 10.0,
        }
        .transformation();

        let normal = m * vec4(0.0, 0.0, 1.0, 0.0);
        assert!((normal.y - 1.0).abs() < 1e-5);

        let edge = m * vec4(0.0, 1.0, 0.0, 1.0);
        assert!((edge.z + 5.0).abs() < 1e-4);
        assert!(edge.y.abs() < 1e-4);
    }
}
