use three_d::*;

use crate::log;
use crate::scene_graph::{Axis, MeshSpec, SceneGraph, SceneGraphNode, Shading, Shape};

/// Sky blue (0x87CEEB).
pub const SKY_COLOR: [f32; 3] = [0.53, 0.81, 0.92];

/// Fixed tree spots around the runway.
const TREE_POSITIONS: [[f32; 2]; 16] = [
    [30.0, -50.0],
    [-30.0, 50.0],
    [60.0, -150.0],
    [-60.0, 150.0],
    [90.0, -250.0],
    [-90.0, 250.0],
    [100.0, -100.0],
    [-100.0, 100.0],
    [120.0, 50.0],
    [-120.0, -50.0],
    [150.0, 200.0],
    [-150.0, -200.0],
    [130.0, -100.0],
    [-130.0, 100.0],
    [140.0, 150.0],
    [-140.0, -150.0],
];

fn lit(shape: Shape, color: [u8; 3]) -> MeshSpec {
    MeshSpec {
        shape,
        color,
        shading: Shading::Lit,
    }
}

fn unlit(shape: Shape, color: [u8; 3]) -> MeshSpec {
    MeshSpec {
        shape,
        color,
        shading: Shading::Unlit,
    }
}

/// The static airfield: sun, runway with center-line markings, grass and
/// trees. Everything the takeoff animation does not move.
pub fn airfield() -> SceneGraph {
    let mut root = SceneGraphNode::group("airfield", [0.0; 3]);

    root = root.with_child(SceneGraphNode::mesh(
        "sun",
        [-50.0, 50.0, 50.0],
        unlit(Shape::Sphere { radius: 10.0 }, [255, 238, 0]),
    ));

    let mut runway = SceneGraphNode::mesh(
        "runway",
        [0.0, -0.5, 0.0],
        lit(
            Shape::Cuboid {
                width: 50.0,
                height: 1.0,
                depth: 300.0,
            },
            [128, 128, 128],
        ),
    );
    // Center-line stripes every 20 units, positioned relative to the runway.
    let mut z = -150.0;
    while z < 150.0 {
        runway = runway.with_child(SceneGraphNode::mesh(
            "stripe",
            [0.0, 0.1, z],
            unlit(
                Shape::Plane {
                    width: 2.0,
                    depth: 10.0,
                },
                [255, 255, 255],
            ),
        ));
        z += 20.0;
    }
    root = root.with_child(runway);

    root = root.with_child(SceneGraphNode::mesh(
        "grass",
        [0.0, -0.5, 0.0],
        lit(
            Shape::Plane {
                width: 1000.0,
                depth: 1000.0,
            },
            [0, 255, 0],
        ),
    ));

    for (i, [x, z]) in TREE_POSITIONS.into_iter().enumerate() {
        root = root.with_child(
            SceneGraphNode::group(format!("tree{}", i), [x, 0.0, z])
                .with_child(SceneGraphNode::mesh(
                    "trunk",
                    [0.0, 2.5, 0.0],
                    lit(
                        Shape::Cylinder {
                            radius: 0.5,
                            length: 5.0,
                            axis: Axis::Y,
                        },
                        [139, 69, 19],
                    ),
                ))
                .with_child(SceneGraphNode::mesh(
                    "foliage",
                    [0.0, 7.0, 0.0],
                    lit(Shape::Sphere { radius: 4.0 }, [34, 139, 34]),
                )),
        );
    }

    SceneGraph::new(root)
}

/// The airplane as a group whose origin is the animated body position.
pub fn airplane() -> SceneGraph {
    SceneGraph::new(
        SceneGraphNode::group("airplane", [0.0; 3])
            .with_child(SceneGraphNode::mesh(
                "fuselage",
                [0.0, 2.0, -150.0],
                lit(
                    Shape::Cylinder {
                        radius: 1.5,
                        length: 10.0,
                        axis: Axis::X,
                    },
                    [0, 0, 255],
                ),
            ))
            .with_child(SceneGraphNode::mesh(
                "wings",
                [0.0, 2.0, -150.0],
                lit(
                    Shape::Cuboid {
                        width: 20.0,
                        height: 0.2,
                        depth: 4.0,
                    },
                    [255, 255, 0],
                ),
            ))
            .with_child(SceneGraphNode::mesh(
                "tail",
                [0.0, 5.0, -156.0],
                lit(
                    Shape::Cuboid {
                        width: 2.0,
                        height: 3.0,
                        depth: 0.2,
                    },
                    [255, 255, 0],
                ),
            )),
    )
}

fn cpu_mesh(shape: Shape) -> CpuMesh {
    match shape {
        Shape::Sphere { .. } => CpuMesh::sphere(32),
        Shape::Cuboid { .. } => CpuMesh::cube(),
        Shape::Cylinder { .. } => CpuMesh::cylinder(32),
        Shape::Plane { .. } => CpuMesh::square(),
    }
}

fn albedo(color: [u8; 3]) -> CpuMaterial {
    CpuMaterial {
        albedo: Srgba {
            r: color[0],
            g: color[1],
            b: color[2],
            a: 255,
        },
        ..Default::default()
    }
}

/// The airplane's renderable parts, retranslated every frame from the
/// animator's body position.
pub struct Airplane {
    parts: Vec<(Gm<Mesh, PhysicalMaterial>, Mat4)>,
}

impl Airplane {
    pub fn new(context: &Context) -> Self {
        let parts = airplane()
            .flatten()
            .into_iter()
            .map(|placed| {
                let base =
                    Mat4::from_translation(placed.position) * placed.spec.shape.transformation();
                let gm = Gm::new(
                    Mesh::new(context, &cpu_mesh(placed.spec.shape)),
                    PhysicalMaterial::new_opaque(context, &albedo(placed.spec.color)),
                );
                (gm, base)
            })
            .collect();

        let mut airplane = Self { parts };
        airplane.set_position(vec3(0.0, 0.0, 0.0));
        airplane
    }

    /// Moves the whole group; part offsets stay fixed relative to the body.
    pub fn set_position(&mut self, position: Vec3) {
        for (gm, base) in self.parts.iter_mut() {
            gm.set_transformation(Mat4::from_translation(position) * *base);
        }
    }

    fn objects(&self) -> impl Iterator<Item = &dyn Object> {
        self.parts.iter().map(|(gm, _)| gm as &dyn Object)
    }
}

pub struct Scene {
    lit: Vec<Gm<Mesh, PhysicalMaterial>>,
    unlit: Vec<Gm<Mesh, ColorMaterial>>,
    ambient: AmbientLight,
    directional: DirectionalLight,
    pub airplane: Airplane,
}

impl Scene {
    pub fn new(context: &Context) -> Self {
        let airfield = airfield();
        log!("Scene::new(): airfield: {}", airfield.to_json());

        let mut lit = Vec::new();
        let mut unlit = Vec::new();
        for placed in airfield.flatten() {
            let transformation =
                Mat4::from_translation(placed.position) * placed.spec.shape.transformation();
            let mesh = Mesh::new(context, &cpu_mesh(placed.spec.shape));

            match placed.spec.shading {
                Shading::Lit => {
                    let mut gm = Gm::new(
                        mesh,
                        PhysicalMaterial::new_opaque(context, &albedo(placed.spec.color)),
                    );
                    gm.set_transformation(transformation);
                    lit.push(gm);
                }
                Shading::Unlit => {
                    let mut gm = Gm::new(
                        mesh,
                        ColorMaterial {
                            color: Srgba {
                                r: placed.spec.color[0],
                                g: placed.spec.color[1],
                                b: placed.spec.color[2],
                                a: 255,
                            },
                            ..Default::default()
                        },
                    );
                    gm.set_transformation(transformation);
                    unlit.push(gm);
                }
            }
        }
        log!(
            "Scene::new(): {} lit and {} unlit static meshes.",
            lit.len(),
            unlit.len()
        );

        // The sun sits in the top left; its light falls across the field.
        let ambient = AmbientLight::new(context, 0.4, Srgba::WHITE);
        let directional = DirectionalLight::new(context, 1.0, Srgba::WHITE, &vec3(1.0, -1.0, -1.0));

        Self {
            lit,
            unlit,
            ambient,
            directional,
            airplane: Airplane::new(context),
        }
    }

    /// One render pass: clear to the sky color, draw everything.
    pub fn render(&self, frame_input: &FrameInput, camera: &Camera) {
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(
                SKY_COLOR[0],
                SKY_COLOR[1],
                SKY_COLOR[2],
                1.0,
                1.0,
            ))
            .render(
                camera,
                self.lit
                    .iter()
                    .map(|gm| gm as &dyn Object)
                    .chain(self.unlit.iter().map(|gm| gm as &dyn Object))
                    .chain(self.airplane.objects()),
                &[&self.ambient, &self.directional],
            );
    }
}
