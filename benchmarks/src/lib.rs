//! Scene builders shared by the benchmarks.

use std::sync::Arc;

use glam::{Quat, Vec3};
use hedra::physics::contact::BodyHandle;
use hedra::{ConvexMesh, MeshCatalog, PhysicsConfig, PhysicsWorld, RigidBody, ShapeKind};

pub const DT: f32 = 1.0 / 60.0;

pub fn catalog() -> MeshCatalog {
    MeshCatalog::primitives().expect("primitive meshes")
}

/// A unit body of the given shape.
pub fn body(catalog: &MeshCatalog, kind: ShapeKind, position: Vec3, rotation: Quat) -> RigidBody {
    let mesh = catalog.get(kind).clone();
    let inertia = kind.body_inertia(1.0, Vec3::ONE, &mesh);
    RigidBody::new(mesh, 1.0)
        .with_position(position)
        .with_rotation(rotation)
        .with_inertia(inertia)
}

/// Two shapes of `kind` overlapping face to face, edge to edge, or apart.
pub fn pair(catalog: &MeshCatalog, kind: ShapeKind, case: PairCase) -> (RigidBody, RigidBody) {
    let a = body(catalog, kind, Vec3::ZERO, Quat::IDENTITY);
    let b = match case {
        PairCase::Face => body(catalog, kind, Vec3::new(0.1, 0.9, 0.05), Quat::IDENTITY),
        PairCase::Edge => body(
            catalog,
            kind,
            Vec3::new(0.0, 1.3, 0.0),
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_4)
                * Quat::from_rotation_z(std::f32::consts::FRAC_PI_4),
        ),
        PairCase::Separated => body(catalog, kind, Vec3::new(3.0, 0.0, 0.0), Quat::IDENTITY),
    };
    (a, b)
}

#[derive(Debug, Clone, Copy)]
pub enum PairCase {
    Face,
    Edge,
    Separated,
}

fn ground(catalog: &MeshCatalog, world: &mut PhysicsWorld) -> BodyHandle {
    let mesh = catalog.get(ShapeKind::Cube).clone();
    world.add_body(
        RigidBody::fixed(mesh)
            .with_position(Vec3::new(0.0, -0.5, 0.0))
            .with_scale(Vec3::new(40.0, 1.0, 40.0)),
    )
}

/// A ground slab with `n` mixed shapes dropped on a grid.
pub fn setup_world(n: usize) -> PhysicsWorld {
    let catalog = catalog();
    let mut world = PhysicsWorld::new(PhysicsConfig::default());
    ground(&catalog, &mut world);

    let side = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let kind = ShapeKind::ALL[i % ShapeKind::ALL.len()];
        let x = (i % side) as f32 * 1.5 - side as f32 * 0.75;
        let z = (i / side) as f32 * 1.5 - side as f32 * 0.75;
        let y = 0.6 + (i % 3) as f32 * 0.2;
        world.add_body(body(
            &catalog,
            kind,
            Vec3::new(x, y, z),
            Quat::from_rotation_y(i as f32 * 0.3),
        ));
    }
    world
}

/// A column of `height` cubes resting on the ground, already in contact.
pub fn setup_stack(height: usize) -> PhysicsWorld {
    let catalog = catalog();
    let mut world = PhysicsWorld::new(PhysicsConfig::default());
    ground(&catalog, &mut world);
    for level in 0..height {
        world.add_body(body(
            &catalog,
            ShapeKind::Cube,
            Vec3::new(0.0, 0.49 + level as f32 * 0.99, 0.0),
            Quat::IDENTITY,
        ));
    }
    world
}

/// Half-edge mesh built from a shape's triangle soup.
pub fn build_mesh(kind: ShapeKind) -> Arc<ConvexMesh> {
    Arc::new(kind.triangle_mesh().to_convex_mesh().expect("valid primitive"))
}
