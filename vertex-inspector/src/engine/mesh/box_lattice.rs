//! Segmented box geometry.
//!
//! Two views of the same parametric solid: a render mesh with per-face
//! vertices (each face an (n+1)² grid so normals stay hard), and the welded
//! surface lattice used to place one vertex marker per distinct position.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Enumerate the distinct surface grid points of a box of edge length `size`
/// subdivided `segments` times per edge.
///
/// Points are emitted in ascending `(i, j, k)` grid order, so the sequence is
/// deterministic for a given parameter pair. Interior points are skipped:
/// a point belongs to the surface when at least one grid index sits on the
/// boundary. The count is `6n² + 2`; `segments == 1` yields the 8 corners,
/// `segments == 0` yields an empty sequence.
pub fn surface_lattice(size: f32, segments: u32) -> Vec<Vec3> {
    if segments == 0 {
        return Vec::new();
    }

    let half = size * 0.5;
    let step = size / segments as f32;
    let mut points = Vec::with_capacity((6 * segments * segments + 2) as usize);

    for i in 0..=segments {
        for j in 0..=segments {
            for k in 0..=segments {
                let on_surface = i == 0
                    || i == segments
                    || j == 0
                    || j == segments
                    || k == 0
                    || k == segments;
                if !on_surface {
                    continue;
                }
                points.push(Vec3::new(
                    -half + i as f32 * step,
                    -half + j as f32 * step,
                    -half + k as f32 * step,
                ));
            }
        }
    }

    points
}

/// Build the render mesh for the segmented box: six face grids with hard
/// normals, triangle-list topology.
pub fn build_box_mesh(size: f32, segments: u32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    if segments > 0 {
        let h = size * 0.5;
        // Each face: origin corner, edge directions with u × v = outward normal.
        let faces = [
            (Vec3::new(h, -h, h), Vec3::NEG_Z, Vec3::Y, Vec3::X),
            (Vec3::new(-h, -h, -h), Vec3::Z, Vec3::Y, Vec3::NEG_X),
            (Vec3::new(-h, h, -h), Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::new(-h, -h, -h), Vec3::X, Vec3::Z, Vec3::NEG_Y),
            (Vec3::new(-h, -h, h), Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::new(-h, -h, -h), Vec3::Y, Vec3::X, Vec3::NEG_Z),
        ];

        for (origin, u_dir, v_dir, normal) in faces {
            add_face(
                &mut positions,
                &mut normals,
                &mut uvs,
                &mut indices,
                origin,
                u_dir * size,
                v_dir * size,
                normal,
                segments,
            );
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

fn add_face(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    origin: Vec3,
    u_edge: Vec3,
    v_edge: Vec3,
    normal: Vec3,
    segments: u32,
) {
    let base = positions.len() as u32;
    let rows = segments + 1;

    for i in 0..rows {
        let fu = i as f32 / segments as f32;
        for j in 0..rows {
            let fv = j as f32 / segments as f32;
            let p = origin + u_edge * fu + v_edge * fv;
            positions.push(p.to_array());
            normals.push(normal.to_array());
            uvs.push([fu, fv]);
        }
    }

    // u × v = normal, so (v00, v10, v11) / (v00, v11, v01) winds outward
    for i in 0..segments {
        for j in 0..segments {
            let v00 = base + i * rows + j;
            let v10 = base + (i + 1) * rows + j;
            let v01 = v00 + 1;
            let v11 = v10 + 1;
            indices.extend_from_slice(&[v00, v10, v11, v00, v11, v01]);
        }
    }
}
