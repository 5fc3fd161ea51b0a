//! Integration tests for the placeholder GLB.
//!
//! Every file is re-read both with the container parser and with the
//! `gltf` crate, so offsets, lengths and the scene description are checked
//! against an independent glTF implementation.

use glb_builder::{GLB_MAGIC, parse_glb};
use placeholder_glb::{CubeParams, VertexLayout, encode_cube, generate_placeholder_glb};
use tempfile::tempdir;

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

#[test]
fn test_header_fields() {
    let glb = generate_placeholder_glb();

    assert_eq!(read_u32(&glb, 0), GLB_MAGIC);
    assert_eq!(read_u32(&glb, 0), 0x46546C67);
    assert_eq!(&glb[0..4], b"glTF");
    assert_eq!(read_u32(&glb, 4), 2);
    assert_eq!(read_u32(&glb, 8) as usize, glb.len());
    assert_eq!(read_u32(&glb, 16), 0x4E4F534A);
}

#[test]
fn test_total_length_matches_chunk_arithmetic() {
    let glb = generate_placeholder_glb();
    let padded_json = read_u32(&glb, 12) as usize;
    let bin_len = read_u32(&glb, 20 + padded_json) as usize;

    assert_eq!(padded_json % 4, 0);
    assert_eq!(read_u32(&glb, 24 + padded_json), 0x004E4942);
    assert_eq!(bin_len, 24 * 3 * 4 + 36 * 4);
    assert_eq!(bin_len, 432);
    assert_eq!(glb.len(), 12 + 8 + padded_json + 8 + 432);
}

#[test]
fn test_json_chunk_matches_binary_layout() {
    let glb = generate_placeholder_glb();
    let chunks = parse_glb(&glb).unwrap();
    let json = chunks.json_value().unwrap();
    let bin = chunks.bin.expect("BIN chunk");

    assert_eq!(json["asset"]["version"], "2.0");
    assert_eq!(json["scene"], 0);
    assert_eq!(json["scenes"][0]["nodes"][0], 0);
    assert_eq!(json["nodes"][0]["mesh"], 0);

    let primitive = &json["meshes"][0]["primitives"][0];
    assert_eq!(primitive["attributes"]["POSITION"], 0);
    assert_eq!(primitive["indices"], 1);
    assert_eq!(primitive["mode"], 4);

    let positions = &json["accessors"][0];
    assert_eq!(positions["bufferView"], 0);
    assert_eq!(positions["componentType"], 5126);
    assert_eq!(positions["count"], 24);
    assert_eq!(positions["type"], "VEC3");
    assert_eq!(positions["min"], serde_json::json!([0.0, 0.0, 0.0]));
    assert_eq!(positions["max"], serde_json::json!([100.0, 100.0, 100.0]));

    let indices = &json["accessors"][1];
    assert_eq!(indices["bufferView"], 1);
    assert_eq!(indices["componentType"], 5125);
    assert_eq!(indices["count"], 36);
    assert_eq!(indices["type"], "SCALAR");

    let views = json["bufferViews"].as_array().unwrap();
    assert_eq!(views[0]["buffer"], 0);
    assert_eq!(views[0]["byteOffset"], 0);
    assert_eq!(views[0]["byteLength"], 288);
    assert_eq!(views[1]["byteOffset"], 288);
    assert_eq!(views[1]["byteLength"], 144);

    assert_eq!(json["buffers"][0]["byteLength"], bin.len() as u64);

    // Each accessor fits inside its view, sized from its own declaration
    for accessor in json["accessors"].as_array().unwrap() {
        let component_size = match accessor["componentType"].as_u64().unwrap() {
            5120 | 5121 => 1,
            5122 | 5123 => 2,
            5125 | 5126 => 4,
            other => panic!("unexpected componentType {other}"),
        };
        let components = match accessor["type"].as_str().unwrap() {
            "SCALAR" => 1,
            "VEC2" => 2,
            "VEC3" => 3,
            "VEC4" | "MAT2" => 4,
            "MAT3" => 9,
            "MAT4" => 16,
            other => panic!("unexpected type {other}"),
        };
        let required = accessor["count"].as_u64().unwrap() * component_size * components;
        let view = &views[accessor["bufferView"].as_u64().unwrap() as usize];
        assert!(
            required <= view["byteLength"].as_u64().unwrap(),
            "accessor needs {required} bytes, view holds {}",
            view["byteLength"]
        );
    }
}

#[test]
fn test_indices_reference_existing_vertices() {
    let glb = generate_placeholder_glb();
    let chunks = parse_glb(&glb).unwrap();
    let bin = chunks.bin.unwrap();

    let indices: Vec<u32> = bin[288..432]
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes(b.try_into().unwrap()))
        .collect();
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| i < 24));
}

#[test]
fn test_successive_calls_are_identical() {
    assert_eq!(generate_placeholder_glb(), generate_placeholder_glb());
}

#[test]
fn test_gltf_crate_reads_placeholder() {
    let glb = generate_placeholder_glb();
    let gltf = gltf::Gltf::from_slice(&glb).expect("Failed to parse GLB");

    assert_eq!(gltf.scenes().count(), 1);
    assert_eq!(gltf.nodes().count(), 1);
    let mesh = gltf.meshes().next().expect("mesh");
    let primitive = mesh.primitives().next().expect("primitive");
    assert_eq!(primitive.mode(), gltf::mesh::Mode::Triangles);

    let positions = primitive
        .get(&gltf::Semantic::Positions)
        .expect("Missing POSITION");
    assert_eq!(positions.count(), 24);
    assert_eq!(positions.data_type(), gltf::accessor::DataType::F32);
    assert_eq!(positions.dimensions(), gltf::accessor::Dimensions::Vec3);

    let indices = primitive.indices().expect("Missing indices");
    assert_eq!(indices.count(), 36);
    assert_eq!(indices.data_type(), gltf::accessor::DataType::U32);
}

#[test]
fn test_import_from_disk_reads_geometry() {
    let params = CubeParams {
        size: 2.0,
        origin: [-1.0, -1.0, -1.0],
        layout: VertexLayout::Shared,
    };
    let glb = encode_cube(&params).unwrap();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("placeholder.glb");
    std::fs::write(&path, &glb).expect("Failed to write GLB");

    let (document, buffers, _) = gltf::import(&path).expect("Failed to import GLB");
    let mesh = document.meshes().next().unwrap();
    let primitive = mesh.primitives().next().unwrap();
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<[f32; 3]> = reader.read_positions().unwrap().collect();
    assert_eq!(positions.len(), 8);
    assert!(positions.iter().flatten().all(|&c| c == -1.0 || c == 1.0));

    let indices: Vec<u32> = reader.read_indices().unwrap().into_u32().collect();
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| i < 8));

    let bounds = primitive.bounding_box();
    assert_eq!(bounds.min, [-1.0; 3]);
    assert_eq!(bounds.max, [1.0; 3]);
}
