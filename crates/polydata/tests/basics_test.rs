//! Basic integration tests for polydata-rs.

use polydata_rs::*;

fn unit_square() -> Vec<[f64; 3]> {
    vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]
}

#[test]
fn test_quad_scenario() {
    init_logging();
    let faces = [[0i64, 1, 2, 3]];
    let mesh = build_poly_data(&unit_square(), Some(&faces[..]), None, 0).unwrap();

    assert_eq!(mesh.num_points(), 4);
    assert_eq!(mesh.num_polys(), 4);
    assert_eq!(
        mesh.faces(),
        vec![vec![0, 1, 2], vec![0, 1, 3], vec![1, 2, 3], vec![2, 3, 0]]
    );
    assert_eq!(mesh.num_verts(), 0);
    assert_eq!(mesh.num_lines(), 0);
}

#[test]
fn test_2d_points_become_vertices() {
    let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
    let mesh = build_poly_data::<_, [i64; 3]>(&points, None, None, 0).unwrap();

    assert_eq!(
        mesh.points(),
        &[
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0)
        ]
    );
    assert_eq!(mesh.num_verts(), 3);
    for (i, cell) in mesh.verts().iter().enumerate() {
        assert_eq!(cell, vec![i]);
    }
}

#[test]
fn test_line_sequence_skips_leading_element() {
    let points: Vec<[f64; 3]> = (0..5).map(|i| [f64::from(i), 0.0, 0.0]).collect();
    let lines = [5i64, 0, 1, 2, 3];
    let mesh = build_poly_data::<_, [i64; 3]>(&points, None, Some(&lines[..]), 0).unwrap();

    let segments: Vec<Vec<usize>> = mesh.lines().iter().collect();
    assert_eq!(segments, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
    assert_eq!(mesh.num_verts(), 5);
}

#[test]
fn test_mixed_face_sizes() {
    let points: Vec<[f64; 3]> = (0..6).map(|i| [f64::from(i), f64::from(i % 2), 0.0]).collect();
    let faces = vec![vec![0i64, 1, 2], vec![0, 1, 2, 3], vec![0, 1, 2, 3, 4, 5]];
    let mesh = PolyMeshBuilder::new().build(&points, &faces).unwrap();

    assert_eq!(mesh.num_polys(), 1 + 4 + 1);
    assert_eq!(mesh.polys().cell(5), Some(vec![0, 1, 2, 3, 4, 5]));
}

#[test]
fn test_bulk_table_keeps_rows() {
    let points = unit_square();
    let faces = [[0i64, 1, 2], [0, 2, 3]];
    assert_eq!(
        select_strategy(&Options::default(), 0, &faces),
        StrategyKind::Bulk
    );
    let mesh = PolyMeshBuilder::new().build(&points, &faces).unwrap();
    assert_eq!(mesh.faces(), vec![vec![0, 1, 2], vec![0, 2, 3]]);
    assert!((mesh.area() - 1.0).abs() < 1e-12);
}

#[test]
fn test_one_based_obj_style_faces() {
    let mesh = PolyMeshBuilder::new()
        .index_offset(1)
        .build(&unit_square(), &[[1i64, 2, 3], [1, 3, 4]])
        .unwrap();
    assert_eq!(mesh.faces(), vec![vec![0, 1, 2], vec![0, 2, 3]]);
}

#[test]
fn test_errors_name_the_offending_row() {
    let err = build_poly_data(&unit_square(), Some(&[[0i64, 1, 2], [2, 3, 4]][..]), None, 0)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "face 1 references index 4, but the mesh has 4 points"
    );

    let err = build_poly_data::<_, [i64; 3]>(&unit_square(), None, Some(&[0, 1, 9][..]), 0)
        .unwrap_err();
    assert!(matches!(
        err,
        PolydataError::IndexOutOfRange {
            kind: CellKind::Line,
            row: 0,
            index: 9,
            point_count: 4
        }
    ));

    let err = build_poly_data::<_, [i64; 3]>(&[vec![1.0, 2.0, 3.0, 4.0]], None, None, 0)
        .unwrap_err();
    assert!(matches!(err, PolydataError::InvalidDimension { point: 0, components: 4 }));
}

#[test]
fn test_empty_points_give_empty_mesh() {
    let points: Vec<[f64; 3]> = Vec::new();
    let faces: Vec<[i64; 3]> = Vec::new();
    let mesh = build_poly_data(&points, Some(&faces[..]), None, 0).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.num_cells(), 0);
}

#[test]
fn test_caller_input_untouched() {
    let points = unit_square();
    let faces = vec![vec![1i64, 2, 3, 4], vec![2, 3, 4]];
    let snapshot = (points.clone(), faces.clone());
    PolyMeshBuilder::new()
        .index_offset(1)
        .build(&points, &faces)
        .unwrap();
    assert_eq!((points, faces), snapshot);
}

#[test]
fn test_options_from_json() {
    let options = Options::from_json_str(r#"{ "fast_path": false, "index_width": "Narrow" }"#)
        .unwrap();
    let faces = [[0i64, 1, 2], [0, 2, 3]];
    assert_eq!(select_strategy(&options, 0, &faces), StrategyKind::Incremental);

    let mesh = PolyMeshBuilder::with_options(options)
        .build(&unit_square(), &faces)
        .unwrap();
    assert_eq!(mesh.polys().width(), IndexWidth::Narrow);
    assert_eq!(mesh.faces(), vec![vec![0, 1, 2], vec![0, 2, 3]]);
}

#[test]
fn test_build_with_options_file() {
    let path = std::env::temp_dir().join(format!("polydata-options-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "index_width": "Wide" }"#).unwrap();
    let mesh = build_with_options_file(&path, &unit_square(), Some(&[[0i64, 1, 2]][..])).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(mesh.polys().width(), IndexWidth::Wide);

    let missing = std::env::temp_dir().join("polydata-options-does-not-exist.json");
    let err = build_with_options_file::<_, [i64; 3]>(&missing, &unit_square(), None).unwrap_err();
    assert!(matches!(err, PolydataError::IoError(_)));
}

#[test]
fn test_progress_observer_sees_long_builds() {
    let points = unit_square();
    let faces: Vec<[i64; 3]> = (0..30).map(|_| [1, 2, 3]).collect();
    let mut last = (0, 0);
    let mut calls = 0;
    let mut observer = |done: usize, total: usize| {
        assert!(done >= last.0);
        last = (done, total);
        calls += 1;
    };
    let options = Options {
        progress_stride: 7,
        ..Options::default().with_progress_threshold(20)
    };
    PolyMeshBuilder::with_options(options)
        .index_offset(1)
        .progress(&mut observer)
        .build(&points, &faces)
        .unwrap();
    assert_eq!(last, (30, 30));
    assert_eq!(calls, 5);
}

#[test]
fn test_summary_and_trimesh_bridge() {
    let mesh = PolyMeshBuilder::new()
        .build(&unit_square(), &[[0i64, 1, 2], [0, 2, 3]])
        .unwrap();
    let text = mesh.to_string();
    assert!(text.contains("polygons: 2"));
    assert!(text.contains("area: 1.00000"));

    let tri = TriMesh::from_poly_data(&mesh);
    assert_eq!(tri.faces, vec![[0, 1, 2], [0, 2, 3]]);
    let json = serde_json::to_string(&tri).unwrap();
    let back: TriMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_poly_data(&Options::default()).unwrap(), mesh);
}

#[test]
fn test_camera_for_mesh() {
    let mesh = PolyMeshBuilder::new()
        .build(&unit_square(), &[[0i64, 1, 2], [0, 2, 3]])
        .unwrap();
    let center = mesh.center_of_mass();
    let pose = CameraPose::oriented(center, DVec3::new(0.0, -1.0, 0.0), DVec3::Z, 0.001);
    assert_eq!(pose.focal_point, center);
    assert!((pose.distance() - 1.0).abs() < 1e-9);
    assert_eq!(pose.to_k3d()[3..6].to_vec(), center.to_array().to_vec());
}
