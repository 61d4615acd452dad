// tests/pipeline.rs
//
// Generator and renderer only meet through the block file, so these tests
// drive both ends through real files.

use assert_approx_eq::assert_approx_eq;
use blockmap::document::{load_blocks, save_blocks};
use blockmap::generator::{generate_to_file, GeneratorConfig};
use blockmap::render::{export_image, load_layout, CanvasLayout, RenderConfig};
use blockmap::verify::find_overlaps;
use blockmap::{Block, BlockError, OverlapPolicy};
use std::fs;

fn config_in(dir: &tempfile::TempDir, amount: usize, map_size: u32) -> GeneratorConfig {
    GeneratorConfig {
        amount,
        map_size,
        output_path: dir.path().join("sample.txt"),
        seed: Some(2024),
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_small_map_file_has_five_valid_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, 5, 100);
    generate_to_file(&config).unwrap();

    let text = fs::read_to_string(&config.output_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let fields: Vec<u32> = line.split(' ').map(|t| t.parse().unwrap()).collect();
        assert_eq!(fields.len(), 4);
        assert!(fields[0] < 100 && fields[1] < 100);
        assert!(fields[2] < 2 && fields[3] < 2);
    }

    let blocks = load_blocks(&config.output_path).unwrap();
    assert!(find_overlaps(&blocks, OverlapPolicy::Symmetric).is_empty());
}

#[test]
fn test_zero_amount_renders_empty_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, 0, 1000);
    generate_to_file(&config).unwrap();
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "");

    let render = RenderConfig::default();
    let layout = load_layout(&config.output_path, &render).unwrap();
    assert!(layout.is_empty());
    assert_eq!((layout.width, layout.height), (400, 400));

    let png = dir.path().join("empty.png");
    export_image(&layout, &render, &png).unwrap();
    assert!(png.exists());
}

#[test]
fn test_full_default_run_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, 800, 1000);
    let stats = generate_to_file(&config).unwrap();
    assert_eq!(stats.placed, 800);

    let blocks = load_blocks(&config.output_path).unwrap();
    assert_eq!(blocks.len(), 800);
    for (i, a) in blocks.iter().enumerate() {
        for b in &blocks[i + 1..] {
            assert!(!a.crosses(b));
            assert!(!b.crosses(a));
        }
    }

    let copy = dir.path().join("copy.txt");
    save_blocks(&copy, &blocks).unwrap();
    assert_eq!(load_blocks(&copy).unwrap(), blocks);
    assert_eq!(
        fs::read_to_string(&copy).unwrap(),
        fs::read_to_string(&config.output_path).unwrap()
    );
}

#[test]
fn test_corner_policy_accepts_contained_earlier_block() {
    // Under the corner test a later block may swallow an earlier one, which an
    // order-independent audit then flags.
    let earlier = Block::new(40, 40, 5, 5);
    let later = Block::new(0, 0, 100, 100);
    assert!(!OverlapPolicy::Corner.rejects(&later, &earlier));
    assert!(OverlapPolicy::Symmetric.rejects(&later, &earlier));
    assert_eq!(
        find_overlaps(&[earlier, later], OverlapPolicy::Corner),
        vec![(0, 1)]
    );
}

#[test]
fn test_render_scenarios_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let render = RenderConfig::default();

    let small = dir.path().join("small.txt");
    fs::write(&small, "10 20 5 5\n30 40 6 6\n").unwrap();
    let layout = load_layout(&small, &render).unwrap();
    assert_approx_eq!(layout.ratio, 1.0);
    assert_eq!(layout.max_y, 46);
    assert_approx_eq!(layout.rects[0].x1, 15.0);

    let large = dir.path().join("large.txt");
    fs::write(&large, "1500 100 500 20\n").unwrap();
    let layout: CanvasLayout = load_layout(&large, &render).unwrap();
    assert_eq!(layout.max_x, 2000);
    let ratio = 2000.0 / 1500.0;
    assert_approx_eq!(layout.ratio, ratio);
    assert_approx_eq!(layout.rects[0].x0, 1500.0 / ratio);
    assert_approx_eq!(layout.rects[0].y0, 100.0 / ratio);
    assert_approx_eq!(layout.rects[0].y1, 120.0 / ratio);
}

#[test]
fn test_render_errors() {
    let dir = tempfile::tempdir().unwrap();
    let render = RenderConfig::default();

    let missing = load_layout(&dir.path().join("nope.txt"), &render).unwrap_err();
    assert!(matches!(missing, BlockError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));

    let bad = dir.path().join("bad.txt");
    fs::write(&bad, "1 2 3 4\n1 2 3\n").unwrap();
    assert!(matches!(
        load_layout(&bad, &render),
        Err(BlockError::Parse { line: 2, .. })
    ));
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        amount: 1,
        output_path: dir.path().join("missing_dir").join("sample.txt"),
        seed: Some(1),
        ..GeneratorConfig::default()
    };
    assert!(matches!(generate_to_file(&config), Err(BlockError::Io(_))));
}
