//! Tests for the public API

use image::{GrayImage, Luma};
use segmetrics_api::{
    comparison_page, evaluate_paths, locate_image, ApiError, Config, DirectorySource, Evaluator,
    ImageDirectory, ImageKind, JsonFileStore, MemoryStore, ResultStore,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a 4x4 mask whose first `filled` pixels (row-major) are foreground
fn write_mask(path: &Path, filled: u32) {
    let image = GrayImage::from_fn(4, 4, |x, y| {
        if y * 4 + x < filled {
            Luma([255])
        } else {
            Luma([0])
        }
    });
    image.save(path).unwrap();
}

/// Standard tree: 3 originals, 3 masks, 2 segmentations
fn image_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for sub in ["original", "mascara", "segmentado"] {
        fs::create_dir_all(root.join(sub)).unwrap();
    }
    for (i, filled) in [(1, 8), (2, 4), (3, 16)] {
        write_mask(&root.join(format!("original/{i}.png")), 16);
        write_mask(&root.join(format!("mascara/{i}.png")), filled);
    }
    write_mask(&root.join("segmentado/1.png"), 8);
    write_mask(&root.join("segmentado/2.png"), 8);
    temp_dir
}

#[test]
fn test_evaluate_directory_pairs_by_position() {
    let temp_dir = image_tree();
    let evaluator = Evaluator::with_config(Config::sequential()).unwrap();

    let result = evaluator
        .evaluate_directory(&ImageDirectory::new(temp_dir.path()))
        .unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.metadata.unmatched_masks, 1);
    assert!(result.is_complete());

    let first = &result.records[0];
    assert_eq!(first.mask_name, "1.png");
    assert_eq!(first.iou, 100.0);
    assert_eq!(first.similarity, 1.0);

    // mask has 4 foreground pixels, segmentation 8 covering them
    let second = &result.records[1];
    assert_eq!(second.iou, 50.0);
    assert_eq!(second.dice, 66.67);
    assert_eq!(second.precision, 0.5);
    assert_eq!(second.similarity, 0.75);
}

#[test]
fn test_refresh_replaces_store() {
    let temp_dir = image_tree();
    let store_path = temp_dir.path().join("metricas.json");
    let store = JsonFileStore::new(&store_path);
    let source = ImageDirectory::new(temp_dir.path());
    let evaluator = Evaluator::new().unwrap();

    evaluator.refresh(&source, &store).unwrap();
    fs::remove_file(temp_dir.path().join("segmentado/2.png")).unwrap();
    let result = evaluator.refresh(&source, &store).unwrap();

    let stored = store.load().unwrap();
    assert_eq!(stored, result.records);
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_corrupt_file_is_skipped() {
    let temp_dir = image_tree();
    fs::write(temp_dir.path().join("segmentado/1.png"), b"not a png").unwrap();
    let store = MemoryStore::new();

    let result = Evaluator::new()
        .unwrap()
        .refresh(&ImageDirectory::new(temp_dir.path()), &store)
        .unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].mask_name, "2.png");
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].index, 0);
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_missing_root_is_a_batch_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = ImageDirectory::new(temp_dir.path().join("absent"));

    let err = Evaluator::new()
        .unwrap()
        .evaluate_directory(&source)
        .unwrap_err();
    assert!(matches!(err, ApiError::Batch(_)));
}

#[test]
fn test_comparison_page_uses_stored_metrics() {
    let temp_dir = image_tree();
    let source = ImageDirectory::new(temp_dir.path());
    let store = MemoryStore::new();
    let evaluator = Evaluator::new().unwrap();
    evaluator.refresh(&source, &store).unwrap();

    let page = evaluator.comparison_page(&source, &store, 1, 2).unwrap();
    assert_eq!(page.imagens_originais.len(), 2);
    assert_eq!(page.metricas_comparacao.len(), 2);
    assert!(page.metricas_comparacao.iter().all(Option::is_some));
    assert!(page.tem_mais);
    assert_eq!(page.total_originais, 3);
    assert_eq!(page.total_segmentadas, 2);
    assert!(page.imagens_mascaras[0].starts_with("/image-files/"));
    assert!(page.imagens_mascaras[0].ends_with("mascara/1.png"));

    let last = comparison_page(&source, &store, 2, 2).unwrap();
    assert_eq!(last.imagens_originais.len(), 1);
    assert!(last.imagens_segmentadas.is_empty());
    assert!(last.metricas_comparacao.is_empty());
    assert!(!last.tem_mais);
}

#[test]
fn test_comparison_page_before_any_refresh() {
    let temp_dir = image_tree();
    let source = ImageDirectory::new(temp_dir.path());
    let store = JsonFileStore::new(temp_dir.path().join("never-written.json"));

    let page = comparison_page(&source, &store, 1, 10).unwrap();
    assert_eq!(page.imagens_originais.len(), 3);
    assert_eq!(page.metricas_comparacao, vec![None, None]);
}

#[test]
fn test_comparison_page_after_skipped_first_pair() {
    let temp_dir = image_tree();
    write_mask(&temp_dir.path().join("segmentado/3.png"), 16);
    fs::write(temp_dir.path().join("segmentado/1.png"), b"not a png").unwrap();
    let source = ImageDirectory::new(temp_dir.path());
    let store = MemoryStore::new();

    let result = Evaluator::new().unwrap().refresh(&source, &store).unwrap();
    assert_eq!(result.skipped.len(), 1);

    let first = comparison_page(&source, &store, 1, 1).unwrap();
    assert!(first.imagens_mascaras[0].ends_with("mascara/1.png"));
    assert_eq!(first.metricas_comparacao, vec![None]);

    for page in 2..=3 {
        let view = comparison_page(&source, &store, page, 1).unwrap();
        let record = view.metricas_comparacao[0].as_ref().unwrap();
        let expected = format!("{page}.png");
        assert_eq!(record.mask_name, expected);
        assert!(view.imagens_mascaras[0].ends_with(&format!("mascara/{expected}")));
        assert!(view.imagens_segmentadas[0].ends_with(&format!("segmentado/{expected}")));
    }
}

#[test]
fn test_custom_subdirectories() {
    let temp_dir = image_tree();
    fs::rename(
        temp_dir.path().join("mascara"),
        temp_dir.path().join("ground_truth"),
    )
    .unwrap();
    let source = ImageDirectory::new(temp_dir.path()).with_subdir(ImageKind::Mask, "ground_truth");

    assert_eq!(source.list(ImageKind::Mask).unwrap().len(), 3);
    let result = Evaluator::new().unwrap().evaluate_directory(&source).unwrap();
    assert_eq!(result.records.len(), 2);
}

#[test]
fn test_convenience_function() {
    let temp_dir = image_tree();
    let root = temp_dir.path();
    let records = evaluate_paths(
        &[root.join("mascara/1.png")],
        &[root.join("segmentado/1.png")],
    )
    .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].dice, 100.0);
}

#[test]
fn test_locate_served_image() {
    let temp_dir = image_tree();
    let found = locate_image(temp_dir.path(), "/image-files/original/3.png").unwrap();
    assert!(found.is_file());

    let err = locate_image(temp_dir.path(), "/image-files/original/9.png").unwrap_err();
    assert!(err.is_not_found());
}
