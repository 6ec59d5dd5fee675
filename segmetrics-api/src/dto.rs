//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use segmetrics_core::MetricRecord;
use segmetrics_engine::display_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// URL prefix under which image files are served
pub const IMAGE_URL_PREFIX: &str = "/image-files/";

/// Page size used when the caller does not pick one
pub const DEFAULT_PER_PAGE: usize = 5;

/// One page of the comparison view
///
/// Field names follow the payload existing consumers already read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPage {
    /// Original image URLs in this window
    pub imagens_originais: Vec<String>,
    /// Ground-truth mask URLs in this window
    pub imagens_mascaras: Vec<String>,
    /// Segmentation URLs in this window
    pub imagens_segmentadas: Vec<String>,
    /// Metrics for the pairs in this window, `None` where a pair has no
    /// stored record
    pub metricas_comparacao: Vec<Option<MetricRecord>>,
    /// Whether a later page has content
    pub tem_mais: bool,
    /// Total originals across all pages
    pub total_originais: usize,
    /// Total segmentations across all pages
    pub total_segmentadas: usize,
    /// 1-based page number
    pub page: usize,
    /// Page size
    pub per_page: usize,
}

/// Inputs for a [`ComparisonPage`], in pairing order
#[derive(Debug)]
pub struct PageSource<'a, P: AsRef<Path>> {
    /// Original images
    pub originals: &'a [P],
    /// Ground-truth masks
    pub masks: &'a [P],
    /// Predicted segmentations
    pub segments: &'a [P],
    /// Stored metrics, matched to pairs by file name
    pub metrics: &'a [MetricRecord],
}

impl<P: AsRef<Path>> Clone for PageSource<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: AsRef<Path>> Copy for PageSource<'_, P> {}

impl ComparisonPage {
    /// Slice page `page` (1-based) of `per_page` entries out of `source`
    ///
    /// Every image list is cut with the same window so entries at the same
    /// position still line up. The store only keeps pairs that were scored,
    /// so metrics are looked up by mask and segmentation file name rather
    /// than by position.
    pub fn build<P: AsRef<Path>>(
        source: PageSource<'_, P>,
        page: usize,
        per_page: usize,
    ) -> Result<Self> {
        if page == 0 {
            return Err(ApiError::InvalidInput("page starts at 1".to_string()));
        }
        if per_page == 0 {
            return Err(ApiError::InvalidInput(
                "per_page must be greater than 0".to_string(),
            ));
        }

        let start = (page - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);
        let total = source
            .originals
            .len()
            .max(source.masks.len())
            .max(source.segments.len());

        Ok(Self {
            imagens_originais: window(source.originals, start, end)
                .iter()
                .map(|p| image_url(p.as_ref()))
                .collect(),
            imagens_mascaras: window(source.masks, start, end)
                .iter()
                .map(|p| image_url(p.as_ref()))
                .collect(),
            imagens_segmentadas: window(source.segments, start, end)
                .iter()
                .map(|p| image_url(p.as_ref()))
                .collect(),
            metricas_comparacao: window_metrics(&source, start, end),
            tem_mais: end < total,
            total_originais: source.originals.len(),
            total_segmentadas: source.segments.len(),
            page,
            per_page,
        })
    }
}

/// URL an image is served under
pub fn image_url(path: &Path) -> String {
    format!(
        "{}{}",
        IMAGE_URL_PREFIX,
        path.to_string_lossy().replace('\\', "/")
    )
}

fn window_metrics<P: AsRef<Path>>(
    source: &PageSource<'_, P>,
    start: usize,
    end: usize,
) -> Vec<Option<MetricRecord>> {
    let mut by_pair: HashMap<(String, String), &MetricRecord> = HashMap::new();
    for record in source.metrics {
        by_pair
            .entry((record.mask_name.clone(), record.segment_name.clone()))
            .or_insert(record);
    }

    window(source.masks, start, end)
        .iter()
        .zip(window(source.segments, start, end))
        .map(|(mask, segment)| {
            let key = (display_name(mask.as_ref()), display_name(segment.as_ref()));
            by_pair.get(&key).map(|record| (*record).clone())
        })
        .collect()
}

fn window<T>(items: &[T], start: usize, end: usize) -> &[T] {
    let start = start.min(items.len());
    let end = end.min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths(prefix: &str, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| PathBuf::from(format!("{prefix}/{i}.png")))
            .collect()
    }

    fn metrics(count: usize) -> Vec<MetricRecord> {
        (0..count)
            .map(|i| MetricRecord {
                mask_name: format!("{i}.png"),
                segment_name: format!("{i}.png"),
                similarity: 1.0,
                iou: 100.0,
                dice: 100.0,
                precision: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_first_page() {
        let originals = paths("imagens/original", 7);
        let masks = paths("imagens/mascara", 7);
        let segments = paths("imagens/segmentado", 6);
        let metrics = metrics(6);
        let source = PageSource {
            originals: &originals,
            masks: &masks,
            segments: &segments,
            metrics: &metrics,
        };

        let page = ComparisonPage::build(source, 1, 5).unwrap();
        assert_eq!(page.imagens_originais.len(), 5);
        assert_eq!(
            page.imagens_originais[0],
            "/image-files/imagens/original/0.png"
        );
        assert_eq!(page.metricas_comparacao.len(), 5);
        assert!(page.tem_mais);
        assert_eq!(page.total_originais, 7);
        assert_eq!(page.total_segmentadas, 6);
    }

    #[test]
    fn test_last_page_is_partial() {
        let originals = paths("o", 7);
        let masks = paths("m", 7);
        let segments = paths("s", 6);
        let metrics = metrics(6);
        let source = PageSource {
            originals: &originals,
            masks: &masks,
            segments: &segments,
            metrics: &metrics,
        };

        let page = ComparisonPage::build(source, 2, 5).unwrap();
        assert_eq!(page.imagens_originais.len(), 2);
        assert_eq!(page.imagens_segmentadas.len(), 1);
        assert_eq!(page.metricas_comparacao.len(), 1);
        assert_eq!(
            page.metricas_comparacao[0].as_ref().unwrap().mask_name,
            "5.png"
        );
        assert!(!page.tem_mais);
    }

    #[test]
    fn test_page_past_the_end() {
        let originals = paths("o", 2);
        let source = PageSource {
            originals: &originals,
            masks: &originals,
            segments: &originals,
            metrics: &[],
        };

        let page = ComparisonPage::build(source, 9, 5).unwrap();
        assert!(page.imagens_originais.is_empty());
        assert!(!page.tem_mais);
    }

    #[test]
    fn test_metrics_follow_file_names() {
        let originals = paths("o", 3);
        let masks = paths("m", 3);
        let segments = paths("s", 3);
        // pair 0 was skipped, so the store starts at 1.png
        let stored: Vec<_> = metrics(3).into_iter().skip(1).collect();
        let source = PageSource {
            originals: &originals,
            masks: &masks,
            segments: &segments,
            metrics: &stored,
        };

        let first = ComparisonPage::build(source, 1, 1).unwrap();
        assert_eq!(first.metricas_comparacao, vec![None]);

        let second = ComparisonPage::build(source, 2, 1).unwrap();
        assert_eq!(
            second.metricas_comparacao[0].as_ref().unwrap().mask_name,
            "1.png"
        );
        assert!(second.imagens_mascaras[0].ends_with("m/1.png"));
    }

    #[test]
    fn test_invalid_paging() {
        let empty: Vec<PathBuf> = Vec::new();
        let source = PageSource {
            originals: &empty,
            masks: &empty,
            segments: &empty,
            metrics: &[],
        };
        assert!(matches!(
            ComparisonPage::build(source, 0, 5),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            ComparisonPage::build(source, 1, 0),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serialized_keys() {
        let empty: Vec<PathBuf> = Vec::new();
        let source = PageSource {
            originals: &empty,
            masks: &empty,
            segments: &empty,
            metrics: &[],
        };
        let page = ComparisonPage::build(source, 1, 5).unwrap();
        let json = serde_json::to_value(&page).unwrap();

        for key in [
            "imagens_originais",
            "imagens_segmentadas",
            "metricas_comparacao",
            "tem_mais",
            "total_originais",
            "total_segmentadas",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
