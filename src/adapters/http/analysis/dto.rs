//! DTOs for analysis HTTP endpoints.
//!
//! Percentages are rounded to two decimals here; the domain keeps full precision.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::classification::{
    AbcClass, AnalysisRequest, AnalysisResult, AnalysisSummary, ClassDistribution, ItemDetail,
    MatrixCell, MonthlyFigure, TopItem, XyzClass,
};
use crate::domain::foundation::{round_to_hundredths, ConfigId};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/analysis/run.
#[derive(Debug, Clone, Deserialize)]
pub struct RunAnalysisRequest {
    pub analysis_name: String,
    #[serde(default)]
    pub config_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub warehouse_zones: Vec<String>,
    #[serde(default)]
    pub item_codes: Vec<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl From<RunAnalysisRequest> for AnalysisRequest {
    fn from(req: RunAnalysisRequest) -> Self {
        AnalysisRequest {
            analysis_name: req.analysis_name,
            config_id: req.config_id.map(ConfigId::new),
            start_date: req.start_date,
            end_date: req.end_date,
            warehouse_zones: req.warehouse_zones,
            item_codes: req.item_codes,
            created_by: req.created_by,
        }
    }
}

/// Query parameters for GET /api/analysis/:id/top-items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopItemsParams {
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResultResponse {
    pub result_id: i64,
    pub analysis_name: String,
    pub analysis_date: String,
    pub config_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: Option<String>,
    pub total_items: usize,
    pub a_items: usize,
    pub b_items: usize,
    pub c_items: usize,
    pub x_items: usize,
    pub y_items: usize,
    pub z_items: usize,
    pub details: Vec<ItemDetailResponse>,
    pub matrix: Vec<MatrixCellResponse>,
    pub abc_distribution: Vec<DistributionResponse>,
    pub xyz_distribution: Vec<DistributionResponse>,
}

impl From<AnalysisResult> for AnalysisResultResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            result_id: result.result_id.value(),
            analysis_name: result.analysis_name,
            analysis_date: result.analysis_date.to_string(),
            config_id: result.config_id.value(),
            start_date: result.start_date,
            end_date: result.end_date,
            created_by: result.created_by,
            total_items: result.total_items,
            a_items: result.a_items,
            b_items: result.b_items,
            c_items: result.c_items,
            x_items: result.x_items,
            y_items: result.y_items,
            z_items: result.z_items,
            details: result.details.into_iter().map(Into::into).collect(),
            matrix: result.matrix.into_iter().map(Into::into).collect(),
            abc_distribution: result.abc_distribution.into_iter().map(Into::into).collect(),
            xyz_distribution: result.xyz_distribution.into_iter().map(Into::into).collect(),
        }
    }
}

/// One item row with its recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetailResponse {
    pub rank: u32,
    pub item_code: String,
    pub item_name: Option<String>,
    pub warehouse_zone: Option<String>,
    pub abc_class: AbcClass,
    pub xyz_class: XyzClass,
    pub total_turnover: f64,
    pub total_quantity: f64,
    pub percentage_of_turnover: f64,
    pub cumulative_percentage: f64,
    pub coefficient_of_variation: f64,
    pub avg_monthly_qty: f64,
    pub min_qty_monthly: f64,
    pub max_qty_monthly: f64,
    pub safety_stock_qty: u64,
    pub reorder_point_qty: u64,
    pub max_stock_qty: u64,
    pub slotting_hint: Option<String>,
    pub monthly: Vec<MonthlyFigure>,
}

impl From<ItemDetail> for ItemDetailResponse {
    fn from(detail: ItemDetail) -> Self {
        let c = detail.classification;
        Self {
            rank: c.rank,
            item_code: c.item_code,
            item_name: c.item_name,
            warehouse_zone: c.warehouse_zone,
            abc_class: c.abc_class,
            xyz_class: c.xyz_class,
            total_turnover: c.total_turnover,
            total_quantity: c.total_quantity,
            percentage_of_turnover: c.percentage_of_turnover.rounded(),
            cumulative_percentage: c.cumulative_percentage.rounded(),
            coefficient_of_variation: round_to_hundredths(c.coefficient_of_variation),
            avg_monthly_qty: round_to_hundredths(c.avg_monthly_qty),
            min_qty_monthly: c.min_qty_monthly,
            max_qty_monthly: c.max_qty_monthly,
            safety_stock_qty: detail.recommendation.safety_stock_qty,
            reorder_point_qty: detail.recommendation.reorder_point_qty,
            max_stock_qty: detail.recommendation.max_stock_qty,
            slotting_hint: detail.slotting_hint.map(|h| h.description().to_string()),
            monthly: detail.monthly,
        }
    }
}

/// One cell of the ABC x XYZ matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixCellResponse {
    pub label: String,
    pub abc_class: AbcClass,
    pub xyz_class: XyzClass,
    pub item_count: usize,
    pub turnover_sum: f64,
    pub quantity_sum: f64,
    pub percentage_of_items: f64,
}

impl From<MatrixCell> for MatrixCellResponse {
    fn from(cell: MatrixCell) -> Self {
        Self {
            label: cell.label(),
            abc_class: cell.abc_class,
            xyz_class: cell.xyz_class,
            item_count: cell.item_count,
            turnover_sum: cell.turnover_sum,
            quantity_sum: cell.quantity_sum,
            percentage_of_items: cell.percentage_of_items.rounded(),
        }
    }
}

/// Roll-up for one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionResponse {
    pub class: String,
    pub item_count: usize,
    pub percentage_of_items: f64,
    pub turnover_sum: f64,
    pub percentage_of_turnover: f64,
    pub quantity_sum: f64,
    pub percentage_of_quantity: f64,
}

impl<C: std::fmt::Display> From<ClassDistribution<C>> for DistributionResponse {
    fn from(d: ClassDistribution<C>) -> Self {
        Self {
            class: d.class.to_string(),
            item_count: d.item_count,
            percentage_of_items: d.percentage_of_items.rounded(),
            turnover_sum: d.turnover_sum,
            percentage_of_turnover: d.percentage_of_turnover.rounded(),
            quantity_sum: d.quantity_sum,
            percentage_of_quantity: d.percentage_of_quantity.rounded(),
        }
    }
}

/// Summary of a stored analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummaryResponse {
    pub result_id: i64,
    pub analysis_name: String,
    pub analysis_date: String,
    pub config_id: i64,
    pub total_items: usize,
    pub abc_distribution: BTreeMap<String, usize>,
    pub xyz_distribution: BTreeMap<String, usize>,
}

impl From<AnalysisSummary> for AnalysisSummaryResponse {
    fn from(summary: AnalysisSummary) -> Self {
        Self {
            result_id: summary.result_id.value(),
            analysis_name: summary.analysis_name,
            analysis_date: summary.analysis_date.to_string(),
            config_id: summary.config_id.value(),
            total_items: summary.total_items,
            abc_distribution: summary
                .abc_distribution
                .into_iter()
                .map(|(class, count)| (class.to_string(), count))
                .collect(),
            xyz_distribution: summary
                .xyz_distribution
                .into_iter()
                .map(|(class, count)| (class.to_string(), count))
                .collect(),
        }
    }
}

/// List of analysis summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisListResponse {
    pub items: Vec<AnalysisSummaryResponse>,
    pub total: usize,
}

impl From<Vec<AnalysisSummary>> for AnalysisListResponse {
    fn from(summaries: Vec<AnalysisSummary>) -> Self {
        let items: Vec<AnalysisSummaryResponse> = summaries.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// High-value item with its monthly turnover series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItemResponse {
    pub rank: u32,
    pub item_code: String,
    pub item_name: Option<String>,
    pub abc_class: AbcClass,
    pub xyz_class: XyzClass,
    pub total_turnover: f64,
    pub monthly: Vec<MonthlyFigure>,
}

impl From<TopItem> for TopItemResponse {
    fn from(item: TopItem) -> Self {
        Self {
            rank: item.rank,
            item_code: item.item_code,
            item_name: item.item_name,
            abc_class: item.abc_class,
            xyz_class: item.xyz_class,
            total_turnover: item.total_turnover,
            monthly: item.monthly,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
