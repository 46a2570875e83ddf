//! Result Assembler - Merges stage outputs into an [`AnalysisResult`].

use std::collections::BTreeMap;

use super::{
    AbcClass, AnalysisRequest, AnalysisResult, ClassDistribution, Configuration,
    ItemClassification, ItemDetail, ItemHistory, MatrixCell, MonthlyFigure,
    ReplenishmentRecommendation, SlottingHint, XyzClass,
};
use crate::domain::foundation::{Percentage, ResultId, Timestamp};

/// Everything the assembler needs for one result.
///
/// `classifications` and `recommendations` are parallel, in rank order.
pub struct AssemblyParts<'a> {
    pub result_id: ResultId,
    pub analysis_date: Timestamp,
    pub request: &'a AnalysisRequest,
    pub configuration: &'a Configuration,
    pub histories: &'a BTreeMap<String, ItemHistory>,
    pub classifications: Vec<ItemClassification>,
    pub recommendations: Vec<ReplenishmentRecommendation>,
    pub matrix: Vec<MatrixCell>,
}

pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(parts: AssemblyParts<'_>) -> AnalysisResult {
        let abc_distribution = distribution(&parts.classifications, |c| c.abc_class, AbcClass::ALL);
        let xyz_distribution = distribution(&parts.classifications, |c| c.xyz_class, XyzClass::ALL);

        let count_abc = |class: AbcClass| {
            abc_distribution
                .iter()
                .find(|d| d.class == class)
                .map_or(0, |d| d.item_count)
        };
        let count_xyz = |class: XyzClass| {
            xyz_distribution
                .iter()
                .find(|d| d.class == class)
                .map_or(0, |d| d.item_count)
        };
        let (a_items, b_items, c_items) =
            (count_abc(AbcClass::A), count_abc(AbcClass::B), count_abc(AbcClass::C));
        let (x_items, y_items, z_items) =
            (count_xyz(XyzClass::X), count_xyz(XyzClass::Y), count_xyz(XyzClass::Z));

        let total_items = parts.classifications.len();
        let details = parts
            .classifications
            .into_iter()
            .zip(parts.recommendations)
            .map(|(classification, recommendation)| {
                let monthly = parts
                    .histories
                    .get(&classification.item_code)
                    .map(monthly_figures)
                    .unwrap_or_default();
                let slotting_hint =
                    SlottingHint::for_classes(classification.abc_class, classification.xyz_class);
                ItemDetail {
                    classification,
                    recommendation,
                    monthly,
                    slotting_hint,
                }
            })
            .collect();

        AnalysisResult {
            result_id: parts.result_id,
            analysis_name: parts.request.analysis_name.clone(),
            analysis_date: parts.analysis_date,
            config_id: parts.configuration.config_id,
            start_date: parts.request.start_date,
            end_date: parts.request.end_date,
            created_by: parts.request.created_by.clone(),
            total_items,
            a_items,
            b_items,
            c_items,
            x_items,
            y_items,
            z_items,
            details,
            matrix: parts.matrix,
            abc_distribution,
            xyz_distribution,
        }
    }
}

fn monthly_figures(history: &ItemHistory) -> Vec<MonthlyFigure> {
    history
        .periods
        .iter()
        .map(|p| MonthlyFigure {
            period: p.period,
            turnover: p.total_turnover,
            quantity: p.total_quantity,
        })
        .collect()
}

fn distribution<C, F>(items: &[ItemClassification], class_of: F, classes: [C; 3]) -> Vec<ClassDistribution<C>>
where
    C: Copy + PartialEq,
    F: Fn(&ItemClassification) -> C,
{
    let total_items = items.len() as f64;
    let total_turnover: f64 = items.iter().map(|i| i.total_turnover).sum();
    let total_quantity: f64 = items.iter().map(|i| i.total_quantity).sum();

    classes
        .into_iter()
        .map(|class| {
            let members: Vec<&ItemClassification> =
                items.iter().filter(|i| class_of(i) == class).collect();
            let item_count = members.len();
            let turnover_sum: f64 = members.iter().map(|i| i.total_turnover).sum();
            let quantity_sum: f64 = members.iter().map(|i| i.total_quantity).sum();
            ClassDistribution {
                class,
                item_count,
                percentage_of_items: Percentage::of(item_count as f64, total_items),
                turnover_sum,
                percentage_of_turnover: Percentage::of(turnover_sum, total_turnover),
                quantity_sum,
                percentage_of_quantity: Percentage::of(quantity_sum, total_quantity),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{ItemPeriodAggregate, MatrixComposer};
    use crate::domain::foundation::{ConfigId, Period};

    fn classification(code: &str, rank: u32, abc: AbcClass, xyz: XyzClass, turnover: f64) -> ItemClassification {
        ItemClassification {
            item_code: code.to_string(),
            item_name: None,
            warehouse_zone: None,
            total_turnover: turnover,
            total_quantity: 10.0,
            percentage_of_turnover: Percentage::ZERO,
            cumulative_percentage: Percentage::ZERO,
            rank,
            abc_class: abc,
            coefficient_of_variation: 0.0,
            xyz_class: xyz,
            avg_monthly_qty: 10.0,
            min_qty_monthly: 10.0,
            max_qty_monthly: 10.0,
        }
    }

    fn recommendation(code: &str) -> ReplenishmentRecommendation {
        ReplenishmentRecommendation {
            item_code: code.to_string(),
            safety_stock_qty: 1,
            reorder_point_qty: 2,
            max_stock_qty: 3,
        }
    }

    #[test]
    fn assembles_counts_details_and_distributions() {
        let request = AnalysisRequest::new("Q1").created_by("planner");
        let configuration = Configuration::standard(ConfigId::new(4), "Standard");
        let mut histories = BTreeMap::new();
        histories.insert(
            "P1".to_string(),
            ItemHistory {
                item_code: "P1".to_string(),
                item_name: None,
                warehouse_zone: None,
                periods: vec![ItemPeriodAggregate {
                    item_code: "P1".to_string(),
                    period: Period::new(2024, 1).unwrap(),
                    total_quantity: 10.0,
                    total_turnover: 75.0,
                }],
            },
        );
        let classifications = vec![
            classification("P1", 1, AbcClass::A, XyzClass::Y, 75.0),
            classification("P2", 2, AbcClass::C, XyzClass::Y, 25.0),
        ];
        let matrix = MatrixComposer::compose(&classifications);
        let analysis_date = Timestamp::now();

        let result = ResultAssembler::assemble(AssemblyParts {
            result_id: ResultId::new(9),
            analysis_date,
            request: &request,
            configuration: &configuration,
            histories: &histories,
            classifications,
            recommendations: vec![recommendation("P1"), recommendation("P2")],
            matrix,
        });

        assert_eq!(result.result_id, ResultId::new(9));
        assert_eq!(result.analysis_date, analysis_date);
        assert_eq!(result.config_id, ConfigId::new(4));
        assert_eq!(result.created_by.as_deref(), Some("planner"));
        assert_eq!(result.total_items, 2);
        assert_eq!((result.a_items, result.b_items, result.c_items), (1, 0, 1));
        assert_eq!((result.x_items, result.y_items, result.z_items), (0, 2, 0));

        let p1 = result.detail("P1").unwrap();
        assert_eq!(p1.monthly.len(), 1);
        assert_eq!(p1.slotting_hint, Some(SlottingHint::PrimaryPickFaceMiddleLevel));
        assert!(result.detail("P2").unwrap().monthly.is_empty());
        assert!(result.detail("P2").unwrap().slotting_hint.is_none());

        let a = &result.abc_distribution[0];
        assert_eq!(a.class, AbcClass::A);
        assert_eq!(a.percentage_of_items.value(), 50.0);
        assert_eq!(a.percentage_of_turnover.value(), 75.0);
        assert_eq!(a.percentage_of_quantity.value(), 50.0);
        assert_eq!(result.xyz_distribution[1].item_count, 2);

        let summary = result.summary();
        assert_eq!(summary.abc_distribution[&AbcClass::C], 1);
        assert_eq!(summary.xyz_distribution[&XyzClass::Y], 2);
        assert_eq!(result.top_items(1).len(), 1);
        assert_eq!(result.top_items(1)[0].item_code, "P1");
        assert_eq!(result.cell(AbcClass::A, XyzClass::Y).unwrap().item_count, 1);
    }
}
