//! Analysis Engine - Single entry point of a classification run.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::{
    AbcClassifier, AbcRanking, AnalysisError, AnalysisRequest, AnalysisResult, AssemblyParts,
    Configuration, DemandVariability, ItemClassification, ItemHistory, ItemTurnover,
    MatrixComposer, PeriodAggregator, ReplenishmentCalculator, ResultAssembler, TransactionFilter,
    TransactionRecord, XyzClassifier,
};
use crate::domain::foundation::{ResultId, Timestamp};

/// Runs the aggregate, classify, compose and assemble pipeline.
///
/// Stateless: a run is a pure function of its inputs plus the assigned
/// result id and timestamp.
pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Runs an analysis stamped with the current time.
    pub fn run(
        transactions: &[TransactionRecord],
        configuration: &Configuration,
        request: &AnalysisRequest,
        result_id: ResultId,
    ) -> Result<AnalysisResult, AnalysisError> {
        Self::run_at(transactions, configuration, request, result_id, Timestamp::now())
    }

    /// Runs an analysis with a fixed timestamp.
    ///
    /// # Errors
    /// - `InvalidConfiguration` before any classification when thresholds or
    ///   factors are invalid, or the date range is inverted
    /// - `DataIntegrity` when matching records carry negative or non-finite values
    /// - `EmptyInput` when nothing remains after filtering
    pub fn run_at(
        transactions: &[TransactionRecord],
        configuration: &Configuration,
        request: &AnalysisRequest,
        result_id: ResultId,
        analysis_date: Timestamp,
    ) -> Result<AnalysisResult, AnalysisError> {
        configuration.validate()?;

        let filter = TransactionFilter::from_request(request);
        let histories = PeriodAggregator::aggregate(transactions, &filter)?;
        debug!(
            records = transactions.len(),
            items = histories.len(),
            "Aggregated transactions into item histories"
        );

        let (rankings, variability) = rayon::join(
            || Self::rank(&histories, configuration),
            || Self::measure_variability(&histories, configuration),
        );

        let classifications = join_classifications(rankings, variability, &histories);
        let recommendations = classifications
            .iter()
            .map(|item| ReplenishmentCalculator::recommend(item, configuration))
            .collect::<Result<Vec<_>, _>>()?;
        let matrix = MatrixComposer::compose(&classifications);

        let result = ResultAssembler::assemble(AssemblyParts {
            result_id,
            analysis_date,
            request,
            configuration,
            histories: &histories,
            classifications,
            recommendations,
            matrix,
        });

        info!(
            result_id = %result.result_id,
            analysis_name = %result.analysis_name,
            total_items = result.total_items,
            a_items = result.a_items,
            b_items = result.b_items,
            c_items = result.c_items,
            x_items = result.x_items,
            y_items = result.y_items,
            z_items = result.z_items,
            "Analysis completed"
        );

        Ok(result)
    }

    fn rank(histories: &BTreeMap<String, ItemHistory>, configuration: &Configuration) -> Vec<AbcRanking> {
        let turnovers: Vec<ItemTurnover> = histories
            .values()
            .map(|h| ItemTurnover::new(h.item_code.clone(), h.total_turnover()))
            .collect();
        AbcClassifier::classify(
            &turnovers,
            configuration.abc_a_threshold,
            configuration.abc_b_threshold,
        )
    }

    fn measure_variability(
        histories: &BTreeMap<String, ItemHistory>,
        configuration: &Configuration,
    ) -> Vec<DemandVariability> {
        let series: Vec<(&str, Vec<f64>)> = histories
            .values()
            .map(|h| (h.item_code.as_str(), h.quantities()))
            .collect();
        XyzClassifier::classify(
            &series,
            configuration.xyz_x_threshold,
            configuration.xyz_y_threshold,
        )
    }
}

/// Joins both passes by item code, keeping ABC rank order.
fn join_classifications(
    rankings: Vec<AbcRanking>,
    variability: Vec<DemandVariability>,
    histories: &BTreeMap<String, ItemHistory>,
) -> Vec<ItemClassification> {
    let mut by_code: HashMap<String, DemandVariability> = variability
        .into_iter()
        .map(|v| (v.item_code.clone(), v))
        .collect();

    rankings
        .into_iter()
        .filter_map(|ranking| {
            let variability = by_code.remove(&ranking.item_code)?;
            let history = histories.get(&ranking.item_code);
            Some(ItemClassification {
                item_name: history.and_then(|h| h.item_name.clone()),
                warehouse_zone: history.and_then(|h| h.warehouse_zone.clone()),
                total_quantity: history.map_or(0.0, ItemHistory::total_quantity),
                item_code: ranking.item_code,
                total_turnover: ranking.total_turnover,
                percentage_of_turnover: ranking.percentage_of_turnover,
                cumulative_percentage: ranking.cumulative_percentage,
                rank: ranking.rank,
                abc_class: ranking.abc_class,
                coefficient_of_variation: variability.coefficient_of_variation,
                xyz_class: variability.xyz_class,
                avg_monthly_qty: variability.avg_monthly_qty,
                min_qty_monthly: variability.min_qty_monthly,
                max_qty_monthly: variability.max_qty_monthly,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{AbcClass, XyzClass};
    use crate::domain::foundation::ConfigId;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> Configuration {
        Configuration::standard(ConfigId::new(1), "Standard").as_default()
    }

    fn pareto_records() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new("I1", date(2024, 1, 5), 10.0, 350.0).with_item_name("Pallet wrap"),
            TransactionRecord::new("I1", date(2024, 2, 5), 10.0, 350.0),
            TransactionRecord::new("I2", date(2024, 1, 9), 4.0, 100.0),
            TransactionRecord::new("I2", date(2024, 2, 9), 12.0, 100.0),
            TransactionRecord::new("I3", date(2024, 1, 12), 5.0, 100.0),
        ]
    }

    #[test]
    fn classifies_pareto_example() {
        let result = AnalysisEngine::run(&pareto_records(), &config(), &AnalysisRequest::new("Q1"), ResultId::new(1))
            .unwrap();

        let codes: Vec<&str> = result.details.iter().map(|d| d.classification.item_code.as_str()).collect();
        assert_eq!(codes, vec!["I1", "I2", "I3"]);
        let abc: Vec<AbcClass> = result.details.iter().map(|d| d.classification.abc_class).collect();
        assert_eq!(abc, vec![AbcClass::A, AbcClass::B, AbcClass::C]);

        let i1 = &result.details[0].classification;
        assert_eq!(i1.xyz_class, XyzClass::X);
        assert_eq!(i1.item_name.as_deref(), Some("Pallet wrap"));
        assert_eq!(i1.total_quantity, 20.0);

        // mean 8, std dev 4, cv 50
        let i2 = &result.details[1].classification;
        assert!((i2.coefficient_of_variation - 50.0).abs() < 1e-9);
        assert_eq!(i2.xyz_class, XyzClass::Z);

        assert_eq!(result.total_items, 3);
        assert_eq!(result.matrix.len(), 9);
        assert_eq!(result.config_id, ConfigId::new(1));
    }

    #[test]
    fn invalid_configuration_aborts_before_aggregation() {
        let mut c = config();
        c.abc_a_threshold = 90.0;
        c.abc_b_threshold = 80.0;
        // Negative records would fail integrity checks if aggregation ran.
        let records = vec![TransactionRecord::new("I1", date(2024, 1, 1), -1.0, 1.0)];

        let result = AnalysisEngine::run(&records, &c, &AnalysisRequest::new("bad"), ResultId::new(1));
        assert!(matches!(result, Err(AnalysisError::InvalidConfiguration { .. })));
    }

    #[test]
    fn overflowing_turnover_is_a_data_error() {
        let records = vec![
            TransactionRecord::new("A", date(2024, 1, 1), 1.0, 1e308),
            TransactionRecord::new("B", date(2024, 1, 1), 1.0, 1e308),
        ];

        let result = AnalysisEngine::run(&records, &config(), &AnalysisRequest::new("big"), ResultId::new(1));
        assert!(matches!(result, Err(AnalysisError::DataIntegrity { .. })));
    }

    #[test]
    fn runs_are_deterministic_for_a_fixed_timestamp() {
        let at = Timestamp::now();
        let request = AnalysisRequest::new("Q1");
        let first = AnalysisEngine::run_at(&pareto_records(), &config(), &request, ResultId::new(1), at).unwrap();
        let second = AnalysisEngine::run_at(&pareto_records(), &config(), &request, ResultId::new(1), at).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn join_keeps_rank_order_and_history_metadata() {
        let histories: BTreeMap<String, ItemHistory> = PeriodAggregator::aggregate(
            &[
                TransactionRecord::new("B", date(2024, 1, 1), 1.0, 5.0).with_warehouse_zone("Z1"),
                TransactionRecord::new("A", date(2024, 1, 1), 1.0, 1.0),
            ],
            &TransactionFilter::default(),
        )
        .unwrap();
        let rankings = AnalysisEngine::rank(&histories, &config());
        let variability = AnalysisEngine::measure_variability(&histories, &config());

        let joined = join_classifications(rankings, variability, &histories);
        assert_eq!(joined[0].item_code, "B");
        assert_eq!(joined[0].warehouse_zone.as_deref(), Some("Z1"));
        assert_eq!(joined[1].item_code, "A");
    }
}
