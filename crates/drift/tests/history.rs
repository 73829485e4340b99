//! Drift history with the bundled ephemeris and calendar.

use approx::assert_relative_eq;
use nissan_calendar::{HebrewDate, IcuCalendar};
use nissan_drift::{
    BadYearPolicy, DriftCalculator, DriftConfig, DriftError, DriftFormula, HistoryAggregator,
    YearOffset,
};
use nissan_ephemeris::{MAX_YEAR, MIN_YEAR, MeeusEphemeris};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Aggregator = HistoryAggregator<MeeusEphemeris, IcuCalendar>;

fn aggregator(config: DriftConfig) -> Aggregator {
    HistoryAggregator::new(MeeusEphemeris::new(), IcuCalendar, config).unwrap()
}

#[test]
fn single_year_history() {
    let series = aggregator(DriftConfig::new()).history(2024, 0).unwrap();
    assert_eq!(series, vec![YearOffset::new(2024, 20)]);
}

#[test]
fn known_drifts() {
    let agg = aggregator(DriftConfig::new());
    assert_eq!(agg.nissan_shift(2000).unwrap(), 17);
    assert_eq!(agg.nissan_shift(2024).unwrap(), 20);
}

#[test]
fn drifts_before_the_reform() {
    // Julian calendar fields before October 1582, shifted by 13 days.
    let agg = aggregator(DriftConfig::new());
    assert_eq!(agg.nissan_shift(1000).unwrap(), -12);
    assert_eq!(agg.nissan_shift(1500).unwrap(), -13);
    assert_eq!(agg.nissan_shift(1582).unwrap(), 11);
    assert_eq!(agg.nissan_shift(1583).unwrap(), 3);

    let uncorrected = aggregator(DriftConfig::new().without_correction());
    assert_eq!(uncorrected.nissan_shift(1000).unwrap(), 1);
    assert_eq!(uncorrected.nissan_shift(1500).unwrap(), 0);
    assert_eq!(uncorrected.nissan_shift(1582).unwrap(), 24);
    assert_eq!(uncorrected.nissan_shift(1583).unwrap(), 3);
}

#[test]
fn equinox_of_1000_lands_in_nissan() {
    let agg = aggregator(DriftConfig::new());
    assert_eq!(
        agg.locator().locate(1000).unwrap(),
        HebrewDate::new(4760, 1, 13)
    );
    let uncorrected = aggregator(DriftConfig::new().without_correction());
    assert_eq!(
        uncorrected.locator().locate(1000).unwrap(),
        HebrewDate::new(4760, 12, 29)
    );
}

#[test]
fn history_is_ascending_and_complete() {
    let series = aggregator(DriftConfig::new()).history(2024, 150).unwrap();
    assert_eq!(series.len(), 151);
    assert_eq!(series.first().unwrap().year, 1874);
    assert_eq!(series.last().unwrap().year, 2024);
    assert!(series.windows(2).all(|w| w[1].year == w[0].year + 1));
}

#[test]
fn drift_stays_within_a_year() {
    let series = aggregator(DriftConfig::new())
        .history(MAX_YEAR, (MAX_YEAR - MIN_YEAR) as u32)
        .unwrap();
    for offset in &series {
        assert!(offset.drift_days.abs() < 365, "{offset:?}");
    }
    // The modern calendar keeps Nissan within about a month of the equinox.
    assert!(
        series
            .iter()
            .filter(|o| (1600..=2100).contains(&o.year))
            .all(|o| (-15..=35).contains(&o.drift_days))
    );
}

#[test]
fn two_centuries_of_windows() {
    for policy in [BadYearPolicy::TwoSided, BadYearPolicy::OneSided] {
        let windows = aggregator(DriftConfig::new().with_policy(policy))
            .windowed_bad_fraction(2024, 199, 100)
            .unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(
            (windows[0].window_start, windows[0].window_len),
            (1825, 100)
        );
        assert_eq!(
            (windows[1].window_start, windows[1].window_len),
            (1925, 100)
        );
        assert_relative_eq!(windows[0].fraction, 0.20);
        assert_relative_eq!(windows[1].fraction, 0.21);
    }
}

#[test]
fn windows_agree_with_fraction_bad() {
    let agg = aggregator(DriftConfig::new());
    let windows = agg.windowed_bad_fraction(2024, 199, 100).unwrap();
    for w in &windows {
        let years = (w.window_start..w.window_start + w.window_len as i32).collect::<Vec<_>>();
        assert_relative_eq!(agg.fraction_bad(&years).unwrap(), w.fraction);
    }
}

#[test]
fn fraction_bad_of_nothing() {
    assert_eq!(
        aggregator(DriftConfig::new()).fraction_bad(&[]).unwrap_err(),
        DriftError::EmptyRange
    );
}

#[test]
fn fraction_bad_is_a_fraction() {
    let mut rng = StdRng::seed_from_u64(7);
    for threshold in [0, 10, 15, 30] {
        let agg = aggregator(DriftConfig::new().with_threshold(threshold));
        let years = (0..50)
            .map(|_| rng.random_range(MIN_YEAR..=MAX_YEAR))
            .collect::<Vec<_>>();
        let f = agg.fraction_bad(&years).unwrap();
        assert!((0.0..=1.0).contains(&f), "threshold {threshold}: {f}");
    }
}

#[test]
fn zero_threshold_flags_every_nonzero_drift() {
    let agg = aggregator(DriftConfig::new().with_threshold(0));
    let series = agg.history(2024, 49).unwrap();
    let nonzero = series.iter().filter(|o| o.drift_days != 0).count();
    let years = series.iter().map(|o| o.year).collect::<Vec<_>>();
    assert_relative_eq!(
        agg.fraction_bad(&years).unwrap(),
        nonzero as f64 / years.len() as f64
    );
}

#[test]
fn formulas_agree_on_sampled_years() {
    let agg = aggregator(DriftConfig::new());
    let calc = DriftCalculator::new(IcuCalendar, DriftFormula::GregorianRoundTrip);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let year = rng.random_range(MIN_YEAR..=MAX_YEAR);
        let equinox = agg.locator().locate(year).unwrap();
        assert_eq!(
            calc.drift_days_gregorian(equinox).unwrap(),
            calc.drift_days_julian(equinox).unwrap(),
            "year {year}, equinox {equinox}"
        );
    }
}

#[test]
fn julian_day_formula_gives_same_history() {
    let gregorian = aggregator(DriftConfig::new()).history(2024, 300).unwrap();
    let julian = aggregator(DriftConfig::new().with_formula(DriftFormula::JulianDay))
        .history(2024, 300)
        .unwrap();
    assert_eq!(gregorian, julian);
}

#[test]
fn summary_of_two_centuries() {
    let agg = aggregator(DriftConfig::new());
    let series = agg.history(2024, 199).unwrap();
    let summary = agg.summarize(&series).unwrap();
    assert_eq!(summary.n_years, 200);
    assert_eq!((summary.first_year, summary.last_year), (1825, 2024));
    assert_eq!(summary.max, YearOffset::new(1929, 21));
    assert_eq!(summary.min, YearOffset::new(1842, -9));
    assert_relative_eq!(summary.mean, 6.61, epsilon = 0.01);
    assert_eq!(summary.n_bad, 41);
    assert_relative_eq!(summary.fraction_bad, 0.205);
}

#[test]
fn out_of_range_year_aborts_history() {
    let err = aggregator(DriftConfig::new())
        .history(MAX_YEAR + 5, 10)
        .unwrap_err();
    assert!(matches!(err, DriftError::EquinoxLookup(_)));
}
