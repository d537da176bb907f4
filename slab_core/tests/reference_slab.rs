use slab_core::calculations::load_stress;
use slab_core::report::render_summary;
use slab_core::{analyze, CalcError, SlabConfig, Verdict};

fn init_logger() {
    let _ = env_logger::Builder::from_env("SLAB_LOG")
        .is_test(true)
        .try_init();
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

#[test]
fn reference_slab_matches_hand_calculation() {
    init_logger();
    let config = SlabConfig::default();
    let result = analyze(&config).expect("reference slab analyses");
    let stations = &result.load_stress;

    // h(0) = 0.0125 m, I(0) = 0.015 * 0.0125^3 / 12, M(0) = T L = 0.5 N*m
    let height = 0.015 - 0.005 * 0.5;
    let area_moment = 0.015 * height * height * height / 12.0;
    let expected_stress = -0.5 * (height / 2.0) / area_moment;

    assert!(relative_error(stations.stresses_pa[0], expected_stress) < 1e-3);
    assert!(relative_error(stations.stresses_pa[0], -1.28e6) < 1e-3);
    assert_eq!(stations.max_stress_station, 0);
    assert_eq!(stations.max_stress_pa, stations.stresses_pa[0].abs());

    let expected_fos = config.yield_stress_pa / stations.max_stress_pa;
    assert!((result.safety.factor_of_safety - expected_fos).abs() < 1e-12);
    assert_eq!(result.safety.verdict, Verdict::Safe);

    assert!(stations.mass_kg > 0.0 && stations.mass_kg.is_finite());
}

#[test]
fn positions_span_the_slab_exactly() {
    for stations in [2, 7, 20, 333] {
        let config = SlabConfig { stations, ..SlabConfig::default() };
        let result = load_stress::calculate(&config).expect("valid config");
        assert_eq!(result.positions_m[0], 0.0);
        assert_eq!(result.positions_m[stations - 1], config.geometry.length_m);
        for pair in result.moments_nm.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }
}

#[test]
fn verdict_flips_when_factor_drops_below_two() {
    init_logger();
    // Peak stress is linear in thrust: T = 30e6 / (2 * 1.28e6) gives FoS = 2
    let boundary_thrust = 30e6 / (2.0 * 1.28e6);

    let below = SlabConfig { thrust_n: boundary_thrust * 1.01, ..SlabConfig::default() };
    let above = SlabConfig { thrust_n: boundary_thrust * 0.99, ..SlabConfig::default() };

    assert_eq!(analyze(&below).unwrap().safety.verdict, Verdict::Redesign);
    assert_eq!(analyze(&above).unwrap().safety.verdict, Verdict::Safe);
}

#[test]
fn reversed_taper_moves_peak_stress_off_the_tip() {
    // Negative taper makes the free end the tallest section, so the peak
    // must be found by scanning rather than assumed at station 0.
    let mut config = SlabConfig::default();
    config.geometry.fixed_end_height_m = 0.002;
    config.geometry.taper_per_m = -0.02;
    config.stations = 101;

    let result = load_stress::calculate(&config).expect("valid geometry");
    let expected = result
        .stresses_pa
        .iter()
        .fold(0.0f64, |acc, s| acc.max(s.abs()));
    assert_eq!(result.max_stress_pa, expected);
    assert_ne!(result.max_stress_station, 0);
}

#[test]
fn invalid_configurations_fail_fast() {
    let zero_length = {
        let mut config = SlabConfig::default();
        config.geometry.length_m = 0.0;
        config
    };
    let one_station = SlabConfig { stations: 1, ..SlabConfig::default() };

    for config in [zero_length, one_station] {
        match analyze(&config) {
            Err(CalcError::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}

#[test]
fn vanishing_section_reports_station() {
    // h(x) = 0.0025 - 0.005 (0.5 - x) is zero at the free end
    let mut config = SlabConfig::default();
    config.geometry.fixed_end_height_m = 0.0025;

    match analyze(&config) {
        Err(CalcError::NumericFault { station, .. }) => assert_eq!(station, Some(0)),
        other => panic!("expected NumericFault, got {:?}", other),
    }
}

#[test]
fn overflowing_stress_is_a_fault_not_a_verdict() {
    init_logger();
    let config = SlabConfig { thrust_n: 1e308, ..SlabConfig::default() };

    match analyze(&config) {
        Err(CalcError::NumericFault { quantity, station, .. }) => {
            assert_eq!(quantity, "bending stress");
            assert_eq!(station, Some(0));
        }
        other => panic!("expected NumericFault, got {:?}", other),
    }
}

#[test]
fn summary_report_has_three_numbers_and_verdict() {
    let result = analyze(&SlabConfig::default()).unwrap();
    let report = render_summary(&result);
    assert_eq!(report.lines().count(), 4);
    assert!(report.contains("Mass = "));
    assert!(report.contains("Maximum stress = "));
    assert!(report.contains("Factor of safety = "));
}
