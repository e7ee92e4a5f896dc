//! Unit tests for fl-script reference data.

#[cfg(test)]
mod script {
    use fl_core::StepId;

    use crate::step::{DemoStep, StepKind, StepScript};
    use crate::ScriptError;

    fn step(id: u16, kind: StepKind) -> DemoStep {
        DemoStep::new(StepId(id), format!("step {id}"), kind)
    }

    #[test]
    fn standard_script_shape() {
        let script = StepScript::standard().unwrap();
        assert_eq!(script.len(), 6);
        assert_eq!(script.ledger_ordinal(), 2);
        assert_eq!(script.dispatch_ordinal(), 3);
        assert_eq!(script.final_ordinal(), 5);
        assert_eq!(script.transit_step_count(), 3);
    }

    #[test]
    fn transit_phase_predicate_matches_derived_ordinals() {
        let script = StepScript::standard().unwrap();
        for ordinal in 0..script.len() {
            assert_eq!(
                script.in_transit_phase(ordinal),
                ordinal >= script.dispatch_ordinal(),
                "ordinal {ordinal}"
            );
        }
        assert!(!script.in_transit_phase(script.len()));
    }

    #[test]
    fn progress_increments_sum_to_full() {
        let script = StepScript::standard().unwrap();
        let total: f64 = (0..script.transit_step_count())
            .map(|_| script.progress_increment())
            .sum();
        assert!((total - 100.0).abs() < 1e-9, "got {total}");
    }

    #[test]
    fn empty_script_rejected() {
        assert!(matches!(StepScript::new(vec![]), Err(ScriptError::Config(_))));
    }

    #[test]
    fn missing_ledger_rejected() {
        let result = StepScript::new(vec![
            step(0, StepKind::Info),
            step(1, StepKind::Dispatch),
            step(2, StepKind::Delivered),
        ]);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn duplicate_dispatch_rejected() {
        let result = StepScript::new(vec![
            step(0, StepKind::Ledger),
            step(1, StepKind::Dispatch),
            step(2, StepKind::Dispatch),
            step(3, StepKind::Delivered),
        ]);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn delivered_not_last_rejected() {
        let result = StepScript::new(vec![
            step(0, StepKind::Ledger),
            step(1, StepKind::Delivered),
            step(2, StepKind::Dispatch),
            step(3, StepKind::Info),
        ]);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn ledger_after_dispatch_rejected() {
        let result = StepScript::new(vec![
            step(0, StepKind::Dispatch),
            step(1, StepKind::Ledger),
            step(2, StepKind::Delivered),
        ]);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn minimal_valid_script() {
        // Ledger, dispatch, delivered — transit phase spans dispatch + final.
        let script = StepScript::new(vec![
            step(0, StepKind::Ledger),
            step(1, StepKind::Dispatch),
            step(2, StepKind::Delivered),
        ])
        .unwrap();
        assert_eq!(script.transit_step_count(), 2);
        assert_eq!(script.progress_increment(), 50.0);
    }
}

#[cfg(test)]
mod catalog {
    use fl_core::{DemoRng, GeoPoint};

    use crate::destination::{DeliveryMode, DestinationCatalog};
    use crate::ScriptError;

    #[test]
    fn standard_catalog_nonempty_with_shared_origin() {
        let catalog = DestinationCatalog::standard().unwrap();
        assert_eq!(catalog.len(), 4);
        let origin = catalog.origin();
        for dest in catalog.destinations() {
            let derived = origin.distance_km(dest.target);
            assert!((dest.distance_km - derived).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_catalog_rejected() {
        let result = DestinationCatalog::new(GeoPoint::new(0.0, 0.0), vec![]);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn choose_is_uniformly_spread() {
        let catalog = DestinationCatalog::standard().unwrap();
        let mut rng = DemoRng::new(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[catalog.choose(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "every candidate should be selectable: {seen:?}");
    }

    #[test]
    fn choose_is_deterministic_under_seed() {
        let catalog = DestinationCatalog::standard().unwrap();
        let picks_a: Vec<_> = {
            let mut rng = DemoRng::new(7);
            (0..20).map(|_| catalog.choose(&mut rng)).collect()
        };
        let picks_b: Vec<_> = {
            let mut rng = DemoRng::new(7);
            (0..20).map(|_| catalog.choose(&mut rng)).collect()
        };
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn mode_labels() {
        assert_eq!(DeliveryMode::Drone.to_string(), "drone");
        assert_eq!(DeliveryMode::Van.to_string(), "van");
    }
}

#[cfg(test)]
mod inventory {
    use crate::inventory::{InventoryItem, InventoryProfile};
    use crate::ScriptError;

    #[test]
    fn standard_profile_baselines_in_range() {
        let profile = InventoryProfile::standard().unwrap();
        assert_eq!(profile.len(), 4);
        for level in profile.baseline_levels() {
            assert!(level <= 100);
        }
    }

    #[test]
    fn over_100_baseline_rejected() {
        let result = InventoryProfile::new(vec![InventoryItem {
            name: "Overfull".into(),
            baseline_pct: 101,
            depletion_pct: 5,
        }]);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn baseline_levels_match_item_order() {
        let profile = InventoryProfile::standard().unwrap();
        let levels = profile.baseline_levels();
        for (item, level) in profile.items().iter().zip(&levels) {
            assert_eq!(item.baseline_pct, *level);
        }
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use fl_core::GeoPoint;

    use crate::destination::DeliveryMode;
    use crate::loader::load_catalog_reader;
    use crate::ScriptError;

    const CATALOG_CSV: &str = "\
name,lat,lon,mode\n\
Wolf Creek general store,46.9980,-112.0650,drone\n\
Elliston co-op,46.5594,-112.4286,van\n\
";

    #[test]
    fn loads_rows_and_derives_distance() {
        let origin = GeoPoint::new(46.5891, -112.0391);
        let catalog = load_catalog_reader(Cursor::new(CATALOG_CSV), origin).unwrap();
        assert_eq!(catalog.len(), 2);

        let wolf_creek = &catalog.destinations()[0];
        assert_eq!(wolf_creek.name, "Wolf Creek general store");
        assert_eq!(wolf_creek.mode, DeliveryMode::Drone);
        assert!((wolf_creek.distance_km - origin.distance_km(wolf_creek.target)).abs() < 1e-9);

        assert_eq!(catalog.destinations()[1].mode, DeliveryMode::Van);
    }

    #[test]
    fn invalid_mode_is_parse_error() {
        let csv = "name,lat,lon,mode\nNowhere,0.0,0.0,zeppelin\n";
        let result = load_catalog_reader(Cursor::new(csv), GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, Err(ScriptError::Parse(_))));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "name,lat,lon,mode\nNowhere,not-a-number,0.0,drone\n";
        let result = load_catalog_reader(Cursor::new(csv), GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, Err(ScriptError::Parse(_))));
    }

    #[test]
    fn empty_file_is_config_error() {
        let csv = "name,lat,lon,mode\n";
        let result = load_catalog_reader(Cursor::new(csv), GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }
}
