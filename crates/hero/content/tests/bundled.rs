use std::io::Write;

use hero_content::{ConfigLoader, ContentFactory, UnitStatsLoader};
use hero_core::{HeroClass, HeroQueries, HeroView, ManualClock, QueryConfig, names};

#[test]
fn bundled_config_matches_defaults() {
    let config = ContentFactory::bundled().load_config().unwrap();
    assert_eq!(config, QueryConfig::default());
}

#[test]
fn bundled_unit_table_covers_rule_classes() {
    let units = ContentFactory::bundled().load_units().unwrap();

    for class in [
        HeroClass::TemplarAssassin,
        HeroClass::Sniper,
        HeroClass::Enchantress,
    ] {
        assert!(units.contains_key(&class), "missing {class}");
    }
    assert_eq!(units[&HeroClass::Sniper].projectile_speed, 3000.0);
    assert!(!units.contains_key(&HeroClass::Unknown));
}

#[test]
fn bundled_snapshot_resolves_end_to_end() {
    let heroes = ContentFactory::bundled()
        .load_snapshot("lane_fight")
        .unwrap();
    assert_eq!(heroes.len(), 2);

    let sniper = &heroes[0];
    let riki = &heroes[1];
    assert!(sniper.is_ranged());
    assert!(riki.is_silenced());
    assert!(!riki.can_cast());
    assert!(riki.items().is_empty());

    let mut queries = HeroQueries::new(ManualClock::new());
    assert_eq!(queries.attack_range(sniper), 1002.0);
    assert_eq!(queries.attack_range(riki), 162.0);
    assert!(!queries.can_go_invis(riki));

    assert!(hero_core::aghanim_state(sniper));
    assert!(!hero_core::can_die(sniper, None, false));
    assert!(!hero_core::can_die(riki, None, false));
    assert!(hero_core::can_die(riki, Some(names::AXE_CULLING_BLADE), false));
}

#[test]
fn loaders_read_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "invis_ttl_ms = 75").unwrap();
    writeln!(file, "max_tracked_actors = 16").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.invis_ttl_ms, 75);
    assert_eq!(config.max_tracked_actors, 16);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("units.ron");

    let err = UnitStatsLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("units.ron"));
}
