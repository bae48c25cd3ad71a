use crate::Error;
use crate::app::services::channel_hue::ChannelHueResolver;
use crate::config::RecordsConfig;
use crate::constants::hues;

#[test]
fn test_override_takes_precedence() {
    let resolver = ChannelHueResolver::new();
    resolver.register("DAPI", 0.5).unwrap();

    assert_eq!(resolver.resolve(Some("dapi")), 0.5);
    assert_eq!(resolver.resolve(Some("  Dapi ")), 0.5);
    // Only exact names are overridden
    assert_eq!(resolver.resolve(Some("dapi 2")), hues::DAPI);
}

#[test]
fn test_unregister_and_clear() {
    let resolver = ChannelHueResolver::new();
    resolver.register("MitoTracker", 0.3).unwrap();
    resolver.register("phalloidin", 0.7).unwrap();
    assert_eq!(resolver.override_count(), 2);

    assert_eq!(resolver.unregister("mitotracker"), Some(0.3));
    assert_eq!(resolver.unregister("mitotracker"), None);
    assert_eq!(resolver.resolve(Some("MitoTracker")), hues::DEFAULT);

    resolver.clear_overrides();
    assert_eq!(resolver.override_count(), 0);
}

#[test]
fn test_invalid_hues_rejected() {
    let resolver = ChannelHueResolver::new();
    for hue in [1.0, -0.01, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            resolver.register("x", hue),
            Err(Error::InvalidHue { .. })
        ));
    }
    assert_eq!(resolver.override_count(), 0);
}

#[test]
fn test_apply_config() {
    let resolver = ChannelHueResolver::new();
    let config = RecordsConfig::default()
        .with_channel_hue("SiR-actin", 0.9)
        .with_channel_hue("fitc", 0.2);

    resolver.apply_config(&config).unwrap();
    assert_eq!(resolver.resolve(Some("sir-actin")), 0.9);
    assert_eq!(resolver.resolve(Some("FITC")), 0.2);
}

#[test]
fn test_concurrent_registration_and_resolution() {
    let resolver = ChannelHueResolver::new();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let resolver = &resolver;
            scope.spawn(move || {
                for i in 0..50 {
                    let name = format!("dye-{}-{}", worker, i);
                    resolver.register(&name, 0.25).unwrap();
                    assert_eq!(resolver.resolve(Some(&name)), 0.25);
                    assert_eq!(resolver.resolve(Some("DAPI")), hues::DAPI);
                }
            });
        }
    });

    assert_eq!(resolver.override_count(), 200);
}

#[test]
fn test_global_instance_is_shared() {
    let name = "global-test-channel";
    ChannelHueResolver::global().register(name, 0.4).unwrap();
    assert_eq!(ChannelHueResolver::global().resolve(Some(name)), 0.4);
    assert_eq!(ChannelHueResolver::global().unregister(name), Some(0.4));
}
