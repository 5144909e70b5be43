use dpi_domain::capabilities::Capabilities;

#[test]
fn detected_globals_collect_into_flags() {
    let caps: Capabilities = ["IntersectionObserver", "AOS", "jQuery", "scrollBehavior"]
        .into_iter()
        .map(Capabilities::from)
        .collect();

    assert_eq!(caps, Capabilities::BROWSER | Capabilities::ANIMATE_ON_SCROLL);
    assert!(!caps.contains(Capabilities::PARTICLES));
}

#[test]
fn flags_travel_as_bits() {
    let caps = Capabilities::INTERSECTION_OBSERVER | Capabilities::MAP_TILES;
    let json = serde_json::to_string(&caps).expect("serialize");
    assert_eq!(json, "9");

    let back: Capabilities = serde_json::from_str("4294967295").expect("deserialize");
    assert_eq!(back, Capabilities::all());
    assert_eq!(Capabilities::default(), Capabilities::BROWSER);
}
