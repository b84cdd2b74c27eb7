use super::*;
use prefixfree_probe::profile::builtin;

fn host(name: &str) -> ProfileHost {
    ProfileHost::new(builtin::by_name(name).unwrap().unwrap())
}

#[test]
fn initialize_tags_root_with_prefix() {
    let mut host = host("legacy-webkit");
    let pf = PrefixFree::initialize(&mut host);

    assert!(pf.is_active());
    assert_eq!(pf.prefix().map(Prefix::as_str), Some("-webkit-"));
    assert_eq!(host.root_classes(), ["-webkit-"]);
    assert!(!host.probe_sheet_attached());
}

#[test]
fn initializing_twice_tags_twice() {
    let mut host = host("legacy-ms");
    PrefixFree::initialize(&mut host);
    PrefixFree::initialize(&mut host);
    assert_eq!(host.root_classes(), ["-ms-", "-ms-"]);
}

#[test]
fn inert_host_is_identity() {
    let mut host = ProfileHost::new(HostProfile {
        computed_style: false,
        ..HostProfile::default()
    });
    let pf = PrefixFree::initialize(&mut host);

    assert!(!pf.is_active());
    assert!(pf.prefix().is_none());
    assert!(pf.capabilities().is_none());
    assert!(host.root_classes().is_empty());

    let css = "a { transform: none; display: flex; -*-appearance: none }";
    assert_eq!(pf.prefix_css(css, true), css);
    assert_eq!(pf.property("transform"), "transform");
    assert_eq!(pf.value("flex", "display"), "flex");
    assert_eq!(pf.prefix_selector("::selection"), "::selection");
    assert_eq!(pf.prefix_property("user-select", false), "user-select");
    assert_eq!(pf.prefix_property("user-select", true), "userSelect");
}

#[test]
fn legacy_webkit_end_to_end() {
    let mut host = host("legacy-webkit");
    let pf = PrefixFree::initialize(&mut host);

    assert_eq!(
        pf.prefix_css(
            "a { transform: scale(2); display: flex; cursor: grab; \
             background: linear-gradient(0deg, red, blue); }",
            false
        ),
        "a { -webkit-transform: scale(2); display: -webkit-flex; cursor: -webkit-grab; \
         background: -webkit-linear-gradient(90deg, red, blue); }"
    );
    assert_eq!(
        pf.prefix_css("input::placeholder { color: gray }", true),
        "input::-webkit-input-placeholder { color: gray }"
    );
    assert_eq!(pf.property("user-select"), "-webkit-user-select");
    assert_eq!(pf.property("color"), "color");
    assert_eq!(pf.value("transform 1s", "transition"), "-webkit-transform 1s");
    assert_eq!(pf.value("calc(1px + 1em)", "width"), "-webkit-calc(1px + 1em)");
    assert_eq!(pf.prefix_selector(":fullscreen"), ":-webkit-full-screen");
    assert_eq!(pf.prefix_property("transform", true), "WebkitTransform");
}

#[test]
fn legacy_ms_transforms_are_prefixed() {
    let mut host = host("legacy-ms");
    let pf = PrefixFree::initialize(&mut host);
    assert_eq!(
        pf.prefix_css("div{transform:rotate(1deg);transform-origin:0 0}", false),
        "div{-ms-transform:rotate(1deg);-ms-transform-origin:0 0}"
    );
    assert_eq!(
        pf.prefix_css("@viewport { width: device-width }", true),
        "@-ms-viewport { width: device-width }"
    );
}

#[test]
fn modern_host_leaves_standard_css_alone() {
    let mut host = host("modern");
    let pf = PrefixFree::initialize(&mut host);
    let css = "a { transform: none; display: flex; background: linear-gradient(30deg, red, blue) }";
    assert_eq!(pf.prefix_css(css, true), css);
    assert_eq!(pf.property("line-clamp"), "-webkit-line-clamp");
}

#[test]
fn from_config_applies_probe_and_rewrite_settings() {
    let mut config = PrefixFreeConfig::default();
    config.rewrite.value_properties = vec!["transition".into()];

    let mut host = host("legacy-webkit");
    let pf = PrefixFree::from_config(&mut host, &config);

    assert_eq!(pf.value("transform", "will-change"), "transform");
    assert_eq!(pf.value("transform", "transition"), "-webkit-transform");
}

#[test]
fn from_capabilities_skips_probing() {
    let caps = Capabilities::new(Prefix::from_vendor("zzz")).with_properties(["transform"]);
    let pf = PrefixFree::from_capabilities(caps).unwrap();
    assert_eq!(pf.property("transform"), "-zzz-transform");
    assert_eq!(pf.capabilities().map(|c| c.sets.properties.len()), Some(1));
}
