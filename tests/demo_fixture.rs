//! End-to-end checks of the default demo run.
//!
//! The default run must reproduce the canonical transcript byte for byte,
//! and the equality checks behind it must come out in a fixed order.

use aliasing::prelude::*;

const FIXTURE: &str = "\
a = 1, b = 1
equal = true
== = true
------ after -------
a = 1, b = 2
equal = false
== = false


ma['a']=b, ma['b']=<absent>
mb['a']=b, mb['b']=<absent>
------ after ------

ma['a']=b, ma['b']=c
mb['a']=b, mb['b']=c


equal = true, true
== = true, false
";

#[test]
fn default_run_matches_fixture() {
    let output = DemoRunner::default().run_to_string();
    assert_eq!(output, FIXTURE);
}

#[test]
fn default_run_equality_sequence() {
    let mut transcript = Transcript::new();
    DemoRunner::default().run(&mut transcript);

    let observed: Vec<(&str, bool, bool)> = transcript
        .checks()
        .iter()
        .map(|c| (c.label.as_str(), c.value_equal, c.identity_equal))
        .collect();

    assert_eq!(
        observed,
        [
            ("a vs b", true, true),
            ("a vs b", false, false),
            ("ma vs mb", true, true),
            ("ma vs mc", true, false),
        ]
    );
}

#[test]
fn default_run_is_deterministic() {
    let first = DemoRunner::default().run_to_string();
    let second = DemoRunner::default().run_to_string();
    assert_eq!(first, second);
}

#[test]
fn full_run_appends_handle_slots() {
    let config = DemoConfig::builder().all_demos().build();
    let output = DemoRunner::new(config).run_to_string();

    assert!(output.starts_with(FIXTURE));
    let tail = &output[FIXTURE.len()..];
    assert!(tail.starts_with("\n\nslot(ma) == slot(mb) = false\n"));
    assert!(tail.contains("ma['d']=<absent>, mc['d']=e"));
}

#[test]
fn config_file_drives_runner() {
    let config = DemoConfig::from_yaml(
        "demos: [string-map]\noutput:\n  absent_sentinel: \"null\"\n",
    )
    .expect("valid config");
    let output = DemoRunner::new(config).run_to_string();
    assert!(output.starts_with("ma['a']=b, ma['b']=null\nmb['a']=b, mb['b']=null\n"));
}

// Aliasing properties at the library surface.

#[test]
fn alias_mutation_visible_both_ways() {
    let x = SharedMap::new();
    let y = x.alias();
    x.insert("k", "1");
    y.insert("j", "2");
    assert_eq!(x.snapshot(), y.snapshot());
    assert_eq!(x.len(), 2);
    assert!(x.identity_eq(&y));
}

#[test]
fn rebind_leaves_other_names_alone() {
    let ma = SharedMap::from_pairs([("a", "b")]);
    let mut mb = ma.alias();
    assert!(mb.identity_eq(&ma));
    mb = SharedMap::new();
    mb.insert("z", "z");
    assert_eq!(ma.get("z"), None);
    assert_eq!(ma.get("a").as_deref(), Some("b"));
    assert_eq!(ma.alias_count(), 1);
}

#[test]
fn boxed_equal_values_distinct_instances() {
    let v1 = BoxedNumber::new(1);
    let v2 = BoxedNumber::new(1);
    assert!(v1.value_eq(&v2));
    assert!(!v1.identity_eq(&v2));
}
