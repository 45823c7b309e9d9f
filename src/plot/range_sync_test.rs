use std::collections::HashMap;

use super::*;

fn plot(start: f64, end: f64) -> Model {
    Model::Plot { x_range: Range { start, end } }
}

fn button(label: &str) -> Model {
    Model::Button { label: label.to_owned(), disabled: false, css_classes: Vec::new() }
}

fn registry() -> HashMap<String, Model> {
    HashMap::from([
        ("plot-1".to_owned(), plot(0.0, 100.0)),
        ("plot-2".to_owned(), plot(5.0, 50.0)),
        ("plot-3".to_owned(), plot(-3.0, 7.0)),
        ("btn-sync".to_owned(), button(SYNC_BUTTON_LABEL)),
        ("btn-reset".to_owned(), button("Reset")),
        ("hover-tool".to_owned(), Model::Other),
    ])
}

#[test]
fn broadcast_reaches_every_plot() {
    let mut models = registry();
    broadcast_range(Range { start: 2.5, end: 9.0 }, &mut models);

    for id in ["plot-1", "plot-2", "plot-3"] {
        let Model::Plot { x_range } = &models[id] else {
            panic!("{id} should stay a plot");
        };
        assert_eq!(*x_range, Range { start: 2.5, end: 9.0 });
    }
}

#[test]
fn broadcast_disables_buttons_and_hides_only_sync() {
    let mut models = registry();
    broadcast_range(Range { start: 2.5, end: 9.0 }, &mut models);

    let Model::Button { disabled, css_classes, .. } = &models["btn-sync"] else {
        panic!("sync button missing");
    };
    assert!(disabled);
    assert_eq!(css_classes, &vec![HIDDEN_CLASS.to_owned()]);

    let Model::Button { disabled, css_classes, .. } = &models["btn-reset"] else {
        panic!("reset button missing");
    };
    assert!(disabled);
    assert!(css_classes.is_empty(), "only the sync button is hidden");
}

#[test]
fn broadcast_skips_other_entities() {
    let mut models = registry();
    broadcast_range(Range { start: 1.0, end: 2.0 }, &mut models);
    assert_eq!(models["hover-tool"], Model::Other);
}

#[test]
fn sync_label_match_is_exact() {
    let mut models = HashMap::from([
        ("trimmed".to_owned(), button("Sync")),
        ("padded".to_owned(), button(" Sync")),
    ]);
    broadcast_range(Range { start: 0.0, end: 1.0 }, &mut models);

    let Model::Button { css_classes, .. } = &models["trimmed"] else {
        panic!("button missing");
    };
    assert!(css_classes.is_empty(), "leading space is significant");

    let Model::Button { css_classes, .. } = &models["padded"] else {
        panic!("button missing");
    };
    assert_eq!(css_classes.len(), 1);
}

#[test]
fn rebroadcast_is_harmless() {
    let mut models = registry();
    broadcast_range(Range { start: 2.5, end: 9.0 }, &mut models);
    let after_first = models.clone();

    broadcast_range(Range { start: 2.5, end: 9.0 }, &mut models);
    assert_eq!(models, after_first);
}
