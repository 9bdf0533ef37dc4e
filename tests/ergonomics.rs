use serde_json::json;
use spark_models::{cloned, collection, model, Collection, CollectionEvent, Model, ModelEvent, Observable};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn ergonomic_cloned_macro() {
    let audit = Model::new();
    let users = Collection::new();

    // Old way
    users.subscribe("push", {
        let audit = audit.clone();
        move |_: &CollectionEvent| {
            audit.set("old", true);
        }
    });

    // New way
    users.subscribe("push", cloned!(audit => move |_: &CollectionEvent| {
        audit.set("new", true);
    }));

    users.push(&Model::new());
    assert_eq!(audit.get("old"), Some(json!(true)));
    assert_eq!(audit.get("new"), Some(json!(true)));
}

#[test]
fn ergonomic_cloned_macro_many_handles() {
    let source = model!({ "count": 1 });
    let mirror = Model::new();
    let writes = Rc::new(Cell::new(0));

    source.subscribe("change:count", cloned!(mirror, writes => move |event: &ModelEvent| {
        if let Some(value) = event.value() {
            mirror.set("count", value.clone());
        }
        writes.set(writes.get() + 1);
    }));

    source.set("count", 2);
    source.set("other", 3);

    assert_eq!(mirror.get("count"), Some(json!(2)));
    assert_eq!(writes.get(), 1);
}

#[test]
fn model_macro_nests() {
    let user = model!({
        "name": "Ada",
        "address": { "city": "London", "lines": ["12 St James's Square"] }
    });

    assert_eq!(user.get("address.city"), Some(json!("London")));
    assert_eq!(user.get("address.lines[0]"), Some(json!("12 St James's Square")));
    assert!(user.has("name"));
}

#[test]
fn collection_macro_builds_models() {
    let points = collection![{ "x": 1, "y": 2 }, { "x": 3, "y": 4 }];

    let xs: Vec<_> = points.models().iter().map(|p| p.get("x")).collect();
    assert_eq!(xs, vec![Some(json!(1)), Some(json!(3))]);
}

#[test]
fn chaining_reads_naturally() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let todo = Model::new();
    todo.subscribe("change", cloned!(log => move |event: &ModelEvent| {
        log.borrow_mut().push(event.path().map(str::to_string));
    }));

    todo.set("title", "write docs").set("done", false).set("tags[0]", "docs");

    assert_eq!(
        *log.borrow(),
        vec![
            Some("title".to_string()),
            Some("done".to_string()),
            Some("tags[0]".to_string()),
        ]
    );
    assert_eq!(todo.to_value(), json!({ "title": "write docs", "done": false, "tags": ["docs"] }));
}
