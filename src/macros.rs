// ============================================================================
// spark-models - Ergonomic Macros
// ============================================================================

/// Helper macro to clone variables into a move closure.
///
/// Listeners must be `'static`, so handles they use have to be cloned in
/// first. This removes that boilerplate.
///
/// # Usage
///
/// ```rust
/// use spark_models::{cloned, Collection, CollectionEvent, Model, Observable};
///
/// let users = Collection::new();
/// let audit = Model::new();
///
/// users.subscribe("push", cloned!(audit => move |_: &CollectionEvent| {
///     let seen = audit.get("pushed").and_then(|v| v.as_u64()).unwrap_or(0);
///     audit.set("pushed", seen + 1);
/// }));
///
/// users.push(&Model::new());
/// assert_eq!(audit.get("pushed"), Some(1.into()));
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}

/// Build a [`Model`](crate::Model) from a JSON object literal.
///
/// # Usage
///
/// ```rust
/// use spark_models::model;
///
/// let empty = model!();
/// let user = model!({ "name": "Ada", "langs": ["en", "fr"] });
///
/// assert!(empty.to_json().is_empty());
/// assert_eq!(user.get("langs[1]"), Some("fr".into()));
/// ```
#[macro_export]
macro_rules! model {
    () => {
        $crate::Model::new()
    };
    ({ $($tt:tt)* }) => {
        $crate::Model::with_attributes($crate::__private::attributes(
            $crate::__private::serde_json::json!({ $($tt)* }),
        ))
    };
}

/// Build a [`Collection`](crate::Collection) from JSON object literals.
///
/// # Usage
///
/// ```rust
/// use spark_models::collection;
///
/// let points = collection![{ "x": 1 }, { "x": 2 }];
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.at(1).unwrap().get("x"), Some(2.into()));
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($({ $($tt:tt)* }),+ $(,)?) => {
        $crate::Collection::from_items([
            $( $crate::__private::attributes($crate::__private::serde_json::json!({ $($tt)* })) ),+
        ])
    };
}
