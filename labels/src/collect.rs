//! Partitioning of loaded classes into labeled and excepted.

use tracing::{debug, info};

use crate::model::{LabeledClass, OntologyClass};

/// Default number of classes between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Outcome of one pass over the ontology's classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Classes with at least one label, in iteration order.
    pub labeled: Vec<LabeledClass>,
    /// Names of classes without a label.
    pub excepted: Vec<String>,
    /// Total classes visited.
    pub seen: usize,
}

/// Visits every class once, keeping those with a label.
///
/// A class counts as labeled when any of its labels is non-empty; its label
/// list is then kept untouched, empty strings included. A class whose only
/// label is `""` is excepted. A `progress_interval` of zero disables progress
/// logging.
pub fn collect_labels<I>(classes: I, progress_interval: usize) -> Collection
where
    I: IntoIterator<Item = OntologyClass>,
{
    let mut collection = Collection::default();
    for class in classes {
        if class.has_label() {
            let OntologyClass { name, labels, .. } = class;
            collection.labeled.push(LabeledClass { name, labels });
        } else {
            debug!(class = %class.name, "class has no label");
            collection.excepted.push(class.name);
        }
        collection.seen += 1;
        if progress_interval > 0 && collection.seen % progress_interval == 0 {
            info!("processed {} classes", collection.seen);
        }
    }
    info!(
        seen = collection.seen,
        labeled = collection.labeled.len(),
        excepted = collection.excepted.len(),
        "collected class labels"
    );
    collection
}
