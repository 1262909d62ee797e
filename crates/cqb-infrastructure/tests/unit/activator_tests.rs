//! Type activation over a local catalog

use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, CandidatePool, Constructor, ParamSlot, TypeEntry};
use cqb_domain::error::{Error, Result};
use cqb_infrastructure::di::TypeActivator;

trait Widget: Send + Sync {
    fn label(&self) -> String;
}

impl std::fmt::Debug for dyn Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Widget").field(&self.label()).finish()
    }
}

struct Plain;

impl Widget for Plain {
    fn label(&self) -> String {
        "plain".to_string()
    }
}

struct Labelled(String);

impl Widget for Labelled {
    fn label(&self) -> String {
        self.0.clone()
    }
}

fn build_plain(_args: BoundArgs) -> Result<Arc<dyn Widget>> {
    Ok(Arc::new(Plain))
}

fn build_labelled(args: BoundArgs) -> Result<Arc<dyn Widget>> {
    Ok(Arc::new(Labelled(args.cloned::<String>(0)?)))
}

fn build_broken(_args: BoundArgs) -> Result<Arc<dyn Widget>> {
    Err(Error::invalid_argument("widget refused to start"))
}

static WIDGETS: [TypeEntry<dyn Widget>; 5] = [
    TypeEntry {
        name: "plain",
        description: "zero-parameter widget",
        constructors: &[Constructor {
            params: &[],
            build: build_plain,
        }],
    },
    TypeEntry {
        name: "labelled",
        description: "widget with a label",
        constructors: &[Constructor {
            params: &[ParamSlot::of::<String>("label")],
            build: build_labelled,
        }],
    },
    TypeEntry {
        name: "overloaded",
        description: "two constructors",
        constructors: &[
            Constructor {
                params: &[],
                build: build_plain,
            },
            Constructor {
                params: &[ParamSlot::of::<String>("label")],
                build: build_labelled,
            },
        ],
    },
    TypeEntry {
        name: "same-shaped",
        description: "two slots of one type",
        constructors: &[Constructor {
            params: &[ParamSlot::of::<String>("first"), ParamSlot::of::<String>("second")],
            build: build_labelled,
        }],
    },
    TypeEntry {
        name: "broken",
        description: "constructor always fails",
        constructors: &[Constructor {
            params: &[],
            build: build_broken,
        }],
    },
];

fn activator() -> TypeActivator<dyn Widget> {
    TypeActivator::new(&WIDGETS, "widget")
}

#[test]
fn test_zero_parameter_activation_returns_fresh_instances() {
    let first = activator().create("plain", &CandidatePool::new()).unwrap();
    let second = activator().create("plain", &CandidatePool::new()).unwrap();

    assert_eq!(first.label(), "plain");
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_candidate_reaches_constructor() {
    let pool = CandidatePool::new().with("hello".to_string());
    let widget = activator().create("labelled", &pool).unwrap();
    assert_eq!(widget.label(), "hello");
}

#[test]
fn test_unknown_name() {
    let err = activator().create("missing", &CandidatePool::new()).unwrap_err();
    assert!(matches!(err, Error::TypeNotFound { ref kind, ref name } if kind == "widget" && name == "missing"));
}

#[test]
fn test_more_than_one_constructor() {
    let err = activator().create("overloaded", &CandidatePool::new()).unwrap_err();
    assert!(matches!(err, Error::ConstructorAmbiguous { count: 2, .. }));
}

#[test]
fn test_same_shaped_slots_rejected_before_matching() {
    let pool = CandidatePool::new().with("x".to_string()).with("y".to_string());
    let err = activator().create("same-shaped", &pool).unwrap_err();
    assert!(matches!(err, Error::SignatureAmbiguous { .. }));
}

#[test]
fn test_builder_failure_becomes_activation_failure() {
    let err = activator().create("broken", &CandidatePool::new()).unwrap_err();
    match err {
        Error::ActivationFailure {
            type_name,
            message,
            source,
        } => {
            assert_eq!(type_name, "broken");
            assert!(message.contains("widget refused to start"));
            assert!(source.is_some());
        }
        other => panic!("expected ActivationFailure, got {other:?}"),
    }
}
