use cpm_schedule::{ActivityRegistry, RegistryError};

#[test]
fn every_rejection_kind_leaves_registry_unchanged() {
    let mut registry = ActivityRegistry::new();
    registry.add_activity("A", 2, Vec::<String>::new()).unwrap();
    registry.add_activity("B", 3, ["A"]).unwrap();

    let attempts: Vec<(&str, i64, Vec<&str>, RegistryError)> = vec![
        ("A", 1, vec![], RegistryError::DuplicateName { name: "A".into() }),
        (
            "C",
            1,
            vec!["A", "Q"],
            RegistryError::UnknownPredecessor {
                activity: "C".into(),
                predecessor: "Q".into(),
            },
        ),
        ("C", 1, vec!["C"], RegistryError::SelfReference { name: "C".into() }),
        (
            "C",
            -4,
            vec!["A"],
            RegistryError::InvalidDuration {
                name: "C".into(),
                duration: -4,
            },
        ),
        (
            "C",
            1,
            vec!["B", "B"],
            RegistryError::DuplicatePredecessor {
                activity: "C".into(),
                predecessor: "B".into(),
            },
        ),
        ("", 1, vec![], RegistryError::EmptyName),
    ];

    for (name, duration, preds, expected) in attempts {
        assert_eq!(registry.add_activity(name, duration, preds), Err(expected));
        assert_eq!(registry.len(), 2);
    }
    assert_eq!(registry.resolve("C").unwrap_err().kind(), "unknown_activity");
}

#[test]
fn all_preserves_insertion_order() {
    let mut registry = ActivityRegistry::new();
    for name in ["Dig", "Pour", "Frame", "Roof"] {
        registry.add_activity(name, 1, Vec::<String>::new()).unwrap();
    }
    let names: Vec<&str> = registry.all().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Dig", "Pour", "Frame", "Roof"]);
    assert_eq!(registry.resolve("Frame").unwrap(), 2);
    assert!(registry.all().iter().all(|a| !a.is_scheduled()));
}

#[test]
fn error_messages_name_the_offending_activity() {
    let mut registry = ActivityRegistry::new();
    let err = registry.add_activity("X", 1, ["Y"]).unwrap_err();
    assert!(err.to_string().contains("'X'"));
    assert!(err.to_string().contains("'Y'"));
}
