//! Integration tests for strut-types.

use strut_types::{Edge, StrutError};

// ─── Edge Tests ───────────────────────────────────────────────

#[test]
fn edge_normalizes_order() {
    let e = Edge::new(5, 2).unwrap();
    assert_eq!(e.endpoints(), (2, 5));
    assert_eq!(e.i(), 2);
    assert_eq!(e.j(), 5);
}

#[test]
fn edge_equality_is_unordered() {
    let a = Edge::new(1, 4).unwrap();
    let b = Edge::new(4, 1).unwrap();
    assert_eq!(a, b);
}

#[test]
fn self_loop_is_rejected() {
    assert!(Edge::new(3, 3).is_err());
}

#[test]
fn edge_ordering_follows_endpoints() {
    let mut edges = vec![
        Edge::new(2, 3).unwrap(),
        Edge::new(0, 2).unwrap(),
        Edge::new(0, 1).unwrap(),
        Edge::new(1, 3).unwrap(),
    ];
    edges.sort();
    let pairs: Vec<(usize, usize)> = edges.iter().map(|e| e.endpoints()).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
}

#[test]
fn incidence_and_other_endpoint() {
    let e = Edge::new(7, 2).unwrap();
    assert!(e.is_incident_to(2));
    assert!(e.is_incident_to(7));
    assert!(!e.is_incident_to(5));
    assert_eq!(e.other_endpoint(2), Some(7));
    assert_eq!(e.other_endpoint(7), Some(2));
    assert_eq!(e.other_endpoint(4), None);
}

#[test]
fn edge_is_serializable() {
    let e = Edge::new(0, 9).unwrap();
    let json = serde_json::to_string(&e).unwrap();
    let recovered: Edge = serde_json::from_str(&json).unwrap();
    assert_eq!(e, recovered);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = StrutError::InvalidEdge("vertex 9 does not exist".into());
    assert!(err.to_string().contains("vertex 9"));
}

#[test]
fn dimension_error_display() {
    let err = StrutError::InvalidDimension("dimension must be at least 1".into());
    assert!(err.to_string().contains("at least 1"));
}
