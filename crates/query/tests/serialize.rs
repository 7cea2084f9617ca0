//! Serialization of query trees into parameter blocks.

use hek_query::{
    Attr, Block, CompareOp, Contains, EventType, ParamAttr, QueryError, SpatialRegion, TimeRange,
    Value, serialize,
};

fn spots(op: CompareOp, n: i64) -> Attr {
    ParamAttr::new("AR_NumSpots", op, n).into()
}

fn time(start: &str, end: &str) -> Attr {
    TimeRange::parse(start, end).unwrap().into()
}

fn event(code: &str) -> Attr {
    EventType::new(code).into()
}

fn block<const N: usize>(pairs: [(&str, Value); N]) -> Block {
    pairs.into_iter().collect()
}

#[test]
fn test_every_leaf_yields_one_block() {
    let leaves = vec![
        spots(CompareOp::Lt, 5),
        time("2011-01-01", "2011-01-02"),
        SpatialRegion::default().into(),
        event("ar"),
        Contains::new(["fl", "cd"]).into(),
    ];

    for leaf in leaves {
        let blocks = serialize(&leaf).unwrap();
        assert_eq!(blocks.len(), 1, "leaf {} produced {blocks:?}", leaf.kind());
    }
}

#[test]
fn test_time_range_block() {
    let blocks = serialize(&time("2011-01-01", "2011-01-02")).unwrap();
    assert_eq!(
        blocks,
        vec![block([
            ("event_starttime", "2011-01-01T00:00:00".into()),
            ("event_endtime", "2011-01-02T00:00:00".into()),
        ])]
    );
}

#[test]
fn test_and_numbers_comparisons() {
    let tree = Attr::And(vec![spots(CompareOp::Lt, 5), spots(CompareOp::Gt, 2)]);
    let blocks = serialize(&tree).unwrap();
    assert_eq!(
        blocks,
        vec![block([
            ("param0", "AR_NumSpots".into()),
            ("op0", "<".into()),
            ("value0", 5.into()),
            ("param1", "AR_NumSpots".into()),
            ("op1", ">".into()),
            ("value1", 2.into()),
        ])]
    );
}

#[test]
fn test_and_merges_children_last_writer_wins() {
    let tree = Attr::And(vec![
        time("2011-01-01", "2011-01-02"),
        SpatialRegion::default().into(),
        spots(CompareOp::Lt, 5),
        time("2012-06-01", "2012-06-02"),
        SpatialRegion::new(-10.0, -20.0, 10.0, 20.0, "stonyhurst").into(),
    ]);
    let blocks = serialize(&tree).unwrap();
    assert_eq!(blocks.len(), 1);

    let b = &blocks[0];
    assert_eq!(b.get("event_starttime"), Some(&Value::from("2012-06-01T00:00:00")));
    assert_eq!(b.get("event_endtime"), Some(&Value::from("2012-06-02T00:00:00")));
    assert_eq!(b.get("x1"), Some(&Value::Float(-10.0)));
    assert_eq!(b.get("y2"), Some(&Value::Float(20.0)));
    assert_eq!(b.get("event_coordsys"), Some(&Value::from("stonyhurst")));
    assert_eq!(b.get("param0"), Some(&Value::from("AR_NumSpots")));
    assert_eq!(b.len(), 2 + 5 + 3);
}

#[test]
fn test_sibling_contains_checks_do_not_collide() {
    let tree = Attr::And(vec![
        Contains::new(["fl", "cd"]).into(),
        spots(CompareOp::Lt, 5),
        Contains::new(["ar"]).into(),
        spots(CompareOp::Gt, 1),
    ]);
    let blocks = serialize(&tree).unwrap();
    let b = &blocks[0];

    assert!(b.is_contains_mode());
    assert_eq!(b.get("event_type0"), Some(&Value::from("fl")));
    assert_eq!(b.get("event_type1"), Some(&Value::from("cd")));
    assert_eq!(b.get("event_type2"), Some(&Value::from("ar")));
    assert_eq!(b.get("value0"), Some(&Value::from(5)));
    assert_eq!(b.get("value1"), Some(&Value::from(1)));
}

#[test]
fn test_or_block_count_is_sum_of_branches() {
    let branches = vec![
        Attr::And(vec![event("ar"), spots(CompareOp::Lt, 5)]),
        Attr::Or(vec![event("fl"), event("cd")]),
        time("2011-01-01", "2011-01-02"),
    ];
    let expected: usize = branches.iter().map(|b| serialize(b).unwrap().len()).sum();

    let blocks = serialize(&Attr::Or(branches)).unwrap();
    assert_eq!(blocks.len(), expected);
    assert_eq!(blocks.len(), 4);
}

#[test]
fn test_merged_event_types_make_one_request() {
    let tree = event("ar") | event("fl");
    assert_eq!(tree, event("ar,fl"));

    let blocks = serialize(&tree).unwrap();
    assert_eq!(blocks, vec![block([("event_type", "ar,fl".into())])]);
}

#[test]
fn test_event_type_with_contains_is_rejected() {
    let tree = Attr::And(vec![event("ar"), Contains::new(["fl", "cd"]).into()]);
    assert_eq!(serialize(&tree), Err(QueryError::MutuallyExclusiveSelection));

    let tree = Attr::And(vec![Contains::new(["fl", "cd"]).into(), event("ar")]);
    assert_eq!(serialize(&tree), Err(QueryError::MutuallyExclusiveSelection));
}

#[test]
fn test_or_nested_in_and_is_rejected() {
    let a = spots(CompareOp::Lt, 5);
    let b = event("fl");
    let c = time("2011-01-01", "2011-01-02");

    let tree = Attr::And(vec![Attr::Or(vec![a, b]), c]);
    assert!(matches!(
        serialize(&tree),
        Err(QueryError::UnsupportedCombination(_))
    ));
}

#[test]
fn test_operator_built_tree_distributes_instead_of_failing() {
    let tree = (event("ar") | Attr::from(Contains::new(["fl"]))) & time("2011-01-01", "2011-01-02");
    let blocks = serialize(&tree).unwrap();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].get("event_type"), Some(&Value::from("ar")));
    assert_eq!(blocks[1].get("event_type0"), Some(&Value::from("fl")));
    for b in &blocks {
        assert_eq!(b.get("event_starttime"), Some(&Value::from("2011-01-01T00:00:00")));
    }
}

#[test]
fn test_error_in_one_branch_fails_whole_call() {
    let tree = Attr::Or(vec![
        event("ar"),
        Attr::And(vec![event("fl"), Contains::new(["cd"]).into()]),
    ]);
    assert_eq!(serialize(&tree), Err(QueryError::MutuallyExclusiveSelection));
}

#[test]
fn test_serialization_is_repeatable() {
    let tree = Attr::Or(vec![
        Attr::And(vec![
            Contains::new(["fl", "cd"]).into(),
            spots(CompareOp::Lt, 5),
        ]),
        Attr::And(vec![event("ar"), spots(CompareOp::Ge, 2)]),
    ]);

    let first = serde_json::to_string(&serialize(&tree).unwrap()).unwrap();
    let second = serde_json::to_string(&serialize(&tree).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_calls_do_not_share_counters() {
    let tree = Attr::And(vec![spots(CompareOp::Lt, 5), spots(CompareOp::Gt, 2)]);
    let expected = serialize(&tree).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| serialize(&tree).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_blocks_render_as_json_objects() {
    let tree = Attr::And(vec![event("ar"), spots(CompareOp::Lt, 5)]);
    let json = serde_json::to_value(serialize(&tree).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "event_type": "ar",
            "op0": "<",
            "param0": "AR_NumSpots",
            "value0": 5
        }])
    );
}
