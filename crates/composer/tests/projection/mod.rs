use composer::{
    ast::{
        column::ColumnProjection,
        join::{JoinType, TableJoin},
    },
    build_complex_columns, projection,
};
use std::{collections::HashSet, sync::Arc};

struct Empty;
projection! { Empty {} }

struct PlainComment;
projection! {
    PlainComment {
        Id,
        Body,
        CreatedAt,
    }
}

struct SingleJoin;
projection! {
    SingleJoin {
        Value => "[RightTable:RightCol:LeftCol].Value",
    }
}

struct CommentDetails;
projection! {
    CommentDetails {
        Id,
        AuthorName => "[UserAccount:Id:AuthorId].DisplayName",
        AuthorEmail => "[UserAccount:Id:AuthorId].Email",
        AuthorCity => "[UserAccount:Id:AuthorId].[Address:Id:AddressId].City",
        EditorName => "[UserAccount:Id:EditorId].DisplayName",
        ThreadTitle => "[CommentThread:Id:ThreadId].Title",
    }
}

struct AllInvalid;
projection! {
    AllInvalid {
        Lone => "[RightTable:RightCol:LeftCol]",
        Reversed => "SomeColumn.[RightTable:RightCol:LeftCol]",
    }
}

struct Concurrent;
projection! {
    Concurrent {
        Id,
        Name => "[UserAccount:Id:AuthorId].DisplayName",
    }
}

#[test]
fn test_empty_shape_is_absent_for_any_table() {
    assert!(build_complex_columns::<Empty>("Comments").is_none());
    assert!(build_complex_columns::<Empty>("").is_none());
}

#[test]
fn test_blank_source_table_is_absent() {
    assert!(build_complex_columns::<PlainComment>(" ").is_none());
}

#[test]
fn test_unannotated_fields_stay_on_source() {
    let data = build_complex_columns::<PlainComment>("Comments").unwrap();

    assert!(data.joins.is_empty());
    assert!(data.columns.iter().all(|c| c.table_alias == "Comments"));
    let names: Vec<_> = data.columns.iter().map(|c| c.column_name.as_str()).collect();
    assert_eq!(names, vec!["Id", "Body", "CreatedAt"]);
}

#[test]
fn test_single_join_end_to_end() {
    let data = build_complex_columns::<SingleJoin>("Source").unwrap();

    assert_eq!(
        data.joins,
        vec![TableJoin {
            join_type: JoinType::Left,
            left_table: "Source".to_string(),
            left_column: "LeftCol".to_string(),
            right_table: "RightTable".to_string(),
            right_column: "RightCol".to_string(),
            alias: "RigTab1".to_string(),
            segment: "[RightTable:RightCol:LeftCol]".to_string(),
        }]
    );
    assert_eq!(
        data.columns,
        vec![ColumnProjection {
            table_alias: "RigTab1".to_string(),
            column_name: "Value".to_string(),
            output_alias: Some("Value".to_string()),
        }]
    );
}

#[test]
fn test_join_count_matches_distinct_segments() {
    let data = build_complex_columns::<CommentDetails>("Comments").unwrap();

    let distinct: HashSet<_> = data.joins.iter().map(|j| j.segment.as_str()).collect();
    assert_eq!(data.joins.len(), 4);
    assert_eq!(distinct.len(), data.joins.len());

    let aliases: Vec<_> = data.joins.iter().map(|j| j.alias.as_str()).collect();
    assert_eq!(aliases, vec!["UseAcc1", "Add1", "UseAcc2", "ComThr1"]);

    let by_field: Vec<_> = data
        .columns
        .iter()
        .map(|c| (c.output_alias.as_deref(), c.table_alias.as_str()))
        .collect();
    assert_eq!(
        by_field,
        vec![
            (None, "Comments"),
            (Some("AuthorName"), "UseAcc1"),
            (Some("AuthorEmail"), "UseAcc1"),
            (Some("AuthorCity"), "Add1"),
            (Some("EditorName"), "UseAcc2"),
            (Some("ThreadTitle"), "ComThr1"),
        ]
    );
}

#[test]
fn test_repeated_builds_share_one_result() {
    let first = build_complex_columns::<CommentDetails>("Comments").unwrap();
    let second = build_complex_columns::<CommentDetails>("Comments").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn test_all_invalid_fields_yield_empty_result() {
    let data = build_complex_columns::<AllInvalid>("Comments").unwrap();
    assert!(data.columns.is_empty());
    assert!(data.joins.is_empty());
}

#[test]
fn test_concurrent_builds_agree() {
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| build_complex_columns::<Concurrent>("Comments").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for data in &results {
        assert_eq!(**data, *results[0]);
        assert_eq!(data.joins[0].alias, "UseAcc1");
    }
}
