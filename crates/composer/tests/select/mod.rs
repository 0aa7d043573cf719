use composer::{
    ast::{
        filter::{FilterGroup, FilterItem},
        join::{JoinType, TableJoin},
    },
    composer::QueryComposer,
    error::ComposeError,
    projection, render_join,
    settings::ComposerSettings,
};
use model::core::value::Value;

struct ThreadComment;
projection! {
    ThreadComment {
        Id,
        Body,
        AuthorName => "[UserAccount:Id:AuthorId].DisplayName",
    }
}

struct NoFields;
projection! { NoFields {} }

struct BrokenPaths;
projection! {
    BrokenPaths {
        Lone => "[UserAccount:Id:AuthorId]",
        Reversed => "DisplayName.[UserAccount:Id:AuthorId]",
    }
}

fn join(join_type: JoinType) -> TableJoin {
    TableJoin {
        join_type,
        left_table: "Source".to_string(),
        left_column: "LeftCol".to_string(),
        right_table: "RightTable".to_string(),
        right_column: "RightCol".to_string(),
        alias: "RigTab1".to_string(),
        segment: "[RightTable:RightCol:LeftCol]".to_string(),
    }
}

#[test]
fn test_render_join_by_dialect_name() {
    assert_eq!(
        render_join(&join(JoinType::Inner), "sqlserver").unwrap(),
        "INNER JOIN [RightTable] AS [RigTab1] WITH (NOLOCK) ON ([RigTab1].[RightCol] = [Source].[LeftCol])"
    );
    assert_eq!(
        render_join(&join(JoinType::Right), "postgres").unwrap(),
        r#"RIGHT JOIN "RightTable" AS "RigTab1" ON ("RigTab1"."RightCol" = "Source"."LeftCol")"#
    );
}

#[test]
fn test_render_join_failures() {
    assert!(matches!(
        render_join(&join(JoinType::None), "sqlserver"),
        Err(ComposeError::InvalidState(_))
    ));
    assert_eq!(
        render_join(&join(JoinType::Left), "sqlite"),
        Err(ComposeError::UnsupportedDialect("sqlite".to_string()))
    );
}

#[test]
fn test_select_with_filter_sql_server() {
    let composer = QueryComposer::default();
    let filter = FilterGroup::and(vec![FilterItem::equal("ThreadId", 12)]).with_alias("Comments");
    let (sql, params) = composer
        .select::<ThreadComment>("Comments", Some(&filter))
        .unwrap()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT [Comments].[Id], [Comments].[Body], [UseAcc1].[DisplayName] AS [AuthorName] \
         FROM [Comments] WITH (NOLOCK) \
         LEFT JOIN [UserAccount] AS [UseAcc1] WITH (NOLOCK) ON ([UseAcc1].[Id] = [Comments].[AuthorId]) \
         WHERE Comments.ThreadId = @FilterValue0"
    );
    assert_eq!(params["FilterValue0"], Value::Int(12));
}

#[test]
fn test_select_quoted_filter_postgres() {
    let settings = ComposerSettings {
        dialect: "postgres".to_string(),
        quote_filter_fields: true,
        ..Default::default()
    };
    let composer = QueryComposer::new(settings).unwrap();
    let filter = FilterGroup::or(vec![
        FilterItem::equal("Body", "hello"),
        FilterItem::not_equal("Body", Value::Null),
    ]);
    let (sql, params) = composer
        .select::<ThreadComment>("Comments", Some(&filter))
        .unwrap()
        .unwrap();

    assert!(sql.ends_with(r#"WHERE "Body" = @FilterValue0 OR "Body" != @FilterValue1"#));
    assert_eq!(params.len(), 2);
}

#[test]
fn test_select_absent_projection() {
    let composer = QueryComposer::default();
    assert_eq!(composer.select::<NoFields>("Comments", None).unwrap(), None);
    assert_eq!(composer.select::<ThreadComment>("", None).unwrap(), None);
}

#[test]
fn test_select_with_every_field_dropped_is_absent() {
    let composer = QueryComposer::default();
    let filter = FilterGroup::and(vec![FilterItem::equal("Id", 1)]);

    assert_eq!(
        composer.select::<BrokenPaths>("Comments", Some(&filter)).unwrap(),
        None
    );
    assert_eq!(composer.select::<BrokenPaths>("Comments", None).unwrap(), None);
}

#[test]
fn test_select_propagates_empty_filter() {
    let composer = QueryComposer::default();
    let err = composer
        .select::<ThreadComment>("Comments", Some(&FilterGroup::default()))
        .unwrap_err();
    assert!(matches!(err, ComposeError::InvalidArgument(_)));
}
